use serde::Serialize;
use std::fmt;

/// A single labeled, read-only value on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardField {
    pub label: String,
    pub value: String,
}

impl CardField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled group of fields, e.g. the aliases of a yeast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSection {
    pub label: String,
    pub entries: Vec<CardField>,
}

/// Read-only presentation of a single entity.
pub trait CardRenderer {
    fn render(&self) -> Card;
}

/// Presentation of exactly one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<CardField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<CardSection>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(CardField::new(label, value));
        self
    }

    pub fn with_section(mut self, section: CardSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    pub fn section(&self, label: &str) -> Option<&CardSection> {
        self.sections.iter().find(|s| s.label == label)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌ {}", self.title)?;
        for field in &self.fields {
            writeln!(f, "│ {}: {}", field.label, field.value)?;
        }
        for section in &self.sections {
            writeln!(f, "│ {}", section.label)?;
            for entry in &section.entries {
                writeln!(f, "│   {}: {}", entry.label, entry.value)?;
            }
        }
        write!(f, "└")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_fields_then_sections() {
        let card = Card::new("California Ale")
            .with_field("brand", "White Labs")
            .with_section(CardSection {
                label: "aliases".to_string(),
                entries: vec![CardField::new("alias", "WLP001")],
            });

        assert_eq!(
            card.to_string(),
            "┌ California Ale\n│ brand: White Labs\n│ aliases\n│   alias: WLP001\n└"
        );
    }

    #[test]
    fn test_title_only_card_serializes_without_empty_lists() {
        let json = serde_json::to_value(Card::new("Cascade")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Cascade"}));
    }
}
