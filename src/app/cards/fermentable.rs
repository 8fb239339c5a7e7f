use crate::app::cards::{Card, CardRenderer};
use crate::domain::model::{Fermentable, Unit};

pub struct FermentableCard<'a> {
    fermentable: &'a Fermentable,
}

impl<'a> FermentableCard<'a> {
    pub fn new(fermentable: &'a Fermentable) -> Self {
        Self { fermentable }
    }
}

/// `value unit`, e.g. `37 °P`.
fn measure(unit: &Unit) -> String {
    format!("{} {}", unit.value, unit.unit)
}

impl CardRenderer for FermentableCard<'_> {
    fn render(&self) -> Card {
        Card::new(&self.fermentable.name)
            .with_field("potential", measure(&self.fermentable.potential))
            .with_field("colour", measure(&self.fermentable.colour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pale_malt() -> Fermentable {
        Fermentable {
            id: 1,
            name: "Pale Malt".to_string(),
            potential: Unit {
                value: 37.0,
                unit: "°P".to_string(),
            },
            colour: Unit {
                value: 2.5,
                unit: "°L".to_string(),
            },
        }
    }

    #[test]
    fn test_fermentable_card_pairs_value_and_unit() {
        let fermentable = pale_malt();
        let card = FermentableCard::new(&fermentable).render();

        assert_eq!(card.title, "Pale Malt");
        assert_eq!(card.field("potential"), Some("37 °P"));
        assert_eq!(card.field("colour"), Some("2.5 °L"));
        assert!(card.sections.is_empty());
    }
}
