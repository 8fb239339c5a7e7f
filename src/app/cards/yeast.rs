use crate::app::cards::{Card, CardField, CardRenderer, CardSection};
use crate::domain::model::Yeast;

pub struct YeastCard<'a> {
    yeast: &'a Yeast,
}

impl<'a> YeastCard<'a> {
    pub fn new(yeast: &'a Yeast) -> Self {
        Self { yeast }
    }
}

impl CardRenderer for YeastCard<'_> {
    fn render(&self) -> Card {
        let card = Card::new(&self.yeast.name)
            .with_field("brand", &self.yeast.brand)
            .with_field("attenuation", self.yeast.attenuation.to_string());

        if self.yeast.aliases.is_empty() {
            return card;
        }

        card.with_section(CardSection {
            label: "aliases".to_string(),
            entries: self
                .yeast
                .aliases
                .iter()
                .map(|alias| CardField::new("alias", alias))
                .collect(),
        })
    }
}
