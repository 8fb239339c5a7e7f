use crate::app::cards::{Card, CardRenderer};
use crate::domain::model::Hop;

pub struct HopCard<'a> {
    hop: &'a Hop,
}

impl<'a> HopCard<'a> {
    pub fn new(hop: &'a Hop) -> Self {
        Self { hop }
    }
}

impl CardRenderer for HopCard<'_> {
    fn render(&self) -> Card {
        Card::new(&self.hop.name)
    }
}
