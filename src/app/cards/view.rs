use crate::app::cards::{Card, CardRenderer, FermentableCard, HopCard, YeastCard};
use crate::core::catalog::{CatalogState, LoadState, Settled};
use crate::domain::model::{Fermentable, Hop, Yeast};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct RenderedCatalog {
    hops: Vec<Card>,
    fermentables: Vec<Card>,
    yeasts: Vec<Card>,
}

#[derive(Debug, Serialize)]
struct RenderedCollection<'a> {
    collection: &'a str,
    loaded: bool,
    cards: Vec<Card>,
}

/// Renders every loaded entity of a catalog as a card, grouped by collection.
/// Unloaded or failed collections contribute zero cards.
pub struct CatalogView<'a> {
    state: &'a CatalogState,
}

impl<'a> CatalogView<'a> {
    pub fn new(state: &'a CatalogState) -> Self {
        Self { state }
    }

    pub fn hop_cards(&self) -> Vec<Card> {
        hop_cards(&self.state.hops)
    }

    pub fn fermentable_cards(&self) -> Vec<Card> {
        fermentable_cards(&self.state.fermentables)
    }

    pub fn yeast_cards(&self) -> Vec<Card> {
        yeast_cards(&self.state.yeasts)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// Renders one collection on its own, as soon as it has settled.
    pub fn render_settled(settled: Settled<'_>, format: OutputFormat) -> Result<String> {
        let (heading, loaded, cards) = match settled {
            Settled::Hops(state) => ("Hops", state.is_loaded(), hop_cards(state)),
            Settled::Fermentables(state) => {
                ("Fermentables", state.is_loaded(), fermentable_cards(state))
            }
            Settled::Yeasts(state) => ("Yeasts", state.is_loaded(), yeast_cards(state)),
        };

        match format {
            OutputFormat::Text => Ok(text_group(heading, loaded, cards)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&RenderedCollection {
                collection: settled.collection(),
                loaded,
                cards,
            })?),
        }
    }

    fn render_json(&self) -> Result<String> {
        let rendered = RenderedCatalog {
            hops: self.hop_cards(),
            fermentables: self.fermentable_cards(),
            yeasts: self.yeast_cards(),
        };
        Ok(serde_json::to_string_pretty(&rendered)?)
    }

    fn render_text(&self) -> String {
        [
            text_group("Hops", self.state.hops.is_loaded(), self.hop_cards()),
            text_group(
                "Fermentables",
                self.state.fermentables.is_loaded(),
                self.fermentable_cards(),
            ),
            text_group("Yeasts", self.state.yeasts.is_loaded(), self.yeast_cards()),
        ]
        .concat()
    }
}

fn hop_cards(state: &LoadState<Hop>) -> Vec<Card> {
    state.items().iter().map(|hop| HopCard::new(hop).render()).collect()
}

fn fermentable_cards(state: &LoadState<Fermentable>) -> Vec<Card> {
    state
        .items()
        .iter()
        .map(|fermentable| FermentableCard::new(fermentable).render())
        .collect()
}

fn yeast_cards(state: &LoadState<Yeast>) -> Vec<Card> {
    state
        .items()
        .iter()
        .map(|yeast| YeastCard::new(yeast).render())
        .collect()
}

fn text_group(heading: &str, loaded: bool, cards: Vec<Card>) -> String {
    let title = if loaded {
        format!("{} ({})", heading, cards.len())
    } else {
        format!("{} (not loaded)", heading)
    };

    let mut lines = vec![title];
    lines.extend(cards.iter().map(Card::to_string));
    lines.join("\n") + "\n\n"
}
