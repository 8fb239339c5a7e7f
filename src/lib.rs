pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::HttpTransport;
pub use app::cards::{
    Card, CardRenderer, CatalogView, FermentableCard, HopCard, OutputFormat, YeastCard,
};
pub use config::{toml_config::TomlConfig, CatalogConfig};
pub use crate::core::catalog::{Catalog, CatalogState, LoadState, Settled};
pub use crate::core::service::{CollectionService, FermentableService, HopService, YeastService};
pub use domain::model::{Entity, Fermentable, Hop, Unit, Yeast};
pub use domain::ports::{ConfigProvider, Transport};
pub use utils::error::{CatalogError, FetchError, FetchErrorKind, Result};
