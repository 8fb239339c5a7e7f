pub mod catalog;
pub mod service;

pub use crate::domain::model::{Entity, Fermentable, Hop, Unit, Yeast};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::{FetchError, Result};
