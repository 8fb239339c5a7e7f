pub mod card;
pub mod fermentable;
pub mod hop;
pub mod view;
pub mod yeast;

pub use card::{Card, CardField, CardRenderer, CardSection};
pub use fermentable::FermentableCard;
pub use hop::HopCard;
pub use view::{CatalogView, OutputFormat};
pub use yeast::YeastCard;
