use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A catalog record that can be built from one raw JSON element of its
/// collection.
pub trait Entity: DeserializeOwned + Send + Sync + 'static {
    /// Collection name used in logs and views.
    const COLLECTION: &'static str;

    /// Every field is required; a missing or mistyped field is an error.
    fn from_record(record: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(record)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    pub id: i64,
    pub name: String,
}

/// A magnitude paired with its measurement label, e.g. `37 °P`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fermentable {
    pub id: i64,
    pub name: String,
    pub potential: Unit,
    pub colour: Unit,
}

/// Wire shape of a yeast record.
#[derive(Debug, Deserialize)]
struct YeastRecord {
    id: i64,
    brand: String,
    name: String,
    aliases: Vec<String>,
    attenuation: f64,
}

/// A yeast strain.
///
/// `attenuation_percentage` is computed once in [`Yeast::new`], from the
/// fully decoded `attenuation`. It is a stored value: assigning to
/// `attenuation` later does not update it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "YeastRecord")]
pub struct Yeast {
    pub id: i64,
    pub brand: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub attenuation: f64,
    pub attenuation_percentage: f64,
}

impl Yeast {
    pub fn new(id: i64, brand: String, name: String, aliases: Vec<String>, attenuation: f64) -> Self {
        Self {
            id,
            brand,
            name,
            aliases,
            attenuation,
            attenuation_percentage: attenuation * 100.0,
        }
    }
}

impl From<YeastRecord> for Yeast {
    fn from(record: YeastRecord) -> Self {
        Yeast::new(
            record.id,
            record.brand,
            record.name,
            record.aliases,
            record.attenuation,
        )
    }
}

impl Entity for Hop {
    const COLLECTION: &'static str = "hops";
}

impl Entity for Fermentable {
    const COLLECTION: &'static str = "fermentables";
}

impl Entity for Yeast {
    const COLLECTION: &'static str = "yeasts";
}
