use crate::domain::model::{Entity, Fermentable, Hop, Yeast};
use crate::domain::ports::Transport;
use crate::utils::error::{CatalogError, FetchError, Result};
use std::marker::PhantomData;
use std::sync::Arc;

/// Turns one raw record into an entity.
pub type RecordMapper<E> = fn(serde_json::Value) -> Result<E>;

/// Fetch service for one collection, bound to a fixed endpoint.
///
/// The three catalog services differ only in endpoint and target entity,
/// so they are all this type (see [`HopService`], [`FermentableService`],
/// [`YeastService`]).
pub struct CollectionService<E: Entity, T: Transport> {
    transport: Arc<T>,
    service_url: String,
    mapper: RecordMapper<E>,
    _entity: PhantomData<fn() -> E>,
}

pub type HopService<T> = CollectionService<Hop, T>;
pub type FermentableService<T> = CollectionService<Fermentable, T>;
pub type YeastService<T> = CollectionService<Yeast, T>;

impl<E: Entity, T: Transport> CollectionService<E, T> {
    pub fn new(transport: Arc<T>, service_url: impl Into<String>) -> Self {
        Self::with_mapper(transport, service_url, E::from_record)
    }

    pub fn with_mapper(
        transport: Arc<T>,
        service_url: impl Into<String>,
        mapper: RecordMapper<E>,
    ) -> Self {
        Self {
            transport,
            service_url: service_url.into(),
            mapper,
            _entity: PhantomData,
        }
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Fetches the whole collection, preserving response order.
    ///
    /// Any failure is logged once and returned; an empty array is an empty
    /// collection, not an error.
    pub async fn get_collection(&self) -> std::result::Result<Vec<E>, FetchError> {
        match self.fetch().await {
            Ok(entities) => Ok(entities),
            Err(e) => {
                tracing::error!(
                    kind = %e.kind,
                    "Error deserializing {} due to \"{}\"",
                    E::COLLECTION,
                    e
                );
                Err(e)
            }
        }
    }

    async fn fetch(&self) -> std::result::Result<Vec<E>, FetchError> {
        let body = self.transport.get_json(&self.service_url).await?;

        let records = match body {
            serde_json::Value::Array(records) => records,
            other => {
                return Err(FetchError::parse(
                    &self.service_url,
                    format!("expected a JSON array, got {}", json_type_name(&other)),
                ))
            }
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                (self.mapper)(record).map_err(|e| self.record_error(index, e))
            })
            .collect()
    }

    fn record_error(&self, index: usize, error: CatalogError) -> FetchError {
        FetchError::parse(
            &self.service_url,
            format!("record {} is not a valid {} entry: {}", index, E::COLLECTION, error),
        )
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
