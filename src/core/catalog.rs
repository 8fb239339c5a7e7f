use crate::adapters::HttpTransport;
use crate::core::service::{FermentableService, HopService, YeastService};
use crate::domain::model::{Entity, Fermentable, Hop, Yeast};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{FetchError, Result};
use std::cell::RefCell;
use std::sync::Arc;

/// Display state of one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<E> {
    Unloaded,
    Loaded(Vec<E>),
    Failed(FetchError),
}

impl<E> Default for LoadState<E> {
    fn default() -> Self {
        LoadState::Unloaded
    }
}

impl<E> LoadState<E> {
    /// Entities to display; empty until the collection has loaded.
    pub fn items(&self) -> &[E] {
        match self {
            LoadState::Loaded(items) => items,
            LoadState::Unloaded | LoadState::Failed(_) => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub hops: LoadState<Hop>,
    pub fermentables: LoadState<Fermentable>,
    pub yeasts: LoadState<Yeast>,
}

impl CatalogState {
    /// Failed collections as `(collection, error)` pairs.
    pub fn failures(&self) -> Vec<(&'static str, &FetchError)> {
        let mut failures = Vec::new();
        if let Some(e) = self.hops.error() {
            failures.push((Hop::COLLECTION, e));
        }
        if let Some(e) = self.fermentables.error() {
            failures.push((Fermentable::COLLECTION, e));
        }
        if let Some(e) = self.yeasts.error() {
            failures.push((Yeast::COLLECTION, e));
        }
        failures
    }
}

/// A collection slot that has just been written.
#[derive(Debug, Clone, Copy)]
pub enum Settled<'a> {
    Hops(&'a LoadState<Hop>),
    Fermentables(&'a LoadState<Fermentable>),
    Yeasts(&'a LoadState<Yeast>),
}

impl Settled<'_> {
    pub fn collection(&self) -> &'static str {
        match self {
            Settled::Hops(_) => Hop::COLLECTION,
            Settled::Fermentables(_) => Fermentable::COLLECTION,
            Settled::Yeasts(_) => Yeast::COLLECTION,
        }
    }
}

/// Aggregator over the three collection services.
pub struct Catalog<T: Transport> {
    hop_service: HopService<T>,
    fermentable_service: FermentableService<T>,
    yeast_service: YeastService<T>,
    state: CatalogState,
    initialized: bool,
}

impl Catalog<HttpTransport> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let transport = Arc::new(HttpTransport::with_timeout(config.request_timeout())?);
        Ok(Self::new(
            HopService::new(transport.clone(), config.hops_url()),
            FermentableService::new(transport.clone(), config.fermentables_url()),
            YeastService::new(transport, config.yeasts_url()),
        ))
    }
}

impl<T: Transport> Catalog<T> {
    pub fn new(
        hop_service: HopService<T>,
        fermentable_service: FermentableService<T>,
        yeast_service: YeastService<T>,
    ) -> Self {
        Self {
            hop_service,
            fermentable_service,
            yeast_service,
            state: CatalogState::default(),
            initialized: false,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn into_state(self) -> CatalogState {
        self.state
    }

    /// Loads all three collections concurrently, once.
    ///
    /// Each slot is written by its own fetch as it completes; a failure
    /// only affects its own collection. Later calls do nothing.
    pub async fn load(&mut self) -> &CatalogState {
        self.load_with(|_| {}).await
    }

    /// Like [`Catalog::load`], calling `on_settled` as soon as each slot is
    /// written, so settled collections can be shown while a slow one is
    /// still in flight.
    pub async fn load_with<F>(&mut self, on_settled: F) -> &CatalogState
    where
        F: FnMut(Settled<'_>),
    {
        if self.initialized {
            return &self.state;
        }
        self.initialized = true;

        let Self {
            hop_service,
            fermentable_service,
            yeast_service,
            state,
            ..
        } = &mut *self;
        let CatalogState {
            hops,
            fermentables,
            yeasts,
        } = state;

        // Never borrowed across an await.
        let on_settled = RefCell::new(on_settled);

        tokio::join!(
            async {
                *hops = settle(hop_service.get_collection().await);
                (&mut *on_settled.borrow_mut())(Settled::Hops(&*hops));
            },
            async {
                *fermentables = settle(fermentable_service.get_collection().await);
                (&mut *on_settled.borrow_mut())(Settled::Fermentables(&*fermentables));
            },
            async {
                *yeasts = settle(yeast_service.get_collection().await);
                (&mut *on_settled.borrow_mut())(Settled::Yeasts(&*yeasts));
            },
        );

        &self.state
    }
}

fn settle<E: Entity>(result: std::result::Result<Vec<E>, FetchError>) -> LoadState<E> {
    match result {
        Ok(items) => {
            tracing::debug!("Setting {} ({} records)", E::COLLECTION, items.len());
            LoadState::Loaded(items)
        }
        Err(e) => {
            tracing::warn!("Leaving {} unloaded", E::COLLECTION);
            LoadState::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Serves canned responses per URL, with an optional delay each.
    struct ScriptedTransport {
        routes: HashMap<String, Route>,
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn get_json(
            &self,
            url: &str,
        ) -> std::result::Result<serde_json::Value, FetchError> {
            let (delay, response) = self
                .routes
                .get(url)
                .cloned()
                .unwrap_or_else(|| (Duration::ZERO, Err(FetchError::transport(url, "no route"))));
            tokio::time::sleep(delay).await;
            response
        }
    }

    fn catalog(transport: ScriptedTransport) -> Catalog<ScriptedTransport> {
        let transport = Arc::new(transport);
        Catalog::new(
            HopService::new(transport.clone(), "mem://hops"),
            FermentableService::new(transport.clone(), "mem://fermentables"),
            YeastService::new(transport, "mem://yeasts"),
        )
    }

    type Route = (Duration, std::result::Result<serde_json::Value, FetchError>);

    fn ok(delay_ms: u64, body: serde_json::Value) -> Route {
        (Duration::from_millis(delay_ms), Ok(body))
    }

    #[tokio::test]
    async fn test_collections_start_unloaded() {
        let catalog = catalog(ScriptedTransport {
            routes: HashMap::new(),
        });

        assert_eq!(catalog.state().hops, LoadState::Unloaded);
        assert!(catalog.state().yeasts.items().is_empty());
    }

    #[tokio::test]
    async fn test_load_fills_all_collections() {
        let mut routes = HashMap::new();
        routes.insert("mem://hops".to_string(), ok(0, json!([{"id": 1, "name": "Cascade"}])));
        routes.insert(
            "mem://fermentables".to_string(),
            ok(0, json!([{
                "id": 1,
                "name": "Munich",
                "potential": {"value": 35, "unit": "°P"},
                "colour": {"value": 9, "unit": "°L"}
            }])),
        );
        routes.insert("mem://yeasts".to_string(), ok(0, json!([])));

        let mut catalog = catalog(ScriptedTransport { routes });
        let state = catalog.load().await;

        assert_eq!(state.hops.items().len(), 1);
        assert_eq!(state.fermentables.items()[0].name, "Munich");
        assert!(state.yeasts.is_loaded());
        assert!(state.failures().is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_leaves_others_loaded() {
        let mut routes = HashMap::new();
        routes.insert("mem://hops".to_string(), ok(0, json!([{"id": 1, "name": "Cascade"}])));
        routes.insert(
            "mem://fermentables".to_string(),
            (
                Duration::ZERO,
                Err(FetchError::transport("mem://fermentables", "HTTP status 500")),
            ),
        );
        routes.insert(
            "mem://yeasts".to_string(),
            ok(0, json!([{
                "id": 1,
                "brand": "White Labs",
                "name": "California Ale",
                "aliases": ["WLP001"],
                "attenuation": 0.78
            }])),
        );

        let mut catalog = catalog(ScriptedTransport { routes });
        catalog.load().await;
        let state = catalog.state();

        assert!(state.hops.is_loaded());
        assert!(state.yeasts.is_loaded());
        assert!(state.fermentables.items().is_empty());
        let failures = state.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "fermentables");
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let mut routes = HashMap::new();
        routes.insert("mem://hops".to_string(), ok(200, json!([])));
        routes.insert("mem://fermentables".to_string(), ok(200, json!([])));
        routes.insert("mem://yeasts".to_string(), ok(200, json!([])));

        let mut catalog = catalog(ScriptedTransport { routes });
        let started = std::time::Instant::now();
        catalog.load().await;

        assert!(started.elapsed() < Duration::from_millis(550));
        assert!(catalog.state().hops.is_loaded());
    }

    #[tokio::test]
    async fn test_settled_collections_visible_while_one_hangs() {
        let mut routes = HashMap::new();
        routes.insert("mem://hops".to_string(), ok(3_600_000, json!([])));
        routes.insert(
            "mem://fermentables".to_string(),
            ok(0, json!([{
                "id": 1,
                "name": "Munich",
                "potential": {"value": 35, "unit": "°P"},
                "colour": {"value": 9, "unit": "°L"}
            }])),
        );
        routes.insert(
            "mem://yeasts".to_string(),
            ok(10, json!([{
                "id": 1,
                "brand": "White Labs",
                "name": "California Ale",
                "aliases": [],
                "attenuation": 0.78
            }])),
        );

        let mut catalog = catalog(ScriptedTransport { routes });
        let mut settled = Vec::new();
        let finished = tokio::time::timeout(
            Duration::from_millis(300),
            catalog.load_with(|slot| {
                let loaded = match slot {
                    Settled::Hops(state) => state.items().len(),
                    Settled::Fermentables(state) => state.items().len(),
                    Settled::Yeasts(state) => state.items().len(),
                };
                settled.push((slot.collection(), loaded));
            }),
        )
        .await;

        assert!(finished.is_err());
        settled.sort();
        assert_eq!(settled, vec![("fermentables", 1), ("yeasts", 1)]);
    }

    #[tokio::test]
    async fn test_load_with_reports_every_collection() {
        let mut routes = HashMap::new();
        routes.insert("mem://hops".to_string(), ok(0, json!([])));
        routes.insert("mem://fermentables".to_string(), ok(0, json!([])));
        routes.insert(
            "mem://yeasts".to_string(),
            (
                Duration::ZERO,
                Err(FetchError::transport("mem://yeasts", "HTTP status 500")),
            ),
        );

        let mut catalog = catalog(ScriptedTransport { routes });
        let mut failed = Vec::new();
        let mut count = 0;
        catalog
            .load_with(|slot| {
                count += 1;
                if let Settled::Yeasts(state) = slot {
                    failed.push(state.error().is_some());
                }
            })
            .await;

        assert_eq!(count, 3);
        assert_eq!(failed, vec![true]);
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let mut routes = HashMap::new();
        routes.insert("mem://hops".to_string(), ok(0, json!([{"id": 1, "name": "Cascade"}])));
        routes.insert("mem://fermentables".to_string(), ok(0, json!([])));
        routes.insert("mem://yeasts".to_string(), ok(0, json!([])));

        let mut catalog = catalog(ScriptedTransport { routes });
        catalog.load().await;
        catalog.hop_service = HopService::new(
            Arc::new(ScriptedTransport {
                routes: HashMap::new(),
            }),
            "mem://hops",
        );
        catalog.load().await;

        assert_eq!(catalog.state().hops.items()[0].name, "Cascade");
    }
}
