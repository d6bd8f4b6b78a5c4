//! Remote catalog access with explicit fallback.
//!
//! Every fetch is a single attempt against the gateway; when it fails the
//! hardcoded sample dataset is substituted and the caller gets the data
//! together with the reason it fell back. No retry, no backoff, and no
//! error surfaced for list fetches.

use log::{info, warn};
use shared::{Establishment, Product, RemoteOrder};
use std::sync::Arc;

use crate::api::{fallback, StorefrontApi};

/// Where a fetched dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fallback { reason: String },
}

impl DataSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataSource::Fallback { .. })
    }
}

/// A dataset tagged with its source.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    fn remote(data: T) -> Self {
        Self {
            data,
            source: DataSource::Remote,
        }
    }

    fn fallback(data: T, reason: String) -> Self {
        Self {
            data,
            source: DataSource::Fallback { reason },
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn StorefrontApi>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self { api }
    }

    /// List establishments, optionally filtered. Falls back to the full
    /// sample list on any gateway failure.
    pub async fn establishments(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Fetched<Vec<Establishment>> {
        match self.api.establishments(category, search).await {
            Ok(list) => {
                info!("Fetched {} establishments from the API", list.len());
                Fetched::remote(list)
            }
            Err(e) => {
                warn!("Establishment fetch failed, using fallback data: {}", e);
                Fetched::fallback(fallback::establishments(), e.to_string())
            }
        }
    }

    /// Fetch a single establishment. Falls back to a lookup in the sample
    /// list; an id unknown even there yields `None` data.
    pub async fn establishment(&self, id: &str) -> Fetched<Option<Establishment>> {
        match self.api.establishment(id).await {
            Ok(establishment) => Fetched::remote(Some(establishment)),
            Err(e) => {
                warn!("Establishment '{}' fetch failed, using fallback data: {}", id, e);
                let found = fallback::establishments().into_iter().find(|est| est.id == id);
                Fetched::fallback(found, e.to_string())
            }
        }
    }

    /// List the products of an establishment. Falls back to the sample
    /// products for that id (empty for ids outside the sample set).
    pub async fn products(&self, establishment_id: &str) -> Fetched<Vec<Product>> {
        match self.api.products(establishment_id).await {
            Ok(list) => {
                info!(
                    "Fetched {} products for establishment '{}'",
                    list.len(),
                    establishment_id
                );
                Fetched::remote(list)
            }
            Err(e) => {
                warn!(
                    "Product fetch for '{}' failed, using fallback data: {}",
                    establishment_id, e
                );
                Fetched::fallback(fallback::products(establishment_id), e.to_string())
            }
        }
    }

    /// List the current user's remote orders. There is no sample dataset
    /// for orders; the fallback is an empty list.
    pub async fn my_orders(&self) -> Fetched<Vec<RemoteOrder>> {
        match self.api.my_orders().await {
            Ok(list) => Fetched::remote(list),
            Err(e) => {
                warn!("Order fetch failed, showing no remote orders: {}", e);
                Fetched::fallback(Vec::new(), e.to_string())
            }
        }
    }
}
