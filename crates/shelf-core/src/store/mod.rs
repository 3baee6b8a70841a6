// ── Store layer ──
//
// One cached store per entity behind a single injectable facade.

mod cache;
mod entity_store;

pub use cache::EntityCache;
pub use entity_store::{EntityStore, SyncPolicy};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use shelf_api::ApiClient;

use crate::error::CoreError;
use crate::model::{Category, Customer, Dealer, Product};

/// All entity stores for one application instance.
///
/// Constructed explicitly from an [`ApiClient`] and handed to consumers
/// by injection — there is no ambient global. Each store owns its cache;
/// the facade only groups them and tracks refresh metadata.
pub struct Inventory {
    pub products: EntityStore<Product>,
    pub categories: EntityStore<Category>,
    pub dealers: EntityStore<Dealer>,
    pub customers: EntityStore<Customer>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl Inventory {
    pub fn new(client: Arc<ApiClient>, policy: SyncPolicy) -> Self {
        let (last_refresh, _) = watch::channel(None);
        Self {
            products: EntityStore::new(Arc::clone(&client), policy),
            categories: EntityStore::new(Arc::clone(&client), policy),
            dealers: EntityStore::new(Arc::clone(&client), policy),
            customers: EntityStore::new(client, policy),
            last_refresh,
        }
    }

    /// Fetch all four collections. Fails on the first error; collections
    /// fetched before the failure keep their fresh data.
    pub async fn refresh_all(&self) -> Result<(), CoreError> {
        self.products.fetch_all().await?;
        self.categories.fetch_all().await?;
        self.dealers.fetch_all().await?;
        self.customers.fetch_all().await?;
        // send_replace stores the value even with zero receivers; plain
        // send would discard it once the initial receiver is dropped.
        self.last_refresh.send_replace(Some(Utc::now()));
        Ok(())
    }

    /// When the last successful `refresh_all` completed.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// How long ago the last full refresh occurred, or `None` if never.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }
}
