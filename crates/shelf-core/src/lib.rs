//! Cached data layer between `shelf-api` and UI consumers.
//!
//! This crate owns the domain model and the per-entity stores that keep an
//! in-memory mirror of the backend's collections:
//!
//! - **[`Inventory`]** — facade constructed per application instance from an
//!   `ApiClient` and a [`SyncPolicy`]. Owns one typed [`EntityStore`] per
//!   entity; consumers receive it by injection rather than through a global.
//!
//! - **[`EntityStore<T>`]** — fetch/add/edit/remove/find operations that call
//!   the API client and then synchronize the local cache, so subscribed views
//!   observe up-to-date data without re-fetching.
//!
//! - **[`EntityCache<T>`]** — insertion-ordered storage with push-based
//!   change notification via `watch` channels.
//!
//! - **Domain model** ([`model`]) — [`Product`], [`Category`], [`Dealer`],
//!   and [`Customer`], each with its creation and partial-update payloads.

pub mod error;
pub mod model;
pub mod store;

pub use error::CoreError;
pub use store::{EntityCache, EntityStore, Inventory, SyncPolicy};

pub use model::{
    Category, CategoryPatch, Customer, CustomerPatch, Dealer, DealerPatch, NewCategory,
    NewCustomer, NewDealer, NewProduct, Product, ProductPatch,
};
