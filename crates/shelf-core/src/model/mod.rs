//! Canonical domain types for the inventory API.
//!
//! Each entity comes in three shapes: the record itself (with its
//! backend-assigned `id`), a `New*` creation payload (the record minus
//! `id`), and a `*Patch` partial-update payload (every field optional,
//! unset fields omitted from the wire body). All types serialize as
//! camelCase JSON to match the backend.

mod category;
mod customer;
mod dealer;
mod product;

pub use category::{Category, CategoryPatch, NewCategory};
pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use dealer::{Dealer, DealerPatch, NewDealer};
pub use product::{NewProduct, Product, ProductPatch};
