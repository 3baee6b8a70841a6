// ── Resource contract ──
//
// The four backend resources are structurally identical: a collection
// endpoint at `{base}/{path}` and item endpoints at `{base}/{path}/{id}`,
// all speaking the same envelope. This trait captures the differences so
// `ApiClient` can stay generic instead of repeating one wrapper per entity.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A REST resource with a numeric, backend-assigned primary key.
///
/// Implemented by the domain types in `shelf-core`. `Create` is the entity
/// minus its id (ids never appear on creation payloads); `Patch` is the
/// all-optional partial update body.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment under the base URL, e.g. `"product"`.
    const PATH: &'static str;

    /// Creation payload (entity minus id).
    type Create: Serialize + Send + Sync;

    /// Partial-update payload; unset fields are omitted from the body.
    type Patch: Serialize + Send + Sync;

    /// The backend-assigned primary key.
    fn id(&self) -> i64;
}
