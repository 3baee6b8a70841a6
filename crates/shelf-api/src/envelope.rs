// ── Response envelope ──
//
// Every backend endpoint wraps its payload in the same JSON envelope:
// `{"statusCode": 200, "message": "...", "data": ...}`. `data` is
// guaranteed for successful list/create/get/update responses; delete
// confirmations may omit it.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The `{statusCode, message, data?}` wrapper returned by every API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    // No `serde(default)` here: a missing field already deserializes to
    // `None`, and the attribute would force a `T: Default` bound onto
    // every generic caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// `true` when the envelope's own status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Extract `data`, enforcing the envelope invariant for data-bearing
    /// operations: success implies data present.
    pub(crate) fn require_data(
        self,
        resource: &'static str,
        operation: &'static str,
    ) -> Result<T, Error> {
        self.data.ok_or(Error::MissingData {
            resource,
            operation,
        })
    }
}
