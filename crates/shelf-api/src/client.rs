// Hand-crafted async HTTP client for the shelf inventory REST API.
//
// Endpoints: {base}/{resource} and {base}/{resource}/{id}
// Every response is wrapped in the `{statusCode, message, data?}` envelope.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::envelope::ApiResponse;
use crate::error::Error;
use crate::resource::Resource;
use crate::transport::TransportConfig;

// ── Error response shape ─────────────────────────────────────────────

/// Lenient envelope used when parsing failure bodies: `data` is ignored
/// and `message` may be absent on bodies the backend didn't produce.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the inventory REST API.
///
/// One instance is shared by all entity stores; it is `Send + Sync` and
/// cheap to clone via `Arc`. Each operation is exactly one HTTP request —
/// no retries, no caching.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (used by tests and the CLI).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and force a trailing slash so `Url::join`
    /// appends path segments instead of replacing the last one.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"product/3"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining relative paths works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Request plumbing ─────────────────────────────────────────────

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + Sync)>,
    ) -> Result<ApiResponse<T>, Error> {
        let url = self.url(path);
        debug!("{method} {url}");

        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    /// Parse a response into the envelope, mapping both non-2xx HTTP
    /// statuses and `statusCode >= 400` envelopes to `Error::Api`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<ApiResponse<T>, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Self::parse_error(status.as_u16(), &body));
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
            // Truncate by characters, not bytes: slicing at a fixed byte
            // offset panics when it lands inside a multi-byte character.
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })?;

        if envelope.is_success() {
            Ok(envelope)
        } else {
            Err(Error::Api {
                status: envelope.status_code,
                message: envelope.message,
            })
        }
    }

    fn parse_error(status: u16, body: &str) -> Error {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.to_owned()
                }
            });
        Error::Api { status, message }
    }

    // ━━ Public API (uniform across resources) ━━━━━━━━━━━━━━━━━━━━━━━

    /// GET the full collection.
    pub async fn list_all<T: Resource>(&self) -> Result<Vec<T>, Error> {
        let envelope: ApiResponse<Vec<T>> = self.send(Method::GET, T::PATH, None::<&()>).await?;
        envelope.require_data(T::PATH, "list")
    }

    /// POST a creation payload; returns the created record with its
    /// backend-assigned id.
    pub async fn create<T: Resource>(&self, payload: &T::Create) -> Result<T, Error> {
        let envelope: ApiResponse<T> = self.send(Method::POST, T::PATH, Some(payload)).await?;
        envelope.require_data(T::PATH, "create")
    }

    /// GET a single record by id.
    pub async fn get_by_id<T: Resource>(&self, id: i64) -> Result<T, Error> {
        let envelope: ApiResponse<T> = self
            .send(Method::GET, &format!("{}/{id}", T::PATH), None::<&()>)
            .await?;
        envelope.require_data(T::PATH, "get")
    }

    /// PATCH partial fields; returns the updated record.
    pub async fn update_by_id<T: Resource>(&self, id: i64, patch: &T::Patch) -> Result<T, Error> {
        let envelope: ApiResponse<T> = self
            .send(Method::PATCH, &format!("{}/{id}", T::PATH), Some(patch))
            .await?;
        envelope.require_data(T::PATH, "update")
    }

    /// DELETE by id. The confirmation envelope is returned whole since
    /// `data` is frequently absent on deletions.
    pub async fn delete_by_id<T: Resource>(&self, id: i64) -> Result<ApiResponse<T>, Error> {
        self.send(Method::DELETE, &format!("{}/{id}", T::PATH), None::<&()>)
            .await
    }
}
