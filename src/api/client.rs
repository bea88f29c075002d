use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::catalog::{prepare_collection, KanjiRecord};
use crate::config::{ApiConfig, CredentialStatus};

const KEY_HEADER: &str = "x-rapidapi-key";
const HOST_HEADER: &str = "x-rapidapi-host";
const KANJI_PATH: [&str; 3] = ["api", "public", "kanji"];

/// Source of kanji records.
///
/// Implemented by [`KanjiClient`]; the fetch worker is generic over it.
pub trait KanjiSource: Send + Sync + 'static {
    /// Whole collection, already cleaned by [`prepare_collection`].
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<KanjiRecord>, ApiError>> + Send;

    /// One record by identifier.
    fn fetch_one(&self, id: &str) -> impl Future<Output = Result<KanjiRecord, ApiError>> + Send;
}

/// HTTP client for the Kanji Alive API.
pub struct KanjiClient {
    client: Client,
    base_url: Url,
    api: ApiConfig,
}

impl KanjiClient {
    pub fn new(api: ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&api.base_url).map_err(|_| ApiError::InvalidUrl {
            url: api.base_url.clone(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: api.base_url.clone(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(api.timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url,
            api,
        })
    }

    /// `{base}/api/public/kanji/{segment}`, with `segment` percent-encoded.
    pub fn endpoint(&self, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.api.base_url.clone(),
            })?;
            segments.pop_if_empty().extend(KANJI_PATH).push(segment);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let key = match self.api.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(ApiError::MissingCredential { reason });
            }
        };

        let url_str = url.to_string();
        tracing::debug!(url = %url_str, "GET");

        let response = self
            .client
            .get(url)
            .header(KEY_HEADER, key.expose())
            .header(HOST_HEADER, &self.api.host)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url_str,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Request {
                url: url_str.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url_str,
            source,
        })
    }
}

impl KanjiSource for KanjiClient {
    async fn fetch_all(&self) -> Result<Vec<KanjiRecord>, ApiError> {
        let url = self.endpoint("all")?;
        let entries: Vec<serde_json::Value> = self.get_json(url).await?;
        let fetched = entries.len();
        let records = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<KanjiRecord>(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping malformed kanji entry");
                    None
                }
            })
            .collect();
        let prepared = prepare_collection(records);
        tracing::info!(fetched, kept = prepared.len(), "Kanji list loaded");
        Ok(prepared)
    }

    async fn fetch_one(&self, id: &str) -> Result<KanjiRecord, ApiError> {
        let url = self.endpoint(id)?;
        let record: KanjiRecord = self.get_json(url).await?;
        tracing::info!(id, "Kanji detail loaded");
        Ok(record)
    }
}
