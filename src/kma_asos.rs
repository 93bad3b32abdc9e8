//! This module provides the main entry point for the daily ASOS open API
//! client. It owns the decoded service key and the HTTP transport, and
//! hands out the narrow per-frequency clients that execute requests.

use crate::clients::daily_client::DailyClient;
use crate::open_api::fetcher::DailyFetcher;
use crate::utils::decode_service_key;

/// Production endpoint of the daily ASOS service on the open data portal.
pub const DEFAULT_ENDPOINT: &str =
    "http://apis.data.go.kr/1360000/AsosDalyInfoService/getWthrDataList";

/// The main client for the daily ASOS open API.
///
/// Holds the decoded service key and a reusable HTTP client. Requests are
/// issued through [`KmaAsos::daily()`], which returns a builder for either
/// the aggregate (all pages) or the single-page call.
///
/// The portal issues service keys in percent-encoded form; construction
/// decodes the key, and an already-decoded key passes through unchanged, so
/// either form may be supplied.
///
/// # Examples
///
/// ```
/// use kma_asos::KmaAsos;
///
/// let client = KmaAsos::new("my%2Bservice%2Bkey%3D%3D");
/// let _daily = client.daily();
/// ```
pub struct KmaAsos {
    pub(crate) fetcher: DailyFetcher,
}

impl KmaAsos {
    /// Creates a client against the production endpoint.
    ///
    /// # Arguments
    ///
    /// * `service_key` - The key issued by the open data portal, in either
    ///   its percent-encoded or decoded form.
    pub fn new(service_key: &str) -> Self {
        Self::with_endpoint(service_key, DEFAULT_ENDPOINT)
    }

    /// Creates a client against a custom endpoint URL.
    ///
    /// Useful for pointing the client at a test double; everything else
    /// behaves exactly as with [`KmaAsos::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kma_asos::KmaAsos;
    ///
    /// let client = KmaAsos::with_endpoint("key", "http://localhost:8080/daily");
    /// # let _ = client;
    /// ```
    pub fn with_endpoint(service_key: &str, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher: DailyFetcher::new(endpoint, decode_service_key(service_key)),
        }
    }

    /// Returns the client for daily observation data.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use kma_asos::{KmaAsos, KmaAsosError, StationId};
    /// # use chrono::NaiveDate;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), KmaAsosError> {
    /// let client = KmaAsos::new("service-key");
    /// let records = client
    ///     .daily()
    ///     .station(StationId::BUSAN)
    ///     .start(NaiveDate::from_ymd_opt(2022, 8, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2022, 8, 31).unwrap())
    ///     .call()
    ///     .await?;
    /// assert!(records.len() <= 31);
    /// # Ok(())
    /// # }
    /// ```
    pub fn daily(&self) -> DailyClient<'_> {
        DailyClient::new(self)
    }
}
