//! Provides the `DailyClient` for requesting daily ASOS observation data.
//!
//! This client acts as an intermediate builder, obtained via
//! [`KmaAsos::daily()`], allowing the user to specify the station and the
//! date period before executing the paged request.

use crate::error::KmaAsosError;
use crate::open_api::response::{DailyPage, DailyRecord};
use crate::types::query::DailyQuery;
use crate::types::station::StationId;
use crate::KmaAsos;
use bon::bon;
use chrono::NaiveDate;

/// A client builder specifically for fetching daily observation data.
///
/// Instances are created by calling [`KmaAsos::daily()`]. The builder is
/// started with the target station, takes the inclusive date period, and is
/// executed with `.call().await`, which walks every page of the result set
/// and returns the flattened record list.
pub struct DailyClient<'a> {
    /// A reference to the main client instance.
    client: &'a KmaAsos,
}

#[bon]
impl<'a> DailyClient<'a> {
    /// Creates a new `DailyClient`.
    ///
    /// This is typically called internally by [`KmaAsos::daily()`] and not
    /// directly by users.
    pub(crate) fn new(client: &'a KmaAsos) -> Self {
        Self { client }
    }

    /// Fetches all daily records for a station over an inclusive date period.
    ///
    /// Pages are requested sequentially until the portal's reported total
    /// count is exhausted; the records of every page are concatenated in
    /// page order. Records are returned exactly as the portal reports them.
    ///
    /// # Arguments
    ///
    /// * `.station(StationId)`: **Required.** The observation station to query.
    /// * `.start(NaiveDate)`: **Required.** First day of the period (inclusive).
    /// * `.end(NaiveDate)`: **Required.** Last day of the period (inclusive).
    /// * `.rows_per_page(u32)`: Optional. Page size to request; omitted, the
    ///   portal applies its own default.
    ///
    /// # Errors
    ///
    /// Returns [`KmaAsosError::InvalidPeriod`] when `start` is after `end`,
    /// and [`KmaAsosError::OpenApi`] for every transport, service-key,
    /// envelope, or portal-reported failure.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kma_asos::{KmaAsos, KmaAsosError, StationId};
    /// # use chrono::NaiveDate;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), KmaAsosError> {
    /// let client = KmaAsos::new("percent%2Bencoded%2Bkey");
    ///
    /// let records = client
    ///     .daily()
    ///     .station(StationId::SEOUL)
    ///     .start(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap())
    ///     .call()
    ///     .await?;
    ///
    /// println!("{} daily records", records.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = station)]
    #[doc(hidden)]
    pub async fn build_station(
        &self,
        #[builder(start_fn)] station: StationId,
        start: NaiveDate,
        end: NaiveDate,
        rows_per_page: Option<u32>,
    ) -> Result<Vec<DailyRecord>, KmaAsosError> {
        let query = daily_query(station, start, end, rows_per_page)?;
        let records = self.client.fetcher.fetch_all(&query).await?;
        Ok(records)
    }

    /// Fetches a single page of daily records, returning the full validated
    /// response (header plus body) rather than just the record list.
    ///
    /// Useful for inspecting the portal's pagination counters directly; most
    /// callers want the aggregate `station(..)` call instead.
    ///
    /// # Arguments
    ///
    /// * `.page(u32)`: **Required.** Page number to request, starting at 1.
    /// * `.station(StationId)`: **Required.** The observation station to query.
    /// * `.start(NaiveDate)`: **Required.** First day of the period (inclusive).
    /// * `.end(NaiveDate)`: **Required.** Last day of the period (inclusive).
    /// * `.rows_per_page(u32)`: Optional. Page size to request.
    ///
    /// # Errors
    ///
    /// Same failure modes as the aggregate call, minus the page-limit guard.
    #[builder(start_fn = page)]
    #[doc(hidden)]
    pub async fn build_page(
        &self,
        #[builder(start_fn)] page_no: u32,
        station: StationId,
        start: NaiveDate,
        end: NaiveDate,
        rows_per_page: Option<u32>,
    ) -> Result<DailyPage, KmaAsosError> {
        let query = daily_query(station, start, end, rows_per_page)?;
        let page = self.client.fetcher.fetch_page(&query, page_no).await?;
        Ok(page)
    }
}

fn daily_query(
    station: StationId,
    start: NaiveDate,
    end: NaiveDate,
    rows_per_page: Option<u32>,
) -> Result<DailyQuery, KmaAsosError> {
    if start > end {
        return Err(KmaAsosError::InvalidPeriod { start, end });
    }
    Ok(DailyQuery {
        station,
        start,
        end,
        rows_per_page,
    })
}
