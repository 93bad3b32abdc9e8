use crate::types::station::StationId;
use chrono::NaiveDate;

/// Caller-supplied parameters of one daily-data request.
///
/// Built once per call and never mutated while the pages for it are being
/// fetched. Dates are inclusive and sent to the portal as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyQuery {
    /// Observation station to query.
    pub station: StationId,
    /// First day of the requested period (inclusive).
    pub start: NaiveDate,
    /// Last day of the requested period (inclusive).
    pub end: NaiveDate,
    /// Rows per page to request. `None` leaves the portal's default in place.
    pub rows_per_page: Option<u32>,
}
