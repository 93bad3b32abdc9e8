//! Typed representation of the daily-service response envelope. The schema
//! of the portal's JSON payload lives here and nowhere else; the rest of
//! the crate reads plain struct fields.

use crate::open_api::error::OpenApiError;
use serde::Deserialize;
use serde_json::Value;

/// Result code the portal reports when a request was processed normally.
pub(crate) const NORMAL_SERVICE: &str = "00";

/// A single daily observation record, passed through exactly as reported.
pub type DailyRecord = Value;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    pub response: RawPage,
}

/// Unvalidated page as it comes off the wire. Failure envelopes carry only
/// a header, so the body stays optional until the result code is checked.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPage {
    pub header: PageHeader,
    pub body: Option<PageBody>,
}

/// Result header the portal attaches to every response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHeader {
    /// Result code, `"00"` when the request was processed normally.
    pub result_code: String,
    /// Human-readable result message, e.g. `"NORMAL_SERVICE"`.
    pub result_msg: String,
}

impl PageHeader {
    /// Whether the portal reports this response as processed normally.
    pub fn is_normal_service(&self) -> bool {
        self.result_code == NORMAL_SERVICE
    }
}

/// Pagination counters and records of one page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBody {
    /// Page number this body belongs to, as echoed by the portal.
    pub page_no: u32,
    /// Total number of records matching the query, across all pages.
    pub total_count: u32,
    /// Rows per page the portal applied to this response.
    pub num_of_rows: u32,
    /// Records of this page. Absent on zero-result responses.
    #[serde(default)]
    pub items: PageItems,
}

/// Wrapper around the record list, mirroring the portal's `items.item` nesting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageItems {
    #[serde(default)]
    pub item: Vec<DailyRecord>,
}

/// One validated page: the header plus the body that a normal-service
/// response is guaranteed to carry.
#[derive(Debug, Clone)]
pub struct DailyPage {
    pub header: PageHeader,
    pub body: PageBody,
}

/// Parses one response body into a validated page.
///
/// The parse runs in two stages so the two failure classes stay apart: a
/// body that is not JSON at all means the portal rejected the service key,
/// while JSON that does not match the envelope is a malformed response.
pub(crate) fn parse_page(text: &str, url: &str) -> Result<DailyPage, OpenApiError> {
    let raw: Value = serde_json::from_str(text).map_err(|_| OpenApiError::ServiceKey {
        url: url.to_string(),
    })?;
    let envelope: Envelope =
        serde_json::from_value(raw).map_err(OpenApiError::MalformedResponse)?;

    let RawPage { header, body } = envelope.response;
    if !header.is_normal_service() {
        return Err(OpenApiError::Api {
            code: header.result_code,
            message: header.result_msg,
        });
    }
    let body = body.ok_or(OpenApiError::MissingBody)?;
    Ok(DailyPage { header, body })
}
