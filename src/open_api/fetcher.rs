//! Issues the paged requests against the daily service and concatenates the
//! pages into one result set. Pages are fetched strictly sequentially: each
//! response's counters decide whether another page is needed.

use crate::open_api::error::OpenApiError;
use crate::open_api::pagination::{is_final_page, MAX_PAGE_FETCHES};
use crate::open_api::response::{parse_page, DailyPage, DailyRecord};
use crate::types::query::DailyQuery;
use log::{debug, info, warn};
use reqwest::Client;

pub(crate) struct DailyFetcher {
    client: Client,
    endpoint: String,
    service_key: String,
}

impl DailyFetcher {
    pub(crate) fn new(endpoint: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            service_key: service_key.into(),
        }
    }

    /// Fetches a single page and validates its envelope.
    pub(crate) async fn fetch_page(
        &self,
        query: &DailyQuery,
        page_no: u32,
    ) -> Result<DailyPage, OpenApiError> {
        debug!(
            "Requesting page {} of daily data for station {}",
            page_no, query.station
        );

        let mut params = vec![
            ("ServiceKey", self.service_key.clone()),
            ("pageNo", page_no.to_string()),
            ("dataType", "JSON".to_string()),
            ("dataCd", "ASOS".to_string()),
            ("dateCd", "DAY".to_string()),
            ("startDt", query.start.format("%Y%m%d").to_string()),
            ("endDt", query.end.format("%Y%m%d").to_string()),
            ("stnIds", query.station.to_string()),
        ];
        if let Some(rows) = query.rows_per_page {
            params.push(("numOfRows", rows.to_string()));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| OpenApiError::NetworkRequest(self.endpoint.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", self.endpoint, e);
                return Err(if let Some(status) = e.status() {
                    OpenApiError::HttpStatus {
                        url: self.endpoint.clone(),
                        status,
                        source: e,
                    }
                } else {
                    OpenApiError::NetworkRequest(self.endpoint.clone(), e)
                });
            }
        };

        let text = response
            .text()
            .await
            .map_err(|e| OpenApiError::ResponseBody(self.endpoint.clone(), e))?;
        parse_page(&text, &self.endpoint)
    }

    /// Fetches every page of the query and returns the records concatenated
    /// in page order.
    ///
    /// Any page failure propagates immediately; partial results are
    /// discarded.
    pub(crate) async fn fetch_all(
        &self,
        query: &DailyQuery,
    ) -> Result<Vec<DailyRecord>, OpenApiError> {
        let mut records: Vec<DailyRecord> = Vec::new();
        let mut page_no = 0;
        let mut fetched = 0;

        loop {
            let page = self.fetch_page(query, page_no + 1).await?;
            fetched += 1;

            let body = page.body;
            page_no = body.page_no;
            records.extend(body.items.item);

            if is_final_page(page_no, body.num_of_rows, body.total_count) {
                info!(
                    "Fetched {} daily record(s) for station {} across {} page(s)",
                    records.len(),
                    query.station,
                    fetched
                );
                return Ok(records);
            }
            if fetched >= MAX_PAGE_FETCHES {
                warn!(
                    "Aborting pagination for station {} after {} pages; reported total {} never matched the page counters",
                    query.station, fetched, body.total_count
                );
                return Err(OpenApiError::PageLimitExceeded {
                    limit: MAX_PAGE_FETCHES,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::station::StationId;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SERVICE_PATH: &str = "/getWthrDataList";

    fn fetcher_for(server: &MockServer) -> DailyFetcher {
        DailyFetcher::new(format!("{}{}", server.uri(), SERVICE_PATH), "test-key")
    }

    fn january_query() -> DailyQuery {
        DailyQuery {
            station: StationId::SEOUL,
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            rows_per_page: None,
        }
    }

    fn page_body(page_no: u32, total: u32, rows: u32, items: Vec<Value>) -> Value {
        json!({
            "response": {
                "header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
                "body": {
                    "pageNo": page_no,
                    "totalCount": total,
                    "numOfRows": rows,
                    "items": {"item": items}
                }
            }
        })
    }

    fn records(range: std::ops::Range<u32>) -> Vec<Value> {
        range.map(|day| json!({"tm": format!("2023-01-{day:02}")})).collect()
    }

    #[tokio::test]
    async fn aggregates_pages_in_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("pageNo", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 8, 5, records(1..6))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("pageNo", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(2, 8, 5, records(6..9))))
            .expect(1)
            .mount(&server)
            .await;

        let records = fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap();

        assert_eq!(records.len(), 8);
        assert_eq!(records[0]["tm"], "2023-01-01");
        assert_eq!(records[4]["tm"], "2023-01-05");
        assert_eq!(records[5]["tm"], "2023-01-06");
        assert_eq!(records[7]["tm"], "2023-01-08");
    }

    #[tokio::test]
    async fn single_page_terminates_after_one_fetch() {
        let server = MockServer::start().await;

        // Only page 1 is mounted; a second request would fail the call.
        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("pageNo", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 3, 10, records(1..4))))
            .expect(1)
            .mount(&server)
            .await;

        let records = fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
    }

    #[tokio::test]
    async fn empty_result_set_completes_immediately() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": {
                    "header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
                    "body": {"pageNo": 1, "totalCount": 0, "numOfRows": 10}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn sends_the_fixed_query_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("ServiceKey", "test-key"))
            .and(query_param("dataType", "JSON"))
            .and(query_param("dataCd", "ASOS"))
            .and(query_param("dateCd", "DAY"))
            .and(query_param("startDt", "20230101"))
            .and(query_param("endDt", "20230131"))
            .and(query_param("stnIds", "108"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, 10, records(1..2))))
            .expect(1)
            .mount(&server)
            .await;

        fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rows_per_page_override_is_forwarded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(query_param("numOfRows", "500"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, 500, records(1..2))))
            .expect(1)
            .mount(&server)
            .await;

        let query = DailyQuery {
            rows_per_page: Some(500),
            ..january_query()
        };
        fetcher_for(&server).fetch_all(&query).await.unwrap();
    }

    #[tokio::test]
    async fn portal_failure_surfaces_its_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": {
                    "header": {
                        "resultCode": "22",
                        "resultMsg": "LIMITED NUMBER OF SERVICE REQUESTS EXCEEDS ERROR."
                    }
                }
            })))
            .mount(&server)
            .await;

        let err = fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap_err();

        match err {
            OpenApiError::Api { code, message } => {
                assert_eq!(code, "22");
                assert_eq!(message, "LIMITED NUMBER OF SERVICE REQUESTS EXCEEDS ERROR.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_answer_means_rejected_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<OpenAPI_ServiceResponse><cmmMsgHeader/></OpenAPI_ServiceResponse>"),
            )
            .mount(&server)
            .await;

        let err = fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap_err();

        assert!(matches!(err, OpenApiError::ServiceKey { .. }));
    }

    #[tokio::test]
    async fn http_failure_is_reported_with_its_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap_err();

        match err {
            OpenApiError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn inconsistent_counters_hit_the_page_limit() {
        let server = MockServer::start().await;

        // The portal echoes page 1 forever while claiming 100 records.
        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 100, 10, records(1..11))))
            .mount(&server)
            .await;

        let err = fetcher_for(&server)
            .fetch_all(&january_query())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OpenApiError::PageLimitExceeded { limit: MAX_PAGE_FETCHES }
        ));
    }
}
