use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenApiError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    // The portal answers an invalid or unregistered key with a non-JSON
    // error document instead of the requested JSON payload.
    #[error("Service key was rejected by {url}")]
    ServiceKey { url: String },

    #[error("Open API reported failure {code}: {message}")]
    Api { code: String, message: String },

    #[error("Response did not match the expected envelope shape")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Normal-service response carried no body")]
    MissingBody,

    #[error("Gave up after {limit} pages; the reported total count never converged")]
    PageLimitExceeded { limit: u32 },
}
