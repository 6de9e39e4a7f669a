// Typed model of the WorldTimeAPI payload
pub mod response;

use std::time::Duration;

use tracing::{debug, error, info};

use crate::error::FetchError;

pub use response::TimeRecord;

// Fixed endpoint: base URL plus the single zone this screen shows
const WORLD_TIME_BASE: &str = "https://worldtimeapi.org/api/timezone";
const TARGET_ZONE: &str = "America/Mexico_City";

/// Default timeout applied to connecting and to the request as a whole.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of one completed fetch, as delivered to the state owner.
pub type FetchOutcome = Result<TimeRecord, FetchError>;

/// HTTP client for the WorldTimeAPI Mexico City endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct TimeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TimeClient {
    /// Client against the real WorldTimeAPI with the default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Client against the real WorldTimeAPI with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::for_endpoint(format!("{}/{}", WORLD_TIME_BASE, TARGET_ZONE), timeout)
    }

    /// Client against an arbitrary endpoint; integration tests point this at
    /// a local mock server.
    pub fn for_endpoint(endpoint: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .expect("failed to build the HTTP client");
        Self { http, endpoint }
    }

    /// Fetches the current time for Mexico City.
    ///
    /// # Returns
    /// * `TimeRecord` with the zone's current date, time and DST information
    /// * `FetchError` categorizing what went wrong (connection, timeout,
    ///   server status, or anything else)
    pub async fn fetch(&self) -> FetchOutcome {
        info!("Fetching current time for zone: {}", TARGET_ZONE);

        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("WorldTimeAPI answered with status {}", status);
            return Err(FetchError::Server(status.as_u16()));
        }

        // Decode from the raw body so a parse failure can report the serde
        // message instead of a generic decode error.
        let body = response.text().await?;
        debug!("Response body: {}", body);

        match serde_json::from_str::<TimeRecord>(&body) {
            Ok(record) => {
                debug!("Time data fetched successfully: {:?}", record);
                Ok(record)
            }
            Err(e) => {
                error!("Failed to parse WorldTimeAPI response: {}", e);
                Err(FetchError::Unknown(e.to_string()))
            }
        }
    }
}

impl Default for TimeClient {
    fn default() -> Self {
        Self::new()
    }
}
