use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LookupError;
use crate::weather::{LocationQuery, WeatherResult};

pub const BASE_URL: &str = "https://api.weatherapi.com/v1/";

const CURRENT_ENDPOINT: &str = "current.json";

/// Wire format of the `current.json` endpoint. Only the fields we show are
/// declared; everything else in the payload is ignored.
pub mod current {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug)]
    pub struct Response {
        pub location: Location,

        pub current: Current,
    }

    #[derive(Deserialize, Debug)]
    pub struct Location {
        pub name: String,
    }

    #[derive(Deserialize, Debug)]
    pub struct Current {
        pub temp_c: f64,

        pub temp_f: f64,

        pub condition: Condition,
    }

    #[derive(Deserialize, Debug)]
    pub struct Condition {
        pub text: String,

        pub code: i64,
    }

    impl From<Response> for WeatherResult {
        fn from(response: Response) -> Self {
            Self {
                location_name: response.location.name,
                temperature_celsius: response.current.temp_c,
                temperature_fahrenheit: response.current.temp_f,
                condition_text: response.current.condition.text,
                condition_code: response.current.condition.code,
            }
        }
    }
}

/// Decode a `current.json` body. Either every field is present or nothing is
/// returned.
pub fn decode(body: &[u8]) -> Result<WeatherResult, LookupError> {
    let response: current::Response = serde_json::from_slice(body).map_err(LookupError::Decode)?;
    Ok(response.into())
}

/// HTTP client for WeatherAPI.com. Cloning shares the connection pool.
#[derive(Clone, Debug)]
pub struct WeatherApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherApi {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(concat!("wxnow/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(LookupError::Network)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn build_url(&self, query: &LocationQuery) -> String {
        format!(
            "{}{CURRENT_ENDPOINT}?key={}&q={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query.as_str())
        )
    }

    /// Fetch current conditions for `query`. One request, no retry.
    pub async fn current(&self, query: &str) -> Result<WeatherResult, LookupError> {
        let query = LocationQuery::new(query)?;
        let url = self.build_url(&query);
        debug!(query = %query, "requesting current conditions");

        // Errors carry the request URL, and with it the API key.
        let response = self.client.get(&url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(query = %query, error = %e, "weather request failed");
            LookupError::Network(e)
        })?;

        let status = response.status();
        debug!(query = %query, %status, "weather request completed");
        if !status.is_success() {
            warn!(query = %query, %status, "weather service rejected request");
            return Err(LookupError::Http(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Network(e.without_url()))?;
        decode(&body).inspect_err(|e| warn!(query = %query, error = %e, "undecodable response"))
    }
}
