use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::model::{ConditionEntry, Sun, Temperature, WeatherReport, Wind};

use super::WeatherClient;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenWeatherMap current-weather client.
///
/// Requests omit the `units` parameter on purpose: without it the provider
/// reports Kelvin, which is exactly what [`WeatherReport`] stores.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Point the client at a different endpoint, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the default 10 s request timeout. Requests past it surface
    /// as [`FetchError::Network`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::transport)?;

        if !status.is_success() {
            debug!(%status, "current-weather request rejected");
            return Err(FetchError::InvalidResponse(format!(
                "status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let payload: OwCurrent = serde_json::from_str(&body)
            .map_err(|err| FetchError::InvalidResponse(format!("malformed payload: {err}")))?;

        payload.into_report()
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn fetch_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, FetchError> {
        debug!(latitude, longitude, "requesting current weather by coordinates");

        let lat = latitude.to_string();
        let lon = longitude.to_string();
        self.fetch(&[("lat", lat.as_str()), ("lon", lon.as_str())]).await
    }

    async fn fetch_by_city_name(&self, name: &str) -> Result<WeatherReport, FetchError> {
        debug!(city = name, "requesting current weather by city name");

        self.fetch(&[("q", name)]).await
    }
}

// Raw payload mirroring the provider schema. Field names are the provider
// contract; do not rename them.

#[derive(Debug, Deserialize)]
struct OwCurrent {
    weather: Vec<OwCondition>,
    main: OwMain,
    wind: OwWind,
    sys: OwSys,
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    id: i32,
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    /// Some stations report 360 or out-of-band values; normalized on
    /// conversion.
    deg: i32,
}

#[allow(dead_code)] // type/id/country arrive in the payload but go unused
#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(rename = "type")]
    type_: Option<i64>,
    id: Option<i64>,
    country: Option<String>,
    sunrise: i64,
    sunset: i64,
}

impl OwCurrent {
    fn into_report(self) -> Result<WeatherReport, FetchError> {
        if self.weather.is_empty() {
            return Err(FetchError::InvalidResponse(
                "payload carried no weather conditions".to_owned(),
            ));
        }

        let conditions = self
            .weather
            .into_iter()
            .map(|w| ConditionEntry {
                code: w.id,
                category: w.main,
                description: w.description,
                icon_id: w.icon,
            })
            .collect();

        Ok(WeatherReport {
            conditions,
            temperature: Temperature {
                current: self.main.temp,
                feels_like: self.main.feels_like,
                min: self.main.temp_min,
                max: self.main.temp_max,
            },
            pressure_hpa: self.main.pressure,
            humidity_pct: self.main.humidity,
            wind: Wind {
                speed_mps: self.wind.speed,
                direction_deg: self.wind.deg.rem_euclid(360) as u16,
            },
            sun: Sun {
                sunrise_epoch: self.sys.sunrise,
                sunset_epoch: self.sys.sunset,
            },
            location_name: self.name,
            city_id: self.id,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_owned();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
