//! Mock fetch shim for the two data endpoints. Returns the JSON text a real
//! backend would serve; the weather route adds the simulated latency and
//! maps internal failure to the `{"error": ...}` body with 500 semantics.

use lab_core::{error_body, table_rows, weather_report, MockError, WEATHER_DELAY_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Simulated response status + body.
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

/// GET /api/tabledata: static user rows, no artificial delay.
pub async fn fetch_table_data() -> anyhow::Result<String> {
    serde_json::to_string(&table_rows()).map_err(|e| anyhow::anyhow!("{e}"))
}

/// GET /api/weather: jittered per-city report after ~500 ms.
pub async fn fetch_weather() -> MockResponse {
    delay_ms(WEATHER_DELAY_MS).await;
    let now_unix = (js_sys::Date::now() / 1000.0) as i64;
    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    match serde_json::to_string(&weather_report(&mut rng, now_unix)) {
        Ok(body) => MockResponse { status: 200, body },
        Err(e) => {
            log::warn!("[data] weather serialization failed: {e}");
            MockResponse {
                status: 500,
                body: error_body(&MockError::WeatherUnavailable).to_string(),
            }
        }
    }
}

/// Resolve after `ms` milliseconds via a host timeout.
async fn delay_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = JsFuture::from(promise).await;
}
