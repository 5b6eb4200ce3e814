use crate::api;
use crate::dom;
use lab_core::{sample_introductions, TableRow, WeatherEntry};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Fetch the user table and render one row per user. Failure degrades to a
/// static message; there is no retry.
pub fn load_table_section(document: &web::Document) {
    let doc = document.clone();
    spawn_local(async move {
        let rows = match api::fetch_table_data().await {
            Ok(json) => serde_json::from_str::<Vec<TableRow>>(&json),
            Err(e) => {
                log::warn!("[data] table fetch failed: {e}");
                dom::set_text(&doc, "table-status", "Failed to load table data.");
                return;
            }
        };
        match rows {
            Ok(rows) => {
                render_table(&doc, &rows);
                log::info!("[data] table ready: {} rows", rows.len());
            }
            Err(e) => {
                log::warn!("[data] table payload malformed: {e}");
                dom::set_text(&doc, "table-status", "Failed to load table data.");
            }
        }
    });
}

/// Fetch the weather report (after its simulated latency) and render one
/// card per city.
pub fn load_weather_section(document: &web::Document) {
    let doc = document.clone();
    spawn_local(async move {
        let response = api::fetch_weather().await;
        if response.status != 200 {
            log::warn!("[data] weather endpoint returned {}", response.status);
            dom::set_text(&doc, "weather-status", "Failed to load weather data.");
            return;
        }
        match serde_json::from_str::<Vec<WeatherEntry>>(&response.body) {
            Ok(entries) => {
                render_weather(&doc, &entries);
                log::info!("[data] weather ready: {} cities", entries.len());
            }
            Err(e) => {
                log::warn!("[data] weather payload malformed: {e}");
                dom::set_text(&doc, "weather-status", "Failed to load weather data.");
            }
        }
    });
}

/// Render the object-model demo lines.
pub fn render_profiles(document: &web::Document) {
    if let Some(list) = document.get_element_by_id("profiles-list") {
        let items: String = sample_introductions()
            .iter()
            .map(|line| format!("<li>{line}</li>"))
            .collect();
        list.set_inner_html(&items);
    }
}

fn render_table(document: &web::Document, rows: &[TableRow]) {
    if let Some(body) = document.get_element_by_id("table-body") {
        let html: String = rows
            .iter()
            .map(|r| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    r.id,
                    r.name,
                    r.email,
                    r.role,
                    if r.online { "online" } else { "offline" }
                )
            })
            .collect();
        body.set_inner_html(&html);
        dom::set_text(document, "table-status", "");
    }
}

fn render_weather(document: &web::Document, entries: &[WeatherEntry]) {
    if let Some(cards) = document.get_element_by_id("weather-cards") {
        let html: String = entries
            .iter()
            .map(|e| {
                let condition = e
                    .weather
                    .first()
                    .map(|c| c.description.as_str())
                    .unwrap_or("unknown");
                format!(
                    "<div class=\"weather-card\"><h3>{} ({})</h3>\
                     <p>{:.1} °C, feels like {:.1} °C</p>\
                     <p>{}, humidity {}%, wind {:.1} m/s</p></div>",
                    e.name,
                    e.sys.country,
                    e.main.temp,
                    e.main.feels_like,
                    condition,
                    e.main.humidity,
                    e.wind.speed
                )
            })
            .collect();
        cards.set_inner_html(&html);
        dom::set_text(document, "weather-status", "");
    }
}
