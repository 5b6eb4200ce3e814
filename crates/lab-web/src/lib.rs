#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod api;
mod dom;
mod frame;
mod particles;
mod player;
mod pointer;
mod sections;
mod visualizer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lab-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                dom::set_text(&document, "app-status", "This demo could not start.");
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Particle field: a missing canvas or 2D context degrades to a message,
    // not a failed init.
    match particles::ParticleScene::attach(&document, "particle-canvas") {
        Ok(scene) => {
            pointer::wire_pointer_handlers(&scene);
            scene.start();
        }
        Err(e) => {
            log::warn!("[field] unavailable: {e}");
            dom::set_text(
                &document,
                "particle-status",
                "Canvas drawing is not supported in this browser.",
            );
        }
    }

    // Audio player + visualizer.
    match player::AudioPlayer::attach(&document) {
        Ok(_player) => log::info!("[audio] player wired"),
        Err(e) => {
            log::warn!("[audio] unavailable: {e}");
            dom::set_text(
                &document,
                "player-status",
                "Audio playback is not supported in this browser.",
            );
        }
    }

    // Mock data sections and the object-model demo.
    sections::load_table_section(&document);
    sections::load_weather_section(&document);
    sections::render_profiles(&document);

    Ok(())
}
