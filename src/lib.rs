#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod radar;
mod timer;
mod video;

use constants::{RADAR_ID, VIDEO_ERROR_ID, VIDEO_FRAME_ID, VIDEO_INPUT_ID};
use radar::Radar;
use video::VideoLoader;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sound-radar starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document()?;

    // The two panels are independent; a page may carry either one.
    if let Err(e) = init_radar(&document) {
        log::warn!("radar disabled: {:?}", e);
    }
    if let Err(e) = init_video(&document) {
        log::warn!("video loader disabled: {:?}", e);
    }
    Ok(())
}

fn init_radar(document: &web::Document) -> anyhow::Result<()> {
    let region = document
        .get_element_by_id(RADAR_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", RADAR_ID))?;
    let radar = Radar::new(document.clone(), region);
    let wired = events::wire_trigger_buttons(document, &radar)?;
    events::wire_teardown(&radar);
    log::info!("[radar] wired {} trigger(s)", wired);
    Ok(())
}

fn init_video(document: &web::Document) -> anyhow::Result<()> {
    let input = dom::element_by_id::<web::HtmlInputElement>(document, VIDEO_INPUT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", VIDEO_INPUT_ID))?;
    let loader = VideoLoader {
        frame: dom::element_by_id::<web::HtmlIFrameElement>(document, VIDEO_FRAME_ID),
        input,
        error: dom::element_by_id::<web::Element>(document, VIDEO_ERROR_ID),
    };
    events::wire_load_button(document, loader)
}
