use crate::constants::LOAD_VIDEO_ID;
use crate::dom;
use crate::video::VideoLoader;
use web_sys as web;

pub fn wire_load_button(document: &web::Document, loader: VideoLoader) -> anyhow::Result<()> {
    let button = document
        .get_element_by_id(LOAD_VIDEO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", LOAD_VIDEO_ID))?;
    dom::add_click_listener(&button, move || loader.handle_load_click());
    Ok(())
}
