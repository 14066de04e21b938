use crate::constants::{EVENT_ATTR, TRIGGER_SELECTOR};
use crate::dom;
use crate::radar::Radar;
use web_sys as web;

// Every `[data-event]` element becomes a trigger for its event key
pub fn wire_trigger_buttons(document: &web::Document, radar: &Radar) -> anyhow::Result<usize> {
    let buttons = dom::query_all(document, TRIGGER_SELECTOR)?;
    for btn in &buttons {
        let radar = radar.clone();
        let source = btn.clone();
        dom::add_click_listener(btn, move || {
            // read on click so a changed attribute is honoured
            let key = source.get_attribute(EVENT_ATTR).unwrap_or_default();
            radar.handle_trigger_click(&key);
        });
    }
    Ok(buttons.len())
}

// Drop pending timers and live pings when the page goes away
pub fn wire_teardown(radar: &Radar) {
    let radar = radar.clone();
    dom::add_window_listener("pagehide", move || radar.teardown());
}
