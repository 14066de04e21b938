use crate::core::load_outcome;
use web_sys as web;

/// Embed frame, URL input and error line of the video panel.
pub struct VideoLoader {
    pub frame: Option<web::HtmlIFrameElement>,
    pub input: web::HtmlInputElement,
    pub error: Option<web::Element>,
}

impl VideoLoader {
    pub fn handle_load_click(&self) {
        match load_outcome(&self.input.value()) {
            Ok(src) => self.apply_video(&src),
            Err(message) => self.set_error(message),
        }
    }

    /// Point the embed frame at `src` and clear any previous error.
    pub fn apply_video(&self, src: &str) {
        let Some(frame) = &self.frame else {
            return;
        };
        log::info!("[video] loading {}", src);
        frame.set_src(src);
        self.set_error("");
    }

    fn set_error(&self, text: &str) {
        if let Some(el) = &self.error {
            el.set_text_content(Some(text));
        }
    }
}
