// DOM hooks and styling shared by the radar and the video loader.

// Element ids
pub const RADAR_ID: &str = "radar";
pub const VIDEO_FRAME_ID: &str = "video-frame";
pub const VIDEO_INPUT_ID: &str = "video-url";
pub const LOAD_VIDEO_ID: &str = "load-video";
pub const VIDEO_ERROR_ID: &str = "video-error";

// Trigger buttons carry the event key in this attribute
pub const EVENT_ATTR: &str = "data-event";
pub const TRIGGER_SELECTOR: &str = "[data-event]";

// Classes
pub const PING_CLASS: &str = "sound-ping"; // base class, combined with the event modifier
pub const EDGE_ACTIVE_CLASS: &str = "edge-indicator--active";
