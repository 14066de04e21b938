use std::fmt;
use thiserror::Error;
use url::Url;

pub const VIDEO_DOMAIN: &str = "youtube.com";
pub const SHORT_LINK_HOST: &str = "youtu.be";
pub const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";
pub const EMBED_QUERY: &str = "rel=0&playsinline=1";

pub const LOAD_ERROR_MESSAGE: &str = "Could not parse a YouTube video ID from that URL.";

/// Why a pasted link did not yield a video id.
#[derive(Debug, Error, PartialEq)]
pub enum VideoLinkError {
    #[error("not a URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("URL has no host")]
    NoHost,
    #[error("unsupported host {0:?}")]
    UnsupportedHost(String),
    #[error("no video id in path {0:?}")]
    UnrecognizedPath(String),
    #[error("video id is empty")]
    EmptyId,
}

/// A non-empty platform video identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Result<Self, VideoLinkError> {
        let id = id.into();
        if id.is_empty() {
            return Err(VideoLinkError::EmptyId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from a watch, short-link, shorts or embed URL.
pub fn resolve_video_id(input: &str) -> Result<VideoId, VideoLinkError> {
    let url = Url::parse(input)?;
    let host = url.host_str().ok_or(VideoLinkError::NoHost)?;
    let path = url.path();
    let on_platform = host.contains(VIDEO_DOMAIN);

    if on_platform {
        if let Some(rest) = path.strip_prefix("/shorts/") {
            return VideoId::new(rest.split('/').next().unwrap_or_default());
        }
    }
    if host == SHORT_LINK_HOST {
        return VideoId::new(path.strip_prefix('/').unwrap_or(path));
    }
    if !on_platform {
        return Err(VideoLinkError::UnsupportedHost(host.to_string()));
    }
    if path == "/watch" {
        let v = url
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();
        return VideoId::new(v);
    }
    let mut segments = path.split('/');
    if segments.by_ref().any(|s| s == "embed") {
        return VideoId::new(segments.next().unwrap_or_default());
    }
    Err(VideoLinkError::UnrecognizedPath(path.to_string()))
}

/// Like [`resolve_video_id`], but any failure is simply "no id".
pub fn parse_video_id(input: &str) -> Option<VideoId> {
    match resolve_video_id(input) {
        Ok(id) => Some(id),
        Err(e) => {
            log::debug!("[video] rejected {:?}: {}", input, e);
            None
        }
    }
}

/// Privacy-enhanced embed URL without related-video suggestions.
pub fn embed_url(id: &VideoId) -> String {
    format!("{}{}?{}", EMBED_BASE, id, EMBED_QUERY)
}

/// Decide what a load click does with the raw input text: the embed URL to
/// assign, or the message to show while leaving the frame alone.
pub fn load_outcome(raw: &str) -> Result<String, &'static str> {
    parse_video_id(raw.trim())
        .map(|id| embed_url(&id))
        .ok_or(LOAD_ERROR_MESSAGE)
}
