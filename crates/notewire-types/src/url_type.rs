use serde::{Deserialize, Serialize};
use std::fmt;

/// URL classification outcome driving backend selection.
///
/// Determined once per input URL and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrlType {
    /// X/Twitter thread or profile
    #[serde(rename = "x-thread")]
    Thread,
    /// YouTube video (canonical, short-link or mobile form)
    #[serde(rename = "youtube")]
    Video,
    /// Everything else
    #[serde(rename = "article")]
    Article,
}

impl UrlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlType::Thread => "x-thread",
            UrlType::Video => "youtube",
            UrlType::Article => "article",
        }
    }
}

impl fmt::Display for UrlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
