//! Media URL validation
//!
//! Video links are checked before they reach a player. The error's
//! `Display` text is what the user sees in the alert.

use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("Please enter a video URL.")]
    Empty,

    #[error("\"{0}\" is not a valid URL.")]
    Malformed(String),

    #[error("Only http and https video links are supported (got {0}).")]
    UnsupportedScheme(String),

    #[error("The video URL has no host.")]
    MissingHost,
}

/// Parses and checks a user-supplied video URL.
pub fn validate_video_url(raw: &str) -> Result<Url, MediaError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MediaError::Empty);
    }
    let url = Url::parse(raw).map_err(|_| MediaError::Malformed(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(MediaError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(MediaError::MissingHost);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_links() {
        let url = validate_video_url("  https://videos.example.org/clip.mp4 ").unwrap();
        assert_eq!(url.host_str(), Some("videos.example.org"));
        assert!(validate_video_url("http://10.0.0.5:8080/v.webm").is_ok());
    }

    #[test]
    fn test_rejections() {
        assert_eq!(validate_video_url(""), Err(MediaError::Empty));
        assert!(matches!(
            validate_video_url("not a url"),
            Err(MediaError::Malformed(_))
        ));
        assert_eq!(
            validate_video_url("ftp://example.org/v.mp4"),
            Err(MediaError::UnsupportedScheme("ftp".into()))
        );
        assert_eq!(
            validate_video_url("file:///tmp/v.mp4"),
            Err(MediaError::UnsupportedScheme("file".into()))
        );
    }

    #[test]
    fn test_alert_text() {
        let err = validate_video_url("ftp://example.org/v.mp4").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only http and https video links are supported (got ftp)."
        );
    }
}
