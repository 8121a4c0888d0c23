//! Transcription capability
//!
//! The video widget asks a [`Transcriber`] for text; which service answers
//! is decided by whoever builds the widget. [`MockTranscriber`] stands in
//! until a real speech-to-text backend is wired up.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Raw audio handed to a transcriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub data: Vec<u8>,
    /// MIME type, e.g. `audio/webm`
    pub mime_type: String,
}

impl AudioClip {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    /// 0.0..=1.0
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptionError {
    #[error("No audio to transcribe")]
    EmptyClip,

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("Transcription service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError>;
}

/// Canned transcriber with simulated latency.
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    delay: Duration,
    text: String,
}

impl MockTranscriber {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            delay,
            text: text.into(),
        }
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new(
            "There is a large pothole on the main road near the bus stop.",
            Duration::from_millis(1500),
        )
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        if clip.is_empty() {
            return Err(TranscriptionError::EmptyClip);
        }
        if !clip.mime_type.starts_with("audio/") && !clip.mime_type.starts_with("video/") {
            return Err(TranscriptionError::UnsupportedFormat(clip.mime_type.clone()));
        }
        tracing::debug!(bytes = clip.data.len(), "Mock transcription started");
        tokio::time::sleep(self.delay).await;
        Ok(Transcript {
            text: self.text.clone(),
            confidence: 0.9,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_mock_returns_canned_text_after_delay() {
        let transcriber = MockTranscriber::new("hello", Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        let transcript = transcriber
            .transcribe(&AudioClip::new(vec![1, 2, 3], "audio/webm"))
            .await
            .unwrap();
        assert_eq!(transcript.text, "hello");
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_mock_rejects_bad_input() {
        let transcriber = MockTranscriber::new("x", Duration::ZERO);
        assert_eq!(
            transcriber.transcribe(&AudioClip::new(Vec::new(), "audio/webm")).await,
            Err(TranscriptionError::EmptyClip)
        );
        assert_eq!(
            transcriber.transcribe(&AudioClip::new(vec![0], "text/plain")).await,
            Err(TranscriptionError::UnsupportedFormat("text/plain".into()))
        );
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let transcriber: Box<dyn Transcriber> = Box::new(MockTranscriber::new("boxed", Duration::ZERO));
        let transcript = transcriber
            .transcribe(&AudioClip::new(vec![9], "video/mp4"))
            .await
            .unwrap();
        assert_eq!(transcript.text, "boxed");
    }
}
