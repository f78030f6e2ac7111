use thiserror::Error;

use crate::domain::cooking::value_objects::SpeechSettings;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,

    #[error("speech synthesis failed: {0}")]
    Failed(String),
}

/// Text-to-speech engine owned by the client device.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechSynthesizer: Send {
    fn available_voices(&self) -> Vec<String>;

    fn speak(&mut self, text: &str, settings: &SpeechSettings) -> Result<(), SpeechError>;

    /// Stop the current utterance, if any.
    fn cancel(&mut self);
}
