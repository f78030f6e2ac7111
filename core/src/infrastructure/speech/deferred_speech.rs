use crate::domain::cooking::{
    ports::{SpeechError, SpeechSynthesizer},
    value_objects::SpeechSettings,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub settings: SpeechSettings,
}

/// Synthesizer for sessions driven over HTTP: nothing is played on the
/// server, the pending utterance is handed back to the client to speak.
#[derive(Debug, Clone, Default)]
pub struct DeferredSpeech {
    voices: Vec<String>,
    pending: Option<Utterance>,
}

impl DeferredSpeech {
    pub fn new(voices: Vec<String>) -> Self {
        Self {
            voices,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&Utterance> {
        self.pending.as_ref()
    }

    pub fn into_pending(self) -> Option<Utterance> {
        self.pending
    }
}

impl SpeechSynthesizer for DeferredSpeech {
    fn available_voices(&self) -> Vec<String> {
        self.voices.clone()
    }

    fn speak(&mut self, text: &str, settings: &SpeechSettings) -> Result<(), SpeechError> {
        self.pending = Some(Utterance {
            text: text.to_string(),
            settings: settings.clone(),
        });
        Ok(())
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
