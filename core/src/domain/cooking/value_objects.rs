use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Voices tried in order when picking a narrator.
pub const PREFERRED_VOICE_HINTS: [&str; 3] = ["Samantha", "Google US English Female", "Female"];

pub const DEFAULT_SPEECH_RATE: f32 = 0.9;
pub const DEFAULT_SPEECH_PITCH: f32 = 1.0;

/// Hands-free command recognized from a speech transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoiceCommand {
    Next,
    Previous,
    Repeat,
    Exit,
    Unrecognized(String),
}

impl VoiceCommand {
    pub fn parse(transcript: &str) -> Self {
        let command = transcript.trim().to_lowercase();
        let said = |words: &[&str]| words.iter().any(|word| command.contains(word));

        if said(&["next", "forward"]) {
            Self::Next
        } else if said(&["previous", "back"]) {
            Self::Previous
        } else if said(&["repeat", "again"]) {
            Self::Repeat
        } else if said(&["exit", "quit", "close"]) {
            Self::Exit
        } else {
            Self::Unrecognized(command)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub rate: f32,
    pub pitch: f32,
    pub voice: Option<String>,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SPEECH_RATE,
            pitch: DEFAULT_SPEECH_PITCH,
            voice: None,
        }
    }
}

pub fn preferred_voice(voices: &[String]) -> Option<&String> {
    voices.iter().find(|voice| {
        PREFERRED_VOICE_HINTS
            .iter()
            .any(|hint| voice.contains(hint))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_voice_commands() {
        assert_eq!(VoiceCommand::parse("Next step please"), VoiceCommand::Next);
        assert_eq!(VoiceCommand::parse("go FORWARD"), VoiceCommand::Next);
        assert_eq!(VoiceCommand::parse("go back"), VoiceCommand::Previous);
        assert_eq!(VoiceCommand::parse("previous"), VoiceCommand::Previous);
        assert_eq!(VoiceCommand::parse("say that again"), VoiceCommand::Repeat);
        assert_eq!(VoiceCommand::parse("repeat"), VoiceCommand::Repeat);
        assert_eq!(VoiceCommand::parse("quit"), VoiceCommand::Exit);
        assert_eq!(VoiceCommand::parse("close it"), VoiceCommand::Exit);
        assert_eq!(
            VoiceCommand::parse("  Preheat the OVEN "),
            VoiceCommand::Unrecognized("preheat the oven".to_string())
        );
    }

    #[test]
    fn test_preferred_voice() {
        let voices = vec![
            "Alex".to_string(),
            "Microsoft Zira - English (United States) Female".to_string(),
            "Samantha".to_string(),
        ];
        assert_eq!(
            preferred_voice(&voices).map(String::as_str),
            Some("Microsoft Zira - English (United States) Female")
        );
        assert_eq!(preferred_voice(&["Alex".to_string()]), None);
    }
}
