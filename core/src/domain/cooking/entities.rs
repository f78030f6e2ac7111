use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{
    common::entities::notice::Notice,
    cooking::{
        ports::SpeechSynthesizer,
        value_objects::{SpeechSettings, VoiceCommand, preferred_voice},
    },
};

pub const RECIPE_COMPLETED_NOTICE: &str = "Recipe completed! Enjoy your meal!";
pub const SPEECH_FAILED_NOTICE: &str = "Failed to speak instruction";

/// What a handled voice command did to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommandOutcome {
    pub command: VoiceCommand,
    pub current_step: usize,
    pub progress: f32,
    pub completed: bool,
    pub exit: bool,
    pub notices: Vec<Notice>,
}

/// Step-by-step cooking mode over a recipe's steps, narrated through a
/// [`SpeechSynthesizer`].
pub struct CookingSession<S: SpeechSynthesizer> {
    steps: Vec<String>,
    voice_instructions: Vec<String>,
    current_step: usize,
    is_speaking: bool,
    speech: SpeechSettings,
    synthesizer: S,
    notices: Vec<Notice>,
}

impl<S: SpeechSynthesizer> CookingSession<S> {
    pub fn new(steps: Vec<String>, voice_instructions: Vec<String>, synthesizer: S) -> Self {
        let speech = SpeechSettings {
            voice: preferred_voice(&synthesizer.available_voices()).cloned(),
            ..SpeechSettings::default()
        };

        Self {
            steps,
            voice_instructions,
            current_step: 0,
            is_speaking: false,
            speech,
            synthesizer,
            notices: Vec::new(),
        }
    }

    /// Reopen a session at `current_step`, clamped to the last step.
    pub fn resume(
        steps: Vec<String>,
        voice_instructions: Vec<String>,
        current_step: usize,
        synthesizer: S,
    ) -> Self {
        let mut session = Self::new(steps, voice_instructions, synthesizer);
        session.current_step = current_step.min(session.steps.len().saturating_sub(1));
        session
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_speaking(&self) -> bool {
        self.is_speaking
    }

    pub fn speech_settings(&self) -> &SpeechSettings {
        &self.speech
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 >= self.steps.len()
    }

    /// Percent of the way through the recipe. A single step is complete,
    /// an empty recipe has no progress.
    pub fn progress(&self) -> f32 {
        match self.steps.len() {
            0 => 0.0,
            1 => 100.0,
            len => self.current_step as f32 / (len - 1) as f32 * 100.0,
        }
    }

    /// Voice instruction for the current step, or the step text when the
    /// instructions run short.
    pub fn current_instruction(&self) -> Option<&str> {
        self.voice_instructions
            .get(self.current_step)
            .or_else(|| self.steps.get(self.current_step))
            .map(String::as_str)
    }

    /// Advance one step and narrate it. Returns false when the recipe is
    /// already on its last step.
    pub fn next_step(&mut self) -> bool {
        if self.is_last_step() {
            self.notices.push(Notice::success(RECIPE_COMPLETED_NOTICE));
            return false;
        }

        self.current_step += 1;
        self.narrate_current_step();
        true
    }

    pub fn previous_step(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }

        self.current_step -= 1;
        self.narrate_current_step();
        true
    }

    /// Stop narration if speaking, otherwise read the current step.
    pub fn toggle_voice(&mut self) {
        if self.is_speaking {
            self.synthesizer.cancel();
            self.is_speaking = false;
            return;
        }

        if let Some(text) = self.current_instruction().map(str::to_owned) {
            self.speak(&text);
        }
    }

    pub fn handle_command(&mut self, command: VoiceCommand) -> CommandOutcome {
        let mut completed = false;
        let mut exit = false;

        match &command {
            VoiceCommand::Next => completed = !self.next_step(),
            VoiceCommand::Previous => {
                self.previous_step();
            }
            VoiceCommand::Repeat => self.toggle_voice(),
            VoiceCommand::Exit => {
                self.stop();
                exit = true;
            }
            VoiceCommand::Unrecognized(transcript) => self
                .notices
                .push(Notice::info(format!("Command not recognized: \"{transcript}\""))),
        }

        CommandOutcome {
            command,
            current_step: self.current_step,
            progress: self.progress(),
            completed,
            exit,
            notices: self.take_notices(),
        }
    }

    /// Called by the client when an utterance ends on its own.
    pub fn speech_finished(&mut self) {
        self.is_speaking = false;
    }

    pub fn stop(&mut self) {
        if self.is_speaking {
            self.synthesizer.cancel();
            self.is_speaking = false;
        }
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn into_synthesizer(self) -> S {
        self.synthesizer
    }

    // Navigation only narrates when a voice instruction exists for the step.
    fn narrate_current_step(&mut self) {
        if let Some(text) = self.voice_instructions.get(self.current_step).cloned() {
            self.speak(&text);
        }
    }

    fn speak(&mut self, text: &str) {
        self.synthesizer.cancel();

        match self.synthesizer.speak(text, &self.speech) {
            Ok(()) => self.is_speaking = true,
            Err(e) => {
                error!("Speech synthesis failed: {}", e);
                self.is_speaking = false;
                self.notices.push(Notice::error(SPEECH_FAILED_NOTICE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cooking::ports::{MockSpeechSynthesizer, SpeechError};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn synthesizer() -> MockSpeechSynthesizer {
        let mut mock = MockSpeechSynthesizer::new();
        mock.expect_available_voices()
            .returning(|| vec!["Alex".to_string(), "Samantha".to_string()]);
        mock.expect_cancel().returning(|| ());
        mock
    }

    #[test]
    fn test_progress() {
        let three = CookingSession::new(strings(&["a", "b", "c"]), vec![], synthesizer());
        assert_eq!(three.progress(), 0.0);

        let mut three = three;
        three.current_step = 1;
        assert_eq!(three.progress(), 50.0);

        let one = CookingSession::new(strings(&["only"]), vec![], synthesizer());
        assert_eq!(one.progress(), 100.0);

        let none = CookingSession::new(vec![], vec![], synthesizer());
        assert_eq!(none.progress(), 0.0);
        assert_eq!(none.current_instruction(), None);
    }

    #[test]
    fn test_new_session_prefers_known_voice() {
        let session = CookingSession::new(strings(&["a"]), vec![], synthesizer());

        assert_eq!(session.speech_settings().voice.as_deref(), Some("Samantha"));
        assert_eq!(session.speech_settings().rate, 0.9);
        assert_eq!(session.speech_settings().pitch, 1.0);
    }

    #[test]
    fn test_next_step_speaks_voice_instruction() {
        let mut mock = synthesizer();
        mock.expect_speak()
            .withf(|text, _| text == "Now chop the onion")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut session = CookingSession::new(
            strings(&["Heat oil", "Chop onion"]),
            strings(&["Start by heating oil", "Now chop the onion"]),
            mock,
        );

        assert!(session.next_step());
        assert_eq!(session.current_step(), 1);
        assert!(session.is_speaking());
        assert_eq!(session.current_instruction(), Some("Now chop the onion"));
    }

    #[test]
    fn test_next_on_last_step_completes() {
        let mut session = CookingSession::new(strings(&["a", "b"]), vec![], synthesizer());
        session.current_step = 1;

        let outcome = session.handle_command(VoiceCommand::Next);

        assert!(outcome.completed);
        assert_eq!(outcome.current_step, 1);
        assert_eq!(outcome.progress, 100.0);
        assert_eq!(outcome.notices, vec![Notice::success(RECIPE_COMPLETED_NOTICE)]);
    }

    #[test]
    fn test_previous_on_first_step_is_noop() {
        let mut session = CookingSession::new(strings(&["a", "b"]), vec![], synthesizer());

        assert!(!session.previous_step());
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn test_navigation_without_instructions_stays_silent() {
        let mut mock = synthesizer();
        mock.expect_speak().never();

        let mut session = CookingSession::new(strings(&["a", "b", "c"]), vec![], mock);
        session.next_step();
        session.next_step();
        session.previous_step();

        assert_eq!(session.current_step(), 1);
        assert!(!session.is_speaking());
    }

    #[test]
    fn test_toggle_voice_falls_back_to_step_text() {
        let mut mock = synthesizer();
        mock.expect_speak()
            .withf(|text, _| text == "Simmer for 20 minutes")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut session =
            CookingSession::new(strings(&["Simmer for 20 minutes"]), vec![], mock);

        session.toggle_voice();
        assert!(session.is_speaking());

        session.toggle_voice();
        assert!(!session.is_speaking());
    }

    #[test]
    fn test_finished_utterance_clears_flag() {
        let mut mock = synthesizer();
        mock.expect_speak().times(2).returning(|_, _| Ok(()));

        let mut session = CookingSession::new(strings(&["Rest the dough"]), vec![], mock);

        session.toggle_voice();
        session.speech_finished();
        assert!(!session.is_speaking());

        session.toggle_voice();
        assert!(session.is_speaking());
    }

    #[test]
    fn test_speech_failure_resets_flag_with_notice() {
        let mut mock = synthesizer();
        mock.expect_speak()
            .returning(|_, _| Err(SpeechError::Unavailable));

        let mut session = CookingSession::new(strings(&["a"]), vec![], mock);
        let outcome = session.handle_command(VoiceCommand::Repeat);

        assert!(!session.is_speaking());
        assert_eq!(outcome.notices, vec![Notice::error(SPEECH_FAILED_NOTICE)]);
        assert_eq!(outcome.notices[0].message, "Failed to speak instruction");
    }

    #[test]
    fn test_unrecognized_command_reports_transcript() {
        let mut session = CookingSession::new(strings(&["a"]), vec![], synthesizer());
        let outcome = session.handle_command(VoiceCommand::parse("Sing a song"));

        assert_eq!(
            outcome.notices,
            vec![Notice::info("Command not recognized: \"sing a song\"")]
        );
        assert!(!outcome.exit);
    }

    #[test]
    fn test_exit_stops_speaking() {
        let mut mock = synthesizer();
        mock.expect_speak().returning(|_, _| Ok(()));

        let mut session = CookingSession::new(strings(&["a"]), vec![], mock);
        session.toggle_voice();
        let outcome = session.handle_command(VoiceCommand::Exit);

        assert!(outcome.exit);
        assert!(!session.is_speaking());
    }

    #[test]
    fn test_resume_clamps_step() {
        let session = CookingSession::resume(strings(&["a", "b"]), vec![], 9, synthesizer());

        assert_eq!(session.current_step(), 1);
    }
}
