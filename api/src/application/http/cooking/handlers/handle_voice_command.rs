use ferrischef_core::{
    domain::cooking::{CookingSession, entities::CommandOutcome, value_objects::VoiceCommand},
    infrastructure::speech::DeferredSpeech,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::application::http::{
    cooking::validators::VoiceCommandValidator,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};

/// Text the client should read aloud, with the voice settings to use.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpeechResponse {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub voice: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoiceCommandResponse {
    pub data: CommandOutcome,
    /// Instruction for the step the session ended on.
    pub instruction: Option<String>,
    pub speech: Option<SpeechResponse>,
}

#[utoipa::path(
    post,
    path = "/command",
    tag = "cooking",
    summary = "Interpret a cooking-mode voice command",
    description = "Applies a spoken command (next, previous, repeat, exit) to a cooking session at the given step and returns where the session ended up.",
    responses(
        (status = 200, body = VoiceCommandResponse)
    ),
    request_body = VoiceCommandValidator
)]
pub async fn handle_voice_command(
    ValidateJson(payload): ValidateJson<VoiceCommandValidator>,
) -> Result<Response<VoiceCommandResponse>, ApiError> {
    let command = VoiceCommand::parse(&payload.transcript);
    debug!(?command, current_step = payload.current_step, "voice command");

    let mut session = CookingSession::resume(
        payload.steps,
        payload.instructions,
        payload.current_step,
        DeferredSpeech::new(payload.voices),
    );

    let outcome = session.handle_command(command);
    let instruction = session.current_instruction().map(str::to_owned);

    let speech = session
        .into_synthesizer()
        .into_pending()
        .map(|utterance| SpeechResponse {
            text: utterance.text,
            rate: utterance.settings.rate,
            pitch: utterance.settings.pitch,
            voice: utterance.settings.voice,
        });

    Ok(Response::OK(VoiceCommandResponse {
        data: outcome,
        instruction,
        speech,
    }))
}
