pub mod handle_voice_command;
