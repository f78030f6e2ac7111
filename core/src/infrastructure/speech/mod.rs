pub mod deferred_speech;

pub use deferred_speech::DeferredSpeech;
