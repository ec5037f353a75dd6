pub mod client;
pub mod types;

pub use client::SpeechClient;
pub use types::{SpeakerDirectory, SpeakerId, SynthesisRequest};
