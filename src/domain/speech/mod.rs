//! Speech domain module

mod state;
mod utterance;
mod voice;

pub use state::SpeechState;
pub use utterance::{SpeechRate, Utterance, UtteranceId};
pub use voice::{
    same_order, select_voice, sort_voices, Voice, VoiceQuality, DEFAULT_PREFERRED_LANGUAGE,
};
