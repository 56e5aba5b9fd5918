//! Utterance value objects

use std::fmt;

/// Identifier of an utterance submitted by a speech controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtteranceId(u64);

impl UtteranceId {
    /// Create an identifier from a raw sequence number
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The identifier that follows this one
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Normalized speaking rate in `0.0..=1.0`.
///
/// `0.5` is the engine's normal speaking rate; engines map the scale onto
/// their own units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SpeechRate(f32);

impl SpeechRate {
    pub const MIN: Self = Self(0.0);
    pub const NORMAL: Self = Self(0.5);
    pub const MAX: Self = Self(1.0);

    /// Create a rate, clamping into the valid range. NaN maps to normal.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::NORMAL;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A single unit of text submitted to a speech engine
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub text: String,
    pub voice_identifier: String,
    pub rate: SpeechRate,
}

impl Utterance {
    /// Create an utterance at the normal speaking rate
    pub fn new(id: UtteranceId, text: impl Into<String>, voice_identifier: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            voice_identifier: voice_identifier.into(),
            rate: SpeechRate::NORMAL,
        }
    }
}
