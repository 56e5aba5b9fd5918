//! Synthesis voices and the policies that order and select them

use std::cmp::Ordering;
use std::fmt;

/// Language prefix whose voices are listed first by default
pub const DEFAULT_PREFERRED_LANGUAGE: &str = "zh";

/// Voice quality tiers, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum VoiceQuality {
    #[default]
    Default,
    Enhanced,
    Premium,
}

impl VoiceQuality {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Enhanced => "enhanced",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for VoiceQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named, language-tagged synthesis profile offered by a speech engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Voice {
    pub identifier: String,
    pub name: String,
    /// BCP-47 style language tag, e.g. `zh`, `en-us`
    pub language: String,
    pub quality: VoiceQuality,
}

impl Voice {
    /// Create a voice with default quality
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            language: language.into(),
            quality: VoiceQuality::Default,
        }
    }

    /// Set the quality tier
    pub fn with_quality(mut self, quality: VoiceQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Check whether the language tag starts with the given prefix
    pub fn speaks(&self, language_prefix: &str) -> bool {
        self.language.starts_with(language_prefix)
    }
}

/// Sort voices for display and fallback selection.
///
/// Voices whose language starts with `preferred_language` come first; within
/// each group higher quality comes first. Ties keep the engine's order.
pub fn sort_voices(mut voices: Vec<Voice>, preferred_language: &str) -> Vec<Voice> {
    voices.sort_by(|a, b| compare_voices(a, b, preferred_language));
    voices
}

fn compare_voices(a: &Voice, b: &Voice, preferred_language: &str) -> Ordering {
    let a_preferred = a.speaks(preferred_language);
    let b_preferred = b.speaks(preferred_language);

    b_preferred
        .cmp(&a_preferred)
        .then_with(|| b.quality.cmp(&a.quality))
}

/// Check whether two voice lists have the same identifiers in the same order
pub fn same_order(current: &[Voice], candidate: &[Voice]) -> bool {
    current.len() == candidate.len()
        && current
            .iter()
            .zip(candidate)
            .all(|(a, b)| a.identifier == b.identifier)
}

/// Resolve the voice to speak with.
///
/// Returns the preferred identifier when it names a voice in `voices`,
/// otherwise the first voice, or `None` when there are no voices.
pub fn select_voice(preference: Option<&str>, voices: &[Voice]) -> Option<String> {
    preference
        .and_then(|id| voices.iter().find(|v| v.identifier == id))
        .or_else(|| voices.first())
        .map(|v| v.identifier.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(id: &str, language: &str, quality: VoiceQuality) -> Voice {
        Voice::new(id, id, language).with_quality(quality)
    }

    fn ids(voices: &[Voice]) -> Vec<&str> {
        voices.iter().map(|v| v.identifier.as_str()).collect()
    }

    #[test]
    fn preferred_language_sorts_first_regardless_of_quality() {
        let voices = vec![
            voice("en-premium", "en-US", VoiceQuality::Premium),
            voice("zh-default", "zh-CN", VoiceQuality::Default),
            voice("fr-enhanced", "fr-FR", VoiceQuality::Enhanced),
        ];

        let sorted = sort_voices(voices, "zh");
        assert_eq!(sorted[0].identifier, "zh-default");
    }

    #[test]
    fn higher_quality_first_within_group() {
        let voices = vec![
            voice("zh-a", "zh-CN", VoiceQuality::Default),
            voice("en-a", "en-US", VoiceQuality::Default),
            voice("zh-b", "zh-TW", VoiceQuality::Premium),
            voice("en-b", "en-GB", VoiceQuality::Enhanced),
        ];

        let sorted = sort_voices(voices, "zh");
        assert_eq!(ids(&sorted), vec!["zh-b", "zh-a", "en-b", "en-a"]);
    }

    #[test]
    fn ties_keep_engine_order() {
        let voices = vec![
            voice("de", "de", VoiceQuality::Default),
            voice("en", "en", VoiceQuality::Default),
            voice("fr", "fr", VoiceQuality::Default),
        ];

        let sorted = sort_voices(voices, "zh");
        assert_eq!(ids(&sorted), vec!["de", "en", "fr"]);
    }

    #[test]
    fn sort_with_other_prefix() {
        let voices = vec![
            voice("zh", "zh", VoiceQuality::Premium),
            voice("en-us", "en-us", VoiceQuality::Default),
        ];

        let sorted = sort_voices(voices, "en");
        assert_eq!(ids(&sorted), vec!["en-us", "zh"]);
    }

    #[test]
    fn same_order_compares_identifiers_only() {
        let a = vec![voice("x", "en", VoiceQuality::Default)];
        let b = vec![Voice::new("x", "Renamed", "en").with_quality(VoiceQuality::Premium)];
        assert!(same_order(&a, &b));

        let c = vec![voice("y", "en", VoiceQuality::Default)];
        assert!(!same_order(&a, &c));
        assert!(!same_order(&a, &[]));
    }

    #[test]
    fn select_voice_uses_valid_preference() {
        let voices = vec![
            voice("first", "zh", VoiceQuality::Default),
            voice("second", "en", VoiceQuality::Default),
        ];
        assert_eq!(
            select_voice(Some("second"), &voices),
            Some("second".to_string())
        );
    }

    #[test]
    fn select_voice_falls_back_to_first() {
        let voices = vec![
            voice("first", "zh", VoiceQuality::Default),
            voice("second", "en", VoiceQuality::Default),
        ];
        assert_eq!(select_voice(Some("gone"), &voices), Some("first".to_string()));
        assert_eq!(select_voice(None, &voices), Some("first".to_string()));
    }

    #[test]
    fn select_voice_empty_list() {
        assert_eq!(select_voice(Some("any"), &[]), None);
        assert_eq!(select_voice(None, &[]), None);
    }

    #[test]
    fn quality_ordering() {
        assert!(VoiceQuality::Premium > VoiceQuality::Enhanced);
        assert!(VoiceQuality::Enhanced > VoiceQuality::Default);
    }
}
