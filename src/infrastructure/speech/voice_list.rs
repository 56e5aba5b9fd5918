//! Parser for `espeak-ng --voices` output
//!
//! Plain `--voices` omits MBROLA voices; they are only listed by
//! `--voices=mb`. Both tables share this layout:
//!
//! ```text
//! Pty Language       Age/Gender VoiceName          File                 Other Languages
//!  5  af              --/M      Afrikaans          gmw/af
//!  5  cmn             --/M      Chinese_(Mandarin) sit/cmn              (zh-cmn 5)(zh 5)
//! ```

use std::collections::HashSet;

use crate::domain::speech::{Voice, VoiceQuality};

/// Voice files under this directory are MBROLA diphone voices
const MBROLA_PREFIX: &str = "mb/";

/// Parse the voice table, keeping engine order and dropping duplicates.
pub fn parse_voice_list(output: &str) -> Vec<Voice> {
    merge_voice_lists(&[output])
}

/// Parse several voice tables into one list.
///
/// Order follows the tables as given; an identifier seen in an earlier
/// table wins.
pub fn merge_voice_lists(outputs: &[&str]) -> Vec<Voice> {
    let mut seen = HashSet::new();

    outputs
        .iter()
        .flat_map(|output| output.lines())
        .filter_map(parse_voice_line)
        .filter(|voice| seen.insert(voice.identifier.clone()))
        .collect()
}

fn parse_voice_line(line: &str) -> Option<Voice> {
    let mut columns = line.split_whitespace();

    let priority = columns.next()?;
    // Skips the header row
    priority.parse::<u32>().ok()?;

    let language = columns.next()?;
    let _age_gender = columns.next()?;
    let name = columns.next()?.replace('_', " ");
    let file = columns.next()?;
    let others: Vec<&str> = columns.collect();
    let tag = language_tag(language, &others.join(" "));

    let voice = match file.strip_prefix(MBROLA_PREFIX) {
        Some(mbrola) => Voice::new(mbrola, name, tag).with_quality(VoiceQuality::Enhanced),
        None => Voice::new(language, name, tag),
    };

    Some(voice)
}

/// Pick the language tag used for ordering.
///
/// Bare ISO 639-3 codes such as `cmn` are replaced by a macrolanguage alias
/// like `zh-cmn` when the voice lists one, so prefix matching on `zh` works.
fn language_tag(language: &str, other_languages: &str) -> String {
    let is_bare_code = language.len() == 3 && !language.contains('-');
    if !is_bare_code {
        return language.to_string();
    }

    let suffix = format!("-{}", language);
    other_languages
        .split(|c| c == '(' || c == ')')
        .filter_map(|group| group.split_whitespace().next())
        .find(|alias| alias.ends_with(&suffix))
        .unwrap_or(language)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::sort_voices;

    /// `espeak-ng --voices`
    const VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  cmn             --/M      Chinese_(Mandarin) sit/cmn              (zh-cmn 5)(zh 5)
 2  en-us           --/M      English_(America)  gmw/en-US            (en 3)
 5  en-us           --/M      English_(America)  gmw/en-US
";

    /// `espeak-ng --voices=mb`
    const MBROLA_VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      afrikaans-mbrola-1 mb/mb-af1
 5  en-us           --/F      en-us-mbrola-1     mb/mb-us1            (en 7)
";

    #[test]
    fn skips_header() {
        let voices = parse_voice_list("Pty Language Age/Gender VoiceName File Other Languages\n");
        assert!(voices.is_empty());
    }

    #[test]
    fn parses_rows_in_order() {
        let voices = parse_voice_list(VOICES);
        let ids: Vec<_> = voices.iter().map(|v| v.identifier.as_str()).collect();
        assert_eq!(ids, vec!["af", "cmn", "en-us"]);
    }

    #[test]
    fn names_replace_underscores() {
        let voices = parse_voice_list(VOICES);
        assert_eq!(voices[1].name, "Chinese (Mandarin)");
    }

    #[test]
    fn bare_codes_take_macrolanguage_alias() {
        let voices = parse_voice_list(VOICES);
        assert_eq!(voices[1].identifier, "cmn");
        assert_eq!(voices[1].language, "zh-cmn");
        assert_eq!(voices[2].language, "en-us");
    }

    #[test]
    fn language_tag_without_alias() {
        assert_eq!(language_tag("vie", ""), "vie");
        assert_eq!(language_tag("af", "(zh 5)"), "af");
    }

    #[test]
    fn plain_listing_has_no_enhanced_voices() {
        let voices = parse_voice_list(VOICES);
        assert!(voices.iter().all(|v| v.quality == VoiceQuality::Default));
    }

    #[test]
    fn mbrola_listing_voices_are_enhanced() {
        let voices = parse_voice_list(MBROLA_VOICES);
        let ids: Vec<_> = voices.iter().map(|v| v.identifier.as_str()).collect();
        assert_eq!(ids, vec!["mb-af1", "mb-us1"]);
        assert!(voices.iter().all(|v| v.quality == VoiceQuality::Enhanced));
        assert_eq!(voices[1].language, "en-us");
    }

    #[test]
    fn merge_appends_mbrola_and_drops_repeats() {
        let voices = merge_voice_lists(&[VOICES, MBROLA_VOICES, VOICES]);
        let ids: Vec<_> = voices.iter().map(|v| v.identifier.as_str()).collect();
        assert_eq!(ids, vec!["af", "cmn", "en-us", "mb-af1", "mb-us1"]);
    }

    #[test]
    fn merged_mbrola_voice_sorts_ahead_of_same_language() {
        let voices = sort_voices(merge_voice_lists(&[VOICES, MBROLA_VOICES]), "en");
        let ids: Vec<_> = voices.iter().map(|v| v.identifier.as_str()).collect();
        assert_eq!(&ids[..2], &["mb-us1", "en-us"]);
    }

    #[test]
    fn ignores_short_rows() {
        assert!(parse_voice_list(" 5  af  --/M\n").is_empty());
    }
}
