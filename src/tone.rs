//! Tone completion for pinyin readings.
//!
//! Readings in the source word lists are sometimes typed without tones
//! (`ni` instead of `nǐ`). [`annotate`] restores them from the characters
//! themselves while leaving readings that already carry tone information
//! alone.

use std::cmp::Reverse;

use pinyin::{Pinyin, ToPinyinMulti};
use tracing::debug;

/// Every tone-marked letter the romanisation uses, in both cases.
pub const TONE_MARKS: &[char] = &[
    'ā', 'á', 'ǎ', 'à', 'ē', 'é', 'ě', 'è', 'ī', 'í', 'ǐ', 'ì', 'ō', 'ó', 'ǒ', 'ò', 'ū', 'ú', 'ǔ',
    'ù', 'ǖ', 'ǘ', 'ǚ', 'ǜ', 'Ā', 'Á', 'Ǎ', 'À', 'Ē', 'É', 'Ě', 'È', 'Ī', 'Í', 'Ǐ', 'Ì', 'Ō', 'Ó',
    'Ǒ', 'Ò', 'Ū', 'Ú', 'Ǔ', 'Ù', 'Ǖ', 'Ǘ', 'Ǚ', 'Ǜ', 'ń', 'ň',
];

/// Numeral used to mark a neutral-tone reading.
pub const NEUTRAL_TONE: char = '5';

/// Returns `true` when `text` contains a tone-marked letter.
pub fn has_tone_mark(text: &str) -> bool {
    text.chars().any(|ch| TONE_MARKS.contains(&ch))
}

/// Returns `true` when `text` contains a digit, i.e. numeric tone notation
/// such as `ni3`.
pub fn has_tone_number(text: &str) -> bool {
    text.chars().any(char::is_numeric)
}

/// Returns `true` when `text` already carries tone information in either
/// notation.
pub fn has_tone(text: &str) -> bool {
    has_tone_mark(text) || has_tone_number(text)
}

/// Returns `reading` with tone information present.
///
/// Readings that already carry tones are trusted and returned as-is. Otherwise
/// the tone-marked reading of `hanzi` is looked up, choosing for characters
/// with several pronunciations the one spelled by `reading` (`yinhang` for
/// 银行 gives `yínháng`, not `yínxíng`). When the lookup only finds
/// neutral-tone syllables, the original reading gets [`NEUTRAL_TONE`]
/// appended. When the lookup fails or comes back empty the original reading is
/// returned unchanged.
///
/// The neutral-tone suffix is applied to the whole reading, so a toneless
/// multi-syllable reading of only neutral syllables gets a single trailing `5`.
pub fn annotate(hanzi: &str, reading: &str) -> String {
    if has_tone(reading) {
        return reading.to_string();
    }

    let Some(looked_up) = lookup_with_tone(hanzi, reading) else {
        debug!(hanzi, reading, "no tone reading available, keeping original");
        return reading.to_string();
    };

    if looked_up.is_empty() {
        return reading.to_string();
    }
    if !has_tone_mark(&looked_up) {
        return format!("{reading}{NEUTRAL_TONE}");
    }
    looked_up
}

/// Concatenates the tone-marked reading of every character in `hanzi`.
/// Whitespace between characters is copied through. Returns `None` if any
/// other character has no known reading.
fn lookup_with_tone(hanzi: &str, reading: &str) -> Option<String> {
    let spelled = normalize_spelling(reading);
    let mut rest = spelled.as_str();
    let mut looked_up = String::new();

    for ch in hanzi.trim().chars() {
        if ch.is_whitespace() {
            looked_up.push(ch);
            continue;
        }
        let multi = ch.to_pinyin_multi()?;
        let chosen = best_candidate((0..multi.count()).map(|idx| multi.get(idx)), rest)?;
        rest = rest
            .strip_prefix(normalize_spelling(chosen.plain()).as_str())
            .unwrap_or("");
        looked_up.push_str(chosen.with_tone());
    }

    Some(looked_up)
}

/// Picks the longest candidate whose toneless spelling starts `rest`, or the
/// first (most common) candidate when none does.
fn best_candidate(candidates: impl Iterator<Item = Pinyin>, rest: &str) -> Option<Pinyin> {
    let candidates: Vec<Pinyin> = candidates.collect();
    candidates
        .iter()
        .copied()
        .filter(|candidate| rest.starts_with(normalize_spelling(candidate.plain()).as_str()))
        .min_by_key(|candidate| Reverse(candidate.plain().len()))
        .or_else(|| candidates.first().copied())
}

/// Lower-cases a toneless spelling and drops syllable separators so it can be
/// compared against dictionary readings. `ü` and `v` are treated alike.
fn normalize_spelling(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '\'' | '’' | '-'))
        .flat_map(char::to_lowercase)
        .map(|ch| if ch == 'ü' { 'v' } else { ch })
        .collect()
}
