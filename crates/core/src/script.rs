//! Script classification for extracted spans.
//!
//! Decides whether a span's text is Chinese, Vietnamese, or neither. The
//! corpus this serves is scanned bilingual books where every Chinese span is
//! a single glyph with its quốc ngữ gloss printed beneath it, so the Chinese
//! test deliberately applies to single-character strings only.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Unicode ranges (inclusive) accepted as Chinese characters.
pub const CJK_RANGES: [(u32, u32); 7] = [
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
    (0x20000, 0x2A6DF), // CJK Unified Ideographs Extension B
    (0x2A700, 0x2B73F), // CJK Unified Ideographs Extension C
    (0x2B740, 0x2B81F), // CJK Unified Ideographs Extension D
    (0x2B820, 0x2CEAF), // CJK Unified Ideographs Extension E
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
];

/// The Vietnamese alphabet: ASCII letters, đ, and every vowel under all six
/// tone marks. Lowercase only; classification case-folds before lookup.
pub const VIET_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz\
đ\
áàảãạăắằẳẵặâấầẩẫậ\
éèẻẽẹêếềểễệ\
íìỉĩị\
óòỏõọôốồổỗộơớờởỡợ\
úùủũụưứừửữự\
ýỳỷỹỵ";

/// Script label assigned to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Chinese,
    Vietnamese,
    Other,
}

/// Classifier configuration. An explicit immutable value so tests can vary
/// range and alphabet membership independently of the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptParams {
    /// Inclusive code point ranges accepted as Chinese.
    pub cjk_ranges: Vec<(u32, u32)>,
    /// Characters whose presence marks a string as Vietnamese.
    pub viet_alphabet: FxHashSet<char>,
}

impl Default for ScriptParams {
    fn default() -> Self {
        Self {
            cjk_ranges: CJK_RANGES.to_vec(),
            viet_alphabet: VIET_ALPHABET.chars().collect(),
        }
    }
}

/// Classifies span text by script.
#[derive(Debug, Clone, Default)]
pub struct ScriptClassifier {
    params: ScriptParams,
}

impl ScriptClassifier {
    pub fn new(params: ScriptParams) -> Self {
        Self { params }
    }

    /// Returns true if the character's code point falls in a Chinese range.
    pub fn is_chinese_char(&self, ch: char) -> bool {
        let code = ch as u32;
        self.params
            .cjk_ranges
            .iter()
            .any(|&(start, end)| (start..=end).contains(&code))
    }

    /// Labels a text string as Chinese, Vietnamese, or Other.
    ///
    /// Chinese applies only to single-character strings; a multi-character
    /// run is never Chinese even if every character is CJK. Any string
    /// containing at least one Vietnamese alphabet character (case-folded)
    /// is Vietnamese, which in practice catches all Latin-script text.
    pub fn classify(&self, text: &str) -> Script {
        let mut chars = text.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && self.is_chinese_char(ch)
        {
            return Script::Chinese;
        }
        let is_viet = text
            .chars()
            .flat_map(char::to_lowercase)
            .any(|ch| self.params.viet_alphabet.contains(&ch));
        if is_viet {
            Script::Vietnamese
        } else {
            Script::Other
        }
    }

    /// Document prefilter: true iff any text is a single Chinese glyph.
    /// Pages or files failing this carry no target-script content and are
    /// dropped before alignment.
    pub fn has_chinese<'a, I>(&self, texts: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts
            .into_iter()
            .any(|text| self.classify(text) == Script::Chinese)
    }
}
