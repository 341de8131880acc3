//! Span and pair records exchanged with the extraction and persistence
//! collaborators.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::geometry::{BBox, RawBBox};
use crate::script::{Script, ScriptClassifier};

/// One record of the extraction collaborator's output, bbox not yet
/// normalized.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpan {
    pub text: String,
    pub bbox: RawBBox,
    pub page_num: u32,
}

/// One unit of extracted text on a page, classified and with a canonical
/// bounding box. Built once per page and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub bbox: BBox,
    pub page_num: u32,
    pub lang: Script,
}

impl TextSpan {
    /// Normalizes one upstream record: trims the text, parses the bounding
    /// box, classifies the script. Returns `Ok(None)` for spans that are
    /// empty after trimming; surfaces `MalformedBBox` for the caller to drop
    /// and log without aborting the page.
    pub fn from_raw(raw: RawSpan, classifier: &ScriptClassifier) -> Result<Option<Self>> {
        let text = raw.text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let bbox = BBox::try_from(raw.bbox)?;
        let lang = classifier.classify(text);
        Ok(Some(Self {
            text: text.to_owned(),
            bbox,
            page_num: raw.page_num,
            lang,
        }))
    }
}

/// A Chinese glyph matched with the Vietnamese gloss beneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub page_num: u32,
    pub text_cn: String,
    pub text_vi: String,
    pub bbox_cn: BBox,
    pub bbox_vi: BBox,
}

impl AlignedPair {
    pub(crate) fn new(page_num: u32, cn: &TextSpan, vi: &TextSpan) -> Self {
        Self {
            page_num,
            text_cn: cn.text.clone(),
            text_vi: vi.text.clone(),
            bbox_cn: cn.bbox,
            bbox_vi: vi.bbox,
        }
    }
}

/// Decodes a JSON span dump into raw records.
pub fn spans_from_json(json: &str) -> Result<Vec<RawSpan>> {
    Ok(serde_json::from_str(json)?)
}

/// Lenient batch normalization: empty spans vanish silently, spans with a
/// malformed bounding box are dropped with a warning rather than failing
/// the batch.
pub fn ingest(raws: Vec<RawSpan>, classifier: &ScriptClassifier) -> Vec<TextSpan> {
    raws.into_iter()
        .filter_map(|raw| {
            let page_num = raw.page_num;
            match TextSpan::from_raw(raw, classifier) {
                Ok(span) => span,
                Err(err) => {
                    warn!(page_num, %err, "dropping span");
                    None
                }
            }
        })
        .collect()
}
