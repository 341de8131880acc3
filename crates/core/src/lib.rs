//! hanviet - spatial alignment of Chinese glyphs with Vietnamese glosses.
//!
//! Takes per-page collections of extracted text spans (text + bounding box),
//! classifies each span by script, and pairs every Chinese glyph with the
//! Vietnamese transliteration printed directly beneath it in the same column.

pub mod align;
pub mod error;
pub mod geometry;
pub mod model;
pub mod partition;
pub mod script;

pub use align::{AlignParams, align_document, align_page};
pub use error::{AlignError, Result};
pub use geometry::{BBox, Point, RawBBox};
pub use model::{AlignedPair, RawSpan, TextSpan};
pub use script::{Script, ScriptClassifier, ScriptParams};
