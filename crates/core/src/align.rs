//! Alignment Engine - matches Chinese glyphs to the Vietnamese glosses
//! printed beneath them.
//!
//! The layout convention in the corpus puts each gloss directly under its
//! glyph in the same vertical column. Two geometric constraints encode this:
//! the candidate's top edge must be strictly below the glyph's bottom edge,
//! and the two horizontal centers must differ by less than the column
//! tolerance. Among candidates the nearest center wins; a multi-line gloss
//! therefore contributes only its first line.

use ordered_float::OrderedFloat;
use rayon::prelude::*;
use tracing::debug;

use crate::model::{AlignedPair, TextSpan};
use crate::partition::{pages, partition};
use crate::script::Script;

/// Parameters for the alignment engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignParams {
    /// Maximum horizontal center offset for two spans to count as the same
    /// column, in page units.
    pub column_tolerance: f64,

    /// If true, each Vietnamese span is consumed by at most one Chinese
    /// span (greedy, globally nearest pair first). If false, the same gloss
    /// may be claimed by several glyphs, matching the source corpus
    /// behavior.
    pub exclusive: bool,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            column_tolerance: 25.0,
            exclusive: false,
        }
    }
}

impl AlignParams {
    /// Creates new alignment parameters.
    ///
    /// # Panics
    /// Panics if column_tolerance is not a positive number.
    pub fn new(column_tolerance: f64, exclusive: bool) -> Self {
        assert!(
            column_tolerance > 0.0,
            "column_tolerance should be a positive number"
        );
        Self {
            column_tolerance,
            exclusive,
        }
    }
}

/// True if `vi` may gloss `cn`: strictly below, same column.
fn is_candidate(params: &AlignParams, cn: &TextSpan, vi: &TextSpan) -> bool {
    if vi.bbox.y0 <= cn.bbox.y1 {
        return false;
    }
    let (cn_x, _) = cn.bbox.center();
    let (vi_x, _) = vi.bbox.center();
    (cn_x - vi_x).abs() < params.column_tolerance
}

/// Matches the Chinese spans of one page against its Vietnamese spans.
///
/// Chinese spans are processed in input order; a span with no qualifying
/// candidate produces no pair (absence of a gloss is valid). The scan is
/// deliberately a plain nested loop - pages carry tens of spans, not
/// thousands.
pub fn align_page(
    params: &AlignParams,
    page_num: u32,
    cn_spans: &[TextSpan],
    vi_spans: &[TextSpan],
) -> Vec<AlignedPair> {
    if params.exclusive {
        return align_page_exclusive(params, page_num, cn_spans, vi_spans);
    }

    let mut pairs = Vec::new();
    for cn in cn_spans {
        // strict < keeps the first-encountered candidate on ties
        let mut best: Option<(f64, &TextSpan)> = None;
        for vi in vi_spans {
            if !is_candidate(params, cn, vi) {
                continue;
            }
            let dist = cn.bbox.distance(&vi.bbox);
            if best.is_none_or(|(best_dist, _)| dist < best_dist) {
                best = Some((dist, vi));
            }
        }
        if let Some((_, vi)) = best {
            pairs.push(AlignedPair::new(page_num, cn, vi));
        }
    }
    pairs
}

/// One-to-one variant: sorts all qualifying (glyph, gloss) edges by center
/// distance and takes them greedily, consuming both endpoints. Ties fall
/// back to input order on both sides. Output is emitted in Chinese input
/// order, like the non-exclusive path.
fn align_page_exclusive(
    params: &AlignParams,
    page_num: u32,
    cn_spans: &[TextSpan],
    vi_spans: &[TextSpan],
) -> Vec<AlignedPair> {
    let mut edges: Vec<(OrderedFloat<f64>, usize, usize)> = Vec::new();
    for (ci, cn) in cn_spans.iter().enumerate() {
        for (vj, vi) in vi_spans.iter().enumerate() {
            if is_candidate(params, cn, vi) {
                edges.push((OrderedFloat(cn.bbox.distance(&vi.bbox)), ci, vj));
            }
        }
    }
    edges.sort_unstable();

    let mut cn_taken = vec![false; cn_spans.len()];
    let mut vi_taken = vec![false; vi_spans.len()];
    let mut picks = Vec::new();
    for (_, ci, vj) in edges {
        if !cn_taken[ci] && !vi_taken[vj] {
            cn_taken[ci] = true;
            vi_taken[vj] = true;
            picks.push((ci, vj));
        }
    }
    picks.sort_unstable();

    picks
        .into_iter()
        .map(|(ci, vj)| AlignedPair::new(page_num, &cn_spans[ci], &vi_spans[vj]))
        .collect()
}

/// Aligns a whole document of classified spans.
///
/// Applies the Chinese prefilter first: a document with no single-glyph
/// Chinese span carries no target-script content and yields no pairs. Pages
/// are independent and are aligned in parallel; the output concatenates
/// per-page results in ascending page order.
pub fn align_document(params: &AlignParams, spans: &[TextSpan]) -> Vec<AlignedPair> {
    if !spans.iter().any(|span| span.lang == Script::Chinese) {
        debug!("no Chinese spans in document, skipping alignment");
        return Vec::new();
    }

    pages(spans)
        .par_iter()
        .flat_map_iter(|&page_num| {
            let (cn_spans, vi_spans) = partition(spans, page_num);
            align_page(params, page_num, &cn_spans, &vi_spans)
        })
        .collect()
}
