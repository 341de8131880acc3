//! Grouping of classified spans by page and script.

use itertools::{Either, Itertools};

use crate::model::TextSpan;
use crate::script::Script;

/// Filters `spans` to one page and buckets them into (Chinese, Vietnamese)
/// lists, preserving extraction order within each bucket. Spans classified
/// `Other` are dropped silently.
pub fn partition(spans: &[TextSpan], page_num: u32) -> (Vec<TextSpan>, Vec<TextSpan>) {
    spans
        .iter()
        .filter(|span| span.page_num == page_num && span.lang != Script::Other)
        .cloned()
        .partition_map(|span| match span.lang {
            Script::Chinese => Either::Left(span),
            _ => Either::Right(span),
        })
}

/// Page numbers present in a span collection, ascending and deduplicated.
pub fn pages(spans: &[TextSpan]) -> Vec<u32> {
    spans
        .iter()
        .map(|span| span.page_num)
        .unique()
        .sorted()
        .collect()
}
