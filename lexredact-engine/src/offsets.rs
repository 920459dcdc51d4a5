//! Rebasing of chunk-local detector output onto the document.

use lexredact_core::errors::SpanError;
use lexredact_core::Span;

/// Shift chunk-local spans by the chunk's document offset.
pub fn rebase(spans: &[Span], offset: usize) -> Vec<Span> {
    spans.iter().map(|span| span.shifted(offset)).collect()
}

/// Concatenate per-chunk results, in the order given, into one document-wide
/// candidate list.
///
/// Regions covered by two chunks will typically be reported twice; the
/// resolver collapses those duplicates.
pub fn merge_chunk_results<I>(results: I) -> Vec<Span>
where
    I: IntoIterator<Item = (usize, Vec<Span>)>,
{
    results
        .into_iter()
        .flat_map(|(offset, spans)| rebase(&spans, offset))
        .collect()
}

/// Reject the first span that does not fit `text`.
pub fn check_spans(text: &str, spans: &[Span]) -> Result<(), SpanError> {
    spans.iter().try_for_each(|span| span.validate(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexredact_core::EntityType;

    #[test]
    fn rebase_moves_both_ends() {
        let local = vec![Span::new(2, 6, EntityType::Person, 0.9)];
        let global = rebase(&local, 9800);
        assert_eq!((global[0].start, global[0].end), (9802, 9806));
        assert_eq!(local[0].start, 2);
    }

    #[test]
    fn merge_keeps_chunk_order_and_duplicates() {
        let merged = merge_chunk_results(vec![
            (0, vec![Span::new(95, 100, "PERSON", 0.8)]),
            (90, vec![Span::new(5, 10, "PERSON", 0.85)]),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].start, 95);
        assert_eq!(merged[1].start, 95);
        assert_eq!(merged[1].score, 0.85);
    }
}
