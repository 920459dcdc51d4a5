//! Output rendering.
//!
//! Walks the final spans left to right, copies every gap verbatim and emits
//! each span through its entity type's operator. Scores and priorities are
//! not consulted here.

use std::borrow::Cow;
use std::collections::HashMap;

use lexredact_core::config::OperatorConfig;
use lexredact_core::{AppliedRedaction, EntityType, Operator, Span};

/// Entity type -> operator, with a fallback for unlisted types.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    operators: HashMap<EntityType, Operator>,
    default: Operator,
}

impl OperatorTable {
    pub fn new(operators: HashMap<EntityType, Operator>, default: Operator) -> Self {
        Self { operators, default }
    }

    pub fn from_config(config: &OperatorConfig) -> Self {
        Self::new(
            config.effective_operators().into_iter().collect(),
            config.default.clone(),
        )
    }

    pub fn operator_for(&self, entity_type: &EntityType) -> &Operator {
        self.operators.get(entity_type).unwrap_or(&self.default)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::from_config(&OperatorConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    operators: OperatorTable,
}

impl Renderer {
    pub fn new(operators: OperatorTable) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Render `document` with `spans` applied.
    ///
    /// `spans` must be sorted by start and pairwise non-overlapping, as the
    /// resolver produces them.
    ///
    /// # Panics
    ///
    /// Panics if `spans` is unsorted or overlapping, or if a span is out of
    /// bounds or not on char boundaries. Only debug builds check the order up
    /// front. [`crate::Redactor`] validates and resolves spans before calling
    /// this.
    pub fn render(&self, document: &str, spans: &[Span]) -> (String, Vec<AppliedRedaction>) {
        debug_assert!(
            spans.windows(2).all(|w| w[0].end <= w[1].start),
            "renderer input must be sorted and non-overlapping"
        );

        let mut out = String::with_capacity(document.len());
        let mut applied = Vec::with_capacity(spans.len());
        let mut cursor = 0;

        for span in spans {
            out.push_str(&document[cursor..span.start]);
            let operator = self.operators.operator_for(&span.entity_type);
            let replacement = apply_operator(operator, span.text(document));
            tracing::trace!(
                entity_type = %span.entity_type,
                operator = operator.kind(),
                start = span.start,
                end = span.end,
                "span rendered"
            );
            out.push_str(&replacement);
            applied.push(AppliedRedaction {
                entity_type: span.entity_type.clone(),
                start: span.start,
                end: span.end,
                score: span.score,
                operator: operator.clone(),
                replacement: replacement.into_owned(),
            });
            cursor = span.end;
        }
        out.push_str(&document[cursor..]);

        (out, applied)
    }
}

/// Text emitted for `original` under `operator`.
///
/// Masking counts characters, not bytes; a span shorter than the mask
/// width is masked entirely.
pub fn apply_operator<'a>(operator: &Operator, original: &'a str) -> Cow<'a, str> {
    match operator {
        Operator::Replace { new_value } => Cow::Owned(new_value.clone()),
        Operator::Keep => Cow::Borrowed(original),
        Operator::Mask {
            masking_char,
            chars_to_mask,
            from_end,
        } => {
            let total = original.chars().count();
            let masked = (*chars_to_mask).min(total);
            let (kept_before, kept_after) = if *from_end {
                (total - masked, 0)
            } else {
                (0, total - masked)
            };
            let mut out = String::with_capacity(original.len());
            out.extend(original.chars().take(kept_before));
            out.extend(std::iter::repeat(*masking_char).take(masked));
            out.extend(original.chars().skip(total - kept_after));
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn unsorted_spans_panic() {
        let spans = [
            Span::new(4, 8, EntityType::Person, 0.9),
            Span::new(0, 6, EntityType::Person, 0.9),
        ];
        Renderer::default().render("abcdefghij", &spans);
    }

    #[test]
    fn mask_from_end_keeps_prefix() {
        let op = Operator::mask('*', 4, true);
        assert_eq!(apply_operator(&op, "11999998888"), "1199999****");
    }

    #[test]
    fn mask_from_start_keeps_suffix() {
        let op = Operator::mask('#', 3, false);
        assert_eq!(apply_operator(&op, "abcdef"), "###def");
    }

    #[test]
    fn short_span_is_fully_masked() {
        let op = Operator::mask('*', 10, true);
        assert_eq!(apply_operator(&op, "1234"), "****");
    }

    #[test]
    fn mask_counts_characters() {
        let op = Operator::mask('*', 2, true);
        assert_eq!(apply_operator(&op, "Conceição"), "Conceiç**");
    }

    #[test]
    fn keep_borrows_original() {
        assert!(matches!(
            apply_operator(&Operator::Keep, "INSS"),
            Cow::Borrowed("INSS")
        ));
    }
}
