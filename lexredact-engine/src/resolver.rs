//! Priority-based overlap resolution.
//!
//! Spans are ranked by `(priority, score, length)`. After sorting by start
//! (ties broken by rank, best first) a single left-to-right sweep keeps one
//! winner per overlapping region: a span that overlaps the last accepted one
//! replaces it only when its rank is strictly greater.

use std::cmp::Ordering;
use std::collections::HashMap;

use lexredact_core::config::ResolutionConfig;
use lexredact_core::{EntityType, Span};

/// Entity type -> priority, with a fallback for unlisted types.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    priorities: HashMap<EntityType, i32>,
    default_priority: i32,
}

impl PriorityTable {
    pub fn new(priorities: HashMap<EntityType, i32>, default_priority: i32) -> Self {
        Self {
            priorities,
            default_priority,
        }
    }

    pub fn from_config(config: &ResolutionConfig) -> Self {
        Self::new(
            config.effective_priorities().into_iter().collect(),
            config.default_priority,
        )
    }

    pub fn priority(&self, entity_type: &EntityType) -> i32 {
        self.priorities
            .get(entity_type)
            .copied()
            .unwrap_or(self.default_priority)
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::from_config(&ResolutionConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConflictResolver {
    priorities: PriorityTable,
}

impl ConflictResolver {
    pub fn new(priorities: PriorityTable) -> Self {
        Self { priorities }
    }

    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    /// Compare two spans by `(priority, score, length)`.
    pub fn rank(&self, a: &Span, b: &Span) -> Ordering {
        self.priorities
            .priority(&a.entity_type)
            .cmp(&self.priorities.priority(&b.entity_type))
            .then_with(|| a.score.total_cmp(&b.score))
            .then_with(|| a.len().cmp(&b.len()))
    }

    /// Sorted, pairwise non-overlapping winners.
    pub fn resolve(&self, spans: &[Span]) -> Vec<Span> {
        let mut sorted: Vec<&Span> = spans.iter().collect();
        // Stable: spans equal on every key keep their input order.
        sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| self.rank(b, a)));

        let mut accepted: Vec<Span> = Vec::with_capacity(sorted.len());
        for span in sorted {
            if let Some(last) = accepted.last_mut() {
                if span.start < last.end {
                    if self.rank(span, last) == Ordering::Greater {
                        *last = span.clone();
                    }
                    continue;
                }
            }
            accepted.push(span.clone());
        }
        accepted
    }
}
