use rayon::prelude::*;

use lexredact_core::errors::{DetectionError, RedactionResult};
use lexredact_core::{Detector, RedactionConfig, RedactionReport, Span, StageCounts};

use crate::chunker::{chunk_text, Chunk};
use crate::offsets;
use crate::policy::PolicyFilter;
use crate::renderer::{OperatorTable, Renderer};
use crate::resolver::{ConflictResolver, PriorityTable};
use crate::suppression::DenyVocabulary;
use crate::validation::Validator;

/// Redaction pipeline built once from a [`RedactionConfig`] and reused for
/// any number of documents.
///
/// Holds no per-document state: every call works on its own span lists, so
/// one `Redactor` can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Redactor {
    config: RedactionConfig,
    vocabulary: DenyVocabulary,
    validator: Validator,
    resolver: ConflictResolver,
    policy: PolicyFilter,
    renderer: Renderer,
}

impl Redactor {
    /// Validate `config`, load its vocabulary files and build every stage.
    pub fn new(config: RedactionConfig) -> RedactionResult<Self> {
        config.validate()?;
        let vocabulary = DenyVocabulary::from_config(&config.vocabulary)?;
        let validator = Validator::from_config(&config.validation)?;
        let resolver = ConflictResolver::new(PriorityTable::from_config(&config.resolution));
        let policy = PolicyFilter::from_config(&config.policy);
        let renderer = Renderer::new(OperatorTable::from_config(&config.operators));

        tracing::debug!(
            version = lexredact_core::constants::VERSION,
            vocabulary_terms = vocabulary.len(),
            policy_rules = policy.rules().len(),
            "redactor initialized"
        );

        Ok(Self {
            config,
            vocabulary,
            validator,
            resolver,
            policy,
            renderer,
        })
    }

    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    /// Render `document` given document-global candidate spans.
    pub fn redact(&self, document: &str, candidates: &[Span]) -> RedactionResult<String> {
        Ok(self.redact_with_report(document, candidates)?.text)
    }

    /// Like [`Redactor::redact`], returning every rendered span and per-stage counts.
    pub fn redact_with_report(
        &self,
        document: &str,
        candidates: &[Span],
    ) -> RedactionResult<RedactionReport> {
        let _span = tracing::info_span!(
            "lexredact.redact",
            doc_len = document.len(),
            candidates = candidates.len()
        )
        .entered();

        offsets::check_spans(document, candidates)?;

        let mut counts = StageCounts {
            candidates: candidates.len(),
            ..StageCounts::default()
        };
        let spans = self.reconcile(document, candidates, &mut counts);
        let (text, redactions) = self.renderer.render(document, &spans);
        counts.rendered = redactions.len();

        tracing::debug!(?counts, "redaction complete");
        Ok(RedactionReport {
            text,
            redactions,
            counts,
        })
    }

    /// Final, sorted, non-overlapping spans for `document` without rendering.
    pub fn resolve_spans(&self, document: &str, candidates: &[Span]) -> RedactionResult<Vec<Span>> {
        offsets::check_spans(document, candidates)?;
        Ok(self.reconcile(document, candidates, &mut StageCounts::default()))
    }

    /// Chunk `document`, run `detector` on every chunk and return the merged
    /// document-global candidates.
    ///
    /// Chunks are analyzed on the rayon pool when `detection.parallel_chunks`
    /// is set; results are merged in chunk order either way. A detector error
    /// aborts the run. When several chunks fail, the error of the chunk with
    /// the lowest offset is returned in both modes.
    pub fn collect_candidates(
        &self,
        document: &str,
        detector: &dyn Detector,
    ) -> RedactionResult<Vec<Span>> {
        let chunks: Vec<Chunk<'_>> = chunk_text(document, &self.config.chunking).collect();
        tracing::debug!(
            detector = detector.name(),
            chunks = chunks.len(),
            "collecting candidates"
        );

        let per_chunk: Vec<(usize, Vec<Span>)> = if self.config.detection.parallel_chunks {
            // Collected in chunk order before short-circuiting.
            let results: Vec<RedactionResult<(usize, Vec<Span>)>> = chunks
                .par_iter()
                .map(|chunk| analyze_chunk(detector, chunk))
                .collect();
            results.into_iter().collect::<RedactionResult<_>>()?
        } else {
            chunks
                .iter()
                .map(|chunk| analyze_chunk(detector, chunk))
                .collect::<RedactionResult<_>>()?
        };

        Ok(offsets::merge_chunk_results(per_chunk))
    }

    /// Run the whole pipeline, detection included.
    pub fn redact_document(
        &self,
        document: &str,
        detector: &dyn Detector,
    ) -> RedactionResult<RedactionReport> {
        let candidates = self.collect_candidates(document, detector)?;
        self.redact_with_report(document, &candidates)
    }

    /// Stages 4 to 7 over already checked candidates.
    fn reconcile(&self, document: &str, candidates: &[Span], counts: &mut StageCounts) -> Vec<Span> {
        let min_score = self.config.detection.min_score;
        let confident: Vec<Span> = candidates
            .iter()
            .filter(|span| span.score >= min_score)
            .cloned()
            .collect();
        counts.below_threshold = candidates.len() - confident.len();

        let kept = self.vocabulary.filter(document, &confident);
        counts.suppressed = confident.len() - kept.len();

        let validated = self.validator.validate(document, &kept);
        counts.downgraded = kept
            .iter()
            .zip(&validated)
            .filter(|(before, after)| after.score < before.score)
            .count();

        let resolved = self.resolver.resolve(&validated);
        counts.discarded_overlaps = validated.len() - resolved.len();

        let final_spans = self.policy.apply(&resolved);
        counts.policy_removed = resolved.len() - final_spans.len();

        final_spans
    }
}

fn analyze_chunk(detector: &dyn Detector, chunk: &Chunk<'_>) -> RedactionResult<(usize, Vec<Span>)> {
    let local = detector
        .analyze(chunk.text)
        .map_err(|e: DetectionError| e.at_offset(chunk.offset))?;
    offsets::check_spans(chunk.text, &local)?;
    Ok((chunk.offset, local))
}

/// One-shot redaction: build a [`Redactor`] from `config` and render
/// `document` with the given document-global candidates.
pub fn redact(document: &str, candidates: &[Span], config: &RedactionConfig) -> RedactionResult<String> {
    Redactor::new(config.clone())?.redact(document, candidates)
}
