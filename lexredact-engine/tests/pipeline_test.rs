//! End-to-end reconciliation and rendering over caller-supplied candidates.

use lexredact_core::errors::{RedactionError, SpanError};
use lexredact_core::{EntityType, Operator, RedactionConfig, Span};
use lexredact_engine::{redact, Redactor};

fn config(overlay: &str) -> RedactionConfig {
    RedactionConfig::from_toml(overlay).unwrap()
}

fn redactor(overlay: &str) -> Redactor {
    Redactor::new(config(overlay)).unwrap()
}

// ── Literal scenarios ──────────────────────────────────────────────────────

#[test]
fn person_replaced_rest_untouched() {
    let doc = "Contact John at john@x.com";
    let r = redactor(
        r#"
        [operators.by_type]
        PERSON = { type = "replace", new_value = "<NAME>" }
        "#,
    );
    let out = r
        .redact(doc, &[Span::new(8, 12, EntityType::Person, 0.9)])
        .unwrap();
    assert_eq!(out, "Contact <NAME> at john@x.com");
}

#[test]
fn national_id_outranks_person_on_same_range() {
    let doc = "123.456.789-00";
    let r = redactor(
        r#"
        [operators.by_type]
        NATIONAL_ID = { type = "replace", new_value = "<ID>" }
        "#,
    );
    let candidates = [
        Span::new(0, 14, EntityType::NationalId, 0.85),
        Span::new(0, 14, EntityType::Person, 0.6),
    ];
    let report = r.redact_with_report(doc, &candidates).unwrap();
    assert_eq!(report.text, "<ID>");
    assert_eq!(report.redactions.len(), 1);
    assert_eq!(report.redactions[0].entity_type, EntityType::NationalId);
    // Checksum fails: downgraded, still rendered.
    assert_eq!(report.counts.downgraded, 1);
    assert!((report.redactions[0].score - 0.4).abs() < f64::EPSILON);
}

#[test]
fn phone_masked_from_end() {
    let doc = "11999998888";
    let r = redactor(
        r#"
        [operators.by_type]
        PHONE = { type = "mask", masking_char = "*", chars_to_mask = 4, from_end = true }
        "#,
    );
    let out = r
        .redact(doc, &[Span::new(0, 11, EntityType::Phone, 0.7)])
        .unwrap();
    assert_eq!(out, "1199999****");
}

#[test]
fn deny_vocabulary_location_left_in_clear() {
    let doc = "Audiência realizada em Goiânia.";
    let start = doc.find("Goiânia").unwrap();
    let end = start + "Goiânia".len();
    let r = redactor(
        r#"
        [vocabulary]
        common_terms = ["Goiânia"]
        "#,
    );
    let report = r
        .redact_with_report(doc, &[Span::new(start, end, EntityType::Location, 0.85)])
        .unwrap();
    assert_eq!(report.text, doc);
    assert_eq!(report.counts.suppressed, 1);
    assert!(report.redactions.is_empty());
}

#[test]
fn address_near_organization_left_in_clear() {
    let org = "INSS";
    let gap = "x".repeat(50);
    let address = "Rua 82, nº 400";
    let doc = format!("{org}{gap}{address}.");
    let addr_start = org.len() + gap.len();
    let candidates = [
        Span::new(0, org.len(), EntityType::Organization, 0.99),
        Span::new(
            addr_start,
            addr_start + address.len(),
            EntityType::Address,
            0.75,
        ),
    ];
    let r = redactor(
        r#"
        [policy]
        anonymize_institutional_addresses = false
        institutional_window = 160
        "#,
    );
    let report = r.redact_with_report(&doc, &candidates).unwrap();
    assert_eq!(report.text, doc);
    assert_eq!(report.counts.policy_removed, 1);
    assert_eq!(report.redactions.len(), 1);
    assert_eq!(report.redactions[0].operator, Operator::Keep);
}

// ── Policy toggles ─────────────────────────────────────────────────────────

#[test]
fn institutional_address_redacted_when_anonymizing() {
    let doc = format!("INSS{}Rua 82, nº 400.", "x".repeat(50));
    let candidates = [
        Span::new(0, 4, EntityType::Organization, 0.99),
        Span::new(54, 54 + "Rua 82, nº 400".len(), EntityType::Address, 0.75),
    ];
    let r = redactor("[policy]\nanonymize_institutional_addresses = true\n");
    let out = r.redact(&doc, &candidates).unwrap();
    assert_eq!(out, format!("INSS{}<ENDERECO>.", "x".repeat(50)));
}

#[test]
fn address_outside_window_redacted() {
    let doc = format!("INSS{}Rua 82, nº 400.", "x".repeat(200));
    let start = 204;
    let candidates = [
        Span::new(0, 4, EntityType::Organization, 0.99),
        Span::new(start, start + "Rua 82, nº 400".len(), EntityType::Address, 0.75),
    ];
    let out = redactor("").redact(&doc, &candidates).unwrap();
    assert!(out.ends_with("<ENDERECO>."), "got {out}");
}

// ── Stage behavior through the pipeline ────────────────────────────────────

#[test]
fn empty_candidates_pass_document_through() {
    let doc = "Nada a redigir aqui.";
    let report = redactor("").redact_with_report(doc, &[]).unwrap();
    assert_eq!(report.text, doc);
    assert_eq!(report.altered().count(), 0);
    assert_eq!(report.counts.candidates, 0);
    assert_eq!(report.counts.rendered, 0);
}

#[test]
fn empty_document_with_no_candidates() {
    assert_eq!(redactor("").redact("", &[]).unwrap(), "");
}

#[test]
fn valid_cpf_keeps_score() {
    let doc = "CPF 529.982.247-25";
    let span = Span::new(4, 18, EntityType::NationalId, 0.9);
    let report = redactor("").redact_with_report(doc, &[span]).unwrap();
    assert_eq!(report.text, "CPF <CPF>");
    assert_eq!(report.counts.downgraded, 0);
    assert!((report.redactions[0].score - 0.9).abs() < f64::EPSILON);
}

#[test]
fn min_score_drops_weak_candidates() {
    let doc = "Ana e Bia";
    let candidates = [
        Span::new(0, 3, EntityType::Person, 0.9),
        Span::new(6, 9, EntityType::Person, 0.2),
    ];
    let report = redactor("[detection]\nmin_score = 0.5\n")
        .redact_with_report(doc, &candidates)
        .unwrap();
    assert_eq!(report.text, "<NOME> e Bia");
    assert_eq!(report.counts.below_threshold, 1);
}

#[test]
fn threshold_runs_before_checksum_downgrade() {
    let doc = "111.222.333-44";
    let span = Span::new(0, 14, EntityType::NationalId, 0.9);
    // The threshold runs before validation, so the downgrade alone never drops it.
    let out = redactor("[detection]\nmin_score = 0.5\n")
        .redact(doc, &[span])
        .unwrap();
    assert_eq!(out, "<CPF>");
}

#[test]
fn unknown_entity_type_uses_default_operator_and_priority() {
    let doc = "CRM 12345 GO";
    let span = Span::new(4, 9, "CRM_NUMBER", 0.8);
    let out = redactor("").redact(doc, &[span]).unwrap();
    assert_eq!(out, "CRM <DADO_SENSIVEL> GO");
}

#[test]
fn report_counts_every_stage() {
    let doc = "Seção Judiciária: José Silva, CPF 111.222.333-44, fone 98888-7777.";
    let find = |s: &str| {
        let i = doc.find(s).unwrap();
        (i, i + s.len())
    };
    let (sj_s, sj_e) = find("Seção Judiciária");
    let (p_s, p_e) = find("José Silva");
    let (c_s, c_e) = find("111.222.333-44");
    let (f_s, f_e) = find("98888-7777");
    let candidates = vec![
        Span::new(sj_s, sj_e, EntityType::Person, 0.6),
        Span::new(p_s, p_e, EntityType::Person, 0.85),
        Span::new(p_s, p_s + "José".len(), EntityType::Person, 0.7),
        Span::new(c_s, c_e, EntityType::NationalId, 0.9),
        Span::new(f_s, f_e, EntityType::Phone, 0.05),
    ];
    let r = redactor(
        r#"
        [detection]
        min_score = 0.1

        [vocabulary]
        legal_terms = ["seção judiciária"]
        "#,
    );
    let report = r.redact_with_report(doc, &candidates).unwrap();
    let c = &report.counts;
    assert_eq!(c.candidates, 5);
    assert_eq!(c.below_threshold, 1);
    assert_eq!(c.suppressed, 1);
    assert_eq!(c.downgraded, 1);
    assert_eq!(c.discarded_overlaps, 1);
    assert_eq!(c.policy_removed, 0);
    assert_eq!(c.rendered, 2);
    assert_eq!(
        report.text,
        "Seção Judiciária: <NOME>, CPF <CPF>, fone 98888-7777."
    );
}

#[test]
fn resolve_spans_returns_final_annotation() {
    let doc = "Maria Souza";
    let r = redactor("");
    let spans = r
        .resolve_spans(
            doc,
            &[
                Span::new(0, 5, EntityType::Person, 0.8),
                Span::new(0, 11, EntityType::Person, 0.8),
            ],
        )
        .unwrap();
    assert_eq!(spans, vec![Span::new(0, 11, EntityType::Person, 0.8)]);
}

#[test]
fn one_shot_redact_matches_redactor() {
    let doc = "Contact John";
    let spans = [Span::new(8, 12, EntityType::Person, 0.9)];
    let cfg = RedactionConfig::default();
    assert_eq!(
        redact(doc, &spans, &cfg).unwrap(),
        Redactor::new(cfg).unwrap().redact(doc, &spans).unwrap()
    );
}

#[test]
fn redactor_is_reusable_across_documents() {
    let r = redactor("");
    let a = r
        .redact("Ana", &[Span::new(0, 3, EntityType::Person, 0.9)])
        .unwrap();
    let b = r.redact("sem dados", &[]).unwrap();
    assert_eq!(a, "<NOME>");
    assert_eq!(b, "sem dados");
}

// ── Contract violations ────────────────────────────────────────────────────

#[test]
fn inverted_span_rejected() {
    let err = redactor("")
        .redact("abcdef", &[Span::new(4, 2, EntityType::Person, 0.9)])
        .unwrap_err();
    assert!(matches!(
        err,
        RedactionError::Span(SpanError::Inverted { start: 4, end: 2 })
    ));
}

#[test]
fn out_of_bounds_span_rejected() {
    let err = redactor("")
        .redact("abc", &[Span::new(1, 10, EntityType::Person, 0.9)])
        .unwrap_err();
    assert!(matches!(
        err,
        RedactionError::Span(SpanError::OutOfBounds { .. })
    ));
}

#[test]
fn empty_span_rejected() {
    let err = redactor("")
        .redact("abc", &[Span::new(1, 1, EntityType::Person, 0.9)])
        .unwrap_err();
    assert!(matches!(err, RedactionError::Span(SpanError::Empty { .. })));
}

#[test]
fn mid_character_span_rejected() {
    // 'ã' occupies bytes 1..3.
    let err = redactor("")
        .redact("São Paulo", &[Span::new(0, 2, EntityType::Location, 0.9)])
        .unwrap_err();
    assert!(matches!(
        err,
        RedactionError::Span(SpanError::NotCharBoundary { .. })
    ));
}

#[test]
fn score_out_of_range_rejected() {
    let err = redactor("")
        .redact("abc", &[Span::new(0, 1, EntityType::Person, 1.5)])
        .unwrap_err();
    assert!(matches!(
        err,
        RedactionError::Span(SpanError::InvalidScore { .. })
    ));
}

#[test]
fn invalid_config_rejected_at_construction() {
    let mut cfg = RedactionConfig::default();
    cfg.chunking.overlap = cfg.chunking.max_chars;
    assert!(matches!(
        Redactor::new(cfg).unwrap_err(),
        RedactionError::Config(_)
    ));
}

#[test]
fn missing_vocabulary_file_rejected_at_construction() {
    let mut cfg = RedactionConfig::default();
    cfg.vocabulary.legal_terms_file = Some("/nonexistent/termos.txt".into());
    assert!(matches!(
        Redactor::new(cfg).unwrap_err(),
        RedactionError::Config(_)
    ));
}
