pub mod redaction_report;

pub use redaction_report::{AppliedRedaction, RedactionReport, StageCounts};
