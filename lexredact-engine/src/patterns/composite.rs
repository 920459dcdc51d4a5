use lexredact_core::errors::DetectionError;
use lexredact_core::{Detector, Span};

/// Runs several detectors over the same chunk and concatenates their output.
///
/// Overlaps between detectors are left for the resolver.
pub struct CompositeDetector {
    name: String,
    detectors: Vec<Box<dyn Detector>>,
}

impl CompositeDetector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detectors: Vec::new(),
        }
    }

    pub fn with(mut self, detector: impl Detector + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }

    pub fn push(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Detector for CompositeDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, chunk: &str) -> Result<Vec<Span>, DetectionError> {
        let mut spans = Vec::new();
        for detector in &self.detectors {
            spans.extend(detector.analyze(chunk)?);
        }
        Ok(spans)
    }
}
