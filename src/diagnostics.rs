/// Diagnostic reporting seam
///
/// Image-acquisition failures are recovered where they happen and never
/// reach the exit-confirmation flow. They are reported through an injected
/// sink instead of an ambient logger, so the editor screen can be tested
/// against the failures it reported.
use crate::picker::{AcquireError, AcquisitionKind};

/// Receiver for recovered failures.
pub trait DiagnosticSink {
    /// Record a failed replacement-image acquisition.
    fn acquisition_failed(&self, kind: AcquisitionKind, error: &AcquireError);
}

/// Production sink: forwards to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn acquisition_failed(&self, kind: AcquisitionKind, error: &AcquireError) {
        tracing::warn!(source = %kind, error = %error, "image acquisition failed");
    }
}

/// Test sink that records every report for later assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub reports: std::sync::Mutex<Vec<(AcquisitionKind, AcquireError)>>,
}

#[cfg(test)]
impl DiagnosticSink for RecordingSink {
    fn acquisition_failed(&self, kind: AcquisitionKind, error: &AcquireError) {
        self.reports.lock().unwrap().push((kind, error.clone()));
    }
}
