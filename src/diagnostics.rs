/// Diagnostics collaborator for directive side effects
///
/// Directives such as `template` and `assembly` have no effect on the
/// generated program; their values are reported here instead. Unrecognized
/// input that the scanner tolerates is reported here as well.
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `template` directive property (debug, hostspecific, language)
    TemplateSetting { key: String, value: String },
    /// `assembly` directive; not embedded as a reference in the generated program
    AssemblyReference { name: String },
    IgnoredDirective { name: String },
    IgnoredProperty { directive: String, key: String },
    /// A second `output` directive; the first output path is kept
    DuplicateOutput { ignored: String, kept: String },
}

pub trait DiagnosticsSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::TemplateSetting { key, value } => info!(%key, %value, "template setting"),
            Diagnostic::AssemblyReference { name } => info!(%name, "assembly reference (not embedded)"),
            Diagnostic::IgnoredDirective { name } => warn!(%name, "ignoring unrecognized directive"),
            Diagnostic::IgnoredProperty { directive, key } => {
                warn!(%directive, %key, "ignoring unrecognized directive property")
            }
            Diagnostic::DuplicateOutput { ignored, kept } => {
                warn!(%ignored, %kept, "output path already set, ignoring later output directive")
            }
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub events: Vec<Diagnostic>,
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.events.push(diagnostic);
    }
}
