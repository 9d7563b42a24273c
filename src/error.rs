/// Error types for template compilation
use crate::ir::Position;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for template compilation.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Fatal errors that abort a template compilation.
///
/// Unrecognized directives and properties are not errors; they are reported
/// through [`crate::diagnostics::DiagnosticsSink`] and otherwise ignored.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A `<#` block has no `#>` before end of input
    #[error("unterminated block starting at {start}")]
    UnterminatedBlock { start: Position },

    /// A directive property value has no closing quote before end of input
    #[error("unterminated quoted value starting at {start}")]
    UnterminatedQuotedValue { start: Position },

    /// A directive property is missing its name, `=` or opening quote
    #[error("malformed directive property at {at}: expected {expected}")]
    MalformedProperty { at: Position, expected: &'static str },

    #[error("template has no output directive (add <#@ output extension=\"...\" #>)")]
    MissingOutputDirective,

    /// The template could not be read. A template that is not valid UTF-8 is
    /// rejected here with an `InvalidData` source saying so; it is never
    /// decoded lossily.
    #[error("failed to read template '{}': {source}", path.display())]
    SourceOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write generated program '{}': {source}", path.display())]
    OutputOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
