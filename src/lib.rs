//! ttgen compiles text templates into C# programs.
//!
//! A template is literal text interleaved with blocks:
//!
//! - `<#@ name key="value" #>` directives (`template`, `assembly`, `import`, `output`)
//! - `<# code #>` control blocks, spliced into the render method
//! - `<#= expression #>` expression blocks, whose values are written out
//! - `<#+ code #>` class-feature blocks, spliced into the class body
//!
//! Compiling and running the generated program writes the rendered output
//! next to the template, with the extension named by the `output` directive.
//!
//! ```ignore
//! let mut diagnostics = ttgen::RecordingDiagnostics::default();
//! let program = ttgen::compile_template(
//!     "<#@ output extension=\"txt\" #>Hello <#= name #>",
//!     "Greeting.tt",
//!     &ttgen::GeneratorConfig::default(),
//!     &mut diagnostics,
//! )?;
//! ```

pub mod assembler;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ir;
pub mod logging;
pub mod scanner;

pub use cli::{compile_file_to_program, CliArgs};
pub use config::GeneratorConfig;
pub use diagnostics::{Diagnostic, DiagnosticsSink, RecordingDiagnostics, TracingDiagnostics};
pub use error::{Result, TemplateError};
pub use ir::{Fragment, Mode, TemplateProgram};
pub use logging::{init_logging, LoggingConfig};
pub use scanner::scan_template;

/// Compile template text into generated program text, in memory.
pub fn compile_template(
    source: &str,
    template_path: &str,
    config: &GeneratorConfig,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<String> {
    let program = scan_template(source, template_path, diagnostics)?;
    codegen::generate_program(&program, config)
}
