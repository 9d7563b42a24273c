/// CLI arguments and file compilation
use crate::codegen::{generate_program, write_program};
use crate::config::{GeneratorConfig, DEFAULT_CLASS_NAME, DEFAULT_ENTRY_METHOD};
use crate::diagnostics::TracingDiagnostics;
use crate::error::{Result, TemplateError};
use crate::logging::{LogFormat, LoggingConfig};
use crate::scanner::scan_template;
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "ttgen", version, about = "Compile a text template into a C# program that renders it")]
pub struct CliArgs {
    /// Template to compile (e.g. Report.tt)
    pub template: PathBuf,

    /// Where to write the generated C# program
    pub output: PathBuf,

    /// Name of the generated template class
    #[arg(long, env = "TTGEN_CLASS_NAME", default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Name of the method that renders the template
    #[arg(long, env = "TTGEN_ENTRY_METHOD", default_value = DEFAULT_ENTRY_METHOD)]
    pub entry_method: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, env = "TTGEN_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl CliArgs {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            format: self.log_format,
            verbosity: self.verbose,
        }
    }
}

/// Compile a template file into a generated program file.
///
/// Nothing is written unless the whole template scans and serializes.
pub fn compile_file_to_program(template_path: &Path, output_path: &Path, config: &GeneratorConfig) -> Result<()> {
    let source_failed = |source: io::Error| TemplateError::SourceOpenFailed {
        path: template_path.to_path_buf(),
        source,
    };
    let bytes = fs::read(template_path).map_err(source_failed)?;
    let source = String::from_utf8(bytes).map_err(|err| {
        source_failed(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("template is not valid UTF-8 ({})", err.utf8_error()),
        ))
    })?;

    let template_name = template_path.to_string_lossy();
    let program = scan_template(&source, &template_name, &mut TracingDiagnostics)?;
    let generated = generate_program(&program, config)?;
    write_program(&generated, output_path)?;

    info!(
        template = %template_path.display(),
        output = %output_path.display(),
        rendered = program.output_path.as_deref().unwrap_or_default(),
        "compiled template"
    );
    Ok(())
}
