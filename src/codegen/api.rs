/// Public API for program generation
///
/// Serialization happens fully in memory; the result is then written through
/// a temporary file in the destination directory and renamed into place, so
/// a failure never leaves a truncated generated program behind.
use super::backend::ProgramBackend;
use super::csharp::CSharpBackend;
use crate::config::GeneratorConfig;
use crate::error::{Result, TemplateError};
use crate::ir::TemplateProgram;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Serialize a scanned template into generated C# program text
pub fn generate_program(program: &TemplateProgram, config: &GeneratorConfig) -> Result<String> {
    CSharpBackend::new(config.clone()).serialize(program)
}

/// Write generated program text to `output_path`, replacing any existing file.
///
/// A replaced file keeps its permissions; a new file gets the default
/// `0o666` mode minus the umask, like any file created with `fs::write`.
pub fn write_program(generated: &str, output_path: &Path) -> Result<()> {
    let output_failed = |source: std::io::Error| TemplateError::OutputOpenFailed {
        path: output_path.to_path_buf(),
        source,
    };

    let directory = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Passed to open(2), so the umask applies
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(directory).map_err(output_failed)?;
    file.write_all(generated.as_bytes()).map_err(output_failed)?;
    file.flush().map_err(output_failed)?;
    if let Ok(existing) = fs::metadata(output_path) {
        file.as_file().set_permissions(existing.permissions()).map_err(output_failed)?;
    }
    file.persist(output_path).map_err(|e| output_failed(e.error))?;

    debug!(path = %output_path.display(), bytes = generated.len(), "generated program written");
    Ok(())
}
