/// Target-language backend trait
///
/// A backend knows how to turn fragments into target-language statements and
/// how to wrap the two code regions in the fixed program boilerplate.
use crate::error::Result;
use crate::ir::{Fragment, TemplateProgram};

pub trait ProgramBackend {
    /// Append the target-language rendering of one fragment to `out`
    fn render_fragment(&self, fragment: &Fragment, out: &mut String);

    /// Serialize a scanned template into a complete generated program.
    ///
    /// Fails with `MissingOutputDirective` when the template never set an
    /// output path.
    fn serialize(&self, program: &TemplateProgram) -> Result<String>;
}
