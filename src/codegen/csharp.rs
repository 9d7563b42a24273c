/// C# program backend
///
/// Generated layout:
/// - one `using` per imported namespace, in import order
/// - the template class with a `TextWriter` field and the entry method,
///   whose body opens the output file and runs the script region
/// - the class-feature region, verbatim, as class members
/// - a static program class whose `Main` runs the entry method
use super::backend::ProgramBackend;
use crate::config::GeneratorConfig;
use crate::error::{Result, TemplateError};
use crate::ir::{CodeRegion, Fragment, TemplateProgram};

const WRITER: &str = "writer";

#[derive(Debug, Clone, Default)]
pub struct CSharpBackend {
    config: GeneratorConfig,
}

impl CSharpBackend {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn render_region(&self, region: &CodeRegion, out: &mut String) {
        for fragment in region.fragments() {
            self.render_fragment(fragment, out);
            out.push('\n');
        }
    }
}

impl ProgramBackend for CSharpBackend {
    fn render_fragment(&self, fragment: &Fragment, out: &mut String) {
        match fragment {
            Fragment::Code(code) => out.push_str(code),
            Fragment::EmitText(escaped) => {
                out.push_str(WRITER);
                out.push_str(".Write(@\"");
                out.push_str(escaped);
                out.push_str("\");");
            }
            Fragment::EmitExpression(expression) => {
                out.push_str(WRITER);
                out.push_str(".Write(");
                out.push_str(expression);
                out.push_str(");");
            }
        }
    }

    fn serialize(&self, program: &TemplateProgram) -> Result<String> {
        let output_path = program.output_path.as_deref().ok_or(TemplateError::MissingOutputDirective)?;
        let GeneratorConfig { class_name, entry_method } = &self.config;
        let mut out = String::new();

        for namespace in &program.usings {
            out.push_str(&format!("using {};\n", namespace));
        }
        if !program.usings.is_empty() {
            out.push('\n');
        }

        out.push_str(&format!("public class {}\n{{\n", class_name));
        out.push_str(&format!("    private System.IO.TextWriter {};\n\n", WRITER));
        out.push_str(&format!("    public void {}()\n    {{\n", entry_method));
        out.push_str(&format!(
            "        using ({} = new System.IO.StreamWriter(@\"{}\"))\n        {{\n",
            WRITER,
            escape_verbatim(output_path)
        ));
        self.render_region(&program.script, &mut out);
        out.push_str("        }\n    }\n\n");

        self.render_region(&program.class_features, &mut out);

        out.push_str("}\n\n");
        out.push_str(&format!("public static class {}Program\n{{\n", class_name));
        out.push_str("    public static void Main()\n    {\n");
        out.push_str(&format!("        new {}().{}();\n", class_name, entry_method));
        out.push_str("    }\n}\n");

        Ok(out)
    }
}

/// Escape text for a C# verbatim string literal (`@"..."`): quotes are doubled.
pub fn escape_verbatim(text: &str) -> String {
    text.replace('"', "\"\"")
}
