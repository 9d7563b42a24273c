/// Mode-routed code assembler
///
/// State maintained during a scan: the current mode, the two code regions,
/// the recorded usings and the output path. Control and class-feature blocks
/// write to a fixed region and set the mode for what follows; text and
/// expression blocks are routed by the current mode and never change it.
use crate::ir::{Fragment, Mode, TemplateProgram};

#[derive(Debug, Clone, Default)]
pub struct Assembler {
    mode: Mode,
    program: TemplateProgram,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            mode: Mode::Script,
            program: TemplateProgram::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Literal text, quotes already doubled; routed by the current mode
    pub fn append_text(&mut self, escaped: String) {
        let mode = self.mode;
        self.program.region_mut(mode).push(Fragment::EmitText(escaped));
    }

    /// `<#= ... #>` body; routed by the current mode
    pub fn append_expression(&mut self, expression: String) {
        let mode = self.mode;
        self.program.region_mut(mode).push(Fragment::EmitExpression(expression));
    }

    /// `<#+ ... #>` body; always class features, switches to class-feature mode
    pub fn append_class_feature(&mut self, code: String) {
        self.program.class_features.push(Fragment::Code(code));
        self.mode = Mode::ClassFeature;
    }

    /// `<# ... #>` body; always script, switches back to script mode
    pub fn append_control(&mut self, code: String) {
        self.program.script.push(Fragment::Code(code));
        self.mode = Mode::Script;
    }

    pub fn add_using(&mut self, namespace: String) {
        self.program.usings.push(namespace);
    }

    pub fn output_path(&self) -> Option<&str> {
        self.program.output_path.as_deref()
    }

    /// Set the output path unless one is already set.
    ///
    /// Returns `false` (leaving the existing path in place) on a second call.
    pub fn set_output_path(&mut self, path: String) -> bool {
        if self.program.output_path.is_some() {
            return false;
        }
        self.program.output_path = Some(path);
        true
    }

    pub fn finish(self) -> TemplateProgram {
        self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Fragment {
        Fragment::Code(s.to_string())
    }

    fn text(s: &str) -> Fragment {
        Fragment::EmitText(s.to_string())
    }

    #[test]
    fn text_and_expressions_follow_mode() {
        let mut assembler = Assembler::new();
        assembler.append_text("a".into());
        assembler.append_class_feature("void F() {".into());
        assembler.append_text("b".into());
        assembler.append_expression("x".into());
        assembler.append_class_feature("}".into());
        assembler.append_control("".into());
        assembler.append_text("c".into());

        assert_eq!(assembler.mode(), Mode::Script);
        let program = assembler.finish();
        assert_eq!(program.script.fragments(), &[text("a"), code(""), text("c")]);
        assert_eq!(
            program.class_features.fragments(),
            &[code("void F() {"), text("b"), Fragment::EmitExpression("x".into()), code("}")]
        );
    }

    #[test]
    fn control_block_goes_to_script_even_in_class_feature_mode() {
        let mut assembler = Assembler::new();
        assembler.append_class_feature("int n;".into());
        assert_eq!(assembler.mode(), Mode::ClassFeature);

        assembler.append_control("n++;".into());
        assert_eq!(assembler.mode(), Mode::Script);

        let program = assembler.finish();
        assert_eq!(program.script.fragments(), &[code("n++;")]);
        assert_eq!(program.class_features.fragments(), &[code("int n;")]);
    }

    #[test]
    fn output_path_is_set_once() {
        let mut assembler = Assembler::new();
        assert!(assembler.set_output_path("a.txt".into()));
        assert!(!assembler.set_output_path("b.txt".into()));
        assert_eq!(assembler.output_path(), Some("a.txt"));
    }

    #[test]
    fn usings_keep_duplicates_in_order() {
        let mut assembler = Assembler::new();
        for ns in ["System", "System.IO", "System"] {
            assembler.add_using(ns.into());
        }
        assert_eq!(assembler.finish().usings, vec!["System", "System.IO", "System"]);
    }
}
