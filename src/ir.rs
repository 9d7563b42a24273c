use std::fmt;

/// Line/column of a character in the template (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Which region receives text and expression blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Script,
    ClassFeature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Code(String),           // Verbatim body of a control or class-feature block
    EmitText(String),       // Literal text, quotes already doubled
    EmitExpression(String), // Verbatim body of an expression block
}

/// Append-only sequence of fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRegion {
    fragments: Vec<Fragment>,
}

impl CodeRegion {
    pub fn new() -> Self {
        Self { fragments: Vec::new() }
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}

/// Everything a scan produces; the serializer's only input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateProgram {
    pub usings: Vec<String>,
    pub output_path: Option<String>,
    pub script: CodeRegion,
    pub class_features: CodeRegion,
}

impl TemplateProgram {
    pub fn new() -> Self {
        Self {
            usings: Vec::new(),
            output_path: None,
            script: CodeRegion::new(),
            class_features: CodeRegion::new(),
        }
    }

    pub fn region(&self, mode: Mode) -> &CodeRegion {
        match mode {
            Mode::Script => &self.script,
            Mode::ClassFeature => &self.class_features,
        }
    }

    pub fn region_mut(&mut self, mode: Mode) -> &mut CodeRegion {
        match mode {
            Mode::Script => &mut self.script,
            Mode::ClassFeature => &mut self.class_features,
        }
    }
}
