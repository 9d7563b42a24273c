/// Generator configuration
use crate::cli::CliArgs;

pub const DEFAULT_CLASS_NAME: &str = "GeneratedTemplate";
pub const DEFAULT_ENTRY_METHOD: &str = "Generate";

/// Names used in the generated program's boilerplate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub class_name: String,
    pub entry_method: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            entry_method: DEFAULT_ENTRY_METHOD.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            class_name: args.class_name.clone(),
            entry_method: args.entry_method.clone(),
        }
    }
}
