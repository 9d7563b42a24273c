/// Block kind, determined by the character right after `<#`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Directive,       // <#@ ... #>
    Expression,      // <#= ... #>
    ClassFeature,    // <#+ ... #>
    StandardControl, // <# ... #>
}

impl BlockKind {
    pub fn classify(discriminator: char) -> Self {
        match discriminator {
            '@' => BlockKind::Directive,
            '=' => BlockKind::Expression,
            '+' => BlockKind::ClassFeature,
            _ => BlockKind::StandardControl,
        }
    }

    /// Whether the discriminator is a marker to skip rather than the first body character
    pub fn consumes_discriminator(self) -> bool {
        !matches!(self, BlockKind::StandardControl)
    }
}
