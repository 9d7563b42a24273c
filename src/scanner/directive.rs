/// Directive parsing and dispatch for `<#@ name key="value" ... #>` blocks
use super::cursor::CharCursor;
use crate::assembler::Assembler;
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::error::{Result, TemplateError};
use crate::ir::Position;
use tracing::debug;

/// Characters stripped from the template path: the `.tt` extension with its
/// separator. The separator is put back before the new extension.
const TEMPLATE_EXTENSION_LEN: usize = 3;
const EXTENSION_SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Template,
    Assembly,
    Import,
    Output,
    Unrecognized,
}

impl DirectiveKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "template" => DirectiveKind::Template,
            "assembly" => DirectiveKind::Assembly,
            "import" => DirectiveKind::Import,
            "output" => DirectiveKind::Output,
            _ => DirectiveKind::Unrecognized,
        }
    }
}

/// Parse a directive body. The cursor sits just past the `@`; on success it
/// sits just past the closing `#>`.
pub fn parse_directive(cursor: &mut CharCursor, block_start: Position) -> Result<Directive> {
    cursor.skip_whitespace();
    let name = cursor.read_identifier();
    let mut properties = Vec::new();

    loop {
        cursor.skip_whitespace();
        if cursor.current().is_none() {
            return Err(TemplateError::UnterminatedBlock { start: block_start });
        }
        if cursor.at_block_end() {
            cursor.advance();
            cursor.advance();
            break;
        }
        properties.push(read_property(cursor)?);
    }

    Ok(Directive { name, properties })
}

fn read_property(cursor: &mut CharCursor) -> Result<(String, String)> {
    let key = cursor.read_identifier();
    if key.is_empty() {
        return Err(TemplateError::MalformedProperty {
            at: cursor.position(),
            expected: "property name",
        });
    }

    cursor.skip_whitespace();
    if cursor.current() != Some('=') {
        return Err(TemplateError::MalformedProperty {
            at: cursor.position(),
            expected: "'=' after property name",
        });
    }
    cursor.advance();

    cursor.skip_whitespace();
    if cursor.current() != Some('"') {
        return Err(TemplateError::MalformedProperty {
            at: cursor.position(),
            expected: "opening '\"' of property value",
        });
    }
    let quote_start = cursor.position();

    // No escapes: the value ends at the next quote
    let mut value = String::new();
    loop {
        match cursor.advance() {
            None => return Err(TemplateError::UnterminatedQuotedValue { start: quote_start }),
            Some('"') => break,
            Some(c) => value.push(c),
        }
    }
    cursor.advance();

    Ok((key, value))
}

/// Apply a parsed directive's side effects.
pub fn apply_directive(
    directive: Directive,
    template_path: &str,
    assembler: &mut Assembler,
    diagnostics: &mut dyn DiagnosticsSink,
) {
    let kind = DirectiveKind::from_name(&directive.name);
    debug!(name = %directive.name, ?kind, properties = directive.properties.len(), "directive");

    if kind == DirectiveKind::Unrecognized {
        diagnostics.report(Diagnostic::IgnoredDirective { name: directive.name });
        return;
    }

    for (key, value) in directive.properties {
        match (kind, key.as_str()) {
            (DirectiveKind::Template, "debug" | "hostspecific" | "language") => {
                diagnostics.report(Diagnostic::TemplateSetting { key, value });
            }
            (DirectiveKind::Assembly, "name") => {
                diagnostics.report(Diagnostic::AssemblyReference { name: value });
            }
            (DirectiveKind::Import, "namespace") => assembler.add_using(value),
            (DirectiveKind::Output, "extension") => {
                let path = derive_output_path(template_path, &value);
                if !assembler.set_output_path(path.clone()) {
                    let kept = assembler.output_path().unwrap_or_default().to_string();
                    diagnostics.report(Diagnostic::DuplicateOutput { ignored: path, kept });
                }
            }
            _ => diagnostics.report(Diagnostic::IgnoredProperty {
                directive: directive.name.clone(),
                key,
            }),
        }
    }
}

/// Replace the template's 3-character extension (`.tt`) with `extension`.
///
/// `Report.tt` + `txt` gives `Report` + `.` + `txt`. The template path is
/// assumed to end in a 3-character extension; nothing checks that it does,
/// so `Page.cshtml` + `txt` gives `Page.csh.txt`.
pub fn derive_output_path(template_path: &str, extension: &str) -> String {
    let keep = template_path.chars().count().saturating_sub(TEMPLATE_EXTENSION_LEN);
    let mut path: String = template_path.chars().take(keep).collect();
    path.push(EXTENSION_SEPARATOR);
    path.push_str(extension);
    path
}
