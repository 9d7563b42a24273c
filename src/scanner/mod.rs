/// Template scanner - single pass over the template text
///
/// This module is organized into:
/// - cursor: one-character-lookahead reader with line/column tracking
/// - block: block kind classification from the discriminator character
/// - directive: `<#@ ... #>` parsing and dispatch
///
/// The scanner itself reads literal text runs and block bodies and feeds
/// them to the [`Assembler`].
mod block;
mod cursor;
mod directive;

pub use block::BlockKind;
pub use cursor::CharCursor;
pub use directive::{apply_directive, derive_output_path, parse_directive, Directive, DirectiveKind};

use crate::assembler::Assembler;
use crate::diagnostics::DiagnosticsSink;
use crate::error::{Result, TemplateError};
use crate::ir::{Position, TemplateProgram};
use tracing::{debug, trace};

pub struct TemplateScanner<'a> {
    cursor: CharCursor<'a>,
    template_path: &'a str,
    assembler: Assembler,
    diagnostics: &'a mut dyn DiagnosticsSink,
}

impl<'a> TemplateScanner<'a> {
    /// `template_path` is only used to derive the output path of `output` directives.
    pub fn new(source: &'a str, template_path: &'a str, diagnostics: &'a mut dyn DiagnosticsSink) -> Self {
        Self {
            cursor: CharCursor::new(source),
            template_path,
            assembler: Assembler::new(),
            diagnostics,
        }
    }

    pub fn scan(mut self) -> Result<TemplateProgram> {
        self.cursor.advance();

        while self.cursor.current().is_some() {
            if self.cursor.at_block_start() {
                let start = self.cursor.position();
                self.cursor.advance();
                self.cursor.advance();
                self.read_block(start)?;
                // Whitespace-only gaps between blocks produce nothing
                self.cursor.skip_whitespace();
            } else {
                self.read_text();
            }
        }

        let program = self.assembler.finish();
        debug!(
            usings = program.usings.len(),
            script = program.script.len(),
            class_features = program.class_features.len(),
            "scan complete"
        );
        Ok(program)
    }

    /// The cursor sits on the discriminator, just past `<#`.
    fn read_block(&mut self, start: Position) -> Result<()> {
        let Some(discriminator) = self.cursor.current() else {
            return Err(TemplateError::UnterminatedBlock { start });
        };
        let kind = BlockKind::classify(discriminator);
        trace!(?kind, %start, "block");

        if kind.consumes_discriminator() {
            self.cursor.advance();
        }

        match kind {
            BlockKind::Directive => {
                let directive = parse_directive(&mut self.cursor, start)?;
                apply_directive(directive, self.template_path, &mut self.assembler, &mut *self.diagnostics);
            }
            BlockKind::Expression => {
                let body = self.read_block_body(start)?;
                self.assembler.append_expression(body);
            }
            BlockKind::ClassFeature => {
                let body = self.read_block_body(start)?;
                self.assembler.append_class_feature(body);
            }
            BlockKind::StandardControl => {
                let body = self.read_block_body(start)?;
                self.assembler.append_control(body);
            }
        }
        Ok(())
    }

    /// Copy characters verbatim up to `#>`, consuming the marker.
    fn read_block_body(&mut self, start: Position) -> Result<String> {
        let mut body = String::new();
        loop {
            if self.cursor.at_block_end() {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(body);
            }
            match self.cursor.current() {
                Some(c) => body.push(c),
                None => return Err(TemplateError::UnterminatedBlock { start }),
            }
            self.cursor.advance();
        }
    }

    /// Read literal text up to the next `<#` or end of input, doubling quotes.
    ///
    /// The current character is known not to start a block.
    fn read_text(&mut self) {
        let mut text = String::new();
        while let Some(c) = self.cursor.current() {
            if c == '"' {
                text.push_str("\"\"");
            } else {
                text.push(c);
            }
            self.cursor.advance();
            if self.cursor.at_block_start() {
                break;
            }
        }
        self.assembler.append_text(text);
    }
}

/// Scan a template into its two code regions and metadata.
pub fn scan_template(
    source: &str,
    template_path: &str,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<TemplateProgram> {
    TemplateScanner::new(source, template_path, diagnostics).scan()
}
