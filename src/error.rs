use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::scanner::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ErrorKind {
    #[strum(serialize = "Illegal Character")]
    IllegalCharacter,
}

/// A scan failure, positioned between two independent cursor snapshots.
#[derive(Error, Debug, Diagnostic)]
#[error("{kind}: {detail}\nFile {}, line {}", .start.source_name(), .start.line() + 1)]
#[diagnostic(code(arith::lex))]
pub struct LexError {
    kind: ErrorKind,
    detail: String,
    start: Position,
    end: Position,
    #[label("here")]
    span: SourceSpan,
    #[source_code]
    src: NamedSource<String>,
}

impl LexError {
    pub fn new(kind: ErrorKind, start: Position, end: Position, detail: impl Into<String>) -> Self {
        let offset = start.byte_offset();
        let len = end.byte_offset().saturating_sub(offset);
        let src = NamedSource::new(start.source_name(), start.source_text().to_string());
        Self {
            kind,
            detail: detail.into(),
            span: SourceSpan::new(offset.into(), len),
            src,
            start,
            end,
        }
    }

    pub fn illegal_character(start: Position, end: Position, c: char) -> Self {
        Self::new(ErrorKind::IllegalCharacter, start, end, format!("'{c}'"))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn end(&self) -> &Position {
        &self.end
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }

    /// The plain-text diagnostic: kind, detail, then file and 1-based line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
