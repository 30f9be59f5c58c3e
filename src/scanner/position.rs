use std::fmt;
use std::sync::Arc;

/// A named piece of source text. Shared read-only by every [`Position`] that points into it.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Cursor over a [`Source`].
///
/// `offset` counts characters and `byte_offset` counts UTF-8 bytes. `line` and `column` are
/// 0-based. Before the first [`advance`](Position::advance) the cursor sits one step before the
/// text, and `offset`/`column` report `None`.
///
/// Snapshots are taken with `clone()`. A clone never observes later advances of the original.
#[derive(Debug, Clone)]
pub struct Position {
    offset: Option<usize>,
    byte_offset: usize,
    line: usize,
    column: Option<usize>,
    source: Arc<Source>,
}

impl Position {
    pub fn before_start(source: Arc<Source>) -> Self {
        Self {
            offset: None,
            byte_offset: 0,
            line: 0,
            column: None,
            source,
        }
    }

    /// Step past `consumed`, the character the cursor was on.
    ///
    /// There is no bounds check: advancing past the end keeps counting.
    pub fn advance(&mut self, consumed: Option<char>) -> &mut Self {
        self.offset = Some(self.offset.map_or(0, |o| o + 1));
        self.column = Some(self.column.map_or(0, |c| c + 1));
        if let Some(c) = consumed {
            self.byte_offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = Some(0);
            }
        }
        self
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn source_text(&self) -> &str {
        self.source.text()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.byte_offset == other.byte_offset
            && self.line == other.line
            && self.column == other.column
            && (Arc::ptr_eq(&self.source, &other.source) || self.source == other.source)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based for humans
        let column = self.column.map_or(0, |c| c + 1);
        write!(f, "{}:{}:{}", self.source.name(), self.line + 1, column)
    }
}
