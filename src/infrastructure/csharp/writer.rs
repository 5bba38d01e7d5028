//! Indentation-aware source writer
//!
//! Blocks are opened and closed through the writer, never by pushing raw
//! braces, so the emitted text always has balanced `{`/`}` pairs or the
//! writer reports where it went wrong.

use thiserror::Error;

const INDENT: &str = "    ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("closing a block that was never opened")]
    Underflow,
    #[error("{0} block(s) left open at end of unit")]
    Unclosed(usize),
}

#[derive(Debug, Default)]
pub struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Write an empty line (no trailing indentation)
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write `header`, then open a brace block on its own line
    pub fn open(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    pub fn close(&mut self) -> Result<(), BlockError> {
        if self.depth == 0 {
            return Err(BlockError::Underflow);
        }
        self.depth -= 1;
        self.line("}");
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> Result<String, BlockError> {
        if self.depth != 0 {
            return Err(BlockError::Unclosed(self.depth));
        }
        Ok(self.out)
    }
}
