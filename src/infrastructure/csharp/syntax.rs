//! Round-trip syntax check against the tree-sitter C# grammar

use thiserror::Error;
use tree_sitter::{Node, Parser};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("C# grammar could not be loaded: {0}")]
    Grammar(String),
    #[error("parser produced no tree")]
    NoTree,
    /// Line and column are 1-based
    #[error("syntax error at {line}:{column} ({kind})")]
    Invalid {
        line: usize,
        column: usize,
        kind: String,
    },
}

/// Parse `source` as C# and report the first error or missing node
pub fn check(source: &str) -> Result<(), SyntaxError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
        .map_err(|e| SyntaxError::Grammar(e.to_string()))?;
    let tree = parser.parse(source, None).ok_or(SyntaxError::NoTree)?;

    match first_error(tree.root_node()) {
        None => Ok(()),
        Some(node) => {
            let pos = node.start_position();
            let kind = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                node.kind().to_string()
            };
            Err(SyntaxError::Invalid {
                line: pos.row + 1,
                column: pos.column + 1,
                kind,
            })
        }
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}
