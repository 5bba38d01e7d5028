//! C# renderer
//!
//! Serializes a `NamespaceContainer` into one C# compilation unit:
//!
//! ```text
//! // <auto-generated> ... </auto-generated>
//! namespace CQRSArchitect.Application.Generated
//! {
//!     using System;
//!     using System.Threading.Tasks;
//!
//!     public class CreateProductCommand : ICommand
//!     {
//!         public string Name { get; set; }
//!     }
//!     ...
//! }
//! ```

use std::collections::BTreeSet;

use super::escaping::{escape_identifier, escape_line_comment, escape_qualified};
use super::types::TypeScope;
use super::writer::{BlockError, SourceWriter};
use crate::domain::entities::{
    ArtifactSpec, MemberSpec, MethodSpec, NamespaceContainer, PropertySpec, Statement,
};
use crate::domain::ports::TargetRenderer;
use crate::domain::value_objects::{is_identifier, TypeRef};
use crate::error::{GenError, GenResult};

const HEADER: &[&str] = &[
    "// <auto-generated>",
    "//     This code was generated by cqrsgen.",
    "//     Changes to this file will be lost when the code is regenerated.",
    "// </auto-generated>",
];

/// C# renderer
#[derive(Debug, Clone, Copy)]
pub struct CSharpRenderer {
    syntax_check: bool,
}

impl CSharpRenderer {
    /// Renderer with the tree-sitter check enabled when compiled in
    pub fn new() -> Self {
        Self {
            syntax_check: cfg!(feature = "syntax-check"),
        }
    }

    /// Toggle the post-render grammar check (no-op without `syntax-check`)
    pub fn with_syntax_check(mut self, enabled: bool) -> Self {
        self.syntax_check = enabled && cfg!(feature = "syntax-check");
        self
    }

    pub fn syntax_check(&self) -> bool {
        self.syntax_check
    }

    fn verify(&self, container: &NamespaceContainer, text: &str) -> GenResult<()> {
        if !self.syntax_check {
            return Ok(());
        }
        #[cfg(feature = "syntax-check")]
        super::syntax::check(text)
            .map_err(|e| GenError::malformed(container.name(), e.to_string()))?;
        #[cfg(not(feature = "syntax-check"))]
        let _ = (container, text);
        Ok(())
    }
}

impl Default for CSharpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetRenderer for CSharpRenderer {
    fn language(&self) -> &'static str {
        "C#"
    }

    fn file_extension(&self) -> &'static str {
        "g.cs"
    }

    fn render_container(&self, container: &NamespaceContainer) -> GenResult<String> {
        check_qualified_name(container.name(), container.name(), "namespace")?;
        for reference in container.references() {
            check_qualified_name(container.name(), reference, "reference")?;
        }

        let scope = TypeScope::for_container(container)
            .map_err(|(artifact, reason)| GenError::malformed(artifact, reason))?;

        let mut w = SourceWriter::new();
        for line in HEADER {
            w.line(line);
        }
        w.open(&format!("namespace {}", escape_qualified(container.name())));

        for reference in container.references() {
            w.line(&format!("using {};", escape_qualified(reference)));
        }

        let mut first = container.references().is_empty();
        for artifact in container.groups().iter().flat_map(|g| g.artifacts()) {
            if !first {
                w.blank();
            }
            first = false;
            render_artifact(&mut w, artifact, &scope)?;
        }

        w.close().map_err(|e| block_error(container.name(), e))?;
        let text = w.finish().map_err(|e| block_error(container.name(), e))?;

        self.verify(container, &text)?;
        tracing::trace!(namespace = container.name(), bytes = text.len(), "rendered container");
        Ok(text)
    }
}

fn block_error(artifact: &str, e: BlockError) -> GenError {
    GenError::malformed(artifact, e.to_string())
}

fn check_qualified_name(artifact: &str, name: &str, what: &str) -> GenResult<()> {
    if name.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(GenError::malformed(
            artifact,
            format!("{} '{}' is not a dotted identifier", what, name),
        ))
    }
}

fn render_artifact(w: &mut SourceWriter, artifact: &ArtifactSpec, scope: &TypeScope) -> GenResult<()> {
    let id = artifact.identifier();
    let malformed = |reason: String| GenError::malformed(id, reason);

    if !is_identifier(id) {
        return Err(malformed(format!("'{}' is not a valid type name", id)));
    }
    check_member_names(artifact)?;

    let base = scope.render(artifact.base_type()).map_err(malformed)?;
    w.open(&format!("public class {} : {}", escape_identifier(id), base));

    for (i, member) in artifact.members().iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        match member {
            MemberSpec::Property(p) => render_property(w, p, scope).map_err(malformed)?,
            MemberSpec::Method(m) => render_method(w, m, scope).map_err(malformed)?,
        }
    }

    w.close().map_err(|e| block_error(id, e))
}

fn check_member_names(artifact: &ArtifactSpec) -> GenResult<()> {
    let mut seen = BTreeSet::new();
    for member in artifact.members() {
        let name = member.name();
        let reason = if !is_identifier(name) {
            Some(format!("member '{}' is not a valid identifier", name))
        } else if name == artifact.identifier() {
            Some(format!("member '{}' has the same name as its type", name))
        } else if !seen.insert(name) {
            Some(format!("member '{}' is declared more than once", name))
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(GenError::malformed(artifact.identifier(), reason));
        }
    }
    Ok(())
}

fn render_property(w: &mut SourceWriter, p: &PropertySpec, scope: &TypeScope) -> Result<(), String> {
    let ty = scope.render(&p.ty)?;
    w.line(&format!(
        "public {} {} {{ get; set; }}",
        ty,
        escape_identifier(&p.name)
    ));
    Ok(())
}

fn render_method(w: &mut SourceWriter, m: &MethodSpec, scope: &TypeScope) -> Result<(), String> {
    let return_type = scope.render(&m.return_type)?;

    let mut seen = BTreeSet::new();
    let mut params = Vec::with_capacity(m.parameters.len());
    for param in &m.parameters {
        if !is_identifier(&param.name) {
            return Err(format!("parameter '{}' is not a valid identifier", param.name));
        }
        if !seen.insert(param.name.as_str()) {
            return Err(format!("parameter '{}' is declared more than once", param.name));
        }
        params.push(format!(
            "{} {}",
            scope.render(&param.ty)?,
            escape_identifier(&param.name)
        ));
    }

    if !matches!(
        m.body.last(),
        Some(Statement::ReturnCompleted | Statement::ReturnCompletedWith(_))
    ) {
        return Err(format!("method '{}' does not end with a return", m.name));
    }

    let modifiers = if m.overrides_base {
        "public override"
    } else {
        "public"
    };
    w.open(&format!(
        "{} {} {}({})",
        modifiers,
        return_type,
        escape_identifier(&m.name),
        params.join(", ")
    ));

    for stmt in &m.body {
        match stmt {
            Statement::Placeholder(text) => {
                w.line(&format!("// {}", escape_line_comment(text)));
            }
            Statement::ReturnCompleted => {
                if m.return_type != TypeRef::async_unit() {
                    return Err(format!(
                        "'{}' returns a completed task but is declared to return '{}'",
                        m.name, return_type
                    ));
                }
                w.line("return Task.CompletedTask;");
            }
            Statement::ReturnCompletedWith(value) => {
                if m.return_type != TypeRef::async_of(value.ty().clone()) {
                    return Err(format!(
                        "'{}' returns a completed '{}' but is declared to return '{}'",
                        m.name,
                        value.ty(),
                        return_type
                    ));
                }
                w.line(&format!(
                    "return Task.FromResult({});",
                    scope.render_value(value)?
                ));
            }
        }
    }

    w.close().map_err(|e| e.to_string())
}
