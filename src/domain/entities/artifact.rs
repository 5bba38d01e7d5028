//! ArtifactSpec entity - the structural model of one generated type
//!
//! Specs describe *what* a generated type contains. They carry no target
//! language syntax: the renderer decides how a property, a method or a
//! "return an already-completed result" statement is spelled.

use crate::domain::value_objects::{ArtifactKind, TypeRef};

/// One generated type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    kind: ArtifactKind,
    identifier: String,
    base_type: TypeRef,
    members: Vec<MemberSpec>,
}

impl ArtifactSpec {
    pub fn new(
        kind: ArtifactKind,
        identifier: impl Into<String>,
        base_type: TypeRef,
        members: Vec<MemberSpec>,
    ) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            base_type,
            members,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn base_type(&self) -> &TypeRef {
        &self.base_type
    }

    pub fn members(&self) -> &[MemberSpec] {
        &self.members
    }

    /// Every type this artifact mentions: base type, property types,
    /// return types, parameter types and value types in bodies
    pub fn referenced_types(&self) -> Vec<&TypeRef> {
        let mut out = self.base_type.walk();
        for member in &self.members {
            match member {
                MemberSpec::Property(p) => out.extend(p.ty.walk()),
                MemberSpec::Method(m) => {
                    out.extend(m.return_type.walk());
                    for param in &m.parameters {
                        out.extend(param.ty.walk());
                    }
                    for stmt in &m.body {
                        if let Statement::ReturnCompletedWith(Value::Default(ty)) = stmt {
                            out.extend(ty.walk());
                        }
                    }
                }
            }
        }
        out
    }
}

/// A member of a generated type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberSpec {
    Property(PropertySpec),
    Method(MethodSpec),
}

impl MemberSpec {
    pub fn name(&self) -> &str {
        match self {
            MemberSpec::Property(p) => &p.name,
            MemberSpec::Method(m) => &m.name,
        }
    }
}

/// Auto-implemented property with a get/set accessor pair and no initializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: String,
    pub ty: TypeRef,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Method declaration with a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: String,
    pub return_type: TypeRef,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Statement>,
    /// Overrides a member of the base type
    pub overrides_base: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Statement in a generated method body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Explanatory placeholder; rendered as a comment
    Placeholder(String),
    /// Return an already-completed asynchronous unit
    ReturnCompleted,
    /// Return an already-completed asynchronous result holding a value
    ReturnCompletedWith(Value),
}

/// Value expression usable in a generated body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A default-constructed instance of the type
    Default(TypeRef),
}

impl Value {
    pub fn ty(&self) -> &TypeRef {
        match self {
            Value::Default(ty) => ty,
        }
    }
}
