//! TypeRef value object - a structured, target-neutral type reference
//!
//! Primitive and asynchronous-result types are named by what they mean, not
//! by how a target language spells them; the renderer maps them.

use std::fmt;

/// Built-in value types every target can express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Bool,
    Int32,
    Int64,
    Uuid,
    DateTime,
}

impl Primitive {
    pub fn display_name(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Bool => "bool",
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::Uuid => "uuid",
            Primitive::DateTime => "datetime",
        }
    }
}

/// Reference to a type
///
/// `QueryHandlerBase<GetProductByIdQuery, Product>` is a `Named` reference
/// with two `Named` arguments; the handler's `Task<Product>` return type is
/// `Async(Some(Product))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(Primitive),
    /// Asynchronous result, optionally carrying a value
    Async(Option<Box<TypeRef>>),
    /// A declared or host-provided type, optionally closed over generic arguments
    Named { name: String, args: Vec<TypeRef> },
}

impl TypeRef {
    /// A non-generic named type
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A closed generic named type
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn string() -> Self {
        TypeRef::Primitive(Primitive::String)
    }

    pub fn uuid() -> Self {
        TypeRef::Primitive(Primitive::Uuid)
    }

    /// Asynchronous completion without a value
    pub fn async_unit() -> Self {
        TypeRef::Async(None)
    }

    /// Asynchronous completion carrying a `T`
    pub fn async_of(inner: TypeRef) -> Self {
        TypeRef::Async(Some(Box::new(inner)))
    }

    /// Name of a `Named` reference, `None` for primitives and async results
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeRef::Named { name, .. } => Some(name),
            TypeRef::Primitive(_) | TypeRef::Async(_) => None,
        }
    }

    /// Generic arguments of a `Named` reference
    pub fn args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named { args, .. } => args,
            TypeRef::Primitive(_) | TypeRef::Async(_) => &[],
        }
    }

    /// Visit this reference and every nested one, outermost first
    pub fn walk(&self) -> Vec<&TypeRef> {
        let mut out = vec![self];
        match self {
            TypeRef::Primitive(_) | TypeRef::Async(None) => {}
            TypeRef::Async(Some(inner)) => out.extend(inner.walk()),
            TypeRef::Named { args, .. } => {
                for arg in args {
                    out.extend(arg.walk());
                }
            }
        }
        out
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => f.write_str(p.display_name()),
            TypeRef::Async(None) => f.write_str("async"),
            TypeRef::Async(Some(inner)) => write!(f, "async<{}>", inner),
            TypeRef::Named { name, args } => {
                f.write_str(name)?;
                if args.is_empty() {
                    return Ok(());
                }
                f.write_str("<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
        }
    }
}
