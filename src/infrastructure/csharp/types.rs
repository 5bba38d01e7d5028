//! Type resolution and C# spelling of type references
//!
//! A reference renders only if it resolves: to a C# keyword type, to a
//! well-known library type whose namespace is referenced, to a type declared
//! in the same container, or to a host-provided type.

use std::collections::{BTreeMap, BTreeSet};

use super::escaping::escape_identifier;
use crate::domain::entities::{NamespaceContainer, Value};
use crate::domain::value_objects::{is_identifier, Primitive, TypeRef};

const SYSTEM: &str = "System";
const THREADING: &str = "System.Threading";
const TASKS: &str = "System.Threading.Tasks";

/// Library types resolvable by name once their namespace is referenced
const WELL_KNOWN: [(&str, &str); 4] = [
    ("Guid", SYSTEM),
    ("DateTime", SYSTEM),
    ("TimeSpan", SYSTEM),
    ("CancellationToken", THREADING),
];

/// The set of type names visible while rendering one container
#[derive(Debug)]
pub struct TypeScope<'a> {
    /// Name -> generic arity
    visible: BTreeMap<&'a str, usize>,
    references: &'a BTreeSet<String>,
}

impl<'a> TypeScope<'a> {
    /// Collect declared and host types; fails on a duplicate declaration
    pub fn for_container(container: &'a NamespaceContainer) -> Result<Self, (String, String)> {
        let mut visible = container.host_types();
        let mut declared: BTreeSet<&str> = BTreeSet::new();

        for artifact in container.groups().iter().flat_map(|g| g.artifacts()) {
            let id = artifact.identifier();
            if !declared.insert(id) {
                return Err((
                    id.to_string(),
                    format!("'{}' is declared more than once in '{}'", id, container.name()),
                ));
            }
            visible.insert(id, 0);
        }

        Ok(Self {
            visible,
            references: container.references(),
        })
    }

    /// C# spelling of `ty`, or the reason it cannot be rendered
    pub fn render(&self, ty: &TypeRef) -> Result<String, String> {
        match ty {
            TypeRef::Primitive(p) => self.primitive(*p),
            TypeRef::Async(None) => {
                self.require(TASKS, "Task")?;
                Ok("Task".to_string())
            }
            TypeRef::Async(Some(inner)) => {
                self.require(TASKS, "Task")?;
                Ok(format!("Task<{}>", self.render(inner)?))
            }
            TypeRef::Named { name, args } => self.named(name, args),
        }
    }

    /// C# expression producing `value`
    pub fn render_value(&self, value: &Value) -> Result<String, String> {
        match value {
            Value::Default(ty @ TypeRef::Named { .. }) => Ok(format!("new {}()", self.render(ty)?)),
            Value::Default(ty) => Ok(format!("default({})", self.render(ty)?)),
        }
    }

    fn primitive(&self, p: Primitive) -> Result<String, String> {
        let spelled = match p {
            Primitive::String => "string",
            Primitive::Bool => "bool",
            Primitive::Int32 => "int",
            Primitive::Int64 => "long",
            Primitive::Uuid => {
                self.require(SYSTEM, "Guid")?;
                "Guid"
            }
            Primitive::DateTime => {
                self.require(SYSTEM, "DateTime")?;
                "DateTime"
            }
        };
        Ok(spelled.to_string())
    }

    fn named(&self, name: &str, args: &[TypeRef]) -> Result<String, String> {
        if !is_identifier(name) {
            return Err(format!("'{}' is not a valid type name", name));
        }
        let arity = match self.visible.get(name) {
            Some(arity) => *arity,
            None => match WELL_KNOWN.iter().find(|(known, _)| *known == name) {
                Some((_, namespace)) => {
                    self.require(namespace, name)?;
                    0
                }
                None => return Err(format!("unresolved type '{}'", name)),
            },
        };
        if arity != args.len() {
            return Err(format!(
                "'{}' takes {} type argument(s), found {}",
                name,
                arity,
                args.len()
            ));
        }

        let mut out = escape_identifier(name).into_owned();
        if !args.is_empty() {
            let rendered = args
                .iter()
                .map(|a| self.render(a))
                .collect::<Result<Vec<_>, _>>()?;
            out.push('<');
            out.push_str(&rendered.join(", "));
            out.push('>');
        }
        Ok(out)
    }

    fn require(&self, namespace: &str, type_name: &str) -> Result<(), String> {
        if self.references.contains(namespace) {
            Ok(())
        } else {
            Err(format!(
                "'{}' requires a reference to '{}'",
                type_name, namespace
            ))
        }
    }
}
