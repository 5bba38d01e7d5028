//! Artifact Model Builder
//!
//! Maps an entity name to its four CQRS artifacts. Construction is pure:
//! the same name always produces a structurally identical group.
//!
//! ## Usage
//!
//! ```
//! use cqrsgen::application::build;
//! use cqrsgen::domain::value_objects::ArtifactKind;
//!
//! let group = build("Product").unwrap();
//! assert_eq!(
//!     group.artifact(ArtifactKind::Command).identifier(),
//!     "CreateProductCommand"
//! );
//! ```

use crate::domain::entities::{
    ArtifactGroup, ArtifactSpec, MemberSpec, MethodSpec, Parameter, PropertySpec, Statement,
    Value, HOST_CONTRACTS, LIBRARY_NAMES,
};
use crate::domain::value_objects::{ArtifactKind, EntityName, TypeRef};
use crate::error::{GenError, GenResult};

/// Build the artifact group for a raw catalog entry
///
/// Fails with `InvalidEntityName` before any artifact is constructed.
pub fn build(entity: &str) -> GenResult<ArtifactGroup> {
    let entity = EntityName::parse(entity)?;
    build_for(&entity)
}

/// Build the artifact group for an already validated entity name
///
/// Entities may not shadow the host contracts they are generated against,
/// nor the library names the generated code refers to.
pub fn build_for(entity: &EntityName) -> GenResult<ArtifactGroup> {
    if HOST_CONTRACTS
        .iter()
        .any(|(contract, _)| *contract == entity.as_str())
    {
        return Err(GenError::invalid_name(
            entity.as_str(),
            "collides with a host contract type",
        ));
    }
    if entity.as_str() == "_" {
        return Err(GenError::invalid_name("_", "'_' is the discard token"));
    }
    if LIBRARY_NAMES.contains(&entity.as_str()) {
        return Err(GenError::invalid_name(
            entity.as_str(),
            "shadows a library name used by generated code",
        ));
    }

    let artifacts = ArtifactKind::ALL
        .iter()
        .map(|kind| shape(*kind, entity))
        .collect();
    let group = ArtifactGroup::new(entity.clone(), artifacts)?;
    tracing::debug!(entity = %entity, artifacts = group.artifacts().len(), "built artifact group");
    Ok(group)
}

/// The shape of one artifact kind for `entity`
///
/// Adding a kind means adding a variant and one arm here.
pub fn shape(kind: ArtifactKind, entity: &EntityName) -> ArtifactSpec {
    let identifier = kind.identifier(entity);
    let (base_type, members) = match kind {
        ArtifactKind::Command => command(),
        ArtifactKind::CommandHandler => command_handler(entity),
        ArtifactKind::Query => query(entity),
        ArtifactKind::QueryHandler => query_handler(entity),
    };
    ArtifactSpec::new(kind, identifier, base_type, members)
}

fn command() -> (TypeRef, Vec<MemberSpec>) {
    (
        TypeRef::named("ICommand"),
        vec![MemberSpec::Property(PropertySpec::new(
            "Name",
            TypeRef::string(),
        ))],
    )
}

fn command_handler(entity: &EntityName) -> (TypeRef, Vec<MemberSpec>) {
    let command = TypeRef::named(ArtifactKind::Command.identifier(entity));
    let handle = MethodSpec {
        name: "Handle".to_string(),
        return_type: TypeRef::async_unit(),
        parameters: vec![Parameter::new("command", command.clone())],
        body: vec![
            Statement::Placeholder(format!("Handle command logic for {}", entity)),
            Statement::ReturnCompleted,
        ],
        overrides_base: true,
    };
    (
        TypeRef::generic("CommandHandlerBase", [command]),
        vec![MemberSpec::Method(handle)],
    )
}

fn query(entity: &EntityName) -> (TypeRef, Vec<MemberSpec>) {
    (
        TypeRef::generic("IQuery", [TypeRef::named(entity.as_str())]),
        vec![MemberSpec::Property(PropertySpec::new(
            "Id",
            TypeRef::uuid(),
        ))],
    )
}

fn query_handler(entity: &EntityName) -> (TypeRef, Vec<MemberSpec>) {
    let query = TypeRef::named(ArtifactKind::Query.identifier(entity));
    let result = TypeRef::named(entity.as_str());
    let handle = MethodSpec {
        name: "Handle".to_string(),
        return_type: TypeRef::async_of(result.clone()),
        parameters: vec![Parameter::new("query", query.clone())],
        body: vec![
            Statement::Placeholder(format!("Handle query logic for {}", entity)),
            Statement::ReturnCompletedWith(Value::Default(result.clone())),
        ],
        overrides_base: true,
    };
    (
        TypeRef::generic("QueryHandlerBase", [query, result]),
        vec![MemberSpec::Method(handle)],
    )
}
