//! SDL walking: parse type definitions and fold `extend type` blocks into
//! their base definition so the generator sees one node per type.

use async_graphql::parser::parse_schema;
use async_graphql::parser::types::{ConstDirective, FieldDefinition, TypeKind, TypeSystemDefinition};
use async_graphql::Value;

use crate::errors::AuthError;

/// One field-bearing type after folding: base definition plus any
/// `extend type` blocks, in source order.
#[derive(Debug, Clone)]
pub(crate) struct FoldedType {
    pub(crate) name: String,
    /// Type-level directives from the base definition and every extension.
    pub(crate) directives: Vec<ConstDirective>,
    pub(crate) fields: Vec<FieldDefinition>,
}

/// Parses SDL and returns every object and interface type, extensions folded
/// into their base by name. An extension without a base definition is kept as
/// a definition of its own. Scalars, enums, unions and input types carry no
/// resolvable fields and are skipped.
pub(crate) fn parse_object_types(type_definitions: &str) -> Result<Vec<FoldedType>, AuthError> {
    let doc = parse_schema(type_definitions).map_err(|e| AuthError::Schema(e.to_string()))?;

    let mut folded: Vec<FoldedType> = Vec::new();
    for definition in doc.definitions {
        let TypeSystemDefinition::Type(type_def) = definition else {
            continue;
        };
        let type_def = type_def.node;
        let fields = match type_def.kind {
            TypeKind::Object(object) => object.fields,
            TypeKind::Interface(interface) => interface.fields,
            _ => continue,
        };
        let name = type_def.name.node.to_string();
        let directives = type_def.directives.into_iter().map(|d| d.node);
        let fields = fields.into_iter().map(|f| f.node);
        match folded.iter_mut().find(|t| t.name == name) {
            Some(existing) => {
                existing.directives.extend(directives);
                existing.fields.extend(fields);
            }
            None => folded.push(FoldedType {
                name,
                directives: directives.collect(),
                fields: fields.collect(),
            }),
        }
    }
    Ok(folded)
}

/// Reads a directive argument expected to hold a list of strings.
///
/// Returns `Ok(None)` when the argument is absent, `Ok(Some(values))` when it
/// is a string list (a lone string counts as a singleton list, per GraphQL
/// input coercion), and `Err(reason)` when it is present with any other shape.
pub(crate) fn string_list_argument(
    directive: &ConstDirective,
    name: &str,
) -> Result<Option<Vec<String>>, String> {
    let Some(value) = directive.get_argument(name) else {
        return Ok(None);
    };
    match &value.node {
        Value::String(single) => Ok(Some(vec![single.clone()])),
        Value::List(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => values.push(s.clone()),
                    other => return Err(format!("expected String list items, found {other}")),
                }
            }
            Ok(Some(values))
        }
        other => Err(format!("expected a list of String values, found {other}")),
    }
}
