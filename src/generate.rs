//! Authorization resolver generation: walk the folded type system, derive a
//! policy for every field, and emit the enforcement-wrapped resolver table.

use std::sync::Arc;

use async_graphql::parser::types::ConstDirective;
use tracing::{debug, info};

use crate::directives::{DirectiveCatalog, DirectiveTarget};
use crate::errors::AuthError;
use crate::policy::{FieldPolicy, GROUPS_ARGUMENT};
use crate::resolvers::{default_field_resolver, FieldResolverFn, ResolverMap};
use crate::schema::{parse_object_types, string_list_argument, FoldedType};
use crate::types::AuthMode;

/// Builds the authorization-wrapped resolver table for a schema.
///
/// Walks every field of every object and interface type in `type_definitions`,
/// derives its effective policy (field directives win, then type directives,
/// then `{default_mode}`), and emits one wrapped resolver per field that
/// rejects unpermitted callers before delegating to the matching entry in
/// `existing` (or to structural default resolution when there is none).
///
/// Fails fast with [`AuthError::Schema`] when the SDL does not parse or a
/// catalog directive is used outside its declared scopes; no partial table is
/// returned. The inputs are not mutated.
pub fn generate_auth_resolvers(
    catalog: &DirectiveCatalog,
    type_definitions: &str,
    existing: &ResolverMap,
    default_mode: AuthMode,
) -> Result<ResolverMap, AuthError> {
    // 1. Parse the SDL and fold extensions into their base types
    let folded = parse_object_types(type_definitions)?;

    // 2. Reject catalog directives attached where they are not declared
    for folded_type in &folded {
        validate_directive_use(catalog, folded_type)?;
    }

    // 3. Derive one policy per field and wrap its resolver around it
    let mut generated = ResolverMap::new();
    for folded_type in &folded {
        let type_name = folded_type.name.as_str();
        for field in &folded_type.fields {
            let field_name = field.name.node.as_str();
            let field_directives: Vec<ConstDirective> =
                field.directives.iter().map(|d| d.node.clone()).collect();
            let policy = FieldPolicy::derive(
                catalog,
                &field_directives,
                &folded_type.directives,
                default_mode,
            );
            debug!(
                type_name,
                field_name,
                allowed_modes = ?policy.allowed_modes(),
                "derived field policy"
            );
            let delegate = existing.get(type_name, field_name).cloned();
            generated.insert(
                type_name,
                field_name,
                wrap_resolver(policy, type_name.to_string(), field_name.to_string(), delegate),
            );
        }
    }

    info!(
        types = folded.len(),
        fields = generated.len(),
        default_mode = %default_mode,
        "generated authorization resolvers"
    );
    Ok(generated)
}

/// Enforcement wrapper for one field: deny before delegating.
///
/// The type and field name are captured at generation time so the denial
/// message identifies the schema position regardless of what metadata the
/// host passes at request time. All four resolution parameters are forwarded
/// to the delegate unchanged.
fn wrap_resolver(
    policy: FieldPolicy,
    type_name: String,
    field_name: String,
    delegate: Option<FieldResolverFn>,
) -> FieldResolverFn {
    Arc::new(move |parent, args, context, field_info| {
        if !policy.permits(context) {
            return Err(AuthError::Unauthorized {
                type_name: type_name.clone(),
                field_name: field_name.clone(),
            });
        }
        match &delegate {
            Some(resolver) => resolver(parent, args, context, field_info),
            None => Ok(default_field_resolver(parent, field_info)),
        }
    })
}

/// Re-establishes the validating-builder behavior for catalog directives:
/// scope misuse and a missing or malformed required groups argument fail the
/// whole generation. Directives outside the catalog are not checked.
fn validate_directive_use(
    catalog: &DirectiveCatalog,
    folded_type: &FoldedType,
) -> Result<(), AuthError> {
    for directive in &folded_type.directives {
        check_directive(catalog, directive, DirectiveTarget::Object, &folded_type.name)?;
    }
    for field in &folded_type.fields {
        let location = format!("{}.{}", folded_type.name, field.name.node);
        for directive in &field.directives {
            check_directive(
                catalog,
                &directive.node,
                DirectiveTarget::FieldDefinition,
                &location,
            )?;
        }
    }
    Ok(())
}

fn check_directive(
    catalog: &DirectiveCatalog,
    directive: &ConstDirective,
    target: DirectiveTarget,
    location: &str,
) -> Result<(), AuthError> {
    let name = directive.name.node.as_str();
    let Some(entry) = catalog.entry(name) else {
        return Ok(());
    };
    if !entry.allows_target(target) {
        return Err(AuthError::Schema(format!(
            "directive @{name} on {location} is not declared for {}",
            target.as_str()
        )));
    }
    if entry.mode == AuthMode::CognitoUserPools && entry.arguments.is_some() {
        match string_list_argument(directive, GROUPS_ARGUMENT) {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(AuthError::Schema(format!(
                    "directive @{name} on {location} is missing its required \
                     {GROUPS_ARGUMENT} argument"
                )));
            }
            Err(reason) => {
                return Err(AuthError::Schema(format!(
                    "directive @{name} on {location} has an invalid \
                     {GROUPS_ARGUMENT} argument: {reason}"
                )));
            }
        }
    }
    Ok(())
}
