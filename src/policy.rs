//! Effective per-field authorization policy and the precedence computation
//! that derives it from schema directives.

use std::collections::BTreeSet;

use async_graphql::parser::types::ConstDirective;
use serde::Serialize;

use crate::directives::DirectiveCatalog;
use crate::schema::string_list_argument;
use crate::types::{AuthMode, RequestContext};

/// The argument naming the Cognito groups a user-pool caller must hold.
pub(crate) const GROUPS_ARGUMENT: &str = "cognito_groups";

/// Derived authorization policy for a single field.
///
/// Computed once at generation time and closed over by the wrapped resolver;
/// immutable afterwards. The allowed-mode set is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPolicy {
    allowed_modes: BTreeSet<AuthMode>,
    /// Extra constraint on user-pool callers: at least one of these groups is
    /// required. `None` means no group restriction.
    cognito_groups: Option<BTreeSet<String>>,
}

impl FieldPolicy {
    /// Derives the effective policy for one field.
    ///
    /// Field-level recognized directives win outright; otherwise the declaring
    /// type's directives apply; otherwise the policy is the singleton
    /// `{default_mode}`. Scopes are never merged, and directive order within a
    /// scope does not matter. The groups constraint is collected only from the
    /// winning scope's user-pool directives.
    pub fn derive(
        catalog: &DirectiveCatalog,
        field_directives: &[ConstDirective],
        type_directives: &[ConstDirective],
        default_mode: AuthMode,
    ) -> Self {
        Self::from_scope(catalog, field_directives)
            .or_else(|| Self::from_scope(catalog, type_directives))
            .unwrap_or_else(|| Self {
                allowed_modes: BTreeSet::from([default_mode]),
                cognito_groups: None,
            })
    }

    /// Policy contributed by one annotation scope, or `None` when the scope
    /// carries no recognized directive.
    fn from_scope(catalog: &DirectiveCatalog, directives: &[ConstDirective]) -> Option<Self> {
        let mut allowed_modes = BTreeSet::new();
        let mut cognito_groups: Option<BTreeSet<String>> = None;
        for directive in directives {
            let Some(entry) = catalog.entry(directive.name.node.as_str()) else {
                continue;
            };
            allowed_modes.insert(entry.mode);
            if entry.mode == AuthMode::CognitoUserPools {
                if let Ok(Some(named)) = string_list_argument(directive, GROUPS_ARGUMENT) {
                    cognito_groups.get_or_insert_with(BTreeSet::new).extend(named);
                }
            }
        }
        if allowed_modes.is_empty() {
            None
        } else {
            Some(Self {
                allowed_modes,
                cognito_groups,
            })
        }
    }

    /// Request-time decision: is this caller allowed to resolve the field?
    ///
    /// The caller's mode must be in the allowed set. A user-pool caller must
    /// additionally hold one of the constraint groups when a constraint
    /// exists; an empty constraint set admits no user-pool caller.
    pub fn permits(&self, context: &RequestContext) -> bool {
        if !self.allowed_modes.contains(&context.authorization_mode) {
            return false;
        }
        if context.authorization_mode == AuthMode::CognitoUserPools {
            if let Some(required) = &self.cognito_groups {
                return context.groups.iter().any(|g| required.contains(g));
            }
        }
        true
    }

    pub fn allowed_modes(&self) -> &BTreeSet<AuthMode> {
        &self.allowed_modes
    }

    pub fn cognito_groups(&self) -> Option<&BTreeSet<String>> {
        self.cognito_groups.as_ref()
    }
}
