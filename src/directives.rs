use serde::{Deserialize, Serialize};

use crate::types::AuthMode;

/// Schema location an authorization directive may be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectiveTarget {
    /// `OBJECT` — object and interface type definitions.
    #[serde(rename = "OBJECT")]
    Object,
    /// `FIELD_DEFINITION` — field definitions.
    #[serde(rename = "FIELD_DEFINITION")]
    FieldDefinition,
}

impl DirectiveTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveTarget::Object => "OBJECT",
            DirectiveTarget::FieldDefinition => "FIELD_DEFINITION",
        }
    }
}

/// One recognized authorization directive.
#[derive(Debug, Clone)]
pub struct AuthDirective {
    /// Directive name as it appears in schemas, without the leading `@`.
    pub name: String,
    /// Authorization mode the directive admits.
    pub mode: AuthMode,
    /// Locations the directive may legally be attached to.
    pub targets: Vec<DirectiveTarget>,
    /// SDL argument list without parentheses, e.g. `cognito_groups: [String!]!`.
    pub arguments: Option<String>,
}

impl AuthDirective {
    pub fn new(name: &str, mode: AuthMode, targets: &[DirectiveTarget]) -> Self {
        Self {
            name: name.to_string(),
            mode,
            targets: targets.to_vec(),
            arguments: None,
        }
    }

    pub fn with_arguments(mut self, arguments: &str) -> Self {
        self.arguments = Some(arguments.to_string());
        self
    }

    pub fn allows_target(&self, target: DirectiveTarget) -> bool {
        self.targets.contains(&target)
    }

    /// SDL declaration fragment for this directive, derived from the entry
    /// itself so declaration and matching cannot drift.
    pub fn declaration(&self) -> String {
        let arguments = match &self.arguments {
            Some(list) => format!("({list})"),
            None => String::new(),
        };
        let targets: Vec<&str> = self.targets.iter().map(DirectiveTarget::as_str).collect();
        format!("directive @{}{arguments} on {}", self.name, targets.join(" | "))
    }
}

/// Fixed registry of recognized authorization directives.
///
/// Immutable once constructed: build it at process start and pass it by
/// reference wherever directive membership is decided. There is no ambient
/// global instance.
#[derive(Debug, Clone)]
pub struct DirectiveCatalog {
    entries: Vec<AuthDirective>,
}

impl DirectiveCatalog {
    pub fn new(entries: Vec<AuthDirective>) -> Self {
        Self { entries }
    }

    /// The four canonical AppSync authorization directives.
    pub fn standard() -> Self {
        use DirectiveTarget::{FieldDefinition, Object};
        Self::new(vec![
            AuthDirective::new("aws_api_key", AuthMode::ApiKey, &[FieldDefinition, Object]),
            AuthDirective::new("aws_iam", AuthMode::Iam, &[FieldDefinition, Object]),
            AuthDirective::new("aws_oidc", AuthMode::OpenidConnect, &[FieldDefinition, Object]),
            AuthDirective::new(
                "aws_cognito_user_pools",
                AuthMode::CognitoUserPools,
                &[FieldDefinition],
            )
            .with_arguments("cognito_groups: [String!]!"),
        ])
    }

    /// Is `name` a recognized authorization directive?
    pub fn is_authorization_directive(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn entry(&self, name: &str) -> Option<&AuthDirective> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn entries(&self) -> &[AuthDirective] {
        &self.entries
    }

    /// Newline-joined SDL declarations for every entry, to be merged into the
    /// schema source before parsing so a validating parser accepts the
    /// catalog's directives.
    pub fn type_definitions(&self) -> String {
        let declarations: Vec<String> =
            self.entries.iter().map(AuthDirective::declaration).collect();
        declarations.join("\n")
    }
}
