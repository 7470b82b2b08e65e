use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AuthError;

/// A class of caller credential recognized by the host system.
///
/// The serialized spellings are the wire identifiers carried by request
/// contexts and configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AuthMode {
    /// Request authorized by an API key.
    #[serde(rename = "API_KEY")]
    ApiKey,
    /// Request signed with IAM credentials.
    #[serde(rename = "AWS_IAM")]
    Iam,
    /// Request carrying an OpenID Connect token.
    #[serde(rename = "OPENID_CONNECT")]
    OpenidConnect,
    /// Request carrying a Cognito user pool token.
    #[serde(rename = "AMAZON_COGNITO_USER_POOLS")]
    CognitoUserPools,
}

impl AuthMode {
    /// Every recognized mode, in declaration order.
    pub const ALL: [AuthMode; 4] = [
        AuthMode::ApiKey,
        AuthMode::Iam,
        AuthMode::OpenidConnect,
        AuthMode::CognitoUserPools,
    ];

    /// The wire identifier for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::ApiKey => "API_KEY",
            AuthMode::Iam => "AWS_IAM",
            AuthMode::OpenidConnect => "OPENID_CONNECT",
            AuthMode::CognitoUserPools => "AMAZON_COGNITO_USER_POOLS",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "API_KEY" => Ok(AuthMode::ApiKey),
            "AWS_IAM" => Ok(AuthMode::Iam),
            "OPENID_CONNECT" => Ok(AuthMode::OpenidConnect),
            "AMAZON_COGNITO_USER_POOLS" => Ok(AuthMode::CognitoUserPools),
            other => Err(AuthError::UnknownMode(other.to_string())),
        }
    }
}

/// Per-request value produced by upstream authentication machinery.
///
/// The overlay only reads it: `authorization_mode` is compared against each
/// field's effective policy, and `groups` against the group allow-list of
/// group-restricted fields.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The caller's resolved authorization mode.
    pub authorization_mode: AuthMode,
    /// Group memberships attached to the caller's identity (e.g. the
    /// `cognito:groups` token claim). Empty when not applicable.
    pub groups: Vec<String>,
}

impl RequestContext {
    pub fn new(authorization_mode: AuthMode) -> Self {
        Self {
            authorization_mode,
            groups: Vec::new(),
        }
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }
}

/// Metadata describing the field a resolver is invoked for, passed by the
/// host engine as the fourth resolution parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Name of the type declaring the field.
    pub type_name: String,
    /// Name of the field.
    pub field_name: String,
    /// Rendered GraphQL type of the field, e.g. `String!` or `[Todo]`.
    pub field_type: String,
}

impl FieldInfo {
    pub fn new(type_name: &str, field_name: &str, field_type: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            field_type: field_type.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in AuthMode::ALL {
            let parsed: AuthMode = mode.as_str().parse().unwrap();
            assert_eq!(parsed, mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "AWS_MAGIC".parse::<AuthMode>().unwrap_err();
        assert!(matches!(err, AuthError::UnknownMode(m) if m == "AWS_MAGIC"));

        // Spellings are exact; no case folding.
        assert!("api_key".parse::<AuthMode>().is_err());
    }

    #[test]
    fn test_mode_serde_uses_wire_identifiers() {
        let json = serde_json::to_string(&AuthMode::CognitoUserPools).unwrap();
        assert_eq!(json, "\"AMAZON_COGNITO_USER_POOLS\"");

        let mode: AuthMode = serde_json::from_str("\"AWS_IAM\"").unwrap();
        assert_eq!(mode, AuthMode::Iam);
    }

    #[test]
    fn test_request_context_defaults_to_no_groups() {
        let ctx = RequestContext::new(AuthMode::ApiKey);
        assert_eq!(ctx.authorization_mode, AuthMode::ApiKey);
        assert!(ctx.groups.is_empty());
    }

    #[test]
    fn test_request_context_with_groups() {
        let ctx = RequestContext::new(AuthMode::CognitoUserPools).with_groups(["admin", "ops"]);
        assert_eq!(ctx.groups, vec!["admin", "ops"]);
    }

    #[test]
    fn test_field_info_new() {
        let info = FieldInfo::new("Todo", "title", "String!");
        assert_eq!(info.type_name, "Todo");
        assert_eq!(info.field_name, "title");
        assert_eq!(info.field_type, "String!");
    }
}
