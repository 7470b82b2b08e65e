use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the authorization overlay.
///
/// `Schema` and `UnknownMode` are configuration-time failures: the schema
/// build is unusable and no partial resolver table may be kept. `Unauthorized`
/// and `Resolver` are request-time failures, reported per field so the host
/// engine can keep resolving sibling fields.
#[derive(Debug, Error, Diagnostic)]
pub enum AuthError {
    #[error("failed to build schema from type definitions: {0}")]
    #[diagnostic(
        code(occulter::schema),
        help("check the SDL for syntax errors and that authorization directives appear only on their declared locations")
    )]
    Schema(String),

    #[error("unknown authorization mode `{0}`")]
    #[diagnostic(
        code(occulter::unknown_mode),
        help("expected one of API_KEY, AWS_IAM, OPENID_CONNECT, AMAZON_COGNITO_USER_POOLS")
    )]
    UnknownMode(String),

    #[error("Not Authorized to access {field_name} on type {type_name}")]
    #[diagnostic(code(occulter::unauthorized))]
    Unauthorized {
        type_name: String,
        field_name: String,
    },

    #[error("resolver error: {0}")]
    #[diagnostic(code(occulter::resolver))]
    Resolver(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message_names_field_and_type() {
        let err = AuthError::Unauthorized {
            type_name: "Todo".into(),
            field_name: "secret".into(),
        };
        assert_eq!(err.to_string(), "Not Authorized to access secret on type Todo");
    }

    #[test]
    fn test_unknown_mode_message() {
        let err = AuthError::UnknownMode("AWS_MAGIC".into());
        assert_eq!(err.to_string(), "unknown authorization mode `AWS_MAGIC`");
    }
}
