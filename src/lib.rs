//! Occulter - field-level authorization overlay for GraphQL resolver maps
//!
//! Given GraphQL type definitions annotated with authorization directives and
//! an existing resolver table, occulter derives the set of authorization
//! modes allowed to resolve each field and produces a new table in which
//! every field resolver rejects unpermitted callers before delegating to the
//! original logic.

pub mod directives;
pub mod errors;
pub mod generate;
pub mod policy;
pub mod resolvers;
mod schema;
pub mod types;

pub use directives::{AuthDirective, DirectiveCatalog, DirectiveTarget};
pub use errors::AuthError;
pub use generate::generate_auth_resolvers;
pub use policy::FieldPolicy;
pub use resolvers::{default_field_resolver, FieldResolverFn, ResolverMap};
pub use types::{AuthMode, FieldInfo, RequestContext};
