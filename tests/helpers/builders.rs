use std::sync::{Arc, Mutex};

use async_graphql::Value;
use occulter::{AuthError, AuthMode, FieldInfo, FieldResolverFn, RequestContext};

/// One recorded invocation of a capturing resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedCall {
    pub parent: Value,
    pub args: Value,
    pub mode: AuthMode,
    pub groups: Vec<String>,
    pub info: FieldInfo,
}

/// Resolver that returns a fixed value on every call.
pub fn fixed_resolver(value: Value) -> FieldResolverFn {
    Arc::new(move |_, _, _, _| Ok(value.clone()))
}

/// Resolver that fails with a resolver error on every call.
pub fn failing_resolver(message: &str) -> FieldResolverFn {
    let message = message.to_string();
    Arc::new(move |_, _, _, _| Err(AuthError::Resolver(message.clone())))
}

/// Resolver that records the four parameters of every invocation before
/// returning a fixed value.
pub fn capturing_resolver(value: Value) -> (FieldResolverFn, Arc<Mutex<Vec<CapturedCall>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&calls);
    let resolver: FieldResolverFn = Arc::new(move |parent, args, context, info| {
        recorded.lock().expect("capture lock").push(CapturedCall {
            parent: parent.clone(),
            args: args.clone(),
            mode: context.authorization_mode,
            groups: context.groups.clone(),
            info: info.clone(),
        });
        Ok(value.clone())
    });
    (resolver, calls)
}

/// Request context with the given mode and no groups.
pub fn ctx(mode: AuthMode) -> RequestContext {
    RequestContext::new(mode)
}

/// Field metadata as the host engine would pass it.
pub fn info(type_name: &str, field_name: &str) -> FieldInfo {
    FieldInfo::new(type_name, field_name, "String")
}
