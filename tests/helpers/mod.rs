pub mod builders;

pub use builders::{
    capturing_resolver, ctx, failing_resolver, fixed_resolver, info, CapturedCall,
};
