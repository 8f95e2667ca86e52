pub mod context;
pub mod field;
pub mod overrides;

pub use context::FormContext;
pub use field::{ChangeHandler, FieldDescriptor, IdSchema, SchemaFragment, UiOptions, UiSchema};
pub use overrides::{HelpLink, OverrideMap, OverrideRecord, OverrideText};
