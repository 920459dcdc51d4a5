pub mod entity_type;
#[allow(clippy::module_inception)]
pub mod span;

pub use entity_type::EntityType;
pub use span::Span;
