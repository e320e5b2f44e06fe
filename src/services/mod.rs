pub mod attr_extract;
pub mod field_map;

pub use attr_extract::AttributeExtractor;
pub use field_map::FieldMapper;
