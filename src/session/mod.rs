pub mod manager;
pub mod memory;

pub use manager::{AttributeMap, SessionAttributeManager, SessionError};
pub use memory::InMemorySessionManager;
