use crate::session::manager::{AttributeMap, SessionAttributeManager, SessionError};

/// In-memory session manager over an already-populated attribute map.
///
/// Intended for host applications that hold a decoded SAML response in
/// process memory, and for tests. Attributes are fixed at construction; this
/// type never mutates them.
#[derive(Clone, Debug, Default)]
pub struct InMemorySessionManager {
    attributes: AttributeMap,
}

impl InMemorySessionManager {
    pub fn new(attributes: AttributeMap) -> Self {
        Self { attributes }
    }
}

impl SessionAttributeManager for InMemorySessionManager {
    fn attributes(&self) -> Result<AttributeMap, SessionError> {
        Ok(self.attributes.clone())
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, SessionError> {
        let values = self
            .attributes
            .get(name)
            .ok_or_else(|| SessionError::UnknownAttribute {
                name: name.to_string(),
            })?;

        Ok(values.first().cloned())
    }
}
