use std::collections::HashMap;

/// Multi-valued SAML attributes of the current session, keyed by attribute
/// name. Populated by the session backend; this crate only reads it.
pub type AttributeMap = HashMap<String, Vec<String>>;

/// Accessors over an active SAML authentication session.
///
/// Implementations own all session state (typically a decoded SAML response
/// held by the host application's auth layer). Callers receive the manager as
/// an injected collaborator; nothing in this crate resolves it from ambient
/// global state.
///
/// All methods are synchronous single-shot reads; no state is retained
/// between calls.
pub trait SessionAttributeManager: Send + Sync {
    // Full attribute map for the current session.
    //
    // Returns:
    // - Ok(map)                 => session is active, map may be empty
    // - Err(NoSession)          => no authenticated SAML session
    // - Err(Backend(_))         => backend failure
    fn attributes(&self) -> Result<AttributeMap, SessionError>;

    // Default (first) value for `name`.
    //
    // Returns:
    // - Ok(Some(value))         => attribute present, first value
    // - Ok(None)                => attribute present but has no values
    // - Err(UnknownAttribute)   => name not asserted in the SAML response
    fn attribute(&self, name: &str) -> Result<Option<String>, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no authenticated SAML session")]
    NoSession,

    #[error("attribute `{name}` was not found in the SAML response")]
    UnknownAttribute { name: String },

    #[error("session backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}
