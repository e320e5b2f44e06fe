/*
 * Responsibility
 * - 属性識別子の解釈 ("name" / "name[N]") と値の取得
 * - インデックス付きは attributes() から該当インデックスを引く (失敗は None)
 * - インデックスなしは manager の既定アクセサへそのまま委譲
 */
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use crate::session::manager::{SessionAttributeManager, SessionError};

// First "name[digits]" occurrence wins; name is any run of non-bracket
// characters (may be empty, matching nothing in the store).
static INDEXED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\[\]]*)\[(\d+)\]").expect("invalid indexed attribute regex"));

/// Extracts attribute values from an active SAML session.
///
/// Extends the manager's default accessor with an indexed identifier
/// convention: `"eduPersonAffiliation"` fetches the first value, while
/// `"eduPersonAffiliation[1]"` fetches the value at index 1 of the
/// multi-valued attribute.
#[derive(Clone)]
pub struct AttributeExtractor<M: SessionAttributeManager> {
    manager: Arc<M>,
}

impl<M: SessionAttributeManager> AttributeExtractor<M> {
    pub fn new(manager: Arc<M>) -> Self {
        Self { manager }
    }

    /// Resolve `identifier` against the current session.
    ///
    /// The indexed path never fails: an unknown name, an out-of-range index,
    /// an empty value at the index, or a session/backend failure all yield
    /// `Ok(None)`. Identifiers without a valid `[N]` suffix (including
    /// non-numeric brackets like `"foo[abc]"`) are delegated verbatim to the
    /// manager's single-value accessor, whose errors propagate unchanged.
    pub fn extract(&self, identifier: &str) -> Result<Option<String>, SessionError> {
        let Some(caps) = INDEXED_RE.captures(identifier) else {
            return self.manager.attribute(identifier);
        };

        let name = &caps[1];
        let Ok(index) = caps[2].parse::<usize>() else {
            // Digits beyond usize cannot address any value list.
            return Ok(None);
        };

        let attributes = match self.manager.attributes() {
            Ok(attributes) => attributes,
            Err(e) => {
                debug!(identifier, error = %e, "session attributes unavailable");
                return Ok(None);
            }
        };

        let value = attributes
            .get(name)
            .and_then(|values| values.get(index))
            .filter(|value| !value.is_empty())
            .cloned();

        if value.is_none() {
            debug!(name, index, "indexed attribute lookup missed");
        }

        Ok(value)
    }
}
