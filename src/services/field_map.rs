/*
 * Responsibility
 * - 設定済みの field → 属性識別子 マッピングを extractor 経由で解決
 * - 解決できない field は warn を出してスキップ (同期全体は落とさない)
 */
use std::collections::BTreeMap;

use tracing::warn;

use crate::config::FieldMapping;
use crate::services::attr_extract::AttributeExtractor;
use crate::session::manager::SessionAttributeManager;

/// Resolves a configured field mapping against the current SAML session.
///
/// Callers (e.g. a user-field sync) supply a mapping of their own field
/// names to attribute identifiers. Fields whose identifier resolves to an
/// absent value, or whose lookup fails, are dropped from the result.
#[derive(Clone, Debug)]
pub struct FieldMapper {
    mapping: FieldMapping,
}

impl FieldMapper {
    pub fn new(mapping: FieldMapping) -> Self {
        Self { mapping }
    }

    pub fn resolve<M: SessionAttributeManager>(
        &self,
        extractor: &AttributeExtractor<M>,
    ) -> BTreeMap<String, String> {
        let mut resolved = BTreeMap::new();

        for (field, identifier) in self.mapping.iter() {
            match extractor.extract(identifier) {
                Ok(Some(value)) => {
                    resolved.insert(field.clone(), value);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(%field, %identifier, error = %e, "skipping unresolvable field");
                }
            }
        }

        resolved
    }
}
