/*
 * Responsibility
 * - 環境変数からの設定読み込み (SAML_FIELD_MAPPING)
 * - 設定値のバリデーション (壊れた JSON なら読み込み失敗)
 */
use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Field name → attribute identifier mapping, as configured by the host
/// application. Identifiers may use the indexed convention (`"name[N]"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping(BTreeMap<String, String>);

impl FieldMapping {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub field_mapping: FieldMapping,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // JSON object string, e.g. {"field_mail": "mail", "field_role": "eduPersonAffiliation[1]"}
        let field_mapping = match std::env::var("SAML_FIELD_MAPPING") {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|_| ConfigError::Invalid("SAML_FIELD_MAPPING"))?,
            Err(_) => FieldMapping::default(),
        };

        Ok(Self { field_mapping })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Serializes tests that touch SAML_FIELD_MAPPING; the environment is
    // process-global and tests run in parallel.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(value: Option<&str>, f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            match value {
                Some(v) => std::env::set_var("SAML_FIELD_MAPPING", v),
                None => std::env::remove_var("SAML_FIELD_MAPPING"),
            }
        }
        f();
        unsafe {
            std::env::remove_var("SAML_FIELD_MAPPING");
        }
    }

    #[test]
    fn from_env_defaults_to_empty_mapping_when_unset() {
        with_env(None, || {
            let config = Config::from_env().unwrap();
            assert!(config.field_mapping.is_empty());
        });
    }

    #[test]
    fn from_env_parses_mapping_from_variable() {
        with_env(
            Some(r#"{"field_mail": "mail", "field_role": "eduPersonAffiliation[1]"}"#),
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.field_mapping.len(), 2);
            },
        );
    }

    #[test]
    fn from_env_rejects_malformed_json() {
        with_env(Some("not a json object"), || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::Invalid("SAML_FIELD_MAPPING")));
        });
    }

    #[test]
    fn mapping_parses_from_json_object() {
        let mapping: FieldMapping = serde_json::from_str(
            r#"{"field_mail": "mail", "field_role": "eduPersonAffiliation[1]"}"#,
        )
        .unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping
                .iter()
                .next()
                .map(|(f, id)| (f.as_str(), id.as_str())),
            Some(("field_mail", "mail"))
        );
    }

    #[test]
    fn malformed_mapping_is_rejected() {
        assert!(serde_json::from_str::<FieldMapping>(r#"["not", "a", "map"]"#).is_err());
    }
}
