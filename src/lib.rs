/*
 * Responsibility
 * - SAML セッション属性の取り出し (インデックス付き識別子 "name[N]" 対応)
 * - module 宣言と re-export のみ（ロジックは置かない）
 */
pub mod config;
pub mod services;
pub mod session;

pub use config::{Config, ConfigError, FieldMapping};
pub use services::attr_extract::AttributeExtractor;
pub use services::field_map::FieldMapper;
pub use session::{AttributeMap, InMemorySessionManager, SessionAttributeManager, SessionError};
