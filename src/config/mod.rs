//! Audit manifest loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - Built-in manifest and file loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use nbcheck::config::{builtin_config, validate};
//!
//! let config = builtin_config().unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.kernel.name, "widgets-tutorial");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    builtin_config, load_config, load_config_file, parse_config, ConfigSource, DEFAULT_MANIFEST,
};
pub use schema::{AuditConfig, KernelConfig, ToolConfig, VersionRule};
pub use validator::{validate, validate_config, ValidationError};
