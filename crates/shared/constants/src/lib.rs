//! # Park Passes Constants
//!
//! The fixed vocabulary shared with the Park Passes front-end: labels, model names,
//! status strings and the user-facing error messages.
//! Keep it lean: no I/O, no business rules, just values and lookups.
//!
//! ## Lookup
//! ```rust
//! use parkpasses_constants::{ConstantsRegistry, ErrorKind};
//!
//! let registry = ConstantsRegistry::global();
//! assert_eq!(registry.gst(), 10);
//! assert_eq!(registry.get("PASS_STATUS_EXPIRED").unwrap().as_str(), Some("Expired"));
//! assert!(registry.error(ErrorKind::System).ends_with("park.passes@dbca.wa.gov.au"));
//! ```
//!
//! ## Config overrides (non-wasm)
//! ```rust,ignore
//! use parkpasses_constants::{ConstantsRegistry, config::load_config};
//!
//! let cfg = load_config(Some("constants")).unwrap();
//! let registry = ConstantsRegistry::builder().config(&cfg).build().unwrap();
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod constants;
mod error;
mod key;
mod registry;
mod value;

pub use crate::error::{ConstantsError, ConstantsErrorExt, Result};
pub use crate::key::{ConstantKey, ErrorKind};
pub use crate::registry::{ConstantsRegistry, RegistryBuilder, RegistryConfig, system_error_message};
pub use crate::value::ConstantValue;
