//! Validator, converter and matcher for Common Platform Enumeration names.
//!
//! This crate models CPE names in the well-formed form defined by the CPE
//! 2.3 Naming specification, binds them to the CPE 2.3 formatted string and
//! the legacy CPE 2.2 URI, and compares them with the CPE wildcard rules.
//!
//! # Overview
//!
//! A CPE name has a part and ten text attributes:
//!
//! ```text
//! cpe:2.3:<part>:<vendor>:<product>:<version>:<update>:<edition>:<language>:<sw_edition>:<target_sw>:<target_hw>:<other>
//! ```
//!
//! Attribute values are stored well formed: punctuation is quoted with a
//! backslash (`8\.0`), `*` stands for `ANY` and `-` for `NA`.
//!
//! # Quick Start
//!
//! ```rust
//! use cpe::{Cpe, Part};
//!
//! let cpe = Cpe::new(
//!     Part::Application, "apache", "http_server", "2\\.4\\.57", "*",
//!     "*", "*", "*", "*", "*", "*",
//! ).unwrap();
//!
//! assert_eq!(cpe.version(), "2.4.57");
//! assert_eq!(cpe.to_string(), "cpe:2.3:a:apache:http_server:2.4.57:*:*:*:*:*:*:*");
//! assert_eq!(cpe.to_uri().unwrap(), "cpe:/a:apache:http_server:2.4.57");
//! ```
//!
//! # Matching
//!
//! Matching is asymmetric: the receiver is the pattern.
//!
//! ```rust
//! use cpe::{CpeBuilder, Part};
//!
//! let pattern = CpeBuilder::new().part(Part::Application).vendor("apache").build().unwrap();
//! let installed = CpeBuilder::new()
//!     .part(Part::Application)
//!     .vendor("apache")
//!     .product("http_server")
//!     .build()
//!     .unwrap();
//!
//! assert!(pattern.matches(&installed));
//! assert!(installed.matched_by(&pattern));
//! assert!(!installed.matches(&pattern));
//! ```
//!
//! # Grammar Specification
//!
//! The attribute grammar enforced by [`validate::component`] is written out
//! in `grammar.abnf` at the crate root.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod attribute;
mod builder;
mod constants;
pub mod convert;
mod cpe;
mod error;
#[cfg(kani)]
mod kani_impls;
mod logical_value;
pub mod matcher;
mod part;
pub mod prelude;
pub mod validate;

pub use attribute::Attribute;
pub use builder::CpeBuilder;
pub use constants::{
    ATTRIBUTE_COUNT, ATTRIBUTE_SEPARATOR, CPE22_URI_PREFIX, CPE23_FS_PREFIX, ESCAPE,
    PACKED_EDITION_SEPARATOR, WILDCARD_MULTI, WILDCARD_SINGLE,
};
pub use cpe::Cpe;
pub use error::{EncodingError, ValidationError};
pub use logical_value::LogicalValue;
pub use part::Part;
pub use validate::Status;
