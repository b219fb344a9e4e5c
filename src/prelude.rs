//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use cpe::prelude::*;
//!
//! let cpe = CpeBuilder::new().part(Part::OperatingSystem).vendor("linux").build().unwrap();
//! assert!(matcher::compare_parts(Part::Any, cpe.part()));
//! ```

pub use crate::{
    // Core types
    Attribute, Cpe, CpeBuilder, LogicalValue, Part, Status,
    // Errors
    EncodingError, ValidationError,
    // Modules
    convert, matcher, validate,
};
