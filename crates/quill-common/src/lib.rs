//! Shared types for the Quill value-type library.
//!
//! - [`type_name`]: named types used by descriptors and error messages
//! - [`error`]: decode and record errors shared by the record engine and the
//!   list/scalar types built on it

pub mod error;
pub mod type_name;

pub use error::{ConfigErrorReason, DecodeError, RecordError};
pub use type_name::TypeName;
