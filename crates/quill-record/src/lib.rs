//! Record engine for Quill.
//!
//! A record is a typed value that can be converted to and from a native
//! (JSON-shaped) representation. The engine owns the generic parts of that
//! conversion so that value types only describe themselves:
//!
//! - [`native`]: the native value model (`serde_json::Value`)
//! - [`builtin`]: `String`, `i64`, `f64` and `bool` as records, plus the
//!   strict decoders value objects share with them
//! - [`record`]: the `Record` trait every typed value implements
//! - [`prop_types`]: property-to-type maps with type assertion and native
//!   (de)serialization of fields
//! - [`registry`]: process-wide, build-once cache of property type maps keyed
//!   by concrete Rust type

pub mod builtin;
pub mod native;
pub mod prop_types;
pub mod record;
pub mod registry;

pub use native::{native_kind, NativeMap, NativeValue};
pub use prop_types::PropTypeMap;
pub use quill_common::{ConfigErrorReason, DecodeError, RecordError, TypeName};
pub use record::Record;
pub use registry::{global_registry, DescriptorRegistry};
