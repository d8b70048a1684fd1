//! Immutable value types for Quill.
//!
//! Two families of types live here, both built on the record engine in
//! `quill-record`:
//!
//! - [`scalar`]: single-field value objects wrapping a boolean, float,
//!   integer or string, declared with `immutable_boolean!`,
//!   `immutable_float!`, `immutable_integer!` and `immutable_string!`
//! - [`list`]: immutable homogeneous lists declared with `immutable_list!`.
//!   The element type is read from the list's declared constructor, cached
//!   once per list type, and enforced on every insertion and decode
//!
//! Every operation that looks like a mutation returns a new value and leaves
//! the receiver untouched.
//!
//! ```
//! use quill_types::list::ImmutableList;
//! use quill_types::scalar::ImmutableString;
//!
//! quill_types::immutable_string! {
//!     pub struct Username;
//! }
//!
//! quill_types::immutable_list! {
//!     pub struct UsernameList(Username);
//! }
//!
//! let list = UsernameList::new([Username::from_string("John")]);
//! let longer = list.push([Username::from_string("Jane")]).unwrap();
//!
//! assert_eq!(list.len(), 1);
//! assert_eq!(longer.to_array().unwrap(), vec!["John", "Jane"]);
//! ```

pub mod list;
pub mod scalar;

pub use list::{ConstructorSig, ImmutableList, ItemSeq, Param, Visibility};
pub use quill_record::{NativeMap, NativeValue, PropTypeMap, Record, RecordError, TypeName};
pub use scalar::{ImmutableBoolean, ImmutableFloat, ImmutableInteger, ImmutableString};

/// Paths used by the declaration macros. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use quill_record::{native_kind, DecodeError, NativeValue, Record, TypeName};
    pub use serde;
}
