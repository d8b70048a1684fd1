//! Single-field immutable value objects.
//!
//! Each kind is a trait plus a declaration macro that generates a newtype
//! implementing it together with `Record`, `Display` and equality against
//! the raw value. A value is built exactly once; there is no way to
//! re-initialize an existing one.

pub mod boolean;
pub mod float;
pub mod integer;
pub mod string;

pub use boolean::ImmutableBoolean;
pub use float::ImmutableFloat;
pub use integer::ImmutableInteger;
pub use string::ImmutableString;
