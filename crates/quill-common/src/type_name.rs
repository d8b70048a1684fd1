//! Named types.
//!
//! A `TypeName` is what a property type map stores for each field and what
//! records report as their runtime type. Two types are the same type exactly
//! when their names are equal.

use std::fmt;

use serde::Serialize;

/// A named type, such as `Username` or the builtin native `string`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeName {
    name: String,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        TypeName { name: name.into() }
    }

    /// The builtin native string type.
    pub fn string() -> Self {
        TypeName::new("string")
    }

    /// The builtin native integer type.
    pub fn int() -> Self {
        TypeName::new("int")
    }

    /// The builtin native float type.
    pub fn float() -> Self {
        TypeName::new("float")
    }

    /// The builtin native boolean type.
    pub fn bool() -> Self {
        TypeName::new("bool")
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        TypeName::new(name)
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_name() {
        assert_eq!(TypeName::new("Username").to_string(), "Username");
        assert_eq!(TypeName::int().to_string(), "int");
    }

    #[test]
    fn equality_by_name() {
        assert_eq!(TypeName::new("Username"), TypeName::from("Username"));
        assert_ne!(TypeName::string(), TypeName::new("Username"));
        assert_eq!(TypeName::bool(), "bool");
    }
}
