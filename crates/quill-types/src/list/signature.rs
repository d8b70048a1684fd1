//! Declared constructor shapes.
//!
//! A concrete list type declares the constructor it is built through. The
//! resolver reads the element type from that declaration instead of asking
//! the author to state it twice.

use quill_record::{Record, TypeName};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// One declared constructor parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    /// Static type of the parameter, `None` when undeclared.
    pub ty: Option<TypeName>,
    /// Whether the parameter collects any number of arguments.
    pub variadic: bool,
}

impl Param {
    pub fn typed(name: impl Into<String>, ty: TypeName) -> Self {
        Param {
            name: name.into(),
            ty: Some(ty),
            variadic: false,
        }
    }

    pub fn variadic(name: impl Into<String>, ty: TypeName) -> Self {
        Param {
            name: name.into(),
            ty: Some(ty),
            variadic: true,
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            ty: None,
            variadic: true,
        }
    }
}

/// The declared constructor of a concrete list type.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstructorSig {
    pub visibility: Visibility,
    pub params: Vec<Param>,
}

impl ConstructorSig {
    pub fn public(params: Vec<Param>) -> Self {
        ConstructorSig {
            visibility: Visibility::Public,
            params,
        }
    }

    pub fn private(params: Vec<Param>) -> Self {
        ConstructorSig {
            visibility: Visibility::Private,
            params,
        }
    }

    /// The canonical list constructor: public, one variadic `items`
    /// parameter of `T`'s declared type.
    pub fn items_of<T: Record>() -> Self {
        ConstructorSig::public(vec![Param::variadic("items", T::type_name())])
    }
}
