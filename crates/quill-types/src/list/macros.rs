//! The `immutable_list!` declaration macro.

/// Declare a concrete list type holding elements of one record type.
///
/// The generated type declares a public constructor with one variadic
/// parameter of the element's type, so its descriptor always resolves. It
/// gets equality against itself, `[Item]` and `Vec<Item>`, a JSON-array
/// `Display`, iteration, `FromIterator`, and serde support through its
/// native array form.
///
/// ```
/// use quill_types::list::ImmutableList;
/// use quill_types::scalar::ImmutableInteger;
///
/// quill_types::immutable_integer! {
///     pub struct Version;
/// }
///
/// quill_types::immutable_list! {
///     /// Every published version, oldest first.
///     pub struct VersionList(Version);
/// }
///
/// let list = VersionList::from_array(&[serde_json::json!(1), serde_json::json!(2)]).unwrap();
/// assert_eq!(list.last(), Some(&Version::from_int(2)));
/// assert_eq!(list.to_string(), "[1,2]");
/// ```
#[macro_export]
macro_rules! immutable_list {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($item:ty);) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name {
            items: $crate::list::ItemSeq<$item>,
        }

        impl $crate::list::ImmutableList for $name {
            type Item = $item;

            fn list_name() -> &'static str {
                stringify!($name)
            }

            fn constructor() -> ::std::option::Option<$crate::list::ConstructorSig> {
                ::std::option::Option::Some($crate::list::ConstructorSig::items_of::<$item>())
            }

            fn from_items(items: $crate::list::ItemSeq<$item>) -> Self {
                $name { items }
            }

            fn items(&self) -> &$crate::list::ItemSeq<$item> {
                &self.items
            }

            fn items_mut(&mut self) -> &mut $crate::list::ItemSeq<$item> {
                &mut self.items
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                <Self as $crate::list::ImmutableList>::eq_items(self, other.items.as_slice())
            }
        }

        impl ::std::cmp::PartialEq<[$item]> for $name {
            fn eq(&self, other: &[$item]) -> bool {
                <Self as $crate::list::ImmutableList>::eq_items(self, other)
            }
        }

        impl ::std::cmp::PartialEq<::std::vec::Vec<$item>> for $name {
            fn eq(&self, other: &::std::vec::Vec<$item>) -> bool {
                <Self as $crate::list::ImmutableList>::eq_items(self, other.as_slice())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let natives = self
                    .items
                    .iter()
                    .map($crate::__private::Record::to_native)
                    .collect();
                write!(f, "{}", $crate::__private::NativeValue::Array(natives))
            }
        }

        impl<'a> ::std::iter::IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = ::std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.iter()
            }
        }

        impl ::std::iter::FromIterator<$item> for $name {
            fn from_iter<I: ::std::iter::IntoIterator<Item = $item>>(iter: I) -> Self {
                $name {
                    items: iter.into_iter().collect(),
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                let natives = <Self as $crate::list::ImmutableList>::to_array(self)
                    .map_err(<S::Error as $crate::__private::serde::ser::Error>::custom)?;
                $crate::__private::serde::Serialize::serialize(&natives, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let native: $crate::__private::NativeValue =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                <Self as $crate::list::ImmutableList>::from_native(&native)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
