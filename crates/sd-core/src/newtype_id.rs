//! Macro for defining sequential, zero-padded identifier newtypes.
//!
//! Every generated table keys its rows with a token of the form
//! `PREFIX_000042`. The ids share one format (prefix, underscore, index
//! zero-padded to `width` digits) and the same set of trait impls, so this
//! macro generates all of that from a single invocation.

/// Define a strongly-typed sequential identifier.
///
/// Generates:
/// - The struct with `Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize`
/// - `from_index()`, `as_str()`
/// - `Display`, `AsRef<str>`, `Deref<Target=str>`, `Borrow<str>`
/// - `PartialEq<str>`, `PartialEq<&str>`
macro_rules! define_sequential_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident = ($prefix:literal, $width:literal);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        $vis struct $Name(String);

        impl $Name {
            /// Build the identifier for the row at position `index`.
            pub fn from_index(index: usize) -> Self {
                Self(format!("{}_{:0width$}", $prefix, index, width = $width))
            }

            /// Return the underlying token as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str { &self.0 }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str { &self.0 }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool { self.0 == *other }
        }
    };
}

pub(crate) use define_sequential_id;
