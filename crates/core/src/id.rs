// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! String newtypes for multiplexer and session identifiers

/// Define a newtype wrapper around `String` for a multiplexer-facing name.
///
/// Generates `new()`, `as_str()`, `is_empty()`, `Display`, `AsRef<str>`,
/// `From<String>`, `From<&str>`, `PartialEq<str>` and `PartialEq<&str>`.
///
/// ```ignore
/// define_name! {
///     /// Doc comment for the name type.
///     pub struct WindowId;
/// }
/// ```
#[macro_export]
macro_rules! define_name {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_name! {
    /// A tmux pane id such as `%3`.
    pub struct PaneId;
}

define_name! {
    /// Key under which a session name is stored in the tmux environment.
    pub struct SessionKey;
}

define_name! {
    /// Logical session name shared by every invocation in the same context.
    ///
    /// Doubles as the file name of registry entries and, for vim, as the
    /// editor's server name.
    pub struct SessionName;
}

impl SessionName {
    /// Upper-cased form used by editors that normalise server names.
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }

    /// Case-insensitive comparison against a name reported by an editor.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.to_uppercase() == other.to_uppercase()
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
