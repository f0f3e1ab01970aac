//! # Resource Trait
//!
//! A resource is a [`Record`] bound to one API endpoint. It adds no storage of
//! its own: identity, URL and related links are all read from the wrapped
//! document.
//!
//! Resource types are declared with [`resource!`](crate::resource), which
//! generates the wrapper struct, its [`Schema`] (exclusions, optionally
//! extending another schema) and the [`Resource`] impl:
//!
//! ```rust
//! use tower_client::framework::{Resource, Schema};
//!
//! tower_client::resource! {
//!     /// A credential.
//!     pub struct Credential {
//!         endpoint: "credentials",
//!         exclude: ["inputs"],
//!     }
//! }
//!
//! let cred = Credential::parse(r#"{"id": 3, "inputs": {"password": "$encrypted$"}}"#).unwrap();
//! assert_eq!(cred.id(), Some(3));
//! assert!(cred.attr("inputs").unwrap().as_value().is_some());
//! assert_eq!(Credential::ENDPOINT, "credentials");
//! ```

use super::error::Result;
use super::exclusion::Schema;
use super::record::{Field, Record};
use serde_json::Value;

/// A record type tied to an API endpoint.
pub trait Resource: Schema + Clone + std::fmt::Debug + Send + Sync + Sized {
    /// Path segment of the list endpoint, e.g. `"job_templates"`.
    const ENDPOINT: &'static str;
    /// Type name used in diagnostics and errors.
    const KIND: &'static str;

    fn from_record(record: Record) -> Self;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    fn into_record(self) -> Record;

    fn parse(json: &str) -> Result<Self> {
        Record::parse_with(Self::KIND, json, Self::exclusions()).map(Self::from_record)
    }

    fn from_value(value: Value) -> Result<Self> {
        Record::from_value_with(Self::KIND, value, Self::exclusions()).map(Self::from_record)
    }

    fn id(&self) -> Option<u64> {
        self.record().attr("id").and_then(Field::as_u64)
    }

    fn name(&self) -> Option<&str> {
        self.record().attr("name").and_then(Field::as_str)
    }

    /// The API's own detail URL for this object, if the document carries one.
    fn url(&self) -> Option<&str> {
        self.record().attr("url").and_then(Field::as_str)
    }

    /// A link from the `related` map.
    fn related(&self, link: &str) -> Option<String> {
        self.record()
            .attr("related")
            .and_then(|related| related.lookup(link))
            .and_then(|value| value.as_str().map(str::to_string))
    }
}

/// Declares a [`Resource`] type.
///
/// ```text
/// resource! {
///     pub struct Name {
///         endpoint: "names",
///         exclude: ["raw_field", "outer#inner"],
///         extends: ParentSchema,      // optional
///     }
/// }
/// ```
///
/// Besides the struct this generates `Deref<Target = Record>`, `PartialEq`,
/// `Debug` (the record's inspect form), `Display` (JSON) and a
/// `NameCollection` alias.
#[macro_export]
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            endpoint: $endpoint:literal,
            exclude: [$($path:literal),* $(,)?]
            $(, extends: $parent:ty)?
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq)]
        $vis struct $name {
            record: $crate::framework::Record,
        }

        impl $crate::framework::Schema for $name {
            const EXCLUDE: &'static [&'static str] = &[$($path),*];
            $(
                fn parent_exclusions() -> ::std::sync::Arc<$crate::framework::ExclusionSet> {
                    <$parent as $crate::framework::Schema>::exclusions()
                }
            )?
        }

        impl $crate::framework::Resource for $name {
            const ENDPOINT: &'static str = $endpoint;
            const KIND: &'static str = stringify!($name);

            fn from_record(record: $crate::framework::Record) -> Self {
                Self { record }
            }

            fn record(&self) -> &$crate::framework::Record {
                &self.record
            }

            fn record_mut(&mut self) -> &mut $crate::framework::Record {
                &mut self.record
            }

            fn into_record(self) -> $crate::framework::Record {
                self.record
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::framework::Record;

            fn deref(&self) -> &Self::Target {
                &self.record
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.record
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.record, f)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.record, f)
            }
        }

        $crate::paste::paste! {
            #[doc = "A page of [`" $name "`] objects."]
            $vis type [<$name Collection>] = $crate::framework::Collection<$name>;
        }
    };
}
