//! Identifier newtypes used across the bridge.
//!
//! Identifiers are cheaply cloneable (`Arc<str>`) because every outcome
//! report threads a handful of them through multiple publishers. Absence is
//! always `Option<EventId>`, never an empty string.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Arc<str>);

        impl $name {
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(Arc::from(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Arc::from(value.as_str()))
            }
        }
    };
}

id_type! {
    /// Identifier of a single event on the source surface.
    EventId
}

id_type! {
    /// Identifier of a bridged room (portal).
    RoomId
}

id_type! {
    /// Identifier of a user on the source surface.
    UserId
}
