//! Strongly-typed string keys used across the pipeline.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::StatementError;

/// Key of a play in the catalog (e.g. `"hamlet"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayId(String);

/// Pricing type tag of a play (e.g. `"tragedy"`).
///
/// Kept as an open string: whether a tag is priceable is decided by the
/// policy registry, not at parse time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayType(String);

macro_rules! impl_string_key {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Unchecked constructor for trusted literals; input data goes
            /// through `FromStr` / deserialization instead.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = StatementError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(StatementError::validation(format!(
                        "{}: must not be empty",
                        $name
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        /// Deserialization path; same checks as `FromStr`.
        impl TryFrom<String> for $t {
            type Error = StatementError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

impl_string_key!(PlayId, "PlayId");
impl_string_key!(PlayType, "PlayType");
