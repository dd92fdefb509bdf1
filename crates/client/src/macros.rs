//! Declarative helpers shared by the model and schema modules.
//!
//! Responsibilities:
//! - Generate closed categorical enums with a stable wire key and a display label.
//!
//! Invariants:
//! - `as_str()` returns the serde wire key; `label()` returns the UI text.
//! - `FromStr` accepts either spelling, case-insensitively, after trimming.
//! - `ALL` lists variants in declaration order (used for cycling and help text).

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($key:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable wire key (matches the serde representation).
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Human-readable label for UI surfaces.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl $crate::filter::Categorical for $name {
            const ALL: &'static [Self] = $name::ALL;

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::GatewayError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $crate::filter::parse_categorical(s, $kind)
            }
        }
    };
}

pub(crate) use labeled_enum;
