use thiserror::Error;
use tracing::warn;

/// Returned when a string does not match any code of a closed code set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} code '{code}'")]
pub struct UnknownCodeError {
    /// Human-readable name of the code set (e.g. `"PTKP status"`).
    pub kind: &'static str,
    /// The rejected input, verbatim.
    pub code: String,
}

impl UnknownCodeError {
    pub fn new(
        kind: &'static str,
        code: &str,
    ) -> Self {
        Self {
            kind,
            code: code.to_string(),
        }
    }
}

/// A closed set of statutory codes with a canonical string form.
///
/// Implemented by every status and classification enum through
/// [`code_enum!`]. Strict parsing goes through [`std::str::FromStr`];
/// [`ClosedCode::parse_or_default`] keeps the lenient behaviour where an
/// unknown code silently maps to the documented default.
pub trait ClosedCode: Copy + Sized + 'static {
    /// Name of the code set, used in errors and log events.
    const KIND: &'static str;

    /// Every member of the set, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical code string.
    fn as_str(&self) -> &'static str;

    /// Parses a code, ignoring surrounding whitespace. Returns `None` for
    /// anything outside the set.
    fn parse(code: &str) -> Option<Self>;

    /// Parses a code, falling back to [`Default`] for unknown input.
    ///
    /// The fallback is logged at `warn` so a wrong default never goes
    /// unnoticed.
    fn parse_or_default(code: &str) -> Self
    where
        Self: Default,
    {
        Self::parse(code).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(
                kind = Self::KIND,
                code,
                fallback = fallback.as_str(),
                "unknown code; using default"
            );
            fallback
        })
    }
}

/// Declares a closed code enum together with its [`ClosedCode`],
/// [`std::fmt::Display`] and [`std::str::FromStr`] implementations.
/// Variants (de)serialize as their code string.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $crate::models::ClosedCode for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            fn parse(code: &str) -> Option<Self> {
                match code.trim() {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                f.pad($crate::models::ClosedCode::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::models::UnknownCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::models::ClosedCode>::parse(s)
                    .ok_or_else(|| $crate::models::UnknownCodeError::new($kind, s))
            }
        }
    };
}
