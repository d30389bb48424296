use std::{fmt, str::FromStr};

use thiserror::Error;

/// Finite-difference stencil used to estimate a first derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// `(f(x+h) − f(x)) / h`, first-order accurate.
    Forward,

    /// `(f(x) − f(x−h)) / h`, first-order accurate.
    Backward,

    /// `(f(x+h) − f(x−h)) / (2h)`, second-order accurate.
    Central,
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown finite-difference method `{0}`")]
pub struct UnknownMethod(pub String);

impl Method {
    /// All methods, in display order.
    pub const ALL: [Method; 3] = [Method::Backward, Method::Forward, Method::Central];

    /// Returns the stencil formula as LaTeX.
    #[must_use]
    pub fn latex(self) -> &'static str {
        match self {
            Self::Backward => r"\frac{f(x) - f(x-h)}{h}",
            Self::Forward => r"\frac{f(x+h) - f(x)}{h}",
            Self::Central => r"\frac{f(x+h) - f(x-h)}{2h}",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Backward => "Backward difference",
            Self::Forward => "Forward difference",
            Self::Central => "Central difference",
        }
    }

    /// Returns the order of the truncation error in `h`.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Self::Forward | Self::Backward => 1,
            Self::Central => 2,
        }
    }

    /// Returns the lowercase identifier accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Backward => "backward",
            Self::Forward => "forward",
            Self::Central => "central",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Method::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}
