//! Participation bounds for role groups and relationship sides.

use crate::{CardinalityError, CardinalityResult};
use regex_lite::Regex;
use std::fmt;
use std::str::FromStr;

/// How many participants a group or relationship side may/must have at once.
///
/// `upper` of `None` means unbounded. Immutable after construction; the
/// constructors reject inverted bounds, so every live value is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    lower: u32,
    upper: Option<u32>,
}

impl Cardinality {
    /// Create a cardinality from explicit bounds.
    pub fn new(lower: u32, upper: Option<u32>) -> CardinalityResult<Self> {
        if let Some(upper) = upper {
            if lower > upper {
                return Err(CardinalityError::InvalidBounds { lower, upper });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Create a cardinality with no upper bound (`lower..*`).
    pub fn unbounded(lower: u32) -> Self {
        Self { lower, upper: None }
    }

    /// Create an exact cardinality (`n..n`).
    pub fn exactly(n: u32) -> Self {
        Self {
            lower: n,
            upper: Some(n),
        }
    }

    /// The unconstrained cardinality `0..*`.
    pub fn any() -> Self {
        Self::unbounded(0)
    }

    /// Lower bound.
    pub fn lower(&self) -> u32 {
        self.lower
    }

    /// Upper bound, `None` when unbounded.
    pub fn upper(&self) -> Option<u32> {
        self.upper
    }

    /// Whether the upper bound is unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }

    /// The formal-notation tuple rendering: `(lower,upper)` or `(lower,inf)`.
    ///
    /// Distinct from `Display`, which keeps the parse/format round-trip.
    pub fn formal(&self) -> String {
        match self.upper {
            Some(upper) => format!("({},{})", self.lower, upper),
            None => format!("({},inf)", self.lower),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "{}..{}", self.lower, upper),
            None => write!(f, "{}..*", self.lower),
        }
    }
}

impl FromStr for Cardinality {
    type Err = CardinalityError;

    /// Parse `<digits>..(<digits>|*)`. Anchored: no surrounding text allowed.
    fn from_str(s: &str) -> CardinalityResult<Self> {
        let pattern =
            Regex::new(r"^([0-9]+)\.\.(\*|[0-9]+)$").expect("cardinality pattern is valid");
        let caps = pattern
            .captures(s)
            .ok_or_else(|| CardinalityError::Malformed(s.to_string()))?;

        let lower: u32 = caps[1]
            .parse()
            .map_err(|_| CardinalityError::Malformed(s.to_string()))?;
        let upper = match &caps[2] {
            "*" => None,
            digits => Some(
                digits
                    .parse()
                    .map_err(|_| CardinalityError::Malformed(s.to_string()))?,
            ),
        };
        Self::new(lower, upper)
    }
}
