//! Disc colors and the stacking rule.
//!
//! A disc is an immutable colored token. Whether a disc may be dropped onto a
//! stack depends only on the color of the stack's current top disc.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A colored disc.
///
/// Serializes as a lowercase color name, which is also its `Display` form.
///
/// # Example
///
/// ```rust
/// use stackbot::core::Disc;
///
/// assert_eq!(Disc::Red.to_string(), "red");
/// assert_eq!(serde_json::to_string(&Disc::Blue).unwrap(), "\"blue\"");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disc {
    Red,
    Green,
    Blue,
}

impl Disc {
    /// Every color, in declaration order.
    pub const ALL: [Disc; 3] = [Disc::Red, Disc::Green, Disc::Blue];

    /// Lowercase color name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Check whether `incoming` may be placed directly on top of this disc.
    ///
    /// Red caps a stack, green takes anything, blue only takes red.
    pub fn accepts(&self, incoming: Disc) -> bool {
        match self {
            Self::Red => false,
            Self::Green => true,
            Self::Blue => incoming == Disc::Red,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether `disc` may be dropped onto `stack` (bottom first, top last).
///
/// An empty stack accepts any disc.
///
/// # Example
///
/// ```rust
/// use stackbot::core::{can_drop, Disc};
///
/// assert!(can_drop(&[], Disc::Blue));
/// assert!(can_drop(&[Disc::Green, Disc::Blue], Disc::Red));
/// assert!(!can_drop(&[Disc::Blue], Disc::Green));
/// ```
pub fn can_drop(stack: &[Disc], disc: Disc) -> bool {
    stack.last().is_none_or(|top| top.accepts(disc))
}
