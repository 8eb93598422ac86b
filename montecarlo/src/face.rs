use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single symbolic label on a die side.
///
/// Faces are either numeric or textual. A die's face set must be homogeneous,
/// but values of both kinds can coexist in mixed collections (e.g. the keys of
/// a combination table built from several analyzers), so `Face` carries one
/// total order covering every case: numeric faces compare numerically, text
/// faces lexicographically, and mixed kinds fall back to their stable display
/// string. That order is what canonicalizes combinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Face {
    Num(f64),
    Text(String),
}

impl Face {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Face::Num(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Face::Text(_))
    }

    /// NaN has no usable equality or ordering, so it is not a face value.
    pub(crate) fn is_supported(&self) -> bool {
        match self {
            Face::Num(v) => v.is_finite(),
            Face::Text(_) => true,
        }
    }

    pub(crate) fn same_kind(&self, other: &Face) -> bool {
        matches!(
            (self, other),
            (Face::Num(_), Face::Num(_)) | (Face::Text(_), Face::Text(_))
        )
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Face::Num(_) => 0,
            Face::Text(_) => 1,
        }
    }
}

impl From<f64> for Face {
    fn from(v: f64) -> Self {
        // Collapse -0.0 so bit-pattern equality matches numeric equality.
        Face::Num(if v == 0.0 { 0.0 } else { v })
    }
}

impl From<f32> for Face {
    fn from(v: f32) -> Self {
        Face::from(f64::from(v))
    }
}

impl From<i64> for Face {
    fn from(v: i64) -> Self {
        Face::from(v as f64)
    }
}

impl From<i32> for Face {
    fn from(v: i32) -> Self {
        Face::from(f64::from(v))
    }
}

impl From<u64> for Face {
    fn from(v: u64) -> Self {
        Face::from(v as f64)
    }
}

impl From<u32> for Face {
    fn from(v: u32) -> Self {
        Face::from(f64::from(v))
    }
}

impl From<&str> for Face {
    fn from(v: &str) -> Self {
        Face::Text(v.to_string())
    }
}

impl From<String> for Face {
    fn from(v: String) -> Self {
        Face::Text(v)
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Face::Num(a), Face::Num(b)) => a.to_bits() == b.to_bits(),
            (Face::Text(a), Face::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Face {}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Face::Num(v) => {
                state.write_u8(0);
                state.write_u64(v.to_bits());
            }
            Face::Text(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl Ord for Face {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Face::Num(a), Face::Num(b)) => a.total_cmp(b),
            (Face::Text(a), Face::Text(b)) => a.cmp(b),
            _ => self
                .to_string()
                .cmp(&other.to_string())
                .then_with(|| self.kind_rank().cmp(&other.kind_rank())),
        }
    }
}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole-valued numerics read as integers: "3", not "3.0".
            Face::Num(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Face::Num(v) => write!(f, "{}", v),
            Face::Text(s) => f.write_str(s),
        }
    }
}
