use indexmap::IndexMap;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::debug;

use crate::error::{DiceError, DiceResult};
use crate::face::Face;

/// A die with a fixed set of unique faces and mutable per-face weights.
///
/// A freshly built die is fair: every face starts at weight 1.0. Weights can
/// be changed one face at a time with [`Die::set_weight`]; the face set itself
/// is immutable after construction. Rolling draws with replacement, with each
/// face's probability equal to its weight over the weight sum at call time.
#[derive(Debug, Clone)]
pub struct Die {
    weights: IndexMap<Face, f64>,
    last_roll: Option<Vec<Face>>,
}

impl Die {
    /// Build a fair die from a collection of unique faces, all numeric or all
    /// text.
    pub fn new<I, F>(faces: I) -> DiceResult<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let mut weights: IndexMap<Face, f64> = IndexMap::new();
        for face in faces {
            let face = face.into();
            if !face.is_supported() {
                return Err(DiceError::TypeKind(format!(
                    "{face} is not a usable face value"
                )));
            }
            if let Some((first, _)) = weights.first() {
                if !first.same_kind(&face) {
                    return Err(DiceError::TypeKind(format!(
                        "face {face} does not match the kind of face {first}"
                    )));
                }
            }
            if weights.contains_key(&face) {
                return Err(DiceError::DuplicateFace(face));
            }
            weights.insert(face, 1.0);
        }
        if weights.is_empty() {
            return Err(DiceError::TypeKind("a die needs at least one face".into()));
        }
        Ok(Self {
            weights,
            last_roll: None,
        })
    }

    /// Replace one face's weight. The face must already exist and the weight
    /// must be a finite non-negative number; no other face is affected.
    pub fn set_weight<F: Into<Face>>(&mut self, face: F, weight: f64) -> DiceResult<()> {
        let face = face.into();
        let Some(slot) = self.weights.get_mut(&face) else {
            return Err(DiceError::UnknownFace(face));
        };
        if !weight.is_finite() || weight < 0.0 {
            return Err(DiceError::InvalidWeight(format!(
                "{weight} for face {face} (must be a finite non-negative number)"
            )));
        }
        *slot = weight;
        Ok(())
    }

    /// Draw `n` independent weighted samples with replacement.
    ///
    /// The drawn sequence is returned in order and kept as the most recent
    /// roll; a failed call leaves the previous roll in place. Weights and
    /// faces are never mutated by rolling.
    pub fn roll(&mut self, n: usize, rng: &mut impl Rng) -> DiceResult<Vec<Face>> {
        if n == 0 {
            return Err(DiceError::InvalidCount);
        }
        let dist = WeightedIndex::new(self.weights.values().copied())
            .map_err(|e| DiceError::InvalidWeight(e.to_string()))?;
        let faces: Vec<&Face> = self.weights.keys().collect();
        let drawn: Vec<Face> = (0..n).map(|_| faces[dist.sample(rng)].clone()).collect();
        debug!(n, faces = faces.len(), "rolled die");
        self.last_roll = Some(drawn.clone());
        Ok(drawn)
    }

    /// Single-sample convenience for [`Die::roll`].
    pub fn roll_once(&mut self, rng: &mut impl Rng) -> DiceResult<Face> {
        let mut drawn = self.roll(1, rng)?;
        Ok(drawn.remove(0))
    }

    /// The most recent roll sequence, if the die has been rolled.
    pub fn last_roll(&self) -> Option<&[Face]> {
        self.last_roll.as_deref()
    }

    /// Faces in construction order.
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.weights.keys()
    }

    pub fn num_faces(&self) -> usize {
        self.weights.len()
    }

    /// Current weight of a face, if the die has it.
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.weights.get(face).copied()
    }

    /// Owned copy of the face→weight table, in construction order. Mutating
    /// the copy never affects the die.
    pub fn snapshot(&self) -> IndexMap<Face, f64> {
        self.weights.clone()
    }

    pub(crate) fn same_faces(&self, other: &Die) -> bool {
        self.weights.keys().eq(other.weights.keys())
    }
}
