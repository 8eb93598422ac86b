use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{DiceError, DiceResult};
use crate::face::Face;
use crate::game::{Game, RollTable};

/// Per-roll face counts over a game's face universe.
///
/// `rows[r][f]` is how many dice showed `faces[f]` in roll `r + 1`; every row
/// sums to the game's die count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceCounts {
    pub faces: Vec<Face>,
    pub rows: Vec<Vec<usize>>,
}

impl FaceCounts {
    /// Count of one face in one roll, by 1-based roll number.
    pub fn count(&self, roll_no: usize, face: &Face) -> Option<usize> {
        let col = self.faces.iter().position(|f| f == face)?;
        roll_no
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|row| row[col])
    }
}

/// Descriptive statistics over a played game's roll table.
///
/// Construction snapshots the game's wide results and the first die's face
/// set; later plays on the same game do not affect an existing analyzer. The
/// derived views are recomputed on each call.
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: RollTable,
    face_universe: Vec<Face>,
}

impl Analyzer {
    /// Snapshot a played game's results for analysis.
    pub fn new(game: &Game) -> DiceResult<Self> {
        let table = game.table().cloned().ok_or(DiceError::NotPlayed)?;
        // Dice are validated as similar at game construction, so the first
        // die's faces stand in for the whole game's face universe.
        let face_universe = game
            .dice()
            .first()
            .map(|die| die.faces().cloned().collect())
            .unwrap_or_default();
        Ok(Self {
            table,
            face_universe,
        })
    }

    /// Number of rolls where every die shows the same face.
    pub fn jackpot(&self) -> usize {
        self.table
            .rows()
            .filter(|row| row.windows(2).all(|pair| pair[0] == pair[1]))
            .count()
    }

    /// Roll-by-face count table over the face universe.
    pub fn face_counts_per_roll(&self) -> FaceCounts {
        let rows = self
            .table
            .rows()
            .map(|row| {
                self.face_universe
                    .iter()
                    .map(|face| row.iter().filter(|f| *f == face).count())
                    .collect()
            })
            .collect();
        FaceCounts {
            faces: self.face_universe.clone(),
            rows,
        }
    }

    /// Occurrences of each order-independent face combination.
    ///
    /// Rolls are grouped by their sorted face tuple (the [`Face`] total
    /// order), so two rolls with the same faces in different die order fall
    /// into one entry. Keys appear in order of first occurrence.
    pub fn combo_count(&self) -> IndexMap<Vec<Face>, usize> {
        let mut counts = IndexMap::new();
        for row in self.table.rows() {
            let mut key = row.to_vec();
            key.sort();
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    /// Occurrences of each order-dependent face sequence.
    ///
    /// Like [`Analyzer::combo_count`] but keyed by the as-rolled tuple, so
    /// die order distinguishes entries. Keys appear in order of first
    /// occurrence.
    pub fn permutation_count(&self) -> IndexMap<Vec<Face>, usize> {
        let mut counts = IndexMap::new();
        for row in self.table.rows() {
            *counts.entry(row.to_vec()).or_insert(0) += 1;
        }
        counts
    }
}
