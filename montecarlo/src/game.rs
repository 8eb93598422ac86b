use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::die::Die;
use crate::error::{DiceError, DiceResult};
use crate::face::Face;

/// Shape selector for [`Game::results`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Wide,
    Narrow,
}

impl FromStr for Form {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        match s {
            "wide" => Ok(Form::Wide),
            "narrow" => Ok(Form::Narrow),
            other => Err(DiceError::InvalidForm(other.to_string())),
        }
    }
}

/// Roll-major table of sampled faces: one row per roll, one column per die.
///
/// Roll numbers are 1-based, die positions 0-based, matching how a play of
/// `m` rolls over `d` dice reads: `m` rows of `d` faces each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollTable {
    rows: Vec<Vec<Face>>,
}

impl RollTable {
    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Faces of one roll, by 1-based roll number.
    pub fn roll(&self, roll_no: usize) -> Option<&[Face]> {
        roll_no
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    /// Rows in roll order.
    pub fn rows(&self) -> impl Iterator<Item = &[Face]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Narrow view: one record per (roll, die) pair, roll-major then
    /// die-minor, matching the wide table's reading order.
    pub fn records(&self) -> Vec<RollRecord> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter().enumerate().map(move |(d, face)| RollRecord {
                    roll: r + 1,
                    die: d,
                    face: face.clone(),
                })
            })
            .collect()
    }
}

impl fmt::Display for RollTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            let faces = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{:>4}  {}", i + 1, faces)?;
        }
        Ok(())
    }
}

/// One (roll, die, face) cell of the narrow results form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollRecord {
    /// 1-based roll number.
    pub roll: usize,
    /// 0-based die position.
    pub die: usize,
    pub face: Face,
}

/// A copy of the stored results in the requested shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResultsView {
    Wide(RollTable),
    Narrow(Vec<RollRecord>),
}

/// One or more similar dice rolled together, plus the outcome of the most
/// recent play.
///
/// Each play fully replaces the previous results; there is no history across
/// plays. Dice may carry different weights but must share one face set.
#[derive(Debug, Clone)]
pub struct Game {
    dice: Vec<Die>,
    results: Option<RollTable>,
}

impl Game {
    /// Bundle dice into a game. The list must be non-empty and every die must
    /// have the same face sequence as the first.
    pub fn new(dice: Vec<Die>) -> DiceResult<Self> {
        if dice.is_empty() {
            return Err(DiceError::EmptyGame);
        }
        for i in 1..dice.len() {
            if !dice[i].same_faces(&dice[0]) {
                return Err(DiceError::MismatchedDice(i));
            }
        }
        Ok(Self {
            dice,
            results: None,
        })
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn is_played(&self) -> bool {
        self.results.is_some()
    }

    /// Roll every die `rolls` times and replace the stored results.
    ///
    /// Sampling completes for all dice before the table is swapped in, so a
    /// failed play leaves the previous results intact.
    pub fn play(&mut self, rolls: usize, rng: &mut impl Rng) -> DiceResult<()> {
        if rolls == 0 {
            return Err(DiceError::InvalidCount);
        }
        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &mut self.dice {
            columns.push(die.roll(rolls, rng)?);
        }
        let rows = (0..rolls)
            .map(|r| columns.iter().map(|col| col[r].clone()).collect())
            .collect();
        self.results = Some(RollTable { rows });
        debug!(rolls, dice = self.dice.len(), "played game");
        Ok(())
    }

    /// Copy of the most recent play's results in the requested form.
    pub fn results(&self, form: Form) -> DiceResult<ResultsView> {
        let table = self.results.as_ref().ok_or(DiceError::NotPlayed)?;
        Ok(match form {
            Form::Wide => ResultsView::Wide(table.clone()),
            Form::Narrow => ResultsView::Narrow(table.records()),
        })
    }

    pub(crate) fn table(&self) -> Option<&RollTable> {
        self.results.as_ref()
    }
}
