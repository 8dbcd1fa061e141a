use crate::error::EngineError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HoleSpec {
    pub number: u8,
    pub par: u8,
    pub stroke_index: u8,
    pub yardage: Option<u16>,
}

/// One tee's worth of hole specs, ordered by hole number. Immutable once a
/// round is configured.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CourseSetup {
    pub course_name: String,
    pub tee_name: String,
    pub holes: Vec<HoleSpec>,
}

impl CourseSetup {
    #[must_use]
    pub fn total_holes(&self) -> u8 {
        self.holes.len() as u8
    }

    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&HoleSpec> {
        self.holes.iter().find(|h| h.number == number)
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| i32::from(h.par)).sum()
    }

    /// Par summed over a contiguous hole window, both ends inclusive.
    #[must_use]
    pub fn par_for_window(&self, first_hole: u8, last_hole: u8) -> i32 {
        self.holes
            .iter()
            .filter(|h| h.number >= first_hole && h.number <= last_hole)
            .map(|h| i32::from(h.par))
            .sum()
    }

    /// Round-setup boundary check. Hole numbers must run 1..=N in order,
    /// pars must be 3-5, and stroke indexes must be a permutation of 1..=N.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` describing the first violation.
    pub fn validate(&self) -> Result<(), EngineError> {
        let n = self.holes.len();
        if n == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "tee {} has no holes",
                self.tee_name
            )));
        }
        if n > 18 {
            return Err(EngineError::InvalidConfig(format!(
                "tee {} has {n} holes, max is 18",
                self.tee_name
            )));
        }

        for (idx, hole) in self.holes.iter().enumerate() {
            let expected = (idx + 1) as u8;
            if hole.number != expected {
                return Err(EngineError::InvalidConfig(format!(
                    "hole at position {} is numbered {}, expected {expected}",
                    idx + 1,
                    hole.number
                )));
            }
            if !(3..=5).contains(&hole.par) {
                return Err(EngineError::InvalidConfig(format!(
                    "hole {} has par {}, expected 3-5",
                    hole.number, hole.par
                )));
            }
        }

        let mut seen = vec![false; n];
        for hole in &self.holes {
            let si = hole.stroke_index as usize;
            if si < 1 || si > n {
                return Err(EngineError::InvalidConfig(format!(
                    "hole {} has stroke index {}, expected 1-{n}",
                    hole.number, hole.stroke_index
                )));
            }
            if seen[si - 1] {
                return Err(EngineError::InvalidConfig(format!(
                    "stroke index {} appears on more than one hole",
                    hole.stroke_index
                )));
            }
            seen[si - 1] = true;
        }

        Ok(())
    }
}
