//! The joint distribution of final scores, held as a square matrix indexed by
//! `(home_goals, away_goals)`, and the outcomes gathered from it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use scorecast::factorial::Factorial;
use scorecast::linear::Matrix;
use scorecast::poisson;
use scorecast::probs::{round, SliceExt};

use crate::domain::{Score, Side};

/// Highest goal count per side covered by the grid.
pub const DEFAULT_MAX_GOALS: u8 = 10;

/// Decimal places kept on reported percentages.
const PERCENT_DECIMALS: u8 = 1;

/// A zeroed grid covering `0..=max_goals` for each side.
pub fn allocate(max_goals: u8) -> Matrix {
    let dim = max_goals as usize + 1;
    Matrix::allocate(dim, dim)
}

/// Populates the grid from two independent Poisson scoring rates. A side with a non-positive
/// rate is certain to score nil, so its mass sits in the first row (or column). When neither
/// side has a positive rate the grid is left empty.
pub fn from_univariate_poisson(
    home_rate: f64,
    away_rate: f64,
    factorial: &impl Factorial,
    scoregrid: &mut Matrix,
) {
    debug_assert_eq!(scoregrid.rows(), scoregrid.cols(), "scoregrid must be square");
    if home_rate <= 0.0 && away_rate <= 0.0 {
        scoregrid.fill(0.0);
        trace!("neither side has a positive rate ({home_rate}, {away_rate}); scoregrid is empty");
        return;
    }
    let max_goals = (scoregrid.rows() - 1) as u8;
    let home_probs = poisson::distribution(home_rate, max_goals, factorial);
    let away_probs = poisson::distribution(away_rate, max_goals, factorial);
    for (home_goals, &home_prob) in home_probs.iter().enumerate() {
        for (away_goals, &away_prob) in away_probs.iter().enumerate() {
            scoregrid[(home_goals, away_goals)] = home_prob * away_prob;
        }
    }
    trace!(
        "scoregrid for rates ({home_rate:.6}, {away_rate:.6}):\n{}",
        scoregrid.verbose()
    );
}

/// Unnormalised home-win, draw and away-win mass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutcomeBuckets {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}
impl OutcomeBuckets {
    /// Sums the grid into the three result buckets. Each home-win cell `(h, a)` is visited in
    /// the same step as its mirror `(a, h)`, so equal rates yield bit-identical win buckets.
    pub fn accumulate(scoregrid: &Matrix) -> Self {
        let mut buckets = Self::default();
        for row in 0..scoregrid.rows() {
            buckets.draw += scoregrid[(row, row)];
            for col in 0..row {
                buckets.home_win += scoregrid[(row, col)];
                buckets.away_win += scoregrid[(col, row)];
            }
        }
        buckets
    }

    /// The win buckets are summed first so that the total is unchanged when sides are swapped.
    pub fn total(&self) -> f64 {
        (self.home_win + self.away_win) + self.draw
    }

    /// Normalises the buckets against their total, expressed as percentages to one decimal.
    /// A grid with no mass yields `0 / 0 / 0`.
    pub fn to_percentages(&self) -> OutcomePercentages {
        let mut buckets = [self.home_win, self.draw, self.away_win];
        let total = self.total();
        trace!("outcome buckets {self:?} totalling {total}");
        if total > 0.0 {
            buckets.scale(100.0 / total);
        } else {
            buckets.scale(0.0);
        }
        let [home_win, draw, away_win] = buckets.map(|bucket| round(bucket, PERCENT_DECIMALS));
        OutcomePercentages {
            home_win,
            draw,
            away_win,
        }
    }
}

/// Result probabilities in percent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomePercentages {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}
impl OutcomePercentages {
    pub fn win(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home_win,
            Side::Away => self.away_win,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.home_win, self.draw, self.away_win]
    }

    pub fn max(&self) -> f64 {
        self.as_array().into_iter().fold(0.0, f64::max)
    }

    /// The side with the greater win probability, home on ties.
    pub fn favourite(&self) -> Side {
        if self.away_win > self.home_win {
            Side::Away
        } else {
            Side::Home
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.as_array().iter().all(|&pct| pct == 0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbableScore {
    pub score: Score,
    /// Percent, to one decimal.
    pub probability: f64,
}

/// The `limit` most probable scorelines, most probable first. Cells with no mass are
/// excluded; equally probable cells keep their row-major grid order.
pub fn likely_scores(scoregrid: &Matrix, limit: usize) -> Vec<ProbableScore> {
    let mut cells = scoregrid
        .cells()
        .filter(|&(_, _, prob)| prob > 0.0)
        .collect::<Vec<_>>();
    cells.sort_by(|(_, _, a), (_, _, b)| b.total_cmp(a));
    cells
        .into_iter()
        .take(limit)
        .map(|(home_goals, away_goals, prob)| ProbableScore {
            score: Score::new(home_goals as u8, away_goals as u8),
            probability: round(prob * 100.0, PERCENT_DECIMALS),
        })
        .collect()
}

/// A market outcome that can be gathered from a scoregrid.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
    /// More than the given number of total goals; `Over(2)` is over 2.5.
    Over(u8),
    /// Fewer than the given number of total goals; `Under(3)` is under 2.5.
    Under(u8),
    BothScore,
    NotBothScore,
    CorrectScore(Score),
}
impl Outcome {
    pub fn gather(&self, scoregrid: &Matrix) -> f64 {
        match self {
            Outcome::Win(side) => Self::gather_win(*side, scoregrid),
            Outcome::Draw => Self::gather_draw(scoregrid),
            Outcome::Over(goals) => {
                Self::gather_where(scoregrid, |home, away| home + away > *goals as usize)
            }
            Outcome::Under(goals) => {
                Self::gather_where(scoregrid, |home, away| home + away < *goals as usize)
            }
            Outcome::BothScore => Self::gather_where(scoregrid, |home, away| home > 0 && away > 0),
            Outcome::NotBothScore => {
                Self::gather_where(scoregrid, |home, away| home == 0 || away == 0)
            }
            Outcome::CorrectScore(score) => Self::gather_correct_score(score, scoregrid),
        }
    }

    fn gather_win(side: Side, scoregrid: &Matrix) -> f64 {
        match side {
            Side::Home => Self::gather_where(scoregrid, |home, away| home > away),
            Side::Away => Self::gather_where(scoregrid, |home, away| away > home),
        }
    }

    fn gather_draw(scoregrid: &Matrix) -> f64 {
        let mut prob = 0.0;
        for index in 0..scoregrid.rows().min(scoregrid.cols()) {
            prob += scoregrid[(index, index)];
        }
        prob
    }

    fn gather_correct_score(score: &Score, scoregrid: &Matrix) -> f64 {
        if (score.home as usize) < scoregrid.rows() && (score.away as usize) < scoregrid.cols() {
            scoregrid[(score.home as usize, score.away as usize)]
        } else {
            0.0
        }
    }

    fn gather_where(scoregrid: &Matrix, include: impl Fn(usize, usize) -> bool) -> f64 {
        scoregrid
            .cells()
            .filter(|&(home, away, _)| include(home, away))
            .map(|(_, _, prob)| prob)
            .sum()
    }
}

#[cfg(test)]
mod tests;
