//! Five-axis comparison of the two teams, each axis scaled to roughly `0..=100`.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::domain::{Side, TeamStats};
use crate::strength::Strengths;

const MAX_VALUE: f64 = 100.0;
const MAX_FORM_POINTS: f64 = 15.0;
const UNKNOWN_CONSISTENCY: f64 = 50.0;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Display, EnumCount, EnumIter, Serialize, Deserialize)]
pub enum RadarMetric {
    Attack,
    Defense,
    Form,
    #[strum(serialize = "Goals/Game")]
    GoalsPerGame,
    Consistency,
}
impl RadarMetric {
    /// The metric's value for one team. `attack` and `defense` are the team's (modified)
    /// strength ratings.
    pub fn evaluate(&self, stats: &TeamStats, attack: f64, defense: f64) -> f64 {
        match self {
            RadarMetric::Attack => f64::min(attack * 50.0, MAX_VALUE),
            RadarMetric::Defense => f64::min((2.0 - defense) * 40.0, MAX_VALUE),
            RadarMetric::Form => match stats.form_points() {
                None => 0.0,
                Some(points) => f64::min(points as f64 / MAX_FORM_POINTS * 100.0, MAX_VALUE),
            },
            RadarMetric::GoalsPerGame => f64::min(stats.goals_scored_per_match() * 30.0, MAX_VALUE),
            RadarMetric::Consistency => match stats.won {
                None => UNKNOWN_CONSISTENCY,
                Some(won) => won as f64 / stats.matches() as f64 * 100.0,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarEntry {
    pub metric: RadarMetric,
    pub home: f64,
    pub away: f64,
}

/// One entry per metric, in declaration order.
pub fn radar(home: &TeamStats, away: &TeamStats, strengths: &Strengths) -> Vec<RadarEntry> {
    RadarMetric::iter()
        .map(|metric| {
            let [home, away] = [(Side::Home, home), (Side::Away, away)].map(|(side, stats)| {
                metric.evaluate(stats, strengths.attack(side), strengths.defense(side))
            });
            RadarEntry { metric, home, away }
        })
        .collect()
}
