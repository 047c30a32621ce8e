//! A one-line verdict on the match, chosen by the first matching rule.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::domain::Side;
use crate::scoregrid::OutcomePercentages;
use crate::strength::ExpectedGoals;

const DOMINANT_WIN_PERCENT: f64 = 60.0;
const DOMINATED_XG: f64 = 0.5;
const GOALFEST_XG: f64 = 3.5;
const DEADLOCK_DRAW_PERCENT: f64 = 35.0;
const TIGHT_MAX_PERCENT: f64 = 55.0;
const TIGHT_GAP_PERCENT: f64 = 15.0;
const CLEAR_WIN_PERCENT: f64 = 50.0;

#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, Display, EnumCount, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum VerdictKind {
    Dominant,
    Goalfest,
    Deadlock,
    Tight,
    Clear,
    SlightEdge,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub headline: String,
    pub supporting_stat: String,
}

pub struct VerdictInputs<'a> {
    pub home_name: &'a str,
    pub away_name: &'a str,
    pub outcome: &'a OutcomePercentages,
    pub expected_goals: &'a ExpectedGoals,
}
impl VerdictInputs<'_> {
    fn name(&self, side: Side) -> &str {
        match side {
            Side::Home => self.home_name,
            Side::Away => self.away_name,
        }
    }
}

pub fn classify(inputs: &VerdictInputs) -> Verdict {
    let outcome = inputs.outcome;
    let expected_goals = inputs.expected_goals;

    for side in [Side::Home, Side::Away] {
        if outcome.win(side) > DOMINANT_WIN_PERCENT && expected_goals.side(side.opposite()) < DOMINATED_XG {
            return describe(VerdictKind::Dominant, side, inputs);
        }
    }

    let leader = outcome.favourite();
    let kind = if expected_goals.total() > GOALFEST_XG {
        VerdictKind::Goalfest
    } else if outcome.draw > DEADLOCK_DRAW_PERCENT {
        VerdictKind::Deadlock
    } else if outcome.max() < TIGHT_MAX_PERCENT
        || (outcome.home_win - outcome.away_win).abs() < TIGHT_GAP_PERCENT
    {
        VerdictKind::Tight
    } else if outcome.win(leader) > CLEAR_WIN_PERCENT {
        VerdictKind::Clear
    } else {
        VerdictKind::SlightEdge
    };
    describe(kind, leader, inputs)
}

fn describe(kind: VerdictKind, side: Side, inputs: &VerdictInputs) -> Verdict {
    let outcome = inputs.outcome;
    let expected_goals = inputs.expected_goals;
    let (team, opponent) = (inputs.name(side), inputs.name(side.opposite()));
    let (headline, supporting_stat) = match kind {
        VerdictKind::Dominant => (
            format!("{team} set for a dominant win"),
            format!(
                "{:.1}% win probability; {opponent} expected to score just {:.2}",
                outcome.win(side),
                expected_goals.side(side.opposite())
            ),
        ),
        VerdictKind::Goalfest => (
            "Goal fest expected".to_string(),
            format!("{:.2} combined expected goals", expected_goals.total()),
        ),
        VerdictKind::Deadlock => (
            "Deadlock on the cards".to_string(),
            format!("{:.1}% draw probability", outcome.draw),
        ),
        VerdictKind::Tight => (
            "Too close to call".to_string(),
            format!(
                "{} {:.1}% vs {} {:.1}%",
                inputs.home_name, outcome.home_win, inputs.away_name, outcome.away_win
            ),
        ),
        VerdictKind::Clear => (
            format!("{team} are clear favourites"),
            format!("{:.1}% win probability", outcome.win(side)),
        ),
        VerdictKind::SlightEdge => (
            format!("{team} hold a slight edge"),
            format!(
                "{:.1}% vs {:.1}% win probability",
                outcome.win(side),
                outcome.win(side.opposite())
            ),
        ),
    };
    Verdict {
        kind,
        headline,
        supporting_stat,
    }
}
