//! Attack and defense ratings relative to the league average. A rating of 1.0 is an average
//! team; for defense, lower is better since it measures goals conceded.

use serde::{Deserialize, Serialize};

use crate::domain::{Side, TeamStats};
use crate::modifier::SideModifiers;

/// Goals per team per game assumed when the supplied league average is unusable.
pub const DEFAULT_LEAGUE_AVERAGE: f64 = 1.5;

/// The supplied league average if it is positive and finite, otherwise the default.
pub fn effective_league_average(league_average: f64) -> f64 {
    if league_average > 0.0 && league_average.is_finite() {
        league_average
    } else {
        DEFAULT_LEAGUE_AVERAGE
    }
}

pub fn attack(stats: &TeamStats, league_average: f64, multiplier: f64) -> f64 {
    stats.goals_scored_per_match() / effective_league_average(league_average) * multiplier
}

pub fn defense(stats: &TeamStats, league_average: f64, multiplier: f64) -> f64 {
    stats.goals_conceded_per_match() / effective_league_average(league_average) * multiplier
}

/// Poisson scoring rates for each side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedGoals {
    pub home: f64,
    pub away: f64,
}
impl ExpectedGoals {
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn total(&self) -> f64 {
        self.home + self.away
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Strengths {
    pub home_attack: f64,
    pub away_attack: f64,
    pub home_defense: f64,
    pub away_defense: f64,
}
impl Strengths {
    pub fn derive(
        home: &TeamStats,
        away: &TeamStats,
        league_average: f64,
        home_modifiers: &SideModifiers,
        away_modifiers: &SideModifiers,
    ) -> Self {
        Self {
            home_attack: attack(home, league_average, home_modifiers.attack_multiplier),
            away_attack: attack(away, league_average, away_modifiers.attack_multiplier),
            home_defense: defense(home, league_average, home_modifiers.defense_multiplier),
            away_defense: defense(away, league_average, away_modifiers.defense_multiplier),
        }
    }

    /// Cross-multiplied scoring rates: each side's attack against the opponent's defense,
    /// scaled back up by the league average.
    pub fn expected_goals(&self, league_average: f64) -> ExpectedGoals {
        let league_average = effective_league_average(league_average);
        ExpectedGoals {
            home: self.home_attack * self.away_defense * league_average,
            away: self.away_attack * self.home_defense * league_average,
        }
    }

    pub fn attack(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home_attack,
            Side::Away => self.away_attack,
        }
    }

    pub fn defense(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home_defense,
            Side::Away => self.away_defense,
        }
    }
}
