//! Narrative observations on a prediction. Each rule is evaluated independently; the output
//! keeps rule order.

use crate::domain::{Side, TeamStats};
use crate::modifier::SimulationModifiers;
use crate::scoregrid::OutcomePercentages;
use crate::strength::{ExpectedGoals, Strengths};

/// Relative difference (in percent) above which a strength gap is worth mentioning.
const STRENGTH_GAP_PERCENT: f64 = 20.0;
const DOMINANT_XG_RATIO: f64 = 1.5;
const FORM_POINTS_GAP: u32 = 3;

pub struct InsightInputs<'a> {
    pub home: &'a TeamStats,
    pub away: &'a TeamStats,
    pub outcome: &'a OutcomePercentages,
    pub strengths: &'a Strengths,
    pub expected_goals: &'a ExpectedGoals,
    pub modifiers: &'a SimulationModifiers,
}
impl InsightInputs<'_> {
    fn name(&self, side: Side) -> String {
        match side {
            Side::Home => self.home.display_name(side),
            Side::Away => self.away.display_name(side),
        }
    }
}

pub fn insights(inputs: &InsightInputs) -> Vec<String> {
    let mut insights = vec![];
    insights.push(headline(inputs));
    insights.extend(attack_gap(inputs));
    insights.extend(defense_gap(inputs));
    insights.push(expected_goals_line(inputs));
    insights.extend(form_gap(inputs));
    insights.extend(modifier_notes(inputs));
    insights
}

fn headline(inputs: &InsightInputs) -> String {
    if inputs.outcome.is_degenerate() {
        return format!(
            "Neither {} nor {} is favoured; no goals are expected from either side.",
            inputs.name(Side::Home),
            inputs.name(Side::Away)
        );
    }
    let side = inputs.outcome.favourite();
    format!(
        "{} are favoured with a {:.1}% win probability (attack rating {:.2}).",
        inputs.name(side),
        inputs.outcome.win(side),
        inputs.strengths.attack(side)
    )
}

/// The relative gap in percent between two non-negative ratings, or `None` if the smaller of
/// the two is not positive.
fn relative_gap(a: f64, b: f64) -> Option<f64> {
    let min = f64::min(a, b);
    if min > 0.0 {
        Some((a - b).abs() / min * 100.0)
    } else {
        None
    }
}

fn attack_gap(inputs: &InsightInputs) -> Option<String> {
    let strengths = inputs.strengths;
    let gap = relative_gap(strengths.home_attack, strengths.away_attack)?;
    if gap <= STRENGTH_GAP_PERCENT {
        return None;
    }
    let sharper = if strengths.home_attack > strengths.away_attack {
        Side::Home
    } else {
        Side::Away
    };
    Some(format!(
        "{} carry the sharper attack ({gap:.0}% higher attack rating).",
        inputs.name(sharper)
    ))
}

fn defense_gap(inputs: &InsightInputs) -> Option<String> {
    let strengths = inputs.strengths;
    let gap = relative_gap(strengths.home_defense, strengths.away_defense)?;
    if gap <= STRENGTH_GAP_PERCENT {
        return None;
    }
    let tighter = if strengths.home_defense < strengths.away_defense {
        Side::Home
    } else {
        Side::Away
    };
    Some(format!(
        "{} have the tighter defence ({gap:.0}% fewer goals conceded relative to average).",
        inputs.name(tighter)
    ))
}

fn expected_goals_line(inputs: &InsightInputs) -> String {
    let expected_goals = inputs.expected_goals;
    for side in [Side::Home, Side::Away] {
        let (own, other) = (expected_goals.side(side), expected_goals.side(side.opposite()));
        if own > 0.0 && own >= DOMINANT_XG_RATIO * other {
            return format!(
                "{} expected to dominate in attack ({own:.2} vs {other:.2} expected goals).",
                inputs.name(side)
            );
        }
    }
    format!(
        "Evenly matched expected goals line ({:.2} vs {:.2}).",
        expected_goals.home, expected_goals.away
    )
}

fn form_gap(inputs: &InsightInputs) -> Option<String> {
    let home_points = inputs.home.form_points()?;
    let away_points = inputs.away.form_points()?;
    if home_points.abs_diff(away_points) <= FORM_POINTS_GAP {
        return None;
    }
    let (better, points, other_points) = if home_points > away_points {
        (Side::Home, home_points, away_points)
    } else {
        (Side::Away, away_points, home_points)
    };
    Some(format!(
        "{} arrive in better form ({points} vs {other_points} points from recent matches).",
        inputs.name(better)
    ))
}

fn modifier_notes(inputs: &InsightInputs) -> Vec<String> {
    let mut notes = vec![];
    for side in [Side::Home, Side::Away] {
        let attack_multiplier = inputs.modifiers.side(side).attack_multiplier;
        if attack_multiplier < 1.0 {
            notes.push(format!(
                "Modifier: {} attack reduced to {:.0}% of baseline.",
                inputs.name(side),
                attack_multiplier * 100.0
            ));
        }
    }
    let home_defense_multiplier = inputs.modifiers.home.defense_multiplier;
    if home_defense_multiplier < 1.0 {
        notes.push(format!(
            "Modifier: {} defence tightened to {:.0}% of baseline.",
            inputs.name(Side::Home),
            home_defense_multiplier * 100.0
        ));
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, form: Option<&str>) -> TeamStats {
        TeamStats {
            name: name.into(),
            form: form.map(String::from),
            ..TeamStats::default()
        }
    }

    struct Fixture {
        home: TeamStats,
        away: TeamStats,
        outcome: OutcomePercentages,
        strengths: Strengths,
        expected_goals: ExpectedGoals,
        modifiers: SimulationModifiers,
    }
    impl Fixture {
        fn insights(&self) -> Vec<String> {
            insights(&InsightInputs {
                home: &self.home,
                away: &self.away,
                outcome: &self.outcome,
                strengths: &self.strengths,
                expected_goals: &self.expected_goals,
                modifiers: &self.modifiers,
            })
        }
    }

    fn even_fixture() -> Fixture {
        Fixture {
            home: team("Leeds", None),
            away: team("Hull", None),
            outcome: OutcomePercentages {
                home_win: 36.0,
                draw: 28.0,
                away_win: 36.0,
            },
            strengths: Strengths {
                home_attack: 1.0,
                away_attack: 1.0,
                home_defense: 1.0,
                away_defense: 1.0,
            },
            expected_goals: ExpectedGoals { home: 1.5, away: 1.5 },
            modifiers: SimulationModifiers::default(),
        }
    }

    #[test]
    fn evenly_matched() {
        assert_eq!(
            vec![
                "Leeds are favoured with a 36.0% win probability (attack rating 1.00).",
                "Evenly matched expected goals line (1.50 vs 1.50).",
            ],
            even_fixture().insights()
        );
    }

    #[test]
    fn away_favourite_with_sharper_attack() {
        let fixture = Fixture {
            outcome: OutcomePercentages {
                home_win: 25.4,
                draw: 24.0,
                away_win: 50.6,
            },
            strengths: Strengths {
                home_attack: 0.8,
                away_attack: 1.2,
                home_defense: 1.1,
                away_defense: 1.0,
            },
            expected_goals: ExpectedGoals { home: 1.2, away: 1.98 },
            ..even_fixture()
        };
        assert_eq!(
            vec![
                "Hull are favoured with a 50.6% win probability (attack rating 1.20).",
                "Hull carry the sharper attack (50% higher attack rating).",
                "Hull expected to dominate in attack (1.98 vs 1.20 expected goals).",
            ],
            fixture.insights()
        );
    }

    #[test]
    fn tighter_defence() {
        let fixture = Fixture {
            strengths: Strengths {
                home_defense: 0.6,
                away_defense: 1.2,
                ..even_fixture().strengths
            },
            ..even_fixture()
        };
        assert_eq!(
            "Leeds have the tighter defence (100% fewer goals conceded relative to average).",
            fixture.insights()[1]
        );
    }

    #[test]
    fn small_gaps_ignored() {
        let fixture = Fixture {
            strengths: Strengths {
                home_attack: 1.2,
                away_attack: 1.0,
                home_defense: 1.0,
                away_defense: 1.2,
            },
            ..even_fixture()
        };
        assert_eq!(2, fixture.insights().len());
    }

    #[test]
    fn zero_ratings_skip_gap() {
        let fixture = Fixture {
            strengths: Strengths {
                home_attack: 0.0,
                away_attack: 1.0,
                home_defense: 1.0,
                away_defense: 0.0,
            },
            ..even_fixture()
        };
        let insights = fixture.insights();
        assert!(!insights.iter().any(|insight| insight.contains("sharper")));
        assert!(!insights.iter().any(|insight| insight.contains("tighter")));
    }

    #[test]
    fn form_gap() {
        let fixture = Fixture {
            home: team("Leeds", Some("LLDLW")),
            away: team("Hull", Some("WWDWL")),
            ..even_fixture()
        };
        assert!(fixture
            .insights()
            .contains(&"Hull arrive in better form (10 vs 4 points from recent matches).".to_string()));

        let fixture = Fixture {
            home: team("Leeds", Some("WWDLL")),
            away: team("Hull", Some("WWDWL")),
            ..even_fixture()
        };
        assert!(!fixture.insights().iter().any(|insight| insight.contains("form")));

        let fixture = Fixture {
            home: team("Leeds", Some("WWWWW")),
            away: team("Hull", None),
            ..even_fixture()
        };
        assert!(!fixture.insights().iter().any(|insight| insight.contains("form")));
    }

    #[test]
    fn modifier_notes() {
        let mut modifiers = SimulationModifiers::default();
        modifiers.home.attack_multiplier = 0.7;
        modifiers.away.attack_multiplier = 0.85;
        modifiers.home.defense_multiplier = 0.85;
        let fixture = Fixture {
            modifiers,
            ..even_fixture()
        };
        let insights = fixture.insights();
        assert_eq!(
            vec![
                "Modifier: Leeds attack reduced to 70% of baseline.",
                "Modifier: Hull attack reduced to 85% of baseline.",
                "Modifier: Leeds defence tightened to 85% of baseline.",
            ],
            insights[insights.len() - 3..]
        );
    }

    #[test]
    fn degenerate_outcome_has_neutral_headline() {
        let fixture = Fixture {
            outcome: OutcomePercentages::default(),
            strengths: Strengths::default(),
            expected_goals: ExpectedGoals::default(),
            ..even_fixture()
        };
        assert_eq!(
            vec![
                "Neither Leeds nor Hull is favoured; no goals are expected from either side.",
                "Evenly matched expected goals line (0.00 vs 0.00).",
            ],
            fixture.insights()
        );
    }

    #[test]
    fn unnamed_teams_use_side_labels() {
        let fixture = Fixture {
            home: TeamStats::default(),
            ..even_fixture()
        };
        assert!(fixture.insights()[0].starts_with("Home are favoured"));
    }
}
