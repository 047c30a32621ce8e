use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Display, EnumCount, EnumIter, Serialize, Deserialize,
)]
pub enum Side {
    Home,
    Away,
}
impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn nil_all() -> Self {
        Self { home: 0, away: 0 }
    }

    pub fn total(&self) -> u16 {
        self.home as u16 + self.away as u16
    }
}

/// Points awarded per result when scoring a form string.
const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

/// Season-to-date statistics for one team, as supplied by the data layer. Every field is
/// optional on the wire; absent counts default to zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub name: String,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub matches_played: u32,
    /// Recent results, most recent first, e.g. `"WWDLW"`.
    pub form: Option<String>,
    pub won: Option<u32>,
}
impl TeamStats {
    /// Matches played, floored at one so that per-match rates are always defined.
    pub fn matches(&self) -> u32 {
        self.matches_played.max(1)
    }

    pub fn goals_scored_per_match(&self) -> f64 {
        self.goals_scored as f64 / self.matches() as f64
    }

    pub fn goals_conceded_per_match(&self) -> f64 {
        self.goals_conceded as f64 / self.matches() as f64
    }

    /// Sum of points over the form string (`W` = 3, `D` = 1, `L` = 0); `None` if the team has
    /// no form string. Unrecognised characters score nothing.
    pub fn form_points(&self) -> Option<u32> {
        let form = self.form.as_deref().filter(|form| !form.is_empty())?;
        Some(
            form.chars()
                .map(|result| match result.to_ascii_uppercase() {
                    'W' => WIN_POINTS,
                    'D' => DRAW_POINTS,
                    _ => 0,
                })
                .sum(),
        )
    }

    /// The team name, or the side's label if the name is blank.
    pub fn display_name(&self, side: Side) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            side.to_string()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Away, Side::Home.opposite());
        assert_eq!(Side::Home, Side::Away.opposite());
    }

    #[test]
    fn score_total() {
        assert_eq!(0, Score::nil_all().total());
        assert_eq!(5, Score::new(3, 2).total());
    }

    #[test]
    fn matches_floored_at_one() {
        let stats = TeamStats {
            goals_scored: 3,
            ..TeamStats::default()
        };
        assert_eq!(1, stats.matches());
        assert_eq!(3.0, stats.goals_scored_per_match());
        assert_eq!(0.0, stats.goals_conceded_per_match());
    }

    #[test]
    fn form_points() {
        let with_form = |form: &str| TeamStats {
            form: Some(form.into()),
            ..TeamStats::default()
        };
        assert_eq!(Some(15), with_form("WWWWW").form_points());
        assert_eq!(Some(7), with_form("WDLWL").form_points());
        assert_eq!(Some(7), with_form("wd?w").form_points());
        assert_eq!(None, with_form("").form_points());
        assert_eq!(None, TeamStats::default().form_points());
    }

    #[test]
    fn display_name_falls_back_to_side() {
        assert_eq!("Home", TeamStats::default().display_name(Side::Home));
        let stats = TeamStats {
            name: " Arsenal ".into(),
            ..TeamStats::default()
        };
        assert_eq!("Arsenal", stats.display_name(Side::Away));
    }

    #[test]
    fn deserialise_with_missing_fields() {
        let stats: TeamStats =
            serde_json::from_str(r#"{"name":"Leeds","goalsScored":12,"form":"WDL"}"#).unwrap();
        assert_eq!("Leeds", stats.name);
        assert_eq!(12, stats.goals_scored);
        assert_eq!(0, stats.goals_conceded);
        assert_eq!(0, stats.matches_played);
        assert_eq!(Some("WDL".to_string()), stats.form);
        assert_eq!(None, stats.won);
    }
}
