//! What-if modifiers. A [SimulationParams] record holds the user-facing toggles and sliders for
//! a match; [resolve] turns it into the multiplicative [SimulationModifiers] consumed by the
//! strength model.

use std::fmt;
use std::fmt::Formatter;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use tracing::debug;

use crate::domain::Side;

pub mod store;

const KEY_PLAYER_MISSING_ATTACK: f64 = 0.7;
const HOME_FORTRESS_DEFENSE: f64 = 0.85;
const HOME_WEATHER_DAMPING: f64 = 0.9;
const MIN_WEATHER_FACTOR: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideModifiers {
    pub attack_multiplier: f64,
    pub defense_multiplier: f64,
    /// Fraction in `0..=1`. Carried for reporting only; the scoring model does not consume it.
    pub form_weight: f64,
}
impl SideModifiers {
    pub fn neutral() -> Self {
        Self {
            attack_multiplier: 1.0,
            defense_multiplier: 1.0,
            form_weight: 0.4,
        }
    }
}

impl Default for SideModifiers {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationModifiers {
    pub home: SideModifiers,
    pub away: SideModifiers,
}
impl SimulationModifiers {
    pub fn side(&self, side: Side) -> &SideModifiers {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideModifiers {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// The same modifiers with the two sides exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Display, EnumString, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Stance {
    Defensive,
    #[default]
    Balanced,
    Attacking,
}
impl Stance {
    /// Parses a stance label, falling back to [Stance::Balanced] for anything unrecognised.
    pub fn parse(label: &str) -> Self {
        Self::from_str(label.trim()).unwrap_or_else(|_| {
            debug!("unrecognised stance '{label}', assuming balanced");
            Self::Balanced
        })
    }

    /// `(attack, defense)` multipliers.
    pub fn multipliers(&self) -> (f64, f64) {
        match self {
            Stance::Defensive => (0.85, 0.85),
            Stance::Balanced => (1.0, 1.0),
            Stance::Attacking => (1.15, 1.15),
        }
    }
}

impl Serialize for Stance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Stance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Display, EnumIter, EnumCount)]
pub enum Flag {
    HomeKeyPlayerMissing,
    AwayKeyPlayerMissing,
    HomeFortress,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Display, EnumIter, EnumCount)]
pub enum Slider {
    FormWeight,
    HomeMotivation,
    AwayMotivation,
    WeatherImpact,
}
impl Slider {
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            Slider::FormWeight => 0.0..=100.0,
            Slider::HomeMotivation | Slider::AwayMotivation => 0.0..=200.0,
            Slider::WeatherImpact => -20.0..=20.0,
        }
    }

    pub fn neutral(&self) -> f64 {
        match self {
            Slider::FormWeight => 40.0,
            Slider::HomeMotivation | Slider::AwayMotivation => 100.0,
            Slider::WeatherImpact => 0.0,
        }
    }

    /// Clamps `value` into the slider's range. `NaN` is replaced by the neutral setting.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.neutral();
        }
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

/// User-facing simulation parameters for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParams {
    pub home_key_player_missing: bool,
    pub away_key_player_missing: bool,
    pub home_fortress: bool,
    /// `0..=100`.
    pub form_weight: f64,
    /// `0..=200`; 100 is neutral.
    pub home_motivation: f64,
    /// `0..=200`; 100 is neutral.
    pub away_motivation: f64,
    /// `-20..=20`.
    pub weather_impact: f64,
    pub home_stance: Stance,
    pub away_stance: Stance,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            home_key_player_missing: false,
            away_key_player_missing: false,
            home_fortress: false,
            form_weight: Slider::FormWeight.neutral(),
            home_motivation: Slider::HomeMotivation.neutral(),
            away_motivation: Slider::AwayMotivation.neutral(),
            weather_impact: Slider::WeatherImpact.neutral(),
            home_stance: Stance::Balanced,
            away_stance: Stance::Balanced,
        }
    }
}

impl SimulationParams {
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::HomeKeyPlayerMissing => self.home_key_player_missing,
            Flag::AwayKeyPlayerMissing => self.away_key_player_missing,
            Flag::HomeFortress => self.home_fortress,
        }
    }

    pub fn flag_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::HomeKeyPlayerMissing => &mut self.home_key_player_missing,
            Flag::AwayKeyPlayerMissing => &mut self.away_key_player_missing,
            Flag::HomeFortress => &mut self.home_fortress,
        }
    }

    pub fn slider(&self, slider: Slider) -> f64 {
        match slider {
            Slider::FormWeight => self.form_weight,
            Slider::HomeMotivation => self.home_motivation,
            Slider::AwayMotivation => self.away_motivation,
            Slider::WeatherImpact => self.weather_impact,
        }
    }

    pub fn set_slider(&mut self, slider: Slider, value: f64) {
        let value = slider.clamp(value);
        match slider {
            Slider::FormWeight => self.form_weight = value,
            Slider::HomeMotivation => self.home_motivation = value,
            Slider::AwayMotivation => self.away_motivation = value,
            Slider::WeatherImpact => self.weather_impact = value,
        }
    }

    pub fn stance(&self, side: Side) -> Stance {
        match side {
            Side::Home => self.home_stance,
            Side::Away => self.away_stance,
        }
    }

    pub fn set_stance(&mut self, side: Side, stance: Stance) {
        match side {
            Side::Home => self.home_stance = stance,
            Side::Away => self.away_stance = stance,
        }
    }

    /// Describes every parameter that departs from its default, one line per parameter.
    pub fn active_summary(&self) -> Vec<String> {
        let defaults = Self::default();
        let mut lines = vec![];
        if self.home_key_player_missing {
            lines.push(format!("Home key player missing (attack x{KEY_PLAYER_MISSING_ATTACK:.2})"));
        }
        if self.away_key_player_missing {
            lines.push(format!("Away key player missing (attack x{KEY_PLAYER_MISSING_ATTACK:.2})"));
        }
        if self.home_fortress {
            lines.push(format!("Home fortress (defence x{HOME_FORTRESS_DEFENSE:.2})"));
        }
        for (side, motivation, default) in [
            (Side::Home, self.home_motivation, defaults.home_motivation),
            (Side::Away, self.away_motivation, defaults.away_motivation),
        ] {
            if motivation != default {
                lines.push(format!("{side} motivation {motivation:.0}%"));
            }
        }
        if self.weather_impact != defaults.weather_impact {
            lines.push(format!("Weather impact {:+.0}%", self.weather_impact));
        }
        for side in [Side::Home, Side::Away] {
            let stance = self.stance(side);
            if stance != Stance::Balanced {
                lines.push(format!("{side} stance {stance}"));
            }
        }
        if self.form_weight != defaults.form_weight {
            lines.push(format!("Form weight {:.0}%", self.form_weight));
        }
        lines
    }
}

impl fmt::Display for SimulationParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let lines = self.active_summary();
        if lines.is_empty() {
            write!(f, "no active modifiers")
        } else {
            write!(f, "{}", lines.join("; "))
        }
    }
}

/// Maps simulation parameters to per-side multipliers. Sliders outside their ranges are
/// clamped first.
pub fn resolve(params: &SimulationParams) -> SimulationModifiers {
    let form_weight = Slider::FormWeight.clamp(params.form_weight) / 100.0;
    let mut modifiers = SimulationModifiers {
        home: SideModifiers {
            form_weight,
            ..SideModifiers::neutral()
        },
        away: SideModifiers {
            form_weight,
            ..SideModifiers::neutral()
        },
    };

    if params.home_key_player_missing {
        modifiers.home.attack_multiplier *= KEY_PLAYER_MISSING_ATTACK;
    }
    if params.away_key_player_missing {
        modifiers.away.attack_multiplier *= KEY_PLAYER_MISSING_ATTACK;
    }
    if params.home_fortress {
        modifiers.home.defense_multiplier *= HOME_FORTRESS_DEFENSE;
    }

    modifiers.home.attack_multiplier *= Slider::HomeMotivation.clamp(params.home_motivation) / 100.0;
    modifiers.away.attack_multiplier *= Slider::AwayMotivation.clamp(params.away_motivation) / 100.0;

    let weather_impact = Slider::WeatherImpact.clamp(params.weather_impact);
    if weather_impact != 0.0 {
        let weather_factor = 1.0 + weather_impact / 100.0;
        modifiers.home.attack_multiplier *=
            f64::max(weather_factor * HOME_WEATHER_DAMPING, MIN_WEATHER_FACTOR);
        modifiers.away.attack_multiplier *= f64::max(weather_factor, MIN_WEATHER_FACTOR);
    }

    for side in [Side::Home, Side::Away] {
        let (attack, defense) = params.stance(side).multipliers();
        let side_modifiers = modifiers.side_mut(side);
        side_modifiers.attack_multiplier *= attack;
        side_modifiers.defense_multiplier *= defense;
    }

    modifiers
}
