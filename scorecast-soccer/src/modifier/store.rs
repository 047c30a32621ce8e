//! Per-match simulation parameters, keyed by match identifier. Records are created with
//! defaults on first reference and live until reset.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Side;
use crate::modifier::{resolve, Flag, SimulationModifiers, SimulationParams, Slider, Stance};

/// A partial update; only the populated fields are merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamsPatch {
    pub home_key_player_missing: Option<bool>,
    pub away_key_player_missing: Option<bool>,
    pub home_fortress: Option<bool>,
    pub form_weight: Option<f64>,
    pub home_motivation: Option<f64>,
    pub away_motivation: Option<f64>,
    pub weather_impact: Option<f64>,
    pub home_stance: Option<Stance>,
    pub away_stance: Option<Stance>,
}
impl ParamsPatch {
    pub fn apply(&self, params: &mut SimulationParams) {
        for (flag, value) in [
            (Flag::HomeKeyPlayerMissing, self.home_key_player_missing),
            (Flag::AwayKeyPlayerMissing, self.away_key_player_missing),
            (Flag::HomeFortress, self.home_fortress),
        ] {
            if let Some(value) = value {
                *params.flag_mut(flag) = value;
            }
        }
        for (slider, value) in [
            (Slider::FormWeight, self.form_weight),
            (Slider::HomeMotivation, self.home_motivation),
            (Slider::AwayMotivation, self.away_motivation),
            (Slider::WeatherImpact, self.weather_impact),
        ] {
            if let Some(value) = value {
                params.set_slider(slider, value);
            }
        }
        for (side, stance) in [(Side::Home, self.home_stance), (Side::Away, self.away_stance)] {
            if let Some(stance) = stance {
                params.set_stance(side, stance);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ModifierStore {
    records: FxHashMap<String, SimulationParams>,
}
impl ModifierStore {
    /// The current parameters for the match, creating a default record if none exists.
    pub fn get(&mut self, match_id: &str) -> &SimulationParams {
        self.entry(match_id)
    }

    /// The current parameters without creating a record.
    pub fn peek(&self, match_id: &str) -> Option<&SimulationParams> {
        self.records.get(match_id)
    }

    pub fn merge(&mut self, match_id: &str, patch: &ParamsPatch) -> &SimulationParams {
        debug!("merging {patch:?} into {match_id}");
        let params = self.entry(match_id);
        patch.apply(params);
        params
    }

    /// Flips a boolean flag, returning its new value.
    pub fn toggle(&mut self, match_id: &str, flag: Flag) -> bool {
        let value = self.entry(match_id).flag_mut(flag);
        *value = !*value;
        debug!("toggled {flag} for {match_id} to {value}");
        *value
    }

    /// Sets a slider, clamping into its range. Returns the stored value.
    pub fn set_slider(&mut self, match_id: &str, slider: Slider, value: f64) -> f64 {
        let params = self.entry(match_id);
        params.set_slider(slider, value);
        let stored = params.slider(slider);
        debug!("set {slider} for {match_id} to {stored}");
        stored
    }

    pub fn set_stance(&mut self, match_id: &str, side: Side, stance: Stance) {
        debug!("set {side} stance for {match_id} to {stance}");
        self.entry(match_id).set_stance(side, stance);
    }

    /// Discards the match's record; the next read yields defaults. Returns whether a record
    /// existed.
    pub fn reset(&mut self, match_id: &str) -> bool {
        let existed = self.records.remove(match_id).is_some();
        debug!("reset {match_id} (existed: {existed})");
        existed
    }

    /// Resolves the match's current parameters into model multipliers.
    pub fn resolve(&mut self, match_id: &str) -> SimulationModifiers {
        resolve(self.entry(match_id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn entry(&mut self, match_id: &str) -> &mut SimulationParams {
        self.records.entry(match_id.to_string()).or_default()
    }
}
