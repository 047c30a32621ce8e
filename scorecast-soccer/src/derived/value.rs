//! Comparison of a bookmaker's decimal price with the model's fair price.

use serde::{Deserialize, Serialize};

use scorecast::market::implied_probability;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueAssessment {
    /// The bookmaker pays more than the model's fair price.
    pub has_value: bool,
    /// Model-implied minus bookmaker-implied probability, in percentage points.
    pub edge: f64,
    /// Expected profit per unit stake, assuming the model's probability is correct.
    pub expected_value: f64,
    pub bookie_implied: f64,
    pub model_implied: f64,
}

/// Assesses a bookmaker price against the model's fair price. A non-positive (or
/// non-finite) price on either side carries no value.
pub fn detect_value(bookie_odds: f64, model_odds: f64) -> ValueAssessment {
    if !is_valid_price(bookie_odds) || !is_valid_price(model_odds) {
        return ValueAssessment::default();
    }
    let bookie_implied = implied_probability(&bookie_odds);
    let model_implied = implied_probability(&model_odds);
    ValueAssessment {
        has_value: bookie_odds > model_odds,
        edge: (model_implied - bookie_implied) * 100.0,
        expected_value: bookie_odds / model_odds - 1.0,
        bookie_implied,
        model_implied,
    }
}

fn is_valid_price(price: f64) -> bool {
    price > 0.0 && price.is_finite()
}
