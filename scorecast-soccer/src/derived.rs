//! Presentation-ready metrics derived from outcome percentages: fair prices, confidence
//! levels, radar vectors, narrative insights and value against bookmaker prices.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

use scorecast::market::fair_price;
use scorecast::probs::{round, SliceExt};

use crate::scoregrid::OutcomePercentages;

pub mod insight;
pub mod radar;
pub mod value;

/// Margin-free decimal prices for the three results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FairOdds {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}
impl From<&OutcomePercentages> for FairOdds {
    fn from(percentages: &OutcomePercentages) -> Self {
        Self {
            home: fair_price(percentages.home_win),
            draw: fair_price(percentages.draw),
            away: fair_price(percentages.away_win),
        }
    }
}
impl FairOdds {
    pub fn as_array(&self) -> [f64; 3] {
        [self.home, self.draw, self.away]
    }
}

#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Display, EnumCount, EnumIter, Serialize, Deserialize,
)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

const HIGH_CONFIDENCE_PERCENT: f64 = 55.0;
const MEDIUM_CONFIDENCE_PERCENT: f64 = 40.0;

/// Confidence from the largest of the three result percentages.
pub fn classify_confidence(percentages: &OutcomePercentages) -> Confidence {
    let max = percentages.max();
    if max >= HIGH_CONFIDENCE_PERCENT {
        Confidence::High
    } else if max >= MEDIUM_CONFIDENCE_PERCENT {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

const HIGH_CONFIDENCE_GAP: f64 = 20.0;
const MEDIUM_CONFIDENCE_GAP: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMeter {
    pub level: Confidence,
    /// Percentage points separating the two most likely results.
    pub gap: f64,
}

/// Confidence from the separation between the two most likely results, as shown on the
/// confidence meter.
pub fn confidence_meter(percentages: &OutcomePercentages) -> ConfidenceMeter {
    let (first, second) = percentages.as_array().top_two();
    let gap = round(first - second, 1);
    let level = if gap >= HIGH_CONFIDENCE_GAP {
        Confidence::High
    } else if gap >= MEDIUM_CONFIDENCE_GAP {
        Confidence::Medium
    } else {
        Confidence::Low
    };
    ConfidenceMeter { level, gap }
}
