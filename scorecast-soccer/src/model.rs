//! The prediction pipeline: team statistics and modifiers in, a complete [Prediction] out.

use std::error::Error;
use std::time::Instant;

use anyhow::anyhow;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use scorecast::factorial;
use scorecast::linear::Matrix;
use scorecast::market::fair_price;

use crate::derived::insight::{insights, InsightInputs};
use crate::derived::radar::{radar, RadarEntry};
use crate::derived::value::{detect_value, ValueAssessment};
use crate::derived::{classify_confidence, confidence_meter, Confidence, ConfidenceMeter, FairOdds};
use crate::domain::{Side, TeamStats};
use crate::modifier::{resolve, SimulationModifiers, SimulationParams};
use crate::scoregrid::{self, likely_scores, Outcome, OutcomeBuckets, OutcomePercentages, ProbableScore};
use crate::strength::{ExpectedGoals, Strengths};
use crate::verdict::{classify, Verdict, VerdictInputs};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("missing {0} team statistics")]
    MissingStats(Side),
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(#[from] pub Box<dyn Error>);

impl From<anyhow::Error> for ValidationError {
    fn from(value: anyhow::Error) -> Self {
        ValidationError(value.into())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Highest goal count per side covered by the score grid.
    pub max_goals: u8,
    /// Number of scorelines reported in [Prediction::likely_scores].
    pub likely_scores: usize,
}
impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        const MIN_MAX_GOALS: u8 = 1;
        const MAX_MAX_GOALS: u8 = 20;
        if !(MIN_MAX_GOALS..=MAX_MAX_GOALS).contains(&self.max_goals) {
            return Err(anyhow!(
                "max goals must lie in the range {MIN_MAX_GOALS}..={MAX_MAX_GOALS}"
            )
            .into());
        }

        if self.likely_scores == 0 {
            return Err(anyhow!("number of likely scores cannot be zero").into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_goals: scoregrid::DEFAULT_MAX_GOALS,
            likely_scores: 5,
        }
    }
}

/// A complete, immutable prediction for one fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub home_name: String,
    pub away_name: String,
    #[serde(flatten)]
    pub outcome: OutcomePercentages,
    pub fair_odds: FairOdds,
    pub expected_goals: ExpectedGoals,
    pub strengths: Strengths,
    pub likely_scores: Vec<ProbableScore>,
    pub insights: Vec<String>,
    pub confidence: Confidence,
    pub radar: Vec<RadarEntry>,
    #[serde(skip)]
    pub scoregrid: Matrix,
}
impl Prediction {
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_name,
            Side::Away => &self.away_name,
        }
    }

    pub fn confidence_meter(&self) -> ConfidenceMeter {
        confidence_meter(&self.outcome)
    }

    pub fn verdict(&self) -> Verdict {
        classify(&VerdictInputs {
            home_name: &self.home_name,
            away_name: &self.away_name,
            outcome: &self.outcome,
            expected_goals: &self.expected_goals,
        })
    }

    /// Probability of the outcome in percent. Results come from the normalised percentages;
    /// other outcomes are gathered from the score grid.
    pub fn percent(&self, outcome: &Outcome) -> f64 {
        match outcome {
            Outcome::Win(side) => self.outcome.win(*side),
            Outcome::Draw => self.outcome.draw,
            _ => outcome.gather(&self.scoregrid) * 100.0,
        }
    }

    pub fn fair_price(&self, outcome: &Outcome) -> f64 {
        match outcome {
            Outcome::Win(Side::Home) => self.fair_odds.home,
            Outcome::Draw => self.fair_odds.draw,
            Outcome::Win(Side::Away) => self.fair_odds.away,
            _ => fair_price(self.percent(outcome)),
        }
    }

    /// Compares a bookmaker's price for the outcome against the model's fair price.
    pub fn detect_value(&self, outcome: &Outcome, bookie_odds: f64) -> ValueAssessment {
        detect_value(bookie_odds, self.fair_price(outcome))
    }
}

#[derive(Default)]
pub struct Model {
    pub config: Config,
    factorial: factorial::Lookup,
}
impl Model {
    /// Predicts the fixture from both teams' statistics, the league's average goals per team
    /// per game and the resolved modifiers. Both statistics records are required.
    pub fn predict(
        &self,
        home: Option<&TeamStats>,
        away: Option<&TeamStats>,
        league_average: f64,
        modifiers: &SimulationModifiers,
    ) -> Result<Prediction, PredictError> {
        let start = Instant::now();
        let home = home.ok_or(PredictError::MissingStats(Side::Home))?;
        let away = away.ok_or(PredictError::MissingStats(Side::Away))?;

        let strengths = Strengths::derive(home, away, league_average, &modifiers.home, &modifiers.away);
        let expected_goals = strengths.expected_goals(league_average);

        let mut scoregrid = scoregrid::allocate(self.config.max_goals);
        scoregrid::from_univariate_poisson(
            expected_goals.home,
            expected_goals.away,
            &self.factorial,
            &mut scoregrid,
        );
        let outcome = OutcomeBuckets::accumulate(&scoregrid).to_percentages();
        let fair_odds = FairOdds::from(&outcome);
        let likely_scores = likely_scores(&scoregrid, self.config.likely_scores);
        let insights = insights(&InsightInputs {
            home,
            away,
            outcome: &outcome,
            strengths: &strengths,
            expected_goals: &expected_goals,
            modifiers,
        });
        let confidence = classify_confidence(&outcome);
        let radar = radar(home, away, &strengths);

        let prediction = Prediction {
            home_name: home.display_name(Side::Home),
            away_name: away.display_name(Side::Away),
            outcome,
            fair_odds,
            expected_goals,
            strengths,
            likely_scores,
            insights,
            confidence,
            radar,
            scoregrid,
        };
        let elapsed = start.elapsed();
        debug!(
            "prediction for {} v {} took {elapsed:?}: {:?}, confidence {}",
            prediction.home_name, prediction.away_name, prediction.outcome, prediction.confidence
        );
        Ok(prediction)
    }
}

impl TryFrom<Config> for Model {
    type Error = ValidationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self {
            config,
            factorial: factorial::Lookup::default(),
        })
    }
}

/// Resolves user-facing simulation parameters into model multipliers.
pub fn resolve_modifiers(params: &SimulationParams) -> SimulationModifiers {
    resolve(params)
}
