use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::derived::value::ValueAssessment;
use crate::domain::Side;
use crate::model::Prediction;
use crate::scoregrid::{Outcome, ProbableScore};

/// A bookmaker price for one outcome, assessed against the model.
pub struct PricedOutcome {
    pub label: String,
    pub bookie_odds: f64,
    pub fair_odds: f64,
    pub assessment: ValueAssessment,
}

fn header(cells: &[&str]) -> Row {
    Row::new(
        Styles::default().with(Header(true)),
        cells.iter().map(|&cell| cell.into()).collect(),
    )
}

fn label_col() -> Col {
    Col::new(Styles::default().with(MinWidth(12)).with(Left))
}

fn value_col() -> Col {
    Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right))
}

pub fn tabulate_outcomes(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col()])
        .with_row(header(&["Outcome", "Probability", "Fair price"]));
    for (label, pct, price) in [
        (format!("{} win", prediction.home_name), prediction.outcome.home_win, prediction.fair_odds.home),
        ("Draw".to_string(), prediction.outcome.draw, prediction.fair_odds.draw),
        (format!("{} win", prediction.away_name), prediction.outcome.away_win, prediction.fair_odds.away),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), format!("{pct:.1}%").into(), format!("{price:.2}").into()],
        ));
    }
    table
}

pub fn tabulate_strengths(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col(), value_col()])
        .with_row(header(&["Team", "Attack", "Defense", "xG"]));
    for side in [Side::Home, Side::Away] {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                prediction.name(side).into(),
                format!("{:.3}", prediction.strengths.attack(side)).into(),
                format!("{:.3}", prediction.strengths.defense(side)).into(),
                format!("{:.2}", prediction.expected_goals.side(side)).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_likely_scores(likely_scores: &[ProbableScore]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col()])
        .with_row(header(&["Score", "Probability"]));
    for probable in likely_scores {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}-{}", probable.score.home, probable.score.away).into(),
                format!("{:.1}%", probable.probability).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_goal_markets(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col()])
        .with_row(header(&["Market", "Probability", "Fair price"]));
    for (label, outcome) in [
        ("Over 2.5", Outcome::Over(2)),
        ("Under 2.5", Outcome::Under(3)),
        ("BTTS yes", Outcome::BothScore),
        ("BTTS no", Outcome::NotBothScore),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                label.into(),
                format!("{:.1}%", prediction.percent(&outcome)).into(),
                format!("{:.2}", prediction.fair_price(&outcome)).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_radar(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col()])
        .with_row(header(&["Metric", prediction.home_name.as_str(), prediction.away_name.as_str()]));
    for entry in &prediction.radar {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                entry.metric.to_string().into(),
                format!("{:.0}", entry.home).into(),
                format!("{:.0}", entry.away).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_value(priced: &[PricedOutcome]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col(), value_col(), value_col(), value_col()])
        .with_row(header(&["Outcome", "Bookie", "Fair", "Edge", "EV", "Value"]));
    for outcome in priced {
        let assessment = &outcome.assessment;
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome.label.clone().into(),
                format!("{:.2}", outcome.bookie_odds).into(),
                format!("{:.2}", outcome.fair_odds).into(),
                format!("{:+.1}", assessment.edge).into(),
                format!("{:+.3}", assessment.expected_value).into(),
                if assessment.has_value { "yes" } else { "no" }.into(),
            ],
        ));
    }
    table
}
