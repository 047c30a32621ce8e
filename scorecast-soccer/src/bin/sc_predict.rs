use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::Parser;
use serde::Deserialize;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use scorecast::market::Market;
use scorecast_soccer::domain::{Side, TeamStats};
use scorecast_soccer::model::{resolve_modifiers, Config, Model};
use scorecast_soccer::modifier::SimulationParams;
use scorecast_soccer::print;
use scorecast_soccer::print::PricedOutcome;
use scorecast_soccer::scoregrid::Outcome;
use scorecast_soccer::strength::DEFAULT_LEAGUE_AVERAGE;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the fixture from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// bookmaker's decimal price for a home win
    #[clap(long = "home-odds")]
    home_odds: Option<f64>,

    /// bookmaker's decimal price for a draw
    #[clap(long = "draw-odds")]
    draw_odds: Option<f64>,

    /// bookmaker's decimal price for an away win
    #[clap(long = "away-odds")]
    away_odds: Option<f64>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        for (name, odds) in [
            ("home", self.home_odds),
            ("draw", self.draw_odds),
            ("away", self.away_odds),
        ] {
            if let Some(odds) = odds {
                if odds <= 1.0 || !odds.is_finite() {
                    bail!("{name} odds must be a decimal price greater than 1");
                }
            }
        }
        Ok(())
    }

    fn book(&self) -> Option<Vec<f64>> {
        Some(vec![self.home_odds?, self.draw_odds?, self.away_odds?])
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Fixture {
    home: Option<TeamStats>,
    away: Option<TeamStats>,
    #[serde(default = "default_league_average")]
    league_average: f64,
    #[serde(default)]
    params: SimulationParams,
}

fn default_league_average() -> f64 {
    DEFAULT_LEAGUE_AVERAGE
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let fixture = read_fixture(&args.file)?;
    debug!("fixture: {fixture:?}");
    info!("modifiers: {}", fixture.params);

    let model = Model::try_from(Config::default())?;
    let modifiers = resolve_modifiers(&fixture.params);
    let prediction = model.predict(
        fixture.home.as_ref(),
        fixture.away.as_ref(),
        fixture.league_average,
        &modifiers,
    )?;

    info!(
        "{} v {}:\n{}",
        prediction.home_name,
        prediction.away_name,
        Console::default().render(&print::tabulate_outcomes(&prediction))
    );
    info!(
        "strengths:\n{}",
        Console::default().render(&print::tabulate_strengths(&prediction))
    );
    info!(
        "likely scores:\n{}",
        Console::default().render(&print::tabulate_likely_scores(&prediction.likely_scores))
    );
    info!(
        "goal markets:\n{}",
        Console::default().render(&print::tabulate_goal_markets(&prediction))
    );
    info!(
        "radar:\n{}",
        Console::default().render(&print::tabulate_radar(&prediction))
    );

    let meter = prediction.confidence_meter();
    info!(
        "confidence: {} (meter: {}, gap {:.1} points)",
        prediction.confidence, meter.level, meter.gap
    );
    let verdict = prediction.verdict();
    info!("verdict: {} ({})", verdict.headline, verdict.supporting_stat);
    for insight in &prediction.insights {
        info!("insight: {insight}");
    }

    let priced = [
        (Outcome::Win(Side::Home), args.home_odds),
        (Outcome::Draw, args.draw_odds),
        (Outcome::Win(Side::Away), args.away_odds),
    ]
    .into_iter()
    .filter_map(|(outcome, odds)| {
        let bookie_odds = odds?;
        let label = match &outcome {
            Outcome::Win(side) => format!("{} win", prediction.name(*side)),
            _ => "Draw".to_string(),
        };
        Some(PricedOutcome {
            label,
            bookie_odds,
            fair_odds: prediction.fair_price(&outcome),
            assessment: prediction.detect_value(&outcome, bookie_odds),
        })
    })
    .collect::<Vec<_>>();
    if !priced.is_empty() {
        info!(
            "value:\n{}",
            Console::default().render(&print::tabulate_value(&priced))
        );
    }

    if let Some(book) = args.book() {
        match Market::fit_multiplicative(book) {
            Ok(market) => info!(
                "bookmaker margin {:.2}%, margin-free probabilities {:?}",
                market.margin_percent(),
                market.probs
            ),
            Err(err) => warn!("could not frame the book: {err}"),
        }
    }
    Ok(())
}

fn read_fixture(path: &Path) -> anyhow::Result<Fixture> {
    let file = File::open(path)?;
    let fixture = serde_json::from_reader(BufReader::new(file))?;
    Ok(fixture)
}
