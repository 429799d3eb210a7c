//! Headless driver that replays scripted paging sessions.

mod scenario;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tessera_pageview::Orientation;
use tracing::{info, warn};

use crate::scenario::{Scenario, Session};

const BUILT_IN_SCENARIO: &str = include_str!("../pageview.toml");

#[derive(Parser)]
#[command(name = "pageview-demo")]
#[command(version, about = "Replays a scripted touch session against a headless pager", long_about = None)]
struct Cli {
    /// Scenario file to replay (defaults to the built-in one)
    scenario: Option<PathBuf>,
    /// Override the scroll axis
    #[arg(long, value_enum)]
    axis: Option<Axis>,
    /// Override the number of pages visible at once
    #[arg(long)]
    pages_shown: Option<usize>,
    /// Release distance that commits to a neighbouring page
    #[arg(long)]
    threshold: Option<f32>,
    /// Simulated frames per second
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Axis {
    Horizontal,
    Vertical,
}

impl From<Axis> for Orientation {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Orientation::Horizontal,
            Axis::Vertical => Orientation::Vertical,
        }
    }
}

impl Cli {
    fn load_scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.scenario {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Scenario::from_toml(&text)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => Scenario::from_toml(BUILT_IN_SCENARIO)
                .context("Failed to parse the built-in scenario")?,
        };

        if let Some(axis) = self.axis {
            scenario.pager.orientation = axis.into();
        }
        if let Some(pages_shown) = self.pages_shown {
            scenario.pager.pages_shown = pages_shown;
        }
        if let Some(threshold) = self.threshold {
            scenario.pager.scroll_threshold = Some(threshold);
        }
        if let Some(fps) = self.fps {
            scenario.fps = fps;
        }
        Ok(scenario)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let scenario = cli.load_scenario()?;

    info!(
        steps = scenario.steps.len(),
        pages = scenario.pages.len(),
        orientation = ?scenario.pager.orientation,
        "Replaying scenario"
    );
    let mut session = Session::new(&scenario)?;
    if session.pager().cur_page_index().is_none() {
        warn!("Scenario has no pages");
    }
    session.run(&scenario.steps);
    session.log_summary();
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            match tracing_subscriber::EnvFilter::try_new(
                "error,tessera_pageview=debug,pageview_demo=info",
            ) {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("error"),
            }
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
