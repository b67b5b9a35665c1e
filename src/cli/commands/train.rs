//! Train command - headless learning against a scripted opponent

use std::{
    fs,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use super::TunableArgs;
use crate::{
    cli::output::{format_number, format_percent, print_section, print_stats_table},
    pipeline::{
        MetricsObserver, OpponentKind, ProgressObserver, TrainingConfig, TrainingPipeline,
        TrainingResult,
    },
    session::GameSession,
};

#[derive(Parser, Debug)]
#[command(about = "Train the agent against a scripted opponent")]
pub struct TrainArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 500)]
    pub episodes: usize,

    /// Opponent to train against (random, first, minimax)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: OpponentKind,

    #[command(flatten)]
    pub tunables: TunableArgs,

    /// Write a JSON summary here; a directory gets `training_summary.json`
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let kind = args.opponent;
    let mut session = GameSession::new(args.tunables.agent_config())?;
    let mut opponent = kind.build(args.tunables.opponent_seed());

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        episodes: args.episodes,
    })
    .with_observer(Box::new(MetricsObserver::default()));
    if !args.no_progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run(&mut session, opponent.as_mut())?;
    print_summary(&result, kind);

    if let Some(raw) = &args.summary {
        let path = summary_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        result
            .save(&path)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

/// Resolve the `--summary` argument to a `.json` file path
fn summary_path(raw: &Path) -> PathBuf {
    let names_directory =
        raw.as_os_str().to_string_lossy().ends_with(MAIN_SEPARATOR) || raw.file_name().is_none();
    if names_directory || raw.is_dir() {
        return raw.join("training_summary.json");
    }

    let mut path = raw.to_path_buf();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        path.set_extension("json");
    }
    path
}

fn print_summary(result: &TrainingResult, opponent: OpponentKind) {
    print_section(&format!("Training vs {opponent}"));
    let games = format_number(result.total_games);
    let wins = format!("{} ({})", result.wins, format_percent(result.win_rate));
    let draws = format!("{} ({})", result.draws, format_percent(result.draw_rate));
    let losses = format!("{} ({})", result.losses, format_percent(result.loss_rate));
    let table = format_number(result.table_size);
    print_stats_table(&[
        ("Episodes", &games),
        ("Wins", &wins),
        ("Draws", &draws),
        ("Losses", &losses),
        ("Policy table size", &table),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_path_appends_json() {
        assert_eq!(
            summary_path(Path::new("out/run")),
            PathBuf::from("out/run.json")
        );
        assert_eq!(
            summary_path(Path::new("out/run.JSON")),
            PathBuf::from("out/run.JSON")
        );
    }

    #[test]
    fn test_summary_path_directory_gets_default_name() {
        let raw = format!("out{MAIN_SEPARATOR}");
        assert_eq!(
            summary_path(Path::new(&raw)),
            Path::new("out").join("training_summary.json")
        );
    }
}
