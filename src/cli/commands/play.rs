//! Play command - interactive game against the learning agent
//!
//! The human plays `O` by typing `row col`; the agent plays `X` and moves
//! first. Every finished game is learned from; `r` starts the next one.

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::{Result, bail};
use clap::Parser;
use rand::Rng;

use super::TunableArgs;
use crate::{
    cli::output::{write_board, write_move_values},
    pipeline::{
        DEFAULT_PRETRAIN_EPISODES, MAX_PRETRAIN_EPISODES, OpponentKind, ProgressObserver,
        TrainingConfig, TrainingPipeline,
    },
    session::{GameSession, TurnState},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the learning agent")]
pub struct PlayArgs {
    /// Episodes of pre-training before the first game (0-1000)
    #[arg(long, short = 'p', default_value_t = DEFAULT_PRETRAIN_EPISODES)]
    pub pretrain: usize,

    /// Opponent used for pre-training (random, first, minimax)
    #[arg(long, default_value = "random")]
    pub pretrain_opponent: OpponentKind,

    /// Pause before each agent move, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub agent_delay_ms: u64,

    /// Print the agent's learned value for each free cell
    #[arg(long)]
    pub show_values: bool,

    #[command(flatten)]
    pub tunables: TunableArgs,
}

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Move { row: usize, col: usize },
    Reset,
    Quit,
    Help,
}

/// Parse `row col`, `row,col`, `r`, `q` or `h`
pub fn parse_command(line: &str) -> Option<PlayerCommand> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "q" | "quit" | "exit" => return Some(PlayerCommand::Quit),
        "r" | "reset" | "new" => return Some(PlayerCommand::Reset),
        "h" | "help" | "?" => return Some(PlayerCommand::Help),
        _ => {}
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(PlayerCommand::Move { row, col })
}

/// Options for [`run_interactive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveOptions {
    pub agent_delay: Duration,
    pub show_values: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    if args.pretrain > MAX_PRETRAIN_EPISODES {
        bail!(
            "--pretrain must be at most {MAX_PRETRAIN_EPISODES}, got {}",
            args.pretrain
        );
    }

    let mut session = GameSession::new(args.tunables.agent_config())?;

    if args.pretrain > 0 {
        let kind = args.pretrain_opponent;
        let mut opponent = kind.build(args.tunables.opponent_seed());
        let result = TrainingPipeline::new(TrainingConfig {
            episodes: args.pretrain,
        })
        .with_observer(Box::new(ProgressObserver::new()))
        .run(&mut session, opponent.as_mut())?;
        println!(
            "Pre-trained {} episodes vs {kind}: W {} / D {} / L {}",
            result.total_games, result.wins, result.draws, result.losses
        );
        session.reset();
    }

    let options = InteractiveOptions {
        agent_delay: Duration::from_millis(args.agent_delay_ms),
        show_values: args.show_values,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(&mut session, stdin.lock(), stdout.lock(), options)
}

/// Drive `session` from line-based input until `q` or end of input.
pub fn run_interactive<G, I, O>(
    session: &mut GameSession<G>,
    input: I,
    mut out: O,
    options: InteractiveOptions,
) -> Result<()>
where
    G: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "You play O. The agent plays X, moves first, and learns as it plays.")?;
    write_help(&mut out)?;

    let mut lines = input.lines();
    loop {
        if session.turn() == TurnState::AgentTurn {
            if options.show_values {
                if let Some(values) = session.agent().move_values(session.board()) {
                    writeln!(out, "Agent values:")?;
                    write_move_values(&mut out, &values)?;
                }
            }
            if !options.agent_delay.is_zero() {
                out.flush()?;
                thread::sleep(options.agent_delay);
            }
            if let Some(coord) = session.trigger_agent_move()? {
                writeln!(out, "Agent plays {coord}")?;
            }
        }

        writeln!(out)?;
        write_board(&mut out, session.board())?;
        writeln!(out, "Q-table size: {}", session.table_size())?;

        if let Some(outcome) = session.outcome() {
            writeln!(out, "{outcome}")?;
            write!(out, "r = new game, q = quit > ")?;
        } else {
            write!(out, "your move (row col) > ")?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        match parse_command(&line?) {
            Some(PlayerCommand::Quit) => break,
            Some(PlayerCommand::Reset) => session.reset(),
            Some(PlayerCommand::Help) => write_help(&mut out)?,
            Some(PlayerCommand::Move { row, col }) => {
                if !session.apply_opponent_move(row, col) {
                    writeln!(out, "Illegal move ({row}, {col})")?;
                }
            }
            None => writeln!(out, "Unrecognised input; type h for help")?,
        }
    }

    Ok(())
}

fn write_help<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "Commands: `row col` to move (0-2 each), r = reset, q = quit")
}
