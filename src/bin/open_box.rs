//! Shuffles a secure box and unlocks it.

use anyhow::Context;
use clap::{ArgAction, Parser};
use itertools::Itertools;
use securebox::{unlock, LockBox, SecureBox};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "open-box", version, about = "Unlock a randomly shuffled secure box")]
struct Cli {
    /// Number of rows
    rows: usize,

    /// Number of columns
    cols: usize,

    /// Seed for the shuffle (random if omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Print the grid before and after, and the toggles applied
    #[arg(long = "show", action = ArgAction::SetTrue)]
    show: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbosity: u8,
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);
    let mut lockbox = match cli.seed {
        Some(seed) => SecureBox::with_seed(cli.rows, cli.cols, seed),
        None => SecureBox::new(cli.rows, cli.cols),
    }
    .with_context(|| format!("cannot create {}x{} box", cli.rows, cli.cols))?;
    tracing::info!("seed: {}", lockbox.seed());
    let locked = if cli.show {
        let state = lockbox.state();
        println!("{state}\n");
        let locked = match unlock::find_toggles(&state) {
            Some(toggles) => {
                let line = unlock::sorted(&toggles)
                    .into_iter()
                    .map(|(r, c)| format!("({r}, {c})"))
                    .join(" ");
                println!("toggles: {line}\n");
                unlock::apply_toggles(&mut lockbox, &toggles)
            }
            None => {
                println!("no solution\n");
                lockbox.is_locked()
            }
        };
        println!("{}\n", lockbox.state());
        locked
    } else {
        unlock::unlock(&mut lockbox)
    };
    if locked {
        println!("BOX: LOCKED!");
    } else {
        println!("BOX: OPENED!");
    }
    Ok(())
}
