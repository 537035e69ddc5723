mod replay;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chessrules_core::{MateRules, Position};

use crate::replay::Replay;

const USAGE: &str = "usage: chessrules [--rules legacy|complete] [--position PLACEMENT] [MOVE...]";

struct Args {
    rules: MateRules,
    position: Position,
    moves: Vec<String>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        rules: MateRules::default(),
        position: Position::starting_position(),
        moves: Vec::new(),
    };
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--rules" => {
                let value = raw.next().context("--rules needs a value")?;
                args.rules = value.parse().context("invalid --rules")?;
            }
            "--position" => {
                let value = raw.next().context("--position needs a value")?;
                args.position = value.parse().context("invalid --position")?;
            }
            "-h" | "--help" => bail!(USAGE),
            _ if arg.starts_with("--") => bail!("unknown option {arg}\n{USAGE}"),
            _ => args.moves.push(arg),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args(std::env::args().skip(1))?;
    args.position
        .validate()
        .context("starting position is not playable")?;
    info!(rules = %args.rules, position = %args.position, "chessrules starting");

    let mut replay = Replay::new(args.position, args.rules);
    for mv in &args.moves {
        if let Err(e) = replay.play(mv) {
            warn!(mv = %mv, error = %e, "move rejected");
        }
    }

    println!("{}", replay.position().pretty());
    info!(
        to_move = %replay.turn(),
        captured = replay.captured().len(),
        finished = replay.is_finished(),
        "replay done"
    );
    Ok(())
}
