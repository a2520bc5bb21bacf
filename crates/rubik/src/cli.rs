use eyre::{Result, WrapErr};
use rubik_core::{Cube, parse_moves};

/// Apply moves to a solved 3x3x3 Rubik's Cube and print the result.
///
/// Set `RUST_LOG=trace` to log each move as it is applied.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Moves to apply, such as "R U R' U'".
    pub moves: String,

    /// Number of times to apply the moves.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub repeat: usize,

    /// Print the cube state as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also print whether the cube ends up solved.
    #[arg(long)]
    pub check_solved: bool,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let moves = parse_moves(&args.moves).wrap_err("error parsing moves")?;
    log::info!("applying {moves} {} time(s)", args.repeat);

    let mut cube = Cube::new();
    for _ in 0..args.repeat {
        cube.apply_moves(&moves);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cube)?);
    } else {
        print!("{cube}");
    }
    if args.check_solved {
        println!("solved: {}", cube.is_solved());
    }

    Ok(())
}
