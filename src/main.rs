use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rubik_cube::{io::export_cube_png, scramble::scramble_cube, CubeState};
use std::path::PathBuf;
use structopt::StructOpt;

/// Turn one slice of a cube and show it before and after
#[derive(Debug, StructOpt)]
#[structopt(name = "rubik_cube")]
struct Opt {
    /// Slice id to turn
    #[structopt(short, long, default_value = "0")]
    slice: usize,

    /// Number of clockwise quarter turns
    #[structopt(short, long, default_value = "1", allow_hyphen_values = true)]
    times: i64,

    /// Number of random moves to apply before the turn
    #[structopt(long, default_value = "0")]
    scramble: usize,

    /// Seed for --scramble
    #[structopt(long)]
    seed: Option<u64>,

    /// Also write the final cube to this PNG file
    #[structopt(long, parse(from_os_str))]
    png: Option<PathBuf>,

    /// Sticker size in pixels for --png, at most 256
    #[structopt(long, default_value = "16")]
    scale: usize,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_module(
            "rubik_cube",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .parse_default_env()
        .init();

    let opt = Opt::from_args();
    log::debug!("{opt:?}");

    let mut cube = CubeState::new_solved();
    if opt.scramble > 0 {
        let mut rng = match opt.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let moves = scramble_cube(&mut cube, &mut rng, opt.scramble).context("Scrambling")?;
        let moves: Vec<String> = moves.iter().map(ToString::to_string).collect();
        println!("Scramble: {}", moves.join(" "));
    }

    println!("Before:\n{cube}");
    cube.rotate(opt.slice, opt.times)
        .with_context(|| format!("Rotating slice {}*{}", opt.slice, opt.times))?;
    println!("After slice {}*{}:\n{cube}", opt.slice, opt.times);

    if let Some(path) = &opt.png {
        export_cube_png(path, &cube, opt.scale)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
