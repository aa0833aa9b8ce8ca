use anyhow::{Context, Result};
use rubik_cube::io::export_cube_png;
use rubik_cube::scramble::scrambled_cube;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let out_path = args.next().context("Requires output path")?;
    let seed = match args.next() {
        Some(s) => s.parse().context("Parsing seed")?,
        None => 0,
    };
    let len = match args.next() {
        Some(s) => s.parse().context("Parsing scramble length")?,
        None => 25,
    };

    let (cube, moves) = scrambled_cube(seed, len).context("Scrambling")?;
    log::info!("scrambled with {} moves from seed {seed}", moves.len());
    export_cube_png(out_path, &cube, 16)
}
