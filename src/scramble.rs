use crate::rotation::{apply_moves, Move, SLICE_COUNT};
use crate::{CubeError, CubeState};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Generate `len` random catalog moves, each one to three quarter turns
pub fn scramble(rng: &mut impl Rng, len: usize) -> Vec<Move> {
    (0..len)
        .map(|_| Move::new(rng.gen_range(0..SLICE_COUNT), rng.gen_range(1..=3)))
        .collect()
}

/// Same as [`scramble`], but reproducible from `seed`
pub fn scramble_seeded(seed: u64, len: usize) -> Vec<Move> {
    scramble(&mut SmallRng::seed_from_u64(seed), len)
}

/// A solved cube with a seeded scramble applied, along with the scramble
pub fn scrambled_cube(seed: u64, len: usize) -> Result<(CubeState, Vec<Move>), CubeError> {
    let mut cube = CubeState::new_solved();
    let moves = scramble_cube(&mut cube, &mut SmallRng::seed_from_u64(seed), len)?;
    Ok((cube, moves))
}

/// Apply a scramble drawn from `rng` to `cube`, returning the moves used
pub fn scramble_cube(
    cube: &mut CubeState,
    rng: &mut impl Rng,
    len: usize,
) -> Result<Vec<Move>, CubeError> {
    let moves = scramble(rng, len);
    apply_moves(cube, &moves)?;
    Ok(moves)
}
