//! Quarter-turn rotation engine.
//!
//! Every turn is described by a [`RotationDescriptor`] from a fixed catalog.
//! A descriptor names three cells, and the same three cells are exchanged
//! around the four faces that move about the descriptor's [`Axis`]. If the
//! turn spins a face in place, that face's grid is rotated with [`transpose`].
//!
//! Only clockwise turns exist. Three clockwise turns stand in for one
//! counter-clockwise turn.

use crate::{Cell, Color, CubeError, CubeState, Face, Grid, SIZE};
use std::fmt;

/// Turning axis. Four faces cycle around it and the other two stay put.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Front, left, back, right cycle; top and bottom are fixed
    X,
    /// Front, top, back, bottom cycle; left and right are fixed
    Y,
    /// Right, bottom, left, top cycle; front and back are fixed
    Z,
}

impl Axis {
    /// The face that receives `face`'s cells when this axis turns clockwise,
    /// or `None` if `face` doesn't move about this axis.
    pub fn next(self, face: Face) -> Option<Face> {
        use Face::*;
        match (self, face) {
            (Axis::X, Front) => Some(Left),
            (Axis::X, Left) => Some(Back),
            (Axis::X, Back) => Some(Right),
            (Axis::X, Right) => Some(Front),

            (Axis::Y, Front) => Some(Top),
            (Axis::Y, Top) => Some(Back),
            (Axis::Y, Back) => Some(Bottom),
            (Axis::Y, Bottom) => Some(Front),

            (Axis::Z, Right) => Some(Bottom),
            (Axis::Z, Bottom) => Some(Left),
            (Axis::Z, Left) => Some(Top),
            (Axis::Z, Top) => Some(Right),

            _ => None,
        }
    }

    /// The two faces that stay in place
    pub fn fixed(self) -> [Face; 2] {
        match self {
            Axis::X => [Face::Top, Face::Bottom],
            Axis::Y => [Face::Left, Face::Right],
            Axis::Z => [Face::Front, Face::Back],
        }
    }
}

/// How one slice moves during a clockwise quarter turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationDescriptor {
    /// Cells exchanged on every face of the chain, in hand-off order
    pub shift: [Cell; 3],
    /// Face that spins in place after the shift. Middle slices have none.
    pub transpose: Option<Face>,
    /// Face the chain starts and ends on
    pub orientation: Face,
    pub axis: Axis,
}

const fn column(col: usize) -> [Cell; 3] {
    [Cell::new(0, col), Cell::new(1, col), Cell::new(2, col)]
}

const fn row(row: usize) -> [Cell; 3] {
    [Cell::new(row, 0), Cell::new(row, 1), Cell::new(row, 2)]
}

const fn row_reversed(row: usize) -> [Cell; 3] {
    [Cell::new(row, 2), Cell::new(row, 1), Cell::new(row, 0)]
}

/// Number of slices in the catalog
pub const SLICE_COUNT: usize = 9;

/// Descriptor catalog, indexed by slice id
static CATALOG: [RotationDescriptor; SLICE_COUNT] = [
    RotationDescriptor {
        shift: column(0),
        transpose: Some(Face::Left),
        orientation: Face::Front,
        axis: Axis::Y,
    },
    RotationDescriptor {
        shift: row(0),
        transpose: Some(Face::Top),
        orientation: Face::Front,
        axis: Axis::X,
    },
    RotationDescriptor {
        shift: row(1),
        transpose: None,
        orientation: Face::Front,
        axis: Axis::X,
    },
    RotationDescriptor {
        shift: column(2),
        transpose: Some(Face::Right),
        orientation: Face::Front,
        axis: Axis::Y,
    },
    RotationDescriptor {
        shift: row_reversed(1),
        transpose: None,
        orientation: Face::Front,
        axis: Axis::X,
    },
    RotationDescriptor {
        shift: row_reversed(2),
        transpose: Some(Face::Bottom),
        orientation: Face::Front,
        axis: Axis::X,
    },
    // Slices 6 through 8 turn about the front/back pivot.
    RotationDescriptor {
        shift: column(1),
        transpose: None,
        orientation: Face::Right,
        axis: Axis::Z,
    },
    RotationDescriptor {
        shift: column(2),
        transpose: Some(Face::Back),
        orientation: Face::Right,
        axis: Axis::Z,
    },
    RotationDescriptor {
        shift: column(2),
        transpose: Some(Face::Front),
        orientation: Face::Right,
        axis: Axis::Z,
    },
];

/// Look up the descriptor for `slice`
pub fn descriptor(slice: usize) -> Result<&'static RotationDescriptor, CubeError> {
    CATALOG.get(slice).ok_or(CubeError::InvalidSlice(slice))
}

/// Rotate a grid 90 degrees clockwise in place: reverse the rows, then
/// reflect across the main diagonal.
pub fn transpose<T>(grid: &mut Grid<T>) {
    grid.reverse();
    for i in 1..SIZE {
        let (upper, lower) = grid.split_at_mut(i);
        for j in 0..i {
            std::mem::swap(&mut lower[0][j], &mut upper[j][i]);
        }
    }
}

/// Apply `times` clockwise quarter turns of `slice` to `state`.
///
/// `times` is applied literally, one quarter turn after another. If an error
/// comes up partway through, `state` is left as it is; use [`apply_moves`]
/// for all-or-nothing application.
pub fn rotate(state: &mut CubeState, slice: usize, times: i64) -> Result<(), CubeError> {
    let desc = descriptor(slice)?;
    if times < 0 {
        return Err(CubeError::InvalidArgument(times));
    }

    log::debug!(
        "slice {slice}*{times}: {:?} axis from {}",
        desc.axis,
        desc.orientation
    );
    for turn in 0..times {
        log::trace!("slice {slice}: quarter turn {}", turn + 1);
        quarter_turn(state, slice, desc)?;
    }
    Ok(())
}

fn quarter_turn(
    state: &mut CubeState,
    slice: usize,
    desc: &RotationDescriptor,
) -> Result<(), CubeError> {
    let malformed = || CubeError::MalformedDescriptor { slice };
    let start = desc.orientation;

    let mut current = read_cells(state, start, &desc.shift)?;
    let mut next = desc.axis.next(start).ok_or_else(malformed)?;
    while next != start {
        let temp = read_cells(state, next, &desc.shift)?;
        write_cells(state, next, &desc.shift, current)?;
        current = temp;
        next = desc.axis.next(next).ok_or_else(malformed)?;
    }
    // Close the cycle: the start face takes what the last face held
    write_cells(state, start, &desc.shift, current)?;

    if let Some(face) = desc.transpose {
        transpose(state.face_mut(face));
    }
    Ok(())
}

fn read_cells(state: &CubeState, face: Face, cells: &[Cell; 3]) -> Result<[Color; 3], CubeError> {
    let mut out = [Color::Red; 3];
    for (slot, &cell) in out.iter_mut().zip(cells) {
        *slot = state.get(face, cell)?;
    }
    Ok(out)
}

fn write_cells(
    state: &mut CubeState,
    face: Face,
    cells: &[Cell; 3],
    colors: [Color; 3],
) -> Result<(), CubeError> {
    for (&cell, color) in cells.iter().zip(colors) {
        state.set(face, cell, color)?;
    }
    Ok(())
}

/// A slice id and a number of clockwise quarter turns
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub slice: usize,
    pub times: i64,
}

impl Move {
    pub fn new(slice: usize, times: i64) -> Self {
        Self { slice, times }
    }

    /// The move that undoes this one, made of clockwise turns only
    pub fn inverse(self) -> Self {
        Self {
            slice: self.slice,
            times: 3 * (self.times % 4),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.slice, self.times)
    }
}

/// Apply every move in order. If any move fails, `state` is restored to what
/// it was before the first move and the error is returned.
pub fn apply_moves(state: &mut CubeState, moves: &[Move]) -> Result<(), CubeError> {
    let snapshot = state.clone();
    for (i, &mv) in moves.iter().enumerate() {
        if let Err(e) = rotate(state, mv.slice, mv.times) {
            log::warn!("move {i} ({mv}) failed, restoring cube: {e}");
            *state = snapshot;
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    fn col(state: &CubeState, face: Face, c: usize) -> [Color; 3] {
        let grid = state.face(face);
        [grid[0][c], grid[1][c], grid[2][c]]
    }

    #[test]
    fn test_transpose_grid() {
        let mut grid = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        transpose(&mut grid);
        assert_eq!(grid, [[7, 4, 1], [8, 5, 2], [9, 6, 3]]);

        for _ in 0..3 {
            transpose(&mut grid);
        }
        assert_eq!(grid, [[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    }

    #[test]
    fn test_axis_cycles() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let moving: Vec<Face> = Face::iter()
                .filter(|f| !axis.fixed().contains(f))
                .collect();
            assert_eq!(moving.len(), 4);
            for &start in &moving {
                let mut face = start;
                for _ in 0..4 {
                    face = axis.next(face).unwrap();
                    assert!(moving.contains(&face));
                }
                assert_eq!(face, start);
            }
            for fixed in axis.fixed() {
                assert_eq!(axis.next(fixed), None);
            }
        }
    }

    #[test]
    fn test_catalog_is_well_formed() {
        for (slice, desc) in CATALOG.iter().enumerate() {
            assert!(
                desc.axis.next(desc.orientation).is_some(),
                "slice {slice} starts off its axis cycle",
            );
            if let Some(face) = desc.transpose {
                assert!(
                    desc.axis.fixed().contains(&face),
                    "slice {slice} spins a moving face",
                );
            }
            for cell in desc.shift {
                assert!(cell.row < SIZE && cell.col < SIZE);
            }
        }
    }

    #[test]
    fn test_single_turn_shifts_column() {
        let mut cube = CubeState::new_solved();
        rotate(&mut cube, 0, 1).unwrap();

        assert_eq!(col(&cube, Face::Top, 0), [Color::Yellow; 3]);
        assert_eq!(col(&cube, Face::Back, 0), [Color::Red; 3]);
        assert_eq!(col(&cube, Face::Bottom, 0), [Color::White; 3]);
        assert_eq!(col(&cube, Face::Front, 0), [Color::Green; 3]);
        for face in [Face::Top, Face::Back, Face::Bottom, Face::Front] {
            for c in 1..SIZE {
                assert_eq!(col(&cube, face, c), [face.solved_color(); 3]);
            }
        }
    }

    #[test]
    fn test_front_goes_to_back_after_two_turns() {
        let mut cube = CubeState::new_solved();
        let front = col(&cube, Face::Front, 0);
        let left = col(&cube, Face::Left, 0);
        rotate(&mut cube, 0, 2).unwrap();

        assert_eq!(col(&cube, Face::Back, 0), front);
        assert_eq!(col(&cube, Face::Back, 0), [Color::Yellow; 3]);

        // Two spins turn the left face upside down
        let grid = cube.face(Face::Left);
        assert_eq!([grid[2][2], grid[1][2], grid[0][2]], left);
    }

    #[test]
    fn test_pivot_face_is_transposed() {
        let pattern = [
            [Color::Red, Color::Blue, Color::Green],
            [Color::White, Color::Yellow, Color::Black],
            [Color::Green, Color::Green, Color::Blue],
        ];
        let mut cube = CubeState::new_solved();
        *cube.face_mut(Face::Front) = pattern;

        let desc = descriptor(8).unwrap();
        assert_eq!(desc.orientation, Face::Right);
        assert_eq!(desc.transpose, Some(Face::Front));
        rotate(&mut cube, 8, 1).unwrap();

        let mut expected = pattern;
        for (i, row) in expected.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = pattern[SIZE - 1 - j][i];
            }
        }
        assert_eq!(*cube.face(Face::Front), expected);
    }

    #[test]
    fn test_untouched_faces_are_unchanged() {
        let (start, _) = crate::scramble::scrambled_cube(7, 30).unwrap();
        for (slice, desc) in CATALOG.iter().enumerate() {
            let mut cube = start.clone();
            rotate(&mut cube, slice, 1).unwrap();
            for face in desc.axis.fixed() {
                if desc.transpose != Some(face) {
                    assert_eq!(cube.face(face), start.face(face), "slice {slice}, {face}");
                }
            }
            for face in Face::iter() {
                for r in 0..SIZE {
                    for c in 0..SIZE {
                        let cell = Cell::new(r, c);
                        let on_chain = desc.axis.next(face).is_some();
                        if on_chain && !desc.shift.contains(&cell) {
                            assert_eq!(cube.get(face, cell), start.get(face, cell));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_slice() {
        let mut cube = CubeState::new_solved();
        assert_eq!(rotate(&mut cube, SLICE_COUNT, 1), Err(CubeError::InvalidSlice(SLICE_COUNT)));
        assert_eq!(rotate(&mut cube, 100, 0), Err(CubeError::InvalidSlice(100)));
        assert_eq!(cube, CubeState::new_solved());
    }

    #[test]
    fn test_negative_times() {
        let mut cube = CubeState::new_solved();
        assert_eq!(rotate(&mut cube, 0, -1), Err(CubeError::InvalidArgument(-1)));
        assert_eq!(cube, CubeState::new_solved());
    }

    #[test]
    fn test_zero_times_is_noop() {
        let (mut cube, _) = crate::scramble::scrambled_cube(3, 20).unwrap();
        let before = cube.clone();
        for slice in 0..SLICE_COUNT {
            rotate(&mut cube, slice, 0).unwrap();
        }
        assert_eq!(cube, before);
    }

    #[test]
    fn test_four_turns_is_identity() {
        let (start, _) = crate::scramble::scrambled_cube(11, 40).unwrap();
        for slice in 0..SLICE_COUNT {
            let mut cube = start.clone();
            rotate(&mut cube, slice, 4).unwrap();
            assert_eq!(cube, start, "slice {slice}");

            rotate(&mut cube, slice, 3).unwrap();
            rotate(&mut cube, slice, 1).unwrap();
            assert_eq!(cube, start, "slice {slice}");
        }
    }

    #[test]
    fn test_move_inverse() {
        let (start, _) = crate::scramble::scrambled_cube(5, 10).unwrap();
        for slice in 0..SLICE_COUNT {
            for times in 0..6 {
                let mv = Move::new(slice, times);
                let mut cube = start.clone();
                apply_moves(&mut cube, &[mv, mv.inverse()]).unwrap();
                assert_eq!(cube, start, "{mv}");
            }
        }
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(0, 1).to_string(), "0*1");
        assert_eq!(Move::new(8, 12).to_string(), "8*12");
    }

    #[test]
    fn test_apply_moves_restores_on_error() {
        let mut cube = CubeState::new_solved();
        let moves = [Move::new(0, 1), Move::new(3, 2), Move::new(42, 1)];
        assert_eq!(apply_moves(&mut cube, &moves), Err(CubeError::InvalidSlice(42)));
        assert_eq!(cube, CubeState::new_solved());

        let moves = [Move::new(1, 1), Move::new(2, -3)];
        assert_eq!(apply_moves(&mut cube, &moves), Err(CubeError::InvalidArgument(-3)));
        assert!(cube.is_solved());
    }

    #[test]
    fn test_cube_state_rotate_method() {
        let mut a = CubeState::new_solved();
        let mut b = CubeState::new_solved();
        a.rotate(5, 3).unwrap();
        rotate(&mut b, 5, 3).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_solved());
    }
}
