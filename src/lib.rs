use std::fmt;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

pub mod error;
pub mod io;
pub mod rotation;
pub mod scramble;


pub use error::CubeError;
pub use rotation::{apply_moves, descriptor, rotate, transpose, Axis, Move, RotationDescriptor};

/// Side length of a face
pub const SIZE: usize = 3;

/// A square grid of face cells, row-major
pub type Grid<T> = [[T; SIZE]; SIZE];

/// Sticker color. Only equality is meaningful.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Color {
    Red,
    Blue,
    Green,
    White,
    Yellow,
    Black,
}

impl Color {
    /// One-letter code used by the text net
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Black => 'K',
        }
    }

    /// Sticker color in the PNG net
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Red => [0xd0, 0x20, 0x20],
            Color::Blue => [0x20, 0x40, 0xd0],
            Color::Green => [0x20, 0xa0, 0x30],
            Color::White => [0xff, 0xff, 0xff],
            Color::Yellow => [0xf0, 0xd0, 0x10],
            Color::Black => [0x10, 0x10, 0x10],
        }
    }
}

/// Spatial face of the cube
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    /// Color of this face on a solved cube.
    ///
    /// Top is red, bottom green, front yellow, back white, left blue and
    /// right black.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Top => Color::Red,
            Face::Bottom => Color::Green,
            Face::Front => Color::Yellow,
            Face::Back => Color::White,
            Face::Left => Color::Blue,
            Face::Right => Color::Black,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A (row, column) coordinate on a face
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn check(self) -> Result<Self, CubeError> {
        if self.row < SIZE && self.col < SIZE {
            Ok(self)
        } else {
            Err(CubeError::IndexOutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }
}

/// Six 3x3 faces of colors. Every cell is always populated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [Grid<Color>; Face::COUNT],
}

impl CubeState {
    /// A solved cube, one uniform color per face (see [`Face::solved_color`])
    pub fn new_solved() -> Self {
        let mut faces = [[[Color::Red; SIZE]; SIZE]; Face::COUNT];
        for face in Face::iter() {
            faces[face.index()] = [[face.solved_color(); SIZE]; SIZE];
        }
        Self { faces }
    }

    pub fn get(&self, face: Face, cell: Cell) -> Result<Color, CubeError> {
        let Cell { row, col } = cell.check()?;
        Ok(self.faces[face.index()][row][col])
    }

    pub fn set(&mut self, face: Face, cell: Cell, color: Color) -> Result<(), CubeError> {
        let Cell { row, col } = cell.check()?;
        self.faces[face.index()][row][col] = color;
        Ok(())
    }

    pub fn face(&self, face: Face) -> &Grid<Color> {
        &self.faces[face.index()]
    }

    pub fn face_mut(&mut self, face: Face) -> &mut Grid<Color> {
        &mut self.faces[face.index()]
    }

    /// Whether every face is a single color
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| {
            let first = grid[0][0];
            grid.iter().flatten().all(|&c| c == first)
        })
    }

    /// Number of cells of each color, indexed by `Color as usize`
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut counts = [0; Color::COUNT];
        for &color in self.faces.iter().flatten().flatten() {
            counts[color as usize] += 1;
        }
        counts
    }

    /// Apply `times` clockwise quarter turns of `slice`
    pub fn rotate(&mut self, slice: usize, times: i64) -> Result<(), CubeError> {
        rotation::rotate(self, slice, times)
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new_solved()
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for face in Face::iter() {
            map.entry(&face, self.face(face));
        }
        map.finish()
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        io::write_net(f, self)
    }
}
