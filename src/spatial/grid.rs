//! Flat-array grid utilities shared by the wave, the entropy caches and tile maps
//!
//! Grids are addressed by `Position { x, y }` and backed by `ndarray` arrays laid
//! out row-major as `[y, x]` (and `[y, x, z]` for layered grids). No logic lives
//! here beyond addressing and neighbour lookup.

use ndarray::{Array2, Array3, ArrayView1, ArrayViewMut1, Axis};

use crate::spatial::direction::Direction;

/// Cell coordinate, `x` to the right and `y` downwards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a rectangular grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Size {
    /// Create a size from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the position lies inside the rectangle
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Whether both dimensions are multiples of `n`
    pub const fn is_divisible_by(&self, n: usize) -> bool {
        n > 0 && self.width % n == 0 && self.height % n == 0
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Grid extent together with its edge behaviour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topology {
    /// Grid dimensions
    pub size: Size,
    /// Whether neighbour lookups wrap around the edges
    pub periodic: bool,
}

impl Topology {
    /// Create a topology
    pub const fn new(size: Size, periodic: bool) -> Self {
        Self { size, periodic }
    }

    /// Neighbouring cell one step in `direction`, if it exists
    ///
    /// Non-periodic grids have no neighbour across their edges.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = position.x as isize + dx;
        let y = position.y as isize + dy;
        let width = self.size.width as isize;
        let height = self.size.height as isize;

        if self.periodic {
            if width == 0 || height == 0 {
                return None;
            }
            return Some(Position::new(
                x.rem_euclid(width) as usize,
                y.rem_euclid(height) as usize,
            ));
        }

        (x >= 0 && y >= 0 && x < width && y < height).then_some(Position::new(x as usize, y as usize))
    }
}

/// Two-dimensional map from a position to a value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid2<T> {
    cells: Array2<T>,
}

impl<T: Clone> Grid2<T> {
    /// Create a grid with every cell set to `value`
    pub fn filled(size: Size, value: T) -> Self {
        Self {
            cells: Array2::from_elem((size.height, size.width), value),
        }
    }
}

impl<T> Grid2<T> {
    /// Create a grid by evaluating `f` at every position
    pub fn from_fn(size: Size, mut f: impl FnMut(Position) -> T) -> Self {
        Self {
            cells: Array2::from_shape_fn((size.height, size.width), |(y, x)| {
                f(Position::new(x, y))
            }),
        }
    }

    /// Grid dimensions
    pub fn size(&self) -> Size {
        let (height, width) = self.cells.dim();
        Size::new(width, height)
    }

    /// Value at a position
    pub fn get(&self, position: Position) -> Option<&T> {
        self.cells.get([position.y, position.x])
    }

    /// Mutable value at a position
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.cells.get_mut([position.y, position.x])
    }

    /// Overwrite the value at a position, returning whether it was in bounds
    pub fn set(&mut self, position: Position, value: T) -> bool {
        self.get_mut(position).map(|cell| *cell = value).is_some()
    }

    /// Values in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Positions paired with their values in row-major order
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), value)| (Position::new(x, y), value))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        self.cells.rows().into_iter()
    }
}

/// Three-dimensional map from a position plus a layer index to a value
///
/// Layers are contiguous per cell, so one cell's data is one lane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid3<T> {
    cells: Array3<T>,
}

impl<T: Clone + Default> Grid3<T> {
    /// Create a layered grid with every entry set to `value`
    pub fn filled(size: Size, depth: usize, value: T) -> Self {
        Self {
            cells: Array3::from_elem((size.height, size.width, depth), value),
        }
    }

    /// Create a layered grid where every cell holds a copy of `lane`
    pub fn from_lane(size: Size, lane: &[T]) -> Self {
        Self {
            cells: Array3::from_shape_fn((size.height, size.width, lane.len()), |(_, _, z)| {
                lane.get(z).cloned().unwrap_or_default()
            }),
        }
    }
}

impl<T> Grid3<T> {
    /// Grid dimensions, excluding the layer axis
    pub fn size(&self) -> Size {
        let (height, width, _) = self.cells.dim();
        Size::new(width, height)
    }

    /// Number of layers per cell
    pub fn depth(&self) -> usize {
        self.cells.dim().2
    }

    /// Value at a position and layer
    pub fn get(&self, position: Position, layer: usize) -> Option<&T> {
        self.cells.get([position.y, position.x, layer])
    }

    /// Mutable value at a position and layer
    pub fn get_mut(&mut self, position: Position, layer: usize) -> Option<&mut T> {
        self.cells.get_mut([position.y, position.x, layer])
    }

    /// All layers of one cell
    pub fn lane(&self, position: Position) -> Option<ArrayView1<'_, T>> {
        self.size()
            .contains(position)
            .then(|| {
                self.cells
                    .view()
                    .index_axis_move(Axis(0), position.y)
                    .index_axis_move(Axis(0), position.x)
            })
    }

    /// All layers of one cell, mutably
    pub fn lane_mut(&mut self, position: Position) -> Option<ArrayViewMut1<'_, T>> {
        self.size()
            .contains(position)
            .then(|| {
                self.cells
                    .view_mut()
                    .index_axis_move(Axis(0), position.y)
                    .index_axis_move(Axis(0), position.x)
            })
    }
}
