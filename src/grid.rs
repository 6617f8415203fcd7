// Occupancy grid built from a single board snapshot
//
// Each cell records what currently sits on it. Food is laid down first, then
// every snake in list order from head to tail; a later write to the same cell
// replaces the earlier one. The numeric encoding used by the scoring rules is
// exposed through `Cell::encoded`.

use std::fmt;

use crate::types::{Battlesnake, Board, Coord};

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    /// Non-head segment; `remaining` counts segments from here to the tail inclusive
    Body { remaining: u32 },
    /// Head segment; `remaining` is the snake's full length
    Head { remaining: u32 },
}

impl Cell {
    /// Packed integer form: empty -1, food 1, body 100+n, head 200+n
    pub fn encoded(&self) -> i64 {
        match self {
            Cell::Empty => -1,
            Cell::Food => 1,
            Cell::Body { remaining } => 100 + i64::from(*remaining),
            Cell::Head { remaining } => 200 + i64::from(*remaining),
        }
    }

    /// Any snake segment, head or body
    pub fn is_obstacle(&self) -> bool {
        self.encoded() >= 100
    }

    pub fn is_food(&self) -> bool {
        self.encoded() == 1
    }

    /// Length read off a head-valued cell, or `None` if the cell does not
    /// encode as a head.
    ///
    /// Works on the packed value, so a body segment with 100 or more
    /// remaining segments reads as a head here.
    pub fn head_length(&self) -> Option<i64> {
        let value = self.encoded();
        if value >= 200 {
            Some(value % 100)
        } else {
            None
        }
    }

    fn glyph(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Food => '*',
            Cell::Body { .. } => 'o',
            Cell::Head { .. } => 'H',
        }
    }
}

/// Dense width × height grid, rebuilt per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// Builds the grid for a parsed board
    pub fn from_board(board: &Board) -> Result<Self, String> {
        Self::interpret(board.width, board.height, &board.food, &board.snakes)
    }

    /// Lays food and then every snake onto a fresh grid
    ///
    /// # Errors
    /// Non-positive dimensions, or any food or body coordinate outside the board.
    pub fn interpret(
        width: i32,
        height: i32,
        food: &[Coord],
        snakes: &[Battlesnake],
    ) -> Result<Self, String> {
        if width <= 0 || height <= 0 {
            return Err(format!("Invalid board dimensions {}x{}", width, height));
        }

        let mut grid = OccupancyGrid {
            width,
            height,
            cells: vec![Cell::Empty; (width as usize) * (height as usize)],
        };

        for coord in food {
            grid.set(coord, Cell::Food)
                .map_err(|e| format!("Food {}", e))?;
        }

        for snake in snakes {
            let length = snake.body.len() as u32;
            for (i, segment) in snake.body.iter().enumerate() {
                let remaining = length - i as u32;
                let cell = if i == 0 {
                    Cell::Head { remaining }
                } else {
                    Cell::Body { remaining }
                };
                grid.set(segment, cell)
                    .map_err(|e| format!("Snake '{}' segment {} {}", snake.id, i, e))?;
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Cell at `coord`, or `None` off the board
    pub fn get(&self, coord: &Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Resets a cell to empty. Off-board coordinates are ignored.
    pub fn clear(&mut self, coord: &Coord) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = Cell::Empty;
        }
    }

    fn set(&mut self, coord: &Coord, cell: Cell) -> Result<(), String> {
        let i = self
            .index(coord)
            .ok_or_else(|| format!("at ({}) is off the {}x{} board", coord, self.width, self.height))?;
        self.cells[i] = cell;
        Ok(())
    }

    fn index(&self, coord: &Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            let line: String = row.iter().map(Cell::glyph).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
