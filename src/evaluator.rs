// Greedy move selection over an occupancy grid
//
// A move is legal when its target is on the board and not a snake segment.
// Each legal move is scored by what sits on the target plus a fan of three
// cells one step further out; the highest score wins and earlier directions
// win ties.

use log::{debug, trace, warn};

use crate::config::ScoresConfig;
use crate::grid::OccupancyGrid;
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Move returned when every direction is blocked
pub const FALLBACK_MOVE: Direction = Direction::Down;

/// Outcome of one move decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub movement: Direction,
    pub shout: String,
    /// Winning score, `None` when the fallback move was used
    pub score: Option<i32>,
    /// Number of legal moves that were considered
    pub options: usize,
}

/// Directions whose target cell is on the board and free of snake segments,
/// in `Direction::all()` order
pub fn legal_moves(grid: &OccupancyGrid, head: &Coord) -> Vec<Direction> {
    Direction::all()
        .iter()
        .filter(|dir| match grid.get(&dir.apply(head)) {
            Some(cell) => !cell.is_obstacle(),
            None => false,
        })
        .copied()
        .collect()
}

/// The three cells examined one step beyond the target of `direction`:
/// straight ahead of the target, then its two lateral neighbours
pub fn lookahead_cells(direction: Direction, head: &Coord) -> [Coord; 3] {
    match direction {
        Direction::Up => [head.offset(0, -2), head.offset(-1, -1), head.offset(1, -1)],
        Direction::Down => [head.offset(0, 2), head.offset(-1, 1), head.offset(1, 1)],
        Direction::Left => [head.offset(-2, 0), head.offset(-1, 1), head.offset(-1, -1)],
        Direction::Right => [head.offset(2, 0), head.offset(1, 1), head.offset(1, -1)],
    }
}

/// Desirability of moving `direction` from `head`. Higher is better.
pub fn score_move(
    grid: &OccupancyGrid,
    head: &Coord,
    direction: Direction,
    self_length: usize,
    weights: &ScoresConfig,
) -> i32 {
    let mut score = 0;

    if let Some(target) = grid.get(&direction.apply(head)) {
        if target.is_food() {
            score += weights.target_food_bonus;
        }
    }

    let self_length = self_length as i64;
    for coord in lookahead_cells(direction, head).iter() {
        let cell = match grid.get(coord) {
            Some(cell) => cell,
            None => {
                score += weights.edge_penalty;
                continue;
            }
        };

        if let Some(other_length) = cell.head_length() {
            if other_length >= self_length {
                score += weights.larger_head_penalty;
            }
            if other_length < self_length {
                score += weights.smaller_head_bonus;
            }
        } else if cell.is_obstacle() {
            score += weights.body_penalty;
        } else if cell.is_food() {
            score += weights.lookahead_food_bonus;
        }
    }

    score
}

/// Picks the best legal move. Returns the move, its score (`None` for the
/// fallback) and the number of legal options.
pub fn select_move(
    grid: &OccupancyGrid,
    head: &Coord,
    self_length: usize,
    weights: &ScoresConfig,
) -> (Direction, Option<i32>, usize) {
    let options = legal_moves(grid, head);

    let mut best: Option<(Direction, i32)> = None;
    for &direction in &options {
        let score = score_move(grid, head, direction, self_length, weights);
        debug!("  {:>5}: {}", direction.as_str(), score);

        // Strictly greater, so the first direction to reach the max keeps it
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((direction, score));
        }
    }

    match best {
        Some((direction, score)) => (direction, Some(score), options.len()),
        None => {
            warn!(
                "No legal moves from {}, falling back to {}",
                head,
                FALLBACK_MOVE.as_str()
            );
            (FALLBACK_MOVE, None, 0)
        }
    }
}

/// Decides the next move for `you` on `board`
///
/// # Errors
/// `you` has no body, its head is off the board, or the board contains
/// off-board coordinates.
pub fn decide(board: &Board, you: &Battlesnake, weights: &ScoresConfig) -> Result<Decision, String> {
    let head = you
        .head()
        .ok_or_else(|| format!("Snake '{}' has an empty body", you.id))?;

    let mut grid = OccupancyGrid::from_board(board)?;
    if !grid.contains(&head) {
        return Err(format!(
            "Snake '{}' head ({}) is off the {}x{} board",
            you.id,
            head,
            grid.width(),
            grid.height()
        ));
    }
    // Our own head is never a collision risk for us
    grid.clear(&head);
    trace!("Occupancy grid:\n{}", grid);

    let (movement, score, options) = select_move(&grid, &head, you.body.len(), weights);

    Ok(Decision {
        movement,
        shout: format!("I am a rust snake at {} with {} options", head, options),
        score,
        options,
    })
}

/// Decides for the snake at `self_index` in `board.snakes`
pub fn decide_indexed(
    board: &Board,
    self_index: usize,
    weights: &ScoresConfig,
) -> Result<Decision, String> {
    let you = board.snakes.get(self_index).ok_or_else(|| {
        format!(
            "Snake index {} out of range ({} snakes on board)",
            self_index,
            board.snakes.len()
        )
    })?;
    decide(board, you, weights)
}
