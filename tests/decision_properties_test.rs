// Behavioral tests for the greedy move decision
//
// Each test builds a small board by hand and checks the chosen move against
// the scoring rules: food attraction, edge aversion, head-to-head avoidance,
// kill incentive, self-head exclusion, legality and determinism.

use fang_snake::config::{Config, ScoresConfig};
use fang_snake::evaluator::{decide, legal_moves, score_move};
use fang_snake::grid::{Cell, OccupancyGrid};
use fang_snake::types::{Battlesnake, Board, Coord, Direction};

fn weights() -> ScoresConfig {
    Config::default_hardcoded().scores
}

fn snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health: 100,
        body: body.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        ..Default::default()
    }
}

fn board(width: i32, height: i32, food: &[(i32, i32)], snakes: Vec<Battlesnake>) -> Board {
    Board {
        width,
        height,
        food: food.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        snakes,
        hazards: vec![],
    }
}

fn grid_for(board: &Board, you: &Battlesnake) -> OccupancyGrid {
    let mut grid = OccupancyGrid::from_board(board).unwrap();
    grid.clear(&you.body[0]);
    grid
}

#[test]
fn test_food_attraction() {
    // No snakes on the board list; `you` is passed separately
    let you = snake("me", &[(2, 2)]);
    let b = board(5, 5, &[(2, 1)], vec![]);

    let decision = decide(&b, &you, &weights()).unwrap();
    assert_eq!(decision.movement, Direction::Up);
    assert_eq!(decision.score, Some(10));
}

#[test]
fn test_edge_aversion() {
    let you = snake("me", &[(0, 2)]);
    let b = board(5, 5, &[], vec![you.clone()]);
    let grid = grid_for(&b, &you);
    let head = Coord::new(0, 2);
    let w = weights();

    assert!(!legal_moves(&grid, &head).contains(&Direction::Left));
    assert_eq!(score_move(&grid, &head, Direction::Up, 1, &w), -1);
    assert_eq!(score_move(&grid, &head, Direction::Down, 1, &w), -1);
    assert_eq!(score_move(&grid, &head, Direction::Right, 1, &w), 0);

    let decision = decide(&b, &you, &w).unwrap();
    assert_eq!(decision.movement, Direction::Right);
}

#[test]
fn test_head_collision_avoidance() {
    // Moving up puts us next to an equal-length head at (2,0)
    let you = snake("me", &[(2, 2), (2, 3), (2, 4)]);
    let other = snake("other", &[(2, 0), (3, 0), (4, 0)]);
    let b = board(7, 7, &[], vec![you.clone(), other]);
    let grid = grid_for(&b, &you);
    let head = Coord::new(2, 2);
    let w = weights();

    let up = score_move(&grid, &head, Direction::Up, 3, &w);
    let left = score_move(&grid, &head, Direction::Left, 3, &w);
    assert!(up - left <= -100, "up={} left={}", up, left);

    let decision = decide(&b, &you, &w).unwrap();
    assert_ne!(decision.movement, Direction::Up);
    assert_eq!(decision.movement, Direction::Left);
}

#[test]
fn test_longer_head_is_also_avoided() {
    let you = snake("me", &[(2, 2), (2, 3), (2, 4)]);
    let other = snake("other", &[(2, 0), (3, 0), (4, 0), (5, 0), (6, 0)]);
    let b = board(7, 7, &[], vec![you.clone(), other]);

    let decision = decide(&b, &you, &weights()).unwrap();
    assert_eq!(decision.movement, Direction::Left);
}

#[test]
fn test_kill_incentive() {
    // Shorter head at (4,2); going right puts it straight ahead of the target
    let you = snake("me", &[(2, 2), (1, 2), (0, 2)]);
    let other = snake("other", &[(4, 2), (5, 2)]);
    let b = board(7, 7, &[], vec![you.clone(), other]);
    let grid = grid_for(&b, &you);
    let head = Coord::new(2, 2);
    let w = weights();

    let right = score_move(&grid, &head, Direction::Right, 3, &w);
    let up = score_move(&grid, &head, Direction::Up, 3, &w);
    assert_eq!(right - up, 5);

    let decision = decide(&b, &you, &w).unwrap();
    assert_eq!(decision.movement, Direction::Right);
    assert_eq!(decision.score, Some(5));
}

#[test]
fn test_self_head_is_not_an_obstacle() {
    let you = snake("me", &[(2, 2), (2, 3)]);
    let b = board(5, 5, &[], vec![you.clone()]);

    let raw = OccupancyGrid::from_board(&b).unwrap();
    assert_eq!(raw.get(&Coord::new(2, 2)), Some(Cell::Head { remaining: 2 }));

    let grid = grid_for(&b, &you);
    assert_eq!(grid.get(&Coord::new(2, 2)), Some(Cell::Empty));
}

#[test]
fn test_returned_move_is_legal_when_one_exists() {
    let you = snake("me", &[(0, 0), (1, 0), (2, 0)]);
    let other = snake("other", &[(0, 2), (0, 3), (0, 4)]);
    let b = board(5, 5, &[(4, 4)], vec![you.clone(), other]);
    let grid = grid_for(&b, &you);

    let legal = legal_moves(&grid, &Coord::new(0, 0));
    assert_eq!(legal, vec![Direction::Down]);

    let decision = decide(&b, &you, &weights()).unwrap();
    assert_eq!(decision.movement, Direction::Down);
    assert_eq!(decision.options, 1);
}

#[test]
fn test_food_is_a_legal_target_next_to_bodies() {
    let you = snake("me", &[(1, 1), (1, 2)]);
    let other = snake("other", &[(3, 0), (2, 0), (0, 0)]);
    let b = board(4, 4, &[(0, 1)], vec![you.clone(), other]);
    let grid = grid_for(&b, &you);

    assert!(legal_moves(&grid, &Coord::new(1, 1)).contains(&Direction::Left));
    let decision = decide(&b, &you, &weights()).unwrap();
    assert_eq!(decision.movement, Direction::Left);
}

#[test]
fn test_decision_is_deterministic() {
    let you = snake("me", &[(5, 5), (5, 6), (5, 7)]);
    let b = board(
        11,
        11,
        &[(1, 1), (8, 3), (5, 3)],
        vec![
            you.clone(),
            snake("a", &[(5, 2), (6, 2), (7, 2), (8, 2)]),
            snake("b", &[(3, 4), (3, 5)]),
        ],
    );
    let w = weights();

    let first = decide(&b, &you, &w).unwrap();
    for _ in 0..20 {
        assert_eq!(decide(&b, &you, &w).unwrap(), first);
    }
}

#[test]
fn test_off_board_you_missing_from_snakes_is_an_error() {
    let you = snake("me", &[(9, 9)]);
    let b = board(5, 5, &[], vec![]);

    let err = decide(&b, &you, &weights()).unwrap_err();
    assert!(err.contains("Snake 'me' head (9,9) is off the 5x5 board"), "{}", err);
}

#[test]
fn test_malformed_board_is_an_error() {
    let you = snake("me", &[(9, 9)]);
    let b = board(5, 5, &[], vec![you.clone()]);
    assert!(decide(&b, &you, &weights()).is_err());
}
