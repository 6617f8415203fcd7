// Integration test for trapped snake fallback behavior
//
// When every direction is blocked the bot still answers, always with "down",
// even when that move is fatal.

use fang_snake::bot::Bot;
use fang_snake::config::Config;
use fang_snake::types::{Battlesnake, Board, Coord, Game};

fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ..Default::default()
    }
}

fn snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health: 50,
        body: body.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        ..Default::default()
    }
}

/// Test: Snake coiled in a 3x3 board with every neighbor occupied
#[test]
fn test_boxed_in_snake_falls_back_to_down() {
    let bot = Bot::new(Config::default_hardcoded());

    let you = snake(
        "our-snake",
        &[(1, 1), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0), (0, 1)],
    );
    let board = Board {
        height: 3,
        width: 3,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    let response = bot.get_move(&game(), &42, &board, &you).unwrap();
    assert_eq!(response["move"], "down");
    assert_eq!(response["shout"], "I am a rust snake at 1,1 with 0 options");
}

/// Test: Snake at top wall, blocked left and right by opponents, with its neck below
/// "down" is chosen even though it hits our own neck
#[test]
fn test_trapped_at_top_wall_still_answers_down() {
    let bot = Bot::new(Config::default_hardcoded());

    let you = snake("our-snake", &[(5, 0), (5, 1), (5, 2), (5, 3)]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![Coord::new(0, 10)],
        snakes: vec![
            you.clone(),
            snake("left", &[(4, 0), (4, 1), (4, 2)]),
            snake("right", &[(6, 1), (6, 0)]),
        ],
        hazards: vec![],
    };

    let decision = bot.decide(&board, &you).unwrap();
    assert_eq!(decision.options, 0);
    assert_eq!(decision.score, None);
    assert_eq!(decision.movement.as_str(), "down");
}

/// Test: With a single open square the bot takes it, whatever its score
#[test]
fn test_single_escape_is_taken_over_fallback() {
    let bot = Bot::new(Config::default_hardcoded());

    // Only left is open; down (the fallback) would hit our neck
    let you = snake("our-snake", &[(5, 0), (5, 1), (5, 2)]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![
            you.clone(),
            snake("right", &[(6, 0), (7, 0), (8, 0), (9, 0)]),
            snake("lurker", &[(3, 0), (2, 0), (1, 0), (0, 0)]),
        ],
        hazards: vec![],
    };

    let decision = bot.decide(&board, &you).unwrap();
    assert_eq!(decision.options, 1);
    assert_eq!(decision.movement.as_str(), "left");
    assert!(decision.score.unwrap() <= -100);
}
