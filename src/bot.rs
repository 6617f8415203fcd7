// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// The Bot ties configuration and debug logging to the greedy evaluator.
// For more info see docs.battlesnake.com

use log::info;
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::evaluator::{self, Decision};
use crate::types::{Battlesnake, Board, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with debug logging disabled
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Self::with_logger(config, DebugLogger::disabled())
    }

    /// Creates a new Bot instance that records every decision to `debug_logger`
    pub fn with_logger(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
            "version": env!("CARGO_PKG_VERSION"),
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        info!(
            "GAME START {} ({}x{}, {} snakes, you={})",
            game.id,
            board.width,
            board.height,
            board.snakes.len(),
            you.id
        );
        self.appearance()
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, you: &Battlesnake) -> Value {
        info!("GAME OVER {} at turn {} (you={})", game.id, turn, you.id);
        self.appearance()
    }

    /// Computes the next move and its shout
    /// Corresponds to POST /move endpoint
    ///
    /// # Returns
    /// * `Value` - JSON response `{"move": ..., "shout": ...}`
    ///
    /// # Errors
    /// The game state violates the evaluator's preconditions.
    pub fn get_move(
        &self,
        game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Result<Value, String> {
        let decision = self.decide(board, you)?;

        info!(
            "Turn {}: Chose {} (score: {:?}, options: {})",
            turn,
            decision.movement.as_str(),
            decision.score,
            decision.options
        );

        self.debug_logger.log_move(&game.id, *turn, board, you, &decision);

        Ok(json!({ "move": decision.movement.as_str(), "shout": decision.shout }))
    }

    /// Pure decision for `you` on `board` using the configured weights
    pub fn decide(&self, board: &Board, you: &Battlesnake) -> Result<Decision, String> {
        evaluator::decide(board, you, &self.config.scores)
    }

    fn appearance(&self) -> Value {
        let appearance = &self.config.appearance;
        json!({
            "color": appearance.color,
            "headType": appearance.head,
            "tailType": appearance.tail,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }
}
