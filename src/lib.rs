// Library exports for the Battlesnake bot
// This allows the server binary, the replay tool and the integration tests to
// share the core decision logic

#[macro_use]
extern crate rocket;

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod evaluator;
pub mod grid;
pub mod handler;
pub mod replay;
pub mod types;
