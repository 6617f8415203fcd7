// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use log::error;
use rocket::fairing::AdHoc;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde_json::Value;

use crate::bot::Bot;
use crate::types::GameState;

/// GET / endpoint
/// Returns bot metadata and appearance; also serves as the liveness check
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /ping endpoint
#[post("/ping")]
pub fn ping() -> Status {
    Status::Ok
}

/// POST /start endpoint
/// Called when a game starts; replies with appearance metadata
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<GameState>) -> Json<Value> {
    Json(bot.start(
        &start_req.game,
        &start_req.turn,
        &start_req.board,
        &start_req.you,
    ))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", format = "json", data = "<move_req>")]
pub fn get_move(bot: &rocket::State<Bot>, move_req: Json<GameState>) -> Result<Json<Value>, Status> {
    bot.get_move(
        &move_req.game,
        &move_req.turn,
        &move_req.board,
        &move_req.you,
    )
    .map(Json)
    .map_err(|e| {
        error!("Turn {}: failed to decide move: {}", move_req.turn, e);
        Status::BadRequest
    })
}

/// POST /end endpoint
/// Called when a game ends
#[post("/end", format = "json", data = "<end_req>")]
pub fn end(bot: &rocket::State<Bot>, end_req: Json<GameState>) -> Json<Value> {
    Json(bot.end(&end_req.game, &end_req.turn, &end_req.board, &end_req.you))
}

/// Assembles the Rocket instance with all routes mounted and `bot` as managed state
pub fn build(bot: Bot) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/github/fang-snake");
            })
        }))
        .mount("/", routes![index, ping, start, get_move, end])
}
