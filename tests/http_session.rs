//! End-to-end tests: the engine talking HTTP to an in-process game server
//!
//! Run with: cargo test --test http_session

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use golterm_api::{CellUpdate, HttpGameApi};
use golterm_app::config::Settings;
use golterm_app::{Activity, AppPhase, Engine, Message, Severity};
use golterm_core::{GameState, GRID_SIZE};
use tokio::net::TcpListener;

// ─────────────────────────────────────────────────────────
// Fake game server
// ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Game {
    state: Arc<Mutex<GameState>>,
    fail_mutations: Arc<Mutex<bool>>,
}

impl Game {
    fn with_blinker() -> Self {
        let game = Self::default();
        {
            let mut state = game.state.lock().unwrap();
            for col in 1..=3 {
                state.grid[2][col] = true;
            }
            state.live_cells = 3;
        }
        game
    }

    fn snapshot(&self) -> GameState {
        self.state.lock().unwrap().clone()
    }

    fn mutate(&self, f: impl FnOnce(&mut GameState)) -> Result<Json<serde_json::Value>, StatusCode> {
        if *self.fail_mutations.lock().unwrap() {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        let mut state = self.state.lock().unwrap();
        f(&mut state);
        state.live_cells = state.grid.iter().flatten().filter(|alive| **alive).count() as u32;
        Ok(Json(serde_json::json!({"success": true})))
    }
}

fn step(state: &mut GameState) {
    let old = state.grid;
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let mut neighbours = 0;
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (r, c) = (row as i32 + dr, col as i32 + dc);
                    if (0..GRID_SIZE as i32).contains(&r)
                        && (0..GRID_SIZE as i32).contains(&c)
                        && old[r as usize][c as usize]
                    {
                        neighbours += 1;
                    }
                }
            }
            state.grid[row][col] = matches!((old[row][col], neighbours), (true, 2) | (_, 3));
        }
    }
    state.generation += 1;
}

async fn handle_state(State(game): State<Game>) -> Json<GameState> {
    Json(game.snapshot())
}

async fn handle_next(State(game): State<Game>) -> Result<Json<serde_json::Value>, StatusCode> {
    game.mutate(step)
}

async fn handle_reset(State(game): State<Game>) -> Result<Json<serde_json::Value>, StatusCode> {
    game.mutate(|state| *state = GameState::default())
}

async fn handle_cell(
    State(game): State<Game>,
    Json(update): Json<CellUpdate>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    game.mutate(|state| state.grid[update.row][update.col] = update.alive)
}

async fn spawn_server(game: Game) -> String {
    let app = Router::new()
        .route("/api/game/state", get(handle_state))
        .route("/api/game/next", post(handle_next))
        .route("/api/game/reset", post(handle_reset))
        .route("/api/game/cell", post(handle_cell))
        .with_state(game);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn started_engine(game: &Game) -> Engine<HttpGameApi> {
    let base_url = spawn_server(game.clone()).await;
    let settings = Settings::default().with_overrides(Some(base_url), None);
    let api = HttpGameApi::new(&settings.api.base_url, settings.api.timeout()).unwrap();

    let mut engine = Engine::new(settings, api);
    engine.start();
    assert!(engine.process_next_message().await);
    engine
}

// ─────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_initial_state_is_rendered() {
    let game = Game::with_blinker();
    let engine = started_engine(&game).await;

    assert_eq!(engine.state.phase, AppPhase::Running);
    assert!(engine.state.server_reachable);
    assert_eq!(engine.state.game(), Some(&game.snapshot()));
}

#[tokio::test]
async fn test_advance_flips_blinker_and_highlights_changes() {
    let game = Game::with_blinker();
    let mut engine = started_engine(&game).await;

    engine.process_message(Message::AdvanceGeneration);
    assert!(engine.process_next_message().await);

    let board = engine.state.board.as_ref().unwrap();
    assert_eq!(board.state.generation, 1);
    assert!(board.state.grid[1][2] && board.state.grid[3][2]);
    // (2,1) and (2,3) died, (1,2) and (3,2) were born
    assert_eq!(board.changes.len(), 4);
    assert_eq!(engine.state.activity, Activity::Idle);
    assert_eq!(engine.state.toasts.count(Severity::Success), 1);
}

#[tokio::test]
async fn test_toggle_negates_the_displayed_cell() {
    let game = Game::with_blinker();
    let mut engine = started_engine(&game).await;

    engine.process_message(Message::ToggleCell { row: 0, col: 4 });
    assert!(engine.process_next_message().await);
    assert!(game.snapshot().grid[0][4]);
    assert_eq!(engine.state.game().map(|g| g.grid[0][4]), Some(true));

    engine.process_message(Message::ToggleCell { row: 2, col: 2 });
    assert!(engine.process_next_message().await);
    assert!(!game.snapshot().grid[2][2]);
    assert_eq!(engine.state.game().map(|g| g.live_cells), Some(3));
}

#[tokio::test]
async fn test_reset_clears_board_without_highlights() {
    let game = Game::with_blinker();
    let mut engine = started_engine(&game).await;

    engine.process_message(Message::ResetBoard);
    assert!(engine.process_next_message().await);

    let board = engine.state.board.as_ref().unwrap();
    assert_eq!(board.state, GameState::default());
    assert!(board.changes.is_empty());
}

#[tokio::test]
async fn test_server_error_keeps_last_board() {
    let game = Game::with_blinker();
    let mut engine = started_engine(&game).await;
    let before = engine.state.board.clone();

    *game.fail_mutations.lock().unwrap() = true;
    engine.process_message(Message::AdvanceGeneration);
    assert!(engine.process_next_message().await);

    assert_eq!(engine.state.board, before);
    assert_eq!(engine.state.toasts.count(Severity::Danger), 1);
    assert_eq!(engine.state.activity, Activity::Idle);
}

#[tokio::test]
async fn test_unreachable_server_reports_connection_error() {
    // Bind and drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let settings = Settings::default().with_overrides(Some(format!("http://{addr}")), None);
    let api = HttpGameApi::new(&settings.api.base_url, settings.api.timeout()).unwrap();
    let mut engine = Engine::new(settings, api);

    engine.start();
    assert!(engine.process_next_message().await);

    assert!(engine.state.board.is_none());
    assert!(!engine.state.server_reachable);
    assert_eq!(engine.state.toasts.count(Severity::Danger), 1);
}
