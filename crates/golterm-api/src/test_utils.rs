//! In-memory [`GameApi`] for controller tests
//!
//! Available with the `test-helpers` feature. The fake keeps a `GameState`,
//! applies mutations to it in the most trivial way (it does not evolve the
//! board, `next` only bumps the generation) and records every call so tests
//! can assert which requests were issued.

use std::sync::{Arc, Mutex, MutexGuard};

use golterm_core::prelude::*;
use golterm_core::{GameState, Grid, GRID_SIZE};

use crate::client::GameApi;
use crate::protocol::{paths, CellUpdate};

/// One recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    State,
    Next,
    Reset,
    Randomize,
    Pattern,
    SetCell(CellUpdate),
}

impl ApiCall {
    /// Whether this call asks the server to change its state
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ApiCall::State)
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: GameState,
    calls: Vec<ApiCall>,
    state_status: Option<u16>,
    mutation_status: Option<u16>,
}

/// Recording fake; clones share the same state and call log
#[derive(Debug, Clone, Default)]
pub struct RecordingGameApi {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingGameApi {
    pub fn new(state: GameState) -> Self {
        let api = Self::default();
        api.lock().state = state;
        api
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking test thread must not hide the calls from other tests
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Every request issued so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Number of requests that would have changed server state
    pub fn mutation_count(&self) -> usize {
        self.lock().calls.iter().filter(|c| c.is_mutation()).count()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Current server-side state
    pub fn current_state(&self) -> GameState {
        self.lock().state.clone()
    }

    pub fn set_state(&self, state: GameState) {
        self.lock().state = state;
    }

    /// Make `state()` answer with an HTTP error (`None` to recover)
    pub fn fail_state_with(&self, status: Option<u16>) {
        self.lock().state_status = status;
    }

    /// Make every mutation answer with an HTTP error (`None` to recover)
    pub fn fail_mutations_with(&self, status: Option<u16>) {
        self.lock().mutation_status = status;
    }

    fn mutate(&self, call: ApiCall, path: &str, apply: impl FnOnce(&mut GameState)) -> Result<()> {
        let mut inner = self.lock();
        inner.calls.push(call);
        if let Some(status) = inner.mutation_status {
            return Err(Error::http_status(path, status));
        }
        apply(&mut inner.state);
        inner.state.live_cells = count_live(&inner.state.grid);
        Ok(())
    }
}

fn count_live(grid: &Grid) -> u32 {
    grid.iter().flatten().filter(|alive| **alive).count() as u32
}

impl GameApi for RecordingGameApi {
    async fn state(&self) -> Result<GameState> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::State);
        if let Some(status) = inner.state_status {
            return Err(Error::http_status(paths::STATE, status));
        }
        Ok(inner.state.clone())
    }

    async fn next(&self) -> Result<()> {
        self.mutate(ApiCall::Next, paths::NEXT, |state| state.generation += 1)
    }

    async fn reset(&self) -> Result<()> {
        self.mutate(ApiCall::Reset, paths::RESET, |state| {
            *state = GameState::default();
        })
    }

    async fn randomize(&self) -> Result<()> {
        self.mutate(ApiCall::Randomize, paths::RANDOM, |state| {
            state.generation = 0;
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    state.grid[row][col] = (row + col) % 2 == 0;
                }
            }
        })
    }

    async fn pattern(&self) -> Result<()> {
        self.mutate(ApiCall::Pattern, paths::PATTERN, |state| {
            *state = GameState::default();
            state.grid[2][1] = true;
            state.grid[2][2] = true;
            state.grid[2][3] = true;
        })
    }

    async fn set_cell(&self, update: CellUpdate) -> Result<()> {
        self.mutate(ApiCall::SetCell(update), paths::CELL, |state| {
            state.grid[update.row][update.col] = update.alive;
        })
    }
}
