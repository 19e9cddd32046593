#![cfg(feature = "std")]
//! Shared access to one game from concurrently running tasks.
//!
//! A presentation layer usually handles each user interaction on its own
//! task. `GameHandle` serialises those interactions through a single mutex
//! per game, so a validate → mutate → flip sequence is never interleaved
//! with another player's action.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::EngineError;
use crate::coord::Coordinate;
use crate::game::{CancelReport, GameStatus, PlacementReport, ShotReport, TurnEngine};
use crate::ship::Orientation;
use crate::view::GridView;

/// What a presentation layer may ask of a game, addressed by user identity.
#[async_trait]
pub trait GameApi<P>: Send + Sync
where
    P: Send + Sync,
{
    async fn submit_placement(
        &self,
        who: &P,
        ship_name: &str,
        origin: &str,
        orientation: Orientation,
    ) -> Result<PlacementReport, EngineError>;
    async fn submit_shot(&self, who: &P, token: &str) -> Result<ShotReport, EngineError>;
    async fn request_cancel(&self, who: &P) -> Result<CancelReport, EngineError>;
    async fn view(&self, who: &P, reveal_own: bool) -> Result<GridView, EngineError>;
    async fn target_view(&self, who: &P) -> Result<GridView, EngineError>;
    async fn status(&self) -> GameStatus;
}

/// Cloneable, mutex-guarded handle to one engine.
pub struct GameHandle<P> {
    engine: Arc<Mutex<TurnEngine<P>>>,
}

impl<P> Clone for GameHandle<P> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<P> GameHandle<P> {
    pub fn new(engine: TurnEngine<P>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub async fn with_engine<R>(&self, f: impl FnOnce(&mut TurnEngine<P>) -> R) -> R {
        let mut engine = self.engine.lock().await;
        f(&mut engine)
    }
}

impl<P: Clone> GameHandle<P> {
    /// Consistent image of the game at this instant.
    pub async fn snapshot(&self) -> crate::snapshot::GameState<P> {
        self.engine.lock().await.state()
    }
}

#[async_trait]
impl<P> GameApi<P> for GameHandle<P>
where
    P: PartialEq + Send + Sync,
{
    async fn submit_placement(
        &self,
        who: &P,
        ship_name: &str,
        origin: &str,
        orientation: Orientation,
    ) -> Result<PlacementReport, EngineError> {
        let origin = Coordinate::parse(origin)?;
        let mut engine = self.engine.lock().await;
        let slot = engine.seat_of(who)?;
        engine.submit_placement(slot, ship_name, origin, orientation)
    }

    async fn submit_shot(&self, who: &P, token: &str) -> Result<ShotReport, EngineError> {
        let mut engine = self.engine.lock().await;
        let slot = engine.seat_of(who)?;
        engine.submit_shot(slot, token)
    }

    async fn request_cancel(&self, who: &P) -> Result<CancelReport, EngineError> {
        let mut engine = self.engine.lock().await;
        let slot = engine.seat_of(who)?;
        engine.request_cancel(slot)
    }

    async fn view(&self, who: &P, reveal_own: bool) -> Result<GridView, EngineError> {
        let engine = self.engine.lock().await;
        let slot = engine.seat_of(who)?;
        Ok(engine.get_view(slot, reveal_own))
    }

    async fn target_view(&self, who: &P) -> Result<GridView, EngineError> {
        let engine = self.engine.lock().await;
        let slot = engine.seat_of(who)?;
        Ok(engine.target_view(slot))
    }

    async fn status(&self) -> GameStatus {
        self.engine.lock().await.status()
    }
}
