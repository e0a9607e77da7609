use thiserror::Error;

use super::status::{ExecutionStatus, StatusProjection};

pub type ShredId = u32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("the virtual machine is not running")]
    NotRunning,

    #[error("shred {0} does not exist")]
    NoSuchShred(ShredId),

    #[error("{0}")]
    Rejected(String),
}

/// The execution engine's side of the three player actions.
pub trait ShredEngine {
    /// Sparks a new shred running `code`.
    fn add_shred(&mut self, name: &str, code: &str) -> Result<ShredId, EngineError>;

    /// Replaces shred `id` with a new shred running `code`.
    fn replace_shred(&mut self, id: ShredId, name: &str, code: &str)
        -> Result<ShredId, EngineError>;

    fn remove_shred(&mut self, id: ShredId) -> Result<(), EngineError>;
}

/// A script as shown in a player, its title and source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptItem {
    pub title: String,
    pub code: String,
}

/// The player view model for one script.
///
/// The player remembers the shreds it started so that replace and remove act on the most recent
/// one, and forwards every action to the engine.
pub struct ScriptPlayer {
    item: ScriptItem,
    shreds: Vec<ShredId>,
    projection: StatusProjection,
}

impl ScriptPlayer {
    pub fn new(item: ScriptItem) -> ScriptPlayer {
        let projection = StatusProjection::project(&item.title, &ExecutionStatus::Stopped);
        ScriptPlayer { item, shreds: Vec::new(), projection }
    }

    pub fn item(&self) -> &ScriptItem {
        &self.item
    }

    pub fn shreds(&self) -> &[ShredId] {
        &self.shreds
    }

    pub fn projection(&self) -> &StatusProjection {
        &self.projection
    }

    pub fn add_shred(&mut self, engine: &mut dyn ShredEngine) -> Result<ShredId, EngineError> {
        let id = engine
            .add_shred(&self.item.title, &self.item.code)
            .map_err(|e| self.engine_failed(e))?;
        tracing::debug!(title = %self.item.title, id, "added shred");
        self.shreds.push(id);
        Ok(id)
    }

    /// Replaces the most recent shred, or adds one if this player has none running.
    pub fn replace_shred(&mut self, engine: &mut dyn ShredEngine) -> Result<ShredId, EngineError> {
        let Some(&old) = self.shreds.last() else {
            return self.add_shred(engine);
        };
        let id = engine
            .replace_shred(old, &self.item.title, &self.item.code)
            .map_err(|e| self.engine_failed(e))?;
        tracing::debug!(title = %self.item.title, old, id, "replaced shred");
        if let Some(last) = self.shreds.last_mut() {
            *last = id;
        }
        Ok(id)
    }

    /// Removes the most recent shred. Returns `None` when this player has no shreds.
    pub fn remove_shred(
        &mut self,
        engine: &mut dyn ShredEngine,
    ) -> Result<Option<ShredId>, EngineError> {
        let Some(&id) = self.shreds.last() else {
            return Ok(None);
        };
        engine.remove_shred(id).map_err(|e| self.engine_failed(e))?;
        tracing::debug!(title = %self.item.title, id, "removed shred");
        self.shreds.pop();
        Ok(Some(id))
    }

    pub fn update_with_status(&mut self, status: &ExecutionStatus) {
        self.projection = StatusProjection::project(&self.item.title, status);
    }

    fn engine_failed(&mut self, error: EngineError) -> EngineError {
        tracing::warn!(title = %self.item.title, %error, "engine rejected player action");
        self.update_with_status(&ExecutionStatus::Error(error.to_string()));
        error
    }
}
