//! Glue between a running ChucK virtual machine and the editor's script player view.
//!
//! Nothing here executes ChucK code. The virtual machine is an external collaborator reached
//! through the [ShredEngine] trait, and its state arrives as plain [ExecutionStatus] values that
//! are projected into what the player view displays.
//!

pub mod player;
pub mod status;

pub use player::{EngineError, ScriptItem, ScriptPlayer, ShredEngine, ShredId};
pub use status::{ExecutionStatus, PlayerState, StatusProjection};
