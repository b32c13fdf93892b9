// Domain layer: session, theme and minigame types plus the ports they depend on.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod tuning;

pub use entities::{HitState, Identity, Session, Target, TargetSnapshot, Theme};
pub use errors::StorageError;
