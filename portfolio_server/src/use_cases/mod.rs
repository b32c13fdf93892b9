// Use cases layer: session, preference and minigame workflows.

pub mod game;
pub mod game_task;
pub mod scheduler;
pub mod session_store;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_support;

pub use game::{GameLoop, GameSnapshot};
pub use game_task::{GameCommand, GameHandle, GameTaskClosed};
pub use session_store::{SessionSnapshot, SessionStore};
pub use theme::ThemeStore;
