//! Game sessions: the per-game aggregate and its controller.
//!
//! ## Key Types
//!
//! - [`GameSession`] / [`GameStatus`]: one game in flight
//! - [`SessionController`]: validated start, engine delegation, restart

pub mod controller;
pub mod state;

pub use controller::SessionController;
pub use state::{GameSession, GameStatus};
