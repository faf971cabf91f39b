//! Generic adversarial search for two-player, zero-sum, perfect-information
//! games. The engine knows nothing about any concrete game; anything that
//! implements [`Position`] can be searched.

pub mod position;
pub mod search;


pub use position::Position;
pub use search::{minimax, minimax_alpha_beta};
