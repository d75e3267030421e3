//! Services: workflows over repos, the notifier, and the pure domain.

pub mod badges;
pub mod game_state;
pub mod guesses;
pub mod metadata;
pub mod progression;

pub use badges::BadgeService;
pub use game_state::GameStateService;
pub use guesses::GuessService;
pub use progression::ProgressionService;
