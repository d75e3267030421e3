//! Unique test data so tests sharing a database never collide.

use uuid::Uuid;

/// `{prefix}-{uuid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// let b = unique_str("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// A short unique display name, safe for `games.name`.
pub fn unique_game_name() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("Game {}", &id[..8])
}
