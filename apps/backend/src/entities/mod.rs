pub mod answers;
pub mod awarded_badges;
pub mod game_participants;
pub mod game_user_flags;
pub mod game_user_states;
pub mod games;
pub mod points_ledger;
pub mod questions;
pub mod screen_visits;

pub use answers::Entity as Answers;
pub use answers::Model as Answer;
pub use awarded_badges::Entity as AwardedBadges;
pub use awarded_badges::Model as AwardedBadge;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use questions::Entity as Questions;
pub use questions::Model as Question;
