//! SeaORM adapters. Functions here return `DbErr`; repos map to `DomainError`.

pub mod answers_sea;
pub mod badges_sea;
pub mod flags_sea;
pub mod game_states_sea;
pub mod games_sea;
pub mod points_sea;
pub mod questions_sea;
pub mod visits_sea;
