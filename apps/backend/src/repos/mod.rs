//! Repository functions: adapters plus `DbErr` -> `DomainError` and
//! model -> domain conversion.

pub mod answers;
pub mod badges;
pub mod flags;
pub mod game_states;
pub mod games;
pub mod points;
pub mod questions;
pub mod visits;
