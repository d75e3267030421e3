pub mod badges;
pub mod db;
