pub mod create_player;
pub mod health;
pub mod home;
pub mod players;
pub mod routes;
