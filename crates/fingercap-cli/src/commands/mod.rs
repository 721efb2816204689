pub mod config;
pub mod crop;
pub mod enhance;
pub mod quality;
pub mod register;
pub mod users;
pub mod verify;
