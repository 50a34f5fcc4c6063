pub mod app;
pub mod steam;
pub mod user;
