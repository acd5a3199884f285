pub mod channel;
pub mod team;
pub mod user;
