pub mod entries;
pub mod generate;
pub mod login;
pub mod misc;
pub mod rotate;
pub mod session;
pub mod setup;
pub mod status;
pub mod strength;
