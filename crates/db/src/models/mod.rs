pub mod contributor;
pub mod playlist;
pub mod score;
pub mod session;
pub mod user;
pub mod video;
