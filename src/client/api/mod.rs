pub mod auth;
pub mod helper;
pub mod index;
pub mod parse;

pub use auth::{login, logout};
pub use index::HttpIndex;
