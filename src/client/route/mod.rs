pub mod dashboard;
pub mod login;
pub mod not_found;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
