pub mod layout;
pub mod navbar;
pub mod notification;
pub mod page;
pub mod protected_layout;

pub use layout::Layout;
pub use navbar::Navbar;
pub use notification::Notification;
pub use page::Page;
pub use protected_layout::{RequiresLoggedIn, RetryButton};
