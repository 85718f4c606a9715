pub const SITE_NAME: &str = "Slink";
pub const SITE_TAGLINE: &str = "Minecraft server management";

/// Base address of the management API, fixed at build time.
pub const API_URL: &str = match option_env!("SLINK_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// How long notification toasts stay on screen.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
