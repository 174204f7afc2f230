//! View mode resolution from a navigation path.

/// Path prefix that selects the admin editing view.
pub const ADMIN_PATH_PREFIX: &str = "/admin";

/// Which of the two views a navigation path selects.
///
/// Resolved once at startup and passed down; not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Portfolio,
    Admin,
}

impl Mode {
    /// Resolve the mode for a navigation path.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with(ADMIN_PATH_PREFIX) {
            Mode::Admin
        } else {
            Mode::Portfolio
        }
    }
}
