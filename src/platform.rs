//! Key hint labels shown in the status bar

/// Submit shortcut display
/// Ctrl+S works on all platforms, including inside text fields
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Clear-field shortcut display
pub const CLEAR_SHORTCUT: &str = "^U";

/// Quit hint on the right of the status bar
pub const QUIT_HINT: &str = " ^C:quit ";
