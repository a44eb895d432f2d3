//! TTY detection and color support logic

use std::env;
use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    colors_enabled(
        env::var_os("NO_COLOR").is_some(),
        env::var("CLICOLOR_FORCE").ok().as_deref(),
        env::var("CLICOLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

/// Precedence: NO_COLOR, then CLICOLOR_FORCE, then CLICOLOR=0, then TTY
fn colors_enabled(
    no_color: bool,
    clicolor_force: Option<&str>,
    clicolor: Option<&str>,
    is_tty: bool,
) -> bool {
    if no_color {
        return false;
    }
    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }
    if clicolor == Some("0") {
        return false;
    }
    is_tty
}
