//! Plain terminal output helpers for CLI reports.

use std::fmt::Display;

/// Print a section heading.
pub fn section(title: &str) {
    println!();
    println!("{title}");
}

/// Print an indented `label: value` line.
pub fn field(label: &str, value: impl Display) {
    println!("  {label:<14} {value}");
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  ✓ {message}");
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  ! {message}");
}
