//! Console messages: colored, icon-prefixed lines for the operator.
//! Errors go to stderr, everything else to stdout.

use std::fmt;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";

/// Color and icon for each kind of line.
#[derive(Clone, Copy)]
enum Kind {
    Info,
    Step,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Kind::Info => ("\x1b[34m", "ℹ️"),
            Kind::Step => ("\x1b[36m", "▶"),
            Kind::Success => ("\x1b[32m", "✅"),
            Kind::Warning => ("\x1b[33m", "⚠️"),
            Kind::Error => ("\x1b[31m", "❌"),
        }
    }

    fn render<T: fmt::Display>(self, msg: T) -> String {
        let (color, icon) = self.style();
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Kind::Info.render(msg));
}

/// A unit of work is starting (one migration, one scan).
pub fn step<T: fmt::Display>(msg: T) {
    println!("{}", Kind::Step.render(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Kind::Success.render(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Kind::Warning.render(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Kind::Error.render(msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    let (color, _) = Kind::Info.style();
    println!("{color}{BOLD}== {msg} =={RESET}\n");
}
