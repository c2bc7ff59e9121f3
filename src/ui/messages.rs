//! One-line terminal messages: an icon, a bold coloured tag, the text.

use crate::core::Status;
use ansi_term::Colour;
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn colour(self) -> Colour {
        match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        }
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{} {}", self.colour().bold().paint(self.icon()), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.line(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.line(msg));
}

/// Applied replies are shown as success, the rest as info.
pub fn status(reply: &Status) {
    if reply.is_applied() {
        success(reply);
    } else {
        info(reply);
    }
}
