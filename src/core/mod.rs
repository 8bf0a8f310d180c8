// src/core/mod.rs

pub mod html;
pub mod sanitize;
pub mod scanner;

pub use scanner::{Event, Scanner};
