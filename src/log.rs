// src/log.rs
// Thin layer over the `log` facade. Output goes to stderr so stdout stays
// reserved for the generated document.
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[doc(hidden)]
pub use ::log::{debug, info, warn};

/// Install the terminal logger. Warnings and errors only, unless `verbose`.
///
/// Calling this twice is harmless; the second logger is ignored.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        ::log::debug!("logger already installed");
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::warn!($($arg)*)
    };
}
