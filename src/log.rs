//! Logger setup for the CLI and the wasm front end.
//!
//! Library code only talks to the `log` facade: oversized words at `warn`, one summary
//! line per puzzle at `info`, search details at `debug`. Nothing is printed until a
//! front end calls [`init_logger`].

use log::LevelFilter;

/// Environment variable the CLI reads to switch on debug output.
pub const DEBUG_ENV_VAR: &str = "WORDGRID_DEBUG";

/// Interpret a `WORDGRID_DEBUG` value. Unset, empty, `0`, `false` and `off` mean off.
pub fn debug_flag(value: Option<&str>) -> bool {
    let Some(value) = value.map(str::trim) else {
        return false;
    };
    !(value.is_empty()
        || value == "0"
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("off"))
}

/// Whether the environment asks for debug output.
#[cfg(not(target_arch = "wasm32"))]
pub fn debug_requested() -> bool {
    debug_flag(std::env::var(DEBUG_ENV_VAR).ok().as_deref())
}

/// Level for wordgrid's own records.
pub fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the logger for this process.
///
/// - **Native (CLI):** stderr via `env_logger`. wordgrid logs at [`level_for`], other
///   crates only at `warn`. `RUST_LOG`, when set, replaces both.
/// - **WASM:** browser console via `console_log`.
///
/// Calling it again keeps the first logger.
pub fn init_logger(debug_enabled: bool) {
    let level = level_for(debug_enabled);

    #[cfg(target_arch = "wasm32")]
    init_console(level);

    #[cfg(not(target_arch = "wasm32"))]
    init_stderr(level);
}

#[cfg(target_arch = "wasm32")]
fn init_console(level: LevelFilter) {
    let level = level.to_level().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        // no logger means no log::error!, so report straight to the console
        let msg = format!("wordgrid: console logging unavailable ({e})");
        web_sys::console::error_1(&msg.into());
        return;
    }
    log::debug!("console logger at {level}");
}

#[cfg(not(target_arch = "wasm32"))]
fn init_stderr(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("wordgrid", level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("stderr logger at {level}");
    }
}
