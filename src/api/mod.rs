//! Request handling: maps a mode selector and a text onto one of the four
//! conversions.

mod types;

pub use types::{Mode, Request, Response, UnknownMode};

use limbu_core::Tables;
use tracing::{debug, warn};

/// Note recorded when the mode selector is not one of the four known values.
pub const UNKNOWN_MODE_NOTE: &str = "Unknown transliteration mode.";

/// Run `mode` over `input` with the given tables.
///
/// Only Limbu → Roman produces trace lines.
pub fn convert(tables: &Tables, mode: Mode, input: &str) -> (String, Vec<String>) {
    let mut logs = Vec::new();
    let output = match mode {
        Mode::LimbuToRoman => tables.limbu_to_roman(input, Some(&mut logs)),
        Mode::LimbuToDevanagari => tables.limbu_to_devanagari(input),
        Mode::DevanagariToLimbu => tables.devanagari_to_limbu(input),
        Mode::RomanToLimbu => tables.roman_to_limbu(input),
    };
    (output, logs)
}

/// Handle one request against the global tables.
///
/// An unknown mode performs no conversion; the response carries an empty
/// output and [`UNKNOWN_MODE_NOTE`].
pub fn handle(request: &Request) -> Response {
    handle_with(Tables::global(), request)
}

pub fn handle_with(tables: &Tables, request: &Request) -> Response {
    let (output_text, debug_logs) = match request.translit_mode.parse::<Mode>() {
        Ok(mode) => {
            debug!(%mode, input_len = request.user_input.len(), "transliterate");
            convert(tables, mode, &request.user_input)
        }
        Err(e) => {
            warn!("{e}");
            (String::new(), vec![UNKNOWN_MODE_NOTE.to_string()])
        }
    };
    Response {
        translit_mode: request.translit_mode.clone(),
        user_input: request.user_input.clone(),
        output_text,
        debug_logs,
    }
}

/// Engine version string.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
