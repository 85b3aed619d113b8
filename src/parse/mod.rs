//! Spec-sheet parsing.
//!
//! Catalog listings describe parts in free text: `"336 mm"`, `"850W"`,
//! `"2 x 16GB"`, `"DDR5-6000 CL30"`, `"AM4, AM5 / LGA1700"`. These helpers turn
//! such text into the typed attributes the component records carry, so that the
//! code building records from catalog data does not have to hand-roll the
//! conversions. The engine itself never parses.

mod error;
pub(crate) mod grammar;

use winnow::error::{ContextError, ErrMode};
use winnow::Parser;

use crate::types::{MemoryType, Socket};

pub use error::ParseError;

/// A memory kit description: how many modules and their combined capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryKit {
    pub module_count: u32,
    pub capacity_gb: f64,
}

impl MemoryKit {
    pub(crate) fn new(module_count: u32, capacity_gb: f64) -> Self {
        Self {
            module_count,
            capacity_gb,
        }
    }
}

/// A memory technology label with its optional rated speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySpec {
    pub memory_type: MemoryType,
    pub speed_mhz: Option<u32>,
}

fn run<'i, O>(
    mut parser: impl Parser<&'i str, O, ErrMode<ContextError>>,
    input: &'i str,
) -> Result<O, ParseError> {
    parser
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    value.round().min(f64::from(u32::MAX)) as u32
}

/// Lowercase ASCII alphanumerics only, so `"Mini-ITX"` and `"mini itx"` agree.
pub(crate) fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parse a physical length such as `"336 mm"` or `"33.6cm"` into whole millimetres.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a non-negative length.
pub fn length_mm(input: &str) -> Result<u32, ParseError> {
    run(grammar::length_mm, input).map(whole)
}

/// Parse a power figure such as `"850W"` or `"65 watts"`.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a non-negative wattage.
pub fn watts(input: &str) -> Result<f64, ParseError> {
    run(grammar::watts, input)
}

/// Parse a clock speed such as `"5.7 GHz"` or `"2520MHz"` into MHz.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a clock speed.
pub fn clock_mhz(input: &str) -> Result<f64, ParseError> {
    run(grammar::clock_mhz, input)
}

/// Parse a capacity such as `"32GB"` or `"2 TB"` into whole gigabytes.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a capacity.
pub fn capacity_gb(input: &str) -> Result<u32, ParseError> {
    run(grammar::capacity_gb, input).map(whole)
}

/// Parse a memory kit such as `"2 x 16GB"` or `"64GB (2 x 32GB)"`.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a kit description.
pub fn memory_kit(input: &str) -> Result<MemoryKit, ParseError> {
    run(grammar::memory_kit, input)
}

/// Parse a memory technology label such as `"DDR5-6000"` or `"DDR4 3200 MHz"`.
///
/// # Errors
///
/// Returns [`ParseError`] if the text does not name a DDR generation.
pub fn memory_spec(input: &str) -> Result<MemorySpec, ParseError> {
    run(grammar::memory_spec, input)
}

/// Parse a socket compatibility list separated by `,` `/` `;` or `|`.
///
/// An empty input yields an empty list.
///
/// # Errors
///
/// Returns [`ParseError`] on characters that cannot appear in a socket id.
pub fn socket_list(input: &str) -> Result<Vec<Socket>, ParseError> {
    run(grammar::socket_list, input)
}
