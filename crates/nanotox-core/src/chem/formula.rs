//! Molecular formula parsing.
//!
//! Two parsers share the same token shape (element symbol, optional decimal
//! count) but differ in strictness. [`Composition::parse_strict`] validates
//! against the element catalogue and rejects any input that does not reduce
//! entirely to symbol-and-count tokens; it guards everything that feeds the
//! charge resolver. [`Composition::scan_lenient`] extracts whatever
//! symbol-shaped tokens it can find and never fails; fingerprint extraction
//! uses it on free-text material names.

use crate::domain::{NanotoxError, NanotoxResult};
use crate::reference::periodic::leading_symbol;

/// One element occurrence with its accumulated count.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementCount {
    pub symbol: String,
    pub count: f64,
}

/// Parsed formula as an ordered element-to-count mapping.
///
/// Repeated occurrences of an element accumulate onto the first one, so
/// "FeOFe" holds Fe 2.0 then O 1.0. Counts default to 1.0 when the token
/// carries no digits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    entries: Vec<ElementCount>,
}

impl Composition {
    /// Parses a formula against the element catalogue.
    ///
    /// Symbols match longest-first, so "Co" is cobalt rather than carbon
    /// followed by a stray letter. The scan skips characters it cannot match,
    /// then demands that the matched tokens rejoin to the input exactly; any
    /// leftover character (including surrounding whitespace) is an
    /// `InvalidFormula` error, as is a count that does not parse as a number.
    pub fn parse_strict(formula: &str) -> NanotoxResult<Self> {
        let tokens = tokenize(formula);
        if tokens.is_empty() {
            return Err(NanotoxError::invalid_formula(
                formula,
                format!("'{formula}' contains no catalogued element symbols"),
            ));
        }

        let rejoined: String = tokens
            .iter()
            .flat_map(|(symbol, count)| [*symbol, *count])
            .collect();
        if rejoined != formula {
            return Err(NanotoxError::invalid_formula(
                formula,
                format!("'{formula}' contains characters outside element and count tokens"),
            ));
        }

        let mut entries: Vec<ElementCount> = Vec::new();
        for (symbol, raw_count) in tokens {
            let count = if raw_count.is_empty() {
                1.0
            } else {
                raw_count.parse::<f64>().map_err(|_| {
                    NanotoxError::invalid_formula(
                        formula,
                        format!("element count '{raw_count}' in '{formula}' is not a number"),
                    )
                })?
            };
            accumulate(&mut entries, symbol, count);
        }

        Ok(Self { entries })
    }

    /// Extracts element tokens from free text, ignoring everything else.
    ///
    /// Any uppercase-then-lowercase run counts as a symbol here, catalogued
    /// or not; unparseable counts fall back to 1.0. Downstream lookups decide
    /// what to do with symbols that have no curated data.
    pub fn scan_lenient(text: &str) -> Self {
        let mut entries: Vec<ElementCount> = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let Some(symbol_len) = lenient_symbol_len(rest) else {
                rest = &rest[next_char_boundary(rest)..];
                continue;
            };
            let (symbol, after_symbol) = rest.split_at(symbol_len);
            let count_len = leading_count_len(after_symbol);
            let raw_count = &after_symbol[..count_len];
            let count = if raw_count.is_empty() {
                1.0
            } else {
                raw_count.parse::<f64>().unwrap_or(1.0)
            };
            accumulate(&mut entries, symbol, count);
            rest = &after_symbol[count_len..];
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[ElementCount] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, symbol: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.count)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.count_of(symbol).is_some()
    }

    pub fn oxygen_count(&self) -> f64 {
        self.count_of("O").unwrap_or(0.0)
    }

    /// True when any element count has a fractional part. Such formulas take
    /// the non-combinatorial charge resolution path.
    pub fn has_fractional_counts(&self) -> bool {
        self.entries.iter().any(|entry| entry.count.fract() != 0.0)
    }
}

fn accumulate(entries: &mut Vec<ElementCount>, symbol: &str, count: f64) {
    match entries.iter_mut().find(|entry| entry.symbol == symbol) {
        Some(entry) => entry.count += count,
        None => entries.push(ElementCount {
            symbol: symbol.to_string(),
            count,
        }),
    }
}

/// Catalogue-checked scan: (symbol, count-as-written) pairs, skipping over
/// characters that match nothing. The caller compares the rejoined tokens
/// against the input to detect skips.
fn tokenize(formula: &str) -> Vec<(&str, &str)> {
    let mut tokens = Vec::new();
    let mut rest = formula;
    while !rest.is_empty() {
        let Some(symbol) = leading_symbol(rest) else {
            rest = &rest[next_char_boundary(rest)..];
            continue;
        };
        let after_symbol = &rest[symbol.len()..];
        let count_len = leading_count_len(after_symbol);
        tokens.push((symbol, &after_symbol[..count_len]));
        rest = &after_symbol[count_len..];
    }
    tokens
}

/// Length of the leading decimal-count run: digits, at most one dot, digits.
fn leading_count_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut length = 0;
    let mut seen_dot = false;
    while length < bytes.len() {
        let byte = bytes[length];
        if byte.is_ascii_digit() {
            length += 1;
        } else if byte == b'.' && !seen_dot {
            seen_dot = true;
            length += 1;
        } else {
            break;
        }
    }
    length
}

/// Length of a leading uppercase-then-lowercase run, catalogue or not.
fn lenient_symbol_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if !bytes.first()?.is_ascii_uppercase() {
        return None;
    }
    let mut length = 1;
    while length < bytes.len() && bytes[length].is_ascii_lowercase() {
        length += 1;
    }
    Some(length)
}

fn next_char_boundary(input: &str) -> usize {
    input
        .char_indices()
        .nth(1)
        .map_or(input.len(), |(index, _)| index)
}
