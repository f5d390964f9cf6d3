//! Species labels and radius lookups over the curated datasets.

use std::fmt::{Display, Formatter};

use super::radii_data::{EFFECTIVE_IONIC_RADII_PM, METALLIC_RADII_PM, NEUTRAL_RADII_PM};

/// An element together with its assigned formal charge.
///
/// Renders the way the curated tables are keyed: explicit sign and magnitude
/// for ions ("Fe+3", "O-2"), bare symbol for neutral atoms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Species {
    symbol: String,
    charge: i32,
}

impl Species {
    pub fn new(symbol: impl Into<String>, charge: i32) -> Self {
        Self {
            symbol: symbol.into(),
            charge,
        }
    }

    pub fn neutral(symbol: impl Into<String>) -> Self {
        Self::new(symbol, 0)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn charge(&self) -> i32 {
        self.charge
    }

    pub fn label(&self) -> String {
        if self.charge > 0 {
            format!("{}+{}", self.symbol, self.charge)
        } else if self.charge < 0 {
            format!("{}{}", self.symbol, self.charge)
        } else {
            self.symbol.clone()
        }
    }

    /// Parses a signed table label such as "Fe+2" or "O-2".
    pub fn parse_label(label: &str) -> Option<Self> {
        let (symbol, charge) = split_label(label)?;
        Some(Self::new(symbol, charge))
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

fn split_label(label: &str) -> Option<(&str, i32)> {
    let at = label.find(['+', '-'])?;
    let (symbol, charge) = label.split_at(at);
    if symbol.is_empty() {
        return None;
    }
    charge.parse().ok().map(|charge| (symbol, charge))
}

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, radius)| *radius)
}

pub fn metallic_radius_pm(symbol: &str) -> Option<f64> {
    lookup(METALLIC_RADII_PM, symbol)
}

pub fn neutral_radius_pm(symbol: &str) -> Option<f64> {
    lookup(NEUTRAL_RADII_PM, symbol)
}

pub fn effective_ionic_radius_pm(label: &str) -> Option<f64> {
    lookup(EFFECTIVE_IONIC_RADII_PM, label)
}

/// Charge candidates for `symbol`, in curated table order.
///
/// The resolver enumerates combinations in this order, so the selection
/// tie-break of "first enumerated wins" inherits the table's ordering.
pub fn candidate_charges(symbol: &str) -> Vec<i32> {
    EFFECTIVE_IONIC_RADII_PM
        .iter()
        .filter_map(|(label, _)| split_label(label))
        .filter(|(element, _)| *element == symbol)
        .map(|(_, charge)| charge)
        .collect()
}
