//! Element symbol catalogue used by the formula parsers and the
//! electronic-configuration dataset.

/// IUPAC element symbols ordered by atomic number, hydrogen through
/// oganesson.
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

pub fn atomic_number(symbol: &str) -> Option<u32> {
    ELEMENT_SYMBOLS
        .iter()
        .position(|known| *known == symbol)
        .map(|index| index as u32 + 1)
}

pub fn is_known_symbol(symbol: &str) -> bool {
    ELEMENT_SYMBOLS.contains(&symbol)
}

/// Longest known symbol at the head of `input`.
///
/// Two-letter symbols win over their one-letter prefixes, so "Co" is cobalt
/// rather than carbon followed by a stray letter. Returns `None` when the
/// head is not an uppercase ASCII letter or no catalogued symbol matches.
pub fn leading_symbol(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    let first = *bytes.first()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    if bytes.len() >= 2 && bytes[1].is_ascii_lowercase() && is_known_symbol(&input[..2]) {
        return Some(&input[..2]);
    }
    is_known_symbol(&input[..1]).then(|| &input[..1])
}
