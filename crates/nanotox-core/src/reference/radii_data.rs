//! Curated radius datasets, all in picometres.
//!
//! Three tables cover the three estimation routes: metallic radii for pure
//! elemental particles, effective ionic radii (Shannon) keyed by signed
//! charge label for resolved oxides and salts, and neutral covalent radii
//! for carbon-bearing organics. Charge candidates for the resolver are
//! derived from the ionic table, so its row order is load-bearing and must
//! stay as curated.

pub(crate) const METALLIC_RADII_PM: &[(&str, f64)] = &[
    ("Ag", 144.0), ("Al", 143.0), ("Au", 144.0), ("B", 85.0),
    ("Ba", 224.0), ("Be", 112.0), ("Bi", 182.0), ("Br", 114.0),
    ("Ca", 197.0), ("Cd", 152.0), ("Ce", 182.0), ("Co", 125.0),
    ("Cr", 129.0), ("Cs", 272.0), ("Cu", 128.0), ("Fe", 126.0),
    ("Ga", 153.0), ("Ge", 139.0), ("Hf", 159.0), ("Hg", 155.0),
    ("In", 167.0), ("Ir", 136.0), ("K", 235.0), ("La", 188.0),
    ("Li", 157.0), ("Lu", 172.0), ("Mg", 160.0), ("Mn", 137.0),
    ("Na", 191.0), ("Ni", 125.0), ("Os", 135.0), ("Pb", 175.0),
    ("Pd", 137.0), ("Po", 153.0), ("Pt", 139.0), ("Rb", 250.0),
    ("Rh", 134.0), ("Ru", 134.0), ("Sb", 161.0), ("Sc", 164.0),
    ("Sn", 158.0), ("Sr", 215.0), ("Th", 180.0), ("Ti", 147.0),
    ("Tl", 171.0), ("U", 156.0), ("V", 135.0), ("W", 141.0),
    ("Y", 182.0), ("Zn", 137.0), ("Zr", 160.0), ("Ta", 146.0),
    ("Gd", 180.0), ("Mo", 145.0), ("Pr", 185.0), ("Sm", 185.0),
];

pub(crate) const EFFECTIVE_IONIC_RADII_PM: &[(&str, f64)] = &[
    ("H+1", -18.0), ("Li+1", 76.0), ("Be+2", 45.0), ("B+3", 27.0),
    ("C+4", 16.0), ("N-3", 146.0), ("N+3", 16.0), ("N+5", 13.0),
    ("O-2", 140.0), ("F-1", 133.0), ("F+7", 8.0), ("Na+1", 102.0),
    ("Mg+2", 72.0), ("Al+3", 53.5), ("Si+4", 40.0), ("P+3", 44.0),
    ("P+5", 38.0), ("S-2", 184.0), ("S+4", 37.0), ("S+6", 29.0),
    ("Cl-1", 181.0), ("Cl+5", 12.0), ("Cl+7", 27.0), ("K+1", 138.0),
    ("Ca+2", 100.0), ("Sc+3", 74.5), ("Ti+2", 86.0), ("Ti+3", 67.0),
    ("Ti+4", 60.5), ("V+2", 79.0), ("V+3", 64.0), ("V+4", 58.0),
    ("V+5", 54.0), ("Cr+2", 73.0), ("Cr+3", 61.5), ("Cr+4", 55.0),
    ("Cr+5", 49.0), ("Cr+6", 44.0), ("Mn+2", 67.0), ("Mn+3", 58.0),
    ("Mn+4", 53.0), ("Mn+5", 33.0), ("Mn+6", 25.5), ("Mn+7", 46.0),
    ("Fe+2", 61.0), ("Fe+3", 55.0), ("Fe+4", 58.5), ("Fe+6", 25.0),
    ("Co+2", 65.0), ("Co+3", 54.5), ("Ni+2", 69.0), ("Ni+3", 56.0),
    ("Ni+4", 48.0), ("Cu+1", 77.0), ("Cu+2", 73.0), ("Cu+3", 54.0),
    ("Zn+2", 74.0), ("Ga+3", 62.0), ("Ge+2", 73.0), ("Ge+4", 53.0),
    ("As+3", 58.0), ("As+5", 46.0), ("Se-2", 198.0), ("Se+4", 50.0),
    ("Se+6", 42.0), ("Br-1", 196.0), ("Br+3", 59.0), ("Br+5", 31.0),
    ("Br+7", 39.0), ("Rb+1", 152.0), ("Sr+2", 118.0), ("Y+3", 90.0),
    ("Zr+4", 72.0), ("Nb+3", 72.0), ("Nb+4", 68.0), ("Nb+5", 64.0),
    ("Mo+3", 69.0), ("Mo+4", 65.0), ("Mo+5", 61.0), ("Mo+6", 59.0),
    ("Tc+4", 64.5), ("Tc+5", 60.0), ("Tc+7", 56.0), ("Ru+3", 68.0),
    ("Ru+4", 62.0), ("Ru+5", 56.5), ("Ru+7", 38.0), ("Ru+8", 36.0),
    ("Rh+3", 66.5), ("Rh+4", 60.0), ("Rh+5", 55.0), ("Pd+1", 59.0),
    ("Pd+2", 86.0), ("Pd+3", 76.0), ("Pd+4", 61.5), ("Ag+1", 115.0),
    ("Ag+2", 94.0), ("Ag+3", 75.0), ("Cd+2", 95.0), ("In+3", 80.0),
    ("Sn+4", 69.0), ("Sb+3", 76.0), ("Sb+5", 60.0), ("Te-2", 221.0),
    ("Te+4", 97.0), ("Te+6", 56.0), ("I-1", 220.0), ("I+5", 95.0),
    ("I+7", 53.0), ("Xe+8", 48.0), ("Cs+1", 167.0), ("Ba+2", 135.0),
    ("La+3", 103.2), ("Ce+3", 101.0), ("Ce+4", 87.0), ("Pr+3", 99.0),
    ("Pr+4", 85.0), ("Nd+2", 129.0), ("Nd+3", 98.3), ("Pm+3", 97.0),
    ("Sm+2", 122.0), ("Sm+3", 95.8), ("Eu+2", 117.0), ("Eu+3", 94.7),
    ("Gd+3", 93.5), ("Tb+3", 92.3), ("Tb+4", 76.0), ("Dy+2", 107.0),
    ("Dy+3", 91.2), ("Ho+3", 90.1), ("Er+3", 89.0), ("Tm+2", 103.0),
    ("Tm+3", 88.0), ("Yb+2", 102.0), ("Yb+3", 86.8), ("Lu+3", 86.1),
    ("Hf+4", 71.0), ("Ta+3", 72.0), ("Ta+4", 68.0), ("Ta+5", 64.0),
    ("W+4", 66.0), ("W+5", 62.0), ("W+6", 60.0), ("Re+4", 63.0),
    ("Re+5", 58.0), ("Re+6", 55.0), ("Re+7", 53.0), ("Os+4", 63.0),
    ("Os+5", 57.5), ("Os+6", 54.5), ("Os+7", 52.5), ("Os+8", 39.0),
    ("Ir+3", 68.0), ("Ir+4", 62.5), ("Ir+5", 57.0), ("Pt+2", 80.0),
    ("Pt+4", 62.5), ("Pt+5", 57.0), ("Au+1", 137.0), ("Au+3", 85.0),
    ("Au+5", 57.0), ("Hg+1", 119.0), ("Hg+2", 102.0), ("Tl+1", 150.0),
    ("Tl+3", 88.5), ("Pb+2", 119.0), ("Pb+4", 77.5), ("Bi+3", 103.0),
    ("Bi+5", 76.0), ("Po+4", 94.0), ("Po+6", 67.0), ("At+7", 62.0),
    ("Fr+1", 180.0), ("Ra+2", 148.0), ("Ac+3", 112.0), ("Th+4", 94.0),
    ("Pa+3", 104.0), ("Pa+4", 90.0), ("Pa+5", 78.0), ("U+3", 102.5),
    ("U+4", 89.0), ("U+5", 76.0), ("U+6", 73.0), ("Np+2", 110.0),
    ("Np+3", 101.0), ("Np+4", 87.0), ("Np+5", 75.0), ("Np+6", 72.0),
    ("Np+7", 71.0), ("Pu+3", 100.0), ("Pu+4", 86.0), ("Pu+5", 74.0),
    ("Pu+6", 71.0), ("Am+2", 126.0), ("Am+3", 97.5), ("Am+4", 85.0),
    ("Cm+3", 97.0), ("Cm+4", 85.0), ("Bk+3", 96.0), ("Bk+4", 83.0),
    ("Cf+3", 95.0), ("Cf+4", 82.1), ("Es+3", 83.5),
];

pub(crate) const NEUTRAL_RADII_PM: &[(&str, f64)] = &[
    ("C", 77.0), ("H", 32.0), ("N", 70.5), ("S", 106.0),
    ("Si", 98.5), ("Zn", 137.0), ("Na", 191.0), ("Ga", 153.0),
    ("Br", 114.0), ("P", 100.0), ("O", 60.0), ("Cl", 100.0),
    ("Ag", 144.0), ("Pd", 137.0), ("Cu", 128.0), ("Pt", 139.0),
    ("Gd", 180.0), ("Au", 144.0), ("B", 85.0), ("F", 71.0),
];
