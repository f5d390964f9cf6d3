use nanotox_core::domain::StructuralRole;
use nanotox_core::reference::electron_config::{configuration_for_symbol, ORBITAL_LABELS};
use nanotox_core::reference::periodic::{atomic_number, leading_symbol};
use nanotox_core::reference::{
    candidate_charges, effective_ionic_radius_pm, metallic_radius_pm, neutral_radius_pm,
    ReferenceData, RoleVolumeTable, Species, DEFAULT_COMBINATION_BUDGET,
};

#[test]
fn periodic_lookups_match_the_catalogue() {
    assert_eq!(atomic_number("H"), Some(1));
    assert_eq!(atomic_number("Fe"), Some(26));
    assert_eq!(atomic_number("Og"), Some(118));
    assert_eq!(atomic_number("Xx"), None);

    // Two-letter symbols win over their one-letter prefixes.
    assert_eq!(leading_symbol("Co3O4"), Some("Co"));
    assert_eq!(leading_symbol("C6H9NO"), Some("C"));
    assert_eq!(leading_symbol("xenon"), None);
}

#[test]
fn radius_tables_hold_the_curated_values() {
    assert_eq!(metallic_radius_pm("Au"), Some(144.0));
    assert_eq!(metallic_radius_pm("Fe"), Some(126.0));
    assert_eq!(metallic_radius_pm("Kr"), None);

    assert_eq!(effective_ionic_radius_pm("Fe+2"), Some(61.0));
    assert_eq!(effective_ionic_radius_pm("Fe+3"), Some(55.0));
    assert_eq!(effective_ionic_radius_pm("O-2"), Some(140.0));
    // The proton carries the table's lone negative radius.
    assert_eq!(effective_ionic_radius_pm("H+1"), Some(-18.0));
    assert_eq!(effective_ionic_radius_pm("Kr+2"), None);

    assert_eq!(neutral_radius_pm("C"), Some(77.0));
    assert_eq!(neutral_radius_pm("H"), Some(32.0));
    assert_eq!(neutral_radius_pm("Kr"), None);
}

#[test]
fn candidate_charges_follow_table_order() {
    assert_eq!(candidate_charges("Fe"), vec![2, 3, 4, 6]);
    assert_eq!(candidate_charges("Ti"), vec![2, 3, 4]);
    assert_eq!(candidate_charges("O"), vec![-2]);
    assert_eq!(candidate_charges("S"), vec![-2, 4, 6]);
    assert!(candidate_charges("Kr").is_empty());
}

#[test]
fn species_labels_round_trip() {
    assert_eq!(Species::new("Fe", 3).label(), "Fe+3");
    assert_eq!(Species::new("O", -2).label(), "O-2");
    assert_eq!(Species::parse_label("Fe+3"), Some(Species::new("Fe", 3)));
    assert_eq!(Species::parse_label("O-2"), Some(Species::new("O", -2)));
    assert_eq!(Species::parse_label("Fe"), None);
}

#[test]
fn electron_configurations_fill_the_orbital_axis() {
    assert_eq!(ORBITAL_LABELS[0], "1s");
    assert_eq!(ORBITAL_LABELS[17], "7s");

    let hydrogen = configuration_for_symbol("H").expect("H configuration");
    assert_eq!(hydrogen[0], 1.0);
    assert_eq!(hydrogen.iter().sum::<f64>(), 1.0);

    let iron = configuration_for_symbol("Fe").expect("Fe configuration");
    assert_eq!(iron.iter().sum::<f64>(), 26.0);
    let three_d = ORBITAL_LABELS.iter().position(|label| *label == "3d");
    assert_eq!(iron[three_d.expect("3d slot")], 6.0);

    // Anomalous fillings: Cu takes 3d10 4s1, Pd empties 5s entirely.
    let copper = configuration_for_symbol("Cu").expect("Cu configuration");
    let four_s = ORBITAL_LABELS.iter().position(|label| *label == "4s");
    assert_eq!(copper[three_d.expect("3d slot")], 10.0);
    assert_eq!(copper[four_s.expect("4s slot")], 1.0);

    let palladium = configuration_for_symbol("Pd").expect("Pd configuration");
    let five_s = ORBITAL_LABELS.iter().position(|label| *label == "5s");
    assert_eq!(palladium[five_s.expect("5s slot")], 0.0);

    // Elements past the tabulated axis are absent rather than truncated.
    assert!(configuration_for_symbol("Og").is_none());
    assert!(configuration_for_symbol("Xx").is_none());
}

#[test]
fn builtin_role_tables_cover_the_curated_materials() {
    let reference = ReferenceData::builtin();
    assert_eq!(reference.combination_budget(), DEFAULT_COMBINATION_BUDGET);

    let core = reference.role_table(StructuralRole::Core);
    assert_eq!(core.entries().len(), 14);
    assert_eq!(core.volume_for("Fe3O4"), Some(0.04832075701785073));
    assert!(!core.contains("MgO"));

    let doping = reference.role_table(StructuralRole::Doping);
    assert_eq!(doping.entries().len(), 15);
    assert!(doping.contains("Gd"));
    assert_eq!(doping.formula_for("Gd"), None);

    let shell = reference.role_table(StructuralRole::Shell);
    assert_eq!(shell.entries().len(), 10);
    assert!(shell.contains("ZnS"));

    let coating = reference.role_table(StructuralRole::Coating);
    assert_eq!(coating.entries().len(), 7);
    assert_eq!(coating.formula_for("PEG"), Some("C2H4O"));
    assert_eq!(coating.formula_for("Oleic acid"), Some("C18H34O2"));
}

#[test]
fn role_table_overrides_replace_a_single_role() {
    let replacement = RoleVolumeTable::builtin(StructuralRole::Core);
    let reference = ReferenceData::builtin().with_role_table(replacement);
    // Other roles keep their builtin tables.
    assert!(reference
        .role_table(StructuralRole::Coating)
        .contains("PEG"));
}
