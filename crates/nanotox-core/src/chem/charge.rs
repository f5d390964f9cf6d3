//! Charge combination resolution.
//!
//! Oxygen fixes the compensating charge at -2 per atom; every other element
//! draws candidate charges from the effective-ionic-radius table. Integral
//! formulas enumerate same-size charge multisets per metal and walk their
//! Cartesian product; fractional formulas assign one charge per metal and
//! weight by the fractional counts. Exact balances win over approximate
//! ones, and the stability selector picks within the surviving pool.

use crate::chem::formula::Composition;
use crate::chem::stability::{charge_spread, deviation_sum, ideal_charge_per_atom, SelectionKey};
use crate::domain::{NanotoxError, NanotoxResult};
use crate::numerics::round_to_decimals;
use crate::reference::{candidate_charges, ReferenceData, Species};

/// Charge per oxygen atom.
const OXYGEN_CHARGE: f64 = -2.0;

/// Widest total deviation a combination may have and still classify.
const APPROXIMATE_DEVIATION_LIMIT: f64 = 2.0;

/// How well the winning combination balances the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeClassification {
    Exact,
    Approximate,
}

impl ChargeClassification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Approximate => "approximate",
        }
    }
}

impl std::fmt::Display for ChargeClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// One charged species with the number of atoms carrying that charge. On the
/// fractional path the count is the element's fractional stoichiometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeAssignment {
    pub species: Species,
    pub count: f64,
}

/// Winning charge combination for a formula.
///
/// Assignments keep the formula's element order, metals first and oxygen
/// last; the deviation is the signed residual charge (rounded to two
/// decimals on the fractional path).
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeResolution {
    pub formula: String,
    pub classification: ChargeClassification,
    pub charge_deviation: f64,
    pub assignments: Vec<ChargeAssignment>,
}

struct MetalSlot {
    symbol: String,
    count: f64,
    candidates: Vec<i32>,
}

struct ScoredCandidate {
    positions: Vec<usize>,
    deviation: f64,
    key: SelectionKey,
}

/// Resolves the charge combination for a parsed formula.
pub fn resolve_charges(
    formula: &str,
    composition: &Composition,
    reference: &ReferenceData,
) -> NanotoxResult<ChargeResolution> {
    let metals: Vec<MetalSlot> = composition
        .entries()
        .iter()
        .filter(|entry| entry.symbol != "O")
        .map(|entry| MetalSlot {
            symbol: entry.symbol.clone(),
            count: entry.count,
            candidates: candidate_charges(&entry.symbol),
        })
        .collect();
    let oxygen_count = composition.oxygen_count();
    let oxygen_charge = OXYGEN_CHARGE * oxygen_count;
    let budget = reference.combination_budget();

    if composition.has_fractional_counts() {
        resolve_fractional(formula, &metals, oxygen_count, oxygen_charge, budget)
    } else {
        resolve_integral(formula, &metals, oxygen_count, oxygen_charge, budget)
    }
}

/// Integral path: per-metal charge multisets of the metal's atom count,
/// combined across metals with the rightmost metal varying fastest.
fn resolve_integral(
    formula: &str,
    metals: &[MetalSlot],
    oxygen_count: f64,
    oxygen_charge: f64,
    budget: u64,
) -> NanotoxResult<ChargeResolution> {
    let picks: Vec<u64> = metals.iter().map(|slot| slot.count as u64).collect();
    ensure_within_budget(formula, predicted_combination_count(metals, &picks), budget)?;

    // Materialised once; candidates sit in nondecreasing index order, so the
    // enumeration order every tie-break falls back on is deterministic.
    let per_metal: Vec<Vec<Vec<i32>>> = metals
        .iter()
        .zip(&picks)
        .map(|(slot, &atom_count)| {
            MultisetIndices::new(slot.candidates.len(), atom_count as usize)
                .map(|indices| {
                    indices
                        .iter()
                        .map(|&index| slot.candidates[index])
                        .collect()
                })
                .collect()
        })
        .collect();

    let mut exact: Vec<(Vec<usize>, f64)> = Vec::new();
    let mut approximate: Vec<(Vec<usize>, f64)> = Vec::new();
    let lengths: Vec<usize> = per_metal.iter().map(Vec::len).collect();
    for positions in IndexOdometer::new(lengths) {
        let total: i64 = positions
            .iter()
            .zip(&per_metal)
            .map(|(&position, multisets)| {
                multisets[position]
                    .iter()
                    .map(|&charge| i64::from(charge))
                    .sum::<i64>()
            })
            .sum();
        let deviation = total as f64 + oxygen_charge;
        if deviation == 0.0 {
            exact.push((positions, deviation));
        } else if deviation.abs() <= APPROXIMATE_DEVIATION_LIMIT {
            approximate.push((positions, deviation));
        }
    }

    let (pool, classification) = classify_pools(exact, approximate);
    let total_metal_atoms: f64 = metals.iter().map(|slot| slot.count).sum();
    let ideal = ideal_charge_per_atom(oxygen_charge.abs(), total_metal_atoms);

    let score_candidate = |positions: Vec<usize>, deviation: f64| -> ScoredCandidate {
        let mut score = 0.0;
        let mut flattened: Vec<i32> = Vec::new();
        for (metal_index, &position) in positions.iter().enumerate() {
            let charges = &per_metal[metal_index][position];
            score += metals[metal_index].count * deviation_sum(charges, ideal);
            flattened.extend_from_slice(charges);
        }
        ScoredCandidate {
            key: SelectionKey::new(score, charge_spread(&flattened)),
            positions,
            deviation,
        }
    };

    let best = select_best(formula, pool, score_candidate)?;

    let mut assignments = Vec::new();
    for (metal_index, &position) in best.positions.iter().enumerate() {
        let slot = &metals[metal_index];
        for (charge, multiplicity) in group_charges(&per_metal[metal_index][position]) {
            assignments.push(ChargeAssignment {
                species: Species::new(&slot.symbol, charge),
                count: multiplicity as f64,
            });
        }
    }
    push_oxygen(&mut assignments, oxygen_count);

    Ok(ChargeResolution {
        formula: formula.to_string(),
        classification,
        charge_deviation: best.deviation,
        assignments,
    })
}

/// Fractional path: one candidate charge per metal, totals weighted by the
/// fractional counts and rounded to two decimals before classification.
fn resolve_fractional(
    formula: &str,
    metals: &[MetalSlot],
    oxygen_count: f64,
    oxygen_charge: f64,
    budget: u64,
) -> NanotoxResult<ChargeResolution> {
    let mut predicted: Option<u128> = Some(1);
    for slot in metals {
        predicted = predicted.and_then(|count| count.checked_mul(slot.candidates.len() as u128));
    }
    ensure_within_budget(formula, predicted, budget)?;

    let mut exact: Vec<(Vec<usize>, f64)> = Vec::new();
    let mut approximate: Vec<(Vec<usize>, f64)> = Vec::new();
    let lengths: Vec<usize> = metals.iter().map(|slot| slot.candidates.len()).collect();
    for positions in IndexOdometer::new(lengths) {
        let total: f64 = positions
            .iter()
            .enumerate()
            .map(|(metal_index, &position)| {
                let slot = &metals[metal_index];
                slot.count * f64::from(slot.candidates[position])
            })
            .sum();
        let deviation = round_to_decimals(total + oxygen_charge, 2);
        if deviation == 0.0 {
            exact.push((positions, deviation));
        } else if deviation.abs() <= APPROXIMATE_DEVIATION_LIMIT {
            approximate.push((positions, deviation));
        }
    }

    let (pool, classification) = classify_pools(exact, approximate);

    let score_candidate = |positions: Vec<usize>, deviation: f64| -> ScoredCandidate {
        let charges: Vec<i32> = positions
            .iter()
            .enumerate()
            .map(|(metal_index, &position)| metals[metal_index].candidates[position])
            .collect();
        ScoredCandidate {
            key: SelectionKey::new(deviation.abs(), charge_spread(&charges)),
            positions,
            deviation,
        }
    };

    let best = select_best(formula, pool, score_candidate)?;

    let mut assignments = Vec::new();
    for (metal_index, &position) in best.positions.iter().enumerate() {
        let slot = &metals[metal_index];
        assignments.push(ChargeAssignment {
            species: Species::new(&slot.symbol, slot.candidates[position]),
            count: slot.count,
        });
    }
    push_oxygen(&mut assignments, oxygen_count);

    Ok(ChargeResolution {
        formula: formula.to_string(),
        classification,
        charge_deviation: best.deviation,
        assignments,
    })
}

fn classify_pools(
    exact: Vec<(Vec<usize>, f64)>,
    approximate: Vec<(Vec<usize>, f64)>,
) -> (Vec<(Vec<usize>, f64)>, ChargeClassification) {
    if exact.is_empty() {
        (approximate, ChargeClassification::Approximate)
    } else {
        (exact, ChargeClassification::Exact)
    }
}

/// Scores the pool and keeps the first strictly-best candidate. An empty
/// pool means no combination classified at all.
fn select_best(
    formula: &str,
    pool: Vec<(Vec<usize>, f64)>,
    score_candidate: impl Fn(Vec<usize>, f64) -> ScoredCandidate,
) -> NanotoxResult<ScoredCandidate> {
    let mut candidates = pool.into_iter();
    let Some((first_positions, first_deviation)) = candidates.next() else {
        return Err(NanotoxError::unresolvable_charge(formula));
    };
    let mut best = score_candidate(first_positions, first_deviation);
    for (positions, deviation) in candidates {
        let scored = score_candidate(positions, deviation);
        if scored.key.improves_on(&best.key) {
            best = scored;
        }
    }
    Ok(best)
}

fn push_oxygen(assignments: &mut Vec<ChargeAssignment>, oxygen_count: f64) {
    if oxygen_count > 0.0 {
        assignments.push(ChargeAssignment {
            species: Species::new("O", -2),
            count: oxygen_count,
        });
    }
}

/// Groups a charge multiset into (charge, multiplicity) pairs in
/// first-occurrence order.
fn group_charges(charges: &[i32]) -> Vec<(i32, usize)> {
    let mut groups: Vec<(i32, usize)> = Vec::new();
    for &charge in charges {
        match groups.iter_mut().find(|(existing, _)| *existing == charge) {
            Some((_, multiplicity)) => *multiplicity += 1,
            None => groups.push((charge, 1)),
        }
    }
    groups
}

fn ensure_within_budget(
    formula: &str,
    predicted: Option<u128>,
    budget: u64,
) -> NanotoxResult<()> {
    match predicted {
        Some(count) if count <= u128::from(budget) => Ok(()),
        Some(count) => Err(NanotoxError::combination_budget(formula, count, budget)),
        // Overflowing u128 puts the prediction beyond any configurable budget.
        None => Err(NanotoxError::combination_budget(formula, u128::MAX, budget)),
    }
}

fn predicted_combination_count(metals: &[MetalSlot], picks: &[u64]) -> Option<u128> {
    let mut product: u128 = 1;
    for (slot, &atom_count) in metals.iter().zip(picks) {
        let count = multiset_count(slot.candidates.len() as u64, atom_count)?;
        product = product.checked_mul(count)?;
    }
    Some(product)
}

/// Number of size-`picks` multisets over `options` distinct values,
/// `C(options + picks - 1, picks)`.
///
/// Computed over the `options - 1` factor form so the loop length tracks the
/// candidate list rather than the atom count, and every intermediate
/// division is exact.
fn multiset_count(options: u64, picks: u64) -> Option<u128> {
    if picks == 0 {
        return Some(1);
    }
    if options == 0 {
        return Some(0);
    }
    let mut count: u128 = 1;
    for step in 1..options {
        count = count.checked_mul(u128::from(picks) + u128::from(step))?;
        count /= u128::from(step);
    }
    Some(count)
}

/// Size-`picks` multisets over `0..options`, emitted as nondecreasing index
/// vectors in lexicographic order.
struct MultisetIndices {
    options: usize,
    current: Option<Vec<usize>>,
}

impl MultisetIndices {
    fn new(options: usize, picks: usize) -> Self {
        let current = if picks == 0 {
            Some(Vec::new())
        } else if options == 0 {
            None
        } else {
            Some(vec![0; picks])
        };
        Self { options, current }
    }
}

impl Iterator for MultisetIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.current.take()?;
        if let Some(pivot) = current
            .iter()
            .rposition(|&index| index + 1 < self.options)
        {
            let mut next = current.clone();
            let bumped = next[pivot] + 1;
            for slot in next.iter_mut().skip(pivot) {
                *slot = bumped;
            }
            self.current = Some(next);
        }
        Some(current)
    }
}

/// Cartesian product over index ranges, rightmost position fastest. Zero
/// ranges produce the single empty combination, which is how formulas
/// without metals flow through the resolver.
struct IndexOdometer {
    lengths: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl IndexOdometer {
    fn new(lengths: Vec<usize>) -> Self {
        let current = if lengths.iter().any(|&length| length == 0) {
            None
        } else {
            Some(vec![0; lengths.len()])
        };
        Self { lengths, current }
    }
}

impl Iterator for IndexOdometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.current.take()?;
        let mut next = current.clone();
        for position in (0..next.len()).rev() {
            next[position] += 1;
            if next[position] < self.lengths[position] {
                self.current = Some(next);
                return Some(current);
            }
            next[position] = 0;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        multiset_count, resolve_charges, ChargeClassification, ChargeResolution, IndexOdometer,
        MultisetIndices,
    };
    use crate::chem::formula::Composition;
    use crate::domain::NanotoxResult;
    use crate::reference::ReferenceData;

    fn resolve(formula: &str) -> NanotoxResult<ChargeResolution> {
        let reference = ReferenceData::builtin();
        let composition = Composition::parse_strict(formula)?;
        resolve_charges(formula, &composition, &reference)
    }

    fn labelled(resolution: &ChargeResolution) -> Vec<(String, f64)> {
        resolution
            .assignments
            .iter()
            .map(|assignment| (assignment.species.label(), assignment.count))
            .collect()
    }

    #[test]
    fn magnetite_selects_the_mixed_valence_multiset() {
        let resolution = resolve("Fe3O4").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Exact);
        assert_eq!(resolution.charge_deviation, 0.0);
        assert_eq!(
            labelled(&resolution),
            vec![
                ("Fe+2".to_string(), 1.0),
                ("Fe+3".to_string(), 2.0),
                ("O-2".to_string(), 4.0),
            ]
        );
    }

    #[test]
    fn cuprous_oxide_balances_exactly() {
        let resolution = resolve("Cu2O").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Exact);
        assert_eq!(
            labelled(&resolution),
            vec![("Cu+1".to_string(), 2.0), ("O-2".to_string(), 1.0)]
        );
    }

    #[test]
    fn multi_metal_perovskite_balances_exactly() {
        let resolution = resolve("BaTiO3").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Exact);
        assert_eq!(
            labelled(&resolution),
            vec![
                ("Ba+2".to_string(), 1.0),
                ("Ti+4".to_string(), 1.0),
                ("O-2".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn oxygen_free_formulas_balance_against_zero() {
        let resolution = resolve("CdSe").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Exact);
        assert_eq!(resolution.charge_deviation, 0.0);
        assert_eq!(
            labelled(&resolution),
            vec![("Cd+2".to_string(), 1.0), ("Se-2".to_string(), 1.0)]
        );
    }

    #[test]
    fn peroxide_falls_back_to_approximate() {
        let resolution = resolve("MgO2").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Approximate);
        assert_eq!(resolution.charge_deviation, -2.0);
        assert_eq!(
            labelled(&resolution),
            vec![("Mg+2".to_string(), 1.0), ("O-2".to_string(), 2.0)]
        );
    }

    #[test]
    fn lone_oxygen_atom_is_approximate() {
        let resolution = resolve("O").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Approximate);
        assert_eq!(resolution.charge_deviation, -2.0);
        assert_eq!(labelled(&resolution), vec![("O-2".to_string(), 1.0)]);
    }

    #[test]
    fn unbalanceable_formulas_are_fatal() {
        for formula in ["NaO2", "KrO", "InP", "O2"] {
            let error = resolve(formula).unwrap_err();
            assert_eq!(error.kind().code(), "RUN.UNRESOLVABLE_CHARGE", "{formula}");
            assert_eq!(error.subject(), formula);
        }
    }

    #[test]
    fn fractional_counts_weight_the_total() {
        let resolution = resolve("Fe0.5Zn0.5O").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Exact);
        assert_eq!(
            labelled(&resolution),
            vec![
                ("Fe+2".to_string(), 0.5),
                ("Zn+2".to_string(), 0.5),
                ("O-2".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn fractional_deviation_rounds_to_two_decimals() {
        let resolution = resolve("La0.7Sr0.3MnO3").unwrap();
        assert_eq!(resolution.classification, ChargeClassification::Approximate);
        assert_eq!(resolution.charge_deviation, -0.3);
        assert_eq!(
            labelled(&resolution),
            vec![
                ("La+3".to_string(), 0.7),
                ("Sr+2".to_string(), 0.3),
                ("Mn+3".to_string(), 1.0),
                ("O-2".to_string(), 3.0),
            ]
        );

        let wustite = resolve("Fe0.98O").unwrap();
        assert_eq!(wustite.classification, ChargeClassification::Approximate);
        assert_eq!(wustite.charge_deviation, -0.04);
        assert_eq!(
            labelled(&wustite),
            vec![("Fe+2".to_string(), 0.98), ("O-2".to_string(), 1.0)]
        );
    }

    #[test]
    fn repeated_resolution_returns_identical_results() {
        for formula in ["Fe3O4", "BaTiO3", "La0.7Sr0.3MnO3"] {
            let first = resolve(formula).unwrap();
            for _ in 0..3 {
                assert_eq!(resolve(formula).unwrap(), first, "{formula}");
            }
        }
    }

    #[test]
    fn oversized_enumerations_fail_before_running() {
        let reference = ReferenceData::builtin();
        let composition = Composition::parse_strict("U100O200").unwrap();
        let error = resolve_charges("U100O200", &composition, &reference).unwrap_err();
        assert_eq!(error.kind().code(), "RUN.COMBINATION_BUDGET");
        assert!(error.message().contains("176851"));
    }

    #[test]
    fn budget_is_configurable() {
        let reference = ReferenceData::builtin().with_combination_budget(10);
        let composition = Composition::parse_strict("Fe3O4").unwrap();
        let error = resolve_charges("Fe3O4", &composition, &reference).unwrap_err();
        assert_eq!(error.kind().code(), "RUN.COMBINATION_BUDGET");
        assert!(error.message().contains("20"));
    }

    #[test]
    fn multiset_counts_match_closed_forms() {
        assert_eq!(multiset_count(4, 3), Some(20));
        assert_eq!(multiset_count(4, 100), Some(176_851));
        assert_eq!(multiset_count(1, 1_000_000), Some(1));
        assert_eq!(multiset_count(5, 0), Some(1));
        assert_eq!(multiset_count(0, 3), Some(0));
    }

    #[test]
    fn multiset_enumeration_is_nondecreasing_and_complete() {
        let combos: Vec<Vec<usize>> = MultisetIndices::new(3, 2).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2],
            ]
        );

        let empty_pick: Vec<Vec<usize>> = MultisetIndices::new(3, 0).collect();
        assert_eq!(empty_pick, vec![Vec::<usize>::new()]);

        let no_options: Vec<Vec<usize>> = MultisetIndices::new(0, 2).collect();
        assert!(no_options.is_empty());
    }

    #[test]
    fn odometer_varies_the_rightmost_position_fastest() {
        let combos: Vec<Vec<usize>> = IndexOdometer::new(vec![2, 3]).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );

        let empty: Vec<Vec<usize>> = IndexOdometer::new(Vec::new()).collect();
        assert_eq!(empty, vec![Vec::<usize>::new()]);

        let blocked: Vec<Vec<usize>> = IndexOdometer::new(vec![2, 0]).collect();
        assert!(blocked.is_empty());
    }
}
