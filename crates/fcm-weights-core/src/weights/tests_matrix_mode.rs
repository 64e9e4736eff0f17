//! Mode "matrix" derivation tests.

use crate::config::FcmConfig;
use crate::error::FcmError;
use crate::fuzzy::{defuzzify, DefuzzMethod};
use crate::types::{Concept, ExpertMatrix, LinguisticTerm};
use crate::weights::WeightMatrixBuilder;

fn concepts(labels: &[&str]) -> Vec<Concept> {
    labels.iter().map(|l| Concept::new(*l)).collect()
}

fn abc_table() -> ExpertMatrix {
    ExpertMatrix::empty(concepts(&["A", "B", "C"]))
}

#[test]
fn test_unanimous_panel_matches_the_membership_function_centroid() {
    // Three experts, all assigning H to (A, B).
    let experts = vec![
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "H"),
    ];
    let builder = WeightMatrixBuilder::with_defaults();
    let derivation = builder.from_matrix_survey(&experts).unwrap();

    let a = Concept::new("A");
    let b = Concept::new("B");
    let h = LinguisticTerm::new("H");

    let parameter = derivation.activation_for(&a, &b).unwrap();
    assert_eq!(parameter.len(), 1);
    assert_eq!(parameter.get(&h), Some(1.0));

    // Frequency 1.0 clips nothing: the aggregated set is mf[H] itself.
    let mf = derivation.membership.get(&h).unwrap();
    let aggregated = derivation.aggregated_for(&a, &b).unwrap();
    assert_eq!(aggregated.as_slice(), mf.degrees());

    let expected = defuzzify(&derivation.universe, mf.degrees(), DefuzzMethod::Centroid);
    let weight = derivation.weights.weight(&a, &b);
    assert_eq!(weight, expected);
    assert!(weight > 0.7 && weight < 0.8, "centroid of H near its center");
}

#[test]
fn test_unassigned_pair_stays_zero_with_no_diagnostics() {
    let experts = vec![
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "H"),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_matrix_survey(&experts)
        .unwrap();

    let b = Concept::new("B");
    let c = Concept::new("C");
    assert_eq!(derivation.weights.weight(&b, &c), 0.0);
    assert!(derivation.activation_for(&b, &c).is_none());
    assert!(derivation.aggregated_for(&b, &c).is_none());
    assert_eq!(derivation.fired_pairs(), 1);
}

#[test]
fn test_split_panel_frequencies() {
    let experts = vec![
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "VH"),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_matrix_survey(&experts)
        .unwrap();

    let parameter = derivation
        .activation_for(&Concept::new("A"), &Concept::new("B"))
        .unwrap();
    let h = parameter.get(&LinguisticTerm::new("H")).unwrap();
    let vh = parameter.get(&LinguisticTerm::new("VH")).unwrap();
    assert!((h - 2.0 / 3.0).abs() < 1e-12);
    assert!((vh - 1.0 / 3.0).abs() < 1e-12);
    assert!((parameter.total() - 1.0).abs() < 1e-12);
}

#[test]
fn test_pairs_are_independent() {
    let base = vec![
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "H"),
        abc_table().with_assignment("A", "B", "H"),
    ];
    let with_noise = vec![
        abc_table()
            .with_assignment("A", "B", "H")
            .with_assignment("C", "A", "-L"),
        abc_table()
            .with_assignment("A", "B", "H")
            .with_assignment("B", "C", "VH"),
        abc_table().with_assignment("A", "B", "H"),
    ];
    let builder = WeightMatrixBuilder::with_defaults();
    let plain = builder.from_matrix_survey(&base).unwrap();
    let noisy = builder.from_matrix_survey(&with_noise).unwrap();

    let a = Concept::new("A");
    let b = Concept::new("B");
    assert_eq!(plain.weights.weight(&a, &b), noisy.weights.weight(&a, &b));
}

#[test]
fn test_negative_terms_yield_negative_weights() {
    let experts = vec![
        abc_table().with_assignment("B", "A", "-VH"),
        abc_table().with_assignment("B", "A", "-VH"),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_matrix_survey(&experts)
        .unwrap();
    let weight = derivation.weights.weight(&Concept::new("B"), &Concept::new("A"));
    assert!(weight < -0.8, "unanimous -VH should sit near -1, got {weight}");
}

#[test]
fn test_diagonal_self_influence_is_respected_when_reported() {
    let experts = vec![
        abc_table().with_assignment("A", "A", "M"),
        abc_table(),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_matrix_survey(&experts)
        .unwrap();
    let a = Concept::new("A");
    assert!(derivation.weights.weight(&a, &a) > 0.0);
    let b = Concept::new("B");
    assert_eq!(derivation.weights.weight(&b, &b), 0.0);
}

#[test]
fn test_term_outside_the_configured_set_aborts_the_run() {
    let experts = vec![abc_table().with_assignment("A", "B", "XXL")];
    let result = WeightMatrixBuilder::with_defaults().from_matrix_survey(&experts);
    assert_eq!(
        result.err(),
        Some(FcmError::UnknownTerm {
            term: "XXL".to_string()
        })
    );
}

#[test]
fn test_empty_panel_yields_empty_matrix() {
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_matrix_survey(&[])
        .unwrap();
    assert!(derivation.weights.is_empty());
    assert_eq!(derivation.fired_pairs(), 0);
}

#[test]
fn test_all_weights_stay_bounded() {
    let experts = vec![
        abc_table()
            .with_assignment("A", "B", "VH")
            .with_assignment("B", "C", "-VH")
            .with_assignment("C", "A", "M"),
        abc_table()
            .with_assignment("A", "B", "VH")
            .with_assignment("B", "C", "-H")
            .with_assignment("C", "A", "-M"),
    ];
    for method in DefuzzMethod::all() {
        let builder = WeightMatrixBuilder::new(FcmConfig::default().with_method(method));
        let derivation = builder.from_matrix_survey(&experts).unwrap();
        for (_, _, weight) in derivation.weights.iter() {
            assert!((-1.0..=1.0).contains(&weight), "{method}: {weight}");
        }
    }
}
