//! Mode "list" derivation tests, including matrix/list interchangeability.

use crate::types::{Concept, ExpertListSurvey, ExpertMatrix, LinguisticTerm, ListJudgment};
use crate::weights::WeightMatrixBuilder;

fn concepts(labels: &[&str]) -> Vec<Concept> {
    labels.iter().map(|l| Concept::new(*l)).collect()
}

/// One judgment per expert: positive responses coded +1, negative -1.
fn survey(rows: &[(&str, &str, &str, f64)]) -> ExpertListSurvey {
    ExpertListSurvey::new(
        rows.iter()
            .map(|&(from, to, term, code)| ListJudgment::new(from, to, term, code))
            .collect(),
    )
}

#[test]
fn test_unanimous_positive_pair() {
    let experts = vec![
        survey(&[("A", "B", "H", 1.0), ("B", "A", "L", 1.0)]),
        survey(&[("A", "B", "H", 1.0), ("B", "A", "L", 1.0)]),
        survey(&[("A", "B", "H", 1.0), ("B", "A", "L", 1.0)]),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_list_survey(&experts)
        .unwrap();

    let a = Concept::new("A");
    let b = Concept::new("B");
    let parameter = derivation.activation_for(&a, &b).unwrap();
    assert_eq!(parameter.get(&LinguisticTerm::new("H")), Some(1.0));
    assert!(derivation.weights.weight(&a, &b) > 0.7);
    assert!(derivation.weights.weight(&b, &a) > 0.0);
    assert_eq!(derivation.weights.dim(), 2);
}

#[test]
fn test_negative_codes_reconstruct_signed_terms() {
    let experts = vec![
        survey(&[("A", "B", "H", -1.0), ("B", "A", "L", 1.0)]),
        survey(&[("A", "B", "H", -1.0), ("B", "A", "L", 1.0)]),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_list_survey(&experts)
        .unwrap();

    let a = Concept::new("A");
    let b = Concept::new("B");
    let parameter = derivation.activation_for(&a, &b).unwrap();
    // Frequency 1.0 times mean -1.0: the sign moves into the label.
    assert_eq!(parameter.get(&LinguisticTerm::new("-H")), Some(1.0));
    assert_eq!(parameter.get(&LinguisticTerm::new("H")), None);
    assert!(derivation.weights.weight(&a, &b) < -0.7);
}

#[test]
fn test_mixed_sign_panel_cancels_to_zero() {
    // Two experts, same term, opposite polarity: mean code is 0, every
    // reconstructed magnitude is 0, no rule fires. The activation parameter
    // is still logged (known approximation of the sign heuristic).
    let experts = vec![
        survey(&[("A", "B", "H", 1.0), ("B", "A", "L", 1.0)]),
        survey(&[("A", "B", "H", -1.0), ("B", "A", "L", 1.0)]),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_list_survey(&experts)
        .unwrap();

    let a = Concept::new("A");
    let b = Concept::new("B");
    assert_eq!(derivation.weights.weight(&a, &b), 0.0);
    let parameter = derivation.activation_for(&a, &b).unwrap();
    assert!(parameter.all_zero());
    assert!(derivation.aggregated_for(&a, &b).is_none());
}

#[test]
fn test_matrix_and_list_modes_agree_on_equivalent_data() {
    // Same panel expressed in both shapes: 2 of 3 experts say H, one says
    // VH for (A, B); all say -L for (B, C); (C, A) gets M from one expert.
    let matrix_experts = vec![
        ExpertMatrix::empty(concepts(&["A", "B", "C"]))
            .with_assignment("A", "B", "H")
            .with_assignment("B", "C", "-L")
            .with_assignment("C", "A", "M"),
        ExpertMatrix::empty(concepts(&["A", "B", "C"]))
            .with_assignment("A", "B", "H")
            .with_assignment("B", "C", "-L"),
        ExpertMatrix::empty(concepts(&["A", "B", "C"]))
            .with_assignment("A", "B", "VH")
            .with_assignment("B", "C", "-L"),
    ];
    let list_experts = vec![
        survey(&[
            ("A", "B", "H", 1.0),
            ("B", "C", "L", -1.0),
            ("C", "A", "M", 1.0),
        ]),
        survey(&[("A", "B", "H", 1.0), ("B", "C", "L", -1.0)]),
        survey(&[("A", "B", "VH", 1.0), ("B", "C", "L", -1.0)]),
    ];

    let builder = WeightMatrixBuilder::with_defaults();
    let from_matrix = builder.from_matrix_survey(&matrix_experts).unwrap();
    let from_list = builder.from_list_survey(&list_experts).unwrap();

    for antecedent in ["A", "B", "C"] {
        for consequent in ["A", "B", "C"] {
            let ant = Concept::new(antecedent);
            let cons = Concept::new(consequent);
            let m = from_matrix.weights.weight(&ant, &cons);
            let l = from_list.weights.weight(&ant, &cons);
            assert!(
                (m - l).abs() < 1e-9,
                "({antecedent}, {consequent}): matrix {m} vs list {l}"
            );
        }
    }
}

#[test]
fn test_dimension_counts_distinct_from_concepts() {
    // D only ever appears as a To: it gets no row/column, and the (A, D)
    // weight is dropped.
    let experts = vec![survey(&[("A", "B", "H", 1.0), ("A", "D", "L", 1.0)]), {
        survey(&[("B", "A", "M", 1.0)])
    }];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_list_survey(&experts)
        .unwrap();
    assert_eq!(derivation.weights.dim(), 2);
    assert!(!derivation.weights.contains(&Concept::new("D")));
    // The pair was still tallied and logged.
    assert!(derivation
        .activation_for(&Concept::new("A"), &Concept::new("D"))
        .is_some());
}

#[test]
fn test_empty_panel_yields_empty_matrix() {
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_list_survey(&[])
        .unwrap();
    assert!(derivation.weights.is_empty());
    assert_eq!(derivation.fired_pairs(), 0);
}

#[test]
fn test_partial_panel_frequency_scales_the_weight() {
    // Only one of two experts responded on (A, B): frequency 0.5 clips the
    // membership function, pulling the centroid toward the clipped plateau's
    // center but keeping it positive.
    let experts = vec![
        survey(&[("A", "B", "H", 1.0), ("B", "A", "L", 1.0)]),
        survey(&[("B", "A", "L", 1.0)]),
    ];
    let derivation = WeightMatrixBuilder::with_defaults()
        .from_list_survey(&experts)
        .unwrap();
    let weight = derivation
        .weights
        .weight(&Concept::new("A"), &Concept::new("B"));
    assert!(weight > 0.0 && weight < 1.0);
}
