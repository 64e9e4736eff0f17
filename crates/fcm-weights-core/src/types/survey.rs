//! Validated per-expert survey inputs, one shape per ingestion mode.
//!
//! Upstream parsing and schema validation are external collaborators; these
//! types carry data the validator has already checked (shared concept sets,
//! terms drawn from the configured list, shapes matching the declared mode).

use serde::{Deserialize, Serialize};

use crate::types::{Concept, LinguisticTerm};

/// One expert's square linguistic table (mode "matrix").
///
/// Cell `(antecedent row, consequent column)` holds the term the expert
/// assigned to that directed edge, or `None` when unassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertMatrix {
    concepts: Vec<Concept>,
    /// Row-major, `concepts.len() × concepts.len()`.
    cells: Vec<Option<LinguisticTerm>>,
}

impl ExpertMatrix {
    /// Unfilled table over the given concepts.
    pub fn empty(concepts: Vec<Concept>) -> Self {
        let dim = concepts.len();
        Self {
            concepts,
            cells: vec![None; dim * dim],
        }
    }

    /// The table's concept index, in order.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Position of a concept in this table's index.
    pub fn position(&self, concept: &Concept) -> Option<usize> {
        self.concepts.iter().position(|c| c == concept)
    }

    /// The term at (antecedent row, consequent column), by index.
    pub fn cell(&self, antecedent: usize, consequent: usize) -> Option<&LinguisticTerm> {
        self.cells
            .get(antecedent * self.concepts.len() + consequent)?
            .as_ref()
    }

    /// The term this expert assigned to the directed edge, by concept.
    pub fn term_for(&self, antecedent: &Concept, consequent: &Concept) -> Option<&LinguisticTerm> {
        let row = self.position(antecedent)?;
        let col = self.position(consequent)?;
        self.cell(row, col)
    }

    /// Assign a term to a directed edge. Returns `false` when either concept
    /// is not in this table's index.
    pub fn assign(
        &mut self,
        antecedent: &Concept,
        consequent: &Concept,
        term: LinguisticTerm,
    ) -> bool {
        let dim = self.concepts.len();
        let (Some(row), Some(col)) = (self.position(antecedent), self.position(consequent))
        else {
            return false;
        };
        self.cells[row * dim + col] = Some(term);
        true
    }

    /// Builder-style assignment by label.
    pub fn with_assignment(mut self, antecedent: &str, consequent: &str, term: &str) -> Self {
        self.assign(
            &Concept::new(antecedent),
            &Concept::new(consequent),
            LinguisticTerm::new(term),
        );
        self
    }
}

/// One expert's response to a single directed pair (mode "list").
///
/// `term` is the base (unsigned) linguistic response; `code` is the raw
/// signed numeric coding of that response, whose panel-wide mean supplies the
/// pair's polarity during sign reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListJudgment {
    /// Antecedent concept (the `From` column).
    pub from: Concept,
    /// Consequent concept (the `To` column).
    pub to: Concept,
    /// Base linguistic term the expert chose.
    pub term: LinguisticTerm,
    /// Raw signed numeric code for the response.
    pub code: f64,
}

impl ListJudgment {
    /// Create a judgment.
    pub fn new(
        from: impl Into<Concept>,
        to: impl Into<Concept>,
        term: impl Into<LinguisticTerm>,
        code: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            term: term.into(),
            code,
        }
    }
}

/// One expert's edge-list table (mode "list"): one judgment per directed pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpertListSurvey {
    /// This expert's judgments, one row per directed pair.
    pub judgments: Vec<ListJudgment>,
}

impl ExpertListSurvey {
    /// Survey from a list of judgments.
    pub fn new(judgments: Vec<ListJudgment>) -> Self {
        Self { judgments }
    }
}
