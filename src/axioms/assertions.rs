//! Assertion axioms about individuals

use crate::iri::IRI;
use crate::literals::Literal;
use std::sync::Arc;

/// Class assertion axiom: a ∈ C
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassAssertionAxiom {
    class: Arc<IRI>,
    individual: Arc<IRI>,
}

impl ClassAssertionAxiom {
    /// Create a new class assertion axiom
    pub fn new(class: Arc<IRI>, individual: Arc<IRI>) -> Self {
        ClassAssertionAxiom { class, individual }
    }

    /// The asserted class
    pub fn class(&self) -> &Arc<IRI> {
        &self.class
    }

    /// The individual
    pub fn individual(&self) -> &Arc<IRI> {
        &self.individual
    }
}

/// Object property assertion axiom: (a, b) ∈ P
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPropertyAssertionAxiom {
    property: Arc<IRI>,
    subject: Arc<IRI>,
    object: Arc<IRI>,
}

impl ObjectPropertyAssertionAxiom {
    /// Create a new object property assertion axiom
    pub fn new(property: Arc<IRI>, subject: Arc<IRI>, object: Arc<IRI>) -> Self {
        ObjectPropertyAssertionAxiom {
            property,
            subject,
            object,
        }
    }

    /// The property
    pub fn property(&self) -> &Arc<IRI> {
        &self.property
    }

    /// The subject individual
    pub fn subject(&self) -> &Arc<IRI> {
        &self.subject
    }

    /// The object individual
    pub fn object(&self) -> &Arc<IRI> {
        &self.object
    }
}

/// Data property assertion axiom: (a, v) ∈ Q
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPropertyAssertionAxiom {
    property: Arc<IRI>,
    subject: Arc<IRI>,
    value: Literal,
}

impl DataPropertyAssertionAxiom {
    /// Create a new data property assertion axiom
    pub fn new(property: Arc<IRI>, subject: Arc<IRI>, value: Literal) -> Self {
        DataPropertyAssertionAxiom {
            property,
            subject,
            value,
        }
    }

    /// The property
    pub fn property(&self) -> &Arc<IRI> {
        &self.property
    }

    /// The subject individual
    pub fn subject(&self) -> &Arc<IRI> {
        &self.subject
    }

    /// The asserted value
    pub fn value(&self) -> &Literal {
        &self.value
    }
}

/// Same individual axiom: a = b
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SameIndividualAxiom {
    individuals: Vec<Arc<IRI>>,
}

impl SameIndividualAxiom {
    /// Create a new same-individual axiom
    pub fn new(individuals: Vec<Arc<IRI>>) -> Self {
        SameIndividualAxiom { individuals }
    }

    /// The individuals asserted equal
    pub fn individuals(&self) -> &[Arc<IRI>] {
        &self.individuals
    }
}

/// Different individuals axiom: a ≠ b
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DifferentIndividualsAxiom {
    individuals: Vec<Arc<IRI>>,
}

impl DifferentIndividualsAxiom {
    /// Create a new different-individuals axiom
    pub fn new(individuals: Vec<Arc<IRI>>) -> Self {
        DifferentIndividualsAxiom { individuals }
    }

    /// The individuals asserted pairwise distinct
    pub fn individuals(&self) -> &[Arc<IRI>] {
        &self.individuals
    }
}
