//! Asserted axioms - logical statements about entities
//!
//! Defines the axiom kinds the ontology processor extracts: entity
//! declarations, assertions about individuals, class and property hierarchy
//! statements, property characteristics, domains and ranges, and SWRL rules.
//! Every axiom reports the entities it references so declaration axioms can
//! be synthesized for them.

pub mod assertions;
pub mod properties;

pub use assertions::*;
pub use properties::*;

use crate::entities::{EntityKind, OwlEntity};
use crate::iri::IRI;
use crate::rules::SwrlRule;
use std::fmt;
use std::sync::Arc;

/// Axiom type identifiers for indexing and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxiomType {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    ClassAssertion,
    ObjectPropertyAssertion,
    DataPropertyAssertion,
    SameIndividual,
    DifferentIndividuals,
    SubObjectPropertyOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    TransitiveObjectProperty,
    SymmetricObjectProperty,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    IrreflexiveObjectProperty,
    AsymmetricObjectProperty,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    FunctionalDataProperty,
    DataPropertyDomain,
    DataPropertyRange,
    Rule,
}

/// An entity declaration axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationAxiom {
    entity: OwlEntity,
}

impl DeclarationAxiom {
    /// Create a new declaration axiom
    pub fn new(entity: OwlEntity) -> Self {
        DeclarationAxiom { entity }
    }

    /// The declared entity
    pub fn entity(&self) -> &OwlEntity {
        &self.entity
    }

    /// The declared entity's kind
    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }
}

/// Subclass axiom: C ⊑ D
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubClassOfAxiom {
    sub_class: Arc<IRI>,
    super_class: Arc<IRI>,
}

impl SubClassOfAxiom {
    /// Create a new subclass axiom
    pub fn new(sub_class: Arc<IRI>, super_class: Arc<IRI>) -> Self {
        SubClassOfAxiom {
            sub_class,
            super_class,
        }
    }

    /// The subclass
    pub fn sub_class(&self) -> &Arc<IRI> {
        &self.sub_class
    }

    /// The superclass
    pub fn super_class(&self) -> &Arc<IRI> {
        &self.super_class
    }
}

/// Equivalent classes axiom: C ≡ D
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquivalentClassesAxiom {
    classes: Vec<Arc<IRI>>,
}

impl EquivalentClassesAxiom {
    /// Create a new equivalent classes axiom
    pub fn new(classes: Vec<Arc<IRI>>) -> Self {
        EquivalentClassesAxiom { classes }
    }

    /// The equivalent classes
    pub fn classes(&self) -> &[Arc<IRI>] {
        &self.classes
    }
}

/// Asserted axiom kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    /// Entity declaration
    Declaration(Box<DeclarationAxiom>),
    /// Subclass axiom: C ⊑ D
    SubClassOf(Box<SubClassOfAxiom>),
    /// Equivalent classes axiom: C ≡ D
    EquivalentClasses(Box<EquivalentClassesAxiom>),
    /// Class assertion: a ∈ C
    ClassAssertion(Box<ClassAssertionAxiom>),
    /// Object property assertion: (a, b) ∈ P
    ObjectPropertyAssertion(Box<ObjectPropertyAssertionAxiom>),
    /// Data property assertion: (a, v) ∈ Q
    DataPropertyAssertion(Box<DataPropertyAssertionAxiom>),
    /// Same individual axiom: a = b
    SameIndividual(Box<SameIndividualAxiom>),
    /// Different individuals axiom: a ≠ b
    DifferentIndividuals(Box<DifferentIndividualsAxiom>),
    /// Subproperty axiom: P ⊑ Q
    SubObjectPropertyOf(Box<SubObjectPropertyOfAxiom>),
    /// Equivalent object properties axiom: P ≡ Q
    EquivalentObjectProperties(Box<EquivalentObjectPropertiesAxiom>),
    /// Disjoint object properties axiom: P ⊓ Q ⊑ ⊥
    DisjointObjectProperties(Box<DisjointObjectPropertiesAxiom>),
    /// Transitive property axiom: P⁺ ⊑ P
    TransitiveObjectProperty(Box<TransitiveObjectPropertyAxiom>),
    /// Symmetric property axiom: P ≡ P⁻
    SymmetricObjectProperty(Box<SymmetricObjectPropertyAxiom>),
    /// Functional property axiom: ⊤ ⊑ ≤1P
    FunctionalObjectProperty(Box<FunctionalObjectPropertyAxiom>),
    /// Inverse functional property axiom: ⊤ ⊑ ≤1P⁻
    InverseFunctionalObjectProperty(Box<InverseFunctionalObjectPropertyAxiom>),
    /// Irreflexive property axiom: ⊥ ⊑ ∃P.Self
    IrreflexiveObjectProperty(Box<IrreflexiveObjectPropertyAxiom>),
    /// Asymmetric property axiom: P ⊓ P⁻ ⊑ ⊥
    AsymmetricObjectProperty(Box<AsymmetricObjectPropertyAxiom>),
    /// Inverse object properties axiom: P ≡ Q⁻
    InverseObjectProperties(Box<InverseObjectPropertiesAxiom>),
    /// Object property domain: ∃P ⊑ C
    ObjectPropertyDomain(Box<ObjectPropertyDomainAxiom>),
    /// Object property range: ⊤ ⊑ ∀P.C
    ObjectPropertyRange(Box<ObjectPropertyRangeAxiom>),
    /// Subdata property axiom: Q ⊑ P
    SubDataPropertyOf(Box<SubDataPropertyOfAxiom>),
    /// Equivalent data properties axiom: P ≡ Q
    EquivalentDataProperties(Box<EquivalentDataPropertiesAxiom>),
    /// Disjoint data properties axiom: P ⊓ Q ⊑ ⊥
    DisjointDataProperties(Box<DisjointDataPropertiesAxiom>),
    /// Functional data property axiom: ⊤ ⊑ ≤1Q
    FunctionalDataProperty(Box<FunctionalDataPropertyAxiom>),
    /// Data property domain: ∃Q ⊑ C
    DataPropertyDomain(Box<DataPropertyDomainAxiom>),
    /// Data property range: ⊤ ⊑ ∀Q.D
    DataPropertyRange(Box<DataPropertyRangeAxiom>),
    /// SWRL rule axiom
    Rule(Box<SwrlRule>),
}

impl Axiom {
    /// Get the type of this axiom
    pub fn axiom_type(&self) -> AxiomType {
        macro_rules! axiom_type_map {
            ($($variant:ident),* $(,)?) => {
                match self {
                    $(Axiom::$variant(_) => AxiomType::$variant),*
                }
            };
        }

        axiom_type_map! {
            Declaration,
            SubClassOf,
            EquivalentClasses,
            ClassAssertion,
            ObjectPropertyAssertion,
            DataPropertyAssertion,
            SameIndividual,
            DifferentIndividuals,
            SubObjectPropertyOf,
            EquivalentObjectProperties,
            DisjointObjectProperties,
            TransitiveObjectProperty,
            SymmetricObjectProperty,
            FunctionalObjectProperty,
            InverseFunctionalObjectProperty,
            IrreflexiveObjectProperty,
            AsymmetricObjectProperty,
            InverseObjectProperties,
            ObjectPropertyDomain,
            ObjectPropertyRange,
            SubDataPropertyOf,
            EquivalentDataProperties,
            DisjointDataProperties,
            FunctionalDataProperty,
            DataPropertyDomain,
            DataPropertyRange,
            Rule,
        }
    }

    /// Entities this axiom references, as (kind, IRI) pairs
    ///
    /// Used by the ontology processor to close the asserted set under
    /// declarations. Declaration axioms report their own entity.
    pub fn referenced_entities(&self) -> Vec<(EntityKind, Arc<IRI>)> {
        use EntityKind::*;

        let mut entities: Vec<(EntityKind, Arc<IRI>)> = Vec::new();
        match self {
            Axiom::Declaration(axiom) => {
                entities.push((axiom.kind(), Arc::clone(axiom.entity().iri())));
            }
            Axiom::SubClassOf(axiom) => {
                entities.push((Class, Arc::clone(axiom.sub_class())));
                entities.push((Class, Arc::clone(axiom.super_class())));
            }
            Axiom::EquivalentClasses(axiom) => {
                for class in axiom.classes() {
                    entities.push((Class, Arc::clone(class)));
                }
            }
            Axiom::ClassAssertion(axiom) => {
                entities.push((Class, Arc::clone(axiom.class())));
                entities.push((NamedIndividual, Arc::clone(axiom.individual())));
            }
            Axiom::ObjectPropertyAssertion(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
                entities.push((NamedIndividual, Arc::clone(axiom.subject())));
                entities.push((NamedIndividual, Arc::clone(axiom.object())));
            }
            Axiom::DataPropertyAssertion(axiom) => {
                entities.push((DataProperty, Arc::clone(axiom.property())));
                entities.push((NamedIndividual, Arc::clone(axiom.subject())));
            }
            Axiom::SameIndividual(axiom) => {
                for individual in axiom.individuals() {
                    entities.push((NamedIndividual, Arc::clone(individual)));
                }
            }
            Axiom::DifferentIndividuals(axiom) => {
                for individual in axiom.individuals() {
                    entities.push((NamedIndividual, Arc::clone(individual)));
                }
            }
            Axiom::SubObjectPropertyOf(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.sub_property())));
                entities.push((ObjectProperty, Arc::clone(axiom.super_property())));
            }
            Axiom::EquivalentObjectProperties(axiom) => {
                for property in axiom.properties() {
                    entities.push((ObjectProperty, Arc::clone(property)));
                }
            }
            Axiom::DisjointObjectProperties(axiom) => {
                for property in axiom.properties() {
                    entities.push((ObjectProperty, Arc::clone(property)));
                }
            }
            Axiom::TransitiveObjectProperty(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
            }
            Axiom::SymmetricObjectProperty(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
            }
            Axiom::FunctionalObjectProperty(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
            }
            Axiom::InverseFunctionalObjectProperty(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
            }
            Axiom::IrreflexiveObjectProperty(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
            }
            Axiom::AsymmetricObjectProperty(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
            }
            Axiom::InverseObjectProperties(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.first())));
                entities.push((ObjectProperty, Arc::clone(axiom.second())));
            }
            Axiom::ObjectPropertyDomain(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
                entities.push((Class, Arc::clone(axiom.domain())));
            }
            Axiom::ObjectPropertyRange(axiom) => {
                entities.push((ObjectProperty, Arc::clone(axiom.property())));
                entities.push((Class, Arc::clone(axiom.range())));
            }
            Axiom::SubDataPropertyOf(axiom) => {
                entities.push((DataProperty, Arc::clone(axiom.sub_property())));
                entities.push((DataProperty, Arc::clone(axiom.super_property())));
            }
            Axiom::EquivalentDataProperties(axiom) => {
                for property in axiom.properties() {
                    entities.push((DataProperty, Arc::clone(property)));
                }
            }
            Axiom::DisjointDataProperties(axiom) => {
                for property in axiom.properties() {
                    entities.push((DataProperty, Arc::clone(property)));
                }
            }
            Axiom::FunctionalDataProperty(axiom) => {
                entities.push((DataProperty, Arc::clone(axiom.property())));
            }
            Axiom::DataPropertyDomain(axiom) => {
                entities.push((DataProperty, Arc::clone(axiom.property())));
                entities.push((Class, Arc::clone(axiom.domain())));
            }
            Axiom::DataPropertyRange(axiom) => {
                entities.push((DataProperty, Arc::clone(axiom.property())));
                entities.push((Datatype, Arc::clone(axiom.range())));
            }
            Axiom::Rule(rule) => {
                for atom in rule.body().iter().chain(rule.head().iter()) {
                    collect_atom_entities(atom, &mut entities);
                }
            }
        }
        entities
    }
}

/// Collect the entities referenced by a single rule atom
fn collect_atom_entities(atom: &crate::atoms::Atom, entities: &mut Vec<(EntityKind, Arc<IRI>)>) {
    use crate::atoms::Atom;

    match atom {
        Atom::Class(class_atom) => {
            entities.push((EntityKind::Class, Arc::clone(class_atom.class())));
            push_term_entity(entities, class_atom.argument());
        }
        Atom::ObjectProperty(property_atom) => {
            entities.push((
                EntityKind::ObjectProperty,
                Arc::clone(property_atom.property()),
            ));
            push_term_entity(entities, property_atom.subject());
            push_term_entity(entities, property_atom.object());
        }
        Atom::DataProperty(property_atom) => {
            entities.push((
                EntityKind::DataProperty,
                Arc::clone(property_atom.property()),
            ));
            push_term_entity(entities, property_atom.subject());
        }
        Atom::SameIndividual(same) => {
            push_term_entity(entities, same.first());
            push_term_entity(entities, same.second());
        }
        Atom::DifferentIndividuals(different) => {
            push_term_entity(entities, different.first());
            push_term_entity(entities, different.second());
        }
        Atom::BuiltIn(built_in) => {
            for argument in built_in.arguments() {
                push_built_in_argument_entity(entities, argument);
            }
        }
    }
}

fn push_term_entity(
    entities: &mut Vec<(EntityKind, Arc<IRI>)>,
    term: &crate::atoms::AtomArgument,
) {
    if let crate::atoms::AtomArgument::Individual(iri) = term {
        entities.push((EntityKind::NamedIndividual, Arc::clone(iri)));
    }
}

fn push_built_in_argument_entity(
    entities: &mut Vec<(EntityKind, Arc<IRI>)>,
    argument: &crate::atoms::BuiltInArgument,
) {
    use crate::atoms::BuiltInArgument;

    match argument {
        BuiltInArgument::Class(iri) => entities.push((EntityKind::Class, Arc::clone(iri))),
        BuiltInArgument::Individual(iri) => {
            entities.push((EntityKind::NamedIndividual, Arc::clone(iri)))
        }
        BuiltInArgument::ObjectProperty(iri) => {
            entities.push((EntityKind::ObjectProperty, Arc::clone(iri)))
        }
        BuiltInArgument::DataProperty(iri) => {
            entities.push((EntityKind::DataProperty, Arc::clone(iri)))
        }
        BuiltInArgument::AnnotationProperty(iri) => {
            entities.push((EntityKind::AnnotationProperty, Arc::clone(iri)))
        }
        BuiltInArgument::Datatype(iri) => entities.push((EntityKind::Datatype, Arc::clone(iri))),
        BuiltInArgument::MultiValue(values) => {
            for value in values {
                push_built_in_argument_entity(entities, value);
            }
        }
        BuiltInArgument::Variable(_)
        | BuiltInArgument::Literal(_)
        | BuiltInArgument::Collection(_) => {}
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axiom::Declaration(axiom) => {
                write!(f, "Declaration({}({}))", axiom.kind(), axiom.entity().iri())
            }
            Axiom::Rule(rule) => write!(f, "Rule({}: {})", rule.name(), rule),
            other => write!(f, "{:?}", other.axiom_type()),
        }
    }
}
