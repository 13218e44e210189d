//! # SWRL Engine
//!
//! A rule-and-query engine for ontology-based knowledge representation,
//! implemented in Rust. Given an ontology of declarative facts and a set of
//! Horn-style SWRL rules, the engine prepares rules for evaluation by a
//! pluggable target reasoner and serves tabular SQWRL query results.
//!
//! ## Features
//!
//! - **Rule canonicalization** with left-to-right variable-binding ordering
//!   and unbound-argument analysis for procedural rule engines
//! - **Ontology processing** extracting asserted axioms, synthesizing entity
//!   declarations, and partitioning rules from SQWRL queries
//! - **Three-phase SQWRL results** with projection, aggregation, ordering,
//!   distinctness, and the full set of row selection operators
//! - **Typed literal model** with a total order over comparable datatypes
//! - **Narrow reasoner interface** so forward-chaining targets plug in
//!   without the core knowing their internals
//!
//! ## Quick Start
//!
//! ```rust
//! use swrl_engine::{Axiom, ClassAssertionAxiom, IRI, Ontology, OntologyProcessor};
//! use std::sync::Arc;
//!
//! // Build a small ontology
//! let mut ontology = Ontology::new();
//! let person = IRI::new("http://example.org/Person")?;
//! let fred = IRI::new("http://example.org/Fred")?;
//! ontology.add_axiom(Axiom::ClassAssertion(Box::new(ClassAssertionAxiom::new(
//!     Arc::clone(&person),
//!     Arc::clone(&fred),
//! ))));
//!
//! // Process it: asserted axioms are closed under entity declarations
//! let mut processor = OntologyProcessor::new(ontology);
//! processor.process_ontology()?;
//! assert_eq!(processor.asserted_axioms().len(), 3);
//! # Ok::<(), swrl_engine::SwrlError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`iri`] - IRI management with interning and prefix support
//! - [`entities`] - Classes, properties, individuals, and datatypes
//! - [`literals`] - Typed literal values with projections and ordering
//! - [`atoms`] - Rule atoms and built-in arguments
//! - [`rules`] - SWRL rules and canonicalization
//! - [`axioms`] - Asserted axiom model
//! - [`ontology`] - Indexed in-memory ontology storage
//! - [`processor`] - Ontology walking and rule/query partitioning
//! - [`result`] - The three-phase SQWRL result engine
//! - [`engine`] - Session orchestration against a target reasoner
//! - [`factory`] / [`resolver`] - Value construction and entity resolution
//! - [`error`] - Error types and result alias

/// Error types and result handling
pub mod error;

/// IRI management with interning and namespace-prefix support
pub mod iri;

/// Constants for vocabulary IRIs and the SQWRL built-in name set
pub mod constants;

/// Ontology entities with IRI-based identity
pub mod entities;

/// Typed literal values with projections and a total order
pub mod literals;

/// Rule atoms and built-in arguments
pub mod atoms;

/// SWRL rules and the body canonicalizer
pub mod rules;

/// Asserted axiom model
pub mod axioms;

/// Ontology structure with indexed axiom storage
pub mod ontology;

/// Ontology processing: axiom extraction, declaration synthesis, partitioning
pub mod processor;

/// The three-phase SQWRL result engine
pub mod result;

/// Engine orchestration against a pluggable target reasoner
pub mod engine;

/// Factories for built-in arguments and literals
pub mod factory;

/// Name-to-entity resolution
pub mod resolver;

/// Engine configuration
pub mod config;

// Re-exports for convenience
pub use atoms::{
    Atom, AtomArgument, BuiltInArgument, BuiltInAtom, ClassAtom, DataPropertyAtom,
    DifferentIndividualsAtom, ObjectPropertyAtom, SameIndividualAtom, SqwrlCollectionArgument,
    VariableArgument,
};
pub use axioms::*;
pub use config::EngineConfig;
pub use engine::{BridgeController, RuleEngineBridge, SwrlRuleEngine, TargetRuleEngine};
pub use entities::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityKind, NamedIndividual,
    ObjectProperty, OwlEntity,
};
pub use error::{SwrlError, SwrlResult};
pub use factory::{ArgumentFactory, DatatypeFactory, LiteralFactory};
pub use iri::{PrefixRegistry, IRI};
pub use literals::{CoreDatatype, Literal, XsdDuration};
pub use ontology::Ontology;
pub use processor::OntologyProcessor;
pub use resolver::EntityResolver;
pub use result::{AggregateFunction, ResultPhase, ResultValue, SqwrlResultTable};
pub use rules::SwrlRule;
