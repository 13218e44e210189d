//! Ontology processing
//!
//! Walks an ontology and derives the engine's working state: the asserted
//! axiom set closed under entity declarations, the per-kind declaration
//! indexes that keep synthesis idempotent, the rule and query registries
//! (canonicalized, partitioned by SQWRL built-in usage), and the entity
//! resolver.
//!
//! `process_ontology` is total: it clears all state before walking, and on
//! failure clears again, so partial state is never observable.

use crate::axioms::{Axiom, DeclarationAxiom};
use crate::config::EngineConfig;
use crate::entities::{EntityKind, OwlEntity};
use crate::error::{SwrlError, SwrlResult};
use crate::iri::IRI;
use crate::ontology::Ontology;
use crate::resolver::EntityResolver;
use crate::rules::SwrlRule;
use indexmap::{IndexMap, IndexSet};
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

/// Processor deriving canonical engine state from an ontology
#[derive(Debug, Clone, Default)]
pub struct OntologyProcessor {
    ontology: Ontology,
    config: EngineConfig,

    /// Asserted axioms, closed under entity declarations
    asserted_axioms: IndexSet<Axiom>,

    // Per-kind declaration indexes
    declared_classes: HashSet<String>,
    declared_individuals: HashSet<String>,
    declared_object_properties: HashSet<String>,
    declared_data_properties: HashSet<String>,
    declared_annotation_properties: HashSet<String>,
    declared_datatypes: HashSet<String>,

    /// Plain rules by name, canonicalized
    rules: IndexMap<String, SwrlRule>,
    /// SQWRL queries by name, canonicalized
    queries: IndexMap<String, SwrlRule>,

    resolver: EntityResolver,
}

impl OntologyProcessor {
    /// Create a processor over an ontology with default configuration
    pub fn new(ontology: Ontology) -> Self {
        Self::with_config(ontology, EngineConfig::default())
    }

    /// Create a processor over an ontology with the given configuration
    pub fn with_config(ontology: Ontology, config: EngineConfig) -> Self {
        OntologyProcessor {
            ontology,
            config,
            ..Self::default()
        }
    }

    /// The source ontology
    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    /// Mutable access to the source ontology, for inferred-knowledge write-back
    pub fn ontology_mut(&mut self) -> &mut Ontology {
        &mut self.ontology
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Re-derive all state from the ontology
    ///
    /// Clears every index first and re-walks the full ontology. On error the
    /// processor is left cleared, equivalent to a freshly reset instance.
    pub fn process_ontology(&mut self) -> SwrlResult<()> {
        self.clear();
        match self.walk() {
            Ok(()) => Ok(()),
            Err(error) => {
                self.clear();
                Err(error)
            }
        }
    }

    fn walk(&mut self) -> SwrlResult<()> {
        let axioms = self.ontology.all_axioms(self.config.include_imports);
        for axiom in axioms {
            match axiom.as_ref() {
                Axiom::Rule(rule) => self.process_rule((**rule).clone())?,
                other => self.record_axiom(other.clone()),
            }
        }
        debug!(
            "processed ontology: {} asserted axioms, {} rules, {} queries, {} entities",
            self.asserted_axioms.len(),
            self.rules.len(),
            self.queries.len(),
            self.resolver.len()
        );
        Ok(())
    }

    /// Canonicalize a rule and partition it into the rule or query registry
    fn process_rule(&mut self, rule: SwrlRule) -> SwrlResult<()> {
        let canonical = rule.canonical();
        if canonical.is_sqwrl_query() {
            // Queries are excluded from the asserted set; their entities are
            // still recorded for resolution.
            for (kind, iri) in Axiom::Rule(Box::new(canonical.clone())).referenced_entities() {
                self.resolver.record(OwlEntity::of_kind(kind, iri));
            }
            self.queries.insert(canonical.name().to_string(), canonical);
        } else {
            self.rules
                .insert(canonical.name().to_string(), canonical.clone());
            self.record_axiom(Axiom::Rule(Box::new(canonical)));
        }
        Ok(())
    }

    /// Record an axiom and close the asserted set over its entities
    fn record_axiom(&mut self, axiom: Axiom) {
        for (kind, iri) in axiom.referenced_entities() {
            self.record_entity(kind, iri);
        }
        self.asserted_axioms.insert(axiom);
    }

    /// Register an entity, synthesizing its declaration on first sight
    fn record_entity(&mut self, kind: EntityKind, iri: Arc<IRI>) {
        let index = match kind {
            EntityKind::Class => &mut self.declared_classes,
            EntityKind::NamedIndividual => &mut self.declared_individuals,
            EntityKind::ObjectProperty => &mut self.declared_object_properties,
            EntityKind::DataProperty => &mut self.declared_data_properties,
            EntityKind::AnnotationProperty => &mut self.declared_annotation_properties,
            EntityKind::Datatype => &mut self.declared_datatypes,
        };
        let newly_declared = index.insert(iri.as_str().to_string());

        let entity = OwlEntity::of_kind(kind, Arc::clone(&iri));
        self.resolver.record(entity.clone());
        if newly_declared {
            self.asserted_axioms
                .insert(Axiom::Declaration(Box::new(DeclarationAxiom::new(entity))));
        }
    }

    /// The asserted axioms in deterministic order
    pub fn asserted_axioms(&self) -> &IndexSet<Axiom> {
        &self.asserted_axioms
    }

    /// Names of all plain rules, in ontology order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// Names of all SQWRL queries, in ontology order
    pub fn query_names(&self) -> Vec<&str> {
        self.queries.keys().map(String::as_str).collect()
    }

    /// The canonicalized rules, in ontology order
    pub fn rules(&self) -> impl Iterator<Item = &SwrlRule> {
        self.rules.values()
    }

    /// The canonicalized queries, in ontology order
    pub fn queries(&self) -> impl Iterator<Item = &SwrlRule> {
        self.queries.values()
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> SwrlResult<&SwrlRule> {
        self.rules
            .get(name)
            .ok_or_else(|| SwrlError::InvalidRuleName(name.to_string()))
    }

    /// Look up a query by name
    pub fn query(&self, name: &str) -> SwrlResult<&SwrlRule> {
        self.queries
            .get(name)
            .ok_or_else(|| SwrlError::InvalidQueryName(name.to_string()))
    }

    /// Whether an entity of the given kind is declared
    pub fn is_declared(&self, kind: EntityKind, iri: &str) -> bool {
        let index = match kind {
            EntityKind::Class => &self.declared_classes,
            EntityKind::NamedIndividual => &self.declared_individuals,
            EntityKind::ObjectProperty => &self.declared_object_properties,
            EntityKind::DataProperty => &self.declared_data_properties,
            EntityKind::AnnotationProperty => &self.declared_annotation_properties,
            EntityKind::Datatype => &self.declared_datatypes,
        };
        index.contains(iri)
    }

    /// The entity resolver populated by the last walk
    pub fn resolver(&self) -> &EntityResolver {
        &self.resolver
    }

    /// Clear all derived state
    pub fn clear(&mut self) {
        self.asserted_axioms.clear();
        self.declared_classes.clear();
        self.declared_individuals.clear();
        self.declared_object_properties.clear();
        self.declared_data_properties.clear();
        self.declared_annotation_properties.clear();
        self.declared_datatypes.clear();
        self.rules.clear();
        self.queries.clear();
        self.resolver.reset();
    }
}
