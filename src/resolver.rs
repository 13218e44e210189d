//! Entity resolution by IRI
//!
//! The resolver records every entity the processor encounters, keyed by IRI
//! under its kind, and answers lookups from built-in implementations and the
//! target reasoner. Records are additive within a session; `reset` clears
//! them.

use crate::entities::{
    AnnotationProperty, Class, DataProperty, Datatype, EntityKind, NamedIndividual,
    ObjectProperty, OwlEntity,
};
use hashbrown::HashMap;

/// Name-to-entity resolver
#[derive(Debug, Clone, Default)]
pub struct EntityResolver {
    classes: HashMap<String, Class>,
    named_individuals: HashMap<String, NamedIndividual>,
    object_properties: HashMap<String, ObjectProperty>,
    data_properties: HashMap<String, DataProperty>,
    annotation_properties: HashMap<String, AnnotationProperty>,
    datatypes: HashMap<String, Datatype>,
}

impl EntityResolver {
    /// Create a new empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entity under its kind
    pub fn record(&mut self, entity: OwlEntity) {
        let key = entity.iri().as_str().to_string();
        match entity {
            OwlEntity::Class(class) => {
                self.classes.insert(key, class);
            }
            OwlEntity::NamedIndividual(individual) => {
                self.named_individuals.insert(key, individual);
            }
            OwlEntity::ObjectProperty(property) => {
                self.object_properties.insert(key, property);
            }
            OwlEntity::DataProperty(property) => {
                self.data_properties.insert(key, property);
            }
            OwlEntity::AnnotationProperty(property) => {
                self.annotation_properties.insert(key, property);
            }
            OwlEntity::Datatype(datatype) => {
                self.datatypes.insert(key, datatype);
            }
        }
    }

    /// Look up an entity of the given kind
    pub fn resolve(&self, kind: EntityKind, iri: &str) -> Option<OwlEntity> {
        match kind {
            EntityKind::Class => self.classes.get(iri).cloned().map(OwlEntity::Class),
            EntityKind::NamedIndividual => self
                .named_individuals
                .get(iri)
                .cloned()
                .map(OwlEntity::NamedIndividual),
            EntityKind::ObjectProperty => self
                .object_properties
                .get(iri)
                .cloned()
                .map(OwlEntity::ObjectProperty),
            EntityKind::DataProperty => self
                .data_properties
                .get(iri)
                .cloned()
                .map(OwlEntity::DataProperty),
            EntityKind::AnnotationProperty => self
                .annotation_properties
                .get(iri)
                .cloned()
                .map(OwlEntity::AnnotationProperty),
            EntityKind::Datatype => self.datatypes.get(iri).cloned().map(OwlEntity::Datatype),
        }
    }

    /// Look up a class by IRI
    pub fn class(&self, iri: &str) -> Option<&Class> {
        self.classes.get(iri)
    }

    /// Look up a named individual by IRI
    pub fn named_individual(&self, iri: &str) -> Option<&NamedIndividual> {
        self.named_individuals.get(iri)
    }

    /// Look up an object property by IRI
    pub fn object_property(&self, iri: &str) -> Option<&ObjectProperty> {
        self.object_properties.get(iri)
    }

    /// Look up a data property by IRI
    pub fn data_property(&self, iri: &str) -> Option<&DataProperty> {
        self.data_properties.get(iri)
    }

    /// Look up an annotation property by IRI
    pub fn annotation_property(&self, iri: &str) -> Option<&AnnotationProperty> {
        self.annotation_properties.get(iri)
    }

    /// Look up a datatype by IRI
    pub fn datatype(&self, iri: &str) -> Option<&Datatype> {
        self.datatypes.get(iri)
    }

    /// Whether an IRI is recorded under the given kind
    pub fn is_recorded(&self, kind: EntityKind, iri: &str) -> bool {
        self.resolve(kind, iri).is_some()
    }

    /// Number of recorded entities across all kinds
    pub fn len(&self) -> usize {
        self.classes.len()
            + self.named_individuals.len()
            + self.object_properties.len()
            + self.data_properties.len()
            + self.annotation_properties.len()
            + self.datatypes.len()
    }

    /// Whether no entities are recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all records
    pub fn reset(&mut self) {
        self.classes.clear();
        self.named_individuals.clear();
        self.object_properties.clear();
        self.data_properties.clear();
        self.annotation_properties.clear();
        self.datatypes.clear();
    }
}
