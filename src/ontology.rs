//! Ontology structure and indexed axiom storage
//!
//! The in-memory ontology the processor walks: entity sets, the asserted
//! axiom list with a per-type index for O(1) access by kind, nested imported
//! ontologies, and bulk-conversion batching for write-back.

use crate::axioms::{Axiom, AxiomType};
use crate::entities::EntityKind;
use crate::iri::IRI;
use crate::rules::SwrlRule;
use hashbrown::HashMap;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// An ontology with indexed axiom storage
///
/// Axioms are stored once and indexed by `AxiomType`; entity IRIs referenced
/// by added axioms are registered in per-kind sets automatically. Imported
/// ontologies are nested values walked when `include_imports` is requested.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    /// The ontology IRI
    iri: Option<Arc<IRI>>,
    /// Imported ontologies
    imports: Vec<Ontology>,
    /// All classes referenced in the ontology
    classes: HashSet<Arc<IRI>>,
    /// All object properties referenced in the ontology
    object_properties: HashSet<Arc<IRI>>,
    /// All data properties referenced in the ontology
    data_properties: HashSet<Arc<IRI>>,
    /// All annotation properties referenced in the ontology
    annotation_properties: HashSet<Arc<IRI>>,
    /// All named individuals referenced in the ontology
    named_individuals: HashSet<Arc<IRI>>,
    /// All datatypes referenced in the ontology
    datatypes: HashSet<Arc<IRI>>,
    /// All axioms in the ontology
    axioms: Vec<Arc<Axiom>>,
    /// Index axioms by type for fast type-based access
    axiom_type_index: HashMap<AxiomType, Vec<Arc<Axiom>>>,
    /// Depth of open bulk conversions
    bulk_conversion_depth: usize,
}

impl Ontology {
    /// Create a new empty ontology
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ontology with the given IRI
    pub fn with_iri(iri: Arc<IRI>) -> Self {
        Ontology {
            iri: Some(iri),
            ..Self::default()
        }
    }

    /// Get the ontology IRI
    pub fn iri(&self) -> Option<&Arc<IRI>> {
        self.iri.as_ref()
    }

    /// Set the ontology IRI
    pub fn set_iri(&mut self, iri: Arc<IRI>) {
        self.iri = Some(iri);
    }

    /// Add an imported ontology
    pub fn add_import(&mut self, imported: Ontology) {
        self.imports.push(imported);
    }

    /// The directly imported ontologies
    pub fn imports(&self) -> &[Ontology] {
        &self.imports
    }

    /// Add an axiom, indexing it and registering its referenced entities
    pub fn add_axiom(&mut self, axiom: Axiom) -> Arc<Axiom> {
        for (kind, iri) in axiom.referenced_entities() {
            self.register_entity(kind, iri);
        }
        let axiom = Arc::new(axiom);
        self.axiom_type_index
            .entry(axiom.axiom_type())
            .or_default()
            .push(Arc::clone(&axiom));
        self.axioms.push(Arc::clone(&axiom));
        axiom
    }

    /// Add a SWRL rule axiom
    pub fn add_rule(&mut self, rule: SwrlRule) -> Arc<Axiom> {
        self.add_axiom(Axiom::Rule(Box::new(rule)))
    }

    fn register_entity(&mut self, kind: EntityKind, iri: Arc<IRI>) {
        let set = match kind {
            EntityKind::Class => &mut self.classes,
            EntityKind::ObjectProperty => &mut self.object_properties,
            EntityKind::DataProperty => &mut self.data_properties,
            EntityKind::AnnotationProperty => &mut self.annotation_properties,
            EntityKind::NamedIndividual => &mut self.named_individuals,
            EntityKind::Datatype => &mut self.datatypes,
        };
        set.insert(iri);
    }

    /// All axioms in insertion order
    pub fn axioms(&self) -> &[Arc<Axiom>] {
        &self.axioms
    }

    /// Total number of axioms
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Axioms of the requested kind, optionally including imports
    pub fn axioms_of_type(&self, axiom_type: AxiomType, include_imports: bool) -> Vec<Arc<Axiom>> {
        let mut axioms: Vec<Arc<Axiom>> = self
            .axiom_type_index
            .get(&axiom_type)
            .map(|indexed| indexed.to_vec())
            .unwrap_or_default();
        if include_imports {
            for imported in &self.imports {
                axioms.extend(imported.axioms_of_type(axiom_type, true));
            }
        }
        axioms
    }

    /// Every axiom, optionally including imports
    pub fn all_axioms(&self, include_imports: bool) -> Vec<Arc<Axiom>> {
        let mut axioms = self.axioms.clone();
        if include_imports {
            for imported in &self.imports {
                axioms.extend(imported.all_axioms(true));
            }
        }
        axioms
    }

    /// All SWRL rule axioms, optionally including imports
    pub fn swrl_rules(&self, include_imports: bool) -> Vec<SwrlRule> {
        self.axioms_of_type(AxiomType::Rule, include_imports)
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::Rule(rule) => Some((**rule).clone()),
                _ => None,
            })
            .collect()
    }

    /// Classes referenced in the ontology
    pub fn classes(&self) -> &HashSet<Arc<IRI>> {
        &self.classes
    }

    /// Object properties referenced in the ontology
    pub fn object_properties(&self) -> &HashSet<Arc<IRI>> {
        &self.object_properties
    }

    /// Data properties referenced in the ontology
    pub fn data_properties(&self) -> &HashSet<Arc<IRI>> {
        &self.data_properties
    }

    /// Annotation properties referenced in the ontology
    pub fn annotation_properties(&self) -> &HashSet<Arc<IRI>> {
        &self.annotation_properties
    }

    /// Named individuals referenced in the ontology
    pub fn named_individuals(&self) -> &HashSet<Arc<IRI>> {
        &self.named_individuals
    }

    /// Datatypes referenced in the ontology
    pub fn datatypes(&self) -> &HashSet<Arc<IRI>> {
        &self.datatypes
    }

    /// Open a bulk conversion; change batches may nest
    pub fn start_bulk_conversion(&mut self) {
        self.bulk_conversion_depth += 1;
        debug!(
            "bulk conversion opened (depth {})",
            self.bulk_conversion_depth
        );
    }

    /// Close the innermost bulk conversion
    pub fn complete_bulk_conversion(&mut self) {
        if self.bulk_conversion_depth == 0 {
            warn!("complete_bulk_conversion without a matching start");
            return;
        }
        self.bulk_conversion_depth -= 1;
        debug!(
            "bulk conversion completed (depth {})",
            self.bulk_conversion_depth
        );
    }

    /// Whether a bulk conversion is open
    pub fn in_bulk_conversion(&self) -> bool {
        self.bulk_conversion_depth > 0
    }
}
