// Basic tests for the SWRL engine
// Clean, minimal smoke tests over the core value types

use std::sync::Arc;
use swrl_engine::*;

#[test]
fn test_iri_creation() {
    let iri = IRI::new("http://example.org/test").unwrap();
    assert_eq!(iri.as_str(), "http://example.org/test");
    assert_eq!(iri.local_name(), "test");
}

#[test]
fn test_entity_equality_is_by_iri() {
    let a = Class::new("http://example.org/Person").unwrap();
    let b = Class::new("http://example.org/Person").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.kind(), EntityKind::Class);
}

#[test]
fn test_literal_round_trip() {
    let literal = Literal::from_int(42);
    assert!(literal.is_numeric());
    assert_eq!(literal.as_int().unwrap(), 42);
    assert_eq!(literal.lexical_form(), "42");
}

#[test]
fn test_ontology_creation() {
    let mut ontology = Ontology::new();
    let iri = IRI::new("http://example.org/ontology").unwrap();
    ontology.set_iri(Arc::clone(&iri));
    assert_eq!(ontology.iri().unwrap().as_str(), "http://example.org/ontology");
    assert_eq!(ontology.axiom_count(), 0);
}

#[test]
fn test_prefix_registry_expansion() {
    let registry = PrefixRegistry::with_standard_prefixes();
    let swrlb_add = registry.expand("swrlb:add").unwrap();
    assert!(swrlb_add.is_swrl_builtin());
    assert_eq!(swrlb_add.prefixed_name(), "swrlb:add");
}

#[test]
fn test_sqwrl_name_set() {
    assert!(constants::is_sqwrl_built_in("sqwrl:select"));
    assert!(constants::is_sqwrl_built_in("sqwrl:notNthSlice"));
    assert!(!constants::is_sqwrl_built_in("swrlb:add"));
}

#[test]
fn test_result_table_creation() {
    let table = SqwrlResultTable::new();
    assert_eq!(table.phase(), ResultPhase::Configuring);
    assert_eq!(table.number_of_columns(), 0);
}
