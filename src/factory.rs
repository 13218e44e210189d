//! Factories for built-in arguments and literals
//!
//! Pure constructors: the argument factory builds the tagged built-in
//! argument variants from entities or IRIs, and the literal factory builds
//! typed literals, delegating datatype resolution to the datatype factory.

use crate::atoms::{BuiltInArgument, SqwrlCollectionArgument, VariableArgument};
use crate::entities::{
    AnnotationProperty, Class, DataProperty, Datatype, NamedIndividual, ObjectProperty,
};
use crate::error::{SwrlError, SwrlResult};
use crate::iri::IRI;
use crate::literals::{CoreDatatype, Literal};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Arc;

/// Factory for built-in arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentFactory;

impl ArgumentFactory {
    /// Create a new argument factory
    pub fn new() -> Self {
        ArgumentFactory
    }

    /// A bound variable argument
    pub fn variable<S: Into<String>>(&self, name: S) -> BuiltInArgument {
        BuiltInArgument::Variable(VariableArgument::new(name))
    }

    /// An unbound variable argument
    pub fn unbound_variable<S: Into<String>>(&self, name: S) -> BuiltInArgument {
        BuiltInArgument::Variable(VariableArgument::unbound(name))
    }

    /// A literal argument
    pub fn literal(&self, literal: Literal) -> BuiltInArgument {
        BuiltInArgument::Literal(literal)
    }

    /// A class argument from a prepared entity
    pub fn class(&self, class: &Class) -> BuiltInArgument {
        BuiltInArgument::Class(Arc::clone(class.iri()))
    }

    /// A class argument from an IRI
    pub fn class_from_iri(&self, iri: Arc<IRI>) -> BuiltInArgument {
        BuiltInArgument::Class(iri)
    }

    /// An individual argument from a prepared entity
    pub fn individual(&self, individual: &NamedIndividual) -> BuiltInArgument {
        BuiltInArgument::Individual(Arc::clone(individual.iri()))
    }

    /// An individual argument from an IRI
    pub fn individual_from_iri(&self, iri: Arc<IRI>) -> BuiltInArgument {
        BuiltInArgument::Individual(iri)
    }

    /// An object property argument from a prepared entity
    pub fn object_property(&self, property: &ObjectProperty) -> BuiltInArgument {
        BuiltInArgument::ObjectProperty(Arc::clone(property.iri()))
    }

    /// An object property argument from an IRI
    pub fn object_property_from_iri(&self, iri: Arc<IRI>) -> BuiltInArgument {
        BuiltInArgument::ObjectProperty(iri)
    }

    /// A data property argument from a prepared entity
    pub fn data_property(&self, property: &DataProperty) -> BuiltInArgument {
        BuiltInArgument::DataProperty(Arc::clone(property.iri()))
    }

    /// A data property argument from an IRI
    pub fn data_property_from_iri(&self, iri: Arc<IRI>) -> BuiltInArgument {
        BuiltInArgument::DataProperty(iri)
    }

    /// An annotation property argument from a prepared entity
    pub fn annotation_property(&self, property: &AnnotationProperty) -> BuiltInArgument {
        BuiltInArgument::AnnotationProperty(Arc::clone(property.iri()))
    }

    /// An annotation property argument from an IRI
    pub fn annotation_property_from_iri(&self, iri: Arc<IRI>) -> BuiltInArgument {
        BuiltInArgument::AnnotationProperty(iri)
    }

    /// A datatype argument from a prepared entity
    pub fn datatype(&self, datatype: &Datatype) -> BuiltInArgument {
        BuiltInArgument::Datatype(Arc::clone(datatype.iri()))
    }

    /// A datatype argument from an IRI
    pub fn datatype_from_iri(&self, iri: Arc<IRI>) -> BuiltInArgument {
        BuiltInArgument::Datatype(iri)
    }

    /// An ordered multi-value argument
    pub fn multi_value(&self, values: Vec<BuiltInArgument>) -> BuiltInArgument {
        BuiltInArgument::MultiValue(values)
    }

    /// A SQWRL collection reference argument
    pub fn collection<Q, C, G>(
        &self,
        query_name: Q,
        collection_name: C,
        group_id: G,
    ) -> BuiltInArgument
    where
        Q: Into<String>,
        C: Into<String>,
        G: Into<String>,
    {
        BuiltInArgument::Collection(SqwrlCollectionArgument::new(
            query_name,
            collection_name,
            group_id,
        ))
    }
}

/// Factory resolving datatypes between XSD IRIs and the core datatype tags
#[derive(Debug, Clone, Copy, Default)]
pub struct DatatypeFactory;

impl DatatypeFactory {
    /// Create a new datatype factory
    pub fn new() -> Self {
        DatatypeFactory
    }

    /// Build a datatype entity for a core datatype
    pub fn datatype(&self, datatype: CoreDatatype) -> SwrlResult<Datatype> {
        Ok(Datatype::from_iri(IRI::new(datatype.iri_str())?))
    }

    /// Resolve a core datatype from an XSD IRI
    pub fn core_datatype(&self, iri: &IRI) -> SwrlResult<CoreDatatype> {
        CoreDatatype::from_iri_str(iri.as_str()).ok_or_else(|| SwrlError::LiteralType {
            datatype: iri.as_str().to_string(),
            requested: "a supported XSD datatype".to_string(),
        })
    }
}

/// Factory for typed literals
///
/// One constructor per supported primitive; the lexical-plus-datatype form
/// resolves the datatype through the datatype factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralFactory {
    datatype_factory: DatatypeFactory,
}

impl LiteralFactory {
    /// Create a new literal factory
    pub fn new() -> Self {
        Self::default()
    }

    /// The delegate datatype factory
    pub fn datatype_factory(&self) -> &DatatypeFactory {
        &self.datatype_factory
    }

    /// An xsd:boolean literal
    pub fn boolean(&self, value: bool) -> Literal {
        Literal::from_boolean(value)
    }

    /// An xsd:byte literal
    pub fn byte(&self, value: i8) -> Literal {
        Literal::from_byte(value)
    }

    /// An xsd:short literal
    pub fn short(&self, value: i16) -> Literal {
        Literal::from_short(value)
    }

    /// An xsd:int literal
    pub fn int(&self, value: i32) -> Literal {
        Literal::from_int(value)
    }

    /// An xsd:long literal
    pub fn long(&self, value: i64) -> Literal {
        Literal::from_long(value)
    }

    /// An xsd:float literal
    pub fn float(&self, value: f32) -> Literal {
        Literal::from_float(value)
    }

    /// An xsd:double literal
    pub fn double(&self, value: f64) -> Literal {
        Literal::from_double(value)
    }

    /// An xsd:string literal
    pub fn string<S: Into<String>>(&self, value: S) -> Literal {
        Literal::from_string(value)
    }

    /// An xsd:anyURI literal
    pub fn any_uri<S: Into<String>>(&self, value: S) -> Literal {
        Literal::from_any_uri(value)
    }

    /// An xsd:date literal
    pub fn date(&self, value: NaiveDate) -> Literal {
        Literal::from_date(value)
    }

    /// An xsd:time literal
    pub fn time(&self, value: NaiveTime) -> Literal {
        Literal::from_time(value)
    }

    /// An xsd:dateTime literal
    pub fn date_time(&self, value: NaiveDateTime) -> Literal {
        Literal::from_date_time(value)
    }

    /// An xsd:duration literal from its lexical form
    pub fn duration<S: Into<String>>(&self, lexical_form: S) -> SwrlResult<Literal> {
        Literal::from_duration_lexical(lexical_form)
    }

    /// A literal from a lexical form and a datatype IRI
    pub fn literal<S: Into<String>>(&self, lexical_form: S, datatype: &IRI) -> SwrlResult<Literal> {
        let core_datatype = self.datatype_factory.core_datatype(datatype)?;
        Literal::new(lexical_form, core_datatype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_variable_construction() {
        let factory = ArgumentFactory::new();
        assert!(factory.unbound_variable("x").is_unbound_variable());
        assert!(!factory.variable("x").is_unbound_variable());
    }

    #[test]
    fn test_literal_factory_resolves_datatype_iri() {
        let factory = LiteralFactory::new();
        let int_iri = crate::constants::xsd::int();
        let literal = factory.literal("42", &int_iri).unwrap();
        assert_eq!(literal.as_int().unwrap(), 42);

        let bad = IRI::new("http://example.org/notADatatype").unwrap();
        assert!(factory.literal("42", &bad).is_err());
    }
}
