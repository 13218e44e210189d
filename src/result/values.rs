//! Result cell values
//!
//! A result cell holds either an entity reference or a literal. Grouping and
//! ordering need a total order over cells, so alongside the literal value
//! order this module defines a deterministic comparison that never fails:
//! cells order by kind rank first, and literal pairs the value order refuses
//! fall back to datatype rank then lexical form.

use crate::iri::IRI;
use crate::literals::Literal;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A single cell of a SQWRL result row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultValue {
    /// A class reference
    Class(Arc<IRI>),
    /// A named individual reference
    Individual(Arc<IRI>),
    /// An object property reference
    ObjectProperty(Arc<IRI>),
    /// A data property reference
    DataProperty(Arc<IRI>),
    /// An annotation property reference
    AnnotationProperty(Arc<IRI>),
    /// A literal value
    Literal(Literal),
}

impl ResultValue {
    /// Short kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResultValue::Class(_) => "class",
            ResultValue::Individual(_) => "individual",
            ResultValue::ObjectProperty(_) => "object property",
            ResultValue::DataProperty(_) => "data property",
            ResultValue::AnnotationProperty(_) => "annotation property",
            ResultValue::Literal(_) => "literal",
        }
    }

    /// Whether this cell is an entity reference
    pub fn is_entity(&self) -> bool {
        !matches!(self, ResultValue::Literal(_))
    }

    /// Whether this cell is a class reference
    pub fn is_class(&self) -> bool {
        matches!(self, ResultValue::Class(_))
    }

    /// Whether this cell is an individual reference
    pub fn is_individual(&self) -> bool {
        matches!(self, ResultValue::Individual(_))
    }

    /// Whether this cell is a property reference of any property kind
    pub fn is_property(&self) -> bool {
        matches!(
            self,
            ResultValue::ObjectProperty(_)
                | ResultValue::DataProperty(_)
                | ResultValue::AnnotationProperty(_)
        )
    }

    /// Whether this cell is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, ResultValue::Literal(_))
    }

    /// The entity IRI, if this cell is an entity reference
    pub fn entity_iri(&self) -> Option<&Arc<IRI>> {
        match self {
            ResultValue::Class(iri)
            | ResultValue::Individual(iri)
            | ResultValue::ObjectProperty(iri)
            | ResultValue::DataProperty(iri)
            | ResultValue::AnnotationProperty(iri) => Some(iri),
            ResultValue::Literal(_) => None,
        }
    }

    /// The literal, if this cell is a literal
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            ResultValue::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            ResultValue::Class(_) => 0,
            ResultValue::Individual(_) => 1,
            ResultValue::ObjectProperty(_) => 2,
            ResultValue::DataProperty(_) => 3,
            ResultValue::AnnotationProperty(_) => 4,
            ResultValue::Literal(_) => 5,
        }
    }

    /// Deterministic total order over cells
    ///
    /// Same-kind entities order by IRI. Literal pairs use the literal value
    /// order where it is defined; pairs it refuses (incompatible datatypes)
    /// order by datatype rank then lexical form, so grouping and sorting stay
    /// total without coercing values.
    pub fn total_cmp(&self, other: &ResultValue) -> Ordering {
        let rank = self.kind_rank().cmp(&other.kind_rank());
        if rank != Ordering::Equal {
            return rank;
        }
        match (self, other) {
            (ResultValue::Literal(left), ResultValue::Literal(right)) => {
                match left.compare(right) {
                    Ok(ordering) => ordering,
                    Err(_) => left
                        .datatype()
                        .cmp(&right.datatype())
                        .then_with(|| left.lexical_form().cmp(right.lexical_form())),
                }
            }
            _ => {
                // Same entity kind: compare by IRI
                let left = self.entity_iri().map(|iri| iri.as_str()).unwrap_or("");
                let right = other.entity_iri().map(|iri| iri.as_str()).unwrap_or("");
                left.cmp(right)
            }
        }
    }
}

impl From<Literal> for ResultValue {
    fn from(literal: Literal) -> Self {
        ResultValue::Literal(literal)
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Literal(literal) => write!(f, "{literal}"),
            _ => match self.entity_iri() {
                Some(iri) => write!(f, "{iri}"),
                None => Ok(()),
            },
        }
    }
}

/// A row ordered by the deterministic cell order, cell by cell
pub(crate) fn compare_rows(left: &[ResultValue], right: &[ResultValue]) -> Ordering {
    for (left_cell, right_cell) in left.iter().zip(right.iter()) {
        let ordering = left_cell.total_cmp(right_cell);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}
