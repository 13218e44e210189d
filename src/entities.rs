//! Ontology entities - classes, properties, individuals, and datatypes
//!
//! Defines the named entities the engine works with. Every entity carries an
//! IRI; equality and hashing are by IRI, so two entities of the same kind
//! with the same IRI are interchangeable values.

use crate::error::SwrlResult;
use crate::iri::IRI;
use std::fmt;
use std::sync::Arc;

/// Kinds of ontology entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Class,
    NamedIndividual,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Datatype,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Class => "Class",
            EntityKind::NamedIndividual => "NamedIndividual",
            EntityKind::ObjectProperty => "ObjectProperty",
            EntityKind::DataProperty => "DataProperty",
            EntityKind::AnnotationProperty => "AnnotationProperty",
            EntityKind::Datatype => "Datatype",
        };
        write!(f, "{name}")
    }
}

/// Common trait for all ontology entities
pub trait Entity {
    /// The kind of this entity
    const KIND: EntityKind;

    /// Get the IRI of this entity
    fn iri(&self) -> &Arc<IRI>;

    /// Create an entity from a shared IRI
    fn from_shared_iri(iri: Arc<IRI>) -> Self;
}

macro_rules! entity_type {
    ($(#[$doc:meta])* $name:ident, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            /// The IRI of the entity
            iri: Arc<IRI>,
        }

        impl Entity for $name {
            const KIND: EntityKind = EntityKind::$kind;

            fn iri(&self) -> &Arc<IRI> {
                &self.iri
            }

            fn from_shared_iri(iri: Arc<IRI>) -> Self {
                $name { iri }
            }
        }

        impl $name {
            /// Create a new entity, interning the IRI
            pub fn new<S: Into<String>>(iri: S) -> SwrlResult<Self> {
                Ok(Self::from_shared_iri(IRI::new(iri)?))
            }

            /// Create a new entity from an already-interned IRI
            pub fn from_iri(iri: Arc<IRI>) -> Self {
                Self::from_shared_iri(iri)
            }

            /// Get the IRI of this entity
            pub fn iri(&self) -> &Arc<IRI> {
                <Self as Entity>::iri(self)
            }

            /// The kind of this entity
            pub fn kind(&self) -> EntityKind {
                <Self as Entity>::KIND
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.iri)
            }
        }
    };
}

entity_type!(
    /// A named class
    Class,
    Class
);
entity_type!(
    /// A named individual
    NamedIndividual,
    NamedIndividual
);
entity_type!(
    /// An object property
    ObjectProperty,
    ObjectProperty
);
entity_type!(
    /// A data property
    DataProperty,
    DataProperty
);
entity_type!(
    /// An annotation property
    AnnotationProperty,
    AnnotationProperty
);
entity_type!(
    /// A datatype
    Datatype,
    Datatype
);

/// Any ontology entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OwlEntity {
    Class(Class),
    NamedIndividual(NamedIndividual),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    Datatype(Datatype),
}

impl OwlEntity {
    /// Create an entity of the given kind from a shared IRI
    pub fn of_kind(kind: EntityKind, iri: Arc<IRI>) -> Self {
        match kind {
            EntityKind::Class => OwlEntity::Class(Class::from_iri(iri)),
            EntityKind::NamedIndividual => {
                OwlEntity::NamedIndividual(NamedIndividual::from_iri(iri))
            }
            EntityKind::ObjectProperty => OwlEntity::ObjectProperty(ObjectProperty::from_iri(iri)),
            EntityKind::DataProperty => OwlEntity::DataProperty(DataProperty::from_iri(iri)),
            EntityKind::AnnotationProperty => {
                OwlEntity::AnnotationProperty(AnnotationProperty::from_iri(iri))
            }
            EntityKind::Datatype => OwlEntity::Datatype(Datatype::from_iri(iri)),
        }
    }

    /// Get the IRI of this entity
    pub fn iri(&self) -> &Arc<IRI> {
        match self {
            OwlEntity::Class(e) => e.iri(),
            OwlEntity::NamedIndividual(e) => e.iri(),
            OwlEntity::ObjectProperty(e) => e.iri(),
            OwlEntity::DataProperty(e) => e.iri(),
            OwlEntity::AnnotationProperty(e) => e.iri(),
            OwlEntity::Datatype(e) => e.iri(),
        }
    }

    /// The kind of this entity
    pub fn kind(&self) -> EntityKind {
        match self {
            OwlEntity::Class(_) => EntityKind::Class,
            OwlEntity::NamedIndividual(_) => EntityKind::NamedIndividual,
            OwlEntity::ObjectProperty(_) => EntityKind::ObjectProperty,
            OwlEntity::DataProperty(_) => EntityKind::DataProperty,
            OwlEntity::AnnotationProperty(_) => EntityKind::AnnotationProperty,
            OwlEntity::Datatype(_) => EntityKind::Datatype,
        }
    }
}

impl From<Class> for OwlEntity {
    fn from(entity: Class) -> Self {
        OwlEntity::Class(entity)
    }
}

impl From<NamedIndividual> for OwlEntity {
    fn from(entity: NamedIndividual) -> Self {
        OwlEntity::NamedIndividual(entity)
    }
}

impl From<ObjectProperty> for OwlEntity {
    fn from(entity: ObjectProperty) -> Self {
        OwlEntity::ObjectProperty(entity)
    }
}

impl From<DataProperty> for OwlEntity {
    fn from(entity: DataProperty) -> Self {
        OwlEntity::DataProperty(entity)
    }
}

impl From<AnnotationProperty> for OwlEntity {
    fn from(entity: AnnotationProperty) -> Self {
        OwlEntity::AnnotationProperty(entity)
    }
}

impl From<Datatype> for OwlEntity {
    fn from(entity: Datatype) -> Self {
        OwlEntity::Datatype(entity)
    }
}

impl fmt::Display for OwlEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iri())
    }
}
