//! Property hierarchy, characteristic, and domain/range axioms

use crate::iri::IRI;
use std::sync::Arc;

macro_rules! sub_property_axiom {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            sub_property: Arc<IRI>,
            super_property: Arc<IRI>,
        }

        impl $name {
            /// Create a new subproperty axiom
            pub fn new(sub_property: Arc<IRI>, super_property: Arc<IRI>) -> Self {
                $name {
                    sub_property,
                    super_property,
                }
            }

            /// The subproperty
            pub fn sub_property(&self) -> &Arc<IRI> {
                &self.sub_property
            }

            /// The superproperty
            pub fn super_property(&self) -> &Arc<IRI> {
                &self.super_property
            }
        }
    };
}

macro_rules! property_set_axiom {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            properties: Vec<Arc<IRI>>,
        }

        impl $name {
            /// Create a new axiom over the given properties
            pub fn new(properties: Vec<Arc<IRI>>) -> Self {
                $name { properties }
            }

            /// The properties involved
            pub fn properties(&self) -> &[Arc<IRI>] {
                &self.properties
            }
        }
    };
}

macro_rules! property_characteristic_axiom {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            property: Arc<IRI>,
        }

        impl $name {
            /// Create a new characteristic axiom for the property
            pub fn new(property: Arc<IRI>) -> Self {
                $name { property }
            }

            /// The characterized property
            pub fn property(&self) -> &Arc<IRI> {
                &self.property
            }
        }
    };
}

sub_property_axiom!(
    /// Subproperty axiom over object properties: P ⊑ Q
    SubObjectPropertyOfAxiom
);
sub_property_axiom!(
    /// Subproperty axiom over data properties: Q ⊑ P
    SubDataPropertyOfAxiom
);

property_set_axiom!(
    /// Equivalent object properties axiom: P ≡ Q
    EquivalentObjectPropertiesAxiom
);
property_set_axiom!(
    /// Disjoint object properties axiom: P ⊓ Q ⊑ ⊥
    DisjointObjectPropertiesAxiom
);
property_set_axiom!(
    /// Equivalent data properties axiom: P ≡ Q
    EquivalentDataPropertiesAxiom
);
property_set_axiom!(
    /// Disjoint data properties axiom: P ⊓ Q ⊑ ⊥
    DisjointDataPropertiesAxiom
);

property_characteristic_axiom!(
    /// Transitive object property axiom
    TransitiveObjectPropertyAxiom
);
property_characteristic_axiom!(
    /// Symmetric object property axiom
    SymmetricObjectPropertyAxiom
);
property_characteristic_axiom!(
    /// Functional object property axiom
    FunctionalObjectPropertyAxiom
);
property_characteristic_axiom!(
    /// Inverse functional object property axiom
    InverseFunctionalObjectPropertyAxiom
);
property_characteristic_axiom!(
    /// Irreflexive object property axiom
    IrreflexiveObjectPropertyAxiom
);
property_characteristic_axiom!(
    /// Asymmetric object property axiom
    AsymmetricObjectPropertyAxiom
);
property_characteristic_axiom!(
    /// Functional data property axiom
    FunctionalDataPropertyAxiom
);

/// Inverse object properties axiom: P ≡ Q⁻
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InverseObjectPropertiesAxiom {
    first: Arc<IRI>,
    second: Arc<IRI>,
}

impl InverseObjectPropertiesAxiom {
    /// Create a new inverse-properties axiom
    pub fn new(first: Arc<IRI>, second: Arc<IRI>) -> Self {
        InverseObjectPropertiesAxiom { first, second }
    }

    /// The first property
    pub fn first(&self) -> &Arc<IRI> {
        &self.first
    }

    /// The property inverse to the first
    pub fn second(&self) -> &Arc<IRI> {
        &self.second
    }
}

macro_rules! property_domain_axiom {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            property: Arc<IRI>,
            domain: Arc<IRI>,
        }

        impl $name {
            /// Create a new domain axiom
            pub fn new(property: Arc<IRI>, domain: Arc<IRI>) -> Self {
                $name { property, domain }
            }

            /// The constrained property
            pub fn property(&self) -> &Arc<IRI> {
                &self.property
            }

            /// The domain class
            pub fn domain(&self) -> &Arc<IRI> {
                &self.domain
            }
        }
    };
}

macro_rules! property_range_axiom {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            property: Arc<IRI>,
            range: Arc<IRI>,
        }

        impl $name {
            /// Create a new range axiom
            pub fn new(property: Arc<IRI>, range: Arc<IRI>) -> Self {
                $name { property, range }
            }

            /// The constrained property
            pub fn property(&self) -> &Arc<IRI> {
                &self.property
            }

            /// The range class or datatype
            pub fn range(&self) -> &Arc<IRI> {
                &self.range
            }
        }
    };
}

property_domain_axiom!(
    /// Object property domain axiom
    ObjectPropertyDomainAxiom
);
property_domain_axiom!(
    /// Data property domain axiom
    DataPropertyDomainAxiom
);
property_range_axiom!(
    /// Object property range axiom; range is a class
    ObjectPropertyRangeAxiom
);
property_range_axiom!(
    /// Data property range axiom; range is a datatype
    DataPropertyRangeAxiom
);
