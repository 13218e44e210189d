//! SWRL atoms and built-in arguments
//!
//! Tagged variants for the atoms a rule body or head may contain and for the
//! arguments a built-in call may carry. Construction happens through the
//! argument factory; after construction the model is read-only apart from
//! the idempotent unbound flag on variable arguments.

use crate::iri::IRI;
use crate::literals::Literal;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A term of a non-built-in atom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AtomArgument {
    /// A rule variable, by name
    Variable(String),
    /// A named individual
    Individual(Arc<IRI>),
    /// A literal value
    Literal(Literal),
}

impl AtomArgument {
    /// The variable name, if this term is a variable
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            AtomArgument::Variable(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for AtomArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomArgument::Variable(name) => write!(f, "?{name}"),
            AtomArgument::Individual(iri) => write!(f, "{iri}"),
            AtomArgument::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// A variable argument of a built-in call
///
/// The unbound flag marks a variable the built-in must produce rather than
/// consume; it is set by the canonicalizer and setting it again is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableArgument {
    name: String,
    unbound: bool,
}

impl VariableArgument {
    /// Create a bound variable argument
    pub fn new<S: Into<String>>(name: S) -> Self {
        VariableArgument {
            name: name.into(),
            unbound: false,
        }
    }

    /// Create an unbound variable argument
    pub fn unbound<S: Into<String>>(name: S) -> Self {
        VariableArgument {
            name: name.into(),
            unbound: true,
        }
    }

    /// The variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the built-in must bind this variable itself
    pub fn is_unbound(&self) -> bool {
        self.unbound
    }

    /// Mark the variable unbound; idempotent
    pub fn set_unbound(&mut self) {
        self.unbound = true;
    }
}

impl fmt::Display for VariableArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// A SQWRL collection reference argument
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqwrlCollectionArgument {
    query_name: String,
    collection_name: String,
    group_id: String,
}

impl SqwrlCollectionArgument {
    /// Create a collection reference
    pub fn new<Q, C, G>(query_name: Q, collection_name: C, group_id: G) -> Self
    where
        Q: Into<String>,
        C: Into<String>,
        G: Into<String>,
    {
        SqwrlCollectionArgument {
            query_name: query_name.into(),
            collection_name: collection_name.into(),
            group_id: group_id.into(),
        }
    }

    /// The owning query name
    pub fn query_name(&self) -> &str {
        &self.query_name
    }

    /// The collection name within the query
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The group discriminator
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

/// An argument of a built-in call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuiltInArgument {
    /// A rule variable
    Variable(VariableArgument),
    /// A literal value
    Literal(Literal),
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
    /// A datatype reference
    Datatype(Arc<IRI>),
    /// An ordered multi-value argument
    MultiValue(Vec<BuiltInArgument>),
    /// A SQWRL collection reference
    Collection(SqwrlCollectionArgument),
}

impl BuiltInArgument {
    /// The variable name, if this argument is a variable
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            BuiltInArgument::Variable(variable) => Some(variable.name()),
            _ => None,
        }
    }

    /// Whether this argument is an unbound variable
    pub fn is_unbound_variable(&self) -> bool {
        matches!(self, BuiltInArgument::Variable(v) if v.is_unbound())
    }
}

impl fmt::Display for BuiltInArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltInArgument::Variable(variable) => write!(f, "{variable}"),
            BuiltInArgument::Literal(literal) => write!(f, "{literal}"),
            BuiltInArgument::Class(iri)
            | BuiltInArgument::Individual(iri)
            | BuiltInArgument::ObjectProperty(iri)
            | BuiltInArgument::DataProperty(iri)
            | BuiltInArgument::AnnotationProperty(iri)
            | BuiltInArgument::Datatype(iri) => write!(f, "{iri}"),
            BuiltInArgument::MultiValue(values) => {
                write!(f, "({})", values.iter().format(", "))
            }
            BuiltInArgument::Collection(collection) => write!(
                f,
                "{}:{}@{}",
                collection.query_name(),
                collection.collection_name(),
                collection.group_id()
            ),
        }
    }
}

/// A class atom: `C(x)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassAtom {
    class: Arc<IRI>,
    argument: AtomArgument,
}

impl ClassAtom {
    /// Create a new class atom
    pub fn new(class: Arc<IRI>, argument: AtomArgument) -> Self {
        ClassAtom { class, argument }
    }

    /// The class predicate
    pub fn class(&self) -> &Arc<IRI> {
        &self.class
    }

    /// The individual-position term
    pub fn argument(&self) -> &AtomArgument {
        &self.argument
    }
}

/// An object property atom: `P(x, y)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPropertyAtom {
    property: Arc<IRI>,
    subject: AtomArgument,
    object: AtomArgument,
}

impl ObjectPropertyAtom {
    /// Create a new object property atom
    pub fn new(property: Arc<IRI>, subject: AtomArgument, object: AtomArgument) -> Self {
        ObjectPropertyAtom {
            property,
            subject,
            object,
        }
    }

    /// The property predicate
    pub fn property(&self) -> &Arc<IRI> {
        &self.property
    }

    /// The subject term
    pub fn subject(&self) -> &AtomArgument {
        &self.subject
    }

    /// The object term
    pub fn object(&self) -> &AtomArgument {
        &self.object
    }
}

/// A data property atom: `Q(x, v)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPropertyAtom {
    property: Arc<IRI>,
    subject: AtomArgument,
    object: AtomArgument,
}

impl DataPropertyAtom {
    /// Create a new data property atom
    pub fn new(property: Arc<IRI>, subject: AtomArgument, object: AtomArgument) -> Self {
        DataPropertyAtom {
            property,
            subject,
            object,
        }
    }

    /// The property predicate
    pub fn property(&self) -> &Arc<IRI> {
        &self.property
    }

    /// The subject term
    pub fn subject(&self) -> &AtomArgument {
        &self.subject
    }

    /// The value-position term
    pub fn object(&self) -> &AtomArgument {
        &self.object
    }
}

/// A same-individual atom: `sameAs(x, y)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SameIndividualAtom {
    first: AtomArgument,
    second: AtomArgument,
}

impl SameIndividualAtom {
    /// Create a new same-individual atom
    pub fn new(first: AtomArgument, second: AtomArgument) -> Self {
        SameIndividualAtom { first, second }
    }

    /// The first term
    pub fn first(&self) -> &AtomArgument {
        &self.first
    }

    /// The second term
    pub fn second(&self) -> &AtomArgument {
        &self.second
    }
}

/// A different-individuals atom: `differentFrom(x, y)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DifferentIndividualsAtom {
    first: AtomArgument,
    second: AtomArgument,
}

impl DifferentIndividualsAtom {
    /// Create a new different-individuals atom
    pub fn new(first: AtomArgument, second: AtomArgument) -> Self {
        DifferentIndividualsAtom { first, second }
    }

    /// The first term
    pub fn first(&self) -> &AtomArgument {
        &self.first
    }

    /// The second term
    pub fn second(&self) -> &AtomArgument {
        &self.second
    }
}

/// A built-in call atom: `swrlb:add(?z, ?x, ?y)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuiltInAtom {
    /// The prefixed built-in name, e.g. `swrlb:greaterThan`
    name: String,
    arguments: SmallVec<[BuiltInArgument; 4]>,
}

impl BuiltInAtom {
    /// Create a new built-in atom
    pub fn new<S: Into<String>>(name: S, arguments: Vec<BuiltInArgument>) -> Self {
        BuiltInAtom {
            name: name.into(),
            arguments: SmallVec::from_vec(arguments),
        }
    }

    /// The prefixed built-in name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered arguments
    pub fn arguments(&self) -> &[BuiltInArgument] {
        &self.arguments
    }

    /// Whether this call invokes a SQWRL built-in
    pub fn is_sqwrl(&self) -> bool {
        crate::constants::is_sqwrl_built_in(&self.name)
    }

    pub(crate) fn arguments_mut(&mut self) -> &mut [BuiltInArgument] {
        &mut self.arguments
    }
}

/// A rule body or head atom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    Class(ClassAtom),
    ObjectProperty(ObjectPropertyAtom),
    DataProperty(DataPropertyAtom),
    SameIndividual(SameIndividualAtom),
    DifferentIndividuals(DifferentIndividualsAtom),
    BuiltIn(BuiltInAtom),
}

impl Atom {
    /// Whether this atom is a built-in call
    pub fn is_built_in(&self) -> bool {
        matches!(self, Atom::BuiltIn(_))
    }

    /// Whether this atom is a class atom
    pub fn is_class(&self) -> bool {
        matches!(self, Atom::Class(_))
    }

    /// Names of every variable this atom references, in term order
    pub fn variable_names(&self) -> Vec<&str> {
        fn push_term<'a>(names: &mut Vec<&'a str>, term: &'a AtomArgument) {
            if let Some(name) = term.variable_name() {
                names.push(name);
            }
        }

        let mut names = Vec::new();
        match self {
            Atom::Class(atom) => push_term(&mut names, atom.argument()),
            Atom::ObjectProperty(atom) => {
                push_term(&mut names, atom.subject());
                push_term(&mut names, atom.object());
            }
            Atom::DataProperty(atom) => {
                push_term(&mut names, atom.subject());
                push_term(&mut names, atom.object());
            }
            Atom::SameIndividual(atom) => {
                push_term(&mut names, atom.first());
                push_term(&mut names, atom.second());
            }
            Atom::DifferentIndividuals(atom) => {
                push_term(&mut names, atom.first());
                push_term(&mut names, atom.second());
            }
            Atom::BuiltIn(atom) => {
                for argument in atom.arguments() {
                    if let Some(name) = argument.variable_name() {
                        names.push(name);
                    }
                }
            }
        }
        names
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Class(atom) => write!(f, "{}({})", atom.class(), atom.argument()),
            Atom::ObjectProperty(atom) => {
                write!(f, "{}({}, {})", atom.property(), atom.subject(), atom.object())
            }
            Atom::DataProperty(atom) => {
                write!(f, "{}({}, {})", atom.property(), atom.subject(), atom.object())
            }
            Atom::SameIndividual(atom) => {
                write!(f, "sameAs({}, {})", atom.first(), atom.second())
            }
            Atom::DifferentIndividuals(atom) => {
                write!(f, "differentFrom({}, {})", atom.first(), atom.second())
            }
            Atom::BuiltIn(atom) => {
                write!(f, "{}({})", atom.name(), atom.arguments().iter().format(", "))
            }
        }
    }
}
