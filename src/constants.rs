//! Constants for the SWRL engine
//!
//! Centralizes the namespace IRIs, well-known vocabulary helpers, and the
//! SQWRL built-in name set used to separate rules from queries.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Namespace IRI strings
pub mod namespaces {
    /// OWL namespace
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XML Schema datatypes namespace
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// SWRL namespace
    pub const SWRL: &str = "http://www.w3.org/2003/11/swrl#";
    /// SWRL built-ins namespace
    pub const SWRLB: &str = "http://www.w3.org/2003/11/swrlb#";
    /// SQWRL namespace
    pub const SQWRL: &str = "http://sqwrl.stanford.edu/ontologies/built-ins/3.4/sqwrl.owl#";
}

/// XSD vocabulary IRIs
pub mod xsd {
    use crate::iri::IRI;
    use std::sync::Arc;

    /// Build an IRI in the XSD namespace
    pub fn datatype(local_name: &str) -> Arc<IRI> {
        IRI::new(format!("{}{}", super::namespaces::XSD, local_name))
            .expect("Valid XSD datatype IRI")
    }

    /// xsd:string datatype
    pub fn string() -> Arc<IRI> {
        datatype("string")
    }

    /// xsd:boolean datatype
    pub fn boolean() -> Arc<IRI> {
        datatype("boolean")
    }

    /// xsd:int datatype
    pub fn int() -> Arc<IRI> {
        datatype("int")
    }

    /// xsd:double datatype
    pub fn double() -> Arc<IRI> {
        datatype("double")
    }

    /// xsd:dateTime datatype
    pub fn date_time() -> Arc<IRI> {
        datatype("dateTime")
    }
}

/// SQWRL vocabulary: prefixed built-in names
pub mod sqwrl {
    /// Prefix used for SQWRL built-in names
    pub const PREFIX: &str = "sqwrl";

    /// sqwrl:select
    pub const SELECT: &str = "sqwrl:select";
    /// sqwrl:selectDistinct
    pub const SELECT_DISTINCT: &str = "sqwrl:selectDistinct";
    /// sqwrl:count
    pub const COUNT: &str = "sqwrl:count";
    /// sqwrl:countDistinct
    pub const COUNT_DISTINCT: &str = "sqwrl:countDistinct";
    /// sqwrl:min
    pub const MIN: &str = "sqwrl:min";
    /// sqwrl:max
    pub const MAX: &str = "sqwrl:max";
    /// sqwrl:sum
    pub const SUM: &str = "sqwrl:sum";
    /// sqwrl:avg
    pub const AVG: &str = "sqwrl:avg";
    /// sqwrl:median
    pub const MEDIAN: &str = "sqwrl:median";
    /// sqwrl:orderBy
    pub const ORDER_BY: &str = "sqwrl:orderBy";
    /// sqwrl:orderByDescending
    pub const ORDER_BY_DESCENDING: &str = "sqwrl:orderByDescending";
    /// sqwrl:columnNames
    pub const COLUMN_NAMES: &str = "sqwrl:columnNames";
    /// sqwrl:limit
    pub const LIMIT: &str = "sqwrl:limit";
}

/// Aggregate function names accepted by the result engine (lowercase forms)
pub mod aggregates {
    /// Minimum of a numeric group
    pub const MIN: &str = "min";
    /// Maximum of a numeric group
    pub const MAX: &str = "max";
    /// Double-precision sum of a numeric group
    pub const SUM: &str = "sum";
    /// Double-precision average of a numeric group
    pub const AVG: &str = "avg";
    /// Count of values in a group
    pub const COUNT: &str = "count";
    /// Count of distinct values in a group
    pub const COUNT_DISTINCT: &str = "count-distinct";
}

/// Prefixed names of every SQWRL built-in
///
/// A rule whose body or head invokes any of these is a SQWRL query rather
/// than a plain SWRL rule.
pub static SQWRL_BUILT_IN_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Core selection and aggregation
        sqwrl::SELECT,
        sqwrl::SELECT_DISTINCT,
        sqwrl::COUNT,
        sqwrl::COUNT_DISTINCT,
        sqwrl::MIN,
        sqwrl::MAX,
        sqwrl::SUM,
        sqwrl::AVG,
        sqwrl::MEDIAN,
        sqwrl::ORDER_BY,
        sqwrl::ORDER_BY_DESCENDING,
        sqwrl::COLUMN_NAMES,
        // Row selection operators
        sqwrl::LIMIT,
        "sqwrl:nth",
        "sqwrl:notNth",
        "sqwrl:firstN",
        "sqwrl:lastN",
        "sqwrl:notFirstN",
        "sqwrl:notLastN",
        "sqwrl:nthSlice",
        "sqwrl:notNthSlice",
        "sqwrl:nthLastSlice",
        "sqwrl:notNthLastSlice",
        // Collection construction
        "sqwrl:makeSet",
        "sqwrl:makeBag",
        "sqwrl:groupBy",
        // Collection operators
        "sqwrl:size",
        "sqwrl:isEmpty",
        "sqwrl:notEmpty",
        "sqwrl:element",
        "sqwrl:notElement",
        "sqwrl:intersection",
        "sqwrl:union",
        "sqwrl:difference",
        "sqwrl:contains",
        "sqwrl:greatest",
        "sqwrl:least",
        "sqwrl:nthGreatest",
        "sqwrl:notNthGreatest",
    ]
    .into_iter()
    .collect()
});

/// Check whether a prefixed built-in name belongs to the SQWRL vocabulary
pub fn is_sqwrl_built_in(name: &str) -> bool {
    SQWRL_BUILT_IN_NAMES.contains(name)
}
