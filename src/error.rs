//! Error types for the SWRL rule and SQWRL query engine

use thiserror::Error;

/// SWRL engine error type
#[derive(Error, Debug)]
pub enum SwrlError {
    /// IRI-related errors
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Unknown namespace prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Unknown SQWRL query name
    #[error("Invalid SQWRL query name: {0}")]
    InvalidQueryName(String),

    /// Unknown rule name
    #[error("Invalid rule name: {0}")]
    InvalidRuleName(String),

    /// Operation attempted in the wrong result phase or row state
    #[error("Result state error: {0}")]
    ResultState(String),

    /// Unknown result column name
    #[error("Invalid column name: {0}")]
    InvalidColumnName(String),

    /// Result column index out of range
    #[error("Invalid column index {index}: result has {count} columns")]
    InvalidColumnIndex { index: usize, count: usize },

    /// Result row index out of range
    #[error("Invalid row index {index}: result has {count} rows")]
    InvalidRowIndex { index: usize, count: usize },

    /// Typed result accessor applied to a cell of a different kind
    #[error("Invalid column type: expected {expected}, found {actual}")]
    InvalidColumnType { expected: String, actual: String },

    /// Unknown aggregate function name
    #[error("Invalid aggregate function: {0}")]
    InvalidAggregateFunction(String),

    /// Structurally invalid query configuration
    #[error("Invalid SQWRL query: {0}")]
    InvalidQuery(String),

    /// Typed literal operation against an incompatible datatype
    #[error("Literal type error: {datatype} literal cannot be used as {requested}")]
    LiteralType { datatype: String, requested: String },

    /// Built-in processing error surfaced by the built-in bridge
    #[error("Built-in error: {0}")]
    BuiltIn(String),

    /// The target rule engine failed
    #[error("Target rule engine error: {engine}: {message}")]
    TargetEngine { engine: String, message: String },

    /// Orchestrator failure wrapping a lower-layer error
    #[error("Rule engine error: {message}")]
    RuleEngine {
        message: String,
        #[source]
        source: Box<SwrlError>,
    },
}

impl SwrlError {
    /// Wrap a lower-layer error with orchestrator context
    pub fn rule_engine<S: Into<String>>(message: S, source: SwrlError) -> Self {
        SwrlError::RuleEngine {
            message: message.into(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for SWRL engine operations
pub type SwrlResult<T> = Result<T, SwrlError>;
