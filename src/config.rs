//! Engine configuration

/// Configuration for ontology processing and query result limits
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Walk imported ontologies during processing
    pub include_imports: bool,
    /// Cap on rows a query result may accumulate; `None` means unbounded
    pub max_result_rows: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            include_imports: true,
            max_result_rows: None,
        }
    }
}
