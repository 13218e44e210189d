//! Engine orchestration
//!
//! Drives a session against a pluggable target reasoner: reset re-derives
//! the processor state and clears the export ledger, import hands every
//! asserted axiom to the target exactly once, run invokes the target with a
//! bridge it can call back into, and write-back folds injected and inferred
//! axioms into the source ontology inside a bulk conversion.

use crate::axioms::Axiom;
use crate::config::EngineConfig;
use crate::error::{SwrlError, SwrlResult};
use crate::ontology::Ontology;
use crate::processor::OntologyProcessor;
use crate::result::{ResultPhase, SqwrlResultTable};
use crate::rules::SwrlRule;
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

/// A pluggable target reasoner
///
/// The orchestrator exports asserted axioms and queries through this
/// interface and then invokes `run_rule_engine`, passing a bridge the target
/// may call back into to report inferred axioms, inject axioms on behalf of
/// built-ins, and populate query result tables.
pub trait TargetRuleEngine {
    /// The target engine's name
    fn name(&self) -> &str;

    /// The target engine's version
    fn version(&self) -> &str;

    /// Receive an asserted axiom (SWRL rules included)
    fn define_axiom(&mut self, axiom: &Axiom) -> SwrlResult<()>;

    /// Receive a query; `active` indicates its result table is to be filled
    fn define_query(&mut self, query: &SwrlRule, active: bool) -> SwrlResult<()>;

    /// Perform reasoning
    fn run_rule_engine(&mut self, bridge: &mut dyn RuleEngineBridge) -> SwrlResult<()>;

    /// Discard all exported state
    fn reset_rule_engine(&mut self) -> SwrlResult<()>;
}

/// Callback surface handed to the target reasoner during a run
pub trait RuleEngineBridge {
    /// Record an axiom the reasoner inferred
    fn write_inferred_axiom(&mut self, axiom: Axiom) -> SwrlResult<()>;

    /// Record an axiom a built-in injected
    fn inject_axiom(&mut self, axiom: Axiom) -> SwrlResult<()>;

    /// The result table of a query, for population through the generator ops
    fn result_table(&mut self, query_name: &str) -> SwrlResult<&mut SqwrlResultTable>;
}

/// Bridge state: injected and inferred axioms plus per-query result tables
#[derive(Debug, Default)]
pub struct BridgeController {
    inferred_axioms: IndexSet<Axiom>,
    injected_axioms: IndexSet<Axiom>,
    result_tables: IndexMap<String, SqwrlResultTable>,
}

impl BridgeController {
    /// Create an empty controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Axioms inferred by the target during the last run
    pub fn inferred_axioms(&self) -> &IndexSet<Axiom> {
        &self.inferred_axioms
    }

    /// Axioms injected by built-ins during the last run
    pub fn injected_axioms(&self) -> &IndexSet<Axiom> {
        &self.injected_axioms
    }

    /// Whether an axiom was injected by a built-in
    pub fn is_injected_axiom(&self, axiom: &Axiom) -> bool {
        self.injected_axioms.contains(axiom)
    }

    /// Clear all state, including registered result tables
    pub fn reset_controller(&mut self) {
        self.inferred_axioms.clear();
        self.injected_axioms.clear();
        self.result_tables.clear();
    }

    /// Register a fresh result table for a query
    pub fn register_query<S: Into<String>>(&mut self, query_name: S, table: SqwrlResultTable) {
        self.result_tables.insert(query_name.into(), table);
    }

    /// Read access to a query's result table
    pub fn result(&self, query_name: &str) -> SwrlResult<&SqwrlResultTable> {
        self.result_tables
            .get(query_name)
            .ok_or_else(|| SwrlError::InvalidQueryName(query_name.to_string()))
    }
}

impl RuleEngineBridge for BridgeController {
    fn write_inferred_axiom(&mut self, axiom: Axiom) -> SwrlResult<()> {
        trace!("inferred axiom: {axiom}");
        self.inferred_axioms.insert(axiom);
        Ok(())
    }

    fn inject_axiom(&mut self, axiom: Axiom) -> SwrlResult<()> {
        trace!("injected axiom: {axiom}");
        self.injected_axioms.insert(axiom);
        Ok(())
    }

    fn result_table(&mut self, query_name: &str) -> SwrlResult<&mut SqwrlResultTable> {
        self.result_tables
            .get_mut(query_name)
            .ok_or_else(|| SwrlError::InvalidQueryName(query_name.to_string()))
    }
}

/// The engine orchestrator
pub struct SwrlRuleEngine {
    processor: OntologyProcessor,
    target: Box<dyn TargetRuleEngine>,
    bridge: BridgeController,
    exported_axioms: IndexSet<Axiom>,
}

impl SwrlRuleEngine {
    /// Create an engine over an ontology and a target reasoner
    ///
    /// The engine starts reset, with the ontology processed.
    pub fn new(ontology: Ontology, target: Box<dyn TargetRuleEngine>) -> SwrlResult<Self> {
        Self::with_config(ontology, target, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(
        ontology: Ontology,
        target: Box<dyn TargetRuleEngine>,
        config: EngineConfig,
    ) -> SwrlResult<Self> {
        let mut engine = SwrlRuleEngine {
            processor: OntologyProcessor::with_config(ontology, config),
            target,
            bridge: BridgeController::new(),
            exported_axioms: IndexSet::new(),
        };
        engine.reset()?;
        Ok(engine)
    }

    /// The target reasoner's name
    pub fn target_name(&self) -> &str {
        self.target.name()
    }

    /// The target reasoner's version
    pub fn target_version(&self) -> &str {
        self.target.version()
    }

    /// The ontology processor holding the session state
    pub fn processor(&self) -> &OntologyProcessor {
        &self.processor
    }

    /// The bridge controller
    pub fn bridge(&self) -> &BridgeController {
        &self.bridge
    }

    /// Reset the session
    ///
    /// Re-processes the ontology, resets the target reasoner, clears the
    /// export ledger and the bridge, and registers a fresh result table for
    /// every query.
    pub fn reset(&mut self) -> SwrlResult<()> {
        self.processor
            .process_ontology()
            .map_err(|error| SwrlError::rule_engine("ontology processing failed", error))?;
        self.target
            .reset_rule_engine()
            .map_err(|error| SwrlError::rule_engine("target reset failed", error))?;
        self.exported_axioms.clear();
        self.bridge.reset_controller();

        let max_result_rows = self.processor.config().max_result_rows;
        let query_names: Vec<String> = self
            .processor
            .query_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        for query_name in query_names {
            self.bridge
                .register_query(query_name, SqwrlResultTable::with_max_rows(max_result_rows));
        }
        debug!("engine reset against target {}", self.target.name());
        Ok(())
    }

    /// Export every asserted axiom not already exported this session
    pub fn import_swrl_rules_and_owl_knowledge(&mut self) -> SwrlResult<()> {
        let mut exported = 0usize;
        for axiom in self.processor.asserted_axioms() {
            if self.exported_axioms.contains(axiom) {
                continue;
            }
            self.target
                .define_axiom(axiom)
                .map_err(|error| SwrlError::rule_engine("axiom export failed", error))?;
            self.exported_axioms.insert(axiom.clone());
            exported += 1;
        }
        debug!("exported {exported} axioms to {}", self.target.name());
        Ok(())
    }

    /// Export knowledge and queries, activating the named query
    ///
    /// Inactive queries are still exported with their active flag off.
    pub fn import_sqwrl_query_and_owl_knowledge(&mut self, query_name: &str) -> SwrlResult<()> {
        self.processor.query(query_name)?;
        self.import_swrl_rules_and_owl_knowledge()?;
        for query in self.processor.queries() {
            let active = query.name() == query_name;
            self.target
                .define_query(query, active)
                .map_err(|error| SwrlError::rule_engine("query export failed", error))?;
        }
        Ok(())
    }

    /// Invoke the target reasoner
    pub fn run(&mut self) -> SwrlResult<()> {
        self.target
            .run_rule_engine(&mut self.bridge)
            .map_err(|error| SwrlError::rule_engine("target run failed", error))
    }

    /// Fold injected and inferred axioms back into the source ontology
    ///
    /// The additions are batched in a bulk conversion.
    pub fn write_inferred_knowledge(&mut self) -> SwrlResult<()> {
        let axioms: Vec<Axiom> = self
            .bridge
            .injected_axioms()
            .iter()
            .chain(self.bridge.inferred_axioms().iter())
            .cloned()
            .collect();

        let ontology = self.processor.ontology_mut();
        ontology.start_bulk_conversion();
        for axiom in axioms {
            ontology.add_axiom(axiom);
        }
        ontology.complete_bulk_conversion();
        Ok(())
    }

    /// Reset, import, run, and write back inferred knowledge
    pub fn infer(&mut self) -> SwrlResult<()> {
        self.reset()?;
        self.import_swrl_rules_and_owl_knowledge()?;
        self.run()?;
        self.write_inferred_knowledge()
    }

    /// Run a single SQWRL query and return its prepared result
    ///
    /// Resets the session, imports knowledge with the named query active,
    /// runs the target, and serves the result. A query the target never
    /// populated yields an empty prepared result.
    pub fn run_sqwrl_query(&mut self, query_name: &str) -> SwrlResult<&SqwrlResultTable> {
        self.reset()?;
        self.import_sqwrl_query_and_owl_knowledge(query_name)?;
        self.run()?;

        let table = self.bridge.result_table(query_name)?;
        if table.phase() == ResultPhase::Configuring {
            table.configured()?;
        }
        if table.phase() == ResultPhase::Preparing {
            table.prepared()?;
        }
        self.bridge.result(query_name)
    }

    /// Read access to a query's result table after a run
    pub fn sqwrl_result(&self, query_name: &str) -> SwrlResult<&SqwrlResultTable> {
        self.bridge.result(query_name)
    }
}
