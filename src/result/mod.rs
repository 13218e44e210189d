//! SQWRL result engine
//!
//! A three-phase tabular result: **Configuring** (columns, aggregates,
//! ordering, distinctness, selection operators), **Preparing** (row
//! accumulation through the generator interface), and **Processing** (cursor
//! and random-access reads through the consumer interface). `configured()`
//! and `prepared()` advance the phases; every operation checks the phase it
//! is legal in and fails with a result-state error outside it.

mod prepare;
pub mod values;

pub use values::ResultValue;

use crate::error::{SwrlError, SwrlResult};
use crate::iri::IRI;
use crate::literals::Literal;
use hashbrown::HashMap;
use indexmap::IndexMap;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Result lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPhase {
    /// Accepting column and operator configuration
    Configuring,
    /// Accepting rows
    Preparing,
    /// Read-only
    Processing,
}

/// Aggregate functions usable on result columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Min,
    Max,
    Sum,
    Avg,
    Count,
    CountDistinct,
}

impl AggregateFunction {
    /// Resolve a function from its name; matching is case-insensitive
    pub fn from_name(name: &str) -> SwrlResult<Self> {
        use crate::constants::aggregates;
        match name.to_lowercase().as_str() {
            aggregates::MIN => Ok(AggregateFunction::Min),
            aggregates::MAX => Ok(AggregateFunction::Max),
            aggregates::SUM => Ok(AggregateFunction::Sum),
            aggregates::AVG => Ok(AggregateFunction::Avg),
            aggregates::COUNT => Ok(AggregateFunction::Count),
            aggregates::COUNT_DISTINCT => Ok(AggregateFunction::CountDistinct),
            _ => Err(SwrlError::InvalidAggregateFunction(name.to_string())),
        }
    }

    /// The canonical lowercase name
    pub fn name(&self) -> &'static str {
        use crate::constants::aggregates;
        match self {
            AggregateFunction::Min => aggregates::MIN,
            AggregateFunction::Max => aggregates::MAX,
            AggregateFunction::Sum => aggregates::SUM,
            AggregateFunction::Avg => aggregates::AVG,
            AggregateFunction::Count => aggregates::COUNT,
            AggregateFunction::CountDistinct => aggregates::COUNT_DISTINCT,
        }
    }

    /// Whether this function only accepts numeric inputs
    pub fn requires_numeric_input(&self) -> bool {
        matches!(
            self,
            AggregateFunction::Min
                | AggregateFunction::Max
                | AggregateFunction::Sum
                | AggregateFunction::Avg
        )
    }
}

/// A SQWRL tabular result
///
/// Built by the target reasoner through the generator operations and read by
/// the client through the consumer operations once `prepared()` has run.
#[derive(Debug, Clone)]
pub struct SqwrlResultTable {
    phase: ResultPhase,

    // Configuration
    column_names: Vec<String>,
    column_display_names: Vec<String>,
    selected_columns: Vec<usize>,
    aggregate_column_names: IndexMap<usize, String>,
    aggregate_columns: HashMap<usize, AggregateFunction>,
    order_by_columns: Vec<(usize, bool)>,
    is_distinct: bool,
    max_rows: Option<usize>,

    // Selection operators
    limit: Option<usize>,
    nth: Option<usize>,
    not_nth: Option<usize>,
    first_n: Option<usize>,
    last_n: Option<usize>,
    not_first_n: Option<usize>,
    not_last_n: Option<usize>,
    nth_slice: Option<(usize, usize)>,
    not_nth_slice: Option<(usize, usize)>,
    nth_last_slice: Option<(usize, usize)>,
    not_nth_last_slice: Option<(usize, usize)>,

    // Rows
    rows: Vec<Vec<ResultValue>>,
    current_row: Vec<ResultValue>,
    row_open: bool,

    // Processing
    cursor: isize,
    column_vectors: HashMap<String, Vec<ResultValue>>,
}

impl Default for SqwrlResultTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SqwrlResultTable {
    /// Create a new result in the Configuring phase
    pub fn new() -> Self {
        SqwrlResultTable {
            phase: ResultPhase::Configuring,
            column_names: Vec::new(),
            column_display_names: Vec::new(),
            selected_columns: Vec::new(),
            aggregate_column_names: IndexMap::new(),
            aggregate_columns: HashMap::new(),
            order_by_columns: Vec::new(),
            is_distinct: false,
            max_rows: None,
            limit: None,
            nth: None,
            not_nth: None,
            first_n: None,
            last_n: None,
            not_first_n: None,
            not_last_n: None,
            nth_slice: None,
            not_nth_slice: None,
            nth_last_slice: None,
            not_nth_last_slice: None,
            rows: Vec::new(),
            current_row: Vec::new(),
            row_open: false,
            cursor: -1,
            column_vectors: HashMap::new(),
        }
    }

    /// Create a new result with a cap on accumulated rows
    pub fn with_max_rows(max_rows: Option<usize>) -> Self {
        SqwrlResultTable {
            max_rows,
            ..Self::new()
        }
    }

    /// The current phase
    pub fn phase(&self) -> ResultPhase {
        self.phase
    }

    fn check_phase(&self, expected: ResultPhase, operation: &str) -> SwrlResult<()> {
        if self.phase != expected {
            return Err(SwrlError::ResultState(format!(
                "{operation} is only legal in the {expected:?} phase (current phase: {:?})",
                self.phase
            )));
        }
        Ok(())
    }

    // --- Configuring phase -------------------------------------------------

    /// Append a selected column
    pub fn add_column<S: Into<String>>(&mut self, name: S) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "add_column")?;
        self.selected_columns.push(self.column_names.len());
        self.column_names.push(name.into());
        Ok(())
    }

    /// Append an aggregate column with the named function
    pub fn add_aggregate_column<S: Into<String>, F: Into<String>>(
        &mut self,
        name: S,
        function: F,
    ) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "add_aggregate_column")?;
        self.aggregate_column_names
            .insert(self.column_names.len(), function.into());
        self.column_names.push(name.into());
        Ok(())
    }

    /// Declare an order-by column; all declarations must share a direction
    pub fn add_order_by_column(&mut self, column_index: usize, ascending: bool) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "add_order_by_column")?;
        self.order_by_columns.push((column_index, ascending));
        Ok(())
    }

    /// Append a display name, overriding the corresponding column name
    pub fn add_column_display_name<S: Into<String>>(&mut self, name: S) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "add_column_display_name")?;
        self.column_display_names.push(name.into());
        Ok(())
    }

    /// Request duplicate-row elimination
    pub fn set_is_distinct(&mut self) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_is_distinct")?;
        self.is_distinct = true;
        Ok(())
    }

    /// Close configuration, validate it, and start accepting rows
    pub fn configured(&mut self) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "configured")?;

        let mut aggregate_columns = HashMap::new();
        for (&index, function_name) in &self.aggregate_column_names {
            if self.selected_columns.contains(&index) {
                return Err(SwrlError::InvalidQuery(format!(
                    "column {index} is both selected and aggregated"
                )));
            }
            aggregate_columns.insert(index, AggregateFunction::from_name(function_name)?);
        }

        let mut direction: Option<bool> = None;
        for &(index, ascending) in &self.order_by_columns {
            if index >= self.column_names.len() {
                return Err(SwrlError::InvalidQuery(format!(
                    "order-by column {index} out of range for {} columns",
                    self.column_names.len()
                )));
            }
            match direction {
                None => direction = Some(ascending),
                Some(first) if first != ascending => {
                    return Err(SwrlError::InvalidQuery(
                        "cannot mix ascending and descending order-by declarations".to_string(),
                    ))
                }
                Some(_) => {}
            }
        }

        for display_name in &self.column_display_names {
            if display_name.is_empty() || display_name.contains(',') {
                return Err(SwrlError::InvalidQuery(format!(
                    "invalid column display name: \"{display_name}\""
                )));
            }
        }

        self.aggregate_columns = aggregate_columns;
        self.phase = ResultPhase::Preparing;
        Ok(())
    }

    // --- Selection operator setters (Configuring phase) --------------------

    /// Cap the result at the first `limit` rows; overrides all other operators
    pub fn set_limit(&mut self, limit: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_limit")?;
        self.limit = Some(clamp_index(limit));
        Ok(())
    }

    /// Select only the nth row
    pub fn set_nth(&mut self, n: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_nth")?;
        self.nth = Some(clamp_index(n));
        Ok(())
    }

    /// Drop the nth row
    pub fn set_not_nth(&mut self, n: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_not_nth")?;
        self.not_nth = Some(clamp_index(n));
        Ok(())
    }

    /// Keep the first n rows
    pub fn set_first(&mut self, n: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_first")?;
        self.first_n = Some(clamp_index(n));
        Ok(())
    }

    /// Keep the last n rows
    pub fn set_last(&mut self, n: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_last")?;
        self.last_n = Some(clamp_index(n));
        Ok(())
    }

    /// Drop the first n rows
    pub fn set_not_first(&mut self, n: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_not_first")?;
        self.not_first_n = Some(clamp_index(n));
        Ok(())
    }

    /// Drop the last n rows
    pub fn set_not_last(&mut self, n: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_not_last")?;
        self.not_last_n = Some(clamp_index(n));
        Ok(())
    }

    /// Keep a slice of size `slice_size` starting at the nth row
    pub fn set_nth_slice(&mut self, n: i64, slice_size: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_nth_slice")?;
        self.nth_slice = Some((clamp_index(n), clamp_index(slice_size)));
        Ok(())
    }

    /// Drop a slice of size `slice_size` starting at the nth row
    pub fn set_not_nth_slice(&mut self, n: i64, slice_size: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_not_nth_slice")?;
        self.not_nth_slice = Some((clamp_index(n), clamp_index(slice_size)));
        Ok(())
    }

    /// Keep a slice of size `slice_size` starting after the nth row
    pub fn set_nth_last_slice(&mut self, n: i64, slice_size: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_nth_last_slice")?;
        self.nth_last_slice = Some((clamp_index(n), clamp_index(slice_size)));
        Ok(())
    }

    /// Drop a slice of size `slice_size` starting after the nth row
    pub fn set_not_nth_last_slice(&mut self, n: i64, slice_size: i64) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Configuring, "set_not_nth_last_slice")?;
        self.not_nth_last_slice = Some((clamp_index(n), clamp_index(slice_size)));
        Ok(())
    }

    // --- Preparing phase ----------------------------------------------------

    /// Open a fresh row, discarding any pending cells
    pub fn open_row(&mut self) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Preparing, "open_row")?;
        self.current_row.clear();
        self.row_open = true;
        Ok(())
    }

    /// Append a value to the open row, opening one if needed
    ///
    /// The row closes automatically once every column has a value. Values
    /// destined for a min/max/sum/avg aggregate column must be numeric
    /// literals.
    pub fn add_row_data(&mut self, value: ResultValue) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Preparing, "add_row_data")?;
        if self.column_names.is_empty() {
            return Err(SwrlError::ResultState(
                "cannot add row data to a result with no columns".to_string(),
            ));
        }
        if !self.row_open {
            self.open_row()?;
        }

        let column_index = self.current_row.len();
        if let Some(function) = self.aggregate_columns.get(&column_index) {
            if function.requires_numeric_input() {
                let numeric = matches!(&value, ResultValue::Literal(literal) if literal.is_numeric());
                if !numeric {
                    return Err(SwrlError::LiteralType {
                        datatype: value.kind_name().to_string(),
                        requested: format!("a numeric literal for {} aggregation", function.name()),
                    });
                }
            }
        }

        self.current_row.push(value);
        if self.current_row.len() == self.column_names.len() {
            self.close_row()?;
        }
        Ok(())
    }

    /// Close the open row, appending its cells if any were added
    pub fn close_row(&mut self) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Preparing, "close_row")?;
        if self.row_open && !self.current_row.is_empty() {
            if let Some(max_rows) = self.max_rows {
                if self.rows.len() >= max_rows {
                    return Err(SwrlError::ResultState(format!(
                        "result row limit of {max_rows} exceeded"
                    )));
                }
            }
            self.rows.push(std::mem::take(&mut self.current_row));
        }
        self.current_row.clear();
        self.row_open = false;
        Ok(())
    }

    /// Append a complete row
    pub fn add_row(&mut self, values: Vec<ResultValue>) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Preparing, "add_row")?;
        self.open_row()?;
        for value in values {
            self.add_row_data(value)?;
        }
        self.close_row()
    }

    /// Close preparation: run the prepare pipeline and start serving reads
    ///
    /// Fails if a row is open with cells pending; a freshly opened empty row
    /// is discarded.
    pub fn prepared(&mut self) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Preparing, "prepared")?;
        if self.row_open && !self.current_row.is_empty() {
            return Err(SwrlError::ResultState(
                "cannot prepare a result with a partially filled row".to_string(),
            ));
        }
        self.row_open = false;
        self.current_row.clear();

        self.materialize()?;
        self.phase = ResultPhase::Processing;
        self.cursor = if self.rows.is_empty() { -1 } else { 0 };
        debug!(
            "result prepared: {} rows x {} columns",
            self.rows.len(),
            self.column_names.len()
        );
        Ok(())
    }

    // --- Metadata -----------------------------------------------------------

    /// Number of configured columns
    pub fn number_of_columns(&self) -> usize {
        self.column_names.len()
    }

    /// The effective name of a column: its display name when one was given
    pub fn column_name(&self, column_index: usize) -> SwrlResult<&str> {
        if column_index >= self.column_names.len() {
            return Err(SwrlError::InvalidColumnIndex {
                index: column_index,
                count: self.column_names.len(),
            });
        }
        Ok(self
            .column_display_names
            .get(column_index)
            .unwrap_or(&self.column_names[column_index]))
    }

    /// Effective names of every column, in order
    pub fn column_names(&self) -> Vec<&str> {
        (0..self.column_names.len())
            .map(|index| {
                self.column_display_names
                    .get(index)
                    .unwrap_or(&self.column_names[index])
                    .as_str()
            })
            .collect()
    }

    fn column_index(&self, name: &str) -> SwrlResult<usize> {
        self.column_names()
            .iter()
            .position(|column| *column == name)
            .ok_or_else(|| SwrlError::InvalidColumnName(name.to_string()))
    }

    // --- Processing phase ---------------------------------------------------

    /// Number of rows in the prepared result
    pub fn number_of_rows(&self) -> SwrlResult<usize> {
        self.check_phase(ResultPhase::Processing, "number_of_rows")?;
        Ok(self.rows.len())
    }

    /// Whether the cursor points at a row
    pub fn has_next(&self) -> bool {
        self.phase == ResultPhase::Processing
            && self.cursor >= 0
            && (self.cursor as usize) < self.rows.len()
    }

    /// Advance the cursor past the current row
    pub fn next(&mut self) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Processing, "next")?;
        if !self.has_next() {
            return Err(SwrlError::InvalidRowIndex {
                index: self.cursor.max(0) as usize,
                count: self.rows.len(),
            });
        }
        self.cursor += 1;
        Ok(())
    }

    /// Rewind the cursor to the first row
    pub fn reset(&mut self) -> SwrlResult<()> {
        self.check_phase(ResultPhase::Processing, "reset")?;
        self.cursor = if self.rows.is_empty() { -1 } else { 0 };
        Ok(())
    }

    /// The row under the cursor
    pub fn get_row(&self) -> SwrlResult<&[ResultValue]> {
        self.check_phase(ResultPhase::Processing, "get_row")?;
        if self.cursor < 0 || self.cursor as usize >= self.rows.len() {
            return Err(SwrlError::InvalidRowIndex {
                index: self.cursor.max(0) as usize,
                count: self.rows.len(),
            });
        }
        Ok(&self.rows[self.cursor as usize])
    }

    /// The current row's value in the given column
    pub fn get_value(&self, column_index: usize) -> SwrlResult<&ResultValue> {
        let row = self.get_row()?;
        row.get(column_index)
            .ok_or_else(|| SwrlError::InvalidColumnIndex {
                index: column_index,
                count: row.len(),
            })
    }

    /// The current row's value in the named column
    pub fn get_value_by_name(&self, column_name: &str) -> SwrlResult<&ResultValue> {
        let column_index = self.column_index(column_name)?;
        self.get_value(column_index)
    }

    /// Random access to any cell
    pub fn get_value_at(&self, column_index: usize, row_index: usize) -> SwrlResult<&ResultValue> {
        self.check_phase(ResultPhase::Processing, "get_value_at")?;
        let row = self
            .rows
            .get(row_index)
            .ok_or_else(|| SwrlError::InvalidRowIndex {
                index: row_index,
                count: self.rows.len(),
            })?;
        row.get(column_index)
            .ok_or_else(|| SwrlError::InvalidColumnIndex {
                index: column_index,
                count: row.len(),
            })
    }

    /// A whole column by effective name
    pub fn get_column(&self, column_name: &str) -> SwrlResult<&[ResultValue]> {
        self.check_phase(ResultPhase::Processing, "get_column")?;
        self.column_vectors
            .get(column_name)
            .map(Vec::as_slice)
            .ok_or_else(|| SwrlError::InvalidColumnName(column_name.to_string()))
    }

    /// A whole column by index
    pub fn get_column_by_index(&self, column_index: usize) -> SwrlResult<&[ResultValue]> {
        let column_name = self.column_name(column_index)?.to_string();
        self.get_column(&column_name)
    }

    // --- Typed accessors ----------------------------------------------------

    /// The current row's class value in the named column
    pub fn get_class_value(&self, column_name: &str) -> SwrlResult<&Arc<IRI>> {
        match self.get_value_by_name(column_name)? {
            ResultValue::Class(iri) => Ok(iri),
            other => Err(invalid_column_type("class", other)),
        }
    }

    /// The current row's individual value in the named column
    pub fn get_object_value(&self, column_name: &str) -> SwrlResult<&Arc<IRI>> {
        match self.get_value_by_name(column_name)? {
            ResultValue::Individual(iri) => Ok(iri),
            other => Err(invalid_column_type("individual", other)),
        }
    }

    /// The current row's property value in the named column
    pub fn get_property_value(&self, column_name: &str) -> SwrlResult<&Arc<IRI>> {
        match self.get_value_by_name(column_name)? {
            ResultValue::ObjectProperty(iri)
            | ResultValue::DataProperty(iri)
            | ResultValue::AnnotationProperty(iri) => Ok(iri),
            other => Err(invalid_column_type("property", other)),
        }
    }

    /// The current row's literal value in the named column
    pub fn get_literal_value(&self, column_name: &str) -> SwrlResult<&Literal> {
        match self.get_value_by_name(column_name)? {
            ResultValue::Literal(literal) => Ok(literal),
            other => Err(invalid_column_type("literal", other)),
        }
    }

    // --- Internal accessors used by the prepare pipeline --------------------

    pub(crate) fn take_rows(&mut self) -> Vec<Vec<ResultValue>> {
        std::mem::take(&mut self.rows)
    }

    pub(crate) fn put_rows(&mut self, rows: Vec<Vec<ResultValue>>) {
        self.rows = rows;
    }

    pub(crate) fn aggregate_columns(&self) -> &HashMap<usize, AggregateFunction> {
        &self.aggregate_columns
    }

    pub(crate) fn order_by(&self) -> &[(usize, bool)] {
        &self.order_by_columns
    }

    pub(crate) fn is_distinct(&self) -> bool {
        self.is_distinct
    }

    pub(crate) fn set_column_vectors(&mut self, column_vectors: HashMap<String, Vec<ResultValue>>) {
        self.column_vectors = column_vectors;
    }

    pub(crate) fn selection_operators(&self) -> SelectionOperators {
        SelectionOperators {
            limit: self.limit,
            nth: self.nth,
            not_nth: self.not_nth,
            first_n: self.first_n,
            last_n: self.last_n,
            not_first_n: self.not_first_n,
            not_last_n: self.not_last_n,
            nth_slice: self.nth_slice,
            not_nth_slice: self.not_nth_slice,
            nth_last_slice: self.nth_last_slice,
            not_nth_last_slice: self.not_nth_last_slice,
        }
    }
}

/// Snapshot of the configured selection operators
#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectionOperators {
    pub limit: Option<usize>,
    pub nth: Option<usize>,
    pub not_nth: Option<usize>,
    pub first_n: Option<usize>,
    pub last_n: Option<usize>,
    pub not_first_n: Option<usize>,
    pub not_last_n: Option<usize>,
    pub nth_slice: Option<(usize, usize)>,
    pub not_nth_slice: Option<(usize, usize)>,
    pub nth_last_slice: Option<(usize, usize)>,
    pub not_nth_last_slice: Option<(usize, usize)>,
}

impl SelectionOperators {
    /// Whether any non-limit operator is enabled
    pub fn any_non_limit(&self) -> bool {
        self.nth.is_some()
            || self.not_nth.is_some()
            || self.first_n.is_some()
            || self.last_n.is_some()
            || self.not_first_n.is_some()
            || self.not_last_n.is_some()
            || self.nth_slice.is_some()
            || self.not_nth_slice.is_some()
            || self.nth_last_slice.is_some()
            || self.not_nth_last_slice.is_some()
    }
}

/// Selection indices are 1-based and clamp up to 1
fn clamp_index(value: i64) -> usize {
    value.max(1) as usize
}

fn invalid_column_type(expected: &str, actual: &ResultValue) -> SwrlError {
    SwrlError::InvalidColumnType {
        expected: expected.to_string(),
        actual: actual.kind_name().to_string(),
    }
}

impl fmt::Display for SqwrlResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use itertools::Itertools;
        writeln!(f, "{}", self.column_names().iter().format(", "))?;
        for row in &self.rows {
            writeln!(f, "{}", row.iter().format(", "))?;
        }
        Ok(())
    }
}
