//! The result prepare pipeline
//!
//! Applied once, at `prepared()`, in a fixed order: aggregation, then
//! distinct (only when no aggregates are configured), then ordering, then
//! the selection operators, then the cached column vectors.

use super::values::{compare_rows, ResultValue};
use super::{AggregateFunction, SelectionOperators, SqwrlResultTable};
use crate::error::{SwrlError, SwrlResult};
use crate::literals::Literal;
use hashbrown::HashMap;
use indexmap::IndexSet;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Ordered grouping key: the tuple of selected-column values
#[derive(Debug, Clone)]
struct GroupKey(Vec<ResultValue>);

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        compare_rows(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_rows(&self.0, &other.0)
    }
}

impl SqwrlResultTable {
    /// Run the prepare pipeline over the accumulated rows
    pub(crate) fn materialize(&mut self) -> SwrlResult<()> {
        let mut rows = self.take_rows();

        if !self.aggregate_columns().is_empty() {
            rows = self.aggregate_rows(rows)?;
        } else if self.is_distinct() {
            rows = distinct_rows(rows);
        }

        if !self.order_by().is_empty() {
            self.sort_rows(&mut rows);
        }

        rows = apply_selection_operators(self.selection_operators(), rows);
        self.build_column_vectors(&rows);
        self.put_rows(rows);
        Ok(())
    }

    /// Group rows by the selected-column tuple and reduce aggregate columns
    ///
    /// Groups are emitted in ascending key order. Aggregation subsumes
    /// distinct on the selected columns.
    fn aggregate_rows(
        &self,
        rows: Vec<Vec<ResultValue>>,
    ) -> SwrlResult<Vec<Vec<ResultValue>>> {
        let number_of_columns = self.number_of_columns();
        let selected: Vec<usize> = (0..number_of_columns)
            .filter(|index| !self.aggregate_columns().contains_key(index))
            .collect();

        let mut groups: BTreeMap<GroupKey, Vec<Vec<ResultValue>>> = BTreeMap::new();
        for row in rows {
            let mut key = Vec::with_capacity(selected.len());
            for &index in &selected {
                key.push(cell(&row, index)?.clone());
            }
            groups.entry(GroupKey(key)).or_default().push(row);
        }

        let mut aggregated = Vec::with_capacity(groups.len());
        for (key, group_rows) in groups {
            let mut output_row: Vec<ResultValue> = Vec::with_capacity(number_of_columns);
            let mut key_cells = key.0.into_iter();
            for index in 0..number_of_columns {
                match self.aggregate_columns().get(&index) {
                    Some(function) => {
                        let mut values = Vec::with_capacity(group_rows.len());
                        for row in &group_rows {
                            values.push(cell(row, index)?);
                        }
                        output_row.push(apply_aggregate(*function, &values)?);
                    }
                    None => {
                        let key_cell = key_cells.next().ok_or_else(|| {
                            SwrlError::InvalidColumnIndex {
                                index,
                                count: number_of_columns,
                            }
                        })?;
                        output_row.push(key_cell);
                    }
                }
            }
            aggregated.push(output_row);
        }
        Ok(aggregated)
    }

    /// Stable sort by the declared order-by columns
    fn sort_rows(&self, rows: &mut [Vec<ResultValue>]) {
        let order_by = self.order_by().to_vec();
        let descending = order_by.first().map(|&(_, ascending)| !ascending) == Some(true);
        rows.sort_by(|left, right| {
            let mut ordering = Ordering::Equal;
            for &(column_index, _) in &order_by {
                ordering = compare_cells(left.get(column_index), right.get(column_index));
                if ordering != Ordering::Equal {
                    break;
                }
            }
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    /// Build the name-to-column-values map served by `get_column`
    fn build_column_vectors(&mut self, rows: &[Vec<ResultValue>]) {
        let mut column_vectors: HashMap<String, Vec<ResultValue>> = HashMap::new();
        for (index, name) in self.column_names().into_iter().enumerate() {
            let values: Vec<ResultValue> = rows
                .iter()
                .filter_map(|row| row.get(index).cloned())
                .collect();
            column_vectors.insert(name.to_string(), values);
        }
        self.set_column_vectors(column_vectors);
    }
}

fn cell(row: &[ResultValue], index: usize) -> SwrlResult<&ResultValue> {
    row.get(index).ok_or(SwrlError::InvalidColumnIndex {
        index,
        count: row.len(),
    })
}

fn compare_cells(left: Option<&ResultValue>, right: Option<&ResultValue>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.total_cmp(right),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Remove duplicate rows by full-row equality, keeping first occurrences
fn distinct_rows(rows: Vec<Vec<ResultValue>>) -> Vec<Vec<ResultValue>> {
    let mut unique: IndexSet<Vec<ResultValue>> = IndexSet::with_capacity(rows.len());
    for row in rows {
        unique.insert(row);
    }
    unique.into_iter().collect()
}

/// Reduce one aggregate column over the rows of a group
fn apply_aggregate(
    function: AggregateFunction,
    values: &[&ResultValue],
) -> SwrlResult<ResultValue> {
    if values.is_empty() {
        return Err(SwrlError::InvalidQuery(format!(
            "{} aggregation over an empty group",
            function.name()
        )));
    }
    match function {
        AggregateFunction::Min => numeric_extremum(values, Ordering::Less),
        AggregateFunction::Max => numeric_extremum(values, Ordering::Greater),
        AggregateFunction::Sum => Ok(ResultValue::Literal(Literal::from_double(sum(values)?))),
        AggregateFunction::Avg => Ok(ResultValue::Literal(Literal::from_double(
            sum(values)? / values.len() as f64,
        ))),
        AggregateFunction::Count => Ok(ResultValue::Literal(Literal::from_int(
            values.len() as i32
        ))),
        AggregateFunction::CountDistinct => {
            let mut sorted: Vec<&ResultValue> = values.to_vec();
            sorted.sort_by(|left, right| left.total_cmp(right));
            sorted.dedup_by(|left, right| left.total_cmp(right) == Ordering::Equal);
            Ok(ResultValue::Literal(Literal::from_int(sorted.len() as i32)))
        }
    }
}

fn numeric_literal(value: &ResultValue, function: AggregateFunction) -> SwrlResult<&Literal> {
    match value {
        ResultValue::Literal(literal) if literal.is_numeric() => Ok(literal),
        other => Err(SwrlError::LiteralType {
            datatype: other.kind_name().to_string(),
            requested: format!("a numeric literal for {} aggregation", function.name()),
        }),
    }
}

fn numeric_extremum(values: &[&ResultValue], keep: Ordering) -> SwrlResult<ResultValue> {
    let function = if keep == Ordering::Less {
        AggregateFunction::Min
    } else {
        AggregateFunction::Max
    };
    let mut best = numeric_literal(values[0], function)?;
    for value in &values[1..] {
        let literal = numeric_literal(value, function)?;
        if literal.compare(best)? == keep {
            best = literal;
        }
    }
    Ok(ResultValue::Literal(best.clone()))
}

fn sum(values: &[&ResultValue]) -> SwrlResult<f64> {
    let mut total = 0.0;
    for value in values {
        total += numeric_literal(value, AggregateFunction::Sum)?.as_double()?;
    }
    Ok(total)
}

/// Apply the configured selection operators
///
/// `limit` short-circuits every other operator. Otherwise each enabled
/// operator contributes its rows, concatenated in the fixed operator order;
/// with no operator enabled the rows pass through unchanged. Indices are
/// 1-based and were clamped up to 1 at configuration time.
fn apply_selection_operators(
    operators: SelectionOperators,
    rows: Vec<Vec<ResultValue>>,
) -> Vec<Vec<ResultValue>> {
    if let Some(limit) = operators.limit {
        let mut rows = rows;
        rows.truncate(limit);
        return rows;
    }
    if !operators.any_non_limit() {
        return rows;
    }

    let count = rows.len();
    let mut output: Vec<Vec<ResultValue>> = Vec::new();

    if let Some(n) = operators.nth {
        if n <= count {
            output.push(rows[n - 1].clone());
        }
    }
    if let Some(n) = operators.not_nth {
        if n <= count {
            output.extend(
                rows.iter()
                    .enumerate()
                    .filter(|(index, _)| *index != n - 1)
                    .map(|(_, row)| row.clone()),
            );
        } else {
            output.extend(rows.iter().cloned());
        }
    }
    if let Some(n) = operators.first_n {
        output.extend(rows[..n.min(count)].iter().cloned());
    }
    if let Some(n) = operators.not_first_n {
        if n <= count {
            output.extend(rows[n..].iter().cloned());
        } else {
            output.extend(rows.iter().cloned());
        }
    }
    if let Some(n) = operators.last_n {
        if n <= count {
            output.extend(rows[count - n..].iter().cloned());
        } else {
            output.extend(rows.iter().cloned());
        }
    }
    if let Some(n) = operators.not_last_n {
        if n <= count {
            output.extend(rows[..count - n].iter().cloned());
        } else {
            output.extend(rows.iter().cloned());
        }
    }
    if let Some((n, slice_size)) = operators.nth_slice {
        if n <= count {
            output.extend(rows[n - 1..(n - 1 + slice_size).min(count)].iter().cloned());
        }
    }
    if let Some((n, slice_size)) = operators.not_nth_slice {
        if n <= count {
            output.extend(rows[..n - 1].iter().cloned());
            output.extend(rows[(n - 1 + slice_size).min(count)..].iter().cloned());
        } else {
            output.extend(rows.iter().cloned());
        }
    }
    if let Some((n, slice_size)) = operators.nth_last_slice {
        if n <= count {
            output.extend(rows[n..(n + slice_size).min(count)].iter().cloned());
        }
    }
    if let Some((n, slice_size)) = operators.not_nth_last_slice {
        if n <= count {
            output.extend(rows[..n].iter().cloned());
            output.extend(rows[(n + slice_size).min(count)..].iter().cloned());
        } else {
            output.extend(rows.iter().cloned());
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(value: i32) -> Vec<ResultValue> {
        vec![ResultValue::Literal(Literal::from_int(value))]
    }

    fn rows(values: &[i32]) -> Vec<Vec<ResultValue>> {
        values.iter().map(|&value| row(value)).collect()
    }

    fn no_operators() -> SelectionOperators {
        SelectionOperators {
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
        }
    }

    #[test]
    fn test_limit_shortcircuits_other_operators() {
        let operators = SelectionOperators {
            limit: Some(2),
            nth: Some(5),
            ..no_operators()
        };
        let selected = apply_selection_operators(operators, rows(&[1, 2, 3, 4, 5]));
        assert_eq!(selected, rows(&[1, 2]));
    }

    #[test]
    fn test_nth_out_of_range_is_empty() {
        let operators = SelectionOperators {
            nth: Some(6),
            ..no_operators()
        };
        assert!(apply_selection_operators(operators, rows(&[1, 2, 3])).is_empty());
    }

    #[test]
    fn test_not_nth_out_of_range_passes_through() {
        let operators = SelectionOperators {
            not_nth: Some(4),
            ..no_operators()
        };
        let selected = apply_selection_operators(operators, rows(&[1, 2, 3]));
        assert_eq!(selected, rows(&[1, 2, 3]));
    }

    #[test]
    fn test_last_and_not_last() {
        let last = SelectionOperators {
            last_n: Some(2),
            ..no_operators()
        };
        assert_eq!(apply_selection_operators(last, rows(&[1, 2, 3, 4])), rows(&[3, 4]));

        let not_last = SelectionOperators {
            not_last_n: Some(2),
            ..no_operators()
        };
        assert_eq!(
            apply_selection_operators(not_last, rows(&[1, 2, 3, 4])),
            rows(&[1, 2])
        );
    }

    #[test]
    fn test_slices() {
        let nth_slice = SelectionOperators {
            nth_slice: Some((2, 2)),
            ..no_operators()
        };
        assert_eq!(
            apply_selection_operators(nth_slice, rows(&[1, 2, 3, 4, 5])),
            rows(&[2, 3])
        );

        let not_nth_slice = SelectionOperators {
            not_nth_slice: Some((2, 2)),
            ..no_operators()
        };
        assert_eq!(
            apply_selection_operators(not_nth_slice, rows(&[1, 2, 3, 4, 5])),
            rows(&[1, 4, 5])
        );

        let nth_last_slice = SelectionOperators {
            nth_last_slice: Some((2, 2)),
            ..no_operators()
        };
        assert_eq!(
            apply_selection_operators(nth_last_slice, rows(&[1, 2, 3, 4, 5])),
            rows(&[3, 4])
        );

        let not_nth_last_slice = SelectionOperators {
            not_nth_last_slice: Some((2, 2)),
            ..no_operators()
        };
        assert_eq!(
            apply_selection_operators(not_nth_last_slice, rows(&[1, 2, 3, 4, 5])),
            rows(&[1, 2, 5])
        );
    }

    #[test]
    fn test_multiple_operators_concatenate() {
        let operators = SelectionOperators {
            nth: Some(1),
            last_n: Some(1),
            ..no_operators()
        };
        let selected = apply_selection_operators(operators, rows(&[1, 2, 3]));
        assert_eq!(selected, rows(&[1, 3]));
    }

    #[test]
    fn test_distinct_preserves_first_occurrence_order() {
        let deduped = distinct_rows(rows(&[3, 1, 3, 2, 1]));
        assert_eq!(deduped, rows(&[3, 1, 2]));
    }
}
