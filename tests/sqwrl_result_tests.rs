// SQWRL result engine tests
//
// Covers the three-phase state machine, configuration validation, the
// prepare pipeline (aggregation, distinct, ordering, selection), and the
// read API with its typed accessors.

use swrl_engine::*;

fn string_value(s: &str) -> ResultValue {
    ResultValue::Literal(Literal::from_string(s))
}

fn int_value(i: i32) -> ResultValue {
    ResultValue::Literal(Literal::from_int(i))
}

fn single_column_table(values: &[i32]) -> SqwrlResultTable {
    let mut table = SqwrlResultTable::new();
    table.add_column("v").unwrap();
    table.configured().unwrap();
    for &value in values {
        table.add_row(vec![int_value(value)]).unwrap();
    }
    table
}

#[test]
fn test_avg_aggregation_groups_by_selected_columns() {
    let mut table = SqwrlResultTable::new();
    table.add_column("name").unwrap();
    table.add_aggregate_column("age", "avg").unwrap();
    table.configured().unwrap();

    table
        .add_row(vec![string_value("Fred"), int_value(27)])
        .unwrap();
    table
        .add_row(vec![string_value("Joe"), int_value(34)])
        .unwrap();
    table
        .add_row(vec![string_value("Joe"), int_value(21)])
        .unwrap();
    table.prepared().unwrap();

    assert_eq!(table.number_of_rows().unwrap(), 2);

    // Groups are emitted in ascending key order: Fred, then Joe
    let fred_name = table.get_value_at(0, 0).unwrap().literal().unwrap();
    assert_eq!(fred_name.as_string().unwrap(), "Fred");
    let fred_age = table.get_value_at(1, 0).unwrap().literal().unwrap();
    assert_eq!(fred_age.as_double().unwrap(), 27.0);

    let joe_name = table.get_value_at(0, 1).unwrap().literal().unwrap();
    assert_eq!(joe_name.as_string().unwrap(), "Joe");
    let joe_age = table.get_value_at(1, 1).unwrap().literal().unwrap();
    assert_eq!(joe_age.as_double().unwrap(), 27.5);
}

#[test]
fn test_min_max_sum_aggregation() {
    let mut table = SqwrlResultTable::new();
    table.add_aggregate_column("min", "min").unwrap();
    table.add_aggregate_column("max", "max").unwrap();
    table.add_aggregate_column("sum", "sum").unwrap();
    table.configured().unwrap();

    for value in [4, 2, 9] {
        table
            .add_row(vec![int_value(value), int_value(value), int_value(value)])
            .unwrap();
    }
    table.prepared().unwrap();

    assert_eq!(table.number_of_rows().unwrap(), 1);
    let min = table.get_value_at(0, 0).unwrap().literal().unwrap();
    assert_eq!(min.as_int().unwrap(), 2);
    let max = table.get_value_at(1, 0).unwrap().literal().unwrap();
    assert_eq!(max.as_int().unwrap(), 9);
    let sum = table.get_value_at(2, 0).unwrap().literal().unwrap();
    assert_eq!(sum.as_double().unwrap(), 15.0);
}

#[test]
fn test_count_aggregation_partitions_rows() {
    let mut table = SqwrlResultTable::new();
    table.add_column("name").unwrap();
    table.add_aggregate_column("n", "count").unwrap();
    table.configured().unwrap();

    let names = ["a", "b", "a", "c", "a", "b"];
    for name in names {
        table.add_row(vec![string_value(name), int_value(0)]).unwrap();
    }
    table.prepared().unwrap();

    // Three groups whose counts sum to the number of input rows
    assert_eq!(table.number_of_rows().unwrap(), 3);
    let mut total = 0;
    for row_index in 0..3 {
        let count = table.get_value_at(1, row_index).unwrap().literal().unwrap();
        total += count.as_int().unwrap();
    }
    assert_eq!(total as usize, names.len());
}

#[test]
fn test_count_distinct_uses_value_equality() {
    let mut table = SqwrlResultTable::new();
    table.add_aggregate_column("n", "count-distinct").unwrap();
    table.configured().unwrap();

    for value in [1, 2, 2, 3, 3, 3] {
        table.add_row(vec![int_value(value)]).unwrap();
    }
    table.prepared().unwrap();

    let distinct = table.get_value_at(0, 0).unwrap().literal().unwrap();
    assert_eq!(distinct.as_int().unwrap(), 3);
}

#[test]
fn test_aggregate_function_name_is_case_insensitive() {
    let mut table = SqwrlResultTable::new();
    table.add_aggregate_column("age", "AVG").unwrap();
    assert!(table.configured().is_ok());
}

#[test]
fn test_unknown_aggregate_function_is_rejected() {
    let mut table = SqwrlResultTable::new();
    table.add_aggregate_column("age", "median-of-medians").unwrap();
    assert!(matches!(
        table.configured(),
        Err(SwrlError::InvalidAggregateFunction(_))
    ));
}

#[test]
fn test_limit_selection() {
    let mut table = SqwrlResultTable::new();
    table.add_column("v").unwrap();
    table.set_limit(3).unwrap();
    table.configured().unwrap();
    for value in [10, 20, 30, 40, 50] {
        table.add_row(vec![int_value(value)]).unwrap();
    }
    table.prepared().unwrap();

    assert_eq!(table.number_of_rows().unwrap(), 3);
    for (row_index, expected) in [10, 20, 30].into_iter().enumerate() {
        let value = table.get_value_at(0, row_index).unwrap().literal().unwrap();
        assert_eq!(value.as_int().unwrap(), expected);
    }
}

#[test]
fn test_nth_selection_after_ordering() {
    let mut table = SqwrlResultTable::new();
    table.add_column("v").unwrap();
    table.add_order_by_column(0, true).unwrap();
    table.set_nth(2).unwrap();
    table.configured().unwrap();
    for value in [30, 10, 50, 20, 40] {
        table.add_row(vec![int_value(value)]).unwrap();
    }
    table.prepared().unwrap();

    // Exactly the row holding the second-smallest value
    assert_eq!(table.number_of_rows().unwrap(), 1);
    let value = table.get_value_at(0, 0).unwrap().literal().unwrap();
    assert_eq!(value.as_int().unwrap(), 20);
}

#[test]
fn test_distinct_collapses_identical_rows() {
    let mut table = SqwrlResultTable::new();
    table.add_column("v").unwrap();
    table.set_is_distinct().unwrap();
    table.configured().unwrap();
    for _ in 0..3 {
        table.add_row(vec![int_value(7)]).unwrap();
    }
    table.prepared().unwrap();
    assert_eq!(table.number_of_rows().unwrap(), 1);
}

#[test]
fn test_order_by_descending() {
    let mut table = SqwrlResultTable::new();
    table.add_column("v").unwrap();
    table.add_order_by_column(0, false).unwrap();
    table.configured().unwrap();
    for value in [20, 40, 10, 30] {
        table.add_row(vec![int_value(value)]).unwrap();
    }
    table.prepared().unwrap();

    let values: Vec<i32> = (0..4)
        .map(|row| {
            table
                .get_value_at(0, row)
                .unwrap()
                .literal()
                .unwrap()
                .as_int()
                .unwrap()
        })
        .collect();
    assert_eq!(values, vec![40, 30, 20, 10]);
}

#[test]
fn test_mixed_order_directions_are_rejected() {
    let mut table = SqwrlResultTable::new();
    table.add_column("a").unwrap();
    table.add_column("b").unwrap();
    table.add_order_by_column(0, true).unwrap();
    table.add_order_by_column(1, false).unwrap();
    assert!(matches!(table.configured(), Err(SwrlError::InvalidQuery(_))));
}

#[test]
fn test_order_by_out_of_range_is_rejected() {
    let mut table = SqwrlResultTable::new();
    table.add_column("a").unwrap();
    table.add_order_by_column(1, true).unwrap();
    assert!(matches!(table.configured(), Err(SwrlError::InvalidQuery(_))));
}

#[test]
fn test_display_name_constraints() {
    let mut with_comma = SqwrlResultTable::new();
    with_comma.add_column("a").unwrap();
    with_comma.add_column_display_name("x,y").unwrap();
    assert!(matches!(
        with_comma.configured(),
        Err(SwrlError::InvalidQuery(_))
    ));

    let mut empty = SqwrlResultTable::new();
    empty.add_column("a").unwrap();
    empty.add_column_display_name("").unwrap();
    assert!(matches!(empty.configured(), Err(SwrlError::InvalidQuery(_))));
}

#[test]
fn test_display_name_overrides_column_name() {
    let mut table = SqwrlResultTable::new();
    table.add_column("x").unwrap();
    table.add_column_display_name("person").unwrap();
    table.configured().unwrap();
    table.add_row(vec![string_value("Fred")]).unwrap();
    table.prepared().unwrap();

    assert_eq!(table.column_name(0).unwrap(), "person");
    assert!(table.get_value_by_name("person").is_ok());
    assert!(matches!(
        table.get_value_by_name("x"),
        Err(SwrlError::InvalidColumnName(_))
    ));
    assert_eq!(table.get_column("person").unwrap().len(), 1);
}

#[test]
fn test_phase_violations() {
    // addRowData before configured()
    let mut unconfigured = SqwrlResultTable::new();
    unconfigured.add_column("v").unwrap();
    assert!(matches!(
        unconfigured.add_row_data(int_value(1)),
        Err(SwrlError::ResultState(_))
    ));

    // addColumn after configured()
    let mut configured = SqwrlResultTable::new();
    configured.add_column("v").unwrap();
    configured.configured().unwrap();
    assert!(matches!(
        configured.add_column("w"),
        Err(SwrlError::ResultState(_))
    ));

    // reads before prepared()
    assert!(matches!(
        configured.get_value(0),
        Err(SwrlError::ResultState(_))
    ));
    assert!(matches!(
        configured.number_of_rows(),
        Err(SwrlError::ResultState(_))
    ));

    // generator operations after prepared()
    let mut prepared = SqwrlResultTable::new();
    prepared.add_column("v").unwrap();
    prepared.configured().unwrap();
    prepared.prepared().unwrap();
    assert!(matches!(
        prepared.add_row_data(int_value(1)),
        Err(SwrlError::ResultState(_))
    ));
    assert!(matches!(
        prepared.configured(),
        Err(SwrlError::ResultState(_))
    ));
}

#[test]
fn test_non_numeric_value_in_numeric_aggregate_fails_at_add_time() {
    let mut table = SqwrlResultTable::new();
    table.add_aggregate_column("age", "avg").unwrap();
    table.configured().unwrap();
    assert!(matches!(
        table.add_row_data(string_value("not-a-number")),
        Err(SwrlError::LiteralType { .. })
    ));

    // count accepts any value
    let mut counting = SqwrlResultTable::new();
    counting.add_aggregate_column("n", "count").unwrap();
    counting.configured().unwrap();
    assert!(counting.add_row_data(string_value("anything")).is_ok());
}

#[test]
fn test_row_auto_close_and_partial_row_rejection() {
    let mut table = SqwrlResultTable::new();
    table.add_column("a").unwrap();
    table.add_column("b").unwrap();
    table.configured().unwrap();

    // Two values auto-close the row
    table.add_row_data(int_value(1)).unwrap();
    table.add_row_data(int_value(2)).unwrap();

    // A partially filled row blocks prepared()
    table.open_row().unwrap();
    table.add_row_data(int_value(3)).unwrap();
    assert!(matches!(table.prepared(), Err(SwrlError::ResultState(_))));

    // Completing the row unblocks it
    table.add_row_data(int_value(4)).unwrap();
    table.prepared().unwrap();
    assert_eq!(table.number_of_rows().unwrap(), 2);
}

#[test]
fn test_prepared_with_freshly_opened_empty_row() {
    let mut table = SqwrlResultTable::new();
    table.add_column("a").unwrap();
    table.configured().unwrap();
    table.add_row(vec![int_value(1)]).unwrap();
    table.open_row().unwrap();
    table.prepared().unwrap();
    assert_eq!(table.number_of_rows().unwrap(), 1);
}

#[test]
fn test_cursor_iteration() {
    let mut table = single_column_table(&[1, 2, 3]);
    table.prepared().unwrap();

    let mut seen = Vec::new();
    while table.has_next() {
        let value = table.get_value(0).unwrap().literal().unwrap().as_int().unwrap();
        seen.push(value);
        table.next().unwrap();
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert!(table.next().is_err());

    table.reset().unwrap();
    assert!(table.has_next());
    assert_eq!(
        table.get_value(0).unwrap().literal().unwrap().as_int().unwrap(),
        1
    );
}

#[test]
fn test_empty_result_has_no_next() {
    let mut table = SqwrlResultTable::new();
    table.add_column("v").unwrap();
    table.configured().unwrap();
    table.prepared().unwrap();
    assert_eq!(table.number_of_rows().unwrap(), 0);
    assert!(!table.has_next());
    assert!(table.get_row().is_err());
}

#[test]
fn test_typed_accessors() {
    let mut table = SqwrlResultTable::new();
    table.add_column("class").unwrap();
    table.add_column("individual").unwrap();
    table.add_column("property").unwrap();
    table.add_column("literal").unwrap();
    table.configured().unwrap();
    table
        .add_row(vec![
            ResultValue::Class(IRI::new("http://example.org/Person").unwrap()),
            ResultValue::Individual(IRI::new("http://example.org/Fred").unwrap()),
            ResultValue::ObjectProperty(IRI::new("http://example.org/hasChild").unwrap()),
            int_value(42),
        ])
        .unwrap();
    table.prepared().unwrap();

    assert_eq!(
        table.get_class_value("class").unwrap().as_str(),
        "http://example.org/Person"
    );
    assert_eq!(
        table.get_object_value("individual").unwrap().as_str(),
        "http://example.org/Fred"
    );
    assert_eq!(
        table.get_property_value("property").unwrap().as_str(),
        "http://example.org/hasChild"
    );
    assert_eq!(table.get_literal_value("literal").unwrap().as_int().unwrap(), 42);

    // Kind mismatches raise invalid-column-type
    assert!(matches!(
        table.get_literal_value("class"),
        Err(SwrlError::InvalidColumnType { .. })
    ));
    assert!(matches!(
        table.get_class_value("literal"),
        Err(SwrlError::InvalidColumnType { .. })
    ));
}

#[test]
fn test_selection_operator_clamping() {
    // n <= 0 is treated as 1
    let mut table = single_column_table(&[1, 2, 3]);
    // reconstruct with nth(-5): configure before rows
    let mut clamped = SqwrlResultTable::new();
    clamped.add_column("v").unwrap();
    clamped.set_nth(-5).unwrap();
    clamped.configured().unwrap();
    for value in [1, 2, 3] {
        clamped.add_row(vec![int_value(value)]).unwrap();
    }
    clamped.prepared().unwrap();
    assert_eq!(clamped.number_of_rows().unwrap(), 1);
    let value = clamped.get_value_at(0, 0).unwrap().literal().unwrap();
    assert_eq!(value.as_int().unwrap(), 1);

    table.prepared().unwrap();
    assert_eq!(table.number_of_rows().unwrap(), 3);
}

#[test]
fn test_multiple_selection_operators_concatenate() {
    let mut table = SqwrlResultTable::new();
    table.add_column("v").unwrap();
    table.set_first(1).unwrap();
    table.set_last(1).unwrap();
    table.configured().unwrap();
    for value in [1, 2, 3, 4] {
        table.add_row(vec![int_value(value)]).unwrap();
    }
    table.prepared().unwrap();

    assert_eq!(table.number_of_rows().unwrap(), 2);
    let first = table.get_value_at(0, 0).unwrap().literal().unwrap();
    let last = table.get_value_at(0, 1).unwrap().literal().unwrap();
    assert_eq!((first.as_int().unwrap(), last.as_int().unwrap()), (1, 4));
}

#[test]
fn test_row_cap_enforced() {
    let mut table = SqwrlResultTable::with_max_rows(Some(2));
    table.add_column("v").unwrap();
    table.configured().unwrap();
    table.add_row(vec![int_value(1)]).unwrap();
    table.add_row(vec![int_value(2)]).unwrap();
    assert!(matches!(
        table.add_row(vec![int_value(3)]),
        Err(SwrlError::ResultState(_))
    ));
}
