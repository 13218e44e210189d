// Property-based tests
//
// Uses proptest to generate random rule bodies and row sets and verify the
// structural invariants: canonical body ordering, unbound-flag uniqueness,
// distinct idempotence, count partition totals, order-by stability, and
// selection-operator clamping.

use proptest::prelude::*;
use swrl_engine::*;

fn variable_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(String::from)
}

fn atom_strategy() -> impl Strategy<Value = Atom> {
    let class_atom = variable_name().prop_map(|variable| {
        Atom::Class(ClassAtom::new(
            IRI::new("http://example.org/C").unwrap(),
            AtomArgument::Variable(variable),
        ))
    });
    let property_atom = (variable_name(), variable_name()).prop_map(|(subject, object)| {
        Atom::ObjectProperty(ObjectPropertyAtom::new(
            IRI::new("http://example.org/p").unwrap(),
            AtomArgument::Variable(subject),
            AtomArgument::Variable(object),
        ))
    });
    let built_in_atom = prop::collection::vec(variable_name(), 1..4).prop_map(|variables| {
        Atom::BuiltIn(BuiltInAtom::new(
            "swrlb:op",
            variables
                .into_iter()
                .map(|variable| BuiltInArgument::Variable(VariableArgument::new(variable)))
                .collect(),
        ))
    });
    prop_oneof![class_atom, property_atom, built_in_atom]
}

fn atom_kind_rank(atom: &Atom) -> u8 {
    if atom.is_class() {
        0
    } else if !atom.is_built_in() {
        1
    } else {
        2
    }
}

proptest! {
    #[test]
    fn prop_canonical_body_is_ordered(body in prop::collection::vec(atom_strategy(), 0..12)) {
        let rule = SwrlRule::new("R", body, vec![]);
        let canonical = rule.canonical();

        // Class atoms, then other non-built-ins, then built-ins
        let ranks: Vec<u8> = canonical.body().iter().map(atom_kind_rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ranks, sorted);

        // Same atoms, reordered
        prop_assert_eq!(canonical.body().len(), rule.body().len());
    }

    #[test]
    fn prop_unbound_flagged_at_most_once_per_variable(
        body in prop::collection::vec(atom_strategy(), 0..12)
    ) {
        let rule = SwrlRule::new("R", body, vec![]);
        let canonical = rule.canonical();

        let mut unbound_counts: std::collections::HashMap<String, usize> =
            std::collections::HashMap::new();
        for atom in canonical.body() {
            if let Atom::BuiltIn(built_in) = atom {
                for argument in built_in.arguments() {
                    if argument.is_unbound_variable() {
                        *unbound_counts
                            .entry(argument.variable_name().unwrap().to_string())
                            .or_insert(0) += 1;
                    }
                }
            }
        }
        for (variable, count) in unbound_counts {
            prop_assert_eq!(count, 1, "variable {} flagged unbound {} times", variable, count);
        }
    }

    #[test]
    fn prop_distinct_is_idempotent(values in prop::collection::vec(0i32..5, 0..30)) {
        let distinct_pass = |input: &[i32]| -> Vec<i32> {
            let mut table = SqwrlResultTable::new();
            table.add_column("v").unwrap();
            table.set_is_distinct().unwrap();
            table.configured().unwrap();
            for &value in input {
                table
                    .add_row(vec![ResultValue::Literal(Literal::from_int(value))])
                    .unwrap();
            }
            table.prepared().unwrap();
            (0..table.number_of_rows().unwrap())
                .map(|row| {
                    table
                        .get_value_at(0, row)
                        .unwrap()
                        .literal()
                        .unwrap()
                        .as_int()
                        .unwrap()
                })
                .collect()
        };

        let once = distinct_pass(&values);
        let twice = distinct_pass(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_count_partition_sums_to_row_count(
        labels in prop::collection::vec(prop::sample::select(vec!["x", "y", "z"]), 1..40)
    ) {
        let mut table = SqwrlResultTable::new();
        table.add_column("label").unwrap();
        table.add_aggregate_column("n", "count").unwrap();
        table.configured().unwrap();
        for label in &labels {
            table
                .add_row(vec![
                    ResultValue::Literal(Literal::from_string(*label)),
                    ResultValue::Literal(Literal::from_int(0)),
                ])
                .unwrap();
        }
        table.prepared().unwrap();

        let group_count = table.number_of_rows().unwrap();
        let distinct_labels: std::collections::HashSet<&&str> = labels.iter().collect();
        prop_assert_eq!(group_count, distinct_labels.len());

        let mut total = 0usize;
        for row in 0..group_count {
            total += table
                .get_value_at(1, row)
                .unwrap()
                .literal()
                .unwrap()
                .as_int()
                .unwrap() as usize;
        }
        prop_assert_eq!(total, labels.len());
    }

    #[test]
    fn prop_order_by_is_a_stable_permutation(keys in prop::collection::vec(0i32..4, 0..25)) {
        let mut table = SqwrlResultTable::new();
        table.add_column("key").unwrap();
        table.add_column("position").unwrap();
        table.add_order_by_column(0, true).unwrap();
        table.configured().unwrap();
        for (position, &key) in keys.iter().enumerate() {
            table
                .add_row(vec![
                    ResultValue::Literal(Literal::from_int(key)),
                    ResultValue::Literal(Literal::from_int(position as i32)),
                ])
                .unwrap();
        }
        table.prepared().unwrap();

        let row_count = table.number_of_rows().unwrap();
        prop_assert_eq!(row_count, keys.len());

        let sorted: Vec<(i32, i32)> = (0..row_count)
            .map(|row| {
                let key = table
                    .get_value_at(0, row)
                    .unwrap()
                    .literal()
                    .unwrap()
                    .as_int()
                    .unwrap();
                let position = table
                    .get_value_at(1, row)
                    .unwrap()
                    .literal()
                    .unwrap()
                    .as_int()
                    .unwrap();
                (key, position)
            })
            .collect();

        // Keys ascend, and equal keys keep their original relative order
        for window in sorted.windows(2) {
            prop_assert!(window[0].0 <= window[1].0);
            if window[0].0 == window[1].0 {
                prop_assert!(window[0].1 < window[1].1);
            }
        }
    }

    #[test]
    fn prop_first_n_clamps_and_falls_back(
        n in -3i64..8,
        values in prop::collection::vec(0i32..100, 0..6)
    ) {
        let mut table = SqwrlResultTable::new();
        table.add_column("v").unwrap();
        table.set_first(n).unwrap();
        table.configured().unwrap();
        for &value in &values {
            table
                .add_row(vec![ResultValue::Literal(Literal::from_int(value))])
                .unwrap();
        }
        table.prepared().unwrap();

        let clamped = n.max(1) as usize;
        prop_assert_eq!(
            table.number_of_rows().unwrap(),
            clamped.min(values.len())
        );
    }
}
