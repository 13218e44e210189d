// Rule canonicalization tests
//
// The canonical body must order class atoms first, then other non-built-in
// atoms, then built-ins, and must flag exactly the variable arguments a
// built-in has to produce itself.

use swrl_engine::*;

fn class_atom(class: &str, variable: &str) -> Atom {
    Atom::Class(ClassAtom::new(
        IRI::new(class).unwrap(),
        AtomArgument::Variable(variable.to_string()),
    ))
}

fn object_property_atom(property: &str, subject: &str, object: &str) -> Atom {
    Atom::ObjectProperty(ObjectPropertyAtom::new(
        IRI::new(property).unwrap(),
        AtomArgument::Variable(subject.to_string()),
        AtomArgument::Variable(object.to_string()),
    ))
}

fn built_in(name: &str, variables: &[&str]) -> Atom {
    let factory = ArgumentFactory::new();
    Atom::BuiltIn(BuiltInAtom::new(
        name,
        variables.iter().map(|v| factory.variable(*v)).collect(),
    ))
}

fn unbound_flags(rule: &SwrlRule) -> Vec<(String, bool)> {
    rule.body()
        .iter()
        .filter_map(|atom| match atom {
            Atom::BuiltIn(b) => Some(b),
            _ => None,
        })
        .flat_map(|b| b.arguments().iter())
        .filter_map(|argument| match argument {
            BuiltInArgument::Variable(v) => Some((v.name().to_string(), v.is_unbound())),
            _ => None,
        })
        .collect()
}

#[test]
fn test_mixed_body_scenario() {
    // Body: [add(?z, ?x, ?y), Person(?x), hasAge(?x, ?y)]
    let rule = SwrlRule::new(
        "R1",
        vec![
            built_in("swrlb:add", &["z", "x", "y"]),
            class_atom("http://example.org/Person", "x"),
            object_property_atom("http://example.org/hasAge", "x", "y"),
        ],
        vec![],
    );

    let canonical = rule.canonical();

    // Canonical order: class atom, object property atom, built-in
    assert!(canonical.body()[0].is_class());
    assert!(matches!(canonical.body()[1], Atom::ObjectProperty(_)));
    assert!(canonical.body()[2].is_built_in());

    // ?z unbound; ?x and ?y bound by the ordinary atoms
    assert_eq!(
        unbound_flags(&canonical),
        vec![
            ("z".to_string(), true),
            ("x".to_string(), false),
            ("y".to_string(), false),
        ]
    );
}

#[test]
fn test_original_rule_is_untouched() {
    let rule = SwrlRule::new(
        "R2",
        vec![
            built_in("swrlb:add", &["z", "x", "y"]),
            class_atom("http://example.org/Person", "x"),
        ],
        vec![],
    );
    let _ = rule.canonical();
    assert!(rule.body()[0].is_built_in());
    assert_eq!(unbound_flags(&rule), vec![
        ("z".to_string(), false),
        ("x".to_string(), false),
        ("y".to_string(), false),
    ]);
}

#[test]
fn test_built_in_sublist_order_preserved() {
    let rule = SwrlRule::new(
        "R3",
        vec![
            built_in("swrlb:first", &["a"]),
            class_atom("http://example.org/Thing", "t"),
            built_in("swrlb:second", &["b"]),
            built_in("swrlb:third", &["c"]),
        ],
        vec![],
    );
    let canonical = rule.canonical();
    let built_in_names: Vec<&str> = canonical
        .body()
        .iter()
        .filter_map(|atom| match atom {
            Atom::BuiltIn(b) => Some(b.name()),
            _ => None,
        })
        .collect();
    assert_eq!(built_in_names, vec!["swrlb:first", "swrlb:second", "swrlb:third"]);
}

#[test]
fn test_variable_flagged_unbound_at_most_once() {
    // ?v is first-used by the leftmost built-in; the second built-in consumes it
    let rule = SwrlRule::new(
        "R4",
        vec![
            built_in("swrlb:makeValue", &["v"]),
            built_in("swrlb:useValue", &["v", "w"]),
        ],
        vec![],
    );
    let canonical = rule.canonical();
    let flags = unbound_flags(&canonical);
    assert_eq!(
        flags,
        vec![
            ("v".to_string(), true),
            ("v".to_string(), false),
            ("w".to_string(), true),
        ]
    );
}

#[test]
fn test_head_atoms_are_not_reordered() {
    let rule = SwrlRule::new(
        "R5",
        vec![class_atom("http://example.org/Person", "x")],
        vec![
            built_in("swrlb:stringConcat", &["s", "x"]),
            class_atom("http://example.org/Adult", "x"),
        ],
    );
    let canonical = rule.canonical();
    assert!(canonical.head()[0].is_built_in());
    assert!(canonical.head()[1].is_class());
}
