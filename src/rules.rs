//! SWRL rules and rule canonicalization
//!
//! A rule is a named pair of atom lists. Before a rule is handed to a target
//! reasoner it is canonicalized: body atoms are ordered so every built-in
//! follows the ordinary atoms that bind its variables, and variable arguments
//! a built-in must produce itself are flagged unbound.

use crate::atoms::{Atom, BuiltInArgument, BuiltInAtom};
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;

/// A SWRL rule or SQWRL query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwrlRule {
    name: String,
    body: Vec<Atom>,
    head: Vec<Atom>,
}

impl SwrlRule {
    /// Create a new rule
    pub fn new<S: Into<String>>(name: S, body: Vec<Atom>, head: Vec<Atom>) -> Self {
        SwrlRule {
            name: name.into(),
            body,
            head,
        }
    }

    /// The rule name; rule identity is by name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body atoms, in order
    pub fn body(&self) -> &[Atom] {
        &self.body
    }

    /// The head atoms, in order
    pub fn head(&self) -> &[Atom] {
        &self.head
    }

    /// Whether this rule is a SQWRL query
    ///
    /// A rule is a query iff its body or head invokes at least one built-in
    /// from the SQWRL vocabulary.
    pub fn is_sqwrl_query(&self) -> bool {
        self.body
            .iter()
            .chain(self.head.iter())
            .any(|atom| matches!(atom, Atom::BuiltIn(built_in) if built_in.is_sqwrl()))
    }

    /// Canonicalize this rule for left-to-right evaluation
    ///
    /// Returns a new rule; the input is left untouched. The canonical body is
    /// `[class atoms] ++ [other non-built-in atoms] ++ [built-in atoms]`,
    /// each sub-list in its original order. A built-in variable argument
    /// whose name is bound by no non-built-in atom and by no earlier built-in
    /// is flagged unbound; each variable name is flagged at most once, on its
    /// leftmost producing built-in.
    pub fn canonical(&self) -> SwrlRule {
        let mut class_atoms: Vec<Atom> = Vec::new();
        let mut other_atoms: Vec<Atom> = Vec::new();
        let mut built_ins: Vec<BuiltInAtom> = Vec::new();

        for atom in &self.body {
            match atom {
                Atom::BuiltIn(built_in) => built_ins.push(built_in.clone()),
                Atom::Class(_) => class_atoms.push(atom.clone()),
                _ => other_atoms.push(atom.clone()),
            }
        }

        let defined_variables: HashSet<String> = class_atoms
            .iter()
            .chain(other_atoms.iter())
            .flat_map(|atom| atom.variable_names())
            .map(str::to_string)
            .collect();

        let mut bound_by_earlier_built_in: HashSet<String> = HashSet::new();
        for built_in in &mut built_ins {
            for argument in built_in.arguments_mut() {
                if let BuiltInArgument::Variable(variable) = argument {
                    if !defined_variables.contains(variable.name())
                        && !bound_by_earlier_built_in.contains(variable.name())
                    {
                        bound_by_earlier_built_in.insert(variable.name().to_string());
                        variable.set_unbound();
                    }
                }
            }
        }

        let body = class_atoms
            .into_iter()
            .chain(other_atoms)
            .chain(built_ins.into_iter().map(Atom::BuiltIn))
            .collect();

        SwrlRule::new(&self.name, body, self.head.clone())
    }
}

impl fmt::Display for SwrlRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.body.iter().format(" ^ "),
            self.head.iter().format(" ^ ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::{AtomArgument, ClassAtom, ObjectPropertyAtom, VariableArgument};
    use crate::iri::IRI;

    fn variable(name: &str) -> BuiltInArgument {
        BuiltInArgument::Variable(VariableArgument::new(name))
    }

    #[test]
    fn test_canonical_body_ordering_and_unbound_flag() {
        let person = IRI::new("http://example.org/Person").unwrap();
        let has_age = IRI::new("http://example.org/hasAge").unwrap();

        let rule = SwrlRule::new(
            "R1",
            vec![
                Atom::BuiltIn(BuiltInAtom::new(
                    "swrlb:add",
                    vec![variable("z"), variable("x"), variable("y")],
                )),
                Atom::Class(ClassAtom::new(
                    person,
                    AtomArgument::Variable("x".to_string()),
                )),
                Atom::ObjectProperty(ObjectPropertyAtom::new(
                    has_age,
                    AtomArgument::Variable("x".to_string()),
                    AtomArgument::Variable("y".to_string()),
                )),
            ],
            vec![],
        );

        let canonical = rule.canonical();
        assert!(canonical.body()[0].is_class());
        assert!(!canonical.body()[1].is_built_in());
        assert!(canonical.body()[2].is_built_in());

        let Atom::BuiltIn(built_in) = &canonical.body()[2] else {
            panic!("expected built-in atom");
        };
        assert!(built_in.arguments()[0].is_unbound_variable());
        assert!(!built_in.arguments()[1].is_unbound_variable());
        assert!(!built_in.arguments()[2].is_unbound_variable());
    }

    #[test]
    fn test_unbound_marked_on_leftmost_built_in_only() {
        let rule = SwrlRule::new(
            "R2",
            vec![
                Atom::BuiltIn(BuiltInAtom::new("swrlb:random", vec![variable("v")])),
                Atom::BuiltIn(BuiltInAtom::new(
                    "swrlb:abs",
                    vec![variable("w"), variable("v")],
                )),
            ],
            vec![],
        );

        let canonical = rule.canonical();
        let unbound: Vec<bool> = canonical
            .body()
            .iter()
            .filter_map(|atom| match atom {
                Atom::BuiltIn(built_in) => Some(built_in),
                _ => None,
            })
            .flat_map(|built_in| {
                built_in
                    .arguments()
                    .iter()
                    .map(BuiltInArgument::is_unbound_variable)
            })
            .collect();
        // ?v unbound only in the first built-in; ?w unbound in the second
        assert_eq!(unbound, vec![true, true, false]);
    }

    #[test]
    fn test_query_detection_by_head_built_in() {
        let rule = SwrlRule::new(
            "Q1",
            vec![],
            vec![Atom::BuiltIn(BuiltInAtom::new(
                "sqwrl:select",
                vec![variable("x")],
            ))],
        );
        assert!(rule.is_sqwrl_query());

        let plain = SwrlRule::new(
            "R3",
            vec![Atom::BuiltIn(BuiltInAtom::new(
                "swrlb:greaterThan",
                vec![variable("x"), variable("y")],
            ))],
            vec![],
        );
        assert!(!plain.is_sqwrl_query());
    }
}
