//! Property-based tests for apply-order resolution.
//!
//! Uses proptest to fuzz-verify:
//!   - completeness and dependency-first ordering on acyclic graphs
//!   - terminal names never reaching the output
//!   - agreement with a straightforward recursive resolver, cycles included

use std::collections::BTreeSet;

use proptest::prelude::*;

use tforder_analysis::graph::DependencyGraph;
use tforder_analysis::order::resolve_order;
use tforder_core::errors::ResolveError;

// ---- Generators ----

/// Modules `m0..mN`, where `mi` may only reference `mj` with `j < i`, plus
/// a few external names. Registration order is shuffled.
fn acyclic_graph() -> impl Strategy<Value = DependencyGraph> {
    (1usize..40)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(0usize..n, 0..4), n),
                prop::collection::vec(prop::collection::btree_set(0usize..3, 0..2), n),
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            )
        })
        .prop_map(|(deps, externals, order)| {
            let mut graph = DependencyGraph::new();
            for i in order {
                let refs = deps[i]
                    .iter()
                    .filter(|&&j| j < i)
                    .map(|j| format!("m{j}"))
                    .chain(externals[i].iter().map(|k| format!("ext{k}")));
                graph.register(format!("m{i}"), refs);
            }
            graph
        })
}

/// Arbitrary references between `m0..mN`, cycles allowed.
fn any_graph() -> impl Strategy<Value = DependencyGraph> {
    (1usize..25).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0usize..n + 2, 0..3), n).prop_map(
            move |deps| {
                deps.into_iter()
                    .enumerate()
                    .map(|(i, refs)| {
                        let refs: Vec<String> = refs.into_iter().map(|j| format!("m{j}")).collect();
                        (format!("m{i}"), refs)
                    })
                    .collect()
            },
        )
    })
}

// ---- Oracle ----

/// Recursive depth-first resolution with the same visiting rules.
fn recursive_order(graph: &DependencyGraph) -> Result<Vec<String>, Vec<String>> {
    fn visit(
        graph: &DependencyGraph,
        module: &str,
        path: &mut Vec<String>,
        done: &mut BTreeSet<String>,
        chain: &mut Vec<String>,
    ) -> Result<(), Vec<String>> {
        if path.iter().any(|m| m == module) {
            let mut cycle = vec![module.to_string()];
            cycle.extend(path.iter().rev().cloned());
            return Err(cycle);
        }
        if done.contains(module) {
            return Ok(());
        }
        let Some(references) = graph.references(module) else {
            return Ok(());
        };
        path.push(module.to_string());
        for reference in references {
            visit(graph, reference, path, done, chain)?;
        }
        path.pop();
        done.insert(module.to_string());
        chain.push(module.to_string());
        Ok(())
    }

    let mut path = Vec::new();
    let mut done = BTreeSet::new();
    let mut chain = Vec::new();
    for root in graph.modules() {
        visit(graph, root, &mut path, &mut done, &mut chain)?;
    }
    Ok(chain)
}

// ---- Properties ----

proptest! {
    /// Every registered module appears exactly once.
    #[test]
    fn prop_order_is_complete(graph in acyclic_graph()) {
        let order = resolve_order(&graph).unwrap();
        prop_assert_eq!(order.len(), graph.len());
        let unique: BTreeSet<&String> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len());
        for module in graph.modules() {
            prop_assert!(order.iter().any(|m| m == module), "{} missing", module);
        }
    }

    /// Registered dependencies come before their dependents.
    #[test]
    fn prop_dependencies_come_first(graph in acyclic_graph()) {
        let order = resolve_order(&graph).unwrap();
        let position = |name: &str| order.iter().position(|m| m == name);
        for (module, references) in graph.iter() {
            for reference in references.iter().filter(|r| graph.contains(r)) {
                prop_assert!(
                    position(reference) < position(module),
                    "{} must precede {} in {:?}", reference, module, order
                );
            }
        }
    }

    /// External names are reported by the graph but never ordered.
    #[test]
    fn prop_terminal_names_are_not_emitted(graph in acyclic_graph()) {
        let order = resolve_order(&graph).unwrap();
        for name in graph.external_references() {
            prop_assert!(!graph.contains(&name));
            prop_assert!(!order.contains(&name));
        }
    }

    /// Registering the same references again changes nothing.
    #[test]
    fn prop_register_is_idempotent(graph in acyclic_graph()) {
        let mut doubled = graph.clone();
        for (module, references) in graph.iter() {
            doubled.register(module, references.iter().cloned());
        }
        prop_assert_eq!(&doubled, &graph);
        prop_assert_eq!(resolve_order(&doubled).unwrap(), resolve_order(&graph).unwrap());
    }

    /// The iterative resolver agrees with the recursive one, including the
    /// reported cycle chain.
    #[test]
    fn prop_matches_recursive_resolver(graph in any_graph()) {
        let expected = recursive_order(&graph);
        match resolve_order(&graph) {
            Ok(order) => prop_assert_eq!(Ok(order), expected),
            Err(ResolveError::CycleDetected { chain }) => {
                prop_assert!(chain[1..].contains(&chain[0]));
                prop_assert_eq!(Err(chain), expected);
            }
        }
    }
}
