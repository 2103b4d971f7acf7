//! Topological sort using depth-first search (DFS)
//!
//! Used to order hooks by their `run_after`/`run_before` constraints and to
//! initialize extensions after the extensions they depend on.
//!
//! ## Algorithm
//!
//! Uses DFS with three-color marking to detect cycles and produce ordering:
//!
//! 1. **WHITE** (unvisited): Node hasn't been processed
//! 2. **GRAY** (temporarily visited): Node is in current recursion stack
//! 3. **BLACK** (permanently visited): Node has been fully processed
//!
//! Nodes are visited in the caller's order, so nodes without constraints keep
//! their original relative position.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, hook};

struct TopoSortContext<'a> {
    /// Node name to the names that must come before it
    deps: &'a HashMap<String, Vec<String>>,
    /// Names allowed in the output
    known: HashSet<&'a str>,
    visited: HashSet<String>,
    /// Current DFS path, for cycle reporting
    path: Vec<String>,
    result: Vec<String>,
}

/// Order `order` so every node comes after the nodes listed for it in `deps`
///
/// Dependencies on names outside `order` are ignored.
///
/// # Errors
///
/// Returns [`crate::error::UnchainedError::CircularDependency`] if a cycle is found.
pub fn topological_sort(
    deps: &HashMap<String, Vec<String>>,
    order: &[String],
) -> Result<Vec<String>> {
    let mut ctx = TopoSortContext {
        deps,
        known: order.iter().map(String::as_str).collect(),
        visited: HashSet::new(),
        path: Vec::new(),
        result: Vec::with_capacity(order.len()),
    };

    for name in order {
        topo_dfs(&mut ctx, name)?;
    }

    Ok(ctx.result)
}

fn topo_dfs(ctx: &mut TopoSortContext, name: &str) -> Result<()> {
    if let Some(start) = ctx.path.iter().position(|n| n == name) {
        let mut chain = ctx.path[start..].to_vec();
        chain.push(name.to_string());
        return Err(hook::circular(chain.join(" -> ")));
    }

    if ctx.visited.contains(name) || !ctx.known.contains(name) {
        return Ok(());
    }

    ctx.path.push(name.to_string());
    if let Some(before) = ctx.deps.get(name) {
        for dep in before {
            topo_dfs(ctx, dep)?;
        }
    }
    ctx.path.pop();

    ctx.visited.insert(name.to_string());
    ctx.result.push(name.to_string());

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::UnchainedError;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn deps(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(name, before)| ((*name).to_string(), names(before)))
            .collect()
    }

    #[test]
    fn test_topological_sort_preserves_order() {
        let result = topological_sort(&HashMap::new(), &names(&["a", "b", "c"]))
            .expect("topological sort should succeed");
        assert_eq!(result, names(&["a", "b", "c"]));
    }

    #[test]
    fn test_topological_sort_moves_dependencies_first() {
        let result = topological_sort(&deps(&[("a", &["c"])]), &names(&["a", "b", "c"]))
            .expect("topological sort should succeed");
        assert_eq!(result, names(&["c", "a", "b"]));
    }

    #[test]
    fn test_topological_sort_transitive() {
        let result = topological_sort(
            &deps(&[("a", &["b"]), ("b", &["c"])]),
            &names(&["a", "b", "c"]),
        )
        .expect("topological sort should succeed");
        assert_eq!(result, names(&["c", "b", "a"]));
    }

    #[test]
    fn test_topological_sort_ignores_unknown() {
        let result = topological_sort(&deps(&[("a", &["missing"])]), &names(&["a"]))
            .expect("topological sort should succeed");
        assert_eq!(result, names(&["a"]));
    }

    #[test]
    fn test_topological_sort_cycle_detection() {
        let result = topological_sort(
            &deps(&[("a", &["b"]), ("b", &["a"])]),
            &names(&["a", "b"]),
        );
        match result.expect_err("cycle should be rejected") {
            UnchainedError::CircularDependency { chain } => assert_eq!(chain, "a -> b -> a"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
