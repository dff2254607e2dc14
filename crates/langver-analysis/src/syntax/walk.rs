//! Iterative pre-order traversal.

use std::ops::ControlFlow;

use tree_sitter::Node;

/// The tree is deeper than the configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthExceeded {
    pub limit: usize,
}

/// Visits every node under `root` (inclusive) in document order.
///
/// Uses a `TreeCursor`, so pathological nesting cannot exhaust the native
/// stack. Returns `Err` as soon as a node deeper than `max_depth` is reached,
/// and `Ok(ControlFlow::Break(()))` when `visit` stops the walk early.
pub fn walk_nodes<'t, F>(
    root: Node<'t>,
    max_depth: usize,
    mut visit: F,
) -> Result<ControlFlow<()>, DepthExceeded>
where
    F: FnMut(Node<'t>) -> ControlFlow<()>,
{
    let mut cursor = root.walk();
    let mut depth = 0usize;
    loop {
        if depth > max_depth {
            return Err(DepthExceeded { limit: max_depth });
        }
        if visit(cursor.node()).is_break() {
            return Ok(ControlFlow::Break(()));
        }
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Ok(ControlFlow::Continue(()));
            }
            depth -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn test_visits_every_node_once() {
        let tree = parse("class A { void f() { int x = 1; } }");
        let mut count = 0usize;
        let flow = walk_nodes(tree.root_node(), usize::MAX, |_| {
            count += 1;
            ControlFlow::Continue(())
        })
        .unwrap();
        assert!(flow.is_continue());
        assert_eq!(count, tree.root_node().descendant_count());
    }

    #[test]
    fn test_stops_early_on_break() {
        let tree = parse("class A { void f() { int x = 1; } }");
        let mut seen = Vec::new();
        let flow = walk_nodes(tree.root_node(), usize::MAX, |node| {
            seen.push(node.kind());
            if node.kind() == "method_declaration" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();
        assert!(flow.is_break());
        assert_eq!(seen.last(), Some(&"method_declaration"));
        assert!(!seen.contains(&"local_variable_declaration"));
    }

    #[test]
    fn test_depth_limit_is_reported() {
        let nested = format!("class A {{ int x = {}1{}; }}", "(".repeat(50), ")".repeat(50));
        let tree = parse(&nested);
        let err = walk_nodes(tree.root_node(), 10, |_| ControlFlow::Continue(())).unwrap_err();
        assert_eq!(err.limit, 10);
        assert!(walk_nodes(tree.root_node(), 10_000, |_| ControlFlow::Continue(())).is_ok());
    }
}
