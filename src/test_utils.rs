use std::fmt::{Display, Write};

use proptest::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

use crate::{
    arena::Arena,
    iter::PreOrderIter,
    node::{NodeId, Side},
};

const KEY_MAX: i64 = 20;

/// Generate arbitrary keys from [-[`KEY_MAX`]..[`KEY_MAX`]).
///
/// The small domain makes repeated keys likely.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = i64> {
    -KEY_MAX..KEY_MAX
}

/// Route log output through the test harness so the trace logging paths are
/// exercised (and captured per test).
pub(crate) fn init_logging() {
    // Only the first call in the test binary installs the logger.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Assert every node in `arena` is reachable from the root exactly once, and
/// every child holds a parent back-reference to the node that owns it.
pub(crate) fn assert_links<K>(arena: &Arena<K>) {
    let root = match arena.root() {
        Some(v) => v,
        None => {
            assert_eq!(arena.len(), 0);
            return;
        }
    };

    assert!(arena.parent(root).is_none(), "root has a parent");

    let mut seen = vec![false; arena.len()];
    for v in PreOrderIter::new(arena, Some(root)) {
        assert!(!seen[v.index()], "node {} reachable twice", v.index());
        seen[v.index()] = true;

        let n = arena.node(v);
        for (side, child) in [(Side::Left, n.left()), (Side::Right, n.right())] {
            if let Some(child) = child {
                assert_eq!(arena.parent(child), Some(v), "stale parent link");
                assert_eq!(arena.side_of(child), Some(side));
            }
        }
    }

    assert!(seen.into_iter().all(|v| v), "unreachable node in arena");
}

/// Render the tree held in `arena` as a Graphviz DOT digraph, filling each
/// node with its color.
pub(crate) fn print_dot<K>(arena: &Arena<K>) -> String
where
    K: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(buf, r#"node [style = filled; fontcolor = white;];"#).unwrap();
    if let Some(root) = arena.root() {
        recurse(arena, root, &mut buf);
    }
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<K, W>(arena: &Arena<K>, id: NodeId, buf: &mut W)
where
    W: std::fmt::Write,
    K: Display,
{
    let n = arena.node(id);
    let color = if n.color().is_red() { "red" } else { "black" };

    writeln!(
        buf,
        r#""n{}" [label = "{}"; fillcolor = {};];"#,
        id.index(),
        n.key(),
        color,
    )
    .unwrap();

    for (side, child) in [("left", n.left()), ("right", n.right())] {
        match child {
            Some(v) => {
                writeln!(buf, r#""n{}" -> "n{}";"#, id.index(), v.index()).unwrap();
                recurse(arena, v, buf);
            }
            None => {
                let nil = format!("null_{}_{}", id.index(), side);
                writeln!(buf, r#""{nil}" [shape = point; style = invis;];"#).unwrap();
                writeln!(buf, r#""n{}" -> "{nil}" [style = invis;];"#, id.index()).unwrap();
            }
        };
    }
}
