use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use redblack::Order;

use crate::{build, Pattern, SIZES};

macro_rules! traverse_fn {
    ($name:ident, $order:expr) => {
        paste::paste! {
            fn [<drain_ $name>](t: &redblack::RbTree<i64>) {
                for v in t.traverse($order) {
                    black_box(v);
                }
            }
        }
    };
}

traverse_fn!(pre_order, Order::PreOrder);
traverse_fn!(in_order, Order::InOrder);
traverse_fn!(post_order, Order::PostOrder);

/// Compare the cost of the structural [`walk()`] (depth + side per node)
/// against the plain `(key, color)` traversals a renderer could use instead.
///
/// [`walk()`]: redblack::RbTree::walk
pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("shape");

    for n in SIZES {
        // Ascending input yields the most skewed (deepest) valid tree.
        let t = build(&Pattern::Ascending.keys(n));

        g.throughput(Throughput::Elements(n as u64));

        g.bench_with_input(BenchmarkId::new("walk", n), &t, |b, t| {
            b.iter(|| {
                for v in t.walk() {
                    black_box(v);
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("pre_order", n), &t, |b, t| {
            b.iter(|| drain_pre_order(t))
        });
        g.bench_with_input(BenchmarkId::new("in_order", n), &t, |b, t| {
            b.iter(|| drain_in_order(t))
        });
        g.bench_with_input(BenchmarkId::new("post_order", n), &t, |b, t| {
            b.iter(|| drain_post_order(t))
        });
        g.bench_with_input(BenchmarkId::new("height", n), &t, |b, t| {
            b.iter(|| black_box(t.height()))
        });
    }
}
