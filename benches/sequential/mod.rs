use criterion::{BatchSize, BenchmarkId, Criterion, Throughput};
use redblack::RbTree;

use crate::{Pattern, SIZES};

/// Insert `n` keys into an empty tree, for each key [`Pattern`].
///
/// Sorted input is the worst case for an unbalanced BST and drives the
/// rebalancing on every insert.
pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for pattern in Pattern::ALL {
        for n in SIZES {
            let keys = pattern.keys(n);

            g.throughput(Throughput::Elements(n as u64));
            g.bench_with_input(BenchmarkId::new(pattern.name(), n), &keys, |b, keys| {
                b.iter_batched(
                    RbTree::new,
                    |mut t| {
                        for &k in keys {
                            t.insert(k).unwrap();
                        }
                        t
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
}
