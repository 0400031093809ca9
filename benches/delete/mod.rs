use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_rbtree::IntervalTree;

use crate::{Workload, TREE_SIZES};

/// The number of distinct probe intervals cycled through by each benchmark.
const N_PROBES: usize = 1_000;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new("n_values", v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert_delete");

    for n_values in TREE_SIZES {
        bench_param(&mut g, n_values)
    }
}

/// For a tree containing `n_values`, measure inserting a random interval and
/// then deleting it by key, leaving the tree size unchanged.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut source = Workload::default();
    let mut t = IntervalTree::with_capacity(n_values + 1);
    t.extend(source.take(n_values));

    // Intervals drawn after the tree contents, cycled through while measuring.
    let probes = source.take(N_PROBES);

    let bench_name = BenchName { n_values };
    g.throughput(Throughput::Elements(1)); // Insert + delete pairs per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        let mut probes = probes.iter().cycle();
        b.iter(|| {
            let v = probes.next().unwrap().clone();
            let key = *v.low();

            t.insert(v);
            assert!(t.delete(&key).is_some());
        })
    });

    assert_eq!(t.len(), n_values);
}
