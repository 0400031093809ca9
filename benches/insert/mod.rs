use std::hint::black_box;

use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interval_rbtree::IntervalTree;

use crate::{Workload, TREE_SIZES};

/// Intervals added to the pre-filled tree per measured iteration.
const BATCH: usize = 64;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in TREE_SIZES {
        bench_build(&mut g, n_values);
        bench_batch(&mut g, n_values);
    }
}

/// Collect `n_values` intervals into an empty tree.
fn bench_build<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let values = Workload::default().take(n_values);

    g.throughput(Throughput::Elements(n_values as u64));
    g.bench_with_input(BenchmarkId::new("build", n_values), &values, |b, values| {
        b.iter(|| black_box(values.iter().cloned().collect::<IntervalTree<_>>()))
    });
}

/// Add [`BATCH`] intervals to a tree already holding `n_values`, with spare
/// capacity reserved up front.
fn bench_batch<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut source = Workload::default();

    let prefill = source.take(n_values);
    let batch = source.take(BATCH);

    g.throughput(Throughput::Elements(BATCH as u64));
    g.bench_function(BenchmarkId::new("batch_into", n_values), |b| {
        b.iter_batched(
            || {
                let mut t = IntervalTree::with_capacity(n_values + BATCH);
                t.extend(prefill.iter().cloned());
                t
            },
            |mut t| {
                t.extend(batch.iter().cloned());
                t
            },
            BatchSize::LargeInput,
        )
    });
}
