use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_rbtree::IntervalTree;

use crate::{Workload, TREE_SIZES};

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("rank");

    for n_values in TREE_SIZES {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let t = Workload::default()
        .take(n_values)
        .into_iter()
        .collect::<IntervalTree<_>>();

    bench_find_first(n_values, g, &t);
    bench_find_middle(n_values, g, &t);
    bench_find_last(n_values, g, &t);
    bench_delete_by_index(n_values, g, &t);
}

/// Remove the middle-ranked interval from a fresh copy of the tree.
fn bench_delete_by_index<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &IntervalTree<u32>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "delete_by_index",
    };

    g.throughput(Throughput::Elements(1));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || t.clone(),
            |mut t| {
                let rank = t.len() / 2;
                black_box(t.delete_by_index(rank));
                t
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

macro_rules! find_bench {
    (
        $name:ident,
        $rank:expr
    ) => {
        paste::paste! {
            fn [<bench_find_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &IntervalTree<u32>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: concat!("find_", stringify!($name)),
                };

                let rank: fn(usize) -> usize = $rank;
                let rank = rank(t.len());

                g.throughput(Throughput::Elements(1));
                // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box(t.find_by_rank(black_box(rank))))
                });
            }
        }
    };
}

find_bench!(first, |_len| 0);
find_bench!(middle, |len| len / 2);
find_bench!(last, |len| len - 1);
