// Benchmarks for the array methods on node lists.
//
// Every method is driven through the container primitives, so these mostly
// measure how well NodeList's slot storage holds up under each access pattern.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use nodeseq::{ArrayMethods, Element, MethodTable, Node, NodeList, Value};

// =============================================================================
// Benchmark Helpers
// =============================================================================

const SIZES: [usize; 3] = [10, 100, 1000];

/// A list of `<item>` tags with random short text, seeded for reproducibility
fn random_list(size: usize, seed: u64) -> Node {
    let mut rng = StdRng::seed_from_u64(seed);
    let list: NodeList = (0..size)
        .map(|i| {
            let len = rng.gen_range(1..8);
            let text: String = (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
            Element::tag("item").with_attribute("n", i.to_string()).with_text(text)
        })
        .collect();
    Node::from(list)
}

// =============================================================================
// Mutation Benchmarks
// =============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = Node::list();
                for i in 0..size {
                    list.push([Node::from(Element::text(i.to_string()))]).unwrap();
                }
                while list.pop().unwrap().is_some() {}
                black_box(list.length())
            });
        });
    }

    group.finish();
}

fn bench_shift_unshift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_unshift");

    for size in SIZES {
        let list = random_list(size, 1);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| {
                let mut list = list.clone();
                let mut taken = Vec::with_capacity(size);
                while let Some(item) = list.shift().unwrap() {
                    taken.push(item);
                }
                for item in taken.into_iter().rev() {
                    list.unshift([Node::from(item)]).unwrap();
                }
                black_box(list.length())
            });
        });
    }

    group.finish();
}

fn bench_random_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_splice");

    for size in SIZES {
        let list = random_list(size, 2);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| {
                let mut list = list.clone();
                for _ in 0..size {
                    let index = rng.gen_range(0..=list.length());
                    let how_many = rng.gen_range(0..3);
                    let items = vec![Node::from("x"); rng.gen_range(0..3)];
                    black_box(list.splice(index, how_many, items).unwrap());
                }
                black_box(list.length())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Query Benchmarks
// =============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in SIZES {
        let list = random_list(size, 4);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("by_string", size), &list, |b, list| {
            b.iter(|| black_box(list.sort().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("by_attribute", size), &list, |b, list| {
            b.iter(|| {
                black_box(
                    list.sort_by(|a, b| a.attribute("n").cmp(&b.attribute("n")))
                        .unwrap(),
                )
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in SIZES {
        let list = random_list(size, 5);
        let needle = list.as_list().and_then(|items| items.elements().last()).cloned();
        group.bench_with_input(BenchmarkId::new("index_of_missing", size), &list, |b, list| {
            b.iter(|| black_box(list.index_of("not there", None).unwrap()));
        });
        if let Some(needle) = needle {
            group.bench_with_input(BenchmarkId::new("index_of_last", size), &list, |b, list| {
                b.iter(|| black_box(list.index_of(&needle, None).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for size in SIZES {
        let list = random_list(size, 6);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| black_box(list.join(",").unwrap()));
        });
    }

    group.finish();
}

// =============================================================================
// Dynamic Dispatch Benchmarks
// =============================================================================

fn bench_method_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("method_table");
    let table = MethodTable::standard();

    for size in SIZES {
        let list = Value::from(random_list(size, 7));
        let keep = Value::function(|_, args| Value::from(args[1].to_number() % 2.0 == 0.0));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("filter", size), &list, |b, list| {
            b.iter(|| {
                let mut this = list.clone();
                black_box(table.call(&mut this, "filter", &[keep.clone()]).unwrap())
            });
        });
        group.bench_with_input(BenchmarkId::new("slice", size), &list, |b, list| {
            b.iter(|| {
                let mut this = list.clone();
                black_box(table.call(&mut this, "slice", &[]).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_shift_unshift,
    bench_random_splice,
    bench_sort,
    bench_search,
    bench_join,
    bench_method_table,
);
criterion_main!(benches);
