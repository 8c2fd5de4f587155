use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let value = rng.next_u32();

                *map.entry(value).or_insert(0) += 1;
            }
        })
    });
}

fn bench_btreemap_count(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.next_u32();

        *map.entry(value).or_insert(0) += 1;
        values.push(value);
    }

    c.bench_function("bench btreemap count", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.get(value));
            }
        })
    });
}

macro_rules! multiset_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, Criterion};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use tree_collections::$module_name::$type_name;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let value = rng.next_u32();

                            set.insert(value);
                        }
                    }));
                }

                pub fn bench_count(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let value = rng.next_u32();

                        set.insert(value);
                        values.push(value);
                    }

                    c.bench_function(&format!("bench {} count", stringify!($module_name)), move |b| b.iter(|| {
                        for value in &values {
                            black_box(set.count(value).unwrap());
                        }
                    }));
                }
            }
        )*
    };
}

multiset_benches! {
    avl_tree: AvlMultiset,
    binary_search_tree: BstMultiset,
}

criterion_group!(
    benches,
    bench_btreemap_insert,
    bench_btreemap_count,
    avl_tree::bench_insert,
    avl_tree::bench_count,
    binary_search_tree::bench_insert,
    binary_search_tree::bench_count,
);
criterion_main!(benches);
