use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simple_vector::{reserve, SimpleVector};

fn bench_push_std(c: &mut Criterion) {
    c.bench_function("std_vec_push", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..1000 {
                v.push(black_box(i));
            }
            v
        })
    });
}

fn bench_push_back(c: &mut Criterion) {
    c.bench_function("simple_vector_push_back", |b| {
        b.iter(|| {
            let mut v = SimpleVector::new();
            for i in 0..1000 {
                v.push_back(black_box(i));
            }
            v
        })
    });
}

fn bench_push_back_reserved(c: &mut Criterion) {
    c.bench_function("simple_vector_push_back_reserved", |b| {
        b.iter(|| {
            let mut v = SimpleVector::with_reserve(reserve(1000));
            for i in 0..1000 {
                v.push_back(black_box(i));
            }
            v
        })
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("simple_vector_insert_front", |b| {
        b.iter(|| {
            let mut v = SimpleVector::new();
            for i in 0..256 {
                v.insert(0, black_box(i));
            }
            v
        })
    });
}

fn bench_iter(c: &mut Criterion) {
    let v: SimpleVector<i32> = (0..1000).collect();
    c.bench_function("simple_vector_iter", |b| {
        b.iter(|| {
            let mut sum = 0;
            for &x in black_box(&v) {
                sum += x;
            }
            sum
        })
    });
}

criterion_group!(
    benches,
    bench_push_std,
    bench_push_back,
    bench_push_back_reserved,
    bench_insert_front,
    bench_iter
);
criterion_main!(benches);
