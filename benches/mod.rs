use criterion::{criterion_group, criterion_main};


use order_book::benchmark_order_book;
use twap::benchmark_twap;

// Define the benchmark groups
criterion_group!(benches, benchmark_order_book, benchmark_twap);

criterion_main!(benches);
