use criterion::{Criterion, criterion_group, criterion_main};

use monoarena::{ArenaAllocator, List, Policy};

const LIST_SIZE: usize = 10_000;

fn heap_push_pop() {
  let mut list = List::new();
  for i in 0..LIST_SIZE {
    list.push_back(i);
  }
  while list.pop_front().is_some() {}
}

fn arena_push() {
  let alloc = ArenaAllocator::<usize>::new(Policy::expandable(LIST_SIZE));
  let mut list = List::new_in(alloc);
  for i in 0..LIST_SIZE {
    list.push_back(i);
  }
  assert!(list.len() == LIST_SIZE);
}

fn arena_push_small_blocks() {
  let alloc = ArenaAllocator::<usize>::new(Policy::expandable(16));
  let mut list = List::new_in(alloc);
  for i in 0..LIST_SIZE {
    list.push_back(i);
  }
  assert!(list.len() == LIST_SIZE);
}

fn bench_group(c: &mut Criterion) {
  c.bench_function("heap list push/pop", |b| b.iter(heap_push_pop));
  c.bench_function("arena list push", |b| b.iter(arena_push));
  c.bench_function("arena list push, small blocks", |b| {
    b.iter(arena_push_small_blocks)
  });
}

criterion_group!(benches, bench_group);
criterion_main!(benches);
