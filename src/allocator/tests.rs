use super::{Allocator, ArenaAllocator, Heap};
use crate::{error::AllocError, policy::Policy};

#[test]
fn fixed_grants_up_to_the_ceiling() {
  let alloc = ArenaAllocator::<u32>::new(Policy::fixed(2));

  let first = alloc.allocate(1).unwrap();
  let second = alloc.allocate(1).unwrap();
  assert_ne!(first, second);
  assert_eq!(alloc.allocated(), 2);

  assert_eq!(
    alloc.allocate(1),
    Err(AllocError::LimitExceeded { requested: 1, max: 2 })
  );
  assert_eq!(alloc.allocated(), 2, "a rejected grant changes nothing");
}

#[test]
fn fixed_rejects_whole_batches() {
  let alloc = ArenaAllocator::<u64>::new(Policy::fixed(2));

  // no partial grant: the batch is refused outright
  assert_eq!(
    alloc.allocate(3),
    Err(AllocError::LimitExceeded { requested: 3, max: 2 })
  );
  assert_eq!(alloc.allocated(), 0);

  // the untouched budget still admits a fitting batch
  assert!(alloc.allocate(2).is_ok());
  assert_eq!(alloc.allocated(), 2);
}

#[test]
fn expandable_grows_transparently() {
  let alloc = ArenaAllocator::<u64>::new(Policy::expandable(1));

  let first = alloc.allocate(1).unwrap();
  let second = alloc.allocate(1).unwrap();

  // SAFETY: both regions were just allocated for one u64 each
  unsafe {
    first.as_ptr().write(11);
    second.as_ptr().write(22);
    assert_eq!(first.as_ptr().read(), 11);
    assert_eq!(second.as_ptr().read(), 22);
  }
  assert_ne!(first, second);
  assert_eq!(alloc.allocated(), 2);
}

#[test]
fn rebound_handles_share_the_budget() {
  let alloc = ArenaAllocator::<u8>::new(Policy::fixed(4));
  let rebound = alloc.rebind::<u64>();

  assert!(alloc.shares_arena_with(&rebound));

  let _ = rebound.allocate(3).unwrap();
  assert_eq!(alloc.allocated(), 3, "grants are visible across rebinds");

  // the remaining budget constrains the original handle too
  assert!(alloc.allocate(2).is_err());
  assert!(alloc.allocate(1).is_ok());
}

#[test]
fn equality_is_arena_identity() {
  let alloc = ArenaAllocator::<u32>::new(Policy::fixed(8));
  let copy = alloc.clone();
  let unrelated = ArenaAllocator::<u32>::new(Policy::fixed(8));

  assert_eq!(alloc, copy);
  assert_ne!(alloc, unrelated, "identical policy values do not make handles equal");
}

#[test]
fn deallocate_is_a_no_op() {
  let alloc = ArenaAllocator::<u32>::new(Policy::fixed(4));
  let ptr = alloc.allocate(2).unwrap();
  alloc.deallocate(ptr, 2);

  // the budget never shrinks
  assert_eq!(alloc.allocated(), 2);
  assert!(alloc.allocate(2).is_ok());
  assert!(alloc.allocate(1).is_err());
}

#[repr(align(32))]
#[derive(Clone, Copy)]
#[allow(dead_code)]
struct Overaligned([u64; 4]);

#[test]
fn returned_pointers_are_aligned() {
  let alloc = ArenaAllocator::<Overaligned>::new(Policy::expandable(2));
  for _ in 0..4 {
    let ptr = alloc.allocate(1).unwrap();
    assert_eq!(ptr.as_ptr() as usize % align_of::<Overaligned>(), 0);
  }

  let bytes = alloc.rebind::<u8>();
  let _ = bytes.allocate(1).unwrap();
  let ptr = alloc.allocate(1).unwrap();
  assert_eq!(ptr.as_ptr() as usize % align_of::<Overaligned>(), 0);
}

#[test]
fn zero_sized_elements_are_still_counted() {
  let alloc = ArenaAllocator::<()>::new(Policy::fixed(2));
  assert!(alloc.allocate(2).is_ok());
  assert_eq!(alloc.allocated(), 2);
  assert!(alloc.allocate(1).is_err());
}

#[test]
fn overflowing_requests_report_the_byte_size() {
  // one element past the largest array layout of u64
  let n = isize::MAX as usize / size_of::<u64>() + 1;
  assert_eq!(
    Heap::<u64>::new().allocate(n),
    Err(AllocError::OutOfMemory {
      size: n * size_of::<u64>()
    })
  );

  let alloc = ArenaAllocator::<u64>::new(Policy::expandable(1));
  assert_eq!(
    alloc.allocate(usize::MAX),
    Err(AllocError::OutOfMemory { size: usize::MAX })
  );
  assert_eq!(alloc.allocated(), 0, "a rejected grant changes nothing");
}

#[test]
fn heap_allocates_and_frees() {
  let heap = Heap::<u32>::new();
  let ptr = heap.allocate(4).unwrap();

  // SAFETY: ptr is valid for four u32 values
  unsafe {
    for i in 0..4 {
      ptr.as_ptr().add(i).write(i as u32);
    }
    assert_eq!(ptr.as_ptr().add(3).read(), 3);
  }
  heap.deallocate(ptr, 4);
}

#[test]
fn heap_handles_are_always_equal() {
  assert!(Heap::<u32>::IS_ALWAYS_EQUAL);
  assert_eq!(Heap::<u32>::new(), Heap::<u32>::new());
  assert_eq!(Heap::<u32>::new().rebind::<u64>(), Heap::<u64>::new());
}
