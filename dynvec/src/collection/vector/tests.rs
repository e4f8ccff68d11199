use crate::{
  Error,
  collection::{Vector, VectorError},
};
use core::{
  mem,
  sync::atomic::{AtomicUsize, Ordering},
};

struct Explosive<'counter> {
  drops: &'counter AtomicUsize,
  panics: bool,
}

impl Drop for Explosive<'_> {
  fn drop(&mut self) {
    let _ = self.drops.fetch_add(1, Ordering::Relaxed);
    if self.panics {
      panic!("boom");
    }
  }
}

struct Tracked<'counter>(&'counter AtomicUsize);

impl Clone for Tracked<'_> {
  fn clone(&self) -> Self {
    Self(self.0)
  }
}

impl Drop for Tracked<'_> {
  fn drop(&mut self) {
    let _ = self.0.fetch_add(1, Ordering::Relaxed);
  }
}

#[test]
fn appends_reflect_both_length_and_content() {
  let mut vec = Vector::new();
  for elem in 0u32..100 {
    vec.push(elem).unwrap();
    assert_eq!(vec.len(), elem as usize + 1);
  }
  for (idx, elem) in vec.iter().enumerate() {
    assert_eq!(idx, *elem as usize);
  }
}

#[test]
fn assign_replaces_prior_content() {
  let drops = AtomicUsize::new(0);
  let mut vec = Vector::from_cloneable_elem(3, Tracked(&drops)).unwrap();
  assert_eq!(drops.load(Ordering::Relaxed), 1);
  let src = [Tracked(&drops)];
  vec.assign_from_cloneable_slice(&src).unwrap();
  assert_eq!(drops.load(Ordering::Relaxed), 4);
  assert_eq!(vec.len(), 1);
}

#[test]
fn capacity_at_least_doubles_on_growth() {
  let mut vec = Vector::new();
  let mut prev_cap = vec.capacity();
  for elem in 0u32..1000 {
    vec.push(elem).unwrap();
    let cap = vec.capacity();
    assert!(cap >= vec.len());
    if cap != prev_cap {
      assert!(cap >= prev_cap.wrapping_mul(2));
      prev_cap = cap;
    }
  }
}

#[test]
fn clone_has_independent_storage() {
  let vec = Vector::from_copyable_slice(&[0u8, 1, 2]).unwrap();
  let mut copy = vec.clone();
  copy.push(3).unwrap();
  assert_eq!(vec.as_slice(), &[0, 1, 2]);
  assert_eq!(copy.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn drop_counts_are_balanced() {
  let drops = AtomicUsize::new(0);
  {
    let mut vec = Vector::new();
    for _ in 0..4 {
      vec.push(Tracked(&drops)).unwrap();
    }
    assert_eq!(drops.load(Ordering::Relaxed), 0);
    drop(vec.remove(1));
    assert_eq!(drops.load(Ordering::Relaxed), 1);
    vec.truncate(1);
    assert_eq!(drops.load(Ordering::Relaxed), 3);
  }
  assert_eq!(drops.load(Ordering::Relaxed), 4);
}

#[test]
fn empty_operations_are_no_ops() {
  let mut vec = Vector::<u8>::new();
  assert_eq!(vec.pop(), None);
  assert_eq!(vec.remove(0), None);
  vec.truncate(0);
  vec.clear();
  vec.shrink_to_fit();
  vec.insert_from_cloneable_slice(0, &[]).unwrap();
  vec.insert_from_cloneable_elem(0, 0, 0).unwrap();
  vec.remove_range(0..0).unwrap();
  assert_eq!(vec.len(), 0);
  assert_eq!(vec.capacity(), 0);
}

#[test]
fn erasing_the_first_index_repeatedly_keeps_the_tail() {
  let mut vec = Vector::from_copyable_slice(&[0u8, 1, 2, 3, 4]).unwrap();
  for _ in 0..4 {
    let _elem = vec.remove(0).unwrap();
  }
  assert_eq!(vec.as_slice(), &[4]);
  assert_eq!(vec.len(), 1);
}

#[test]
fn hundred_thousand_appends() {
  let mut vec = Vector::new();
  for elem in 0u32..100_000 {
    vec.push(elem).unwrap();
  }
  assert_eq!(vec.len(), 100_000);
  assert_eq!(vec[0], 0);
  assert_eq!(vec[99_999], 99_999);
  assert!(vec.capacity() >= 100_000);
  assert!(vec.capacity().is_power_of_two());
}

#[test]
fn insert_and_remove_range_are_inverse_operations() {
  let mut vec = Vector::from_copyable_slice(&[0u8, 1, 2, 3]).unwrap();
  vec.insert_from_cloneable_elem(1, 3, 9).unwrap();
  assert_eq!(vec.as_slice(), &[0, 9, 9, 9, 1, 2, 3]);
  vec.remove_range(1..4).unwrap();
  assert_eq!(vec.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn insert_rejects_aliased_sources() {
  let mut vec = Vector::from_copyable_slice(&[0u8, 1, 2]).unwrap();
  let slice = unsafe { core::slice::from_raw_parts(vec.as_ptr(), 2) };
  assert!(matches!(
    vec.insert_from_cloneable_slice(1, slice),
    Err(Error::VectorError(VectorError::AliasedSource))
  ));
  assert!(matches!(
    vec.assign_from_cloneable_slice(slice),
    Err(Error::VectorError(VectorError::AliasedSource))
  ));
  assert_eq!(vec.as_slice(), &[0, 1, 2]);
}

#[test]
fn insert_rejects_out_of_bounds_indices() {
  let mut vec = Vector::from_copyable_slice(&[0u8, 1]).unwrap();
  assert!(matches!(
    vec.insert(3, 2),
    Err(Error::VectorError(VectorError::OutOfBoundsInsertIdx))
  ));
  assert!(matches!(
    vec.insert_from_cloneable_slice(3, &[2]),
    Err(Error::VectorError(VectorError::OutOfBoundsInsertIdx))
  ));
  assert_eq!(vec.as_slice(), &[0, 1]);
}

#[test]
fn moves_transfer_the_block_and_reset_the_source() {
  let mut vec = Vector::from_copyable_slice(&[0u8, 1, 2]).unwrap();
  let ptr = vec.as_ptr();
  let moved = mem::take(&mut vec);
  assert_eq!(moved.as_ptr(), ptr);
  assert_eq!(moved.as_slice(), &[0, 1, 2]);
  assert_eq!(vec.len(), 0);
  assert_eq!(vec.capacity(), 0);
}

#[test]
fn remove_range_with_a_panicking_destructor_never_double_drops() {
  let drops = AtomicUsize::new(0);
  let rslt = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    let mut vec = Vector::new();
    for idx in 0..5 {
      vec.push(Explosive { drops: &drops, panics: idx == 1 }).unwrap();
    }
    vec.remove_range(1..3).unwrap();
  }));
  assert!(rslt.is_err());
  // Slots 0, 1 and 2 are dropped exactly once. The suffix leaks.
  assert_eq!(drops.load(Ordering::Relaxed), 3);
}

#[test]
fn remove_range_rejects_invalid_ranges() {
  let mut vec = Vector::from_copyable_slice(&[0u8, 1, 2]).unwrap();
  assert!(matches!(
    vec.remove_range(1..4),
    Err(Error::VectorError(VectorError::OutOfBoundsRange))
  ));
  #[expect(clippy::reversed_empty_ranges, reason = "invalid on purpose")]
  let rslt = vec.remove_range(2..1);
  assert!(matches!(rslt, Err(Error::VectorError(VectorError::OutOfBoundsRange))));
  assert_eq!(vec.as_slice(), &[0, 1, 2]);
}

#[test]
fn remove_range_drops_only_the_range() {
  let drops = AtomicUsize::new(0);
  let mut vec = Vector::from_cloneable_elem(5, Tracked(&drops)).unwrap();
  assert_eq!(drops.load(Ordering::Relaxed), 1);
  vec.remove_range(1..3).unwrap();
  assert_eq!(drops.load(Ordering::Relaxed), 3);
  assert_eq!(vec.len(), 3);
}

#[test]
fn resize_grows_with_fills_and_shrinks_with_truncation() {
  let mut vec = Vector::new();
  vec.resize(3, 7u8).unwrap();
  assert_eq!(vec.as_slice(), &[7, 7, 7]);
  vec.resize_with(5, || 1).unwrap();
  assert_eq!(vec.as_slice(), &[7, 7, 7, 1, 1]);
  vec.resize(2, 0).unwrap();
  assert_eq!(vec.as_slice(), &[7, 7]);
  vec.resize_with(0, || 0).unwrap();
  assert_eq!(vec.len(), 0);
}

#[test]
fn self_insertion_requires_a_snapshot() {
  let mut vec = Vector::from_copyable_slice(&[0u8, 1, 2]).unwrap();
  let copy = vec.clone();
  vec.insert_from_cloneable_slice(0, &copy).unwrap();
  assert_eq!(vec.as_slice(), &[0, 1, 2, 0, 1, 2]);
  assert_eq!(copy.as_slice(), &[0, 1, 2]);
}

#[test]
fn shrink_to_fit_releases_spare_capacity() {
  let mut vec = Vector::with_capacity(16).unwrap();
  vec.push(1u8).unwrap();
  vec.push(2).unwrap();
  vec.shrink_to_fit();
  assert_eq!(vec.capacity(), 2);
  assert_eq!(vec.as_slice(), &[1, 2]);
  vec.clear();
  vec.shrink_to_fit();
  assert_eq!(vec.capacity(), 0);
}

#[test]
fn push_with_returns_a_reference_to_the_new_element() {
  let mut vec = Vector::new();
  let elem = vec.push_with(|| 1u8).unwrap();
  *elem = 9;
  assert_eq!(vec.as_slice(), &[9]);
}

#[test]
fn zero_sized_elements_never_allocate() {
  let mut vec = Vector::new();
  for _ in 0..100 {
    vec.push(()).unwrap();
  }
  assert_eq!(vec.len(), 100);
  assert_eq!(vec.capacity(), usize::MAX);
  assert_eq!(vec.pop(), Some(()));
  vec.truncate(10);
  assert_eq!(vec.len(), 10);
}
