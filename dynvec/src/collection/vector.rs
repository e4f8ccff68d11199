#[cfg(test)]
mod tests;

use crate::collection::{
  RawBuffer,
  misc::{drop_elements, fill_uninit},
};
use core::{
  alloc::Layout,
  borrow::{Borrow, BorrowMut},
  cmp::Ordering,
  fmt::{Debug, Display, Formatter},
  mem::{self, needs_drop},
  ops::{Deref, DerefMut, Range},
  ptr,
  slice::{Iter, IterMut},
};

/// Errors of [`Vector`].
#[derive(Clone, Copy, Debug)]
pub enum VectorError {
  /// The source slice of an `insert` or `assign` method points into the instance's own storage.
  AliasedSource,
  #[doc = doc_many_elems_cap_overflow!()]
  ExtendFromSliceOverflow,
  /// The index provided in the `insert` method is out of bounds.
  OutOfBoundsInsertIdx,
  /// The range provided in the `remove_range` method does not point to valid internal data.
  OutOfBoundsRange,
  #[doc = doc_reserve_overflow!()]
  ReserveOverflow,
}

impl Display for VectorError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl From<VectorError> for u8 {
  #[inline]
  fn from(from: VectorError) -> Self {
    match from {
      VectorError::AliasedSource => 0,
      VectorError::ExtendFromSliceOverflow => 1,
      VectorError::OutOfBoundsInsertIdx => 2,
      VectorError::OutOfBoundsRange => 3,
      VectorError::ReserveOverflow => 4,
    }
  }
}

impl core::error::Error for VectorError {}

/// A contiguous growable sequence container that manages its own backing storage.
///
/// Live elements occupy the slots `[0, len)` of an exclusively owned block with room for
/// `capacity()` elements. Slots beyond `len` are uninitialized memory and are never read
/// nor dropped.
pub struct Vector<T> {
  buffer: RawBuffer<T>,
  len: usize,
}

impl<T> Vector<T> {
  const NEEDS_DROP: bool = needs_drop::<T>();

  /// Constructs a new, empty instance without allocating.
  ///
  /// ```rust
  /// let vec = dynvec::collection::Vector::<u8>::new();
  /// assert_eq!(vec.len(), 0);
  /// assert_eq!(vec.capacity(), 0);
  /// ```
  #[inline]
  pub const fn new() -> Self {
    Self { buffer: RawBuffer::new(), len: 0 }
  }

  /// Constructs a new, empty instance with room for `cap` elements.
  ///
  /// ```rust
  /// let vec = dynvec::collection::Vector::<u8>::with_capacity(2).unwrap();
  /// assert!(vec.capacity() >= 2);
  /// ```
  #[inline]
  pub fn with_capacity(cap: usize) -> crate::Result<Self> {
    Ok(Self { buffer: RawBuffer::with_capacity(cap)?, len: 0 })
  }

  /// Constructs a new instance with `len` clones of `value`.
  ///
  /// ```rust
  /// let vec = dynvec::collection::Vector::from_cloneable_elem(3, 1u8).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 1, 1]);
  /// ```
  #[inline]
  pub fn from_cloneable_elem(len: usize, value: T) -> crate::Result<Self>
  where
    T: Clone,
  {
    let mut this = Self::new();
    this.resize(len, value)?;
    Ok(this)
  }

  /// Constructs a new instance with the cloned elements of `slice`.
  ///
  /// ```rust
  /// let vec = dynvec::collection::Vector::from_cloneable_slice(&[1u8, 2, 3]).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
  /// ```
  #[inline]
  pub fn from_cloneable_slice(slice: &[T]) -> crate::Result<Self>
  where
    T: Clone,
  {
    let mut this = Self::new();
    this.extend_from_cloneable_slice(slice)?;
    Ok(this)
  }

  /// Constructs a new instance with the copied elements of `slice`.
  ///
  /// ```rust
  /// let vec = dynvec::collection::Vector::from_copyable_slice(&[1u8, 2, 3]).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
  /// ```
  #[inline]
  pub fn from_copyable_slice(slice: &[T]) -> crate::Result<Self>
  where
    T: Copy,
  {
    let mut this = Self::new();
    this.extend_from_copyable_slice(slice)?;
    Ok(this)
  }

  /// Constructs a new instance with the elements provided by `iter`.
  ///
  /// ```rust
  /// let vec = dynvec::collection::Vector::from_iter(0u8..2).unwrap();
  /// assert_eq!(vec.as_slice(), &[0, 1]);
  /// ```
  #[expect(clippy::should_implement_trait, reason = "the std trait is infallible")]
  #[inline]
  pub fn from_iter(iter: impl IntoIterator<Item = T>) -> crate::Result<Self> {
    let mut this = Self::new();
    this.extend_from_iter(iter)?;
    Ok(this)
  }

  /// Returns a raw pointer to the instance's buffer, or a dangling raw pointer valid for
  /// zero sized reads if no block was allocated.
  #[inline]
  pub const fn as_ptr(&self) -> *const T {
    self.buffer.as_ptr()
  }

  /// Mutable version of [`Self::as_ptr`].
  #[inline]
  pub const fn as_ptr_mut(&mut self) -> *mut T {
    self.buffer.as_ptr_mut()
  }

  /// Extracts a slice containing all live elements.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.push(1u8).unwrap();
  /// assert_eq!(vec.as_slice(), &[1]);
  /// ```
  #[inline]
  pub const fn as_slice(&self) -> &[T] {
    // SAFETY: the first `len` slots always hold live elements
    unsafe { core::slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
  }

  /// Mutable version of [`Self::as_slice`].
  #[inline]
  pub const fn as_slice_mut(&mut self) -> &mut [T] {
    // SAFETY: the first `len` slots always hold live elements
    unsafe { core::slice::from_raw_parts_mut(self.buffer.as_ptr_mut(), self.len) }
  }

  /// Returns the total number of elements the instance can hold without reallocating.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// assert_eq!(vec.capacity(), 0);
  /// vec.push(1u8).unwrap();
  /// assert!(vec.capacity() >= 1);
  /// ```
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.buffer.capacity()
  }

  /// Returns the number of live elements, also referred to as the instance's 'length'.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the instance holds no elements.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Clears the instance, removing all values. No capacity is released.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.push(1u8).unwrap();
  /// vec.clear();
  /// assert_eq!(vec.len(), 0);
  /// ```
  #[inline]
  pub fn clear(&mut self) {
    self.truncate(0);
  }

  /// Clears the instance and then clones every element of `other` into it.
  ///
  /// `other` must not point into the instance's own storage.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(0u8..4).unwrap();
  /// vec.assign_from_cloneable_slice(&[7, 8]).unwrap();
  /// assert_eq!(vec.as_slice(), &[7, 8]);
  /// ```
  #[inline]
  pub fn assign_from_cloneable_slice(&mut self, other: &[T]) -> crate::Result<()>
  where
    T: Clone,
  {
    self.check_aliased_source(other)?;
    self.clear();
    self.extend_from_cloneable_slice(other)
  }

  /// Iterates over the slice `other`, clones each element and then appends it to this
  /// instance. The `other` slice is traversed in-order.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.extend_from_cloneable_slice(&[1u8, 2]).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 2]);
  /// ```
  #[inline]
  pub fn extend_from_cloneable_slice(&mut self, other: &[T]) -> crate::Result<()>
  where
    T: Clone,
  {
    let new_len = match self.len.checked_add(other.len()) {
      Some(elem) => elem,
      None => return Err(VectorError::ExtendFromSliceOverflow.into()),
    };
    self.buffer.grow(new_len, self.len)?;
    for elem in other {
      // SAFETY: capacity for `new_len` elements was allocated above
      let dst = unsafe { self.buffer.as_ptr_mut().add(self.len) };
      // SAFETY: `dst` points to valid uninitialized memory
      unsafe {
        ptr::write(dst, elem.clone());
      }
      self.len = self.len.wrapping_add(1);
    }
    Ok(())
  }

  /// Copies all elements of `other` into this instance with a single bulk copy.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.extend_from_copyable_slice(&[1u8, 2]).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 2]);
  /// ```
  #[inline]
  pub fn extend_from_copyable_slice(&mut self, other: &[T]) -> crate::Result<()>
  where
    T: Copy,
  {
    let new_len = match self.len.checked_add(other.len()) {
      Some(elem) => elem,
      None => return Err(VectorError::ExtendFromSliceOverflow.into()),
    };
    self.buffer.grow(new_len, self.len)?;
    // SAFETY: capacity for `new_len` elements was allocated above
    let dst = unsafe { self.buffer.as_ptr_mut().add(self.len) };
    // SAFETY: a shared borrow can not overlap the exclusively borrowed instance
    unsafe {
      ptr::copy_nonoverlapping(other.as_ptr(), dst, other.len());
    }
    self.len = new_len;
    Ok(())
  }

  /// Appends all elements of the iterator.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.extend_from_iter(0u8..2).unwrap();
  /// assert_eq!(vec.as_slice(), &[0, 1]);
  /// ```
  #[inline]
  pub fn extend_from_iter(&mut self, iter: impl IntoIterator<Item = T>) -> crate::Result<()> {
    for elem in iter {
      self.push(elem)?;
    }
    Ok(())
  }

  /// Inserts an element at position `idx`, shifting all subsequent elements to the right.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(1u8..4).unwrap();
  /// vec.insert(1, 4).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 4, 2, 3]);
  /// vec.insert(4, 5).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 4, 2, 3, 5]);
  /// ```
  #[inline]
  pub fn insert(&mut self, idx: usize, elem: T) -> crate::Result<()> {
    let len = self.len;
    if idx > len {
      return Err(VectorError::OutOfBoundsInsertIdx.into());
    }
    self.reserve(1)?;
    // SAFETY: top-level check ensures bounds
    let ptr = unsafe { self.buffer.as_ptr_mut().add(idx) };
    if idx < len {
      // SAFETY: `reserve` allocated one more element
      let dst = unsafe { ptr.add(1) };
      // SAFETY: `len - idx` live elements start at `ptr`
      unsafe {
        ptr::copy(ptr, dst, len.wrapping_sub(idx));
      }
    }
    // SAFETY: the slot at `idx` was either vacated by the shift or is uninitialized
    unsafe {
      ptr::write(ptr, elem);
    }
    self.len = len.wrapping_add(1);
    Ok(())
  }

  /// Inserts `count` clones of `value` at position `idx`, shifting all subsequent elements
  /// to the right. A zero `count` is a no-op.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(0u8..2).unwrap();
  /// vec.insert_from_cloneable_elem(1, 2, 9).unwrap();
  /// assert_eq!(vec.as_slice(), &[0, 9, 9, 1]);
  /// ```
  #[inline]
  pub fn insert_from_cloneable_elem(
    &mut self,
    idx: usize,
    count: usize,
    value: T,
  ) -> crate::Result<()>
  where
    T: Clone,
  {
    let len = self.open_gap(idx, count)?;
    if count == 0 {
      return Ok(());
    }
    // SAFETY: `open_gap` ensured bounds
    let ptr = unsafe { self.buffer.as_ptr_mut().add(idx) };
    // SAFETY: the gap `[idx, idx + count)` holds vacated slots
    unsafe {
      fill_uninit(ptr, count, &value);
    }
    self.len = len.wrapping_add(count);
    Ok(())
  }

  /// Inserts clones of all elements of `other` at position `idx`, shifting all subsequent
  /// elements to the right. An empty `other` is a no-op.
  ///
  /// `other` must not point into the instance's own storage. Growth invalidates prior
  /// references, so aliasing sources have to be snapshotted by the caller beforehand.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(0u8..3).unwrap();
  /// let copy = vec.clone();
  /// vec.insert_from_cloneable_slice(0, &copy).unwrap();
  /// assert_eq!(vec.as_slice(), &[0, 1, 2, 0, 1, 2]);
  /// ```
  #[inline]
  pub fn insert_from_cloneable_slice(&mut self, idx: usize, other: &[T]) -> crate::Result<()>
  where
    T: Clone,
  {
    self.check_aliased_source(other)?;
    let count = other.len();
    let len = self.open_gap(idx, count)?;
    if count == 0 {
      return Ok(());
    }
    // SAFETY: `open_gap` ensured bounds
    let ptr = unsafe { self.buffer.as_ptr_mut().add(idx) };
    for (elem_idx, elem) in other.iter().enumerate() {
      // SAFETY: the gap `[idx, idx + count)` holds vacated slots
      let dst = unsafe { ptr.add(elem_idx) };
      // SAFETY: `dst` points to valid uninitialized memory
      unsafe {
        ptr::write(dst, elem.clone());
      }
    }
    self.len = len.wrapping_add(count);
    Ok(())
  }

  /// Removes the last element, if any.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(1u8..4).unwrap();
  /// assert_eq!(vec.pop(), Some(3));
  /// assert_eq!(vec.as_slice(), &[1, 2]);
  /// ```
  #[inline]
  pub fn pop(&mut self) -> Option<T> {
    let new_len = self.len.checked_sub(1)?;
    self.len = new_len;
    // SAFETY: the last live element is relocated to the caller
    Some(unsafe { ptr::read(self.buffer.as_ptr().add(new_len)) })
  }

  /// Appends an element to the back of the instance.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.push(3u8).unwrap();
  /// assert_eq!(vec.as_slice(), &[3]);
  /// ```
  #[inline]
  pub fn push(&mut self, elem: T) -> crate::Result<()> {
    self.reserve(1)?;
    // SAFETY: `reserve` guarantees room for one more element
    let dst = unsafe { self.buffer.as_ptr_mut().add(self.len) };
    // SAFETY: `dst` points to valid uninitialized memory
    unsafe {
      ptr::write(dst, elem);
    }
    self.len = self.len.wrapping_add(1);
    Ok(())
  }

  /// Constructs an element directly in the final slot and returns a mutable reference to it.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// let elem = vec.push_with(|| 40u8).unwrap();
  /// *elem += 2;
  /// assert_eq!(vec.as_slice(), &[42]);
  /// ```
  #[inline]
  pub fn push_with(&mut self, cb: impl FnOnce() -> T) -> crate::Result<&mut T> {
    self.reserve(1)?;
    // SAFETY: `reserve` guarantees room for one more element
    let dst = unsafe { self.buffer.as_ptr_mut().add(self.len) };
    // SAFETY: `dst` points to valid uninitialized memory
    unsafe {
      ptr::write(dst, cb());
    }
    self.len = self.len.wrapping_add(1);
    // SAFETY: the slot was initialized right above
    Ok(unsafe { &mut *dst })
  }

  /// Removes the element at `idx`, shifting all subsequent elements to the left.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(1u8..4).unwrap();
  /// assert_eq!(vec.remove(1), Some(2));
  /// assert_eq!(vec.as_slice(), &[1, 3]);
  /// ```
  #[inline]
  pub fn remove(&mut self, idx: usize) -> Option<T> {
    let len = self.len;
    if idx >= len {
      return None;
    }
    // SAFETY: `idx` points to a live element, which is relocated to the caller
    let elem = unsafe { ptr::read(self.buffer.as_ptr().add(idx)) };
    // SAFETY: top-level check ensures bounds
    let dst = unsafe { self.buffer.as_ptr_mut().add(idx) };
    // SAFETY: `src` is one slot after `dst` and the suffix stays within the block
    let src = unsafe { dst.add(1) };
    // SAFETY: relocates the surviving suffix over the vacated slot
    unsafe {
      ptr::copy(src, dst, len.wrapping_sub(idx).wrapping_sub(1));
    }
    self.len = len.wrapping_sub(1);
    Some(elem)
  }

  /// Removes the `[range.start, range.end)` elements, shifting the suffix to the left by the
  /// length of the range.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(0u8..5).unwrap();
  /// vec.remove_range(1..3).unwrap();
  /// assert_eq!(vec.as_slice(), &[0, 3, 4]);
  /// ```
  #[inline]
  pub fn remove_range(&mut self, range: Range<usize>) -> crate::Result<()> {
    let len = self.len;
    if range.start > range.end || range.end > len {
      return Err(VectorError::OutOfBoundsRange.into());
    }
    let count = range.end.wrapping_sub(range.start);
    if count == 0 {
      return Ok(());
    }
    // The length is lowered upfront so that a panicking destructor can at most leak the
    // suffix instead of dropping it twice.
    self.len = range.start;
    let base = self.buffer.as_ptr_mut();
    if Self::NEEDS_DROP {
      // SAFETY: the range holds live elements
      unsafe {
        drop_elements(count, range.start, base);
      }
    }
    // SAFETY: relocates the surviving suffix over the vacated gap
    unsafe {
      ptr::copy(base.add(range.end), base.add(range.start), len.wrapping_sub(range.end));
    }
    self.len = len.wrapping_sub(count);
    Ok(())
  }

  /// Reserves capacity for at least `additional` more elements. The instance may reserve
  /// more space to speculatively avoid frequent reallocations.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::<u8>::new();
  /// vec.reserve(10).unwrap();
  /// assert!(vec.capacity() >= 10);
  /// ```
  #[inline]
  pub fn reserve(&mut self, additional: usize) -> crate::Result<()> {
    let Some(target) = self.len.checked_add(additional) else {
      return Err(VectorError::ReserveOverflow.into());
    };
    self.buffer.grow(target, self.len)
  }

  /// Like [`Self::reserve`] but without deliberately over-allocating.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::<u8>::new();
  /// vec.reserve_exact(10).unwrap();
  /// assert_eq!(vec.capacity(), 10);
  /// ```
  #[inline]
  pub fn reserve_exact(&mut self, additional: usize) -> crate::Result<()> {
    let Some(target) = self.len.checked_add(additional) else {
      return Err(VectorError::ReserveOverflow.into());
    };
    self.buffer.grow_exact(target, self.len)
  }

  /// Resizes the instance so that `len` is equal to `new_len`, cloning `value` into every
  /// additional slot.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.resize(3, 1u8).unwrap();
  /// assert_eq!(vec.as_slice(), &[1, 1, 1]);
  /// vec.resize(1, 0u8).unwrap();
  /// assert_eq!(vec.as_slice(), &[1]);
  /// ```
  #[inline]
  pub fn resize(&mut self, new_len: usize, value: T) -> crate::Result<()>
  where
    T: Clone,
  {
    let len = self.len;
    if new_len <= len {
      self.truncate(new_len);
      return Ok(());
    }
    let additional = new_len.wrapping_sub(len);
    self.reserve(additional)?;
    // SAFETY: there are at least `additional` uninitialized slots after `len`
    let dst = unsafe { self.buffer.as_ptr_mut().add(len) };
    // SAFETY: memory has been allocated
    unsafe {
      fill_uninit(dst, additional, &value);
    }
    self.len = new_len;
    Ok(())
  }

  /// Like [`Self::resize`] but additional slots are filled with the values provided by `cb`.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::new();
  /// vec.resize_with(2, u8::default).unwrap();
  /// assert_eq!(vec.as_slice(), &[0, 0]);
  /// ```
  #[inline]
  pub fn resize_with(&mut self, new_len: usize, mut cb: impl FnMut() -> T) -> crate::Result<()> {
    if new_len <= self.len {
      self.truncate(new_len);
      return Ok(());
    }
    self.reserve(new_len.wrapping_sub(self.len))?;
    while self.len < new_len {
      // SAFETY: capacity was reserved upfront
      let dst = unsafe { self.buffer.as_ptr_mut().add(self.len) };
      // SAFETY: `dst` points to valid uninitialized memory
      unsafe {
        ptr::write(dst, cb());
      }
      self.len = self.len.wrapping_add(1);
    }
    Ok(())
  }

  /// Forces the length of the instance to `new_len`.
  ///
  /// # Safety
  ///
  /// The first `new_len` slots must hold initialized elements and `new_len` must be less than
  /// or equal to the current capacity.
  #[inline]
  pub unsafe fn set_len(&mut self, new_len: usize) {
    self.len = new_len;
  }

  /// Releases any capacity beyond `len`.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::<u8>::with_capacity(16).unwrap();
  /// vec.push(1).unwrap();
  /// vec.shrink_to_fit();
  /// assert_eq!(vec.capacity(), 1);
  /// ```
  #[inline]
  pub fn shrink_to_fit(&mut self) {
    self.buffer.shrink(self.len);
  }

  /// Shortens the instance, keeping the first `new_len` elements and dropping the rest.
  ///
  /// ```rust
  /// let mut vec = dynvec::collection::Vector::from_iter(1u8..6).unwrap();
  /// vec.truncate(2);
  /// assert_eq!(vec.as_slice(), &[1, 2]);
  /// ```
  #[inline]
  pub fn truncate(&mut self, new_len: usize) {
    let Some(diff @ 1..=usize::MAX) = self.len.checked_sub(new_len) else {
      return;
    };
    self.len = new_len;
    if Self::NEEDS_DROP {
      // SAFETY: indices are within bounds
      unsafe {
        drop_elements(diff, new_len, self.buffer.as_ptr_mut());
      }
    }
  }

  fn check_aliased_source(&self, other: &[T]) -> crate::Result<()> {
    if size_of::<T>() == 0 || self.capacity() == 0 || other.is_empty() {
      return Ok(());
    }
    let this_start = self.buffer.as_ptr() as usize;
    let this_end = this_start.wrapping_add(self.capacity().saturating_mul(size_of::<T>()));
    let other_start = other.as_ptr() as usize;
    if other_start >= this_start && other_start < this_end {
      return Err(VectorError::AliasedSource.into());
    }
    Ok(())
  }

  /// Shifts the `[idx, len)` suffix `count` slots to the right, leaving vacated slots in
  /// `[idx, idx + count)`. Returns the length prior to the shift.
  ///
  /// The length is temporarily set to `idx` so that a panicking element constructor can
  /// at most leak the relocated suffix instead of dropping it twice. Callers must set the
  /// final length once the gap is fully populated.
  fn open_gap(&mut self, idx: usize, count: usize) -> crate::Result<usize> {
    let len = self.len;
    if idx > len {
      return Err(VectorError::OutOfBoundsInsertIdx.into());
    }
    if count == 0 {
      return Ok(len);
    }
    let Some(new_len) = len.checked_add(count) else {
      return Err(VectorError::ExtendFromSliceOverflow.into());
    };
    self.buffer.grow(new_len, len)?;
    // SAFETY: top-level check ensures bounds
    let ptr = unsafe { self.buffer.as_ptr_mut().add(idx) };
    // SAFETY: the target region lies within the capacity allocated above. `ptr::copy`
    //         processes the overlap as if elements were relocated from the highest index
    //         downwards.
    unsafe {
      ptr::copy(ptr, ptr.add(count), len.wrapping_sub(idx));
    }
    self.len = idx;
    Ok(len)
  }
}

impl<T> AsMut<[T]> for Vector<T> {
  #[inline]
  fn as_mut(&mut self) -> &mut [T] {
    self
  }
}

impl<T> AsRef<[T]> for Vector<T> {
  #[inline]
  fn as_ref(&self) -> &[T] {
    self
  }
}

impl<T> Borrow<[T]> for Vector<T> {
  #[inline]
  fn borrow(&self) -> &[T] {
    self
  }
}

impl<T> BorrowMut<[T]> for Vector<T> {
  #[inline]
  fn borrow_mut(&mut self) -> &mut [T] {
    self
  }
}

impl<T> Clone for Vector<T>
where
  T: Clone,
{
  #[inline]
  fn clone(&self) -> Self {
    let Ok(this) = Self::from_cloneable_slice(self) else {
      alloc::alloc::handle_alloc_error(Layout::new::<T>());
    };
    this
  }
}

impl<T> Debug for Vector<T>
where
  T: Debug,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
    self.as_slice().fmt(f)
  }
}

impl<T> Default for Vector<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Deref for Vector<T> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &Self::Target {
    self.as_slice()
  }
}

impl<T> DerefMut for Vector<T> {
  #[inline]
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.as_slice_mut()
  }
}

impl<T> Drop for Vector<T> {
  #[inline]
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
  #[inline]
  fn from(from: [T; N]) -> Self {
    let Ok(mut this) = Self::with_capacity(N) else {
      alloc::alloc::handle_alloc_error(Layout::new::<[T; N]>());
    };
    // SAFETY: capacity for `N` elements was allocated and the array's elements are relocated
    //         into the new block
    unsafe {
      ptr::copy_nonoverlapping(from.as_ptr(), this.buffer.as_ptr_mut(), N);
    }
    mem::forget(from);
    this.len = N;
    this
  }
}

impl<T> Eq for Vector<T> where T: Eq {}

impl<'any, T> IntoIterator for &'any Vector<T> {
  type Item = &'any T;
  type IntoIter = Iter<'any, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.as_slice().iter()
  }
}

impl<'any, T> IntoIterator for &'any mut Vector<T> {
  type Item = &'any mut T;
  type IntoIter = IterMut<'any, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.as_slice_mut().iter_mut()
  }
}

impl<T> PartialEq for Vector<T>
where
  T: PartialEq,
{
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    **self == **other
  }
}

impl<T> PartialEq<[T]> for Vector<T>
where
  T: PartialEq,
{
  #[inline]
  fn eq(&self, other: &[T]) -> bool {
    **self == *other
  }
}

impl<T> PartialOrd for Vector<T>
where
  T: PartialOrd,
{
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    (**self).partial_cmp(&**other)
  }
}

impl<T> Ord for Vector<T>
where
  T: Ord,
{
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    (**self).cmp(other)
  }
}

impl core::fmt::Write for Vector<u8> {
  #[inline]
  fn write_str(&mut self, s: &str) -> core::fmt::Result {
    self.extend_from_copyable_slice(s.as_bytes()).map_err(|_err| core::fmt::Error)
  }
}

#[cfg(kani)]
mod kani {
  use crate::collection::Vector;

  #[kani::proof]
  fn insert() {
    let elem = kani::any();
    let idx = kani::any();
    let mut vec = kani::vec::any_vec::<u8, 128>();
    let mut vector = Vector::from_copyable_slice(&vec).unwrap();
    if idx > vec.len() {
      return;
    }
    vec.insert(idx, elem);
    vector.insert(idx, elem).unwrap();
    assert_eq!(vec.as_slice(), vector.as_slice());
  }

  #[kani::proof]
  fn push() {
    let elem = kani::any();
    let mut vec = kani::vec::any_vec::<u8, 128>();
    let mut vector = Vector::from_copyable_slice(&vec).unwrap();
    vec.push(elem);
    vector.push(elem).unwrap();
    assert_eq!(vec.as_slice(), vector.as_slice());
  }

  #[kani::proof]
  fn remove() {
    let idx = kani::any();
    let mut vec = kani::vec::any_vec::<u8, 128>();
    let mut vector = Vector::from_copyable_slice(&vec).unwrap();
    if idx >= vec.len() {
      return;
    }
    assert_eq!(vector.remove(idx), Some(vec.remove(idx)));
    assert_eq!(vec.as_slice(), vector.as_slice());
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::collection::Vector;
  use core::{fmt::Formatter, marker::PhantomData};
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
  };

  impl<'de, T> Deserialize<'de> for Vector<T>
  where
    T: Deserialize<'de>,
  {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct VectorVisitor<T>(PhantomData<T>);

      impl<'de, T> Visitor<'de> for VectorVisitor<T>
      where
        T: Deserialize<'de>,
      {
        type Value = Vector<T>;

        #[inline]
        fn expecting(&self, formatter: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
          formatter.write_str("a sequence")
        }

        #[inline]
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut rslt = Vector::new();
          while let Some(elem) = seq.next_element::<T>()? {
            rslt.push(elem).map_err(de::Error::custom)?;
          }
          Ok(rslt)
        }
      }

      deserializer.deserialize_seq(VectorVisitor::<T>(PhantomData))
    }
  }

  impl<T> Serialize for Vector<T>
  where
    T: Serialize,
  {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.collect_seq(self.as_slice())
    }
  }
}
