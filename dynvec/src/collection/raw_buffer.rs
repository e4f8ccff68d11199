use alloc::alloc;
use core::{
  alloc::Layout,
  fmt::{Debug, Display, Formatter},
  ptr::{self, NonNull},
};

/// Errors of [`RawBuffer`].
#[derive(Clone, Copy, Debug)]
pub enum BufferError {
  /// The requested number of elements can not be represented as a memory layout.
  AllocLayoutOverflow,
  #[doc = doc_out_of_memory!()]
  OutOfMemory,
}

impl Display for BufferError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl From<BufferError> for u8 {
  #[inline]
  fn from(from: BufferError) -> Self {
    match from {
      BufferError::AllocLayoutOverflow => 0,
      BufferError::OutOfMemory => 1,
    }
  }
}

impl core::error::Error for BufferError {}

/// An owned block of uninitialized storage for `cap` elements of `T`.
///
/// Element lifetimes are managed by the owner. This structure only deals with the allocation,
/// the growth and the release of the underlying block.
pub(crate) struct RawBuffer<T> {
  cap: usize,
  ptr: NonNull<T>,
}

impl<T> RawBuffer<T> {
  const IS_ZST: bool = size_of::<T>() == 0;

  /// Creates a new instance without allocating.
  #[inline]
  pub(crate) const fn new() -> Self {
    Self { cap: 0, ptr: NonNull::dangling() }
  }

  /// Creates a new instance with room for exactly `cap` elements.
  #[inline]
  pub(crate) fn with_capacity(cap: usize) -> crate::Result<Self> {
    let mut this = Self::new();
    this.grow_exact(cap, 0)?;
    Ok(this)
  }

  #[inline]
  pub(crate) const fn as_ptr(&self) -> *const T {
    self.ptr.as_ptr()
  }

  #[inline]
  pub(crate) const fn as_ptr_mut(&mut self) -> *mut T {
    self.ptr.as_ptr()
  }

  /// Number of elements that the block can hold. Unbounded for zero-sized types.
  #[inline]
  pub(crate) const fn capacity(&self) -> usize {
    if Self::IS_ZST { usize::MAX } else { self.cap }
  }

  /// Guarantees that `self.capacity() >= target` afterwards.
  ///
  /// The capacity at least doubles on every effective growth so that a sequence of single
  /// element reservations amortizes to a constant number of relocations.
  #[inline]
  pub(crate) fn grow(&mut self, target: usize, len: usize) -> crate::Result<()> {
    if target <= self.capacity() {
      return Ok(());
    }
    self.relocate(target.max(self.cap.saturating_mul(2)), len)
  }

  /// Like [`Self::grow`] but without the doubling floor.
  #[inline]
  pub(crate) fn grow_exact(&mut self, target: usize, len: usize) -> crate::Result<()> {
    if target <= self.capacity() {
      return Ok(());
    }
    self.relocate(target, len)
  }

  /// Releases any capacity beyond `len`, which must be the number of live elements.
  #[inline]
  pub(crate) fn shrink(&mut self, len: usize) {
    if Self::IS_ZST || len >= self.cap {
      return;
    }
    // An allocation of a smaller or equal size is assumed to always succeed. If it doesn't,
    // the current block is simply kept.
    let _rslt = self.relocate(len, len);
  }

  /// Installs a brand-new block of `new_cap` elements, relocating the `len` live elements
  /// from the old block.
  ///
  /// The instance is left untouched if the allocation of the new block fails.
  fn relocate(&mut self, new_cap: usize, len: usize) -> crate::Result<()> {
    let new_ptr = alloc_block::<T>(new_cap)?;
    // SAFETY: both blocks are valid for `len` elements and occupy distinct memory regions
    unsafe {
      ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
    }
    release_block(self.ptr, self.cap);
    self.cap = new_cap;
    self.ptr = new_ptr;
    Ok(())
  }
}

impl<T> Drop for RawBuffer<T> {
  #[inline]
  fn drop(&mut self) {
    release_block(self.ptr, self.cap);
  }
}

// SAFETY: the block is exclusively owned by a single instance
unsafe impl<T> Send for RawBuffer<T> where T: Send {}
// SAFETY: the block is exclusively owned by a single instance
unsafe impl<T> Sync for RawBuffer<T> where T: Sync {}

fn alloc_block<T>(cap: usize) -> crate::Result<NonNull<T>> {
  let layout = match Layout::array::<T>(cap) {
    Ok(elem) => elem,
    Err(_err) => return Err(BufferError::AllocLayoutOverflow.into()),
  };
  if layout.size() == 0 {
    return Ok(NonNull::dangling());
  }
  // SAFETY: `layout` has a size greater than zero
  let ptr = unsafe { alloc::alloc(layout) };
  match NonNull::new(ptr.cast()) {
    Some(elem) => Ok(elem),
    None => Err(BufferError::OutOfMemory.into()),
  }
}

fn release_block<T>(ptr: NonNull<T>, cap: usize) {
  let Ok(layout) = Layout::array::<T>(cap) else {
    return;
  };
  if layout.size() == 0 {
    return;
  }
  // SAFETY: `ptr` was previously returned by the global allocator with the same layout
  unsafe {
    alloc::dealloc(ptr.as_ptr().cast(), layout);
  }
}
