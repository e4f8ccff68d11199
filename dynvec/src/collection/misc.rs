use core::{ptr, slice};

/// Ends the life of `len` elements starting at `offset`.
pub(crate) unsafe fn drop_elements<T>(len: usize, offset: usize, ptr: *mut T) {
  // SAFETY: it is up to the caller to provide a valid pointer with a valid index
  let data = unsafe { ptr.add(offset) };
  // SAFETY: it is up to the caller to provide a valid length
  let elements = unsafe { slice::from_raw_parts_mut(data, len) };
  // SAFETY: it is up to the caller to provide parameters that can lead to droppable elements
  unsafe {
    ptr::drop_in_place(elements);
  }
}

/// Clone-constructs `len` copies of `value` into the uninitialized slots starting at `ptr`.
///
/// Slots are brought to life one by one. Uninitialized memory is never treated as a live
/// element, which also means that a panicking clone leaves the already constructed prefix
/// behind without touching the remaining slots.
pub(crate) unsafe fn fill_uninit<T>(ptr: *mut T, len: usize, value: &T)
where
  T: Clone,
{
  for idx in 0..len {
    // SAFETY: it is up to the caller to provide a block with `len` uninitialized slots
    let dst = unsafe { ptr.add(idx) };
    // SAFETY: `dst` points to valid uninitialized memory
    unsafe {
      ptr::write(dst, value.clone());
    }
  }
}
