macro_rules! doc_many_elems_cap_overflow {
  () => {
    "The length required to hold a set of new elements overflows the maximum possible capacity."
  };
}

macro_rules! doc_out_of_memory {
  () => {
    "The global allocator could not provide the requested block of memory."
  };
}

macro_rules! doc_reserve_overflow {
  () => {
    "The length required by a reservation overflows the maximum possible capacity."
  };
}
