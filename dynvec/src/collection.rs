//! Collection types

mod array_wrapper;
mod misc;
mod raw_buffer;
mod vector;

pub use array_wrapper::{ArrayError, ArrayWrapper};
pub use raw_buffer::BufferError;
pub(crate) use raw_buffer::RawBuffer;
pub use vector::{Vector, VectorError};
