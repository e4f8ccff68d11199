use crate::collection::{ArrayError, BufferError, VectorError};
use core::fmt::{Debug, Display, Formatter};

const _: () = {
  assert!(size_of::<Error>() <= 24);
};

/// Grouped individual errors
#[derive(Clone, Copy, Debug)]
pub enum Error {
  // External - Std
  //
  /// See [`core::fmt::Error`].
  Fmt(core::fmt::Error),
  /// See [`core::num::TryFromIntError`].
  TryFromIntError(core::num::TryFromIntError),

  // Internal
  //
  /// See [`ArrayError`].
  ArrayError(ArrayError),
  /// See [`BufferError`].
  BufferError(BufferError),
  /// See [`VectorError`].
  VectorError(VectorError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

// External - Std

impl From<core::fmt::Error> for Error {
  #[inline]
  fn from(from: core::fmt::Error) -> Self {
    Self::Fmt(from)
  }
}

impl From<core::num::TryFromIntError> for Error {
  #[inline]
  fn from(from: core::num::TryFromIntError) -> Self {
    Self::TryFromIntError(from)
  }
}

// Internal

impl From<ArrayError> for Error {
  #[inline]
  fn from(from: ArrayError) -> Self {
    Self::ArrayError(from)
  }
}

impl From<BufferError> for Error {
  #[inline]
  fn from(from: BufferError) -> Self {
    Self::BufferError(from)
  }
}

impl From<VectorError> for Error {
  #[inline]
  fn from(from: VectorError) -> Self {
    Self::VectorError(from)
  }
}
