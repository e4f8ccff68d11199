use core::{
  array,
  borrow::{Borrow, BorrowMut},
  fmt::{Debug, Display, Formatter},
  ops::{Deref, DerefMut},
  slice::{Iter, IterMut},
};

/// Errors of [`ArrayWrapper`].
#[derive(Clone, Copy, Debug)]
pub enum ArrayError {
  /// The index provided in the `at` method is greater than or equal to the array's length.
  OutOfBoundsIdx,
}

impl Display for ArrayError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl From<ArrayError> for u8 {
  #[inline]
  fn from(from: ArrayError) -> Self {
    match from {
      ArrayError::OutOfBoundsIdx => 0,
    }
  }
}

impl core::error::Error for ArrayError {}

/// A thin wrapper around a fixed-size array that provides bounds-checked access.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct ArrayWrapper<T, const N: usize>(
  /// The actual array
  pub [T; N],
);

impl<T, const N: usize> ArrayWrapper<T, N> {
  /// Constructs a new instance where each element is the returned value of `cb` applied to
  /// its index.
  ///
  /// ```rust
  /// let array = dynvec::collection::ArrayWrapper::<u8, 3>::from_fn(|idx| idx as u8);
  /// assert_eq!(*array, [0, 1, 2]);
  /// ```
  #[inline]
  pub fn from_fn(cb: impl FnMut(usize) -> T) -> Self {
    Self(array::from_fn(cb))
  }

  /// Checked access to the element at `idx`.
  ///
  /// ```rust
  /// let array = dynvec::collection::ArrayWrapper([1u8, 2]);
  /// assert_eq!(array.at(1).copied().unwrap(), 2);
  /// assert!(array.at(2).is_err());
  /// ```
  #[inline]
  pub fn at(&self, idx: usize) -> crate::Result<&T> {
    match self.0.get(idx) {
      Some(elem) => Ok(elem),
      None => Err(ArrayError::OutOfBoundsIdx.into()),
    }
  }

  /// Mutable version of [`Self::at`].
  #[inline]
  pub fn at_mut(&mut self, idx: usize) -> crate::Result<&mut T> {
    match self.0.get_mut(idx) {
      Some(elem) => Ok(elem),
      None => Err(ArrayError::OutOfBoundsIdx.into()),
    }
  }

  /// Overwrites every element with a clone of `value`.
  ///
  /// ```rust
  /// let mut array = dynvec::collection::ArrayWrapper([1u8, 2]);
  /// array.fill(0);
  /// assert_eq!(*array, [0, 0]);
  /// ```
  #[inline]
  pub fn fill(&mut self, value: T)
  where
    T: Clone,
  {
    self.0.fill(value);
  }
}

impl<T, const N: usize> AsMut<[T; N]> for ArrayWrapper<T, N> {
  #[inline]
  fn as_mut(&mut self) -> &mut [T; N] {
    self
  }
}

impl<T, const N: usize> AsRef<[T; N]> for ArrayWrapper<T, N> {
  #[inline]
  fn as_ref(&self) -> &[T; N] {
    self
  }
}

impl<T, const N: usize> Borrow<[T; N]> for ArrayWrapper<T, N> {
  #[inline]
  fn borrow(&self) -> &[T; N] {
    self
  }
}

impl<T, const N: usize> BorrowMut<[T; N]> for ArrayWrapper<T, N> {
  #[inline]
  fn borrow_mut(&mut self) -> &mut [T; N] {
    self
  }
}

impl<T, const N: usize> Default for ArrayWrapper<T, N>
where
  T: Default,
{
  #[inline]
  fn default() -> Self {
    Self::from_fn(|_| T::default())
  }
}

impl<T, const N: usize> Deref for ArrayWrapper<T, N> {
  type Target = [T; N];

  #[inline]
  fn deref(&self) -> &[T; N] {
    &self.0
  }
}

impl<T, const N: usize> DerefMut for ArrayWrapper<T, N> {
  #[inline]
  fn deref_mut(&mut self) -> &mut [T; N] {
    &mut self.0
  }
}

impl<T, const N: usize> From<[T; N]> for ArrayWrapper<T, N> {
  #[inline]
  fn from(from: [T; N]) -> Self {
    Self(from)
  }
}

impl<'array, T, const N: usize> IntoIterator for &'array ArrayWrapper<T, N> {
  type IntoIter = Iter<'array, T>;
  type Item = &'array T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl<'array, T, const N: usize> IntoIterator for &'array mut ArrayWrapper<T, N> {
  type IntoIter = IterMut<'array, T>;
  type Item = &'array mut T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter_mut()
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::collection::ArrayWrapper;
  use core::{fmt::Formatter, marker::PhantomData};
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
  };

  impl<'de, T, const N: usize> Deserialize<'de> for ArrayWrapper<T, N>
  where
    T: Default + Deserialize<'de>,
  {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

      impl<'de, T, const N: usize> Visitor<'de> for ArrayVisitor<T, N>
      where
        T: Default + Deserialize<'de>,
      {
        type Value = ArrayWrapper<T, N>;

        #[inline]
        fn expecting(&self, formatter: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
          formatter.write_fmt(format_args!("an array with {N} elements"))
        }

        #[inline]
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut idx: usize = 0;
          let mut rslt = ArrayWrapper::<T, N>::default();
          while let Some(deserialized) = seq.next_element::<T>()? {
            let Ok(slot) = rslt.at_mut(idx) else {
              return Err(de::Error::invalid_length(
                N,
                &"sequence has more elements than the array can hold",
              ));
            };
            *slot = deserialized;
            idx = idx.wrapping_add(1);
          }
          if idx != N {
            return Err(de::Error::invalid_length(
              N,
              &"sequence has fewer elements than the array requires",
            ));
          }
          Ok(rslt)
        }
      }

      deserializer.deserialize_tuple(N, ArrayVisitor::<T, N>(PhantomData))
    }
  }

  impl<T, const N: usize> Serialize for ArrayWrapper<T, N>
  where
    T: Serialize,
  {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      let mut seq = serializer.serialize_tuple(N)?;
      for elem in &self.0 {
        seq.serialize_element(elem)?;
      }
      seq.end()
    }
  }
}
