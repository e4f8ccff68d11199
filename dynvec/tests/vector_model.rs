//! Model tests that compare [`dynvec::collection::Vector`] against the std vector across
//! arbitrary operation sequences.

use dynvec::collection::Vector;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
  Insert(usize, u8),
  Pop,
  Push(u8),
  Remove(usize),
  Resize(usize, u8),
  ShrinkToFit,
  Truncate(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
  prop_oneof![
    (any::<usize>(), any::<u8>()).prop_map(|(idx, elem)| Op::Insert(idx, elem)),
    Just(Op::Pop),
    any::<u8>().prop_map(Op::Push),
    any::<usize>().prop_map(Op::Remove),
    (any::<usize>(), any::<u8>()).prop_map(|(len, elem)| Op::Resize(len, elem)),
    Just(Op::ShrinkToFit),
    any::<usize>().prop_map(Op::Truncate),
  ]
}

proptest! {
  #[test]
  fn behaves_like_the_std_vector(ops in proptest::collection::vec(arb_op(), 0..64)) {
    let mut model: Vec<u8> = Vec::new();
    let mut vec = Vector::new();
    for op in ops {
      match op {
        Op::Insert(idx, elem) => {
          let idx = idx % (model.len() + 1);
          model.insert(idx, elem);
          vec.insert(idx, elem).unwrap();
        }
        Op::Pop => {
          prop_assert_eq!(model.pop(), vec.pop());
        }
        Op::Push(elem) => {
          model.push(elem);
          vec.push(elem).unwrap();
        }
        Op::Remove(idx) => {
          if model.is_empty() {
            prop_assert_eq!(vec.remove(idx), None);
          } else {
            let idx = idx % model.len();
            prop_assert_eq!(vec.remove(idx), Some(model.remove(idx)));
          }
        }
        Op::Resize(new_len, elem) => {
          let new_len = new_len % 96;
          model.resize(new_len, elem);
          vec.resize(new_len, elem).unwrap();
        }
        Op::ShrinkToFit => {
          vec.shrink_to_fit();
          prop_assert_eq!(vec.capacity(), vec.len());
        }
        Op::Truncate(new_len) => {
          let new_len = new_len % 96;
          model.truncate(new_len);
          vec.truncate(new_len);
        }
      }
      prop_assert_eq!(model.as_slice(), vec.as_slice());
      prop_assert!(vec.capacity() >= vec.len());
    }
  }

  #[test]
  fn slice_insertion_behaves_like_the_std_splice(
    base in proptest::collection::vec(any::<u8>(), 0..32),
    src in proptest::collection::vec(any::<u8>(), 0..16),
    idx in any::<usize>(),
  ) {
    let idx = idx % (base.len() + 1);
    let mut model = base.clone();
    let mut vec = Vector::from_copyable_slice(&base).unwrap();
    let _ = model.splice(idx..idx, src.iter().copied());
    vec.insert_from_cloneable_slice(idx, &src).unwrap();
    prop_assert_eq!(model.as_slice(), vec.as_slice());

    vec.remove_range(idx..idx.wrapping_add(src.len())).unwrap();
    prop_assert_eq!(base.as_slice(), vec.as_slice());
  }
}
