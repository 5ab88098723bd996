//! Pair combinators, including traversals generic over a caller-supplied
//! [`Functor`].
//!
//! ```
//! use the_tuple::{OptionFunctor, to_fst, traverse_to_snd, with_snd};
//!
//! assert_eq!(to_fst(|n: &u8| n + 1, 1), (2, 1));
//! assert_eq!(with_snd(1, 2), (2, 1));
//! assert_eq!(
//!   traverse_to_snd(&OptionFunctor, |s: &&str| s.parse::<u8>().ok(), "7"),
//!   Some(("7", 7))
//! );
//! assert_eq!(
//!   traverse_to_snd(&OptionFunctor, |s: &&str| s.parse::<u8>().ok(), "x"),
//!   None
//! );
//! ```

pub mod functor;
pub mod tuple;

pub use functor::{
  Functor,
  Identity,
  OptionFunctor,
  ResultFunctor,
  VecFunctor,
};
pub use tuple::{
  create,
  curried,
  dup,
  map_fst,
  map_snd,
  swap,
  to_fst,
  to_snd,
  traverse_to_fst,
  traverse_to_snd,
  with_fst,
  with_snd,
};
