//! The mapping capability [`traverse_to_fst`](crate::traverse_to_fst) and
//! [`traverse_to_snd`](crate::traverse_to_snd) are generic over.
use std::{
  fmt,
  marker::PhantomData,
};

/// A type constructor with a structure-preserving `map`.
///
/// The capability is a value passed at the call site rather than a trait on
/// the container itself, so one container type can have several instances.
///
/// Implementations must obey the functor laws, which the compiler cannot
/// check:
///
/// - identity: `map(fa, |a| a) == fa`
/// - composition: `map(map(fa, f), g) == map(fa, |a| g(f(a)))`
///
/// `map` may call `f` zero or more times. An empty or failed structure must
/// come back empty or failed without `f` being called.
pub trait Functor {
  type Wrapped<T>;

  fn map<A, B, F>(&self, fa: Self::Wrapped<A>, f: F) -> Self::Wrapped<B>
  where
    F: FnMut(A) -> B;
}

/// The trivial functor, `Wrapped<T> = T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl Functor for Identity {
  type Wrapped<T> = T;

  #[inline]
  fn map<A, B, F>(&self, fa: A, mut f: F) -> B
  where
    F: FnMut(A) -> B,
  {
    f(fa)
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionFunctor;

impl Functor for OptionFunctor {
  type Wrapped<T> = Option<T>;

  #[inline]
  fn map<A, B, F>(&self, fa: Option<A>, f: F) -> Option<B>
  where
    F: FnMut(A) -> B,
  {
    fa.map(f)
  }
}

/// Maps the `Ok` side of a `Result<_, E>`; errors pass through untouched.
pub struct ResultFunctor<E>(PhantomData<fn() -> E>);

impl<E> ResultFunctor<E> {
  pub const fn new() -> Self {
    Self(PhantomData)
  }
}

// Manual impls so that `E` needs none of these traits.
impl<E> Default for ResultFunctor<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Clone for ResultFunctor<E> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<E> Copy for ResultFunctor<E> {}

impl<E> fmt::Debug for ResultFunctor<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ResultFunctor")
  }
}

impl<E> Functor for ResultFunctor<E> {
  type Wrapped<T> = Result<T, E>;

  #[inline]
  fn map<A, B, F>(&self, fa: Result<A, E>, f: F) -> Result<B, E>
  where
    F: FnMut(A) -> B,
  {
    fa.map(f)
  }
}

/// Maps every element of a `Vec`, preserving length and order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VecFunctor;

impl Functor for VecFunctor {
  type Wrapped<T> = Vec<T>;

  fn map<A, B, F>(&self, fa: Vec<A>, f: F) -> Vec<B>
  where
    F: FnMut(A) -> B,
  {
    fa.into_iter().map(f).collect()
  }
}
