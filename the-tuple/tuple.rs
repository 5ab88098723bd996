//! Combinators over `(A, B)`.
//!
//! The `_fst`/`_snd` suffix names the slot the *computed* or *supplied*
//! value ends up in. The two traversals run an effectful function and pair
//! its result with the input inside the effect.
use crate::functor::Functor;

pub fn dup<A: Clone>(a: A) -> (A, A) {
  (a.clone(), a)
}

/// `(f(a), a)`
pub fn to_fst<A, B>(f: impl FnOnce(&A) -> B, a: A) -> (B, A) {
  (f(&a), a)
}

/// `(a, f(a))`
pub fn to_snd<A, B>(f: impl FnOnce(&A) -> B, a: A) -> (A, B) {
  let b = f(&a);
  (a, b)
}

/// Effectful [`to_fst`]: runs `f(&a)` and pairs every value inside the
/// result with `a`, which takes the second slot.
///
/// The pairing happens through `functor.map`, so a structure holding no
/// value (`None`, `Err`, an empty `Vec`) is returned as is and no pair is
/// ever built for it. `a` is cloned once per value the structure holds.
///
/// ```
/// use the_tuple::{OptionFunctor, traverse_to_fst};
///
/// let half = |n: &u32| (n % 2 == 0).then(|| n / 2);
/// assert_eq!(traverse_to_fst(&OptionFunctor, half, 10), Some((5, 10)));
/// assert_eq!(traverse_to_fst(&OptionFunctor, half, 7), None);
/// ```
pub fn traverse_to_fst<F, A, B>(
  functor: &F,
  f: impl FnOnce(&A) -> F::Wrapped<B>,
  a: A,
) -> F::Wrapped<(B, A)>
where
  F: Functor,
  A: Clone,
{
  let fb = f(&a);
  functor.map(fb, move |b| (b, a.clone()))
}

/// Effectful [`to_snd`]: like [`traverse_to_fst`] with `a` in the first
/// slot and the computed value in the second.
pub fn traverse_to_snd<F, A, B>(
  functor: &F,
  f: impl FnOnce(&A) -> F::Wrapped<B>,
  a: A,
) -> F::Wrapped<(A, B)>
where
  F: Functor,
  A: Clone,
{
  let fb = f(&a);
  functor.map(fb, move |b| (a.clone(), b))
}

/// `(a, b)`: the first argument takes the first slot.
#[inline]
pub const fn with_fst<A, B>(a: A, b: B) -> (A, B) {
  (a, b)
}

/// `(b, a)`: the first argument takes the *second* slot.
#[inline]
pub const fn with_snd<A, B>(a: A, b: B) -> (B, A) {
  (b, a)
}

/// Identity over an already built pair.
#[inline]
pub const fn create<A, B>(pair: (A, B)) -> (A, B) {
  pair
}

#[inline]
pub fn swap<A, B>((a, b): (A, B)) -> (B, A) {
  (b, a)
}

pub fn map_fst<A, B, C>(f: impl FnOnce(A) -> C, (a, b): (A, B)) -> (C, B) {
  (f(a), b)
}

pub fn map_snd<A, B, C>(f: impl FnOnce(B) -> C, (a, b): (A, B)) -> (A, C) {
  (a, f(b))
}

/// One-argument-at-a-time forms. Each returns a function of the remaining
/// argument and keeps the slot mapping of the multi-argument version.
///
/// The traversals bind the functor into a small value whose `apply` takes
/// the effectful function and returns the function of the input.
pub mod curried {
  use crate::functor::Functor;

  pub fn to_fst<A, B>(f: impl Fn(&A) -> B) -> impl Fn(A) -> (B, A) {
    move |a| super::to_fst(&f, a)
  }

  pub fn to_snd<A, B>(f: impl Fn(&A) -> B) -> impl Fn(A) -> (A, B) {
    move |a| super::to_snd(&f, a)
  }

  /// Binds the functor first: `traverse_to_fst(&functor).apply(f)(n)`.
  pub fn traverse_to_fst<F: Functor>(functor: &F) -> TraverseToFst<'_, F> {
    TraverseToFst { functor }
  }

  /// Binds the functor first: `traverse_to_snd(&functor).apply(f)(n)`.
  pub fn traverse_to_snd<F: Functor>(functor: &F) -> TraverseToSnd<'_, F> {
    TraverseToSnd { functor }
  }

  /// A traversal into the first slot waiting for its effectful function.
  pub struct TraverseToFst<'a, F> {
    functor: &'a F,
  }

  /// A traversal into the second slot waiting for its effectful function.
  pub struct TraverseToSnd<'a, F> {
    functor: &'a F,
  }

  // Manual impls so that `F` needs neither trait.
  impl<F> Clone for TraverseToFst<'_, F> {
    fn clone(&self) -> Self {
      *self
    }
  }

  impl<F> Copy for TraverseToFst<'_, F> {}

  impl<F> Clone for TraverseToSnd<'_, F> {
    fn clone(&self) -> Self {
      *self
    }
  }

  impl<F> Copy for TraverseToSnd<'_, F> {}

  impl<F: Functor> TraverseToFst<'_, F> {
    pub fn apply<A, B>(
      self,
      f: impl Fn(&A) -> F::Wrapped<B>,
    ) -> impl Fn(A) -> F::Wrapped<(B, A)>
    where
      A: Clone,
    {
      let functor = self.functor;
      move |a| super::traverse_to_fst::<F, A, B>(functor, &f, a)
    }
  }

  impl<F: Functor> TraverseToSnd<'_, F> {
    pub fn apply<A, B>(
      self,
      f: impl Fn(&A) -> F::Wrapped<B>,
    ) -> impl Fn(A) -> F::Wrapped<(A, B)>
    where
      A: Clone,
    {
      let functor = self.functor;
      move |a| super::traverse_to_snd::<F, A, B>(functor, &f, a)
    }
  }

  pub fn with_fst<A, B>(a: A) -> impl FnOnce(B) -> (A, B) {
    move |b| super::with_fst(a, b)
  }

  pub fn with_snd<A, B>(a: A) -> impl FnOnce(B) -> (B, A) {
    move |b| super::with_snd(a, b)
  }
}
