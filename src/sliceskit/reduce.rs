// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Left fold over a slice.
///
/// An absent slice or an absent function returns `initial` unchanged.
pub fn reduce<E, U, F>(s: Option<&[E]>, reduce_fn: Option<F>, initial: U) -> U
where
    F: FnMut(U, &E) -> U,
{
    match (s, reduce_fn) {
        (Some(s), Some(reduce_fn)) => s.iter().fold(initial, reduce_fn),
        _ => initial,
    }
}

/// Same as [`reduce`], but the function also receives the element's index.
pub fn reduce_with_index<E, U, F>(s: Option<&[E]>, reduce_fn: Option<F>, initial: U) -> U
where
    F: FnMut(U, &E, usize) -> U,
{
    match (s, reduce_fn) {
        (Some(s), Some(mut reduce_fn)) => s
            .iter()
            .enumerate()
            .fold(initial, |acc, (i, e)| reduce_fn(acc, e, i)),
        _ => initial,
    }
}

/// Fallible [`reduce`]: the first error is returned and the accumulator
/// is dropped.
pub fn try_reduce<E, U, Err, F>(s: Option<&[E]>, reduce_fn: Option<F>, initial: U) -> Result<U, Err>
where
    F: FnMut(U, &E) -> Result<U, Err>,
{
    match (s, reduce_fn) {
        (Some(s), Some(reduce_fn)) => s.iter().try_fold(initial, reduce_fn),
        _ => Ok(initial),
    }
}
