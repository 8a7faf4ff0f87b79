// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// True when at least one element satisfies `any_fn`. Stops at the first
/// hit; an absent or empty slice is `false`.
pub fn any<E, F>(s: Option<&[E]>, any_fn: F) -> bool
where
    F: FnMut(&E) -> bool,
{
    match s {
        Some(s) => s.iter().any(any_fn),
        None => false,
    }
}

/// True when every element satisfies `every_fn`. Stops at the first miss;
/// an absent or empty slice is vacuously `true`.
pub fn every<E, F>(s: Option<&[E]>, every_fn: F) -> bool
where
    F: FnMut(&E) -> bool,
{
    match s {
        Some(s) => s.iter().all(every_fn),
        None => true,
    }
}
