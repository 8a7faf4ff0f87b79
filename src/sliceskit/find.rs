// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::ops::Deref;

/// Return the first element satisfying `find_fn`, or `None` when nothing
/// matches or the slice is absent.
pub fn find<'a, E, F>(s: Option<&'a [E]>, find_fn: F) -> Option<&'a E>
where
    F: FnMut(&E) -> bool,
{
    let mut find_fn = find_fn;
    s?.iter().find(|e| find_fn(e))
}

/// Return the pointee of the first pointer satisfying `find_fn`.
///
/// Works over any owning or borrowing pointer (`Box`, `Rc`, `Arc`, `&T`).
/// Absent entries are skipped without consulting the predicate, so the
/// predicate only ever sees live values.
pub fn find_ptr<'a, E, P, F>(s: Option<&'a [Option<P>]>, find_fn: F) -> Option<&'a E>
where
    E: ?Sized,
    P: Deref<Target = E>,
    F: FnMut(&E) -> bool,
{
    let mut find_fn = find_fn;
    s?.iter()
        .flatten()
        .map(P::deref)
        .find(|e| find_fn(e))
}

/// [`find_ptr`] for predicates that handle absence themselves: absent
/// entries reach `find_fn` as `None`.
///
/// The outer `Option` reports whether anything matched; `Some(None)` means
/// the first match was an absent entry.
pub fn find_ptr_opt<'a, E, P, F>(s: Option<&'a [Option<P>]>, find_fn: F) -> Option<Option<&'a E>>
where
    E: ?Sized,
    P: Deref<Target = E>,
    F: FnMut(Option<&E>) -> bool,
{
    let mut find_fn = find_fn;
    s?.iter().map(Option::as_deref).find(|e| find_fn(*e))
}
