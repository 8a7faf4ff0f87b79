// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Filter a slice, keeping the elements for which `filter_fn` holds.
///
/// Produces a new vector and leaves the source untouched. An absent slice
/// yields `None`; an absent predicate keeps every element.
pub fn filter<E, F>(s: Option<&[E]>, filter_fn: Option<F>) -> Option<Vec<E>>
where
    E: Clone,
    F: FnMut(&E) -> bool,
{
    let s = s?;
    let Some(mut filter_fn) = filter_fn else {
        return Some(s.to_vec());
    };

    Some(s.iter().filter(|e| filter_fn(e)).cloned().collect())
}

/// Same as [`filter`], but the predicate also receives the element's index.
pub fn filter_with_index<E, F>(s: Option<&[E]>, filter_fn: Option<F>) -> Option<Vec<E>>
where
    E: Clone,
    F: FnMut(&E, usize) -> bool,
{
    let s = s?;
    let Some(mut filter_fn) = filter_fn else {
        return Some(s.to_vec());
    };

    Some(
        s.iter()
            .enumerate()
            .filter(|(i, e)| filter_fn(e, *i))
            .map(|(_, e)| e.clone())
            .collect(),
    )
}

/// Fallible [`filter`]: the first predicate error aborts the whole
/// operation and is returned without any partial result.
pub fn try_filter<E, Err, F>(s: Option<&[E]>, filter_fn: Option<F>) -> Result<Option<Vec<E>>, Err>
where
    E: Clone,
    F: FnMut(&E) -> Result<bool, Err>,
{
    let Some(s) = s else {
        return Ok(None);
    };
    let Some(mut filter_fn) = filter_fn else {
        return Ok(Some(s.to_vec()));
    };

    let mut result = Vec::new();
    for e in s {
        if filter_fn(e)? {
            result.push(e.clone());
        }
    }
    Ok(Some(result))
}
