// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Map a slice of `E` to a new vector of `T`.
///
/// Returns `None` when either the slice or the function is absent. The
/// source slice is never modified.
pub fn map<E, T, F>(s: Option<&[E]>, map_fn: Option<F>) -> Option<Vec<T>>
where
    F: FnMut(&E) -> T,
{
    let (s, map_fn) = (s?, map_fn?);
    Some(s.iter().map(map_fn).collect())
}

/// Same as [`map`], but the function also receives the element's index.
pub fn map_with_index<E, T, F>(s: Option<&[E]>, map_fn: Option<F>) -> Option<Vec<T>>
where
    F: FnMut(&E, usize) -> T,
{
    let (s, mut map_fn) = (s?, map_fn?);
    Some(s.iter().enumerate().map(|(i, e)| map_fn(e, i)).collect())
}

/// Fallible [`map`]: stops at the first error and returns it, discarding
/// everything mapped so far.
pub fn try_map<E, T, Err, F>(s: Option<&[E]>, map_fn: Option<F>) -> Result<Option<Vec<T>>, Err>
where
    F: FnMut(&E) -> Result<T, Err>,
{
    match (s, map_fn) {
        (Some(s), Some(map_fn)) => s.iter().map(map_fn).collect::<Result<Vec<_>, _>>().map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_absent_slice() {
        let result = map(None::<&[i32]>, Some(|e: &i32| e * 2));
        assert_eq!(result, None);
    }

    #[test]
    fn test_map_absent_function() {
        let slice = [1, 2, 3];
        let result = map(Some(&slice[..]), None::<fn(&i32) -> i32>);
        assert_eq!(result, None);
    }

    #[test]
    fn test_map_empty_slice_is_present() {
        let slice: [i32; 0] = [];
        let result = map(Some(&slice[..]), Some(|e: &i32| e * 2));
        assert_eq!(result, Some(vec![]));
    }

    #[test]
    fn test_map_changes_type_and_keeps_source() {
        let slice = vec![1, 2, 3];
        let result = map(Some(slice.as_slice()), Some(|e: &i32| format!("#{e}")));

        assert_eq!(result, Some(vec!["#1".to_string(), "#2".to_string(), "#3".to_string()]));
        assert_eq!(slice, vec![1, 2, 3]);
    }

    #[test]
    fn test_map_with_inverse_is_identity() {
        let inputs: Vec<Vec<i64>> = vec![vec![], vec![0], vec![-3, 7, 11, 42], (0..100).collect()];

        for input in inputs {
            let shifted = map(Some(input.as_slice()), Some(|e: &i64| e * 3 + 1)).unwrap();
            let restored = map(Some(shifted.as_slice()), Some(|e: &i64| (e - 1) / 3)).unwrap();
            assert_eq!(restored, input);
        }
    }

    #[test]
    fn test_map_with_index() {
        let slice = ["a", "b", "c"];
        let result = map_with_index(Some(&slice[..]), Some(|e: &&str, i: usize| format!("{i}:{e}")));
        assert_eq!(
            result,
            Some(vec!["0:a".to_string(), "1:b".to_string(), "2:c".to_string()])
        );
    }

    #[test]
    fn test_map_with_index_absent_inputs() {
        let slice = [1, 2];
        assert_eq!(map_with_index(None::<&[i32]>, Some(|e: &i32, i: usize| e + i as i32)), None);
        assert_eq!(map_with_index(Some(&slice[..]), None::<fn(&i32, usize) -> i32>), None);
    }

    #[test]
    fn test_try_map_success() {
        let slice = ["1", "2", "3"];
        let result = try_map(Some(&slice[..]), Some(|e: &&str| e.parse::<i32>()));
        assert_eq!(result, Ok(Some(vec![1, 2, 3])));
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let slice = ["1", "x", "3", "y"];
        let mut calls = 0;
        let result = try_map(
            Some(&slice[..]),
            Some(|e: &&str| {
                calls += 1;
                e.parse::<i32>().map_err(|_| format!("bad element {e}"))
            }),
        );

        assert_eq!(result, Err("bad element x".to_string()));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_try_map_absent_inputs() {
        let result = try_map(None::<&[i32]>, Some(|e: &i32| Ok::<_, String>(*e)));
        assert_eq!(result, Ok(None));

        let slice = [1];
        let result = try_map(Some(&slice[..]), None::<fn(&i32) -> Result<i32, String>>);
        assert_eq!(result, Ok(None));
    }
}
