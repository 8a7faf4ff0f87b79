// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Split a slice into consecutive borrowed chunks of `size` elements; the
/// last chunk may be shorter.
///
/// A non-positive `size`, an absent slice and an empty slice all yield an
/// empty (never absent) list of chunks.
pub fn chunk<E>(s: Option<&[E]>, size: isize) -> Vec<&[E]> {
    let Some(s) = s else {
        return Vec::new();
    };
    if size <= 0 {
        return Vec::new();
    }

    s.chunks(size.unsigned_abs()).collect()
}
