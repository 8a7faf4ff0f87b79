// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Functional combinators over slices.
//!
//! Every combinator distinguishes an *absent* sequence (`None`) from an
//! empty one (`Some(&[])`), and most accept an absent function as well.
//! Absent inputs never fault: they produce an absent result or hand back
//! the neutral initial value.
//!
//! ```rust
//! use dashkit::sliceskit::{chunk, filter, map, reduce};
//!
//! let numbers = [1, 2, 3, 4, 5];
//!
//! let doubled = map(Some(&numbers[..]), Some(|n: &i32| n * 2));
//! assert_eq!(doubled, Some(vec![2, 4, 6, 8, 10]));
//!
//! let even = filter(Some(&numbers[..]), Some(|n: &i32| n % 2 == 0));
//! assert_eq!(even, Some(vec![2, 4]));
//!
//! let sum = reduce(Some(&numbers[..]), Some(|acc: i32, n: &i32| acc + n), 0);
//! assert_eq!(sum, 15);
//!
//! assert_eq!(chunk(Some(&numbers[..]), 2), vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
//! ```

mod chunk;
mod filter;
mod find;
mod map;
mod quantifiers;
mod reduce;

pub use chunk::chunk;
pub use filter::{filter, filter_with_index, try_filter};
pub use find::{find, find_ptr, find_ptr_opt};
pub use map::{map, map_with_index, try_map};
pub use quantifiers::{any, every};
pub use reduce::{reduce, reduce_with_index, try_reduce};
