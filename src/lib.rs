//! A rank-indexed skip list for Rust.
//!
//! This crate provides [`SkipList`], an ordered container that keeps its elements sorted by a
//! caller-supplied comparison and, alongside the usual insert/find/delete operations, translates
//! between an element and its position in sort order in O(log n) expected time:
//!
//! - [`rank_of`](SkipList::rank_of) - Get the one-based sorted position of an element
//! - [`get_by_rank`](SkipList::get_by_rank) - Get the element at a given sorted position
//! - Indexing by [`Rank`] - e.g., `list[Rank(1)]` for the smallest element
//!
//! # Example
//!
//! ```
//! use rank_skiplist::{Rank, SkipList};
//!
//! let mut list = SkipList::new();
//! for value in [5, 1, 3, 2, 4] {
//!     list.insert(value);
//! }
//!
//! assert_eq!(list.rank_of(&3), Some(3));
//! assert_eq!(list[Rank(1)], 1);
//!
//! // Walk the list from the back.
//! let mut node = list.back();
//! let mut descending = Vec::new();
//! while let Some(n) = node {
//!     descending.push(*list.get(n).unwrap());
//!     node = list.prev(n);
//! }
//! assert_eq!(descending, [5, 4, 3, 2, 1]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Duplicates allowed** - Elements that compare equal are kept in insertion order
//! - **Stable node ids** - [`NodeId`]s detect removal, so stale ids return `None`
//! - **Pluggable randomness** - Heights come from a [`LevelGenerator`], seedable for tests
//!
//! # Implementation
//!
//! Nodes live in an arena and link to each other by index. Every forward link records its span,
//! the number of elements it skips, so a single top-down descent yields both the predecessor of
//! a position at every level and the exact rank reached.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod level;
mod order_statistic;
mod raw;

pub mod skiplist;

pub use comparator::{Comparator, Natural};
pub use level::{Geometric, LevelGenerator, MAX_LEVEL, RATIO};
pub use order_statistic::Rank;
pub use raw::NodeId;
pub use skiplist::SkipList;
