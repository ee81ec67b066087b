//! Generic, single-threaded, in-memory data structures and algorithms.
//!
//! The two centerpieces are an ordered key-value map backed by an
//! unbalanced binary search tree ([`tree::Tree`]) and a binary-heap
//! priority queue ([`heap::PriorityQueue`]). Both take their ordering as
//! a caller-supplied function at construction time instead of a trait
//! bound: the tree wants a total-order comparator returning
//! [`Ordering`][std::cmp::Ordering] and the heap wants a `less` predicate
//! meaning "has priority over". The supplied function must be pure and
//! deterministic, and it is fixed for the life of the structure.
//!
//! Around those two sit the usual toolbox structures - a LIFO
//! [`stack::Stack`], a ring-buffer [`queue::Queue`] and [`deque::Deque`],
//! a hash-backed [`dict::Dictionary`] and [`set::Set`] with set algebra,
//! and a weighted adjacency-list [`graph::Graph`] - plus stateless
//! [`algorithms`] (binary search, quicksort) and the slice combinators in
//! [`funcs`].
//!
//! Nothing in this crate is safe for concurrent mutation; wrap a
//! structure in a lock if it must cross threads. Absent keys and empty
//! structures are reported through `Option`s and `bool`s, never panics.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod algorithms;
pub mod deque;
pub mod dict;
pub mod funcs;
pub mod graph;
pub mod heap;
pub mod queue;
pub mod set;
pub mod stack;
pub mod tree;

#[cfg(test)]
mod test;
