//! Monotonic arena allocation behind a pluggable capacity policy, plus an
//! allocator-aware singly linked list.
//!
//! The crate provides a bump-pointer [`Arena`] that grows by appending
//! blocks, an [`ArenaAllocator`] handle that wraps it together with a
//! [`Policy`] (fixed element ceiling or unlimited growth) and shared
//! allocation accounting, and a [`List`] container that obtains all of its
//! node storage through the generic [`Allocator`] contract. Handles copied
//! or rebound from a common origin share one arena and one budget, so a
//! fixed ceiling constrains every container using them.
//!
//! Nothing here is thread-safe; every structure is meant for single-threaded
//! use and allocation stays O(1) because of it.

extern crate alloc;

pub mod allocator;
pub mod arena;
pub mod error;
pub mod list;
pub mod policy;

pub use allocator::{Allocator, ArenaAllocator, Heap};
pub use arena::Arena;
pub use error::AllocError;
pub use list::List;
pub use policy::Policy;
