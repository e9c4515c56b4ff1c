// Copyright 2016 Amanieu d'Antras
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A singly-linked list for Rust.
//!
//! The list owns its elements. Each node is heap-allocated and owned by the
//! link that points to it, so the chain can never contain a cycle and a node
//! is freed as soon as it is unlinked. Only the head of the chain is stored:
//! the length is recomputed on demand by walking the list.
//!
//! # Example
//!
//! ```
//! use singly_linked_list::{LinkedList, ListError};
//!
//! let mut list = LinkedList::new();
//! list.insert_at_tail('d');
//! list.insert_at_tail('e');
//! list.insert_at_head('b');
//! list.insert_at_head('a');
//! list.insert_at(2, 'c').unwrap();
//! assert_eq!(list.to_string(), "a, b, c, d, e");
//!
//! assert_eq!(list.delete_at(3), Ok('d'));
//! assert_eq!(list.delete_by_value(&'a'), Some('a'));
//! assert_eq!(list.search(&'e'), Some(2));
//!
//! list.reverse();
//! assert_eq!(list.iter().collect::<String>(), "ecb");
//!
//! // Invalid indices are rejected without modifying the list.
//! assert_eq!(
//!     list.insert_at(9, 'z'),
//!     Err(ListError::OutOfRange { index: 9, len: 3 })
//! );
//! assert_eq!(list.len(), 3);
//! ```
//!
//! # Errors
//!
//! Only the indexed operations can fail. `insert_at` accepts any index up to
//! and including the current length, while `delete_at` requires an index
//! strictly less than it. Deleting from an empty list is reported as
//! `ListError::EmptyStructure` rather than `ListError::OutOfRange`.
//!
//! Removing an element by value that is not present is not an error: the
//! list is simply left unchanged.
//!
//! # Logging
//!
//! Structural changes are reported at `trace` level and rejected indices at
//! `debug` level through the `log` crate. No logger is installed by this
//! crate.
//!
//! # Features
//!
//! The `std` feature is enabled by default. Without it the crate only
//! depends on `core` and `alloc`.

#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
pub mod singly_linked_list;

pub use crate::error::ListError;
pub use crate::singly_linked_list::LinkedList;
