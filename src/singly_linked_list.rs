// Copyright 2016 Amanieu d'Antras
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Owning singly-linked list.

use alloc::boxed::Box;
use core::fmt;
use core::iter::FromIterator;
use log::{debug, trace};
use crate::ListError;

// =============================================================================
// Node
// =============================================================================

// Each node is owned by the link that points to it: either the list head or
// the `next` field of its predecessor.
type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    fn new(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A cursor which provides read-only access to a `LinkedList`.
///
/// A cursor views the list as circular, with a special null object between
/// the last and first elements. A fresh cursor points to the null object.
pub struct Cursor<'a, T: 'a> {
    current: Option<&'a Node<T>>,
    list: &'a LinkedList<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    #[inline]
    fn clone(&self) -> Cursor<'a, T> {
        Cursor {
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    /// Checks if the cursor is currently pointing to the null object.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.current.is_none()
    }

    /// Returns a reference to the value that the cursor is currently
    /// pointing to.
    ///
    /// This returns None if the cursor is currently pointing to the null
    /// object.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.current.map(|node| &node.value)
    }

    /// Moves the cursor to the next element of the `LinkedList`.
    ///
    /// If the cursor is pointing to the null object then this will move it to
    /// the first element of the `LinkedList`. If it is pointing to the last
    /// element then this will move it to the null object.
    #[inline]
    pub fn move_next(&mut self) {
        self.current = match self.current {
            None => self.list.head.as_deref(),
            Some(node) => node.next.as_deref(),
        };
    }

    /// Returns a cursor pointing to the next element of the `LinkedList`.
    #[inline]
    pub fn peek_next(&self) -> Cursor<'a, T> {
        let mut next = self.clone();
        next.move_next();
        next
    }
}

// =============================================================================
// LinkedList
// =============================================================================

/// A singly-linked list which owns its elements.
///
/// Only the head is stored: the length is recomputed by walking the chain,
/// and every positional operation is linear in the index.
///
/// Indexed operations validate their index before touching any link, so a
/// call that returns an error leaves the list exactly as it was.
pub struct LinkedList<T> {
    head: Link<T>,
}

impl<T> LinkedList<T> {
    /// Creates an empty `LinkedList`.
    #[inline]
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None }
    }

    /// Creates a `LinkedList` containing a single element.
    #[inline]
    pub fn with_head(value: T) -> LinkedList<T> {
        LinkedList {
            head: Some(Node::new(value, None)),
        }
    }

    /// Returns `true` if the `LinkedList` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the elements of the `LinkedList`.
    ///
    /// This walks the whole chain and has linear time complexity.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns a null `Cursor` for this list.
    #[inline]
    pub fn cursor(&self) -> Cursor<T> {
        Cursor {
            current: None,
            list: self,
        }
    }

    /// Returns a reference to the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the element at `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns a mutable reference to the element at `index`, if it exists.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Gets an iterator over the elements of the `LinkedList`.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    /// Gets a mutable iterator over the elements of the `LinkedList`.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut {
            current: self.head.as_deref_mut(),
        }
    }

    /// Inserts a new element at the start of the `LinkedList`.
    ///
    /// This is a constant-time operation.
    #[inline]
    pub fn insert_at_head(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::new(value, next));
        trace!("inserted element at head");
    }

    /// Appends a new element to the end of the `LinkedList`.
    ///
    /// The chain is walked to find the last node, so this has linear time
    /// complexity.
    pub fn insert_at_tail(&mut self, value: T) {
        *self.tail_link() = Some(Node::new(value, None));
        trace!("inserted element at tail");
    }

    /// Inserts a new element so that it ends up at position `index`.
    ///
    /// An index of 0 inserts at the head and an index equal to the length of
    /// the list appends at the tail. Any larger index returns
    /// `ListError::OutOfRange` and leaves the list unchanged.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len();
        if index > len {
            debug!("rejected insert at index {} (length {})", index, len);
            return Err(ListError::OutOfRange { index, len });
        }
        if index == 0 {
            self.insert_at_head(value);
            return Ok(());
        }

        // The link following the node at `index - 1`.
        let link = self
            .link_mut(index)
            .ok_or(ListError::OutOfRange { index, len })?;
        let next = link.take();
        *link = Some(Node::new(value, next));
        trace!("inserted element at index {}", index);
        Ok(())
    }

    /// Removes the element at position `index` and returns it.
    ///
    /// Returns `ListError::EmptyStructure` if the list has no elements and
    /// `ListError::OutOfRange` if `index` is not less than the length. The
    /// list is unchanged in both cases.
    pub fn delete_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len();
        if len == 0 {
            debug!("rejected delete at index {} from empty list", index);
            return Err(ListError::EmptyStructure { index });
        }
        if index >= len {
            debug!("rejected delete at index {} (length {})", index, len);
            return Err(ListError::OutOfRange { index, len });
        }
        let value = self
            .unlink(index)
            .ok_or(ListError::OutOfRange { index, len })?;
        trace!("deleted element at index {}", index);
        Ok(value)
    }

    /// Removes the first element of the `LinkedList`.
    ///
    /// This returns `None` if the `LinkedList` is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(0)
    }

    /// Inserts a new element at the start of the `LinkedList`.
    ///
    /// This is the same as `insert_at_head`.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.insert_at_head(value);
    }

    /// Reverses the order of the elements in place.
    ///
    /// The chain is walked once, redirecting each link to the previous node.
    /// No extra memory is allocated.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        trace!("reversed list");
    }

    /// Removes all elements from the `LinkedList`.
    ///
    /// Nodes are released one at a time so that dropping a long list does not
    /// recurse through the chain.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }

    // Returns the link holding the node at `index`, which may be the empty
    // link just past the last node.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    // Returns the empty link after the last node.
    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        let link = self.link_mut(index)?;
        let node = link.take()?;
        let Node { value, next } = *node;
        *link = next;
        Some(value)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `value`.
    ///
    /// Returns `None` if no element matches.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|x| x == value)
    }

    /// Returns `true` if any element is equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// If no element matches then the list is left unchanged and `None` is
    /// returned. This is not treated as an error.
    pub fn delete_by_value(&mut self, value: &T) -> Option<T> {
        let index = self.search(value)?;
        let removed = self.unlink(index);
        trace!("deleted matching element at index {}", index);
        removed
    }
}

// Release the chain iteratively.
impl<T> Drop for LinkedList<T> {
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> LinkedList<T> {
        LinkedList::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> LinkedList<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &LinkedList<T>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Build the new segment back to front, then attach it in one step.
        let mut segment = LinkedList::new();
        for value in iter {
            segment.insert_at_head(value);
        }
        segment.reverse();
        *self.tail_link() = segment.head.take();
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> LinkedList<T> {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T: 'a> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: 'a> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Renders the elements head to tail, separated by ", ". Intended for
// inspection only.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

// =============================================================================
// Iter
// =============================================================================

/// An iterator over references to the items of a `LinkedList`.
pub struct Iter<'a, T: 'a> {
    current: Option<&'a Node<T>>,
}
impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.value
        })
    }
}
impl<'a, T: 'a> Clone for Iter<'a, T> {
    #[inline]
    fn clone(&self) -> Iter<'a, T> {
        Iter {
            current: self.current,
        }
    }
}

// =============================================================================
// IterMut
// =============================================================================

/// An iterator over mutable references to the items of a `LinkedList`.
pub struct IterMut<'a, T: 'a> {
    current: Option<&'a mut Node<T>>,
}
impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

// =============================================================================
// IntoIter
// =============================================================================

/// An iterator which consumes a `LinkedList`.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
}

// =============================================================================
// Tests
// =============================================================================
