use alloc::boxed::Box;
use core::fmt;
use core::ptr::NonNull;

use log::debug;

use super::iter::Iter;
use super::node::Node;
use crate::error::ListError;

/// An ordered, mutable sequence backed by an owned singly linked chain.
///
/// The list keeps a head pointer, a non-owning tail pointer, and a length
/// counter, so insertion at either end is O(1). Positional operations walk
/// the chain from the head and are O(n).
pub struct SinglyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SinglyLinkedList {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first node, or `None` if the list is empty.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|node| unsafe { node.as_ref() })
    }

    /// Returns the last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.tail.map(|node| unsafe { node.as_ref() })
    }

    #[inline]
    pub(crate) fn head_ptr(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    fn alloc(value: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node::new(value))))
    }

    /// Frees a node that has already been unlinked from the chain.
    unsafe fn release(node: NonNull<Node<T>>) -> T {
        unsafe { Box::from_raw(node.as_ptr()).into_value() }
    }

    /// Makes `node` the new head.
    ///
    /// On an empty list the node becomes both head and tail and any link it
    /// carries is severed, so the single-element invariants hold. On a
    /// non-empty list an unlinked node is first chained to the current head;
    /// a node that already heads a sub-chain is installed as-is. Does not
    /// touch `len`.
    fn set_head_node(&mut self, mut node: NonNull<Node<T>>) {
        match self.head {
            None => {
                unsafe { node.as_mut().set_next(None) };
                self.head = Some(node);
                self.tail = Some(node);
            }
            Some(head) => {
                unsafe {
                    if node.as_ref().next_ptr().is_none() {
                        node.as_mut().set_next(Some(head));
                    }
                }
                self.head = Some(node);
            }
        }
    }

    /// Makes `node` the new tail. Returns without linking if the list is
    /// empty; a tail cannot exist without a head. Does not touch `len`.
    fn set_tail_node(&mut self, mut node: NonNull<Node<T>>) {
        let Some(mut tail) = self.tail else { return };
        unsafe {
            node.as_mut().set_next(None);
            tail.as_mut().set_next(Some(node));
        }
        self.tail = Some(node);
    }

    /// Appends `value` at the end of the list. O(1).
    pub fn append(&mut self, value: T) {
        let node = Self::alloc(value);
        if self.head.is_none() {
            self.set_head_node(node);
        } else {
            self.set_tail_node(node);
        }
        self.len += 1;
    }

    /// Prepends `value` at the front of the list. O(1).
    pub fn prepend(&mut self, value: T) {
        let node = Self::alloc(value);
        self.set_head_node(node);
        self.len += 1;
    }

    /// Removes and returns the last value, or `None` if the list is empty.
    ///
    /// O(n): without back links the predecessor of the tail can only be
    /// found by walking from the head.
    pub fn pop(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            let mut prev = self.head?;
            unsafe {
                while let Some(next) = prev.as_ref().next_ptr() {
                    if next == tail {
                        break;
                    }
                    prev = next;
                }
                prev.as_mut().set_next(None);
            }
            self.tail = Some(prev);
        }
        self.len -= 1;
        Some(unsafe { Self::release(tail) })
    }

    /// Unlinks and returns the first value. Used by positional removal and
    /// by the consuming iterator.
    pub(crate) fn unlink_head(&mut self) -> Option<T> {
        let head = self.head?;
        self.head = unsafe { head.as_ref().next_ptr() };
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(unsafe { Self::release(head) })
    }

    fn node_ptr_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head?;
        for _ in 0..index {
            current = unsafe { current.as_ref().next_ptr()? };
        }
        Some(current)
    }

    /// Returns the node at the given 0-based index, or `None` when the index
    /// is out of range.
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        self.node_ptr_at(index).map(|node| unsafe { node.as_ref() })
    }

    /// Returns the node at the given 0-based index with its value mutable,
    /// or `None` when the index is out of range. Links stay under list
    /// control.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.node_ptr_at(index).map(|mut node| unsafe { node.as_mut() })
    }

    /// Inserts `value` at the given position.
    ///
    /// Valid positions are `0..=len`: inserting at `0` prepends, inserting
    /// at `len` appends, anything else splices the value after its
    /// predecessor.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index > len`; the list
    /// is left unchanged.
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == self.len {
            // Routing through append keeps the tail pointer current.
            self.append(value);
            return Ok(());
        }
        match self.node_ptr_at(index - 1) {
            Some(mut prev) => {
                let mut node = Self::alloc(value);
                unsafe {
                    node.as_mut().set_next(prev.as_ref().next_ptr());
                    prev.as_mut().set_next(Some(node));
                }
                self.len += 1;
                Ok(())
            }
            None => Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Removes and returns the value at the given position.
    ///
    /// Removing the head re-heads the list to its successor; removing the
    /// tail re-tails it to the predecessor; removing the sole remaining
    /// value clears both ends.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len`; the list
    /// is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let out_of_range = ListError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        if index == 0 {
            return self.unlink_head().ok_or(out_of_range);
        }
        match self.node_ptr_at(index - 1) {
            Some(mut prev) => {
                let Some(node) = (unsafe { prev.as_ref().next_ptr() }) else {
                    return Err(out_of_range);
                };
                unsafe { prev.as_mut().set_next(node.as_ref().next_ptr()) };
                if self.tail == Some(node) {
                    self.tail = Some(prev);
                }
                self.len -= 1;
                Ok(unsafe { Self::release(node) })
            }
            None => Err(out_of_range),
        }
    }

    /// Returns an iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Visits each value front to back, stopping early when `visit` returns
    /// `true`. The return value reports whether the walk was stopped.
    pub fn traverse<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        for value in self.iter() {
            if visit(value) {
                return true;
            }
        }
        false
    }

    /// Logs every value at debug level, front to back.
    pub fn dump(&self)
    where
        T: fmt::Display,
    {
        self.traverse(|value| {
            debug!("{value}");
            false
        });
    }

    /// Returns `true` if some value in the list equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    /// Returns the index of the first value equal to `value`, or `None`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    /// Releases every node, leaving the list empty.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.len = 0;
        // Iterative teardown; a recursive chain drop would overflow the
        // stack on long lists.
        while let Some(node) = current {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next_ptr();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                f.write_str(" => ")?;
            }
            write!(f, "( {value} )")?;
            first = false;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}
