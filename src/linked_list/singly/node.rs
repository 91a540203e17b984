use core::ptr::NonNull;

/// A heap-allocated cell in a singly linked chain.
///
/// A node holds one value and a forward link. Callers can inspect a node
/// through the references handed out by
/// [`SinglyLinkedList`](super::list::SinglyLinkedList) and mutate its value,
/// but the link itself can only be rewired by the owning list.
pub struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    value: T,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self { next: None, value }
    }

    /// Returns a shared reference to the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    ///
    /// Only the value is exposed; the link stays under list control.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the successor node, if any.
    pub fn next(&self) -> Option<&Node<T>> {
        // The successor is owned by this node, so it lives at least as long
        // as the borrow of `self`.
        self.next.map(|node| unsafe { node.as_ref() })
    }

    #[inline]
    pub(crate) fn next_ptr(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

unsafe impl<T: Send> Send for Node<T> {}
unsafe impl<T: Sync> Sync for Node<T> {}
