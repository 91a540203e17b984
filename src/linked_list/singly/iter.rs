use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::list::SinglyLinkedList;
use super::node::Node;

/// A borrowed iterator over the values of a [`SinglyLinkedList`].
///
/// Yields `&T` front to back. The borrow of the list guarantees the chain
/// cannot be modified while the iterator is alive.
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _list: PhantomData<&'a SinglyLinkedList<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a SinglyLinkedList<T>) -> Self {
        Self {
            current: list.head_ptr(),
            remaining: list.len(),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node: &'a Node<T> = unsafe { self.current?.as_ref() };
        self.current = node.next_ptr();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// A consuming iterator that drains a [`SinglyLinkedList`] front to back.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.unlink_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
