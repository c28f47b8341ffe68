use super::buffer::copy_truncated;
use super::merge_sort;
use super::node::{Link, Node};
use crate::error::{QueueError, Result};

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;

/// A queue of owned strings in a singly-linked chain.
///
/// Both ends are reachable in O(1), so insertion at either end is constant
/// time; removal happens at the head only.
pub struct StringQueue {
    head: Link,
    tail: Link,
    len: usize,
    // invariant: len == 0 iff head and tail are None
    // invariant: tail is reached from head in len - 1 hops and tail.next is None
}

unsafe impl Send for StringQueue {}
unsafe impl Sync for StringQueue {}

impl StringQueue {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Allocates an empty queue on the heap, reporting allocation failure
    /// instead of aborting.
    pub fn try_new() -> Result<Box<Self>> {
        let layout = Layout::new::<Self>();
        let ptr = unsafe { std::alloc::alloc(layout) } as *mut Self;
        if ptr.is_null() {
            tracing::debug!(size = layout.size(), "queue allocation failed");
            return Err(QueueError::AllocFailed {
                size: layout.size(),
            });
        }
        unsafe {
            ptr.write(Self::new());
            Ok(Box::from_raw(ptr))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<&str> {
        self.head.map(|ptr| unsafe { (*ptr.as_ptr()).value.as_str() })
    }

    pub fn back(&self) -> Option<&str> {
        self.tail.map(|ptr| unsafe { (*ptr.as_ptr()).value.as_str() })
    }

    /// Copies `value` into a new first node.
    ///
    /// The queue is unchanged when allocation fails.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let ptr = Node::alloc(value)?;
        unsafe { (*ptr.as_ptr()).next = self.head };
        if self.tail.is_none() {
            self.tail = Some(ptr);
        }
        self.head = Some(ptr);
        self.len += 1;
        Ok(())
    }

    /// Copies `value` into a new last node.
    ///
    /// The queue is unchanged when allocation fails.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let ptr = Node::alloc(value)?;
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(ptr) },
            None => self.head = Some(ptr),
        }
        self.tail = Some(ptr);
        self.len += 1;
        Ok(())
    }

    /// Unlinks the first node and hands its value to the caller.
    pub fn pop_head(&mut self) -> Option<String> {
        let ptr = self.head?;
        unsafe {
            self.head = (*ptr.as_ptr()).next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            Some(Node::consume(ptr))
        }
    }

    /// Unlinks the first node, copying its value into `out` when given.
    ///
    /// The copy is truncated to `out.len() - 1` bytes and zero-terminated; see
    /// [`copy_truncated`](super::copy_truncated). Fails with
    /// [`QueueError::Empty`] when there is nothing to remove.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<()> {
        let value = self.pop_head().ok_or(QueueError::Empty)?;
        if let Some(buf) = out {
            copy_truncated(&value, buf);
        }
        Ok(())
    }

    /// Reverses the order of the queue by relinking its nodes.
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }
        tracing::trace!(len = self.len, "reverse");

        let mut prev: Link = None;
        let mut curr = self.head;
        while let Some(ptr) = curr {
            unsafe {
                let node = ptr.as_ptr();
                curr = (*node).next;
                (*node).next = prev;
            }
            prev = Some(ptr);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Sorts the queue in ascending byte-wise order by relinking its nodes.
    ///
    /// Equal values keep their relative order.
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }
        tracing::trace!(len = self.len, "sort");

        let run = unsafe { merge_sort::sort(self.head) };
        self.head = run.head;
        self.tail = run.tail;
    }

    pub fn clear(&mut self) {
        let mut link = self.head;
        self.head = None;
        self.tail = None;
        self.len = 0;
        while let Some(ptr) = link {
            unsafe {
                link = (*ptr.as_ptr()).next;
                drop(Node::consume(ptr));
            }
        }
    }

    fn values(&self) -> Values<'_> {
        Values {
            link: self.head,
            _marker: PhantomData,
        }
    }
}

impl Default for StringQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringQueue {
    fn drop(&mut self) {
        self.clear()
    }
}

impl fmt::Debug for StringQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

struct Values<'a> {
    link: Link,
    _marker: PhantomData<&'a StringQueue>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<&'a str> {
        let ptr = self.link?;
        unsafe {
            let node = &*ptr.as_ptr();
            self.link = node.next;
            Some(node.value.as_str())
        }
    }
}
