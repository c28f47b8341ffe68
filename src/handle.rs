//! Operations over a queue that may be absent.
//!
//! Each function mirrors a [`StringQueue`] method but takes the queue as an
//! `Option`. A missing queue is never a fault: mutating operations that can
//! fail report [`QueueError::Absent`], and the rest are no-ops.
//!
//! A missing value passed to [`insert_head`] or [`insert_tail`] is stored as
//! an empty string.

use crate::error::{QueueError, Result};
use crate::queue::StringQueue;

pub fn create() -> Result<Box<StringQueue>> {
    StringQueue::try_new()
}

/// Releases every node and then the queue itself.
pub fn destroy(queue: Option<Box<StringQueue>>) {
    if let Some(mut queue) = queue {
        queue.clear();
    }
}

pub fn insert_head(queue: Option<&mut StringQueue>, value: Option<&str>) -> Result<()> {
    let queue = queue.ok_or(QueueError::Absent)?;
    queue.insert_head(value.unwrap_or_default())
}

pub fn insert_tail(queue: Option<&mut StringQueue>, value: Option<&str>) -> Result<()> {
    let queue = queue.ok_or(QueueError::Absent)?;
    queue.insert_tail(value.unwrap_or_default())
}

/// Removes the first value, copying it into `out` when given.
///
/// `out.len()` is the capacity of the output buffer: at most `out.len() - 1`
/// bytes of the value are written, followed by a zero byte.
pub fn remove_head(queue: Option<&mut StringQueue>, out: Option<&mut [u8]>) -> Result<()> {
    let queue = queue.ok_or(QueueError::Absent)?;
    queue.remove_head(out)
}

pub fn size(queue: Option<&StringQueue>) -> usize {
    queue.map_or(0, StringQueue::len)
}

pub fn reverse(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_absent_queue() {
        assert_eq!(insert_head(None, Some("a")), Err(QueueError::Absent));
        assert_eq!(insert_tail(None, Some("a")), Err(QueueError::Absent));

        let mut buf = [0xffu8; 4];
        assert_eq!(remove_head(None, Some(&mut buf[..])), Err(QueueError::Absent));
        assert_eq!(buf, [0xff; 4]);

        assert_eq!(size(None), 0);
        reverse(None);
        sort(None);
        destroy(None);
    }

    #[test]
    fn test_absent_value() {
        let mut q = create().unwrap();
        insert_tail(Some(&mut *q), None).unwrap();
        insert_head(Some(&mut *q), None).unwrap();
        assert_eq!(size(Some(&*q)), 2);
        assert_eq!(q.front(), Some(""));

        let mut buf = [0xffu8; 4];
        remove_head(Some(&mut *q), Some(&mut buf[..])).unwrap();
        assert_eq!(buf[0], 0);
        destroy(Some(q));
    }

    #[test]
    fn test_empty_queue() {
        let mut q = create().unwrap();
        assert_eq!(remove_head(Some(&mut *q), None), Err(QueueError::Empty));
        reverse(Some(&mut *q));
        sort(Some(&mut *q));
        assert_eq!(size(Some(&*q)), 0);
        destroy(Some(q));
    }
}
