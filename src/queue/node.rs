use crate::error::{QueueError, Result};

use std::alloc::Layout;
use std::ptr::NonNull;

pub(super) type Link = Option<NonNull<Node>>;

pub(super) struct Node {
    pub(super) value: String,
    pub(super) next: Link,
}

impl Node {
    /// Copies `value` into fresh storage and allocates an unlinked node for it.
    ///
    /// Nothing is left allocated when either allocation fails.
    pub(super) fn alloc(value: &str) -> Result<NonNull<Self>> {
        let mut owned = String::new();
        if owned.try_reserve_exact(value.len()).is_err() {
            tracing::debug!(size = value.len(), "value allocation failed");
            return Err(QueueError::AllocFailed { size: value.len() });
        }
        owned.push_str(value);

        let layout = Layout::new::<Node>();
        let ptr = unsafe { std::alloc::alloc(layout) } as *mut Node;
        let ptr = match NonNull::new(ptr) {
            Some(ptr) => ptr,
            None => {
                tracing::debug!(size = layout.size(), "node allocation failed");
                return Err(QueueError::AllocFailed {
                    size: layout.size(),
                });
            }
        };

        unsafe {
            ptr.as_ptr().write(Self {
                value: owned,
                next: None,
            })
        };
        Ok(ptr)
    }

    unsafe fn dealloc(ptr: NonNull<Self>) {
        let layout = Layout::new::<Node>();
        std::alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
    }

    // cond: ptr came from Node::alloc and is no longer reachable from any link
    pub(super) unsafe fn consume(ptr: NonNull<Self>) -> String {
        let node = ptr.as_ptr().read();
        Node::dealloc(ptr);
        node.value
    }
}
