//! A queue of owned strings backed by a singly-linked chain of nodes.
//!
//! [`StringQueue`] is the owning type. The [`handle`] module exposes the same
//! operations over an optional queue, where a missing queue is a defined
//! failure or no-op instead of a fault.
//!
//! The queue is not synchronized. Every mutating operation takes
//! `&mut StringQueue`, so callers that share a queue between threads must
//! serialize access themselves (for example behind a `Mutex`).

mod error;

pub mod handle;
pub mod queue;

pub use crate::error::{QueueError, Result};
pub use crate::queue::StringQueue;
