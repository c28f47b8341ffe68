mod buffer;
mod merge_sort;
mod node;
mod string_queue;

pub use self::buffer::copy_truncated;
pub use self::string_queue::StringQueue;
