use super::node::{Link, Node};

use std::ptr::NonNull;

/// A None-terminated chain together with its last node.
pub(super) struct Run {
    pub(super) head: Link,
    pub(super) tail: Link,
}

// cond: head starts a None-terminated chain owned by the caller
pub(super) unsafe fn sort(head: Link) -> Run {
    let first = match head {
        Some(first) => first,
        None => return Run { head, tail: None },
    };
    match split(first) {
        None => Run { head, tail: head },
        Some(back) => merge(sort(head), sort(Some(back))),
    }
}

/// Cuts the chain after its middle node and returns the second half.
///
/// A chain of one node has no second half.
unsafe fn split(head: NonNull<Node>) -> Link {
    let mut slow = head;
    let mut fast = (*head.as_ptr()).next;
    while let Some(step) = fast {
        match (*step.as_ptr()).next {
            Some(leap) => {
                fast = (*leap.as_ptr()).next;
                if let Some(next) = (*slow.as_ptr()).next {
                    slow = next;
                }
            }
            None => break,
        }
    }
    (*slow.as_ptr()).next.take()
}

// ties take from the left run
unsafe fn merge(left: Run, right: Run) -> Run {
    let (mut lhs, lhs_tail) = (left.head, left.tail);
    let (mut rhs, rhs_tail) = (right.head, right.tail);

    let mut head: Link = None;
    let mut last: Link = None;
    while let (Some(l), Some(r)) = (lhs, rhs) {
        let node = if (*l.as_ptr()).value <= (*r.as_ptr()).value {
            lhs = (*l.as_ptr()).next;
            l
        } else {
            rhs = (*r.as_ptr()).next;
            r
        };
        match last {
            Some(prev) => (*prev.as_ptr()).next = Some(node),
            None => head = Some(node),
        }
        last = Some(node);
    }

    let (rest, tail) = if lhs.is_some() {
        (lhs, lhs_tail)
    } else {
        (rhs, rhs_tail)
    };
    match last {
        Some(prev) => (*prev.as_ptr()).next = rest,
        None => head = rest,
    }
    Run { head, tail }
}

#[cfg(test)]
mod test {
    use super::{sort, split, Link, Node};

    fn build(values: &[&str]) -> Link {
        let mut head: Link = None;
        for value in values.iter().rev() {
            let ptr = Node::alloc(value).unwrap();
            unsafe { (*ptr.as_ptr()).next = head };
            head = Some(ptr);
        }
        head
    }

    fn drain(mut link: Link) -> Vec<String> {
        let mut values = Vec::new();
        while let Some(ptr) = link {
            unsafe {
                link = (*ptr.as_ptr()).next;
                values.push(Node::consume(ptr));
            }
        }
        values
    }

    #[test]
    fn test_split() {
        for len in 1..=7 {
            let values: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            let head = build(&refs);
            let back = unsafe { split(head.unwrap()) };
            let front = drain(head);
            let back = drain(back);
            assert_eq!(front.len(), (len + 1) / 2);
            assert_eq!(front.len() + back.len(), len);
            assert_eq!([front, back].concat(), values);
        }
    }

    #[test]
    fn test_sort_reports_tail() {
        let head = build(&["d", "b", "a", "c"]);
        let run = unsafe { sort(head) };
        let tail = run.tail.unwrap();
        unsafe {
            assert_eq!(tail.as_ref().value, "d");
            assert!(tail.as_ref().next.is_none());
        }
        assert_eq!(drain(run.head), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let run = unsafe { sort(None) };
        assert!(run.head.is_none() && run.tail.is_none());

        let head = build(&["only"]);
        let run = unsafe { sort(head) };
        assert_eq!(run.head, run.tail);
        assert_eq!(drain(run.head), ["only"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        let head = build(&["b", "B", "a", "ab", "", "A", "b"]);
        let run = unsafe { sort(head) };
        assert_eq!(drain(run.head), ["", "A", "B", "a", "ab", "b", "b"]);
    }
}
