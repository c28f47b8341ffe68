/// Copies `value` into `buf` as a zero-terminated byte string.
///
/// At most `buf.len() - 1` bytes of `value` are kept and the rest is silently
/// dropped; the cut is byte-wise and may split a multi-byte character. An empty
/// buffer has no room for the terminator and is left untouched. Returns the
/// number of value bytes written.
pub fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    let room = match buf.len().checked_sub(1) {
        Some(room) => room,
        None => return 0,
    };
    let n = value.len().min(room);
    buf[..n].copy_from_slice(&value.as_bytes()[..n]);
    buf[n] = 0;
    n
}
