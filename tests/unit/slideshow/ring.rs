use super::*;

#[test]
fn reads_back_in_write_order() {
    let mut ring = RingBuffer::with_capacity(3);
    for v in ["a", "b", "c"] {
        assert!(ring.write(v));
    }
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.read(), Some("a"));
    assert_eq!(ring.read(), Some("b"));
    assert_eq!(ring.read(), Some("c"));
    assert!(ring.is_empty());
}

#[test]
fn underflow_is_silent_and_keeps_cursor() {
    let mut ring = RingBuffer::with_capacity(2);
    ring.write(1);
    ring.write(2);
    ring.read();
    ring.read();
    assert_eq!(ring.read_count(), 2);
    assert_eq!(ring.read(), None);
    assert_eq!(ring.read(), None);
    assert_eq!(ring.read_count(), 2);
}

#[test]
fn write_after_depletion_resumes_at_wraparound() {
    let mut ring = RingBuffer::with_capacity(3);
    for v in 0..3 {
        ring.write(v);
    }
    for _ in 0..3 {
        ring.read();
    }
    ring.write(10);
    ring.write(11);
    assert_eq!(ring.read(), Some(10));
    assert_eq!(ring.read(), Some(11));
    assert_eq!(ring.read(), None);
    assert_eq!(ring.read_count(), 5);
}

#[test]
fn overflow_overwrites_oldest_unread() {
    let mut ring = RingBuffer::with_capacity(2);
    ring.write('x');
    ring.write('y');
    ring.write('z');
    assert_eq!(ring.len(), 2);
    assert_eq!(ring.read(), Some('y'));
    assert_eq!(ring.read(), Some('z'));
    assert_eq!(ring.read(), None);
}

#[test]
fn zero_capacity_drops_everything() {
    let mut ring: RingBuffer<u8> = RingBuffer::with_capacity(0);
    assert!(!ring.write(1));
    assert_eq!(ring.read(), None);
    assert_eq!(ring.capacity(), 0);
}

#[test]
fn collects_to_exact_capacity() {
    let mut ring: RingBuffer<_> = ["a", "b"].into_iter().collect();
    assert_eq!(ring.capacity(), 2);
    assert_eq!(ring.read(), Some("a"));
    ring.write("c");
    ring.write("d");
    assert_eq!(ring.read(), Some("c"));
    assert_eq!(ring.read(), Some("d"));
}
