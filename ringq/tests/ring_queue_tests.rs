use ringq::{QueueError, RingQueue};

fn drain(queue: &mut RingQueue) -> Vec<i32> {
    let mut out = Vec::new();
    while let Ok(value) = queue.remove_front() {
        out.push(value);
    }
    out
}

#[test]
fn test_insert_remove_front() {
    let mut queue: RingQueue = RingQueue::new();

    queue.insert(1).unwrap();
    queue.insert(2).unwrap();
    queue.insert(3).unwrap();

    assert_eq!(queue.remove_front(), Ok(1));
    assert_eq!(queue.remove_front(), Ok(2));

    queue.insert(4).unwrap();
    queue.insert(5).unwrap();

    assert_eq!(queue.remove_front(), Ok(3));
    assert_eq!(queue.remove_front(), Ok(4));
    assert_eq!(queue.remove_front(), Ok(5));
    assert_eq!(queue.remove_front(), Err(QueueError::Empty));
}

#[test]
fn test_overflow_is_rejected() {
    let mut queue: RingQueue = RingQueue::new();

    for value in 1..=8 {
        queue.insert(value).unwrap();
    }
    assert!(queue.is_full());
    assert_eq!(queue.insert(9), Err(QueueError::Full { capacity: 8 }));

    assert_eq!(drain(&mut queue), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_is_empty() {
    let mut queue: RingQueue = RingQueue::new();

    assert!(queue.is_empty());

    queue.insert(1).unwrap();
    queue.insert(2).unwrap();

    assert!(!queue.is_empty());
    assert!(!queue.is_full());

    queue.remove_front().unwrap();
    queue.remove_front().unwrap();

    assert!(queue.is_empty());
}

#[test]
fn test_wraparound_order() {
    let mut queue: RingQueue = RingQueue::new();

    for value in 1..=8 {
        queue.insert(value).unwrap();
    }
    for _ in 0..3 {
        queue.remove_front().unwrap();
    }
    for value in [100, 200, 300] {
        queue.insert(value).unwrap();
    }

    assert!(queue.is_full());
    assert_eq!(
        queue.iter().collect::<Vec<_>>(),
        vec![4, 5, 6, 7, 8, 100, 200, 300]
    );
    assert_eq!(queue.front(), Some(4));
    assert_eq!(queue.back(), Some(300));
    assert_eq!(queue.iter().rev().next(), Some(300));
}

#[test]
fn test_status_walkthrough() {
    let mut queue: RingQueue = RingQueue::new();
    assert_eq!(queue.status_text(), "Queue status: [ empty ]");

    queue.insert(10).unwrap();
    queue.insert(20).unwrap();
    queue.insert(30).unwrap();
    assert_eq!(queue.status_text(), "Queue status: [ 10, 20, 30 ]");

    assert_eq!(queue.remove_range(2), Ok(2));
    assert_eq!(queue.status_text(), "Queue status: [ 30 ]");

    assert_eq!(queue.remove_front(), Ok(30));
    assert_eq!(queue.status_text(), "Queue status: [ empty ]");

    assert_eq!(queue.remove_front(), Err(QueueError::Empty));
    assert_eq!(queue.status_text(), "Queue status: [ empty ]");
}

#[test]
fn test_status_is_stable_between_mutations() {
    let mut queue: RingQueue = RingQueue::new();
    queue.insert(-7).unwrap();
    queue.insert(i16::MAX).unwrap();

    let first = queue.status_text();
    assert_eq!(first, queue.status_text());
    assert_eq!(first, "Queue status: [ -7, 32767 ]");
}

#[test]
fn test_refresh_status_appends_note() {
    let mut queue: RingQueue = RingQueue::new();
    assert_eq!(queue.refresh_status(""), queue.status_text());
    assert_eq!(
        queue.refresh_status("Deletion error: The queue is empty."),
        "Queue status: [ empty ]\nDeletion error: The queue is empty."
    );

    queue.insert(1).unwrap();
    assert_eq!(
        queue.status().with_note("hello").to_string(),
        "Queue status: [ 1 ]\nhello"
    );
}

#[test]
fn test_remove_range_bounds() {
    let mut queue: RingQueue = RingQueue::new();
    for value in [1, 2, 3, 4] {
        queue.insert(value).unwrap();
    }

    assert_eq!(
        queue.remove_range(0),
        Err(QueueError::InvalidPosition { position: 0, len: 4 })
    );
    assert_eq!(
        queue.remove_range(5),
        Err(QueueError::InvalidPosition { position: 5, len: 4 })
    );
    assert_eq!(queue.len(), 4);

    assert_eq!(queue.remove_range(1), Ok(1));
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 3, 4]);

    assert_eq!(queue.remove_range(3), Ok(3));
    assert!(queue.is_empty());
    assert_eq!(queue.remove_range(1), Err(QueueError::Empty));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        QueueError::Full { capacity: 8 }.to_string(),
        "the queue is full (8 elements)"
    );
    assert_eq!(QueueError::Empty.to_string(), "the queue is empty");
    assert_eq!(
        QueueError::InvalidPosition {
            position: 9,
            len: 3
        }
        .to_string(),
        "invalid position 9, expected a value in 1..=3"
    );
}

#[test]
fn test_custom_capacity() {
    let mut queue: RingQueue<3> = RingQueue::default();
    assert_eq!(queue.capacity(), 3);

    for value in [1, 2, 3] {
        queue.insert(value).unwrap();
    }
    assert_eq!(queue.insert(4), Err(QueueError::Full { capacity: 3 }));
    assert_eq!(queue.remove_range(2), Ok(2));
    queue.insert(4).unwrap();
    queue.insert(5).unwrap();
    assert_eq!(queue.status_text(), "Queue status: [ 3, 4, 5 ]");
}
