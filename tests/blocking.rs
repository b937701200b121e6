use msgq::{Message, MsgQueue, QueueError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn fetch_wait_returns_immediately_when_nonempty() {
    let queue = MsgQueue::new(4);
    queue.put(Message::from("ready")).unwrap();

    let start = Instant::now();
    let msg = queue.fetch_wait(Duration::from_secs(5)).unwrap();

    assert_eq!(msg.payload(), b"ready");
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn fetch_wait_wakes_on_put() {
    let queue = Arc::new(MsgQueue::new(4));

    let producer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(200));
            queue.put(Message::from("wake up")).unwrap();
        })
    };

    let start = Instant::now();
    let msg = queue.fetch_wait(Duration::from_secs(5)).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(msg.payload(), b"wake up");
    // Woken by the put, well before the 5 second deadline.
    assert!(elapsed < Duration::from_secs(5));

    producer.join().unwrap();
}

#[test]
fn fetch_wait_times_out_on_empty_queue() {
    let queue = MsgQueue::new(4);

    let start = Instant::now();
    let err = queue.fetch_wait(Duration::from_secs(1)).unwrap_err();
    let elapsed = start.elapsed();

    // Timeout is distinguishable from plain emptiness.
    assert_eq!(err, QueueError::TimedOut);
    assert_ne!(err, QueueError::Empty);

    // Waited the whole window: not immediate, not indefinite.
    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed < Duration::from_secs(3));
}

#[test]
fn fetch_wait_with_zero_timeout_reports_timed_out() {
    let queue = MsgQueue::new(4);
    let err = queue.fetch_wait(Duration::ZERO).unwrap_err();
    assert_eq!(err, QueueError::TimedOut);
}

#[test]
fn each_waiter_gets_exactly_one_message() {
    let queue = Arc::new(MsgQueue::new(16));
    let waiters = 4;

    let mut handles = Vec::new();
    for _ in 0..waiters {
        let queue = Arc::clone(&queue);
        handles.push(thread::spawn(move || {
            queue.fetch_wait(Duration::from_secs(5)).unwrap()
        }));
    }

    // Let every waiter block before any message shows up.
    thread::sleep(Duration::from_millis(100));
    for i in 0..waiters as u8 {
        queue.put(Message::new(&[i])).unwrap();
    }

    let mut got: Vec<u8> = handles
        .into_iter()
        .map(|h| h.join().unwrap().payload()[0])
        .collect();
    got.sort_unstable();

    assert_eq!(got, vec![0, 1, 2, 3]);
    assert!(queue.is_empty());
}
