// In demos/producer_consumer.rs
//
// Five producer threads race short name payloads into a queue of capacity
// five while one consumer drains it with a bounded wait. Runs for five
// seconds, or until Ctrl+C.
use msgq::{Message, MsgQueue, QueueError};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const NAMES: &[&str] = &[
    "Jacob",
    "Michael",
    "Ethan",
    "Joshua",
    "Daniel",
    "Christopher",
    "Anthony",
    "William",
    "Matthew",
    "Andrew",
    "Alexander",
    "David",
    "Joseph",
    "Noah",
    "Emily",
    "Isabella",
    "Emma",
    "Ava",
    "Madison",
    "Sophia",
    "Olivia",
    "Abigail",
    "Hannah",
    "Elizabeth",
];

fn main() {
    let queue = Arc::new(MsgQueue::new(5));
    let terminate = Arc::new(AtomicBool::new(false));

    let terminate_for_handler = Arc::clone(&terminate);
    ctrlc::set_handler(move || {
        terminate_for_handler.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    let dropped = Arc::new(AtomicU64::new(0));
    let mut producers = Vec::new();

    for _ in 0..5 {
        let queue = Arc::clone(&queue);
        let terminate = Arc::clone(&terminate);
        let dropped = Arc::clone(&dropped);

        producers.push(thread::spawn(move || {
            while !terminate.load(Ordering::SeqCst) {
                thread::sleep(Duration::from_millis(1));

                let name = NAMES[fastrand::usize(..NAMES.len())];

                if queue.put(Message::from(name)).is_err() {
                    // Full queue: keep ownership, apply drop policy.
                    dropped.fetch_add(1, Ordering::Relaxed);
                    println!("Dropped");
                }
            }
        }));
    }

    let consumer = {
        let queue = Arc::clone(&queue);
        let terminate = Arc::clone(&terminate);

        thread::spawn(move || {
            let mut received = 0u64;

            while !terminate.load(Ordering::SeqCst) {
                match queue.fetch_wait(Duration::from_secs(1)) {
                    Ok(msg) => {
                        received += 1;
                        println!("{}", String::from_utf8_lossy(msg.payload()));
                        thread::sleep(Duration::from_secs(1));
                    }
                    Err(QueueError::TimedOut) => continue,
                    Err(e) => {
                        eprintln!("Consumer error: {}", e);
                        break;
                    }
                }
            }

            received
        })
    };

    // Let the pipeline run, then shut everything down.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while !terminate.load(Ordering::SeqCst) && std::time::Instant::now() < deadline {
        thread::sleep(Duration::from_millis(100));
    }
    terminate.store(true, Ordering::SeqCst);

    for p in producers {
        p.join().expect("producer thread panicked");
    }
    let received = consumer.join().expect("consumer thread panicked");

    println!(
        "Consumed {} messages, dropped {}, {} still queued",
        received,
        dropped.load(Ordering::SeqCst),
        queue.len()
    );
    // Dropping the queue drains whatever was never fetched.
}
