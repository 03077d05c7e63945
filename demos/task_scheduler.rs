//! Example: a shared task queue drained by worker threads.
//!
//! Producers push tasks with random priorities; urgent workers take the
//! highest-priority task while a janitor thread takes the lowest.
//!
//! Run with: cargo run --example task_scheduler

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use depq::{Depq, DepqBuilder};
use rand::Rng;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Task {
    id: u32,
    name: String,
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let queue: Arc<Depq<Task, u8>> = Arc::new(DepqBuilder::new().max_length(64).build());

    let producers: Vec<_> = (0..2)
        .map(|p| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                for n in 0..40 {
                    let task = Task {
                        id: p * 100 + n,
                        name: format!("task-{p}-{n}"),
                    };
                    queue.insert(task, rng.gen_range(0..10));
                    thread::sleep(Duration::from_micros(200));
                }
            })
        })
        .collect();

    let urgent: Vec<_> = (0..2)
        .map(|w| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut done = 0;
                for _ in 0..200 {
                    match queue.popfirst() {
                        Ok((task, priority)) => {
                            info!(worker = w, id = task.id, priority, "ran {}", task.name);
                            done += 1;
                        },
                        Err(_) => thread::sleep(Duration::from_micros(500)),
                    }
                }
                done
            })
        })
        .collect();

    let janitor = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let mut dropped = 0;
            for _ in 0..20 {
                if let Ok((task, priority)) = queue.poplast()
                    && priority == 0
                {
                    info!(id = task.id, "dropped stale {}", task.name);
                    dropped += 1;
                }
                thread::sleep(Duration::from_millis(1));
            }
            dropped
        })
    };

    for handle in producers {
        let _ = handle.join();
    }
    let ran: u32 = urgent.into_iter().filter_map(|h| h.join().ok()).sum();
    let dropped = janitor.join().unwrap_or(0);

    println!("ran {ran} tasks, janitor dropped {dropped}, {} left", queue.len());
    println!("remaining: {queue}");
}
