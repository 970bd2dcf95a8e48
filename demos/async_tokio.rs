//! Sharing one pool across tokio tasks.
//!
//! Run with:
//!     cargo run --example async_tokio

use std::sync::Arc;

use bpoolrs::BufferPool;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pool: Arc<BufferPool> = Arc::new(BufferPool::new(8, 1024));

    println!("Serializing on 16 tasks...\n");

    let handles: Vec<_> = (0..16)
        .map(|task_id| {
            let pool = Arc::clone(&pool);
            tokio::spawn(async move {
                let mut total = 0;
                for seq in 0..100 {
                    let mut buf = pool.checkout();
                    buf.extend_from_slice(format!("task={task_id} seq={seq}\n").as_bytes());
                    total += buf.len();
                    tokio::task::yield_now().await;
                }
                (task_id, total)
            })
        })
        .collect();

    for handle in handles {
        let (task_id, total) = handle.await?;
        println!("Task {}: {} bytes", task_id, total);
    }

    println!("\nIdle buffers: {}/{}", pool.idle(), pool.size());
    Ok(())
}
