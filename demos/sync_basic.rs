//! Basic pooled encoding loop.
//!
//! Run with:
//!     cargo run --example sync_basic

use std::io::Write;

use bpoolrs::{BufferPool, PoolConfig};
use bytes::BufMut;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Show pool misses and discards
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let pool: BufferPool = BufferPool::with_config(PoolConfig::new(2, 256));
    println!("{:?}\n", pool);

    for i in 0..5 {
        let mut writer = pool.acquire().writer();
        writeln!(writer, "record {i}: {}", "x".repeat(i * 100))?;
        let buf = writer.into_inner();

        println!(
            "encoded record {}: len={}, capacity={}",
            i,
            buf.len(),
            buf.capacity()
        );
        pool.release(buf);
    }

    // Hold three at once; only two fit back.
    let held: Vec<_> = (0..3).map(|_| pool.acquire()).collect();
    for buf in held {
        pool.release(buf);
    }

    println!("\n{:?}", pool);
    Ok(())
}
