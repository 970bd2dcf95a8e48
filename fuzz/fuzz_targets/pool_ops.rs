#![no_main]

use bpoolrs::BufferPool;
use libfuzzer_sys::fuzz_target;

// Input layout: [size, alloc, op, arg, op, arg, ...]
fuzz_target!(|data: &[u8]| {
    let [size, alloc, ops @ ..] = data else {
        return;
    };
    let size = (*size % 16) as usize;
    let alloc = *alloc as usize * 4;

    let pool: BufferPool<Vec<u8>> = BufferPool::new(size, alloc);
    let mut held: Vec<Vec<u8>> = Vec::new();

    for pair in ops.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1] as usize);
        match op % 5 {
            0 => {
                let buf = pool.acquire();
                assert!(buf.is_empty());
                held.push(buf);
            }
            1 => {
                if let Some(buf) = pool.try_acquire() {
                    assert!(buf.is_empty());
                    held.push(buf);
                }
            }
            2 => {
                if let Some(mut buf) = held.pop() {
                    buf.resize(arg * 8, op);
                    pool.release(buf);
                }
            }
            3 => pool.release(None),
            _ => {
                if !held.is_empty() {
                    let buf = held.swap_remove(arg % held.len());
                    if let Err(err) = pool.try_release(buf) {
                        // Rejected buffers come back untouched.
                        held.push(err.into_inner());
                    }
                }
            }
        }

        // Verify: idle store stays within its bound
        assert!(pool.idle() <= size);
    }
});
