#![no_main]

use libfuzzer_sys::fuzz_target;
use pixpool::{FitPolicy, FitRequest, PixelBuffer, PixelFormat, PoolConfig, ReusePool};

const FORMATS: [PixelFormat; 5] = [
    PixelFormat::Rgba8888,
    PixelFormat::Rgb565,
    PixelFormat::Argb4444,
    PixelFormat::Alpha8,
    PixelFormat::Unknown,
];

fuzz_target!(|data: Vec<u8>| {
    let ceiling = match data.first() {
        Some(&b) if b % 2 == 1 => Some(b as usize * 64),
        _ => None,
    };
    let pool = ReusePool::new(PoolConfig::default().with_max_pooled_bytes(ceiling));
    let mut held: Vec<PixelBuffer> = Vec::new();

    // Interpret the input as a sequence of 4-byte operations
    for op in data.chunks_exact(4) {
        let width = (op[1] % 16) as u32 + 1;
        let height = (op[2] % 16) as u32 + 1;
        let format = FORMATS[(op[3] % 5) as usize];

        match op[0] % 7 {
            0 => {
                if let Ok(buf) = PixelBuffer::new(width, height, format) {
                    held.push(buf);
                }
            }
            1 => {
                if let Some(buf) = held.pop() {
                    pool.release(buf).unwrap();
                }
            }
            2 => {
                if let Some(buf) = pool.acquire_exact_size(width, height, format) {
                    // Verify: exact match means exact shape
                    assert_eq!((buf.width(), buf.height(), buf.format()), (width, height, format));
                    assert!(buf.is_reusable());
                    held.push(buf);
                }
            }
            3 | 4 => {
                let policy = if op[0] % 7 == 3 { FitPolicy::Modern } else { FitPolicy::Legacy };
                let request = FitRequest::new(width, height, format)
                    .with_sample_size((op[3] % 4) as u32);
                if let Some(buf) = pool.acquire_best_fit(&request, policy) {
                    if policy == FitPolicy::Modern {
                        assert!(buf.byte_capacity() >= request.needed_bytes());
                    }
                    held.push(buf);
                }
            }
            5 => {
                if let Some(buf) = held.last_mut() {
                    buf.freeze();
                }
            }
            _ => {
                pool.clear();
                assert_eq!(pool.total_bytes(), 0);
            }
        }

        // Verify: accounting matches a fresh snapshot, and the ceiling holds
        let stats = pool.stats();
        assert_eq!(stats.total_bytes, pool.total_bytes());
        if let Some(max) = ceiling {
            assert!(stats.total_bytes <= max);
        }
    }
});
