/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::ImageSize;
use log::warn;
use rayon::ThreadPool;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
pub enum ThreadingPolicy {
    #[default]
    Single,
    Fixed(usize),
    Adaptive,
}

impl ThreadingPolicy {
    /// Thread count for an image of `for_size`, scaled by the kernel area
    /// in adaptive mode since work per pixel grows with it.
    pub fn get_threads_count(&self, for_size: ImageSize, kernel_area: usize) -> usize {
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Fixed(thread_count) => (*thread_count).max(1),
            ThreadingPolicy::Adaptive => {
                let box_size = 256 * 256;
                let new_box_size = for_size
                    .height
                    .saturating_mul(for_size.width)
                    .saturating_mul(kernel_area.max(1));
                (new_box_size / box_size).clamp(1, 16)
            }
        }
    }

    pub fn get_pool(&self, for_size: ImageSize, kernel_area: usize) -> Option<ThreadPool> {
        let threads_count = self.get_threads_count(for_size, kernel_area);
        if threads_count == 1 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads_count)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!("Failed to build a pool of {threads_count} threads, running single threaded: {err}");
                None
            }
        }
    }
}
