//! Memory organization and filling algorithm for Argon2.
//!
//! This module implements the core memory-filling loop of Argon2. Memory
//! is organized as a matrix of lanes (rows) and columns, with each cell
//! containing a 1024-byte block. Lanes can be processed independently
//! within each slice, enabling parallelism.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::block::Block;
use super::params::{Argon2Params, Argon2Variant, Argon2Version};
use super::reference::compute_reference_position;

const SYNC_POINTS: u32 = 4;

/// Memory layout parameters for Argon2.
///
/// The memory is organized as follows:
/// - Total memory is divided into `lanes` independent rows.
/// - Each lane contains `lane_len` blocks.
/// - Each lane is divided into 4 slices (sync points).
/// - Each slice contains `segment_len` blocks.
#[derive(Debug, Clone)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

impl MemoryLayout {
    pub(crate) fn new(params: &Argon2Params) -> Self {
        let lanes = params.lanes;
        let total_blocks =
            (params.mem_kib / (SYNC_POINTS * lanes)) * (SYNC_POINTS * lanes);
        let lane_len = total_blocks / lanes;
        let segment_len = lane_len / SYNC_POINTS;

        Self {
            lanes,
            lane_len,
            segment_len,
            total_blocks,
        }
    }

    #[inline]
    pub(crate) fn index(&self, lane: u32, index_in_lane: u32) -> usize {
        (lane * self.lane_len + index_in_lane) as usize
    }

    /// Fills all memory blocks over the specified number of passes.
    ///
    /// Each pass iterates through all 4 slices in order. Within each
    /// slice, lanes are independent and (when the `parallel` feature is
    /// enabled) run on a `rayon` thread pool; the slice boundaries act as
    /// synchronization barriers — `for_each` does not return until every
    /// lane has finished the current slice, so a lane can only ever read
    /// blocks from other lanes that were completed in a previous slice.
    pub(crate) fn fill(
        &self,
        memory: &mut [Block],
        variant: Argon2Variant,
        version: Argon2Version,
        time: u32,
    ) {
        let shared = SharedBlocks::new(memory);

        for pass in 0..time {
            for slice in 0..SYNC_POINTS {
                let fill_lane =
                    |lane: u32| self.fill_segment(&shared, pass, slice, lane, time, variant, version);

                #[cfg(feature = "parallel")]
                (0..self.lanes).into_par_iter().for_each(fill_lane);
                #[cfg(not(feature = "parallel"))]
                (0..self.lanes).for_each(fill_lane);
            }
        }
    }

    /// Fills one segment (portion of a lane within a slice).
    ///
    /// For each block position, this function:
    /// 1. Determines J1, J2 values (from address block or previous block)
    /// 2. Computes the reference block position using J1, J2
    /// 3. Computes the new block as G(previous, reference) [⊕ existing on
    ///    every pass after the first, under version 0x13]
    ///
    /// # Safety invariant
    ///
    /// This is called once per lane per slice, never concurrently for the
    /// same lane. It only ever writes to offsets
    /// `index(lane, slice*segment_len .. (slice+1)*segment_len)`, which are
    /// disjoint across the lanes running within one slice; every other
    /// access is a read of a block written during a prior slice or pass.
    #[allow(clippy::too_many_arguments)]
    fn fill_segment(
        &self,
        memory: &SharedBlocks,
        pass: u32,
        slice: u32,
        lane: u32,
        time: u32,
        variant: Argon2Variant,
        version: Argon2Version,
    ) {
        let data_independent = match variant {
            Argon2Variant::D => false,
            Argon2Variant::I => true,
            Argon2Variant::Id => pass == 0 && slice < 2,
        };

        let mut addr_block = Block::ZERO;
        let mut address_counter = 0u32;

        if data_independent {
            address_counter += 1;
            addr_block = Block::generate_address_block(
                pass,
                lane,
                slice,
                self.total_blocks,
                time,
                variant.ordinal(),
                address_counter,
            );
        }

        let start_idx = if pass == 0 && slice == 0 { 2 } else { 0 };

        for i in start_idx..self.segment_len {
            let index_in_lane = slice * self.segment_len + i;

            let prev_idx = if index_in_lane == 0 {
                self.lane_len - 1
            } else {
                index_in_lane - 1
            };

            let (j1, j2) = if data_independent {
                if i != 0 && i % 128 == 0 {
                    address_counter += 1;
                    addr_block = Block::generate_address_block(
                        pass,
                        lane,
                        slice,
                        self.total_blocks,
                        time,
                        variant.ordinal(),
                        address_counter,
                    );
                }
                let word = addr_block.0[(i % 128) as usize];
                (word as u32, (word >> 32) as u32)
            } else {
                // SAFETY: `prev_idx` was filled in an earlier slice/pass or
                // earlier in this same segment.
                let word = unsafe { memory.get(self.index(lane, prev_idx)) }.0[0];
                (word as u32, (word >> 32) as u32)
            };

            let (ref_lane, ref_idx) =
                compute_reference_position(pass, slice, lane, i, self, j1, j2);

            let cur = self.index(lane, index_in_lane);
            let prev = self.index(lane, prev_idx);
            let reference = self.index(ref_lane, ref_idx);

            // SAFETY: `prev` and `reference` were both written in a slice
            // prior to the one currently being filled (or earlier in this
            // segment, for `prev`); `cur` belongs exclusively to this lane
            // this slice, per the invariant documented above.
            let compressed = unsafe { Block::compress(memory.get(prev), memory.get(reference)) };

            if pass == 0 || version == Argon2Version::V0x10 {
                unsafe { *memory.get_mut(cur) = compressed };
            } else {
                unsafe { memory.get_mut(cur).in_place_xor(&compressed) };
            }
        }
    }
}

/// A raw, `Send + Sync` view over the working memory, used to let
/// per-lane closures write into disjoint segments of a shared buffer
/// without requiring the borrow checker to prove disjointness across a
/// dynamic lane count.
struct SharedBlocks {
    ptr: *mut Block,
    len: usize,
}

unsafe impl Send for SharedBlocks {}
unsafe impl Sync for SharedBlocks {}

impl SharedBlocks {
    fn new(memory: &mut [Block]) -> Self {
        SharedBlocks {
            ptr: memory.as_mut_ptr(),
            len: memory.len(),
        }
    }

    /// # Safety
    /// `idx` must be in bounds, and the caller must not hold a mutable
    /// reference into the same index at the same time.
    unsafe fn get(&self, idx: usize) -> &Block {
        debug_assert!(idx < self.len);
        unsafe { &*self.ptr.add(idx) }
    }

    /// # Safety
    /// `idx` must be in bounds, and the caller must not hold any other
    /// reference into the same index at the same time.
    unsafe fn get_mut(&self, idx: usize) -> &mut Block {
        debug_assert!(idx < self.len);
        unsafe { &mut *self.ptr.add(idx) }
    }
}
