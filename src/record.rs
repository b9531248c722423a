/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Canonical edge records and their 64-bit hashes.

use blake2::digest::consts::U8;
use blake2::{Blake2b, Digest};

/// BLAKE2b configured for an 8-byte digest.
///
/// The algorithm and the digest length are part of the signature format:
/// changing either changes every signature ever produced.
type Blake2b64 = Blake2b<U8>;

/// The width of a serialized [`CanonicalEdge`].
pub const RECORD_BYTES: usize = 9;

/// An undirected weighted edge with its endpoints in canonical order.
///
/// Canonicalization removes the directional ambiguity of an undirected edge:
/// `(u, v, w)` and `(v, u, w)` produce the same [record](Self::record).
/// Endpoints are compared as signed integers; the weight plays no part in
/// the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalEdge {
    u: i64,
    v: i64,
    w: i64,
}

impl CanonicalEdge {
    /// Creates a canonical edge, swapping the endpoints if `u > v`.
    pub fn new(u: i64, v: i64, w: i64) -> Self {
        if u > v {
            Self { u: v, v: u, w }
        } else {
            Self { u, v, w }
        }
    }

    /// Serializes this edge as a fixed 9-byte record: both endpoints as
    /// 4-byte little-endian values, then the low byte of the weight.
    ///
    /// Endpoints are truncated to their low 32 bits (two's complement), so
    /// negative or oversized values wrap; only `w & 0xFF` of the weight
    /// survives. Both truncations are inherited from the reference checker
    /// and must not be widened.
    pub fn record(&self) -> [u8; RECORD_BYTES] {
        let mut record = [0; RECORD_BYTES];
        record[0..4].copy_from_slice(&(self.u as u32).to_le_bytes());
        record[4..8].copy_from_slice(&(self.v as u32).to_le_bytes());
        record[8] = self.w as u8;
        record
    }

    /// Returns the BLAKE2b-64 hash of the record, read as a little-endian
    /// `u64`.
    pub fn hash(&self) -> u64 {
        let digest: [u8; 8] = Blake2b64::digest(self.record()).into();
        u64::from_le_bytes(digest)
    }
}
