/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Streaming computation of edge-list signatures.

use crate::record::CanonicalEdge;
use anyhow::{ensure, Context, Result};
use dsi_progress_logger::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

/// The order-independent signature of an edge list.
///
/// The signature is the triple (edge count, sum mod 2⁶⁴, XOR) of the
/// [hashes](CanonicalEdge::hash) of all edges in a file. Since both
/// aggregates are commutative and associative, the signature is invariant
/// under any permutation of the lines and under swapping the endpoints of
/// any edge. An empty edge list has signature `(0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signature {
    /// The number of edges processed.
    pub edges: u64,
    /// The wrapping sum of the per-edge hashes.
    pub sum64: u64,
    /// The XOR of the per-edge hashes.
    pub xor64: u64,
}

impl Signature {
    /// Folds one edge into the aggregates.
    pub fn update(&mut self, edge: CanonicalEdge) {
        let h = edge.hash();
        self.edges += 1;
        self.sum64 = self.sum64.wrapping_add(h);
        self.xor64 ^= h;
    }

    /// Computes the signature of the edge list at `path`.
    pub fn from_path(path: impl AsRef<Path>, log_interval: Option<Duration>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Cannot open edge list {}", path.display()))?;
        Self::from_read(
            BufReader::new(file),
            &path.display().to_string(),
            log_interval,
        )
    }

    /// Computes the signature of an edge list read line by line.
    ///
    /// `name` is used in diagnostics and progress logs. Any malformed
    /// non-blank line aborts the whole computation; no partial signature is
    /// ever returned.
    pub fn from_read(read: impl BufRead, name: &str, log_interval: Option<Duration>) -> Result<Self> {
        let mut pl = ProgressLogger::default();
        pl.display_memory(true).item_name("edges");
        if let Some(duration) = log_interval {
            pl.log_interval(duration);
        }
        pl.start(format!("Hashing edges from {}...", name));

        let mut signature = Self::default();
        for (line_num, line) in read.lines().enumerate() {
            let line = line
                .with_context(|| format!("Error reading line {} of {}", line_num + 1, name))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let edge = parse_edge(line)
                .with_context(|| format!("Error parsing line {} of {}", line_num + 1, name))?;
            signature.update(edge);
            pl.light_update();
        }
        pl.done();

        log::debug!(
            "{}: edges={} sum64={} xor64={}",
            name,
            signature.edges,
            signature.sum64,
            signature.xor64
        );
        Ok(signature)
    }
}

/// Parses one non-blank line: exactly three tab-separated base-10 integers.
fn parse_edge(line: &str) -> Result<CanonicalEdge> {
    let fields = line.split('\t').collect::<Vec<_>>();
    ensure!(
        fields.len() == 3,
        "Expected 3 tab-separated fields, got {}",
        fields.len()
    );
    let u = parse_field(fields[0]).context("Invalid source endpoint")?;
    let v = parse_field(fields[1]).context("Invalid target endpoint")?;
    let w = parse_field(fields[2]).context("Invalid weight")?;
    Ok(CanonicalEdge::new(u, v, w))
}

/// Parses a single field, tolerating surrounding whitespace as the reference
/// checker does.
fn parse_field(field: &str) -> Result<i64> {
    field
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Not a valid integer: {:?}", field))
}
