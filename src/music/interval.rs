// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval arithmetic: relative patterns to absolute positions.

use super::registry::Registry;
use crate::error::Result;

/// Semitone offset from a root. May exceed one octave.
pub type Interval = i32;

/// Place a relative interval pattern on a root.
///
/// The root is always the first element; the pattern follows in order with
/// no deduplication.
pub fn absolute_interval_arr(root_interval: Interval, interval_arr: &[Interval]) -> Vec<Interval> {
    let mut result = Vec::with_capacity(interval_arr.len() + 1);
    result.push(root_interval);
    result.extend(interval_arr.iter().map(|&i| root_interval + i));
    result
}

/// Running sum of a step pattern: `[2, 2, 1]` becomes `[2, 4, 5]`.
///
/// Steps are expected to be non-negative; nothing is validated here.
pub fn scale_to_interval_arr(step_arr: &[Interval]) -> Vec<Interval> {
    step_arr
        .iter()
        .scan(0, |acc, &step| {
            *acc += step;
            Some(*acc)
        })
        .collect()
}

/// Map degrees to their absolute intervals, stopping at the first bad degree
pub fn degrees_to_interval_arr(registry: &Registry, degrees: &[u8]) -> Result<Vec<Interval>> {
    degrees
        .iter()
        .map(|&d| registry.degree_to_interval(d))
        .collect()
}
