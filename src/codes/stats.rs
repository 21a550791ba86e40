/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::*;
use core::sync::atomic::{AtomicU64, Ordering};

/// A struct to keep track of the space needed to store a stream of integers
/// using different codes; this can be used to determine which code is the
/// most efficient for a given stream.
///
/// Counters can be updated concurrently through a shared reference. A code
/// that cannot encode some value of the stream has its counter saturated at
/// `u64::MAX`.
///
/// ```
/// use universal_codes::prelude::*;
///
/// let stats = CodesStats::new();
/// for value in [5, 6, 7, 5, 6] {
///     stats.update(value);
/// }
/// assert_eq!(stats.best_code(), (Code::Vlq { group_bits: 3 }, 5 * 4));
/// assert_eq!(stats.get(Code::Gamma), Some(5 + 5 + 7 + 5 + 5));
/// ```
#[derive(Default, Debug)]
pub struct CodesStats {
    /// VLQ with group sizes 1 to 8.
    pub vlq: [AtomicU64; 8],
    pub gamma: AtomicU64,
    pub delta: AtomicU64,
    pub omega: AtomicU64,
    pub fibonacci: AtomicU64,
    /// Thompson-Alpha with prefix widths 6 and 7.
    pub thompson_alpha: [AtomicU64; 2],
}

#[inline(always)]
fn add(counter: &AtomicU64, len: Option<usize>) {
    // the closure always returns Some
    let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |old| {
        Some(len.map_or(u64::MAX, |len| old.saturating_add(len as u64)))
    });
}

impl CodesStats {
    /// Create a new `CodesStats` struct
    pub fn new() -> Self {
        Default::default()
    }

    /// Update the stats with the length of the codes for `value` and return
    /// back `value` for convenience.
    pub fn update(&self, value: u64) -> u64 {
        for (g, counter) in self.vlq.iter().enumerate() {
            add(counter, len_vlq(value, g + 1));
        }
        add(&self.gamma, Some(len_gamma(value)));
        add(&self.delta, Some(len_delta(value)));
        add(&self.omega, Some(len_omega(value)));
        add(&self.fibonacci, Some(len_fibonacci(value)));
        for (k, counter) in self.thompson_alpha.iter().enumerate() {
            add(counter, len_thompson_alpha(value, k + 6));
        }
        value
    }

    /// Return the number of bits needed by `code` so far, or `None` if `code`
    /// is not tracked.
    pub fn get(&self, code: Code) -> Option<u64> {
        let counter = match code {
            Code::Vlq { group_bits } => self.vlq.get(group_bits.checked_sub(1)?)?,
            Code::Gamma => &self.gamma,
            Code::Delta => &self.delta,
            Code::Omega => &self.omega,
            Code::Fibonacci => &self.fibonacci,
            Code::ThompsonAlpha { prefix_bits } => {
                self.thompson_alpha.get(prefix_bits.checked_sub(6)?)?
            }
        };
        Some(counter.load(Ordering::Relaxed))
    }

    /// Return an iterator over the tracked codes and the number of bits they
    /// need so far.
    pub fn iter(&self) -> impl Iterator<Item = (Code, u64)> + '_ {
        let vlq = (1..=self.vlq.len()).map(|group_bits| Code::Vlq { group_bits });
        let alpha = (6..6 + self.thompson_alpha.len())
            .map(|prefix_bits| Code::ThompsonAlpha { prefix_bits });
        vlq.chain([Code::Gamma, Code::Delta, Code::Omega, Code::Fibonacci])
            .chain(alpha)
            .filter_map(|code| Some((code, self.get(code)?)))
    }

    /// Return the best code for the stream, as in the one that needed the
    /// least space, and the space needed by that code.
    ///
    /// Ties are resolved in favor of the code appearing first in
    /// [`iter`](CodesStats::iter).
    pub fn best_code(&self) -> (Code, u64) {
        self.iter()
            .min_by_key(|&(_, len)| len)
            .unwrap_or((Code::Gamma, self.gamma.load(Ordering::Relaxed)))
    }
}
