//! # Emphasis Pair Resolution
//!
//! Answers one question for the emphasis rule: "which position closes the
//! marker at `start`?". Delimiter runs are discovered lazily, left to right,
//! and cached for the rest of the inline pass, so the many queries issued
//! while tokenizing one block share a single scan.
//!
//! ## Records
//!
//! Every marker *character* gets a [`DelimiterRecord`]. When a record that can
//! close is appended, the cache walks backwards for the nearest unmatched
//! opener with the same marker. The walk hops over finished work using each
//! record's `jump`:
//!
//! - a matched closer jumps straight past its opener, skipping the pair;
//! - an unmatched record extends the block of the record before it when both
//!   have the same marker and the same ability to open.
//!
//! Jump intervals nest (they never partially overlap), so once a walk for a
//! marker has failed from some record, no later walk for that marker can
//! succeed below it. `bottom` remembers that point per marker, which keeps
//! the total walking work linear in the number of markers.
//!
//! ## Caches
//!
//! A [`MatchCache`] covers one contiguous region of the pass. Caches are kept
//! on a stack: a query that starts before everything a cache knows about gets
//! a fresh cache layered on top instead of mixing regions, and caches whose
//! region ends at or before the query are dropped.

use std::collections::VecDeque;

use serde::Serialize;

use super::{
    delimiter::{DelimiterRun, scan_delimiter_run},
    kinds::Marker,
    parser::skip_token,
    state::InlineState,
};

/// Counters describing how much work the resolver did during one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolverStats {
    /// `find_match` calls.
    pub queries: usize,
    /// Caches created.
    pub caches: usize,
    /// Delimiter records appended.
    pub records: usize,
    /// Records examined while searching backwards for openers.
    pub search_steps: usize,
}

#[derive(Debug, Clone)]
struct DelimiterRecord {
    marker: Marker,
    pos: usize,
    /// Position of the matching closer, once this record is paired as an opener.
    end: Option<usize>,
    /// Backward distance to hop when a search walks past this record.
    jump: usize,
    open: bool,
}

#[derive(Debug)]
struct MatchCache {
    /// Region end in effect when the cache was created.
    end: usize,
    /// Local index up to which delimiter runs have been scanned.
    last: usize,
    records: VecDeque<DelimiterRecord>,
    /// Records dropped from the front so far; `dropped + i` is the absolute
    /// index of `records[i]`.
    dropped: usize,
    /// Per marker, absolute index below which no opener can match anymore.
    bottom: [usize; 2],
}

impl MatchCache {
    fn new(end: usize, last: usize) -> Self {
        Self {
            end,
            last,
            records: VecDeque::new(),
            dropped: 0,
            bottom: [0; 2],
        }
    }

    /// Drops leading records before `start`; earlier queries are done with them.
    fn discard_before(&mut self, start: usize) {
        while self.records.front().is_some_and(|r| r.pos < start) {
            self.records.pop_front();
            self.dropped += 1;
        }
    }

    /// Appends one record per character of `run` and pairs each with the
    /// nearest open record of the same marker.
    fn push_run(&mut self, start: usize, run: DelimiterRun, stats: &mut ResolverStats) {
        let m = run.marker.index();

        for i in 0..run.length {
            self.records.push_back(DelimiterRecord {
                marker: run.marker,
                pos: start + i,
                end: None,
                jump: 0,
                open: run.can_open,
            });
            stats.records += 1;
            let last = self.records.len() - 1;

            if run.can_close {
                // Characters of the same run never pair with each other.
                let floor = self.bottom[m];
                let mut j = last.checked_sub(i + 1);
                let mut matched = false;

                while let Some(idx) = j {
                    if self.dropped + idx < floor {
                        break;
                    }
                    stats.search_steps += 1;

                    let candidate = &self.records[idx];
                    if candidate.open && candidate.end.is_none() && candidate.marker == run.marker {
                        let closer_pos = self.records[last].pos;
                        let opener = &mut self.records[idx];
                        opener.end = Some(closer_pos);
                        opener.jump = 0;

                        let closer = &mut self.records[last];
                        closer.jump = last - idx;
                        closer.open = false;
                        matched = true;
                        break;
                    }
                    j = idx.checked_sub(candidate.jump + 1);
                }

                if !matched {
                    self.bottom[m] = self.bottom[m].max(self.dropped + last - i);
                }
            }

            if self.records[last].jump == 0 && last >= 1 {
                let prev = &self.records[last - 1];
                let cur = &self.records[last];
                if prev.marker == cur.marker && prev.open == cur.open {
                    let jump = prev.jump + 1;
                    self.records[last].jump = jump;
                }
            }
        }
    }
}

/// The stack of match caches for one inline pass.
#[derive(Debug, Default)]
pub(crate) struct PairResolver {
    caches: Vec<MatchCache>,
    pub stats: ResolverStats,
}

impl PairResolver {
    fn push_cache(&mut self, end: usize, start: usize) {
        self.caches.push(MatchCache::new(end, start));
        self.stats.caches += 1;
    }
}

/// Finds the local position of the closer paired with the marker at `start`.
///
/// Returns `None` when the marker at `start` cannot open or no partner exists
/// before the region end. Repeated queries for the same position return the
/// same answer.
pub(crate) fn find_match(state: &mut InlineState<'_>, start: usize) -> Option<usize> {
    let max = state.cur.max;
    let pairs = &mut state.pairs;
    pairs.stats.queries += 1;

    while pairs.caches.last().is_some_and(|c| c.end <= start) {
        pairs.caches.pop();
    }

    let mut fresh = pairs.caches.is_empty();
    if fresh {
        pairs.push_cache(max, start);
    }

    loop {
        let top = state.pairs.caches.len() - 1;
        let cache = &mut state.pairs.caches[top];
        cache.discard_before(start);

        match cache.records.front().map(|r| (r.pos, r.end)) {
            Some((pos, _)) if pos > start => {
                if fresh {
                    // `start` is not a delimiter this cache can see.
                    return None;
                }
                log::trace!("emphasis cache layered at {start} (first known run at {pos})");
                state.pairs.push_cache(max, start);
                fresh = true;
            }
            Some((_, Some(end))) => return Some(end),
            _ => {
                if !scan_next_run(state, top) {
                    return None;
                }
            }
        }
    }
}

/// Extends cache `top` by one delimiter run, skipping any other inline
/// content on the way. Returns false once the region end is reached.
fn scan_next_run(state: &mut InlineState<'_>, top: usize) -> bool {
    let max = state.cur.max;
    let last = state.pairs.caches[top].last;
    if last >= max {
        return false;
    }

    let saved_pos = state.cur.pos;
    state.cur.pos = last;

    loop {
        let pos = state.cur.pos;
        if let Some(marker) = state.cur.peek().and_then(Marker::from_byte) {
            let run = scan_delimiter_run(&state.cur, pos, marker);
            let pairs = &mut state.pairs;
            let cache = &mut pairs.caches[top];
            cache.push_run(pos, run, &mut pairs.stats);
            cache.last = pos + run.length;
            state.cur.pos = saved_pos;
            return true;
        }

        skip_token(state);

        if state.cur.pos >= max {
            state.pairs.caches[top].last = state.cur.pos;
            state.cur.pos = saved_pos;
            return false;
        }
    }
}
