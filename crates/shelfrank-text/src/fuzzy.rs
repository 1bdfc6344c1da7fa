//! Partial-match similarity between a raw query and a record's salient fields.
//!
//! The shorter string is aligned against the longer one at every matching
//! block (maximal common substring run, found greedily longest-first). Each
//! alignment takes the `|shorter|`-sized slice of the longer string starting
//! where the block lines up, cut short at the end of the string, and scores it
//! with the block-matching ratio `2 * M / (|a| + |b|)`. The best alignment
//! wins, reported as a whole percentage.
//!
//! Strings of 200 chars or more have their over-frequent chars (more than
//! 1% of the string plus one) ignored when seeding blocks, which keeps long
//! pasted queries cheap.

use std::collections::HashMap;

use shelfrank_core::types::CatalogRecord;

/// Alignments scoring above this count as a perfect match.
const PERFECT: f64 = 0.995;

/// Length from which over-frequent chars stop seeding matching blocks.
const POPULAR_MIN_LEN: usize = 200;

/// Best-alignment similarity of `a` and `b` as a percentage in `0..=100`.
///
/// Identical strings score 100; otherwise either string being empty scores 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0f64;
    for block in Blocks::new(short, long).matching_blocks() {
        let start = block.b.saturating_sub(block.a);
        let end = (start + short.len()).min(long.len());
        let ratio = block_ratio(short, &long[start..end]);
        if ratio > PERFECT {
            return 100;
        }
        best = best.max(ratio);
    }
    // `best` is within [0, 1], so the cast cannot truncate
    (100.0 * best).round_ties_even() as u8
}

/// Approximate-match score of `query` against the record's title, author
/// and genre, scaled to [0, 1].
pub fn fuzzy_score(query: &str, record: &CatalogRecord) -> f32 {
    let text = record.matchable_text().to_lowercase();
    f32::from(partial_ratio(&query.to_lowercase(), &text)) / 100.0
}

/// `a[a..a + len] == b[b..b + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Block {
    a: usize,
    b: usize,
    len: usize,
}

#[allow(clippy::cast_precision_loss)]
fn block_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = Blocks::new(a, b).matching_blocks().iter().map(|m| m.len).sum();
    2.0 * matched as f64 / total as f64
}

/// Longest-first matching blocks of `a` against `b`.
struct Blocks<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Ascending positions of each char in `b`, minus the over-frequent ones.
    b_positions: HashMap<char, Vec<usize>>,
}

impl<'s> Blocks<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b_positions.entry(c).or_default().push(j);
        }
        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_positions.retain(|_, positions| positions.len() <= limit);
        }
        Self { a, b, b_positions }
    }

    /// Longest common run inside `a[alo..ahi]` × `b[blo..bhi]`, earliest on ties.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_a, mut best_b, mut best_len) = (alo, blo, 0);
        // run length of the common suffix ending at b[j], for the previous row of a
        let mut runs: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next = HashMap::new();
            if let Some(positions) = self.b_positions.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j.checked_sub(1).and_then(|p| runs.get(&p)).copied().unwrap_or(0) + 1;
                    next.insert(j, k);
                    if k > best_len {
                        (best_a, best_b, best_len) = (i + 1 - k, j + 1 - k, k);
                    }
                }
            }
            runs = next;
        }
        // grow across chars that were left out of the position table
        while best_a > alo && best_b > blo && self.a[best_a - 1] == self.b[best_b - 1] {
            best_a -= 1;
            best_b -= 1;
            best_len += 1;
        }
        while best_a + best_len < ahi
            && best_b + best_len < bhi
            && self.a[best_a + best_len] == self.b[best_b + best_len]
        {
            best_len += 1;
        }
        Block { a: best_a, b: best_b, len: best_len }
    }

    /// Non-adjacent blocks in ascending order, closed by an empty block at
    /// `(|a|, |b|)`.
    fn matching_blocks(&self) -> Vec<Block> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut pending = vec![(0, la, 0, lb)];
        let mut found = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.longest_match(alo, ahi, blo, bhi);
            if m.len == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.len < ahi && m.b + m.len < bhi {
                pending.push((m.a + m.len, ahi, m.b + m.len, bhi));
            }
            found.push(m);
        }
        found.sort_unstable();

        let mut blocks: Vec<Block> = Vec::with_capacity(found.len() + 1);
        for m in found {
            match blocks.last_mut() {
                Some(last) if last.a + last.len == m.a && last.b + last.len == m.b => last.len += m.len,
                _ => blocks.push(m),
            }
        }
        blocks.push(Block { a: la, b: lb, len: 0 });
        blocks
    }
}
