//! Sequence similarity ratio
//!
//! Ratcliff/Obershelp "gestalt" matching: find the longest common block,
//! recurse on the pieces to its left and right, and score the total number
//! of matched characters `M` as `2 * M / (|a| + |b|)`.
//!
//! Unlike a normalized Levenshtein distance this rewards long shared runs,
//! so `"sppp"` against `"spp"` scores `6 / 7` rather than `3 / 4`.

/// Similarity ratio in `[0.0, 1.0]`
///
/// Two empty strings are identical (`1.0`).
///
/// # Examples
/// ```
/// use pondok_text_processing::similarity::similarity_ratio;
/// assert!((similarity_ratio("spp", "sppp") - 6.0 / 7.0).abs() < 1e-9);
/// assert_eq!(similarity_ratio("", ""), 1.0);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Total size of all matching blocks between `a` and `b`
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, a_lo, a_hi, b_lo, b_hi);
        if size == 0 {
            continue;
        }
        matched += size;

        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matched
}

/// Longest common block of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`
///
/// Returns `(start_in_a, start_in_b, size)`. Among equally long blocks the
/// one starting earliest in `a` wins, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);

    // run_len[j + 1] = length of the common run ending at a[i], b[j]
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in a_lo..a_hi {
        for j in b_lo..b_hi {
            if a[i] == b[j] {
                let k = prev[j] + 1;
                curr[j + 1] = k;
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
        curr[b_lo..=b_hi].iter_mut().for_each(|v| *v = 0);
    }

    (best_i, best_j, best_size)
}
