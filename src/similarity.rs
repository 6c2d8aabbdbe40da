//! Fuzzy string similarity used to spot stray cluster members.
//!
//! Scores range from 0 to 100. [`ratio`] is the normalized Indel similarity
//! (twice the longest common subsequence over the combined length).
//! [`partial_ratio`] is the best [`ratio`] between the shorter string and any
//! window of the longer one, windows hanging off either edge included.

/// Normalized Indel similarity of two strings.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_ratio(&a, &b)
}

/// Best [`ratio`] of the shorter string against a window of the longer.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let n = shorter.len();
    let m = longer.len();
    let leading = (1..n).map(|end| &longer[..end]);
    let full = (0..=m - n).map(|start| &longer[start..start + n]);
    let trailing = (m - n + 1..m).map(|start| &longer[start..]);

    let mut best: f64 = 0.0;
    for window in leading.chain(full).chain(trailing) {
        best = best.max(char_ratio(&shorter, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn char_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    100.0 * (2 * lcs_len(a, b)) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Arithmetic mean; `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation; `None` below two values.
pub fn sample_stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}
