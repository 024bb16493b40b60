//! Longest common subsequence over arbitrary comparable items

/// Matched `(index_in_a, index_in_b)` pairs of an LCS, in ascending order
///
/// Classic O(n·m) table. When backtracking meets a tie between dropping an
/// item of `a` and dropping an item of `b`, the item of `a` is dropped, which
/// keeps the alignment reproducible for identical input.
pub fn longest_common_subsequence<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let n = a.len();
    let m = b.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    // dp[i][j] = LCS length of a[..i] and b[..j]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[n][m]);
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_inputs() {
        assert!(longest_common_subsequence::<&str>(&[], &["a"]).is_empty());
        assert!(longest_common_subsequence(&["a"], &[] as &[&str]).is_empty());
    }

    #[test]
    fn test_identical_sequences_match_fully() {
        let a = ["x", "y", "z"];
        assert_eq!(longest_common_subsequence(&a, &a), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_insertion_in_middle() {
        let a = ["a", "c"];
        let b = ["a", "b", "c"];
        assert_eq!(longest_common_subsequence(&a, &b), vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_tie_break_prefers_consuming_a() {
        // Both "x" and "y" are LCS candidates of length 1; dropping from `a`
        // first on ties keeps b's "x" matched with a's "x".
        let a = ["x", "y"];
        let b = ["y", "x"];
        assert_eq!(longest_common_subsequence(&a, &b), vec![(0, 1)]);
    }
}
