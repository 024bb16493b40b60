use std::collections::{HashMap, VecDeque};

/// Result of pairing two lists by a structural key
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Pairing {
    /// Every A index in order, with its B counterpart if one shares the key
    pub pairs: Vec<(usize, Option<usize>)>,
    /// B indices nobody in A claimed, in B order
    pub unmatched_b: Vec<usize>,
}

/// Pair items one-to-one by exact key equality
///
/// Duplicate keys pair in order of appearance: the first A item with a key
/// takes the first B item with that key, the second takes the second.
pub(crate) fn pair_by_key<T, F>(a: &[T], b: &[T], key: F) -> Pairing
where
    F: Fn(&T) -> &str,
{
    let mut available: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (idx, item) in b.iter().enumerate() {
        available.entry(key(item)).or_default().push_back(idx);
    }

    let mut claimed = vec![false; b.len()];
    let pairs = a
        .iter()
        .enumerate()
        .map(|(idx_a, item)| {
            let idx_b = available
                .get_mut(key(item))
                .and_then(|queue| queue.pop_front());
            if let Some(idx_b) = idx_b {
                claimed[idx_b] = true;
            }
            (idx_a, idx_b)
        })
        .collect();

    let unmatched_b = (0..b.len()).filter(|&idx| !claimed[idx]).collect();

    Pairing { pairs, unmatched_b }
}
