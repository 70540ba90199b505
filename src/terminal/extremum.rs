use std::cmp::Ordering;

use crate::sequence::Sequence;

use super::fold::fold;

/// Returns the minimum item, or `None` for an empty sequence.
///
/// Of several equally minimal items, the first one wins.
pub fn min<S>(sequence: &mut S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    min_by(sequence, Ord::cmp)
}

/// Returns the maximum item, or `None` for an empty sequence.
///
/// Of several equally maximal items, the last one wins.
pub fn max<S>(sequence: &mut S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    max_by(sequence, Ord::cmp)
}

/// Returns the minimum item under `compare`; the first of equal minima.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let words = ["bb", "a", "cc", "d"];
/// let shortest = terminal::min_by(&mut source::slice(&words), |left, right| left.len().cmp(&right.len()));
/// assert_eq!(shortest, Some(&"a"));
/// ```
pub fn min_by<S, F>(sequence: &mut S, mut compare: F) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    fold(sequence, None, |best, item| match best {
        Some(best) if compare(&item, &best) != Ordering::Less => Some(best),
        _ => Some(item),
    })
}

/// Returns the maximum item under `compare`; the last of equal maxima.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let words = ["bb", "a", "cc", "d"];
/// let longest = terminal::max_by(&mut source::slice(&words), |left, right| left.len().cmp(&right.len()));
/// assert_eq!(longest, Some(&"cc"));
/// ```
pub fn max_by<S, F>(sequence: &mut S, mut compare: F) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    fold(sequence, None, |best, item| match best {
        Some(best) if compare(&item, &best) == Ordering::Less => Some(best),
        _ => Some(item),
    })
}

/// Returns the item with the minimum key; the first of equal minima.
///
/// The key is computed once per item.
pub fn min_by_key<S, K, F>(sequence: &mut S, mut key: F) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    fold(sequence, None, |best: Option<(K, S::Item)>, item| {
        let item_key = key(&item);
        match best {
            Some((best_key, best)) if item_key >= best_key => Some((best_key, best)),
            _ => Some((item_key, item)),
        }
    })
    .map(|(_, item)| item)
}

/// Returns the item with the maximum key; the last of equal maxima.
///
/// The key is computed once per item.
pub fn max_by_key<S, K, F>(sequence: &mut S, mut key: F) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    fold(sequence, None, |best: Option<(K, S::Item)>, item| {
        let item_key = key(&item);
        match best {
            Some((best_key, best)) if item_key < best_key => Some((best_key, best)),
            _ => Some((item_key, item)),
        }
    })
    .map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::source;
    use rstest::rstest;

    // Items tagged with their position so ties can be told apart.
    const TAGGED: [(i32, usize); 3] = [(2, 0), (1, 1), (2, 2)];

    fn by_value(left: &&(i32, usize), right: &&(i32, usize)) -> Ordering {
        left.0.cmp(&right.0)
    }

    #[rstest]
    fn test_max_keeps_last_of_equal_items() {
        assert_eq!(max_by(&mut source::slice(&TAGGED), by_value), Some(&(2, 2)));
    }

    #[rstest]
    fn test_min_returns_distinct_minimum() {
        assert_eq!(min_by(&mut source::slice(&TAGGED), by_value), Some(&(1, 1)));
    }

    #[rstest]
    fn test_min_keeps_first_of_equal_items() {
        let equal = [(5, 0), (5, 1), (5, 2)];
        assert_eq!(min_by(&mut source::slice(&equal), by_value), Some(&(5, 0)));
        assert_eq!(max_by(&mut source::slice(&equal), by_value), Some(&(5, 2)));
    }

    #[rstest]
    fn test_by_key_tie_breaks_match_comparators() {
        assert_eq!(max_by_key(&mut source::slice(&TAGGED), |pair| pair.0), Some(&(2, 2)));
        assert_eq!(min_by_key(&mut source::slice(&TAGGED), |pair| pair.0), Some(&(1, 1)));
        let equal = [(5, 0), (5, 1)];
        assert_eq!(min_by_key(&mut source::slice(&equal), |pair| pair.0), Some(&(5, 0)));
    }

    #[rstest]
    #[case(vec![], None, None)]
    #[case(vec![3], Some(3), Some(3))]
    #[case(vec![2, 1, 2], Some(1), Some(2))]
    #[case(vec![-4, 9, 0], Some(-4), Some(9))]
    fn test_natural_order(#[case] input: Vec<i32>, #[case] expected_min: Option<i32>, #[case] expected_max: Option<i32>) {
        assert_eq!(min(&mut source::from_iter(input.clone())), expected_min);
        assert_eq!(max(&mut source::from_iter(input)), expected_max);
    }
}
