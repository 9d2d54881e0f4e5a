use std::cmp::Ordering;

/// Stable insertion sort.
///
/// The preference comparator is not a total order (candidates from two
/// repositories of equal priority each rank the other first), and the
/// standard library sorts may panic on such comparators. An element only
/// moves left past neighbours that compare `Greater`, so the result is fully
/// determined by the input order and the comparator.
pub(crate) fn insertion_sort_by<T>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_and_keeps_equal_elements_in_order() {
        let mut items = vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
        insertion_sort_by(&mut items, |a, b| a.0.cmp(&b.0));
        assert_eq!(items, vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]);
    }

    #[test]
    fn test_terminates_on_inconsistent_comparator() {
        let mut items = vec![1, 2, 3, 4];
        insertion_sort_by(&mut items, |_, _| Ordering::Greater);
        assert_eq!(items, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        insertion_sort_by(&mut empty, |a, b| a.cmp(b));
        assert!(empty.is_empty());

        let mut single = vec![7];
        insertion_sort_by(&mut single, |a, b| a.cmp(b));
        assert_eq!(single, vec![7]);
    }
}
