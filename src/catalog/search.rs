//! Search algorithms over record titles
//!
//! Matching is exact and case-sensitive.

/// O(n) scan for an exact title.
pub fn linear_search<'a, I>(titles: I, target: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    titles.into_iter().any(|t| t == target)
}

/// Binary search over titles already sorted ascending.
pub fn binary_search<T: AsRef<str>>(sorted: &[T], target: &str) -> bool {
    // half-open range [lo, hi)
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = sorted[mid].as_ref();
        if candidate == target {
            return true;
        }
        if candidate < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_search() {
        let titles = ["Mathematics", "Art", "Art"];
        assert!(linear_search(titles, "Art"));
        assert!(!linear_search(titles, "art"));
        assert!(!linear_search(Vec::<&str>::new(), "Art"));
    }

    #[test]
    fn test_binary_search_every_position() {
        let sorted = ["A", "B", "C", "D", "E"];
        for t in sorted {
            assert!(binary_search(&sorted, t), "{}", t);
        }
        assert!(!binary_search(&sorted, "0"));
        assert!(!binary_search(&sorted, "BB"));
        assert!(!binary_search(&sorted, "Z"));
    }

    #[test]
    fn test_binary_search_empty_and_single() {
        let empty: [&str; 0] = [];
        assert!(!binary_search(&empty, "A"));
        assert!(binary_search(&["A"], "A"));
        assert!(!binary_search(&["A"], "B"));
    }

    #[test]
    fn test_binary_search_duplicates_and_empty_title() {
        let sorted = ["", "A", "A", "A", "B"];
        assert!(binary_search(&sorted, "A"));
        assert!(binary_search(&sorted, ""));
    }
}
