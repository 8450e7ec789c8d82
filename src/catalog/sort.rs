//! Sorting algorithms for presentation copies
//!
//! Both take a strict "less than" predicate. Neither is guaranteed to be
//! stable for equal keys.

/// Bubble sort: adjacent-swap passes, stopping early once a pass makes no swap.
pub fn bubble_sort_by<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if less(&items[j + 1], &items[j]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort: repeatedly moves the minimum of the unsorted tail forward.
pub fn selection_sort_by<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if less(&items[j], &items[min]) {
                min = j;
            }
        }
        items.swap(i, min);
    }
}
