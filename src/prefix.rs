//! Running sums over the item sequence.

/// `sums[i] = items[0] + ... + items[i]`, accumulated in 64 bits.
#[inline]
pub fn running_sums(items: &[i32]) -> Vec<i64> {
    let mut sum = 0i64;
    items
        .iter()
        .map(|&item| {
            sum += i64::from(item);
            sum
        })
        .collect()
}

/// Sum of `items[start..=end]` recovered from running sums.
#[inline]
pub fn window_sum(sums: &[i64], start: usize, end: usize) -> i64 {
    if start == 0 {
        sums[end]
    } else {
        sums[end] - sums[start - 1]
    }
}
