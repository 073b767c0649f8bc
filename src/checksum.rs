pub const CHECKSUM_WEIGHTS: &[u32] = &[2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Computes the check digit from the first 12 digits of a CNP.
///
/// Digits past the 12th are ignored. Returns `None` if fewer than 12 digits are given.
pub fn compute_check_digit(digits: impl IntoIterator<Item = u32>) -> Option<u32> {
    let mut count = 0;
    let mut calculated_checksum = 0;
    for (digit, weight) in digits.into_iter().zip(CHECKSUM_WEIGHTS) {
        calculated_checksum += weight * digit;
        count += 1;
    }
    if count < CHECKSUM_WEIGHTS.len() {
        return None;
    }

    calculated_checksum %= 11;
    if calculated_checksum == 10 {
        calculated_checksum = 1;
    }
    Some(calculated_checksum)
}
