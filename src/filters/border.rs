//! Reflect-101 border policy
//!
//! Out-of-range coordinates mirror around the edge sample without repeating
//! it (`dcb|abcd|cba`). Offsets wider than the line keep reflecting, so any
//! kernel extent is valid on any image size.

/// Map a possibly out-of-range coordinate onto a line of `len` samples
pub const fn reflect_101(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let wrapped = index.rem_euclid(period);
    if wrapped < len as isize {
        wrapped as usize
    } else {
        (period - wrapped) as usize
    }
}

/// Source index for every position of a line padded by `radius` on both sides
///
/// Entry `i` holds the sample that padded position `i` reads, so the centre
/// of output sample `x` sits at entry `x + radius`.
pub fn index_table(len: usize, radius: usize) -> Vec<usize> {
    (0..len + 2 * radius)
        .map(|i| reflect_101(i as isize - radius as isize, len))
        .collect()
}
