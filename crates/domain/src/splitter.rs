// crates/domain/src/splitter.rs
use num_words_shared_kernel::Triplet;

/// Splits `number` into base-1000 groups, least-significant first.
///
/// `0` yields no groups; callers spell zero before getting here.
pub fn split_triplets(number: u64) -> Vec<Triplet> {
    let mut groups = Vec::with_capacity(7);
    let mut rest = number;
    while rest > 0 {
        groups.push(Triplet::low_group_of(rest));
        rest /= Triplet::BASE;
    }
    groups
}

/// Inverse of [`split_triplets`]. `None` if the groups overflow `u64`.
pub fn join_triplets(groups: &[Triplet]) -> Option<u64> {
    groups.iter().rev().try_fold(0u64, |acc, group| {
        acc.checked_mul(Triplet::BASE)?
            .checked_add(u64::from(*group))
    })
}
