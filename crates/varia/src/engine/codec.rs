//! Mixed-radix composition codec.
//!
//! The foundation everything else builds on: a bijection between a single
//! integer id and a tuple of per-dimension indices. Indices are the digits
//! of a mixed-radix number, least-significant dimension first, so dimension
//! 0 is the fastest-varying digit.
//!
//! Ids outside `[0, total)` are wrapped via `id mod total` rather than
//! rejected, so navigation arithmetic ("next", "shuffle") never needs to
//! special-case overflow. Callers that need strict bounds must check before
//! wrapping.

/// Product of sizes: the number of addressable combinations.
///
/// Sizes are effective sizes, already floored to one per dimension, so the
/// result is at least one even for an empty size list. Overflow is ruled
/// out at assembly time against the full (largest possible) sizes.
pub fn total(sizes: &[u64]) -> u64 {
    sizes.iter().product::<u64>().max(1)
}

/// Encode per-dimension indices as a single id.
///
/// `id = Σ indices[k] · (Π s_j for j < k)`. Each index is taken modulo its
/// size so the result is always within `[0, total)`.
pub fn encode(sizes: &[u64], indices: &[usize]) -> u64 {
    debug_assert_eq!(sizes.len(), indices.len());

    let mut id: u64 = 0;
    let mut place: u64 = 1;
    for (&size, &index) in sizes.iter().zip(indices) {
        id += (index as u64 % size) * place;
        place *= size;
    }
    id
}

/// Decode an id into per-dimension indices via repeated divmod.
///
/// The id is wrapped into `[0, total)` first; the returned wrapped id is
/// what the indices actually encode.
pub fn decode(sizes: &[u64], id: u64) -> (u64, Vec<usize>) {
    let wrapped = id % total(sizes);

    let mut indices = Vec::with_capacity(sizes.len());
    let mut rest = wrapped;
    for &size in sizes {
        indices.push((rest % size) as usize);
        rest /= size;
    }

    (wrapped, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dimension_is_identity() {
        let sizes = [7];
        for i in 0..7 {
            let (wrapped, digits) = decode(&sizes, i);
            assert_eq!(wrapped, i);
            assert_eq!(digits, vec![i as usize]);
            assert_eq!(encode(&sizes, &digits), i);
        }
    }

    #[test]
    fn dimension_zero_is_fastest_varying() {
        let sizes = [4, 2];
        let (_, digits) = decode(&sizes, 1);
        assert_eq!(digits, vec![1, 0]);
        let (_, digits) = decode(&sizes, 4);
        assert_eq!(digits, vec![0, 1]);
    }

    #[test]
    fn wraps_out_of_range_ids() {
        let sizes = [4, 2];
        let (wrapped, digits) = decode(&sizes, 8 + 5);
        assert_eq!(wrapped, 5);
        assert_eq!(digits, vec![1, 1]);
    }

    #[test]
    fn empty_size_list_has_total_one() {
        assert_eq!(total(&[]), 1);
        let (wrapped, digits) = decode(&[], 42);
        assert_eq!(wrapped, 0);
        assert!(digits.is_empty());
    }
}
