//! Grouped count synthesis for the bar charts

use crate::output::GroupSample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of groups in the bar chart dataset
pub const GROUP_COUNT: usize = 10;

/// Exclusive upper bound for sampled counts
const COUNT_RANGE: u32 = 100;

/// Generates one uniformly sampled count per group
///
/// Group names follow the tutorial convention `group_a` through `group_j`.
/// The same seed always produces the same counts.
pub fn generate(seed: u64) -> Vec<GroupSample> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..GROUP_COUNT)
        .map(|index| {
            let letter = (b'a' + index as u8) as char;
            GroupSample {
                name: format!("group_{}", letter),
                count: rng.gen_range(0..COUNT_RANGE),
            }
        })
        .collect()
}
