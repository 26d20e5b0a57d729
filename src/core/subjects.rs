use rand::{seq::SliceRandom, Rng};

/// Maximum draws taken from the requester's strong subjects
const MAX_STRONG_DRAWS: usize = 3;
/// Maximum draws taken from the subjects the requester needs help with
const MAX_HELP_DRAWS: usize = 2;
const STRONG_KEEP_PROBABILITY: f64 = 0.7;
const HELP_KEEP_PROBABILITY: f64 = 0.6;

/// Pick the subjects a synthetic match has in common with the requester
///
/// Each draw is kept with a fixed probability and then takes a uniformly
/// random subject, so the same subject may come up twice; repeats are
/// dropped. When nothing survives and strong subjects exist, the first
/// strong subject is used so every match shares at least one.
pub fn pick_common_subjects<R: Rng>(
    rng: &mut R,
    strong_subjects: &[String],
    help_subjects: &[String],
) -> Vec<String> {
    let mut common = Vec::new();

    sample_into(
        rng,
        strong_subjects,
        MAX_STRONG_DRAWS,
        STRONG_KEEP_PROBABILITY,
        &mut common,
    );
    sample_into(
        rng,
        help_subjects,
        MAX_HELP_DRAWS,
        HELP_KEEP_PROBABILITY,
        &mut common,
    );

    if common.is_empty() {
        if let Some(first) = strong_subjects.first() {
            common.push(first.clone());
        }
    }

    common
}

#[inline]
fn sample_into<R: Rng>(
    rng: &mut R,
    pool: &[String],
    max_draws: usize,
    keep_probability: f64,
    common: &mut Vec<String>,
) {
    for _ in 0..pool.len().min(max_draws) {
        if !rng.gen_bool(keep_probability) {
            continue;
        }
        if let Some(subject) = pool.choose(rng) {
            if !common.contains(subject) {
                common.push(subject.clone());
            }
        }
    }
}
