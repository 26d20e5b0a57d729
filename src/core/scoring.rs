use rand::Rng;
use crate::models::SimilarityBonuses;

/// Lowest base similarity a match can be given
pub const MIN_BASE_SIMILARITY: u8 = 70;
/// Base similarity is drawn strictly below this value
pub const MAX_BASE_SIMILARITY: u8 = 100;
/// Highest similarity a match can end up with
pub const MAX_SIMILARITY: u8 = 98;

/// Draw the starting similarity score, uniform in [70, 100)
#[inline]
pub fn base_similarity<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(MIN_BASE_SIMILARITY..MAX_BASE_SIMILARITY)
}

/// Apply style and subject bonuses to a base score
///
/// Three or more shared subjects earn the larger bonus; exactly two earn the
/// smaller one. The result never exceeds `bonuses.cap`.
pub fn adjust_similarity(
    base: u8,
    style_matches: bool,
    common_subject_count: usize,
    bonuses: &SimilarityBonuses,
) -> u8 {
    let mut score = base;

    if style_matches {
        score = score.saturating_add(bonuses.style_match);
    }

    if common_subject_count >= 3 {
        score = score.saturating_add(bonuses.many_subjects);
    } else if common_subject_count >= 2 {
        score = score.saturating_add(bonuses.some_subjects);
    }

    score.min(bonuses.cap)
}
