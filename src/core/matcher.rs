use rand::{seq::SliceRandom, Rng};
use crate::models::{MatchRequest, MatchResult, SimilarityBonuses, StudyStyle};
use crate::core::{
    names::draw_names,
    scoring::{adjust_similarity, base_similarity},
    subjects::pick_common_subjects,
};

/// Smallest number of matches handed back per request
pub const MIN_MATCHES: usize = 3;
/// Largest number of matches handed back per request
pub const MAX_MATCHES: usize = 5;
/// Cap on the subjects listed for one match
pub const MAX_COMMON_SUBJECTS: usize = 4;
/// Chance of ignoring the declared style and picking from the fixed styles
const RANDOM_STYLE_PROBABILITY: f64 = 0.6;

/// Synthetic match generator
///
/// # Pipeline Stages
/// 1. Pick how many matches to produce
/// 2. Draw distinct names
/// 3. Attribute subjects and a study style to each
/// 4. Score and rank
///
/// The random source is supplied by the caller, so a seeded rng gives a
/// reproducible result.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    bonuses: SimilarityBonuses,
}

impl Matcher {
    pub fn new(bonuses: SimilarityBonuses) -> Self {
        Self { bonuses }
    }

    pub fn bonuses(&self) -> &SimilarityBonuses {
        &self.bonuses
    }

    /// Generate 3 to 5 synthetic matches for a request
    ///
    /// # Returns
    /// Matches sorted by similarity, highest first
    pub fn generate_matches<R: Rng>(&self, request: &MatchRequest, rng: &mut R) -> Vec<MatchResult> {
        let count = rng.gen_range(MIN_MATCHES..=MAX_MATCHES);
        let declared_style = request.declared_style();

        let mut matches: Vec<MatchResult> = draw_names(rng, count)
            .into_iter()
            .map(|name| {
                let base = base_similarity(rng);

                let mut common_subjects = pick_common_subjects(
                    rng,
                    &request.strong_subjects,
                    &request.help_subjects,
                );

                let study_style = choose_study_style(rng, declared_style);
                let style_matches = declared_style == Some(study_style.as_str());

                let similarity = adjust_similarity(
                    base,
                    style_matches,
                    common_subjects.len(),
                    &self.bonuses,
                );

                common_subjects.truncate(MAX_COMMON_SUBJECTS);

                MatchResult {
                    name: name.to_string(),
                    similarity,
                    common_subjects,
                    study_style,
                }
            })
            .collect();

        matches.sort_by(|a, b| b.similarity.cmp(&a.similarity));

        matches
    }
}

/// Pick a match's study style
///
/// Most of the time a fixed style is drawn at random; otherwise the
/// requester's own style is echoed back when they declared one.
fn choose_study_style<R: Rng>(rng: &mut R, declared: Option<&str>) -> String {
    if !rng.gen_bool(RANDOM_STYLE_PROBABILITY) {
        if let Some(style) = declared {
            return style.to_string();
        }
    }

    StudyStyle::ALL
        .choose(rng)
        .copied()
        .unwrap_or(StudyStyle::Mixed)
        .to_string()
}
