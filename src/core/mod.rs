// Core algorithm exports
pub mod matcher;
pub mod names;
pub mod scoring;
pub mod subjects;

pub use matcher::{Matcher, MIN_MATCHES, MAX_MATCHES, MAX_COMMON_SUBJECTS};
pub use names::{draw_names, SAMPLE_NAMES};
pub use scoring::{adjust_similarity, base_similarity};
pub use subjects::pick_common_subjects;
