use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Study-preference form submitted to the match endpoint
///
/// Only `year` and `branch` are checked. The scheduling and location fields
/// are accepted so clients can send the whole form, but generation ignores them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub branch: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "strongSubjects")]
    pub strong_subjects: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", rename = "helpSubjects")]
    pub help_subjects: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", rename = "studyStyle")]
    pub study_style: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "groupSize")]
    pub group_size: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "timeSlots")]
    pub time_slots: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "sessionPreference")]
    pub session_preference: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "branchPreference")]
    pub branch_preference: String,
}

impl MatchRequest {
    /// The declared study style, if the requester gave one
    pub fn declared_style(&self) -> Option<&str> {
        if self.study_style.is_empty() {
            None
        } else {
            Some(&self.study_style)
        }
    }
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
