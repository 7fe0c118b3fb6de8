use super::metrics::{Gender, MetricsError, UserMetrics};

const DEFAULT_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error(
        "Incomplete user profile. Please complete your profile with weight, height, age, and gender."
    )]
    Incomplete,
    #[error(transparent)]
    Invalid(#[from] MetricsError),
}

/// User profile as kept by the profile store. Stored profiles may be
/// partially filled in, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<i64>,
    pub gender: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn metrics(&self) -> Result<UserMetrics, ProfileError> {
        let (Some(weight), Some(height), Some(age), Some(gender)) =
            (self.weight, self.height, self.age, self.gender.as_deref())
        else {
            return Err(ProfileError::Incomplete);
        };
        if gender.trim().is_empty() {
            return Err(ProfileError::Incomplete);
        }

        Ok(UserMetrics::new(weight, height, age, Gender::parse(gender)?)?)
    }
}
