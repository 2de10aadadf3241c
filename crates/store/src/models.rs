//! Domain records held by the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::StoreError;

/// How soon the user says they need help
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    Routine,
    Elevated,
    Urgent,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Routine => "routine",
            UrgencyLevel::Elevated => "elevated",
            UrgencyLevel::Urgent => "urgent",
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, UrgencyLevel::Urgent)
    }
}

impl FromStr for UrgencyLevel {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "routine" => Ok(UrgencyLevel::Routine),
            "elevated" => Ok(UrgencyLevel::Elevated),
            "urgent" => Ok(UrgencyLevel::Urgent),
            other => Err(StoreError::UnknownUrgency(other.to_string())),
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category tag shared by declared support preferences and recorded connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportCategory {
    Peer,
    Healthcare,
    Counseling,
    Faith,
    Ngo,
    Group,
    Appointment,
    Ministry,
}

impl SupportCategory {
    pub const ALL: [SupportCategory; 8] = [
        SupportCategory::Peer,
        SupportCategory::Healthcare,
        SupportCategory::Counseling,
        SupportCategory::Faith,
        SupportCategory::Ngo,
        SupportCategory::Group,
        SupportCategory::Appointment,
        SupportCategory::Ministry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCategory::Peer => "peer",
            SupportCategory::Healthcare => "healthcare",
            SupportCategory::Counseling => "counseling",
            SupportCategory::Faith => "faith",
            SupportCategory::Ngo => "ngo",
            SupportCategory::Group => "group",
            SupportCategory::Appointment => "appointment",
            SupportCategory::Ministry => "ministry",
        }
    }
}

impl FromStr for SupportCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SupportCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or(StoreError::UnknownCategory(needle))
    }
}

impl fmt::Display for SupportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported mood, always within 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, StoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(StoreError::InvalidMood(value))
        }
    }

    /// Pin `value` into range instead of rejecting it
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for MoodScore {
    type Error = StoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MoodScore::new(value)
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> Self {
        score.0
    }
}

/// Consent flags captured at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Consent {
    /// Accepted the privacy policy
    pub privacy: bool,

    /// Opted in to the newsletter
    pub newsletter: bool,
}

/// The registered user of the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Generated identifier
    pub id: Uuid,

    pub full_name: String,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Kinds of support the user asked for
    pub support_preferences: BTreeSet<SupportCategory>,

    pub urgency: UrgencyLevel,

    /// Free-text notes from the registration form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Creation time, never changed afterwards
    pub registered_at: DateTime<Utc>,

    pub consent: Consent,
}

impl UserProfile {
    /// Create a profile with a fresh id, registered at `registered_at`
    pub fn new(full_name: &str, email: &str, registered_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: None,
            age: None,
            location: None,
            support_preferences: BTreeSet::new(),
            urgency: UrgencyLevel::default(),
            notes: None,
            registered_at,
            consent: Consent::default(),
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_preference(mut self, category: SupportCategory) -> Self {
        self.support_preferences.insert(category);
        self
    }

    pub fn with_urgency(mut self, urgency: UrgencyLevel) -> Self {
        self.urgency = urgency;
        self
    }
}

/// One daily check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub mood: MoodScore,
    pub activities: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CheckinRecord {
    pub fn new(mood: MoodScore, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            mood,
            activities: BTreeSet::new(),
            notes: None,
        }
    }

    pub fn with_activity(mut self, activity: &str) -> Self {
        self.activities.insert(activity.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// A request to connect with some kind of support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportConnection {
    pub category: SupportCategory,

    /// Group, provider or ministry id when the action targets one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    pub connected_at: DateTime<Utc>,
}

impl SupportConnection {
    pub fn new(category: SupportCategory, connected_at: DateTime<Utc>) -> Self {
        Self {
            category,
            target: None,
            connected_at,
        }
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_score_bounds() {
        assert!(MoodScore::new(1).is_ok());
        assert_eq!(MoodScore::new(10).unwrap().value(), 10);
        assert_eq!(MoodScore::new(0), Err(StoreError::InvalidMood(0)));
        assert_eq!(MoodScore::new(11), Err(StoreError::InvalidMood(11)));
        assert_eq!(MoodScore::clamped(-3).value(), 1);
        assert_eq!(MoodScore::clamped(99).value(), 10);
    }

    #[test]
    fn test_mood_score_rejects_out_of_range_json() {
        let parsed: Result<MoodScore, _> = serde_json::from_str("42");
        assert!(parsed.is_err());
        let parsed: MoodScore = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.value(), 7);
    }

    #[test]
    fn test_urgency_parsing() {
        assert_eq!("urgent".parse::<UrgencyLevel>(), Ok(UrgencyLevel::Urgent));
        assert_eq!(" Elevated ".parse::<UrgencyLevel>(), Ok(UrgencyLevel::Elevated));
        assert_eq!(
            "soon".parse::<UrgencyLevel>(),
            Err(StoreError::UnknownUrgency("soon".to_string()))
        );
    }

    #[test]
    fn test_support_category_round_trips_through_str() {
        for category in SupportCategory::ALL {
            assert_eq!(category.as_str().parse::<SupportCategory>(), Ok(category));
        }
        assert!("astrology".parse::<SupportCategory>().is_err());
    }

    #[test]
    fn test_profile_serializes_lowercase_tags() {
        let profile = UserProfile::new("Ada", "ada@example.org", Utc::now())
            .with_preference(SupportCategory::Ngo)
            .with_urgency(UrgencyLevel::Elevated);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["support_preferences"][0], "ngo");
        assert_eq!(json["urgency"], "elevated");
        assert!(json.get("phone").is_none());
    }
}
