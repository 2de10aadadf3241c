//! Field extraction for the site's forms

use chrono::{DateTime, Utc};
use mindconnect_store::{
    CheckinRecord, Consent, MoodScore, SupportCategory, UrgencyLevel, UserProfile,
};
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Field names used by the forms
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const AGE: &str = "age";
    pub const LOCATION: &str = "location";
    pub const SUPPORT_TYPES: &str = "supportTypes";
    pub const URGENCY_LEVEL: &str = "urgencyLevel";
    pub const ADDITIONAL_INFO: &str = "additionalInfo";
    pub const PRIVACY: &str = "privacy";
    pub const NEWSLETTER: &str = "newsletter";

    pub const MOOD_RATING: &str = "moodRating";
    pub const ACTIVITIES: &str = "activities";
    pub const NOTES: &str = "notes";

    pub const SEARCH_LOCATION: &str = "searchLocation";
    pub const SUPPORT_TYPE: &str = "supportType";
    pub const MEETING_FORMAT: &str = "meetingFormat";
}

/// Submitted form fields. A name may repeat (checkbox groups), so values
/// are kept in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// Builder form of [`append`](Self::append)
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.append(name, value);
        self
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn required(&self, name: &str) -> Result<String, IntakeError> {
        self.text(name)
            .ok_or_else(|| IntakeError::validation(name, "this field is required"))
    }

    /// Checkbox semantics: present and not explicitly off
    fn checked(&self, name: &str) -> bool {
        match self.get(name).map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) => !matches!(v.as_str(), "" | "off" | "false" | "0" | "no"),
            None => false,
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.append(name.as_ref(), value.as_ref());
        }
        data
    }
}

/// Parameters of a support search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportQuery {
    pub location: Option<String>,
    pub support_type: Option<String>,
    pub meeting_format: Option<String>,
}

impl SupportQuery {
    /// Location for user-facing messages
    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or("your area")
    }
}

/// Build a new profile from the registration form
pub fn extract_registration(
    data: &FormData,
    now: DateTime<Utc>,
) -> Result<UserProfile, IntakeError> {
    let full_name = data.required(fields::FULL_NAME)?;
    let email = data.required(fields::EMAIL)?;
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(IntakeError::validation(fields::EMAIL, "enter a valid email address"));
    }

    let age = match data.text(fields::AGE) {
        Some(raw) => {
            let age: i64 = raw
                .parse()
                .map_err(|_| IntakeError::validation(fields::AGE, "must be a whole number"))?;
            match u8::try_from(age) {
                Ok(age) if (1..=120).contains(&age) => Some(age),
                _ => {
                    return Err(IntakeError::validation(
                        fields::AGE,
                        "must be between 1 and 120",
                    ))
                }
            }
        }
        None => None,
    };

    let urgency = match data.text(fields::URGENCY_LEVEL) {
        Some(raw) => raw.parse::<UrgencyLevel>()?,
        None => UrgencyLevel::default(),
    };

    let mut profile = UserProfile::new(&full_name, &email, now).with_urgency(urgency);
    for tag in data.get_all(fields::SUPPORT_TYPES) {
        profile.support_preferences.insert(tag.parse::<SupportCategory>()?);
    }

    profile.consent = Consent {
        privacy: data.checked(fields::PRIVACY),
        newsletter: data.checked(fields::NEWSLETTER),
    };
    if !profile.consent.privacy {
        return Err(IntakeError::validation(
            fields::PRIVACY,
            "you must accept the privacy policy",
        ));
    }

    profile.phone = data.text(fields::PHONE);
    profile.age = age;
    profile.location = data.text(fields::LOCATION);
    profile.notes = data.text(fields::ADDITIONAL_INFO);
    Ok(profile)
}

/// Build a check-in record from the daily check-in form
pub fn extract_checkin(
    data: &FormData,
    now: DateTime<Utc>,
) -> Result<CheckinRecord, IntakeError> {
    let raw = data.required(fields::MOOD_RATING)?;
    let value: i64 = raw.parse().map_err(|_| {
        IntakeError::validation(fields::MOOD_RATING, "must be a number from 1 to 10")
    })?;
    let mood =
        MoodScore::new(value).map_err(|e| IntakeError::validation(fields::MOOD_RATING, e))?;

    let mut record = CheckinRecord::new(mood, now);
    for activity in data.get_all(fields::ACTIVITIES) {
        let activity = activity.trim();
        if !activity.is_empty() {
            record.activities.insert(activity.to_string());
        }
    }
    record.notes = data.text(fields::NOTES);
    Ok(record)
}

/// Every search field is optional
pub fn extract_support_query(data: &FormData) -> SupportQuery {
    SupportQuery {
        location: data.text(fields::SEARCH_LOCATION),
        support_type: data.text(fields::SUPPORT_TYPE),
        meeting_format: data.text(fields::MEETING_FORMAT),
    }
}

/// Whether a change of the urgency field should offer crisis support
pub fn urgency_requires_escalation(value: &str) -> bool {
    value
        .parse::<UrgencyLevel>()
        .map(|level| level.is_urgent())
        .unwrap_or(false)
}
