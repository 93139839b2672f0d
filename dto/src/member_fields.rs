use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Deserializer};

/// Partial set of member fields, as sent when creating or updating a member.
///
/// A missing field is left untouched on update, while an explicit `null` clears it.
/// The join date can't be cleared: a `null` join date is ignored.
/// Keys that are not member fields, `id` included, are ignored.
#[derive(Debug, Deserialize, Getters, Default, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberFields {
    #[serde(default, deserialize_with = "present")]
    name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    membership_type: Option<Option<String>>,
    join_date: Option<DateTime<Utc>>,
}

/// Only called for keys present in the body, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl MemberFields {
    /// Fields given as `None` are left out.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        membership_type: Option<String>,
        join_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name: name.map(Some),
            email: email.map(Some),
            phone: phone.map(Some),
            membership_type: membership_type.map(Some),
            join_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.membership_type.is_none()
            && self.join_date.is_none()
    }
}
