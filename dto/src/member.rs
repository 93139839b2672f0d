use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A club member, as persisted and as exposed by the API.
/// Optional fields are serialized as `null` when absent.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: String,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    membership_type: Option<String>,
    join_date: DateTime<Utc>,
}

impl Member {
    pub fn new(
        id: String,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        membership_type: Option<String>,
        join_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            membership_type,
            join_date,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::TimeZone;

    pub const MEMBER_ID: &str = "0ea9a5fb-0f46-4057-902a-2552ed956bde";

    pub fn get_expected_member() -> Member {
        Member {
            id: MEMBER_ID.to_owned(),
            name: Some("Ann".to_owned()),
            email: Some("ann@x.com".to_owned()),
            phone: None,
            membership_type: Some("Gold".to_owned()),
            join_date: Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap(),
        }
    }

}
