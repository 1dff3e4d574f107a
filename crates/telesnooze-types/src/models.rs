use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` like a missing field: the type's zero value. Payload rules
/// then report empty fields instead of the decoder rejecting the body.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Registration payload. Missing or `null` fields decode as empty strings so
/// that the "all fields filled" rule reports them instead of the JSON decoder.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

/// Weekly recurrence: one flag per day, Sunday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekMask {
    #[serde(deserialize_with = "null_as_default")]
    pub sunday: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub monday: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tuesday: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub wednesday: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub thursday: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub friday: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub saturday: bool,
}

impl WeekMask {
    /// All seven `(day, flag)` pairs in Sunday-first order.
    pub fn days(&self) -> [(Weekday, bool); 7] {
        [
            (Weekday::Sun, self.sunday),
            (Weekday::Mon, self.monday),
            (Weekday::Tue, self.tuesday),
            (Weekday::Wed, self.wednesday),
            (Weekday::Thu, self.thursday),
            (Weekday::Fri, self.friday),
            (Weekday::Sat, self.saturday),
        ]
    }

    pub fn is_active_on(&self, day: Weekday) -> bool {
        match day {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }

    pub fn any(&self) -> bool {
        self.days().iter().any(|(_, on)| *on)
    }
}

impl From<[bool; 7]> for WeekMask {
    fn from([sunday, monday, tuesday, wednesday, thursday, friday, saturday]: [bool; 7]) -> Self {
        Self {
            sunday,
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
        }
    }
}

impl From<WeekMask> for [bool; 7] {
    fn from(mask: WeekMask) -> Self {
        mask.days().map(|(_, on)| on)
    }
}

/// An alarm as it travels over the wire and out of the database.
///
/// `alarm_id` is assigned by the server on create and addresses the row on
/// update. On the wire it is `Alarm_ID`; `alarm_id` is accepted as input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alarm {
    #[serde(rename = "Alarm_ID", alias = "alarm_id", deserialize_with = "null_as_default")]
    pub alarm_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub days: WeekMask,
}

/// Response shape of `retrieveAlarms`. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmCollection {
    pub user_id: String,
    pub alarms: Vec<Alarm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_mask_reports_active_days() {
        let mask = WeekMask {
            monday: true,
            friday: true,
            ..WeekMask::default()
        };
        assert!(mask.any());
        assert!(mask.is_active_on(Weekday::Mon));
        assert!(mask.is_active_on(Weekday::Fri));
        assert!(!mask.is_active_on(Weekday::Sun));

        let active: Vec<Weekday> = mask
            .days()
            .iter()
            .filter(|(_, on)| *on)
            .map(|(day, _)| *day)
            .collect();
        assert_eq!(active, vec![Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn empty_mask_has_no_active_day() {
        assert!(!WeekMask::default().any());
    }

    #[test]
    fn array_conversion_is_sunday_first() {
        let mask = WeekMask::from([true, false, false, false, false, false, true]);
        assert!(mask.sunday && mask.saturday);
        assert!(!mask.monday);

        let flags: [bool; 7] = mask.into();
        assert_eq!(flags, [true, false, false, false, false, false, true]);
    }

    #[test]
    fn alarm_missing_fields_decode_to_defaults() {
        let alarm: Alarm = serde_json::from_str(r#"{"user_id":"u1","time":"2024-01-01T07:00:00Z"}"#).unwrap();
        assert_eq!(alarm.user_id, "u1");
        assert!(alarm.alarm_id.is_empty());
        assert_eq!(alarm.days, WeekMask::default());
    }

    #[test]
    fn alarm_id_serialized_under_legacy_key() {
        let alarm: Alarm = serde_json::from_str(
            r#"{"Alarm_ID":"a1","user_id":"u1","time":"t","days":{"monday":true}}"#,
        )
        .unwrap();
        assert_eq!(alarm.alarm_id, "a1");
        assert!(alarm.days.monday);

        let json = serde_json::to_value(&alarm).unwrap();
        assert_eq!(json["Alarm_ID"], "a1");
        assert!(json.get("alarm_id").is_none());
        assert_eq!(json["days"]["monday"], true);
    }

    #[test]
    fn null_fields_decode_as_zero_values() {
        let alarm: Alarm = serde_json::from_str(
            r#"{"Alarm_ID":null,"user_id":"u1","time":null,"days":null}"#,
        )
        .unwrap();
        assert!(alarm.alarm_id.is_empty());
        assert!(alarm.time.is_empty());
        assert_eq!(alarm.days, WeekMask::default());

        let mask: WeekMask = serde_json::from_str(r#"{"monday":null,"friday":true}"#).unwrap();
        assert!(!mask.monday);
        assert!(mask.friday);

        let account: Account = serde_json::from_str(
            r#"{"email":null,"username":"alice","password":"pw","phone":null}"#,
        )
        .unwrap();
        assert!(account.email.is_empty());
        assert!(account.phone.is_empty());
        assert_eq!(account.username, "alice");
    }

    #[test]
    fn wrong_types_still_fail_to_decode() {
        assert!(serde_json::from_str::<WeekMask>(r#"{"monday":"yes"}"#).is_err());
        assert!(serde_json::from_str::<Account>(r#"{"email":5}"#).is_err());
    }

    #[test]
    fn account_debug_hides_password() {
        let account = Account {
            email: "a@b.com".into(),
            username: "alice".into(),
            password: "pw123".into(),
            phone: "1234567890".into(),
        };
        let printed = format!("{:?}", account);
        assert!(!printed.contains("pw123"));
        assert!(printed.contains("alice"));
    }
}
