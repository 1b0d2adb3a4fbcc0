use crate::models::status::TimesheetStatus;
use crate::models::user::Session;
use serde::{Deserialize, Serialize};

/// One hours-worked record, stored in the `timesheets` JSON array.
///
/// Field names and shapes follow the stored blob: camelCase keys, `id` and
/// `contractorId` written as strings, review fields omitted while absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    #[serde(with = "id_string")]
    pub id: u64,
    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub contractor_id: String,
    pub contractor_name: String,
    pub date: String,
    pub project: String,
    pub hours_worked: f64,
    #[serde(default)]
    pub comments: String,
    pub status: TimesheetStatus,
    pub submitted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

impl Timesheet {
    /// Contractor dashboard ownership: id match, or name equality as fallback.
    pub fn is_owned_by(&self, session: &Session) -> bool {
        self.contractor_id == session.id || self.contractor_name == session.username
    }
}

/// Validated input of the submission form.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetDraft {
    pub date: chrono::NaiveDate,
    pub project: String,
    pub hours_worked: f64,
    pub comments: String,
}

/// `id` is a number in memory and a decimal string on disk.
/// Older blobs may carry plain numbers, so both are accepted when reading.
mod id_string {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(id: &u64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&id.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = u64;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a positive integer or a string holding one")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
                u64::try_from(v).map_err(|_| E::custom(format!("negative id {v}")))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
                if v >= 0.0 && v.fract() == 0.0 {
                    Ok(v as u64)
                } else {
                    Err(E::custom(format!("invalid id {v}")))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
                v.trim()
                    .parse()
                    .map_err(|_| E::custom(format!("invalid id '{v}'")))
            }
        }

        d.deserialize_any(IdVisitor)
    }
}

/// Accept a string, a number or null for identifiers written by other tools.
mod lenient_string {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}
