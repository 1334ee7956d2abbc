/*
 * Copyright (c) 2021 gematik GmbH
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *    http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize};

/// Identifier assigned to a patient record by the registration backend,
/// derived from the registration timestamp, e.g. `PAT-1706198400000`.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct PatientId(String);

impl PatientId {
    pub fn generate(timestamp: DateTime<Utc>) -> Self {
        Self(format!("PAT-{}", timestamp.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for PatientId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> TryFrom<&'a str> for PatientId {
    type Error = &'a str;

    fn try_from(v: &'a str) -> Result<Self, Self::Error> {
        if check_str(v) {
            Ok(Self(v.to_owned()))
        } else {
            Err(v)
        }
    }
}

impl TryFrom<String> for PatientId {
    type Error = String;

    fn try_from(v: String) -> Result<Self, Self::Error> {
        if check_str(&v) {
            Ok(Self(v))
        } else {
            Err(v)
        }
    }
}

impl From<PatientId> for String {
    fn from(v: PatientId) -> Self {
        v.0
    }
}

impl Display for PatientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PatientId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Self::try_from(s).map_err(|err| D::Error::custom(format!("Invalid patient id: {}", err)))
    }
}

fn check_str(s: &str) -> bool {
    lazy_static! {
        static ref RX: Regex = Regex::new(r#"^PAT-[0-9]+$"#).unwrap();
    }

    RX.is_match(s)
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn generate() {
        let timestamp = DateTime::parse_from_rfc3339("2021-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let id = PatientId::generate(timestamp);

        assert_eq!(id.as_str(), "PAT-1614592800000");
    }

    #[test]
    fn parse() {
        assert!(PatientId::try_from("PAT-1614592800000").is_ok());
        assert!(PatientId::try_from("PAT-").is_err());
        assert!(PatientId::try_from("APT-1614592800000").is_err());
        assert!(PatientId::try_from("1614592800000").is_err());
    }
}
