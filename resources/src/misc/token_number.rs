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

/// Display number handed to the patient when a token is issued.
///
/// A `T` followed by the last six digits of the issuance timestamp in
/// milliseconds, e.g. `T400000`.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct TokenNumber(String);

impl TokenNumber {
    pub fn generate(timestamp: DateTime<Utc>) -> Self {
        Self(format!("T{:06}", timestamp.timestamp_millis() % 1_000_000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TokenNumber {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> TryFrom<&'a str> for TokenNumber {
    type Error = &'a str;

    fn try_from(v: &'a str) -> Result<Self, Self::Error> {
        if check_str(v) {
            Ok(Self(v.to_owned()))
        } else {
            Err(v)
        }
    }
}

impl TryFrom<String> for TokenNumber {
    type Error = String;

    fn try_from(v: String) -> Result<Self, Self::Error> {
        if check_str(&v) {
            Ok(Self(v))
        } else {
            Err(v)
        }
    }
}

impl From<TokenNumber> for String {
    fn from(v: TokenNumber) -> Self {
        v.0
    }
}

impl Display for TokenNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TokenNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Self::try_from(s).map_err(|err| D::Error::custom(format!("Invalid token number: {}", err)))
    }
}

fn check_str(s: &str) -> bool {
    lazy_static! {
        static ref RX: Regex = Regex::new(r#"^T[0-9]{6}$"#).unwrap();
    }

    RX.is_match(s)
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn generate() {
        let timestamp = DateTime::parse_from_rfc3339("2021-03-01T10:00:00.123Z")
            .unwrap()
            .with_timezone(&Utc);

        let number = TokenNumber::generate(timestamp);

        assert_eq!(number.as_str(), "T800123");
    }

    #[test]
    fn parse() {
        assert!(TokenNumber::try_from("T123456").is_ok());
        assert!(TokenNumber::try_from("T12345").is_err());
        assert!(TokenNumber::try_from("T1234567").is_err());
        assert!(TokenNumber::try_from("123456").is_err());
    }
}
