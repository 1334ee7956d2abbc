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
use std::str::FromStr;

use regex::Regex;
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize};

/// Time of day in 24-hour `HH:MM` form.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct SlotTime(String);

impl SlotTime {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for SlotTime {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for SlotTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if check_str(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(s.to_owned())
        }
    }
}

impl<'a> TryFrom<&'a str> for SlotTime {
    type Error = &'a str;

    fn try_from(v: &'a str) -> Result<Self, Self::Error> {
        if check_str(v) {
            Ok(Self(v.to_owned()))
        } else {
            Err(v)
        }
    }
}

impl TryFrom<String> for SlotTime {
    type Error = String;

    fn try_from(v: String) -> Result<Self, Self::Error> {
        if check_str(&v) {
            Ok(Self(v))
        } else {
            Err(v)
        }
    }
}

impl From<SlotTime> for String {
    fn from(v: SlotTime) -> Self {
        v.0
    }
}

impl Display for SlotTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Self::try_from(s).map_err(|err| D::Error::custom(format!("Invalid time: {}", err)))
    }
}

fn check_str(s: &str) -> bool {
    lazy_static! {
        static ref RX: Regex = Regex::new(r#"^([01][0-9]|2[0-3]):[0-5][0-9]$"#).unwrap();
    }

    RX.is_match(s)
}
