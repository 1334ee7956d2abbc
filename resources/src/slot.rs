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

use serde::{Deserialize, Serialize};

use super::primitives::{IsoDate, SlotTime};

/// Bookable time unit on a given date.
///
/// `available` is authoritative for selectability; `booking_count` is
/// informational display data and is not derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: SlotTime,
    pub label: String,
    pub available: bool,
    pub booking_count: u32,
}

/// Entry of the bookable-dates strip shown by the date picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDate {
    pub date: IsoDate,
    pub day: u32,
    pub day_name: String,
    pub month: String,
    pub is_today: bool,
}
