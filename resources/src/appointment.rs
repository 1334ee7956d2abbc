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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    misc::{AppointmentId, DoctorId, PatientId, TokenNumber},
    primitives::{IsoDate, SlotTime},
    types::AppointmentStatus,
};

/// Request body of `POST /appointments/token`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub date: IsoDate,
    pub time: SlotTime,

    #[serde(default)]
    pub reason: String,
}

/// Confirmed appointment with its display token, as issued by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub token_number: TokenNumber,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub date: IsoDate,
    pub time: SlotTime,
    pub reason: String,
    pub status: AppointmentStatus,

    /// Estimated wait after arrival, in minutes.
    pub estimated_wait_time: u32,
    pub created_at: DateTime<Utc>,
}

/// Response envelope of `POST /appointments/token`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssued {
    pub success: bool,
    pub token_number: TokenNumber,
    pub appointment_id: AppointmentId,
    pub message: String,
    pub appointment: Appointment,
}
