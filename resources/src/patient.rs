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

use super::{misc::PatientId, types::PatientStatus};

/// Raw form fields captured by the patient information step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientForm {
    pub name: String,
    pub email: String,
    pub phone: String,

    #[serde(default)]
    pub reason: String,
}

/// Registered patient record as echoed by the registration backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub status: PatientStatus,
}

impl Patient {
    pub fn from_form(id: PatientId, form: &PatientForm, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            reason: form.reason.clone(),
            created_at,
            status: PatientStatus::Registered,
        }
    }
}

/// Response envelope of `POST /patients`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSubmitted {
    pub success: bool,
    pub patient_id: PatientId,
    pub message: String,
    pub patient: Patient,
}
