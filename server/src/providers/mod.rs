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

mod error;
mod policy;

pub mod http;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use resources::{
    misc::{DoctorId, PatientId, TokenNumber},
    patient::{Patient, PatientForm},
    primitives::IsoDate,
    Appointment, Doctor, TimeSlot, TokenRequest,
};

pub use error::Error;
pub use policy::{FixedOutcome, OutcomePolicy, RandomOutcome};

/// Patient registration backend.
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    /// Assigns a patient id, timestamps the record and stores it.
    async fn register(&self, form: &PatientForm) -> Result<Patient, Error>;

    async fn find(&self, id: &PatientId) -> Result<Patient, Error>;
}

/// Scheduling backend supplying the slot catalog for a date.
#[async_trait]
pub trait SlotProvider: Send + Sync {
    async fn list_slots(&self, doctor_id: &DoctorId, date: &IsoDate)
        -> Result<Vec<TimeSlot>, Error>;
}

/// Appointment backend issuing confirmation tokens.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, request: &TokenRequest) -> Result<Appointment, Error>;

    async fn find(&self, token_number: &TokenNumber) -> Result<Appointment, Error>;
}

/// Doctor profile backend.
#[async_trait]
pub trait DoctorDirectory: Send + Sync {
    async fn profile(&self, id: &DoctorId) -> Result<Doctor, Error>;
}

/// Capability bundle handed to the booking wizard and the HTTP service.
#[derive(Clone)]
pub struct Collaborators {
    pub patients: Arc<dyn PatientDirectory>,
    pub slots: Arc<dyn SlotProvider>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub doctors: Arc<dyn DoctorDirectory>,
}

impl Collaborators {
    /// Built-in mock services with the demo latency and failure rates.
    pub fn mock() -> Self {
        Self {
            patients: Arc::new(mock::MockPatientDirectory::new()),
            slots: Arc::new(mock::MockSlotProvider::new()),
            tokens: Arc::new(mock::MockAppointmentBook::new()),
            doctors: Arc::new(mock::MockDoctorDirectory::new()),
        }
    }

    /// Collaborators backed by a real backend reachable at `base_url`.
    pub fn http(base_url: &str) -> Result<Self, Error> {
        let client = crate::misc::create_reqwest_client()?;
        let base = base_url.trim_end_matches('/').to_owned();

        Ok(Self {
            patients: Arc::new(http::HttpPatientDirectory::new(client.clone(), base.clone())),
            slots: Arc::new(http::HttpSlotProvider::new(client.clone(), base.clone())),
            tokens: Arc::new(http::HttpTokenIssuer::new(client.clone(), base.clone())),
            doctors: Arc::new(http::HttpDoctorDirectory::new(client, base)),
        })
    }
}
