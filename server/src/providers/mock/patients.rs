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

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use resources::{
    misc::PatientId,
    patient::{Patient, PatientForm},
};
use tokio::{sync::Mutex, time::delay_for};

use super::super::{Error, OutcomePolicy, PatientDirectory, RandomOutcome};

const REGISTER_LATENCY: Duration = Duration::from_millis(800);
const LOOKUP_LATENCY: Duration = Duration::from_millis(300);
const SUCCESS_RATE: f64 = 0.95;

/// In-memory stand-in for the patient registration backend.
pub struct MockPatientDirectory {
    latency: Duration,
    policy: Arc<dyn OutcomePolicy>,
    registered: Mutex<HashMap<PatientId, Patient>>,
}

impl MockPatientDirectory {
    pub fn new() -> Self {
        Self::with_policy(Arc::new(RandomOutcome::new(SUCCESS_RATE)), REGISTER_LATENCY)
    }

    pub fn with_policy(policy: Arc<dyn OutcomePolicy>, latency: Duration) -> Self {
        Self {
            latency,
            policy,
            registered: Mutex::new(HashMap::new()),
        }
    }

    fn lookup_latency(&self) -> Duration {
        self.latency.min(LOOKUP_LATENCY)
    }
}

impl Default for MockPatientDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientDirectory for MockPatientDirectory {
    async fn register(&self, form: &PatientForm) -> Result<Patient, Error> {
        delay_for(self.latency).await;

        if !self.policy.allow() {
            return Err(Error::Rejected(
                "Unable to save patient information. Please try again.".into(),
            ));
        }

        let now = Utc::now();
        let patient = Patient::from_form(PatientId::generate(now), form, now);

        debug!("Patient registered with id: {}", patient.id);

        self.registered
            .lock()
            .await
            .insert(patient.id.clone(), patient.clone());

        Ok(patient)
    }

    async fn find(&self, id: &PatientId) -> Result<Patient, Error> {
        delay_for(self.lookup_latency()).await;

        self.registered
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Patient not found".into()))
    }
}
