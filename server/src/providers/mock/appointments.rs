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
use rand::{thread_rng, Rng};
use resources::{
    misc::{AppointmentId, TokenNumber},
    types::AppointmentStatus,
    Appointment, TokenRequest,
};
use tokio::{sync::Mutex, time::delay_for};

use super::super::{Error, OutcomePolicy, RandomOutcome, TokenIssuer};

const ISSUE_LATENCY: Duration = Duration::from_millis(1200);
const LOOKUP_LATENCY: Duration = Duration::from_millis(400);
const SUCCESS_RATE: f64 = 0.9;

/// Estimated wait after arrival: 15 to 44 minutes.
const MIN_WAIT_MINUTES: u32 = 15;
const MAX_WAIT_MINUTES: u32 = 45;

/// In-memory stand-in for the appointment backend. Issues tokens and keeps
/// them for later lookup by token number.
pub struct MockAppointmentBook {
    latency: Duration,
    policy: Arc<dyn OutcomePolicy>,
    issued: Mutex<HashMap<TokenNumber, Appointment>>,
}

impl MockAppointmentBook {
    pub fn new() -> Self {
        Self::with_policy(Arc::new(RandomOutcome::new(SUCCESS_RATE)), ISSUE_LATENCY)
    }

    pub fn with_policy(policy: Arc<dyn OutcomePolicy>, latency: Duration) -> Self {
        Self {
            latency,
            policy,
            issued: Mutex::new(HashMap::new()),
        }
    }

    fn lookup_latency(&self) -> Duration {
        self.latency.min(LOOKUP_LATENCY)
    }
}

impl Default for MockAppointmentBook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenIssuer for MockAppointmentBook {
    async fn issue(&self, request: &TokenRequest) -> Result<Appointment, Error> {
        delay_for(self.latency).await;

        if !self.policy.allow() {
            return Err(Error::Rejected(
                "Unable to generate token. Time slot may be full.".into(),
            ));
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: AppointmentId::generate(now),
            token_number: TokenNumber::generate(now),
            patient_id: request.patient_id.clone(),
            doctor_id: request.doctor_id.clone(),
            date: request.date,
            time: request.time.clone(),
            reason: request.reason.clone(),
            status: AppointmentStatus::Confirmed,
            estimated_wait_time: thread_rng().gen_range(MIN_WAIT_MINUTES, MAX_WAIT_MINUTES),
            created_at: now,
        };

        debug!(
            "Token {} issued for appointment {}",
            appointment.token_number, appointment.id
        );

        self.issued
            .lock()
            .await
            .insert(appointment.token_number.clone(), appointment.clone());

        Ok(appointment)
    }

    async fn find(&self, token_number: &TokenNumber) -> Result<Appointment, Error> {
        delay_for(self.lookup_latency()).await;

        self.issued
            .lock()
            .await
            .get(token_number)
            .cloned()
            .ok_or_else(|| Error::NotFound("Invalid token number".into()))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    use resources::misc::{DoctorId, PatientId};

    use super::super::super::FixedOutcome;

    fn book(ok: bool) -> MockAppointmentBook {
        MockAppointmentBook::with_policy(Arc::new(FixedOutcome(ok)), Duration::from_millis(0))
    }

    fn request() -> TokenRequest {
        TokenRequest {
            patient_id: PatientId::try_from("PAT-1614592800000").unwrap(),
            doctor_id: DoctorId::try_from("dr-somasree-rc").unwrap(),
            date: "2021-03-01".parse().unwrap(),
            time: "09:00".parse().unwrap(),
            reason: "checkup".into(),
        }
    }

    #[actix_rt::test]
    async fn issue_confirms_the_appointment() {
        let book = book(true);

        let appointment = book.issue(&request()).await.unwrap();

        assert!(appointment.id.as_str().starts_with("APT-"));
        assert!(appointment.token_number.as_str().starts_with('T'));
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert!(appointment.estimated_wait_time >= MIN_WAIT_MINUTES);
        assert!(appointment.estimated_wait_time <= MAX_WAIT_MINUTES);
        assert_eq!(appointment.time.as_str(), "09:00");
    }

    #[actix_rt::test]
    async fn issued_tokens_can_be_looked_up() {
        let book = book(true);

        let appointment = book.issue(&request()).await.unwrap();
        let found = book.find(&appointment.token_number).await.unwrap();

        assert_eq!(found, appointment);
    }

    #[actix_rt::test]
    async fn contention_is_reported_with_the_slot_full_message() {
        let book = book(false);

        let err = book.issue(&request()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unable to generate token. Time slot may be full."
        );
    }

    #[actix_rt::test]
    async fn unknown_token_is_invalid() {
        let book = book(true);
        let token_number = TokenNumber::try_from("T000000").unwrap();

        let err = book.find(&token_number).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid token number");
    }
}
