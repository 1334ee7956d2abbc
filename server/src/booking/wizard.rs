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

use std::mem::replace;

use chrono::NaiveDate;
use log::{debug, warn};
use resources::{
    misc::DoctorId,
    patient::PatientForm,
    primitives::{IsoDate, SlotTime},
    slot::{AvailableDate, TimeSlot},
    Appointment, TokenRequest,
};

use crate::providers::{Collaborators, Error as ProviderError};

use super::{intake, schedule, ClinicSchedule, Error, Registration};

/// Position of the wizard. Step data lives inside the variant, so a state
/// can only be reached together with the data its invariants require.
#[derive(Debug, PartialEq)]
pub enum WizardState {
    /// Step 1. `retained` holds the registration of a previous pass after
    /// "back"; the form itself re-renders fresh.
    PatientInfo { retained: Option<Registration> },

    /// Step 2.
    DateTime {
        patient: Registration,
        selection: Selection,
    },

    /// Step 2 while the token request is in flight. Back-navigation and
    /// re-submission are rejected until the request settles.
    Generating {
        patient: Registration,
        selection: Selection,
    },

    /// Step 3.
    Confirmed {
        patient: Registration,
        selection: Selection,
        token: Appointment,
    },
}

/// Date/time choice of the date/time step. Valid once both parts are
/// present; changing the date clears the time, since slot availability is
/// date-dependent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub date: Option<IsoDate>,
    pub time: Option<SlotTime>,
}

impl Selection {
    pub fn is_valid(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }
}

/// Handle of a slot query opened by a date selection. Only the result of
/// the newest query is applied (last-write-wins).
#[derive(Clone, Debug, PartialEq)]
pub struct SlotQuery {
    seq: u64,
    pub doctor_id: DoctorId,
    pub date: IsoDate,
}

/// The three-step booking flow of one open modal session.
///
/// One instance per session; collaborator calls are strictly sequential
/// through `&mut self`. Dropping the wizard (or `close`) cancels any
/// outstanding work.
pub struct BookingWizard {
    doctor_id: DoctorId,
    schedule: ClinicSchedule,
    collaborators: Collaborators,
    state: WizardState,
    slots: Vec<TimeSlot>,
    slot_seq: u64,
    error: Option<String>,
}

impl WizardState {
    pub fn step(&self) -> u8 {
        match self {
            Self::PatientInfo { .. } => 1,
            Self::DateTime { .. } | Self::Generating { .. } => 2,
            Self::Confirmed { .. } => 3,
        }
    }
}

impl BookingWizard {
    pub fn new(doctor_id: DoctorId, collaborators: Collaborators) -> Self {
        Self::with_schedule(doctor_id, ClinicSchedule::default(), collaborators)
    }

    pub fn with_schedule(
        doctor_id: DoctorId,
        schedule: ClinicSchedule,
        collaborators: Collaborators,
    ) -> Self {
        Self {
            doctor_id,
            schedule,
            collaborators,
            state: WizardState::PatientInfo { retained: None },
            slots: Vec::new(),
            slot_seq: 0,
            error: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> u8 {
        self.state.step()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// The captured registration, once step 1 has been passed.
    pub fn patient(&self) -> Option<&Registration> {
        match &self.state {
            WizardState::PatientInfo { .. } => None,
            WizardState::DateTime { patient, .. }
            | WizardState::Generating { patient, .. }
            | WizardState::Confirmed { patient, .. } => Some(patient),
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            WizardState::PatientInfo { .. } => None,
            WizardState::DateTime { selection, .. }
            | WizardState::Generating { selection, .. }
            | WizardState::Confirmed { selection, .. } => Some(selection),
        }
    }

    pub fn token(&self) -> Option<&Appointment> {
        match &self.state {
            WizardState::Confirmed { token, .. } => Some(token),
            _ => None,
        }
    }

    /// The bookable dates offered by the date picker for `today`.
    pub fn available_dates(&self, today: NaiveDate) -> Vec<AvailableDate> {
        schedule::available_dates(today, &self.schedule)
    }

    /// Step 1 → step 2. Validates and registers the patient; on success
    /// the captured registration replaces any retained one and a stale
    /// error is cleared.
    pub async fn submit_patient(&mut self, form: &PatientForm) -> Result<(), Error> {
        if !matches!(self.state, WizardState::PatientInfo { .. }) {
            return Err(Error::InvalidTransition {
                step: self.state.step(),
                action: "submit patient",
            });
        }

        let registration = intake::submit(self.collaborators.patients.as_ref(), form).await?;

        debug!(
            "Wizard advancing to date/time selection for {}",
            registration.patient_id
        );

        self.error = None;
        self.slots.clear();
        self.state = WizardState::DateTime {
            patient: registration,
            selection: Selection::default(),
        };

        Ok(())
    }

    /// Records the date choice, clears the chosen time and opens a new
    /// slot query, superseding any previous one.
    pub fn begin_date_selection(&mut self, date: IsoDate) -> Result<SlotQuery, Error> {
        match &mut self.state {
            WizardState::DateTime { selection, .. } => {
                selection.date = Some(date);
                selection.time = None;
            }
            state => {
                return Err(Error::InvalidTransition {
                    step: state.step(),
                    action: "select date",
                })
            }
        }

        self.slots.clear();
        self.slot_seq += 1;

        Ok(SlotQuery {
            seq: self.slot_seq,
            doctor_id: self.doctor_id.clone(),
            date,
        })
    }

    /// Installs a slot query result. Superseded queries and results that
    /// arrive after the wizard left the date/time step are dropped. A
    /// provider failure yields the empty "no slots" state, never stale
    /// data.
    pub fn apply_slots(
        &mut self,
        query: &SlotQuery,
        result: Result<Vec<TimeSlot>, ProviderError>,
    ) -> bool {
        if query.seq != self.slot_seq {
            debug!("Dropping superseded slot query for {}", query.date);
            return false;
        }

        if !matches!(self.state, WizardState::DateTime { .. }) {
            return false;
        }

        self.slots = match result {
            Ok(slots) => slots,
            Err(err) => {
                warn!("Slot query for {} failed: {}", query.date, err);
                Vec::new()
            }
        };

        true
    }

    /// Date selection with the slot fetch driven to completion.
    pub async fn select_date(&mut self, date: IsoDate) -> Result<&[TimeSlot], Error> {
        let query = self.begin_date_selection(date)?;
        let result = self
            .collaborators
            .slots
            .list_slots(&query.doctor_id, &query.date)
            .await;

        self.apply_slots(&query, result);

        Ok(&self.slots)
    }

    /// Picks a time on the selected date. The slot must be offered for the
    /// date and open.
    pub fn select_time(&mut self, time: SlotTime) -> Result<(), Error> {
        let offered = self
            .slots
            .iter()
            .any(|slot| slot.time == time && slot.available);

        match &mut self.state {
            WizardState::DateTime { selection, .. } => {
                if selection.date.is_none() {
                    return Err(Error::SelectionIncomplete);
                }
                if !offered {
                    return Err(Error::SlotUnavailable(time));
                }

                selection.time = Some(time);

                Ok(())
            }
            state => Err(Error::InvalidTransition {
                step: state.step(),
                action: "select time",
            }),
        }
    }

    /// "Back to patient info". The registration stays in memory, but the
    /// form re-renders fresh and the selection is discarded; a new
    /// submission replaces the registration.
    pub fn back(&mut self) -> Result<(), Error> {
        match replace(&mut self.state, WizardState::PatientInfo { retained: None }) {
            WizardState::DateTime { patient, .. } => {
                self.slots.clear();
                self.slot_seq += 1;
                self.state = WizardState::PatientInfo {
                    retained: Some(patient),
                };

                Ok(())
            }
            state => {
                let step = state.step();
                self.state = state;

                Err(Error::InvalidTransition {
                    step,
                    action: "back",
                })
            }
        }
    }

    /// Step 2 → step 3. Requires a complete selection; moves through the
    /// generating sub-state while the issuer runs. On failure the wizard
    /// returns to the date/time step with the error message set and the
    /// registration and selection intact.
    pub async fn confirm(&mut self) -> Result<Appointment, Error> {
        let (patient, selection, date, time) =
            match replace(&mut self.state, WizardState::PatientInfo { retained: None }) {
                WizardState::DateTime { patient, selection } => {
                    match (selection.date, selection.time.clone()) {
                        (Some(date), Some(time)) => (patient, selection, date, time),
                        _ => {
                            self.state = WizardState::DateTime { patient, selection };
                            return Err(Error::SelectionIncomplete);
                        }
                    }
                }
                state => {
                    let step = state.step();
                    self.state = state;

                    return Err(Error::InvalidTransition {
                        step,
                        action: "confirm",
                    });
                }
            };

        self.error = None;
        self.state = WizardState::Generating {
            patient: patient.clone(),
            selection: selection.clone(),
        };

        let request = TokenRequest {
            patient_id: patient.patient_id.clone(),
            doctor_id: self.doctor_id.clone(),
            date,
            time,
            reason: patient.reason.clone(),
        };

        match self.collaborators.tokens.issue(&request).await {
            Ok(token) => {
                debug!(
                    "Token {} issued, wizard confirmed for {}",
                    token.token_number, patient.patient_id
                );

                self.state = WizardState::Confirmed {
                    patient,
                    selection,
                    token: token.clone(),
                };

                Ok(token)
            }
            Err(err) => {
                let message = err.to_string();
                warn!("Token issuance failed: {}", message);

                self.error = Some(message.clone());
                self.state = WizardState::DateTime { patient, selection };

                Err(Error::Issuance(message))
            }
        }
    }

    /// "Book another": full reset, the modal stays open.
    pub fn book_another(&mut self) -> Result<(), Error> {
        if !matches!(self.state, WizardState::Confirmed { .. }) {
            return Err(Error::InvalidTransition {
                step: self.state.step(),
                action: "book another",
            });
        }

        self.reset();

        Ok(())
    }

    /// Close: full reset from any state. Outstanding slot queries are
    /// invalidated so late results cannot touch the next session.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state = WizardState::PatientInfo { retained: None };
        self.slots.clear();
        self.slot_seq += 1;
        self.error = None;
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    use resources::validation::{Field, FieldError};

    use crate::providers::mock;

    fn wizard(register_ok: bool, issue_ok: bool) -> BookingWizard {
        BookingWizard::new(
            DoctorId::try_from("dr-somasree-rc").unwrap(),
            mock::deterministic(register_ok, issue_ok),
        )
    }

    fn form() -> PatientForm {
        PatientForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "+1 555 123 4567".into(),
            reason: "checkup".into(),
        }
    }

    /// 2021-03-01 is a Monday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd(2021, 3, 1)
    }

    async fn advance_to_date_time(wizard: &mut BookingWizard) -> IsoDate {
        wizard.submit_patient(&form()).await.unwrap();

        let dates = wizard.available_dates(today());
        let first = dates[0].date;
        wizard.select_date(first).await.unwrap();

        first
    }

    fn slot(time: &str) -> TimeSlot {
        TimeSlot {
            time: time.parse().unwrap(),
            label: time.into(),
            available: true,
            booking_count: 0,
        }
    }

    #[actix_rt::test]
    async fn full_flow_reaches_confirmation() {
        let mut wizard = wizard(true, true);

        wizard.submit_patient(&form()).await.unwrap();
        assert_eq!(wizard.step(), 2);
        assert_eq!(wizard.patient().unwrap().patient.name, "Jane Doe");

        let dates = wizard.available_dates(today());
        let first = dates[0].date;
        let slots = wizard.select_date(first).await.unwrap();
        assert!(!slots.is_empty());

        wizard.select_time("09:00".parse().unwrap()).unwrap();
        assert!(wizard.selection().unwrap().is_valid());

        let token = wizard.confirm().await.unwrap();
        assert_eq!(wizard.step(), 3);
        assert!(token.token_number.as_str().starts_with('T'));
        assert!(token.id.as_str().starts_with("APT-"));
        assert!((15..=45).contains(&token.estimated_wait_time));
        assert_eq!(token.reason, "checkup");
    }

    #[actix_rt::test]
    async fn invalid_email_keeps_step_one() {
        // Registration is set to fail; only validation may reject first.
        let mut wizard = wizard(false, true);

        let mut invalid = form();
        invalid.email = "not-an-email".into();

        let err = wizard.submit_patient(&invalid).await.unwrap_err();
        let validation = err.validation().unwrap();

        assert_eq!(validation.error(Field::Email), Some(FieldError::Format));
        assert_eq!(wizard.step(), 1);
        assert!(wizard.patient().is_none());
    }

    #[actix_rt::test]
    async fn rejected_registration_keeps_step_one() {
        let mut wizard = wizard(false, true);

        let err = wizard.submit_patient(&form()).await.unwrap_err();

        assert!(matches!(err, Error::Submission(_)));
        assert_eq!(wizard.step(), 1);
    }

    #[actix_rt::test]
    async fn changing_the_date_clears_the_time() {
        let mut wizard = wizard(true, true);
        advance_to_date_time(&mut wizard).await;

        wizard.select_time("09:00".parse().unwrap()).unwrap();
        assert!(wizard.selection().unwrap().is_valid());

        let dates = wizard.available_dates(today());
        wizard.select_date(dates[1].date).await.unwrap();

        let selection = wizard.selection().unwrap();
        assert_eq!(selection.date, Some(dates[1].date));
        assert_eq!(selection.time, None);
        assert!(!selection.is_valid());
    }

    #[actix_rt::test]
    async fn full_slot_cannot_be_selected() {
        let mut wizard = wizard(true, true);
        advance_to_date_time(&mut wizard).await;

        let err = wizard.select_time("12:30".parse().unwrap()).unwrap_err();

        assert!(matches!(err, Error::SlotUnavailable(_)));
        assert_eq!(wizard.selection().unwrap().time, None);
    }

    #[actix_rt::test]
    async fn stale_slot_response_is_dropped() {
        let mut wizard = wizard(true, true);
        wizard.submit_patient(&form()).await.unwrap();

        let dates = wizard.available_dates(today());
        let superseded = wizard.begin_date_selection(dates[0].date).unwrap();
        let current = wizard.begin_date_selection(dates[1].date).unwrap();

        assert!(!wizard.apply_slots(&superseded, Ok(vec![slot("09:00")])));
        assert!(wizard.slots().is_empty());

        assert!(wizard.apply_slots(&current, Ok(vec![slot("10:00")])));
        assert_eq!(wizard.slots().len(), 1);
        assert_eq!(wizard.selection().unwrap().date, Some(dates[1].date));
    }

    #[actix_rt::test]
    async fn failed_slot_query_yields_the_no_slots_state() {
        let mut wizard = wizard(true, true);
        wizard.submit_patient(&form()).await.unwrap();

        let dates = wizard.available_dates(today());
        let query = wizard.begin_date_selection(dates[0].date).unwrap();

        let applied = wizard.apply_slots(&query, Err(ProviderError::Rejected("outage".into())));

        assert!(applied);
        assert!(wizard.slots().is_empty());
    }

    #[actix_rt::test]
    async fn confirm_requires_a_complete_selection() {
        let mut wizard = wizard(true, true);
        advance_to_date_time(&mut wizard).await;

        let err = wizard.confirm().await.unwrap_err();

        assert!(matches!(err, Error::SelectionIncomplete));
        assert_eq!(wizard.step(), 2);
    }

    #[actix_rt::test]
    async fn confirm_is_rejected_on_step_one() {
        let mut wizard = wizard(true, true);

        let err = wizard.confirm().await.unwrap_err();

        assert!(matches!(err, Error::InvalidTransition { step: 1, .. }));
        assert_eq!(wizard.step(), 1);
    }

    #[actix_rt::test]
    async fn issuance_failure_stays_at_step_two_with_data_intact() {
        let mut wizard = wizard(true, false);
        advance_to_date_time(&mut wizard).await;
        wizard.select_time("09:00".parse().unwrap()).unwrap();

        let before = wizard.patient().unwrap().clone();
        let err = wizard.confirm().await.unwrap_err();

        assert!(matches!(err, Error::Issuance(_)));
        assert_eq!(wizard.step(), 2);
        assert_eq!(
            wizard.error_message(),
            Some("Unable to generate token. Time slot may be full.")
        );
        assert_eq!(wizard.patient(), Some(&before));
        assert!(wizard.selection().unwrap().is_valid());
        assert!(wizard.token().is_none());
    }

    #[actix_rt::test]
    async fn back_returns_to_a_fresh_form() {
        let mut wizard = wizard(true, true);
        advance_to_date_time(&mut wizard).await;

        wizard.back().unwrap();

        assert_eq!(wizard.step(), 1);
        assert!(wizard.patient().is_none());
        assert!(wizard.slots().is_empty());

        // A second pass replaces the registration.
        wizard.submit_patient(&form()).await.unwrap();
        assert_eq!(wizard.step(), 2);
        assert!(!wizard.selection().unwrap().is_valid());
    }

    #[actix_rt::test]
    async fn back_is_rejected_outside_the_date_time_step() {
        let mut wizard = wizard(true, true);

        assert!(matches!(
            wizard.back().unwrap_err(),
            Error::InvalidTransition { step: 1, .. }
        ));
    }

    #[actix_rt::test]
    async fn close_restores_the_initial_state() {
        let mut wizard = wizard(true, true);
        advance_to_date_time(&mut wizard).await;
        wizard.select_time("09:00".parse().unwrap()).unwrap();
        wizard.confirm().await.unwrap();

        wizard.close();

        assert_eq!(
            wizard.state(),
            &WizardState::PatientInfo { retained: None }
        );
        assert_eq!(wizard.step(), 1);
        assert!(wizard.error_message().is_none());
        assert!(wizard.slots().is_empty());
        assert!(wizard.token().is_none());
    }

    #[actix_rt::test]
    async fn book_another_resets_for_the_next_booking() {
        let mut wizard = wizard(true, true);
        advance_to_date_time(&mut wizard).await;
        wizard.select_time("09:00".parse().unwrap()).unwrap();
        wizard.confirm().await.unwrap();

        wizard.book_another().unwrap();

        assert_eq!(wizard.step(), 1);
        assert!(wizard.patient().is_none());

        // The next booking starts from scratch.
        wizard.submit_patient(&form()).await.unwrap();
        assert_eq!(wizard.step(), 2);
    }

    #[actix_rt::test]
    async fn book_another_is_rejected_before_confirmation() {
        let mut wizard = wizard(true, true);

        assert!(matches!(
            wizard.book_another().unwrap_err(),
            Error::InvalidTransition { step: 1, .. }
        ));
    }

    #[actix_rt::test]
    async fn close_invalidates_outstanding_slot_queries() {
        let mut wizard = wizard(true, true);
        wizard.submit_patient(&form()).await.unwrap();

        let dates = wizard.available_dates(today());
        let query = wizard.begin_date_selection(dates[0].date).unwrap();

        wizard.close();

        assert!(!wizard.apply_slots(&query, Ok(vec![slot("09:00")])));
        assert!(wizard.slots().is_empty());
    }
}
