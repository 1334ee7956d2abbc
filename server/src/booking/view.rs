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

//! Display data derived from the wizard state. No business logic lives
//! here; everything is recomputed from the current state on demand.

use resources::primitives::IsoDate;

use super::wizard::{BookingWizard, WizardState};

const STEP_LABELS: [&str; 3] = ["Patient Info", "Date & Time", "Token"];

pub fn step_title(state: &WizardState) -> &'static str {
    match state {
        WizardState::PatientInfo { .. } => "Book Appointment - Step 1 of 2",
        WizardState::DateTime { .. } | WizardState::Generating { .. } => {
            "Book Appointment - Step 2 of 2"
        }
        WizardState::Confirmed { .. } => "Appointment Confirmed",
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressStep {
    pub number: u8,
    pub label: &'static str,
    pub active: bool,
    pub completed: bool,
}

pub fn progress(state: &WizardState) -> [ProgressStep; 3] {
    let current = state.step();

    let mut steps = [ProgressStep {
        number: 0,
        label: "",
        active: false,
        completed: false,
    }; 3];

    for (index, step) in steps.iter_mut().enumerate() {
        let number = index as u8 + 1;

        step.number = number;
        step.label = STEP_LABELS[index];
        step.active = current >= number;
        step.completed = number < 3 && current > number;
    }

    steps
}

/// Summary block rendered on the confirmation step.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmationView {
    pub token_number: String,
    pub appointment_id: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    pub estimated_wait_time: u32,
}

pub fn confirmation(wizard: &BookingWizard) -> Option<ConfirmationView> {
    match wizard.state() {
        WizardState::Confirmed {
            patient,
            selection,
            token,
        } => Some(ConfirmationView {
            token_number: token.token_number.to_string(),
            appointment_id: token.id.to_string(),
            patient_name: patient.patient.name.clone(),
            date: selection.date.map(long_date).unwrap_or_default(),
            time: selection
                .time
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            estimated_wait_time: token.estimated_wait_time,
        }),
        _ => None,
    }
}

/// "Monday, March 1, 2021"
fn long_date(date: IsoDate) -> String {
    date.date().format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
pub mod tests {
    use super::*;

    use std::convert::TryFrom;

    use chrono::NaiveDate;
    use resources::{misc::DoctorId, patient::PatientForm};

    use crate::providers::mock;

    #[test]
    fn titles_follow_the_step() {
        let state = WizardState::PatientInfo { retained: None };

        assert_eq!(step_title(&state), "Book Appointment - Step 1 of 2");
    }

    #[test]
    fn progress_marks_passed_steps_completed() {
        let state = WizardState::PatientInfo { retained: None };
        let steps = progress(&state);

        assert!(steps[0].active);
        assert!(!steps[0].completed);
        assert!(!steps[1].active);
    }

    #[actix_rt::test]
    async fn confirmation_is_only_derived_on_step_three() {
        let mut wizard = BookingWizard::new(
            DoctorId::try_from("dr-somasree-rc").unwrap(),
            mock::deterministic(true, true),
        );

        assert!(confirmation(&wizard).is_none());

        let form = PatientForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "+1 555 123 4567".into(),
            reason: "checkup".into(),
        };
        wizard.submit_patient(&form).await.unwrap();

        let dates = wizard.available_dates(NaiveDate::from_ymd(2021, 3, 1));
        wizard.select_date(dates[0].date).await.unwrap();
        wizard.select_time("09:00".parse().unwrap()).unwrap();
        wizard.confirm().await.unwrap();

        let view = confirmation(&wizard).unwrap();

        assert_eq!(view.patient_name, "Jane Doe");
        assert_eq!(view.date, "Monday, March 1, 2021");
        assert_eq!(view.time, "09:00");
        assert!(view.token_number.starts_with('T'));
    }
}
