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

use log::debug;
use resources::{
    misc::PatientId,
    patient::{Patient, PatientForm},
    validation::validate_patient_form,
};

use crate::providers::PatientDirectory;

use super::Error;

/// Captured outcome of a successful patient intake: the assigned id, the
/// registered record and the visit reason, kept verbatim for later display
/// and for the token request.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub patient_id: PatientId,
    pub patient: Patient,
    pub reason: String,
}

/// Validates the form and, only when it is clean, registers the patient.
///
/// Invalid forms fail fast with the field errors; the directory is never
/// contacted for them.
pub async fn submit(
    directory: &dyn PatientDirectory,
    form: &PatientForm,
) -> Result<Registration, Error> {
    let validation = validate_patient_form(form);
    if !validation.is_valid() {
        return Err(Error::Validation(validation));
    }

    let patient = directory
        .register(form)
        .await
        .map_err(|err| Error::Submission(err.to_string()))?;

    debug!("Patient intake completed: {}", patient.id);

    Ok(Registration {
        patient_id: patient.id.clone(),
        reason: patient.reason.clone(),
        patient,
    })
}
