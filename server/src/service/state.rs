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

use std::sync::Arc;

use resources::misc::DoctorId;

use crate::{booking::ClinicSchedule, providers::Collaborators};

/// Shared application state handed to every route.
#[derive(Clone)]
pub struct State {
    pub collaborators: Collaborators,
    pub doctor_id: DoctorId,
    pub schedule: Arc<ClinicSchedule>,
}

impl State {
    pub fn new(collaborators: Collaborators, doctor_id: DoctorId) -> Self {
        Self {
            collaborators,
            doctor_id,
            schedule: Arc::new(ClinicSchedule::default()),
        }
    }
}
