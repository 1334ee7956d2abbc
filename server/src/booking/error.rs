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

use resources::{primitives::SlotTime, validation::FormValidation};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Field-level failures. The form is re-prompted; no collaborator was
    /// contacted.
    #[error("Please correct the highlighted fields!")]
    Validation(FormValidation),

    /// The registration collaborator declined the submission.
    #[error("{0}")]
    Submission(String),

    /// The token issuer declined the confirmation.
    #[error("{0}")]
    Issuance(String),

    #[error("Time slot {0} is not available!")]
    SlotUnavailable(SlotTime),

    #[error("Date and time must be selected first!")]
    SelectionIncomplete,

    #[error("'{action}' is not allowed in step {step}!")]
    InvalidTransition { step: u8, action: &'static str },
}

impl Error {
    pub fn validation(&self) -> Option<&FormValidation> {
        match self {
            Self::Validation(validation) => Some(validation),
            _ => None,
        }
    }
}
