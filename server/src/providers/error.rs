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

use reqwest::Error as ReqwestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The collaborator declined the request. Carries the user-facing
    /// message; retrying means repeating the same action.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Backend Error: {0}")]
    Http(ReqwestError),
}

impl From<ReqwestError> for Error {
    fn from(v: ReqwestError) -> Self {
        Self::Http(v)
    }
}
