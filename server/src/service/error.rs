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

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use resources::validation::FormValidation;
use serde_json::json;
use thiserror::Error;

use crate::providers::Error as ProviderError;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Please correct the highlighted fields!")]
    Validation(FormValidation),

    /// The backing service declined the request; the client may retry.
    #[error("{0}")]
    Unavailable(String),

    /// Slot contention while issuing a token.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal Error: {0}")]
    Internal(String),
}

impl RequestError {
    /// Maps a failed patient registration.
    pub fn registration(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected(message) => Self::Unavailable(message),
            ProviderError::NotFound(message) => Self::NotFound(message),
            ProviderError::Http(err) => Self::Internal(err.to_string()),
        }
    }

    /// Maps a failed token issuance; a rejection means the slot may be
    /// full.
    pub fn issuance(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected(message) => Self::Conflict(message),
            ProviderError::NotFound(message) => Self::NotFound(message),
            ProviderError::Http(err) => Self::Internal(err.to_string()),
        }
    }

    /// Maps a failed lookup.
    pub fn lookup(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected(message) => Self::Unavailable(message),
            ProviderError::NotFound(message) => Self::NotFound(message),
            ProviderError::Http(err) => Self::Internal(err.to_string()),
        }
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "success": false,
            "message": self.to_string(),
        });

        if let Self::Validation(validation) = self {
            body["errors"] = json!(validation.messages());
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}
