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

use std::convert::TryInto;

use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use resources::misc::DoctorId;

use super::super::super::{error::RequestError, state::State};

pub async fn get_one(state: Data<State>, id: Path<String>) -> Result<HttpResponse, RequestError> {
    let id: DoctorId = id
        .into_inner()
        .try_into()
        .map_err(|_| RequestError::NotFound("Doctor not found".into()))?;

    let doctor = state
        .collaborators
        .doctors
        .profile(&id)
        .await
        .map_err(RequestError::lookup)?;

    Ok(HttpResponse::Ok().json(doctor))
}
