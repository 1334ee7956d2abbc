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

use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use resources::{misc::DoctorId, primitives::IsoDate};
use serde::Deserialize;

use super::super::super::{error::RequestError, state::State};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryArgs {
    doctor_id: DoctorId,
    date: IsoDate,
}

pub async fn get_slots(
    state: Data<State>,
    query: Query<QueryArgs>,
) -> Result<HttpResponse, RequestError> {
    let QueryArgs { doctor_id, date } = query.into_inner();

    let slots = state
        .collaborators
        .slots
        .list_slots(&doctor_id, &date)
        .await
        .map_err(RequestError::lookup)?;

    Ok(HttpResponse::Ok().json(slots))
}
