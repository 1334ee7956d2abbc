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

mod error;
mod middleware;
mod routes;
mod state;

use std::net::{SocketAddr, ToSocketAddrs};

use actix_rt::System;
use actix_web::{dev::Server, App, HttpServer};
use tokio::task::LocalSet;

use crate::error::Error;

pub use error::RequestError;
pub use state::State;

use middleware::Logging;
use routes::configure_routes;

pub struct Service {
    state: State,
    addresses: Vec<SocketAddr>,
}

impl Service {
    pub fn new(state: State) -> Self {
        Self {
            state,
            addresses: Vec::new(),
        }
    }

    pub fn listen<T: ToSocketAddrs>(mut self, addrs: T) -> Result<Self, Error> {
        for addr in addrs.to_socket_addrs()? {
            self.addresses.push(addr);
        }

        Ok(self)
    }

    pub fn run(self, local: &LocalSet) -> Result<Server, Error> {
        let Self { state, addresses } = self;

        let system = System::run_in_tokio("clinic-booking-server", local);
        local.spawn_local(system);

        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(Logging)
                .data(state.clone())
                .configure(configure_routes)
        });

        for addr in addresses {
            server = server.bind(addr)?;
        }

        let server = server.disable_signals().shutdown_timeout(10).run();

        Ok(server)
    }
}
