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

use rand::{thread_rng, Rng};

/// Decides whether a mock collaborator call succeeds.
///
/// Injected instead of sampling randomness at the call sites, so tests can
/// pin the outcome.
pub trait OutcomePolicy: Send + Sync {
    fn allow(&self) -> bool;
}

/// Demo behavior: an independent success draw per request.
#[derive(Clone, Copy, Debug)]
pub struct RandomOutcome {
    success_rate: f64,
}

impl RandomOutcome {
    pub fn new(success_rate: f64) -> Self {
        Self { success_rate }
    }
}

impl OutcomePolicy for RandomOutcome {
    fn allow(&self) -> bool {
        thread_rng().gen_bool(self.success_rate)
    }
}

/// Deterministic policy for tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedOutcome(pub bool);

impl OutcomePolicy for FixedOutcome {
    fn allow(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn fixed_outcome() {
        assert!(FixedOutcome(true).allow());
        assert!(!FixedOutcome(false).allow());
    }

    #[test]
    fn random_outcome_bounds() {
        assert!(RandomOutcome::new(1.0).allow());
        assert!(!RandomOutcome::new(0.0).allow());
    }
}
