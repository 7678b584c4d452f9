//! Person generation use-case backed by the shared record generator.

use std::sync::Arc;

use chrono::NaiveDate;
use fake_person::{BatchPolicy, PersonGenerator, PersonRecord};
use mockable::Clock;
use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::PersonQuery;

/// Generates records from immutable reference data.
///
/// Each call draws from the calling thread's RNG, so concurrent requests
/// never share a random stream. The current date comes from the injected
/// clock and bounds every birth date.
#[derive(Clone)]
pub struct PersonService {
    generator: Arc<PersonGenerator>,
    clock: Arc<dyn Clock>,
    policy: BatchPolicy,
}

impl PersonService {
    /// Create a service over `generator` applying `policy` to batch sizes.
    pub fn new(generator: Arc<PersonGenerator>, clock: Arc<dyn Clock>, policy: BatchPolicy) -> Self {
        Self {
            generator,
            clock,
            policy,
        }
    }

    /// Batch policy in force.
    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl PersonQuery for PersonService {
    fn person(&self) -> PersonRecord {
        self.generator.person(&mut rand::rng(), self.today())
    }

    fn persons(&self, amount: i64) -> Result<Vec<PersonRecord>, Error> {
        self.generator
            .batch(&mut rand::rng(), self.today(), amount, self.policy)
            .map_err(|err| {
                debug!(error = %err, "batch size rejected");
                Error::incorrect_parameter()
            })
    }
}
