//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use fake_person::{BatchPolicy, PersonGenerator};

/// Inputs for [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) generator: Arc<PersonGenerator>,
    pub(crate) batch_policy: BatchPolicy,
}

impl ServerConfig {
    /// Serve `generator` on `bind_addr`, rejecting out-of-range batches.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, generator: Arc<PersonGenerator>) -> Self {
        Self {
            bind_addr,
            generator,
            batch_policy: BatchPolicy::Strict,
        }
    }

    /// Set the policy applied to `/person?n=`.
    #[must_use]
    pub fn with_batch_policy(mut self, batch_policy: BatchPolicy) -> Self {
        self.batch_policy = batch_policy;
        self
    }
}
