use std::collections::BTreeMap;

use crate::client::FeeEstimator;
use crate::error::BaseError;

/// Resolves the client used by an action.
pub trait Config {
    type Client: FeeEstimator;

    /// Returns the client for `chain_id`, or the default client when `None`.
    fn get_client(&self, chain_id: Option<u64>) -> Result<&Self::Client, BaseError>;
}

/// Fixed set of clients keyed by chain id.
///
/// The first chain added is the default unless [`StaticConfig::with_default_chain`]
/// says otherwise.
#[derive(Debug, Clone)]
pub struct StaticConfig<C> {
    default_chain_id: Option<u64>,
    clients: BTreeMap<u64, C>,
}

impl<C> Default for StaticConfig<C> {
    fn default() -> Self {
        Self {
            default_chain_id: None,
            clients: BTreeMap::new(),
        }
    }
}

impl<C> StaticConfig<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `client` for `chain_id`, replacing any previous one.
    pub fn with_client(mut self, chain_id: u64, client: C) -> Self {
        self.clients.insert(chain_id, client);
        self.default_chain_id.get_or_insert(chain_id);
        self
    }

    pub fn with_default_chain(mut self, chain_id: u64) -> Self {
        self.default_chain_id = Some(chain_id);
        self
    }

    pub fn default_chain_id(&self) -> Option<u64> {
        self.default_chain_id
    }

    /// Configured chain ids in ascending order.
    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.clients.keys().copied()
    }
}

impl<C: FeeEstimator> Config for StaticConfig<C> {
    type Client = C;

    fn get_client(&self, chain_id: Option<u64>) -> Result<&C, BaseError> {
        let chain_id = chain_id
            .or(self.default_chain_id)
            .ok_or_else(BaseError::client_not_found)?;
        self.clients
            .get(&chain_id)
            .ok_or_else(|| BaseError::chain_not_configured(chain_id))
    }
}
