use std::fmt::{Display, Formatter};

use crate::config::Config;
use crate::inventory::{InventoryError, InventorySource};
use crate::launcher::{spawn_detached, start_vm_command};
use crate::model::{ResultMeta, VmRecord};
use crate::{logging, parser};

#[derive(Debug)]
pub enum ProviderError {
    Inventory(InventoryError),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inventory(error) => write!(f, "inventory unavailable: {error}"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<InventoryError> for ProviderError {
    fn from(value: InventoryError) -> Self {
        Self::Inventory(value)
    }
}

/// The host-facing boundary. The host wiring (D-Bus export, shell hooks)
/// lives outside this crate and calls these five operations; terms, ids and
/// timestamps mirror the host protocol.
pub trait SearchProviderPort {
    fn initial_search(
        &mut self,
        terms: &[String],
        limit: Option<usize>,
    ) -> Result<Vec<String>, ProviderError>;

    fn subsearch(
        &mut self,
        previous: &[String],
        terms: &[String],
        limit: Option<usize>,
    ) -> Result<Vec<String>, ProviderError>;

    fn resolve_metas(&self, ids: &[String]) -> Vec<ResultMeta>;

    fn activate_result(&self, id: &str, terms: &[String], timestamp: u32);

    fn launch_search(&self, terms: &[String], timestamp: u32);
}

/// One provider instance per connection, owned by whatever wires it up.
/// Every query fetches a fresh inventory and parses it; the records from the
/// most recent search are kept only so metadata requests in the same query
/// cycle resolve without another fetch.
pub struct SearchProvider<S: InventorySource> {
    config: Config,
    source: S,
    records: Vec<VmRecord>,
}

impl<S: InventorySource> SearchProvider<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self {
            config,
            source,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[VmRecord] {
        &self.records
    }

    fn run_query(
        &mut self,
        terms: &[String],
        limit: Option<usize>,
    ) -> Result<Vec<String>, ProviderError> {
        let raw = match self.source.fetch() {
            Ok(raw) => raw,
            Err(error) => {
                self.records.clear();
                logging::error(&format!("inventory fetch failed: {error}"));
                return Err(ProviderError::Inventory(error));
            }
        };

        self.records = parser::parse(&raw, terms);
        self.records.truncate(self.effective_limit(limit));

        Ok(self.records.iter().map(|r| r.id.clone()).collect())
    }

    fn effective_limit(&self, limit: Option<usize>) -> usize {
        let max = self.config.max_results as usize;
        match limit {
            Some(0) | None => max,
            Some(limit) => limit.min(max),
        }
    }
}

impl<S: InventorySource> SearchProviderPort for SearchProvider<S> {
    fn initial_search(
        &mut self,
        terms: &[String],
        limit: Option<usize>,
    ) -> Result<Vec<String>, ProviderError> {
        self.run_query(terms, limit)
    }

    /// Narrowing re-derives from the source of truth: the inventory is cheap
    /// to list and can change between keystrokes, so `previous` is accepted
    /// for protocol compatibility but not consulted.
    fn subsearch(
        &mut self,
        _previous: &[String],
        terms: &[String],
        limit: Option<usize>,
    ) -> Result<Vec<String>, ProviderError> {
        self.run_query(terms, limit)
    }

    /// Ids that no longer resolve (inventory changed since the search) are
    /// omitted rather than reported as errors.
    fn resolve_metas(&self, ids: &[String]) -> Vec<ResultMeta> {
        ids.iter()
            .filter_map(|id| self.records.iter().find(|r| &r.id == id))
            .map(|record| {
                ResultMeta::for_record(record, &self.config.icon_name, &self.config.icon_fallback)
            })
            .collect()
    }

    fn activate_result(&self, id: &str, _terms: &[String], _timestamp: u32) {
        let command = start_vm_command(&self.config.start_command, id);
        if let Err(error) = spawn_detached(&command) {
            logging::warn(&format!("start vm {id} failed: {error}"));
        }
    }

    fn launch_search(&self, _terms: &[String], _timestamp: u32) {
        if let Err(error) = spawn_detached(&self.config.launch_command) {
            logging::warn(&format!("launch application failed: {error}"));
        }
    }
}
