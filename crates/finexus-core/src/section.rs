//! Resource section: the list + add + total pattern every category uses.
//!
//! [`SectionStore`] is the state a section renders from. Loads are tagged with
//! a [`LoadTicket`]; only the newest ticket may replace the collection, so a
//! slow response can never overwrite a newer one. [`load_records`] and
//! [`add_record`] drive a store against any [`RecordApi`]; the desktop
//! component and [`ResourceSection`] both go through them.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::api::RecordApi;
use crate::card::RecordCard;
use crate::error::{FinexusError, FinexusResult};
use crate::form::FormModel;
use crate::record::{total, CategoryRecord, DEFAULT_MONETARY_KEYS};
use crate::schema::{ColumnSchema, FieldSchema};

/// Endpoints and form for adding to a section.
#[derive(Debug, Clone, PartialEq)]
pub struct AddConfig {
    pub list_path: &'static str,
    pub add_path: &'static str,
    /// Submit button label
    pub cta: &'static str,
    pub fields: Vec<FieldSchema>,
}

/// Everything a section needs besides the API itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub columns: Vec<ColumnSchema>,
    pub add: AddConfig,
}

impl SectionConfig {
    /// Keys tried, in order, for each record's share of the total.
    ///
    /// Always `value` then `value_usd`; monetary columns outside that chain
    /// are tried after it. The tagged column only decides rendering.
    pub fn monetary_keys(&self) -> Vec<&'static str> {
        let mut keys = DEFAULT_MONETARY_KEYS.to_vec();
        for column in self.columns.iter().filter(|c| c.is_monetary()) {
            if !keys.contains(&column.key) {
                keys.push(column.key);
            }
        }
        keys
    }

    pub fn form(&self) -> FormModel {
        FormModel::new(self.add.fields.clone())
    }
}

/// Lifecycle of a section's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionPhase {
    #[default]
    Unloaded,
    /// First load in flight
    Loading,
    Loaded,
    /// Load in flight with a previous collection still shown
    Reloading,
}

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Render state for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStore {
    records: Vec<CategoryRecord>,
    total: f64,
    monetary_keys: Vec<&'static str>,
    phase: SectionPhase,
    error: Option<String>,
    generation: u64,
    submitting: bool,
}

impl SectionStore {
    pub fn new(monetary_keys: Vec<&'static str>) -> Self {
        Self {
            records: Vec::new(),
            total: 0.0,
            monetary_keys,
            phase: SectionPhase::Unloaded,
            error: None,
            generation: 0,
            submitting: false,
        }
    }

    pub fn for_config(config: &SectionConfig) -> Self {
        Self::new(config.monetary_keys())
    }

    pub fn records(&self) -> &[CategoryRecord] {
        &self.records
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn cards(&self, columns: &[ColumnSchema]) -> Vec<RecordCard> {
        self.records
            .iter()
            .map(|r| RecordCard::build(r, columns))
            .collect()
    }

    /// Start a load; any ticket handed out earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = match self.phase {
            SectionPhase::Unloaded | SectionPhase::Loading => SectionPhase::Loading,
            SectionPhase::Loaded | SectionPhase::Reloading => SectionPhase::Reloading,
        };
        LoadTicket(self.generation)
    }

    /// Apply a load result. Returns `false` when the ticket is stale and the
    /// result was dropped.
    ///
    /// Success replaces the collection wholesale. Failure keeps whatever was
    /// shown before and records the error for a banner.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: FinexusResult<Vec<CategoryRecord>>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Dropping stale load response"
            );
            return false;
        }

        match result {
            Ok(records) => {
                self.total = total(&records, &self.monetary_keys);
                self.records = records;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Load failed, keeping previous records");
                self.error = Some(e.to_string());
            }
        }
        self.phase = SectionPhase::Loaded;
        true
    }

    /// Claim the submit slot. `false` means a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Mutable access to a [`SectionStore`], wherever it lives.
///
/// Each `update` is a short borrow; none is held across a request.
pub trait StoreAccess {
    fn update<R>(&mut self, f: impl FnOnce(&mut SectionStore) -> R) -> R;
}

impl StoreAccess for SectionStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SectionStore) -> R) -> R {
        f(self)
    }
}

/// Fetch the whole collection at `path` and apply it if still current.
///
/// On failure the error is both recorded in the store and returned.
pub async fn load_records<A, S>(api: &A, path: &str, store: &mut S) -> FinexusResult<()>
where
    A: RecordApi,
    S: StoreAccess,
{
    let ticket = store.update(SectionStore::begin_load);
    let result = api.list(path).await;
    let failure = result.as_ref().err().cloned();
    store.update(|s| s.finish_load(ticket, result));
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Write one record, then reload whether or not the write succeeded.
///
/// Refused with [`FinexusError::SubmitInFlight`] while another submission
/// holds the store's submit slot. A failed write ends up on the banner.
pub async fn add_record<A, S>(
    api: &A,
    add: &AddConfig,
    store: &mut S,
    payload: Map<String, Value>,
) -> FinexusResult<()>
where
    A: RecordApi,
    S: StoreAccess,
{
    if !store.update(SectionStore::begin_submit) {
        debug!(path = add.add_path, "Submission already in flight, ignoring");
        return Err(FinexusError::SubmitInFlight);
    }

    let written = api.create(add.add_path, &payload).await;
    let reloaded = load_records(api, add.list_path, store).await;

    if let Err(e) = &written {
        warn!(path = add.add_path, error = %e, "Add failed");
        store.update(|s| s.set_error(e.to_string()));
    }
    store.update(SectionStore::end_submit);

    written?;
    reloaded
}

/// A section bound to an API.
pub struct ResourceSection<A> {
    api: A,
    config: SectionConfig,
    store: SectionStore,
}

impl<A: RecordApi> ResourceSection<A> {
    pub fn new(api: A, config: SectionConfig) -> Self {
        let store = SectionStore::for_config(&config);
        Self { api, config, store }
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn store(&self) -> &SectionStore {
        &self.store
    }

    pub fn records(&self) -> &[CategoryRecord] {
        self.store.records()
    }

    pub fn total(&self) -> f64 {
        self.store.total()
    }

    pub fn cards(&self) -> Vec<RecordCard> {
        self.store.cards(&self.config.columns)
    }

    pub async fn load(&mut self) -> FinexusResult<()> {
        load_records(&self.api, self.config.add.list_path, &mut self.store).await
    }

    pub async fn add(&mut self, payload: Map<String, Value>) -> FinexusResult<()> {
        add_record(&self.api, &self.config.add, &mut self.store, payload).await
    }

    /// Submit a form's draft. Coercion errors stop here, before any request.
    pub async fn submit(&mut self, form: &mut FormModel) -> FinexusResult<()> {
        let payload = form.submit()?;
        self.add(payload).await
    }
}
