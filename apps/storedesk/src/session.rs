//! # List Sessions
//!
//! One [`ListSession`] per list view owns every piece of state that view
//! needs: the record collection, the filter, the page, the selection, the
//! column toggles and the pending-request flags.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    List Session Operations                              │
//! │                                                                         │
//! │  UI Action                Session Method             State Change       │
//! │  ─────────                ──────────────             ────────────       │
//! │                                                                         │
//! │  Type in search ────────► set_search_term() ───────► filter, page clamp │
//! │  Click tab ─────────────► set_tab() ───────────────► filter, page clamp │
//! │  Pick dates ────────────► set_date_range() ────────► filter, page clamp │
//! │  Click page ────────────► set_page() ──────────────► page               │
//! │  Tick row ──────────────► toggle_selection() ──────► selection          │
//! │  Tick header ───────────► toggle_all_on_page() ────► selection          │
//! │  "Mark shipped" ────────► bulk_apply() ────────────► collection, select │
//! │  "Delete selected" ─────► bulk_delete() ───────────► collection, select │
//! │  Row delete ────────────► delete_one() ────────────► collection, page   │
//! │  Save edit form ────────► update_one() ────────────► collection         │
//! │  "Export" ──────────────► export_request() ────────► DownloadSink       │
//! │  "Refresh" ─────────────► refresh() ───────────────► everything reset   │
//! │                                                                         │
//! │  Render ────────────────► view() ──────────────────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! While the initial load is in flight every list operation is ignored.
//! Refresh and export are two-phase (`begin_*` / `finish_*`) so a second
//! request arriving while one is pending is refused with
//! [`RequestOutcome::Busy`]. [`SessionState`] wraps a session for sharing
//! between tasks.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use storedesk_core::bulk::{self, BulkOutcome, Transform};
use storedesk_core::export::{export_filename, serialize_with, ColumnVisibility, CsvDialect};
use storedesk_core::pagination::{
    clamp_page, needs_pagination, page_after_removal, page_window, paginate, total_pages,
    PageLink,
};
use storedesk_core::pipeline::FilterPipeline;
use storedesk_core::validation::Validate;
use storedesk_core::{
    Collection, CoreError, DateRange, FilterState, Order, Product, Record, SelectionSet, TabId,
};
use storedesk_data::RecordProvider;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::config::DeskConfig;
use crate::download::DownloadSink;
use crate::error::{AppError, AppResult};
use crate::notice::Notice;

// =============================================================================
// Supporting Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Ready,
}

/// Answer to a refresh or export request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum RequestOutcome {
    Started,
    /// The same kind of request is still pending.
    Busy,
    /// The initial load has not finished.
    NotReady,
}

/// Which records an export covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ExportScope {
    /// The whole collection, ignoring filters.
    #[default]
    All,
    /// Only records passing the current filter.
    Filtered,
}

/// A rendered export waiting to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedExport {
    pub filename: String,
    pub contents: String,
    pub record_count: usize,
}

/// Snapshot of everything a list view renders.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListView<R> {
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub items: Vec<R>,
    /// Display hints for each item on the page, keyed by record id.
    pub row_hints: BTreeMap<String, BTreeMap<String, String>>,
    pub selected_ids: Vec<String>,
    pub all_on_page_selected: bool,
    pub show_pagination: bool,
    pub page_links: Vec<PageLink>,
    pub loading: bool,
    pub refreshing: bool,
}

// =============================================================================
// List Session
// =============================================================================

/// State and operations for one list view.
#[derive(Debug)]
pub struct ListSession<R: Record> {
    session_id: Uuid,
    collection: Collection<R>,
    load_state: LoadState,
    filter: FilterState,
    page: usize,
    page_size: usize,
    selection: SelectionSet,
    columns: ColumnVisibility,
    default_columns: ColumnVisibility,
    pipeline: FilterPipeline<R>,
    refresh_pending: bool,
    export_pending: bool,
    notices: Vec<Notice>,
}

impl ListSession<Order> {
    /// Order list with configured page size and default columns.
    pub fn orders(config: &DeskConfig) -> Self {
        Self::new(config.orders.page_size, ColumnVisibility::order_defaults())
    }
}

impl ListSession<Product> {
    /// Product list with configured page size and default columns.
    pub fn products(config: &DeskConfig) -> Self {
        Self::new(config.products.page_size, ColumnVisibility::product_defaults())
    }
}

impl<R: Record> ListSession<R> {
    /// Creates an empty session in the `Loading` state.
    pub fn new(page_size: usize, default_columns: ColumnVisibility) -> Self {
        let session_id = Uuid::new_v4();
        debug!(session = %session_id, kind = %R::KIND, page_size, "Session created");

        ListSession {
            session_id,
            collection: Collection::default(),
            load_state: LoadState::Loading,
            filter: FilterState::default(),
            page: 1,
            page_size: page_size.max(1),
            selection: SelectionSet::new(),
            columns: default_columns.clone(),
            default_columns,
            pipeline: FilterPipeline::new(),
            refresh_pending: false,
            export_pending: false,
            notices: Vec::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Loads the initial record set from `provider`.
    pub async fn mount<P>(&mut self, provider: &P)
    where
        P: RecordProvider<R>,
    {
        self.load_state = LoadState::Loading;
        let records = provider.load_all().await;
        self.finish_load(records);
    }

    /// Installs a loaded record set and marks the session ready.
    pub fn finish_load(&mut self, records: Vec<R>) {
        let count = records.len();
        self.collection.replace_all(records);
        self.load_state = LoadState::Ready;
        self.selection.clear();
        self.clamp_page();
        info!(session = %self.session_id, kind = %R::KIND, count, "Session ready");
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    fn ready_for(&self, op: &str) -> bool {
        if !self.is_ready() {
            debug!(session = %self.session_id, op, "Ignored while loading");
        }
        self.is_ready()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn collection(&self) -> &Collection<R> {
        &self.collection
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn columns(&self) -> &ColumnVisibility {
        &self.columns
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_pending
    }

    pub fn is_exporting(&self) -> bool {
        self.export_pending
    }

    /// Drains queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // =========================================================================
    // Filtering and Paging
    // =========================================================================

    /// Records passing the current filter, memoized.
    pub fn filtered(&mut self) -> Arc<[R]> {
        self.pipeline.run(&self.collection, &self.filter)
    }

    pub fn filtered_count(&mut self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&mut self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.page = clamp_page(self.page, total);
    }

    pub fn set_filter_state(&mut self, filter: FilterState) {
        if !self.ready_for("set_filter_state") {
            return;
        }
        self.filter = filter;
        self.clamp_page();
        debug!(
            session = %self.session_id,
            search = %self.filter.search_term,
            tab = %self.filter.tab,
            page = self.page,
            "Filter changed"
        );
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let filter = self.filter.clone().with_search(term);
        self.set_filter_state(filter);
    }

    pub fn set_tab(&mut self, tab: impl Into<TabId>) {
        let filter = self.filter.clone().with_tab(tab);
        self.set_filter_state(filter);
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        let filter = FilterState {
            date_range: range,
            ..self.filter.clone()
        };
        self.set_filter_state(filter);
    }

    /// Moves to `page`, clamped into range.
    pub fn set_page(&mut self, page: usize) {
        if !self.ready_for("set_page") {
            return;
        }
        let total = self.total_pages();
        self.page = clamp_page(page, total);
    }

    pub fn set_column(&mut self, key: &str, visible: bool) {
        self.columns.set(key, visible);
    }

    fn current_page_ids(&mut self) -> Vec<String> {
        let filtered = self.filtered();
        paginate(&filtered[..], self.page, self.page_size)
            .items
            .iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    /// Snapshot for rendering.
    pub fn view(&mut self) -> ListView<R> {
        let filtered = self.filtered();
        let total = total_pages(filtered.len(), self.page_size);
        let page = paginate(&filtered[..], self.page, self.page_size);

        ListView {
            filtered_count: filtered.len(),
            current_page: self.page,
            total_pages: total,
            items: page.items.to_vec(),
            row_hints: page
                .items
                .iter()
                .map(|r| {
                    let hints = r
                        .display_hints()
                        .into_iter()
                        .map(|(key, value)| (key.to_string(), value))
                        .collect();
                    (r.id().to_string(), hints)
                })
                .collect(),
            selected_ids: self.selection.ids().map(str::to_string).collect(),
            all_on_page_selected: self.selection.equals_page(page.items.iter().map(Record::id)),
            show_pagination: needs_pagination(filtered.len(), self.page_size),
            page_links: page_window(self.page, total),
            loading: !self.is_ready(),
            refreshing: self.refresh_pending,
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggles one row. Ids not in the collection are ignored.
    pub fn toggle_selection(&mut self, id: &str) {
        if !self.ready_for("toggle_selection") {
            return;
        }
        if self.collection.contains(id) {
            self.selection.toggle_one(id);
        }
    }

    /// Header checkbox over the current page.
    pub fn toggle_all_on_page(&mut self) {
        if !self.ready_for("toggle_all_on_page") {
            return;
        }
        let ids = self.current_page_ids();
        self.selection.toggle_all_on_page(ids.iter().map(String::as_str));
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Applies `transform` to every selected record.
    pub fn bulk_apply<T>(&mut self, transform: &T) -> Option<BulkOutcome>
    where
        T: Transform<R> + ?Sized,
    {
        if !self.ready_for("bulk_apply") {
            return None;
        }
        let outcome = bulk::bulk_apply(&mut self.collection, &mut self.selection, transform)?;
        self.clamp_page();

        let action = transform.describe();
        info!(
            session = %self.session_id,
            count = outcome.updated_count,
            action = %action,
            "Bulk action applied"
        );
        self.notices
            .push(Notice::bulk_applied(R::KIND, outcome.updated_count, &action));
        Some(outcome)
    }

    /// Deletes every selected record.
    pub fn bulk_delete(&mut self) -> Option<BulkOutcome> {
        if !self.ready_for("bulk_delete") {
            return None;
        }
        let outcome = bulk::bulk_delete(&mut self.collection, &mut self.selection)?;
        self.clamp_page();

        info!(session = %self.session_id, count = outcome.updated_count, "Bulk delete");
        self.notices
            .push(Notice::bulk_deleted(R::KIND, outcome.updated_count));
        Some(outcome)
    }

    /// Deletes one record. Steps back a page if this empties a later page.
    /// Unknown ids are a no-op and raise no notice.
    pub fn delete_one(&mut self, id: &str) -> bool {
        if !self.ready_for("delete_one") {
            return false;
        }
        let items_on_page = self.current_page_ids().len();

        if self.collection.remove(id).is_none() {
            debug!(session = %self.session_id, id, "Delete of unknown record ignored");
            return false;
        }

        self.selection.retain_present(|sid| sid != id);
        self.page = page_after_removal(self.page, items_on_page, 1);
        self.clamp_page();

        info!(session = %self.session_id, id, "Record deleted");
        self.notices.push(Notice::deleted(R::KIND));
        true
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Resets filter, page, selection and columns, and marks a refresh
    /// pending. Columns all become visible.
    pub fn begin_refresh(&mut self) -> RequestOutcome {
        if !self.is_ready() {
            return RequestOutcome::NotReady;
        }
        if self.refresh_pending {
            debug!(session = %self.session_id, "Refresh already pending");
            return RequestOutcome::Busy;
        }

        self.filter = FilterState::default();
        self.page = 1;
        self.selection.clear();
        self.columns = self.default_columns.all_visible();
        self.refresh_pending = true;

        info!(session = %self.session_id, "Refresh started");
        RequestOutcome::Started
    }

    /// Completes a pending refresh.
    pub fn finish_refresh(&mut self) {
        if !self.refresh_pending {
            return;
        }
        self.refresh_pending = false;
        self.notices.push(Notice::reset_complete());
        info!(session = %self.session_id, "Refresh complete");
    }

    pub async fn refresh(&mut self, delay: Duration) -> RequestOutcome {
        let outcome = self.begin_refresh();
        if outcome == RequestOutcome::Started {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.finish_refresh();
        }
        outcome
    }

    // =========================================================================
    // Export
    // =========================================================================

    fn export_gate(&self) -> RequestOutcome {
        if !self.is_ready() {
            RequestOutcome::NotReady
        } else if self.export_pending {
            RequestOutcome::Busy
        } else {
            RequestOutcome::Started
        }
    }

    /// Renders an export and marks one pending.
    ///
    /// Returns `Ok(Err(outcome))` when the request is refused.
    pub fn prepare_export(
        &mut self,
        scope: ExportScope,
        dialect: CsvDialect,
        today: NaiveDate,
    ) -> AppResult<Result<PreparedExport, RequestOutcome>> {
        let gate = self.export_gate();
        if gate != RequestOutcome::Started {
            debug!(session = %self.session_id, ?gate, "Export refused");
            return Ok(Err(gate));
        }

        let records: Arc<[R]> = match scope {
            ExportScope::All => self.collection.records().into(),
            ExportScope::Filtered => self.filtered(),
        };

        let contents = serialize_with(&records[..], &self.columns, dialect).map_err(|e| {
            warn!(session = %self.session_id, error = %e, "Export rendering failed");
            self.notices.push(Notice::failed(R::KIND, "export"));
            AppError::from(e)
        })?;

        self.export_pending = true;
        self.notices.push(Notice::export_started());

        let prepared = PreparedExport {
            filename: export_filename(R::KIND, today),
            contents,
            record_count: records.len(),
        };
        debug!(
            session = %self.session_id,
            filename = %prepared.filename,
            count = prepared.record_count,
            "Export prepared"
        );
        Ok(Ok(prepared))
    }

    /// Delivers a prepared export and clears the pending flag.
    pub fn finish_export<S>(&mut self, prepared: PreparedExport, sink: &S) -> AppResult<()>
    where
        S: DownloadSink + ?Sized,
    {
        self.export_pending = false;
        match sink.deliver(&prepared.filename, &prepared.contents) {
            Ok(()) => {
                info!(
                    session = %self.session_id,
                    filename = %prepared.filename,
                    count = prepared.record_count,
                    "Export delivered"
                );
                self.notices.push(Notice::export_complete(&prepared.filename));
                Ok(())
            }
            Err(e) => {
                warn!(session = %self.session_id, error = %e, "Export delivery failed");
                self.notices.push(Notice::failed(R::KIND, "export"));
                Err(e)
            }
        }
    }

    /// Renders, waits `delay`, then delivers.
    pub async fn export_request<S>(
        &mut self,
        scope: ExportScope,
        dialect: CsvDialect,
        sink: &S,
        today: NaiveDate,
        delay: Duration,
    ) -> AppResult<RequestOutcome>
    where
        S: DownloadSink + ?Sized,
    {
        let prepared = match self.prepare_export(scope, dialect, today)? {
            Ok(prepared) => prepared,
            Err(refused) => return Ok(refused),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.finish_export(prepared, sink)?;
        Ok(RequestOutcome::Started)
    }
}

impl<R: Record + Validate> ListSession<R> {
    /// Validates `record` and replaces the stored record with the same id.
    pub fn update_one(&mut self, record: R) -> AppResult<()> {
        if !self.ready_for("update_one") {
            return Ok(());
        }

        let result = record
            .validate()
            .map_err(AppError::from)
            .and_then(|()| {
                let id = record.id().to_string();
                if self.collection.replace(record) {
                    Ok(id)
                } else {
                    Err(CoreError::not_found(R::KIND.singular(), id).into())
                }
            });

        match result {
            Ok(id) => {
                self.clamp_page();
                info!(session = %self.session_id, id = %id, "Record updated");
                self.notices.push(Notice::updated(R::KIND));
                Ok(())
            }
            Err(e) => {
                warn!(session = %self.session_id, error = %e, "Update rejected");
                self.notices.push(Notice::failed(R::KIND, "update"));
                Err(e)
            }
        }
    }
}

// =============================================================================
// Shared Session State
// =============================================================================

/// A session shared between tasks.
///
/// Uses `Arc<Mutex<ListSession>>` with the async mutex; the lock is never
/// held across a simulated delay, so a second refresh or export issued while
/// one sleeps observes the pending flag and gets [`RequestOutcome::Busy`].
#[derive(Debug)]
pub struct SessionState<R: Record> {
    session: Arc<Mutex<ListSession<R>>>,
}

impl<R: Record> Clone for SessionState<R> {
    fn clone(&self) -> Self {
        SessionState {
            session: Arc::clone(&self.session),
        }
    }
}

impl<R: Record> SessionState<R> {
    pub fn new(session: ListSession<R>) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Runs `f` with exclusive access to the session.
    pub async fn with_session<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut ListSession<R>) -> T,
    {
        let mut session = self.session.lock().await;
        f(&mut session)
    }

    /// Loads records without holding the lock during the provider's latency.
    pub async fn mount<P>(&self, provider: &P)
    where
        P: RecordProvider<R>,
    {
        let records = provider.load_all().await;
        self.session.lock().await.finish_load(records);
    }

    pub async fn refresh(&self, delay: Duration) -> RequestOutcome {
        let outcome = self.session.lock().await.begin_refresh();
        if outcome != RequestOutcome::Started {
            return outcome;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.session.lock().await.finish_refresh();
        outcome
    }

    pub async fn export_request<S>(
        &self,
        scope: ExportScope,
        dialect: CsvDialect,
        sink: &S,
        today: NaiveDate,
        delay: Duration,
    ) -> AppResult<RequestOutcome>
    where
        S: DownloadSink + ?Sized,
    {
        let prepared = match self
            .session
            .lock()
            .await
            .prepare_export(scope, dialect, today)?
        {
            Ok(prepared) => prepared,
            Err(refused) => return Ok(refused),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.session.lock().await.finish_export(prepared, sink)?;
        Ok(RequestOutcome::Started)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
