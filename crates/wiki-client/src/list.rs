//! Query-driven list controller for wiki documents
//!
//! [`WikiDocList`] owns the query descriptor and the current materialized
//! page for one team/channel scope. Any params change triggers exactly one
//! refetch; callers never call [`WikiDocList::fetch`] after a mutator.
//! Results from a superseded fetch never overwrite state produced by a
//! later-issued fetch, even when the network completes out of order: each
//! fetch is tagged with the params snapshot it was issued for and discarded
//! on mismatch. There is no request cancellation and no retry.
//!
//! A controller instance is keyed to its scope; when the channel or team
//! changes, the owner drops it and constructs a new one, so stale results
//! from a previous scope cannot surface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::client::WikiDocsClient;
use crate::error::ClientResult;
use crate::models::{ListParams, ListParamsUpdate, SortField, WikiDoc};

/// Quiet period after the last keystroke before a search fetch is issued
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Behavior knobs for [`WikiDocList`]
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Append each fetched page to the loaded items instead of replacing them
    pub infinite_paging: bool,
    /// Debounce delay for [`WikiDocList::set_search_term`]
    pub search_debounce: Duration,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            infinite_paging: false,
            search_debounce: SEARCH_DEBOUNCE,
        }
    }
}

/// Snapshot of the controller state
#[derive(Debug, Clone)]
pub struct ListState {
    /// Loaded documents; `None` until the first fetch completes
    pub docs: Option<Vec<WikiDoc>>,
    pub is_loading: bool,
    pub total_count: u64,
    pub has_more: bool,
    pub params: ListParams,
    pub selected: Option<WikiDoc>,
}

struct Inner {
    client: WikiDocsClient,
    options: ListOptions,
    state: Mutex<ListState>,
    search_epoch: AtomicU64,
}

/// Controller maintaining a debounced, race-safe view of one page of
/// documents for a given team/channel scope. Cloning yields another handle
/// to the same state.
#[derive(Clone)]
pub struct WikiDocList {
    inner: Arc<Inner>,
}

impl WikiDocList {
    pub fn new(client: WikiDocsClient, params: ListParams) -> Self {
        Self::with_options(client, params, ListOptions::default())
    }

    pub fn with_options(client: WikiDocsClient, params: ListParams, options: ListOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                options,
                state: Mutex::new(ListState {
                    docs: None,
                    is_loading: false,
                    total_count: 0,
                    has_more: false,
                    params,
                    selected: None,
                }),
                search_epoch: AtomicU64::new(0),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.inner.state.lock().expect("wiki doc list state poisoned")
    }

    pub fn state(&self) -> ListState {
        self.lock().clone()
    }

    pub fn docs(&self) -> Option<Vec<WikiDoc>> {
        self.lock().docs.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn total_count(&self) -> u64 {
        self.lock().total_count
    }

    pub fn has_more(&self) -> bool {
        self.lock().has_more
    }

    pub fn params(&self) -> ListParams {
        self.lock().params.clone()
    }

    pub fn selected(&self) -> Option<WikiDoc> {
        self.lock().selected.clone()
    }

    /// Whether a search term currently narrows the list
    pub fn is_filtering(&self) -> bool {
        !self.lock().params.search_term.is_empty()
    }

    /// Fetch the current page for the current params.
    ///
    /// The result is applied only if the params have not changed since the
    /// fetch was issued; a superseded response is discarded and the loading
    /// flag left for the in-flight successor to clear.
    pub async fn fetch(&self) -> ClientResult<()> {
        let snapshot = {
            let mut state = self.lock();
            state.is_loading = true;
            state.params.clone()
        };

        let result = self.inner.client.list(&snapshot).await;

        let mut state = self.lock();
        match result {
            Ok(page) => {
                if state.params == snapshot {
                    let docs = if self.inner.options.infinite_paging {
                        match state.docs.take() {
                            Some(mut loaded) => {
                                loaded.extend(page.items);
                                loaded
                            }
                            None => page.items,
                        }
                    } else {
                        page.items
                    };
                    state.docs = Some(docs);
                    state.total_count = page.total_count;
                    state.has_more = page.has_more;
                    state.is_loading = false;
                }
                Ok(())
            }
            Err(err) => {
                state.is_loading = false;
                Err(err)
            }
        }
    }

    /// Shallow-merge into the query descriptor and refetch.
    pub async fn set_params(&self, update: ListParamsUpdate) -> ClientResult<()> {
        self.lock().params.apply(update);
        self.fetch().await
    }

    /// Go to a specific page, or with `None` advance to the next page if
    /// there is one and wrap back to the first otherwise.
    pub async fn set_page(&self, page: Option<u32>) -> ClientResult<()> {
        let page = match page {
            Some(page) => page,
            None => {
                let state = self.lock();
                if state.has_more {
                    state.params.page + 1
                } else {
                    0
                }
            }
        };
        self.set_params(ListParamsUpdate {
            page: Some(page),
            ..Default::default()
        })
        .await
    }

    /// Sort on a column: the active column flips direction, a new column
    /// resets to descending. Refetches.
    pub async fn sort_by(&self, field: SortField) -> ClientResult<()> {
        self.lock().params.sort_by(field);
        self.fetch().await
    }

    /// Set the search term, debounced.
    ///
    /// The term and page reset apply synchronously and the loading flag is
    /// raised immediately, so the UI reflects "searching" at once; the
    /// fetch itself is issued only after a quiet period with no further
    /// calls. Rapid calls coalesce into a single fetch using the last term.
    /// With no caller left to receive it, a failure of that fetch is logged.
    pub fn set_search_term(&self, term: impl Into<String>) {
        {
            let mut state = self.lock();
            state.is_loading = true;
            state.params.search_term = term.into();
            state.params.page = 0;
        }

        // restart, not stack: a newer call invalidates this timer's epoch
        let epoch = self.inner.search_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(this.inner.options.search_debounce).await;
            if this.inner.search_epoch.load(Ordering::SeqCst) != epoch {
                return;
            }
            if let Err(err) = this.fetch().await {
                tracing::error!("debounced wiki doc search failed: {err}");
            }
        });
    }

    /// Set the selected document directly, or clear the selection. No I/O.
    pub fn set_selected(&self, doc: Option<WikiDoc>) {
        self.lock().selected = doc;
    }

    /// Select a document by id, preferring the loaded items and falling
    /// back to a transport fetch only on a miss.
    pub async fn select_by_id(&self, id: &str) -> ClientResult<()> {
        let loaded = {
            let state = self.lock();
            state
                .docs
                .as_ref()
                .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned())
        };
        let doc = match loaded {
            Some(doc) => doc,
            None => self.inner.client.get(id).await?,
        };
        self.lock().selected = Some(doc);
        Ok(())
    }
}
