use std::{
    collections::HashSet,
    time::Instant,
};

use crate::core::{
    debounce::SearchDebouncer,
    errors::ApiError,
    models::{
        Quote,
        VoteReceipt,
    },
    projection::{
        self,
        ChartSeries,
        SortOrder,
    },
};

/// The single-slot error channel. A new error overwrites an unacknowledged
/// one; the latest error wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSignal {
    pub message: String,
    pub auth_failure: bool,
}

impl ErrorSignal {
    fn from_error(err: &ApiError) -> Self {
        Self { message: err.to_string(), auth_failure: err.is_auth_failure() }
    }
}

/// What acknowledging the open error means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAck {
    /// Close the dialog, nothing else.
    Dismissed,
    /// Auth failure: discard all in-memory state and return to the login
    /// boundary.
    EndSession,
}

/// View-state container for the quote screen. Everything the rendered list
/// depends on lives here: the quote collection, both halves of the search
/// state, the sort order, the per-id vote locks, the outstanding-request
/// count behind the loading indicator, and the error slot. The displayed
/// list is always a pure function of (quotes, raw input, sort order).
pub struct QuoteBoard {
    quotes: Vec<Quote>,
    search: SearchDebouncer,
    settled_term: String,
    sort: SortOrder,
    pending_votes: HashSet<String>,
    outstanding: usize,
    last_issued_fetch: u64,
    error: Option<ErrorSignal>,
}

impl QuoteBoard {
    pub fn new(sort: SortOrder) -> Self {
        Self {
            quotes: Vec::new(),
            search: SearchDebouncer::new(),
            settled_term: String::new(),
            sort,
            pending_votes: HashSet::new(),
            outstanding: 0,
            last_issued_fetch: 0,
            error: None,
        }
    }

    // --- search -----------------------------------------------------------

    pub fn search_input(&self) -> &str {
        self.search.raw()
    }

    /// Records a keystroke: the raw value updates immediately (and with it
    /// the displayed list), the settle timer restarts.
    pub fn edit_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search.set_input(text, now);
    }

    /// Arms the settle timer without an edit, for the initial fetch when the
    /// screen opens.
    pub fn arm_search(&mut self, now: Instant) {
        self.search.arm(now);
    }

    /// Promotes the raw value to the settled term once the burst is over.
    /// The caller is expected to start a fetch with the returned term.
    pub fn poll_search(&mut self, now: Instant) -> Option<String> {
        let term = self.search.poll(now)?;
        self.settled_term = term.clone();
        Some(term)
    }

    pub fn settled_term(&self) -> &str {
        &self.settled_term
    }

    pub fn time_until_settle(&self, now: Instant) -> Option<std::time::Duration> {
        self.search.time_until_settle(now)
    }

    // --- sort -------------------------------------------------------------

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    // --- list fetches -----------------------------------------------------

    /// Hands out the sequence number for a new list fetch. Responses are
    /// only applied when they carry the latest issued number, so a slow
    /// early fetch can never clobber the results of a later one.
    pub fn begin_fetch(&mut self) -> u64 {
        self.last_issued_fetch += 1;
        self.outstanding += 1;
        self.last_issued_fetch
    }

    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<Quote>, ApiError>) {
        self.outstanding = self.outstanding.saturating_sub(1);

        if seq != self.last_issued_fetch {
            println!("Discarding stale quote fetch #{seq} (latest is #{})", self.last_issued_fetch);
            return;
        }

        match result {
            // Wholesale replacement. The per-id vote locks survive it.
            Ok(quotes) => self.quotes = quotes,
            Err(err) => self.raise_error(&err),
        }
    }

    // --- votes ------------------------------------------------------------

    /// Admits a vote for `id` unless one is already in flight for it.
    /// Returns false for the rejected duplicate; the caller must not issue a
    /// request in that case. Votes on distinct ids run concurrently.
    pub fn begin_vote(&mut self, id: &str) -> bool {
        if !self.pending_votes.insert(id.to_string()) {
            return false;
        }
        self.outstanding += 1;
        true
    }

    /// Releases the id no matter how the vote went, then merges the receipt
    /// in place on success. No refetch: only the matching record's count
    /// changes.
    pub fn finish_vote(&mut self, id: &str, result: Result<VoteReceipt, ApiError>) {
        self.pending_votes.remove(id);
        self.outstanding = self.outstanding.saturating_sub(1);

        match result {
            Ok(receipt) => {
                if let Some(quote) = self.quotes.iter_mut().find(|q| q.id == receipt.id) {
                    quote.votes = receipt.votes;
                }
            }
            Err(err) => self.raise_error(&err),
        }
    }

    pub fn vote_pending(&self, id: &str) -> bool {
        self.pending_votes.contains(id)
    }

    /// Coarse flag behind the loading indicator: any fetch or vote is still
    /// outstanding. Informational only; it never gates admissions.
    pub fn is_loading(&self) -> bool {
        self.outstanding > 0
    }

    // --- error signal -----------------------------------------------------

    pub fn raise_error(&mut self, err: &ApiError) {
        self.error = Some(ErrorSignal::from_error(err));
    }

    pub fn error(&self) -> Option<&ErrorSignal> {
        self.error.as_ref()
    }

    pub fn acknowledge_error(&mut self) -> Option<ErrorAck> {
        self.error.take().map(|signal| {
            if signal.auth_failure {
                ErrorAck::EndSession
            } else {
                ErrorAck::Dismissed
            }
        })
    }

    // --- projections ------------------------------------------------------

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// The list as rendered: filtered by the raw input (the settled term
    /// only drives fetches; during the debounce window the two filters may
    /// transiently disagree, which is accepted), stably sorted by votes.
    pub fn displayed(&self) -> Vec<&Quote> {
        projection::visible_quotes(&self.quotes, self.search.raw(), self.sort)
    }

    pub fn chart_series(&self) -> ChartSeries {
        projection::chart_series(&self.displayed())
    }
}
