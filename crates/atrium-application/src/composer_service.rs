//! Composer service: the hosting shell's entry point to the composer core.
//!
//! Wraps the pill state, the submission router, the host feed, and the
//! transient notice surface into one façade. All reads the shell needs per
//! render (pills, intent summary, directory, readiness) go through here.

use atrium_core::composer::{
    self, Mutation, Notice, Pill, PillState, SubmissionRouter, SubmitOutcome,
};
use atrium_core::config::OperatorConfig;
use atrium_core::directory;
use atrium_core::feed::HostFeed;
use atrium_core::person::Person;

use crate::notice::NoticeHost;

/// Coordinates one composer instance against a host feed.
pub struct ComposerService<F: HostFeed> {
    feed: F,
    state: PillState,
    router: SubmissionRouter,
    notices: NoticeHost,
}

impl<F: HostFeed> ComposerService<F> {
    /// Creates a composer over `feed` for the configured operator.
    pub fn new(operator: OperatorConfig, feed: F) -> Self {
        Self {
            feed,
            state: PillState::new(),
            router: SubmissionRouter::new(operator.to_person()),
            notices: NoticeHost::new(),
        }
    }

    /// Applies one mutation, surfacing any switch notice.
    pub fn apply(&mut self, mutation: Mutation) {
        if let Some(notice) = self.state.apply(mutation) {
            tracing::debug!("[ComposerService] {}", notice);
            self.notices.post(notice);
        }
    }

    /// The current pill state (read-only; mutate through [`apply`]).
    ///
    /// [`apply`]: ComposerService::apply
    pub fn state(&self) -> &PillState {
        &self.state
    }

    /// The pill row in contract order.
    pub fn pills(&self) -> Vec<Pill> {
        composer::pills(&self.state)
    }

    /// The read-only intent summary for the current modifier combination.
    pub fn intent_summary(&self) -> Option<String> {
        composer::summarize(&self.state, self.router.operator())
    }

    /// The input placeholder for the current modifier combination.
    pub fn placeholder(&self) -> &'static str {
        self.state.placeholder()
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        self.router.can_submit(&self.state)
    }

    /// Submits the current state: on emission the events are appended to
    /// the host feed and the pill state is reset; a blocked submission is a
    /// no-op.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.router.submit(&mut self.state);
        match &outcome {
            SubmitOutcome::Emitted(events) => {
                for event in events {
                    tracing::info!("[ComposerService] emitted event: {}", event.id());
                    self.feed.append(event.clone());
                }
            }
            SubmitOutcome::Blocked(reason) => {
                tracing::debug!("[ComposerService] submission blocked: {:?}", reason);
            }
        }
        outcome
    }

    /// The full recipient directory derived from the feed.
    pub fn people(&self) -> Vec<Person> {
        directory::list(self.feed.entries())
    }

    /// Individually discovered staff, for the staff sub-menu.
    pub fn staff(&self) -> Vec<Person> {
        directory::staff_list(self.feed.entries())
    }

    /// Directory filtered by a free-text query.
    pub fn search_people(&self, query: &str) -> Vec<Person> {
        directory::search(self.feed.entries(), query)
    }

    /// The transient notice currently on screen, if any.
    pub fn current_notice(&self) -> Option<Notice> {
        self.notices.current()
    }

    /// The host feed this composer appends to.
    pub fn feed(&self) -> &F {
        &self.feed
    }
}
