//! The widget's update cycle.
//!
//! Setting any of organization, repo or limit marks the widget dirty. The next
//! [`Widget::update`] hands out a [`FetchRequest`] tagged with a generation
//! number; running it produces a [`FetchResult`] that [`Widget::resolve`]
//! applies according to the configured [`RefetchPolicy`]. Requests are plain
//! values, so callers may keep several in flight and resolve them in any order.

use crate::config::{FailurePolicy, RefetchPolicy, WidgetConfig, WidgetOptions};
use crate::contributor::Contributor;
use crate::error::FetchOutcome;
use crate::github::GithubClient;
use crate::render::{self, Theme, View};
use crate::seed::SeedSource;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributorState {
    Loaded(Vec<Contributor>),
    Failed {
        reason: String,
        last: Vec<Contributor>,
    },
}

impl ContributorState {
    fn last_known(&self) -> &[Contributor] {
        match self {
            ContributorState::Loaded(list) => list,
            ContributorState::Failed { last, .. } => last,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Changed {
    organization: bool,
    repo: bool,
    limit: bool,
}

impl Changed {
    fn all() -> Self {
        Self {
            organization: true,
            repo: true,
            limit: true,
        }
    }

    fn any(self) -> bool {
        self.organization || self.repo || self.limit
    }
}

/// Snapshot of the properties at the time the fetch was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub organization: String,
    pub repo: String,
    pub limit: i64,
}

impl FetchRequest {
    pub async fn run(self, client: &GithubClient) -> FetchResult {
        let outcome = client
            .contributors(&self.organization, &self.repo, self.limit)
            .await;
        FetchResult {
            generation: self.generation,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct FetchResult {
    pub generation: u64,
    pub outcome: FetchOutcome,
}

pub struct Widget {
    config: WidgetConfig,
    options: WidgetOptions,
    state: ContributorState,
    changed: Changed,
    issued: u64,
}

impl Widget {
    /// Starts with no contributors and every property pending, so the first
    /// update cycle fetches.
    pub fn new(config: WidgetConfig, options: WidgetOptions) -> Self {
        Self {
            config,
            options,
            state: ContributorState::Loaded(Vec::new()),
            changed: Changed::all(),
            issued: 0,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> &ContributorState {
        &self.state
    }

    pub fn set_organization(&mut self, organization: impl Into<String>) {
        let organization = organization.into();
        if organization != self.config.organization {
            self.config.organization = organization;
            self.changed.organization = true;
        }
    }

    pub fn set_repo(&mut self, repo: impl Into<String>) {
        let repo = repo.into();
        if repo != self.config.repo {
            self.config.repo = repo;
            self.changed.repo = true;
        }
    }

    pub fn set_limit(&mut self, limit: i64) {
        if limit != self.config.limit {
            self.config.limit = limit;
            self.changed.limit = true;
        }
    }

    /// Returns a request if any watched property changed since the last cycle.
    pub fn update(&mut self) -> Option<FetchRequest> {
        if !self.changed.any() {
            return None;
        }
        self.changed = Changed::default();
        self.issued += 1;

        debug!(
            generation = self.issued,
            organization = %self.config.organization,
            repo = %self.config.repo,
            limit = self.config.limit,
            "issuing contributor fetch"
        );

        Some(FetchRequest {
            generation: self.issued,
            organization: self.config.organization.clone(),
            repo: self.config.repo.clone(),
            limit: self.config.limit,
        })
    }

    /// Applies a finished fetch. Returns `false` when the result was discarded.
    pub fn resolve(&mut self, result: FetchResult) -> bool {
        if self.options.refetch == RefetchPolicy::LatestRequestWins
            && result.generation < self.issued
        {
            debug!(
                generation = result.generation,
                latest = self.issued,
                "dropping superseded fetch result"
            );
            return false;
        }

        self.state = match result.outcome {
            Ok(list) => {
                info!(count = list.len(), "contributors loaded");
                ContributorState::Loaded(list)
            }
            Err(err) => {
                warn!(error = %err, generation = result.generation, "contributor fetch failed");
                ContributorState::Failed {
                    reason: err.to_string(),
                    last: self.state.last_known().to_vec(),
                }
            }
        };
        true
    }

    /// One full cycle: fetch if something changed, then apply the result.
    pub async fn refresh(&mut self, client: &GithubClient) -> bool {
        match self.update() {
            Some(request) => {
                let result = request.run(client).await;
                self.resolve(result)
            }
            None => false,
        }
    }

    fn view(&self) -> View<'_> {
        match (&self.state, self.options.on_error) {
            (ContributorState::Loaded(list), _) => View::Cards(list),
            (ContributorState::Failed { reason, .. }, FailurePolicy::Placeholder) => {
                View::Error(reason)
            }
            (state, FailurePolicy::KeepLast) => View::Cards(state.last_known()),
        }
    }

    pub fn render(&self, theme: Theme, seeds: &mut dyn SeedSource) -> String {
        render::render_widget(&self.config, self.view(), theme, seeds)
    }
}
