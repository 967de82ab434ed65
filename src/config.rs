use clap::ValueEnum;

const DEFAULT_ORGANIZATION: &str = "haxtheweb";
const DEFAULT_REPO: &str = "webcomponents";
const DEFAULT_LIMIT: i64 = 10;

/// The three externally settable widget properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub organization: String,
    pub repo: String,
    /// Values <= 0 display nothing.
    pub limit: i64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_owned(),
            repo: DEFAULT_REPO.to_owned(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl WidgetConfig {
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.organization, self.repo)
    }
}

/// Which result wins when fetches overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RefetchPolicy {
    /// Whatever resolves last is displayed, even if it was requested earlier.
    #[default]
    #[value(name = "last-resolved")]
    LastResolvedWins,
    /// Results from superseded requests are dropped.
    #[value(name = "latest-request")]
    LatestRequestWins,
}

/// How a failed fetch shows up in the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Empty list plus an error notice.
    #[default]
    Placeholder,
    /// Keep showing the last list that loaded.
    KeepLast,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetOptions {
    pub refetch: RefetchPolicy,
    pub on_error: FailurePolicy,
}
