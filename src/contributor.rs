use serde::Deserialize;

/// One entry of the `/repos/{owner}/{repo}/contributors` listing.
///
/// Only the fields the widget displays are kept; everything else in the
/// upstream payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub contributions: u64,
}

impl Contributor {
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.login)
    }
}
