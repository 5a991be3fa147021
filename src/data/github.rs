//! Profile stats lookup
//!
//! One blocking request at startup, no retry. A cache-defeating query
//! parameter keeps intermediaries from serving stale bytes for the same
//! URL across sessions.

use std::time::{SystemTime, UNIX_EPOCH};

use super::DataError;
use crate::model::ProfileStats;

const API_ROOT: &str = "https://api.github.com/users";

/// Fetch the public profile counters for one username.
pub fn fetch_profile(username: &str) -> Result<ProfileStats, DataError> {
    let bust = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let url = format!("{API_ROOT}/{username}?v={bust}");
    tracing::debug!(%url, "fetching profile stats");

    match ureq::get(&url).set("User-Agent", "folio").call() {
        Ok(response) => response
            .into_json::<ProfileStats>()
            .map_err(|err| DataError::Decode(err.to_string())),
        Err(ureq::Error::Status(status, _)) => Err(DataError::Http { status }),
        Err(err) => Err(DataError::Transport(err.to_string())),
    }
}
