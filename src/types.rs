use serde::{Deserialize, Deserializer};

/// One recorded voice-command event, exactly as the Game Agent serves it.
///
/// All fields are display-ready strings supplied by the agent; the dashboard
/// does no parsing or timezone handling of its own. Entries are shown in the
/// order the agent returns them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "nullable_string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub command: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub transcript: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub result: String,
}

// The agent writes `"command": null` for transcripts it could not match, and
// may omit fields entirely; both decode to an empty string.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
