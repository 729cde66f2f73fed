use super::dataset::PlaylistSource;
use super::range::YearRange;
use serde::Serialize;

/// Outcome of looking a year range up in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found { name: String, link: String },
    NotFound { range: YearRange },
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// Maps year ranges onto pre-made playlists by canonical name
pub struct PlaylistResolver<S: PlaylistSource> {
    source: S,
}

impl<S: PlaylistSource> PlaylistResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Exact-name lookup; a missing playlist is an answer, not an error
    pub fn resolve(&self, range: YearRange) -> Resolution {
        let name = range.canonical_name();
        match self.source.find_by_name(&name) {
            Some(record) => {
                log::debug!("Resolved '{}' to {}", name, record.link);
                Resolution::Found {
                    name: record.name,
                    link: record.link,
                }
            }
            None => {
                log::debug!("No playlist named '{}'", name);
                Resolution::NotFound { range }
            }
        }
    }
}
