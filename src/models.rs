use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// One row of the playlist dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistRecord {
    pub name: String,
    pub link: String,
}

/// Genres offered by the profile form, plus the placeholder stored when nothing was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Pop,
    Rock,
    HipHop,
    Jazz,
    Classical,
    Electronic,
    RnB,
    Country,
    NotSet,
}

impl Genre {
    /// Genres a user can actually select, in form order
    pub const SELECTABLE: [Genre; 8] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Classical,
        Genre::Electronic,
        Genre::RnB,
        Genre::Country,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::HipHop => "Hip-Hop",
            Genre::Jazz => "Jazz",
            Genre::Classical => "Classical",
            Genre::Electronic => "Electronic",
            Genre::RnB => "R&B",
            Genre::Country => "Country",
            Genre::NotSet => "Not Set",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = anyhow::Error;

    /// Only selectable genres parse; the sentinel is never user input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Genre::SELECTABLE
            .iter()
            .copied()
            .find(|genre| genre.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let options: Vec<&str> = Genre::SELECTABLE.iter().map(Genre::label).collect();
                anyhow::anyhow!("Unknown genre '{}' (choose from {})", wanted, options.join(", "))
            })
    }
}

/// Uploaded profile picture
#[derive(Clone, PartialEq, Eq)]
pub struct Picture {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Picture {
    /// Extensions accepted by the upload control
    pub const ACCEPTED_EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    /// Wrap an upload, or `None` when the file type is not an accepted image
    pub fn from_upload(file_name: &str, bytes: Vec<u8>) -> Option<Self> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        if !Self::ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }

        Some(Picture {
            file_name: file_name.to_string(),
            bytes,
        })
    }

    /// Short content fingerprint shown on the profile card
    pub fn fingerprint(&self) -> String {
        format!("{:x}", md5::compute(&self.bytes))[..8].to_string()
    }
}

// Image bytes are not useful in debug output
impl fmt::Debug for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picture")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
