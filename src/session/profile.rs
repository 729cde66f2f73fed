use crate::models::{Genre, Picture};

pub const DEFAULT_NAME: &str = "New User";
pub const DEFAULT_AGE: u32 = 18;
pub const MIN_AGE: u32 = 13;
pub const MAX_AGE: u32 = 100;

/// Saved user profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub favorite_genres: Vec<Genre>,
    pub picture: Option<Picture>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            age: DEFAULT_AGE,
            favorite_genres: Vec::new(),
            picture: None,
        }
    }
}

/// Raw values from the profile form, before any defaulting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub age: u32,
    pub favorite_genres: Vec<Genre>,
    pub picture: Option<Picture>,
}

impl ProfileFields {
    /// A blank form as first shown to a new user
    pub fn blank() -> Self {
        Self {
            age: DEFAULT_AGE,
            ..Self::default()
        }
    }

    /// Add the genre if missing, otherwise remove it
    pub fn toggle_genre(&mut self, genre: Genre) {
        if let Some(pos) = self.favorite_genres.iter().position(|g| *g == genre) {
            self.favorite_genres.remove(pos);
        } else {
            self.favorite_genres.push(genre);
        }
    }

    /// Normalize form input into a profile; nothing is rejected
    pub fn into_profile(self) -> Profile {
        let name = self.name.trim();
        let name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.to_string()
        };

        let mut favorite_genres: Vec<Genre> = Vec::with_capacity(self.favorite_genres.len());
        for genre in self.favorite_genres {
            if genre != Genre::NotSet && !favorite_genres.contains(&genre) {
                favorite_genres.push(genre);
            }
        }
        if favorite_genres.is_empty() {
            favorite_genres.push(Genre::NotSet);
        }

        Profile {
            name,
            age: self.age.clamp(MIN_AGE, MAX_AGE),
            favorite_genres,
            picture: self.picture,
        }
    }
}

impl From<&Profile> for ProfileFields {
    /// Pre-populate the form from a saved profile
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            age: profile.age,
            favorite_genres: profile
                .favorite_genres
                .iter()
                .copied()
                .filter(|g| *g != Genre::NotSet)
                .collect(),
            picture: profile.picture.clone(),
        }
    }
}
