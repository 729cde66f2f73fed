use super::profile::{Profile, ProfileFields};
use super::state::Session;
use crate::models::{Genre, Picture};
use crate::playlist::{PlaylistResolver, PlaylistSource, Resolution, YearRange};

pub const PLAYLISTS_NOTICE: &str = "Coming Soon!";
pub const SETTINGS_NOTICE: &str = "Settings will be available soon!";

/// Discrete user interactions with the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetName(String),
    SetAge(u32),
    ToggleGenre(Genre),
    SetPicture(Option<Picture>),
    /// Save with explicit values, or with the form contents when `None`
    SaveProfile(Option<ProfileFields>),
    RequestEdit,
    OpenPlaylists,
    OpenSettings,
    GetPlaylist(YearRange),
}

/// What the front end should show after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FormUpdated(ProfileFields),
    ProfileSaved(Profile),
    EditingProfile(ProfileFields),
    Notice(&'static str),
    Playlist {
        greeting_name: String,
        resolution: Resolution,
    },
    /// The action has no control in the current phase
    Ignored,
}

/// Routes actions for one session against a shared playlist resolver
pub struct Dispatcher<'a, S: PlaylistSource> {
    resolver: &'a PlaylistResolver<S>,
    session: Session,
}

impl<'a, S: PlaylistSource> Dispatcher<'a, S> {
    pub fn new(resolver: &'a PlaylistResolver<S>) -> Self {
        Self {
            resolver,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn dispatch(&mut self, action: Action) -> Response {
        log::debug!("Dispatching {:?} in {:?}", action, self.session.phase());
        let submitted = self.session.is_submitted();

        match action {
            Action::SetName(_) | Action::SetAge(_) | Action::ToggleGenre(_) | Action::SetPicture(_)
                if submitted =>
            {
                Response::Ignored
            }
            Action::SetName(name) => {
                let form = self.session.form();
                form.name = name;
                Response::FormUpdated(form.clone())
            }
            Action::SetAge(age) => {
                let form = self.session.form();
                form.age = age;
                Response::FormUpdated(form.clone())
            }
            Action::ToggleGenre(genre) => {
                let form = self.session.form();
                form.toggle_genre(genre);
                Response::FormUpdated(form.clone())
            }
            Action::SetPicture(picture) => {
                let form = self.session.form();
                form.picture = picture;
                Response::FormUpdated(form.clone())
            }
            // The form is hidden once saved, so there is nothing to submit
            Action::SaveProfile(None) if submitted => Response::Ignored,
            Action::SaveProfile(fields) => {
                let fields = fields.unwrap_or_else(|| self.session.form().clone());
                Response::ProfileSaved(self.session.save_profile(fields).clone())
            }
            Action::RequestEdit if submitted => {
                Response::EditingProfile(self.session.request_edit().clone())
            }
            Action::OpenPlaylists if submitted => Response::Notice(PLAYLISTS_NOTICE),
            Action::OpenSettings if submitted => Response::Notice(SETTINGS_NOTICE),
            Action::RequestEdit | Action::OpenPlaylists | Action::OpenSettings => Response::Ignored,
            Action::GetPlaylist(range) => Response::Playlist {
                greeting_name: self.session.display_name().to_string(),
                resolution: self.resolver.resolve(range),
            },
        }
    }
}
