use super::profile::{Profile, ProfileFields, DEFAULT_NAME};

/// Whether the profile form is open or the saved profile is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotSubmitted,
    Submitted,
}

/// Per-user state for one interactive session
#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: SessionPhase,
    profile: Option<Profile>,
    form: Option<ProfileFields>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SessionPhase::Submitted
    }

    /// Current profile, defaulted on first access
    pub fn get_profile(&mut self) -> &Profile {
        self.profile.get_or_insert_with(Profile::default)
    }

    /// Profile form contents, blank until the first edit request
    pub fn form(&mut self) -> &mut ProfileFields {
        self.form.get_or_insert_with(ProfileFields::blank)
    }

    /// Replace the whole profile and show it
    pub fn save_profile(&mut self, fields: ProfileFields) -> &Profile {
        let profile = fields.into_profile();
        log::info!("Saved profile for '{}'", profile.name);
        self.phase = SessionPhase::Submitted;
        self.form = None;
        self.profile.insert(profile)
    }

    /// Reopen the form, pre-populated from the saved profile
    pub fn request_edit(&mut self) -> &ProfileFields {
        self.phase = SessionPhase::NotSubmitted;
        let fields = self
            .profile
            .as_ref()
            .map(ProfileFields::from)
            .unwrap_or_else(ProfileFields::blank);
        self.form.insert(fields)
    }

    /// Name used in greetings; only a submitted profile is greeted by name
    pub fn display_name(&self) -> &str {
        match (&self.phase, &self.profile) {
            (SessionPhase::Submitted, Some(profile)) => profile.name.as_str(),
            _ => DEFAULT_NAME,
        }
    }
}
