use crate::models::{Genre, Picture};
use crate::playlist::{PlaylistResolver, PlaylistSource, Resolution, YearRange};
use crate::session::{Action, Dispatcher, Profile, ProfileFields, Response};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Profile form:
  name <text>          set your name
  age <13-100>         set your age
  genre <genre>        toggle a favorite genre (Pop, Rock, Hip-Hop, Jazz, Classical, Electronic, R&B, Country)
  picture <path>       upload a png/jpg/jpeg profile picture
  picture clear        remove the picture
  save                 save your profile
Saved profile:
  edit                 edit your profile
  profile              show your profile
  playlists            my playlists
  settings             settings
Anytime:
  get [START[-END]]    find the Top US Singles playlist for those years
  help                 show this help
  quit                 leave";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    /// `get` without years uses the remembered range
    GetDefault,
    ShowProfile,
    Help,
    Quit,
}

/// Turn a command line into a command; picture uploads read the file here
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "name" => Command::Act(Action::SetName(rest.to_string())),
        "age" => {
            let age = rest
                .parse::<u32>()
                .with_context(|| format!("'{}' is not an age", rest))?;
            Command::Act(Action::SetAge(age))
        }
        "genre" => Command::Act(Action::ToggleGenre(rest.parse::<Genre>()?)),
        "picture" if rest.eq_ignore_ascii_case("clear") => Command::Act(Action::SetPicture(None)),
        "picture" if !rest.is_empty() => Command::Act(Action::SetPicture(load_picture(rest)?)),
        "save" => Command::Act(Action::SaveProfile(None)),
        "edit" => Command::Act(Action::RequestEdit),
        "playlists" => Command::Act(Action::OpenPlaylists),
        "settings" => Command::Act(Action::OpenSettings),
        "get" if rest.is_empty() => Command::GetDefault,
        "get" => Command::Act(Action::GetPlaylist(rest.parse::<YearRange>()?)),
        "profile" => Command::ShowProfile,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(anyhow::anyhow!("Unknown command '{}'; type 'help'", line)),
    };
    Ok(command)
}

/// Read an upload; files of the wrong type are dropped like the upload filter would
fn load_picture(path: &str) -> Result<Option<Picture>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read picture '{}'", path))?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    let picture = Picture::from_upload(file_name, bytes);
    if picture.is_none() {
        log::warn!(
            "Ignoring '{}': only {} pictures are accepted",
            file_name,
            Picture::ACCEPTED_EXTENSIONS.join("/")
        );
    }
    Ok(picture)
}

pub fn render_profile(profile: &Profile) -> String {
    let genres: Vec<&str> = profile.favorite_genres.iter().map(Genre::label).collect();
    let picture = match &profile.picture {
        Some(picture) => format!("{} [{}]", picture.file_name, picture.fingerprint()),
        None => "default avatar".to_string(),
    };
    format!(
        "### {}\n🖼  Picture: {}\n🎂 Age: {}\n🎵 Favorite Genres: {}",
        profile.name,
        picture,
        profile.age,
        genres.join(", ")
    )
}

pub fn render_form(form: &ProfileFields) -> String {
    let genres: Vec<&str> = form.favorite_genres.iter().map(Genre::label).collect();
    format!(
        "👤 Profile form: name '{}', age {}, genres [{}], picture {}",
        form.name,
        form.age,
        genres.join(", "),
        form.picture
            .as_ref()
            .map(|p| p.file_name.as_str())
            .unwrap_or("none")
    )
}

pub fn render_resolution(greeting_name: &str, resolution: &Resolution) -> String {
    match resolution {
        Resolution::Found { name, link } => {
            format!("🎶 Your Spotify Playlist: [{}]({})", name, link)
        }
        Resolution::NotFound { .. } => format!(
            "❌ Oops, {}! We don't have that playlist yet. Try selecting a narrower year range.",
            greeting_name
        ),
    }
}

pub fn render_response(response: &Response) -> Option<String> {
    match response {
        Response::FormUpdated(form) => Some(render_form(form)),
        Response::ProfileSaved(profile) => Some(render_profile(profile)),
        Response::EditingProfile(form) => Some(format!("🔄 Editing profile\n{}", render_form(form))),
        Response::Notice(text) => Some(format!("🔹 {}", text)),
        Response::Playlist {
            greeting_name,
            resolution,
        } => Some(render_resolution(greeting_name, resolution)),
        Response::Ignored => None,
    }
}

/// Interactive loop: one line, one action, one render
pub fn run<S, R, W>(
    resolver: &PlaylistResolver<S>,
    input: R,
    mut output: W,
    current_year: i32,
) -> Result<()>
where
    S: PlaylistSource,
    R: BufRead,
    W: Write,
{
    let mut dispatcher = Dispatcher::new(resolver);
    let mut last_range = YearRange::default();

    writeln!(output, "# 🎵 Welcome back, {}!", dispatcher.session().display_name())?;
    writeln!(output, "Relive the Music from Your High School Days! Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{:#}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::ShowProfile => {
                let session = dispatcher.session_mut();
                if session.is_submitted() {
                    let card = render_profile(session.get_profile());
                    writeln!(output, "{}", card)?;
                } else {
                    let form = render_form(session.form());
                    writeln!(output, "{}", form)?;
                }
            }
            Command::GetDefault => {
                let response = dispatcher.dispatch(Action::GetPlaylist(last_range));
                if let Some(text) = render_response(&response) {
                    writeln!(output, "{}", text)?;
                }
            }
            Command::Act(action) => {
                if let Action::GetPlaylist(range) = &action {
                    last_range = *range;
                }
                let response = dispatcher.dispatch(action);
                if let Response::ProfileSaved(profile) = &response {
                    last_range = YearRange::suggested_for_age(profile.age, current_year);
                    log::debug!("Suggested years for age {}: {}", profile.age, last_range);
                }
                match render_response(&response) {
                    Some(text) => writeln!(output, "{}", text)?,
                    None => writeln!(output, "That option is not available right now.")?,
                }
                if let Response::ProfileSaved(_) = response {
                    writeln!(
                        output,
                        "# 🎵 Welcome back, {}! Try 'get {}' for your high school years.",
                        dispatcher.session().display_name(),
                        last_range
                    )?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaylistRecord;
    use crate::playlist::PlaylistDataset;

    fn resolver() -> PlaylistResolver<PlaylistDataset> {
        PlaylistResolver::new(PlaylistDataset::from_records(vec![
            PlaylistRecord {
                name: "Top US Singles: 1995-2010".to_string(),
                link: "http://x/y".to_string(),
            },
            PlaylistRecord {
                name: "Top US Singles: 2006-2010".to_string(),
                link: "http://hs/years".to_string(),
            },
        ]))
    }

    fn run_script(script: &str) -> String {
        let resolver = resolver();
        let mut output = Vec::new();
        run(&resolver, script.as_bytes(), &mut output, 2010).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_form_commands() {
        assert_eq!(
            parse_command("name  Ana Maria ").unwrap(),
            Command::Act(Action::SetName("Ana Maria".to_string()))
        );
        assert_eq!(
            parse_command("AGE 30").unwrap(),
            Command::Act(Action::SetAge(30))
        );
        assert_eq!(
            parse_command("genre r&b").unwrap(),
            Command::Act(Action::ToggleGenre(Genre::RnB))
        );
        assert_eq!(
            parse_command("picture clear").unwrap(),
            Command::Act(Action::SetPicture(None))
        );
        assert_eq!(parse_command("name").unwrap(), Command::Act(Action::SetName(String::new())));
    }

    #[test]
    fn test_parse_get_commands() {
        assert_eq!(parse_command("get").unwrap(), Command::GetDefault);
        assert_eq!(
            parse_command("get 1995-2010").unwrap(),
            Command::Act(Action::GetPlaylist(YearRange::new(1995, 2010)))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_command("age old").is_err());
        assert!(parse_command("genre polka").is_err());
        assert!(parse_command("get soon").is_err());
        assert!(parse_command("dance").is_err());
        assert!(parse_command("picture").is_err());
    }

    #[test]
    fn test_picture_upload_filters_file_types() {
        let dir = tempfile::TempDir::new().unwrap();
        let png = dir.path().join("me.png");
        let gif = dir.path().join("me.gif");
        std::fs::write(&png, b"png bytes").unwrap();
        std::fs::write(&gif, b"gif bytes").unwrap();

        match parse_command(&format!("picture {}", png.display())).unwrap() {
            Command::Act(Action::SetPicture(Some(picture))) => {
                assert_eq!(picture.file_name, "me.png");
                assert_eq!(picture.bytes, b"png bytes");
            }
            other => panic!("expected picture upload, got {other:?}"),
        }
        assert_eq!(
            parse_command(&format!("picture {}", gif.display())).unwrap(),
            Command::Act(Action::SetPicture(None))
        );
    }

    #[test]
    fn test_render_not_found_uses_greeting_name() {
        let text = render_resolution(
            "Ana",
            &Resolution::NotFound {
                range: YearRange::single(1970),
            },
        );
        assert!(text.contains("Oops, Ana!"));
        assert!(text.contains("narrower year range"));
    }

    #[test]
    fn test_render_profile_card() {
        let profile = ProfileFields {
            name: "Ana".to_string(),
            age: 30,
            favorite_genres: vec![Genre::HipHop, Genre::Jazz],
            picture: None,
        }
        .into_profile();

        let card = render_profile(&profile);
        assert!(card.contains("### Ana"));
        assert!(card.contains("Age: 30"));
        assert!(card.contains("Hip-Hop, Jazz"));
        assert!(card.contains("default avatar"));
    }

    #[test]
    fn test_session_script() {
        let output = run_script(
            "get\n\
             playlists\n\
             name Ana\n\
             age 18\n\
             save\n\
             get\n\
             get 1996-2010\n\
             settings\n\
             edit\n\
             quit\n\
             get 1995-2010\n",
        );

        assert!(output.contains("Welcome back, New User!"));
        // Default range before a profile exists
        assert!(output.contains("[Top US Singles: 1995-2010](http://x/y)"));
        assert!(output.contains("That option is not available right now."));
        assert!(output.contains("Welcome back, Ana!"));
        // Suggested range after saving an 18 year old in 2010
        assert!(output.contains("[Top US Singles: 2006-2010](http://hs/years)"));
        assert!(output.contains("Oops, Ana!"));
        assert!(output.contains("Settings will be available soon!"));
        assert!(output.contains("Editing profile"));
        // Nothing runs after quit
        assert_eq!(output.matches("http://x/y").count(), 1);
    }

    #[test]
    fn test_bad_command_does_not_end_session() {
        let output = run_script("age old\nget 2006-2010\n");

        assert!(output.contains("'old' is not an age"));
        assert!(output.contains("http://hs/years"));
    }
}
