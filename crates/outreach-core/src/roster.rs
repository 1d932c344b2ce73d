use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::influencer::Influencer;
use crate::ConfigError;

const BUNDLED_ROSTER: &str = include_str!("../../../config/influencers.yaml");

#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub influencers: Vec<Influencer>,
}

/// The sample roster compiled into the binary.
///
/// # Errors
///
/// Returns `ConfigError` if the embedded YAML fails to parse or validate.
pub fn bundled_roster() -> Result<Vec<Influencer>, ConfigError> {
    parse_roster(BUNDLED_ROSTER)
}

/// Load and validate an influencer roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_roster(path: &Path) -> Result<Vec<Influencer>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RosterFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_roster(&content)
}

fn parse_roster(content: &str) -> Result<Vec<Influencer>, ConfigError> {
    let roster: RosterFile =
        serde_yaml::from_str(content).map_err(ConfigError::RosterFileParse)?;
    validate_roster(&roster.influencers)?;
    Ok(roster.influencers)
}

fn validate_roster(influencers: &[Influencer]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for influencer in influencers {
        if influencer.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "influencer {} has an empty name",
                influencer.id
            )));
        }

        if !seen_ids.insert(influencer.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate influencer id: {} ('{}')",
                influencer.id, influencer.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::influencer::FollowerCount;

    #[test]
    fn bundled_roster_has_six_sample_influencers() {
        let roster = bundled_roster().expect("bundled roster");
        assert_eq!(roster.len(), 6);
        assert_eq!(roster[0].name, "Sarah Johnson");
        assert_eq!(roster[0].followers, FollowerCount::Label("1.2M".to_string()));
        assert_eq!(roster[4].location.as_deref(), Some("New York, NY"));
        assert_eq!(roster[5].platform, "twitter");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = r"
influencers:
  - { id: 1, name: One, followers: '1K', platform: instagram }
  - { id: 1, name: Two, followers: '2K', platform: youtube }
";
        let err = parse_roster(yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate influencer id: 1")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let yaml = r"
influencers:
  - { id: 4, name: '  ', followers: 1200, platform: twitter }
";
        assert!(matches!(
            parse_roster(yaml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            parse_roster("influencers: [ { id: oops"),
            Err(ConfigError::RosterFileParse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_roster(Path::new("/nonexistent/roster.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::RosterFileIo { .. }));
    }
}
