use anyhow::{Context, Result};
use axolog_schemas::{
    file_formats::{ProfileFile, SessionScriptFile},
    CareProfile,
};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};

/// Loads the care profile from a YAML file, or the built-in profile when no
/// file is given.
pub fn load_profile(path: Option<&Path>) -> Result<CareProfile> {
    let Some(path) = path else {
        return Ok(CareProfile::default());
    };
    println!("Loading care profile from '{}'...", path.display());
    let file: ProfileFile = load_yaml(path)?;
    tracing::debug!(schema_version = %file.schema_version, "care profile loaded");
    Ok(file.profile)
}

pub fn load_script(path: &Path) -> Result<SessionScriptFile> {
    let script: SessionScriptFile = load_yaml(path)?;
    tracing::debug!(
        schema_version = %script.schema_version,
        steps = script.steps.len(),
        "session script loaded"
    );
    Ok(script)
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_means_default_profile() {
        assert_eq!(load_profile(None).unwrap(), CareProfile::default());
    }

    #[test]
    fn reads_profile_wrapper() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "schema_version: \"1\"\nprofile:\n  pet_name: Mochi\n  temperature_danger_above: 21.0\n"
        )
        .unwrap();

        let profile = load_profile(Some(file.path())).unwrap();
        assert_eq!(profile.pet_name, "Mochi");
        assert_eq!(profile.temperature_danger_above, 21.0);
        assert_eq!(profile.urgent_within_days, 3);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "profile: [not, a, map]").unwrap();
        let err = load_profile(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse YAML"));
    }
}
