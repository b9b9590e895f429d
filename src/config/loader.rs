//! Check list loading and validation.
//!
//! A check list comes either from a YAML file or from the built-in list
//! of the toolkit's dependencies. Either way it is validated and turned
//! into [`CheckSpec`]s before any probe runs.

use crate::check::CheckSpec;
use crate::config::schema::CheckConfig;
use crate::error::{CheckerError, Result};
use crate::probe::python::is_valid_module_name;
use crate::probe::ProbeRegistry;
use crate::version::Version;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The built-in check list, embedded at compile time.
const DEFAULT_CHECKS: &str = include_str!("default_checks.yml");

/// Load a check list file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(path: &Path) -> Result<CheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckerError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a `CheckConfig`.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<CheckConfig> {
    serde_yaml::from_str(content).map_err(|e| CheckerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The toolkit's own dependency list.
pub fn builtin_config() -> Result<CheckConfig> {
    parse_config(DEFAULT_CHECKS, Path::new("<built-in>"))
}

/// Load `path` if given, otherwise the built-in list.
pub fn load_or_builtin(path: Option<&Path>) -> Result<CheckConfig> {
    match path {
        Some(path) => load_config(path),
        None => builtin_config(),
    }
}

/// Validate a check list and convert it into check specs.
///
/// # Errors
///
/// Returns `DuplicateCheck` if a component name repeats (ignoring case),
/// `InvalidVersion` if a required version does not parse, and
/// `ConfigValidationError` for any other bad field.
pub fn validate(config: &CheckConfig) -> Result<Vec<CheckSpec>> {
    if config.settings.timeout_secs == Some(0) {
        return Err(CheckerError::ConfigValidationError {
            message: "settings.timeout_secs must be greater than zero".to_string(),
        });
    }
    if let Some(python) = &config.settings.python {
        if python.trim().is_empty() {
            return Err(CheckerError::ConfigValidationError {
                message: "settings.python must not be empty".to_string(),
            });
        }
    }

    let registry = ProbeRegistry::new();
    let mut seen = HashSet::new();
    let mut specs = Vec::with_capacity(config.checks.len());

    for entry in &config.checks {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(CheckerError::ConfigValidationError {
                message: "every check needs a name".to_string(),
            });
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(CheckerError::DuplicateCheck {
                name: name.to_string(),
            });
        }

        let required_version = Version::parse(&entry.required_version)?;

        match &entry.probe {
            Some(probe) => {
                probe
                    .validate()
                    .map_err(|message| CheckerError::ConfigValidationError {
                        message: format!("check '{}': {}", name, message),
                    })?;
            }
            // Unregistered names are imported as python modules under their own name.
            None if registry.get(name).is_none() && !is_valid_module_name(name) => {
                return Err(CheckerError::ConfigValidationError {
                    message: format!(
                        "check '{}': not a python module name; declare a `probe` for it",
                        name
                    ),
                });
            }
            None => {}
        }

        specs.push(CheckSpec {
            name: name.to_string(),
            required_version,
            category: entry.category,
            purpose: entry.purpose.clone(),
            probe: entry.probe.clone(),
        });
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Category;
    use tempfile::TempDir;

    fn parse(yaml: &str) -> CheckConfig {
        parse_config(yaml, Path::new("checks.yml")).unwrap()
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(&temp.path().join("checks.yml")).unwrap_err();
        assert!(matches!(err, CheckerError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checks.yml");
        fs::write(&path, "checks:\n  - name: numpy\n    required_version: \"1.7\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.checks.len(), 1);
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("checks: [", Path::new("bad.yml")).unwrap_err();
        match err {
            CheckerError::ConfigParseError { path, .. } => assert_eq!(path, Path::new("bad.yml")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn builtin_list_is_valid() {
        let specs = validate(&builtin_config().unwrap()).unwrap();
        let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(&names[..3], &["Python", "numpy", "scipy"]);
        assert!(specs[..3].iter().all(CheckSpec::is_required));
        assert!(specs[3..].iter().all(|s| s.category == Category::Optional));
        assert!(specs[3..].iter().all(|s| s.purpose.is_some()));
    }

    #[test]
    fn load_or_builtin_without_path_uses_builtin() {
        let config = load_or_builtin(None).unwrap();
        assert_eq!(config, builtin_config().unwrap());
    }

    #[test]
    fn rejects_duplicate_names_ignoring_case() {
        let config = parse(
            "checks:\n  - { name: numpy, required_version: \"1.7\" }\n  - { name: NumPy, required_version: \"1.8\" }\n",
        );
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, CheckerError::DuplicateCheck { name } if name == "NumPy"));
    }

    #[test]
    fn rejects_unparseable_required_version() {
        let config = parse("checks:\n  - { name: numpy, required_version: latest }\n");
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, CheckerError::InvalidVersion { version } if version == "latest"));
    }

    #[test]
    fn rejects_blank_name() {
        let config = parse("checks:\n  - { name: \" \", required_version: \"1\" }\n");
        assert!(matches!(
            validate(&config),
            Err(CheckerError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn rejects_bad_probe() {
        let config = parse(
            "checks:\n  - name: numpy\n    required_version: \"1.7\"\n    probe: { kind: python-module, module: \"numpy; x\" }\n",
        );
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("check 'numpy'"));
    }

    #[test]
    fn rejects_unregistered_name_that_is_not_a_module() {
        let config = parse(
            "checks:\n  - name: \"os; open('/tmp/x', 'w').write('x'); import sys\"\n    required_version: \"1\"\n",
        );
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, CheckerError::ConfigValidationError { .. }));

        let config = parse("checks:\n  - { name: scikit-image, required_version: \"0.9\" }\n");
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("check 'scikit-image'"));
        assert!(err.to_string().contains("probe"));
    }

    #[test]
    fn explicit_probe_allows_any_name() {
        let config = parse(
            "checks:\n  - name: scikit-image\n    required_version: \"0.9\"\n    probe: { kind: python-module, module: skimage }\n",
        );
        let specs = validate(&config).unwrap();
        assert_eq!(specs[0].name, "scikit-image");
    }

    #[test]
    fn unregistered_module_name_is_accepted() {
        let config = parse("checks:\n  - { name: skimage, required_version: \"0.9\" }\n");
        assert_eq!(validate(&config).unwrap().len(), 1);
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = parse("settings:\n  timeout_secs: 0\n");
        assert!(validate(&config).is_err());
    }

    #[test]
    fn converts_entries_in_order() {
        let config = parse(
            "checks:\n  - { name: scipy, required_version: \"0.12\" }\n  - { name: h5py, required_version: \"2.0\", category: optional, purpose: matlab }\n",
        );
        let specs = validate(&config).unwrap();
        assert_eq!(specs[0].name, "scipy");
        assert_eq!(specs[0].required_version, Version::parse("0.12").unwrap());
        assert_eq!(specs[1].category, Category::Optional);
        assert_eq!(specs[1].purpose.as_deref(), Some("matlab"));
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(validate(&CheckConfig::default()).unwrap().is_empty());
    }
}
