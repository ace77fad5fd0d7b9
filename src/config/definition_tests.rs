//! Tests for service definition resolution.

use std::path::PathBuf;

use super::cli::Cli;
use super::definition::{ServiceDefinition, raw_options, write_default_config};
use super::toml::TomlConfig;
use super::value::{ConfigValue, RawValue};
use super::{ConfigError, defaults};
use crate::params::StartupType;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["nssm-wrap"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod name {
    use super::*;

    #[test]
    fn missing_name_returns_error() {
        let result = ServiceDefinition::from_raw(&cli(&["start"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "service.name",
                ..
            })
        ));
    }

    #[test]
    fn name_from_toml() {
        let config = toml("[service]\nname = \"web\"");
        let definition = ServiceDefinition::from_raw(&cli(&["start"]), Some(&config)).unwrap();

        assert_eq!(definition.name, "web");
    }

    #[test]
    fn cli_name_overrides_toml() {
        let config = toml("[service]\nname = \"web\"");
        let definition =
            ServiceDefinition::from_raw(&cli(&["start", "-n", "api"]), Some(&config)).unwrap();

        assert_eq!(definition.name, "api");
    }
}

mod path {
    use super::*;

    #[test]
    fn install_positional_overrides_toml() {
        let config = toml("[service]\nname = \"web\"\npath = 'C:\\old.exe'");
        let definition = ServiceDefinition::from_raw(
            &cli(&["install", "C:\\new.exe"]),
            Some(&config),
        )
        .unwrap();

        assert_eq!(definition.require_path().unwrap(), "C:\\new.exe");
    }

    #[test]
    fn path_from_toml_for_other_commands() {
        let config = toml("[service]\nname = \"web\"\npath = 'C:\\web.exe'");
        let definition = ServiceDefinition::from_raw(&cli(&["stop"]), Some(&config)).unwrap();

        assert_eq!(definition.path.as_deref(), Some("C:\\web.exe"));
    }

    #[test]
    fn missing_path_only_fails_when_required() {
        let definition = ServiceDefinition::from_raw(&cli(&["install", "-n", "web"]), None).unwrap();

        assert!(definition.path.is_none());
        assert!(matches!(
            definition.require_path(),
            Err(ConfigError::MissingRequired {
                field: "service.path",
                ..
            })
        ));
    }
}

mod executable {
    use super::*;

    #[test]
    fn cli_overrides_toml() {
        let config = toml("nssm = 'D:\\nssm.exe'\n[service]\nname = \"web\"");
        let definition = ServiceDefinition::from_raw(
            &cli(&["status", "--nssm", "E:\\nssm.exe"]),
            Some(&config),
        )
        .unwrap();

        assert_eq!(definition.executable, PathBuf::from("E:\\nssm.exe"));
    }

    #[test]
    fn toml_used_without_cli() {
        let config = toml("nssm = 'D:\\nssm.exe'\n[service]\nname = \"web\"");
        let mut args = cli(&["status"]);
        // NSSM_EXE may be set in the test environment
        args.nssm = None;

        let definition = ServiceDefinition::from_raw(&args, Some(&config)).unwrap();
        assert_eq!(definition.executable, PathBuf::from("D:\\nssm.exe"));
    }

    #[test]
    fn falls_back_to_path_lookup() {
        let mut args = cli(&["status", "-n", "web"]);
        args.nssm = None;

        let definition = ServiceDefinition::from_raw(&args, None).unwrap();
        assert_eq!(
            definition.executable,
            PathBuf::from(defaults::NSSM_EXECUTABLE)
        );
    }
}

mod options {
    use super::*;

    const FILE: &str = r#"
        [service]
        name = "web"

        [options]
        startup = "MANUAL"
        display_name = "Web"
        colour = "red"
    "#;

    #[test]
    fn toml_options_are_validated() {
        let config = toml(FILE);
        let definition = ServiceDefinition::from_raw(&cli(&["configure"]), Some(&config)).unwrap();

        let options = &definition.configuration;
        assert_eq!(options.len(), 2);
        assert_eq!(options["startup"], ConfigValue::Startup(StartupType::Manual));
    }

    #[test]
    fn overrides_layer_on_top_of_file() {
        let config = toml(FILE);
        let args = cli(&[
            "configure",
            "--set",
            "startup=AUTOMATIC",
            "--set",
            "console_window=false",
        ]);
        let definition = ServiceDefinition::from_raw(&args, Some(&config)).unwrap();

        let options = &definition.configuration;
        assert_eq!(options["startup"], ConfigValue::Startup(StartupType::Automatic));
        assert_eq!(options["console_window"], ConfigValue::Flag(false));
        assert_eq!(options["display_name"], ConfigValue::from("Web"));
    }

    #[test]
    fn raw_options_keep_unknown_keys() {
        let config = toml(FILE);
        let raw = raw_options(&cli(&["show"]), Some(&config)).unwrap();

        assert_eq!(raw["colour"], RawValue::from("red"));
    }

    #[test]
    fn invalid_option_is_reported() {
        let args = cli(&["configure", "-n", "web", "--set", "stop_console=soon"]);
        let result = ServiceDefinition::from_raw(&args, None);

        let Err(ConfigError::Validation(err)) = result else {
            panic!("expected validation error");
        };
        assert!(err.mentions("stop_console"));
    }

    #[test]
    fn malformed_override_is_reported() {
        let args = cli(&["configure", "-n", "web", "--set", "startup"]);
        let result = ServiceDefinition::from_raw(&args, None);

        assert!(matches!(result, Err(ConfigError::InvalidAssignment { .. })));
    }
}

mod files {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_config_flag() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nname = \"from-file\"").unwrap();
        let path = file.path().to_str().unwrap();

        let definition = ServiceDefinition::load(&cli(&["status", "-c", path])).unwrap();
        assert_eq!(definition.name, "from-file");
    }

    #[test]
    fn load_without_config_uses_cli_only() {
        let definition = ServiceDefinition::load(&cli(&["status", "-n", "web"])).unwrap();

        assert_eq!(definition.name, "web");
        assert!(definition.configuration.is_empty());
    }

    #[test]
    fn write_default_config_creates_parsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svc.toml");

        write_default_config(&path).unwrap();

        assert!(TomlConfig::load(&path).is_ok());
    }

    #[test]
    fn write_default_config_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("svc.toml");

        let result = write_default_config(&path);
        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }

    #[test]
    fn display_summarizes_definition() {
        let mut args = cli(&["install", "C:\\web.exe", "-n", "web"]);
        args.nssm = Some(PathBuf::from("nssm"));

        let definition = ServiceDefinition::from_raw(&args, None).unwrap();
        assert_eq!(
            definition.to_string(),
            "Service { name: web, path: C:\\web.exe, nssm: nssm, options: 0 }"
        );
    }
}
