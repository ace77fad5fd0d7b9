//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command};
use super::defaults;

mod parsing {
    use super::*;

    #[test]
    fn parse_control_command_with_name() {
        let cli = Cli::parse_from_iter(["nssm-wrap", "start", "--name", "web"]);

        assert!(matches!(cli.command, Command::Start));
        assert_eq!(cli.name.as_deref(), Some("web"));
        assert!(!cli.verbose);
    }

    #[test]
    fn global_options_before_subcommand() {
        let cli = Cli::parse_from_iter([
            "nssm-wrap",
            "-n",
            "web",
            "-c",
            "svc.toml",
            "--nssm",
            r"C:\tools\nssm.exe",
            "-v",
            "status",
        ]);

        assert!(matches!(cli.command, Command::Status));
        assert_eq!(cli.name.as_deref(), Some("web"));
        assert_eq!(cli.config, Some(PathBuf::from("svc.toml")));
        assert_eq!(cli.nssm, Some(PathBuf::from(r"C:\tools\nssm.exe")));
        assert!(cli.verbose);
    }

    #[test]
    fn install_takes_path_and_overrides() {
        let cli = Cli::parse_from_iter([
            "nssm-wrap",
            "install",
            r"C:\apps\web.exe",
            "--set",
            "startup=MANUAL",
            "--set",
            "action_on_exit.Default=Restart",
        ]);

        let Command::Install { path, overrides } = &cli.command else {
            panic!("expected install command");
        };
        assert_eq!(path.as_deref(), Some(r"C:\apps\web.exe"));
        assert_eq!(
            overrides,
            &["startup=MANUAL", "action_on_exit.Default=Restart"]
        );
    }

    #[test]
    fn install_path_is_optional() {
        let cli = Cli::parse_from_iter(["nssm-wrap", "install"]);

        assert!(matches!(cli.command, Command::Install { path: None, .. }));
    }

    #[test]
    fn uninstall_is_an_alias_of_remove() {
        let cli = Cli::parse_from_iter(["nssm-wrap", "uninstall"]);

        assert!(matches!(cli.command, Command::Remove));
    }

    #[test]
    fn get_requires_key() {
        let cli = Cli::parse_from_iter(["nssm-wrap", "get", "display_name"]);
        assert!(matches!(cli.command, Command::Get { ref key } if key == "display_name"));

        let missing = Cli::try_parse_from(["nssm-wrap", "get"]);
        assert!(missing.is_err());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["nssm-wrap", "explode"]).is_err());
    }

    #[test]
    fn init_defaults_output_path() {
        let cli = Cli::parse_from_iter(["nssm-wrap", "init"]);

        assert!(cli.is_init());
        assert!(matches!(
            cli.command,
            Command::Init { ref output } if output == &PathBuf::from(defaults::CONFIG_FILE)
        ));
    }

    #[test]
    fn init_custom_output() {
        let cli = Cli::parse_from_iter(["nssm-wrap", "init", "-o", "web.toml"]);

        assert!(matches!(
            cli.command,
            Command::Init { ref output } if output == &PathBuf::from("web.toml")
        ));
    }
}

mod command {
    use super::*;

    #[test]
    fn overrides_only_for_option_commands() {
        let show = Cli::parse_from_iter(["nssm-wrap", "show", "--set", "a=1"]);
        assert_eq!(show.command.overrides(), ["a=1"]);

        let configure = Cli::parse_from_iter(["nssm-wrap", "configure", "--set", "b=2"]);
        assert_eq!(configure.command.overrides(), ["b=2"]);

        let stop = Cli::parse_from_iter(["nssm-wrap", "stop"]);
        assert!(stop.command.overrides().is_empty());
    }

    #[test]
    fn local_commands_do_not_target_a_service() {
        let init = Cli::parse_from_iter(["nssm-wrap", "init"]);
        let show = Cli::parse_from_iter(["nssm-wrap", "show"]);
        let pause = Cli::parse_from_iter(["nssm-wrap", "pause"]);

        assert!(!init.command.targets_service());
        assert!(!show.command.targets_service());
        assert!(pause.command.targets_service());
    }
}
