//! Tests for `Service` command dispatch and option application.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{Service, ServiceError, ServiceStatus, set_arguments};
use crate::config::{ConfigValue, RawMap, RawValue, ServiceConfiguration};
use crate::error::ErrorKind;
use crate::params::StartupType;
use crate::wrapper::{Invocation, InvokeError, Invoker};

/// One recorded call: command, service, arguments.
type Call = (String, String, Vec<String>);

/// Mock invoker that records calls and replays scripted results.
///
/// Once the script runs out every call succeeds with empty output.
#[derive(Debug, Default)]
struct MockInvoker {
    results: Mutex<VecDeque<Invocation>>,
    calls: Mutex<Vec<Call>>,
}

impl MockInvoker {
    fn new(results: Vec<Invocation>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn succeeding() -> Self {
        Self::default()
    }

    fn failing(return_code: i32, output: &str) -> Self {
        Self::new(vec![Invocation::new(return_code, output)])
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn set_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|(command, _, _)| command == "set")
            .map(|(_, _, args)| args)
            .collect()
    }
}

impl Invoker for MockInvoker {
    fn invoke(
        &self,
        command: &str,
        service: &str,
        args: &[String],
    ) -> Result<Invocation, InvokeError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), service.to_string(), args.to_vec()));
        Ok(self
            .results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Invocation::success("")))
    }
}

fn raw(entries: &[(&str, RawValue)]) -> RawMap {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

fn table(entries: &[(&str, RawValue)]) -> RawValue {
    RawValue::Table(raw(entries))
}

fn config(entries: &[(&str, RawValue)]) -> ServiceConfiguration {
    ServiceConfiguration::from_raw(&raw(entries)).unwrap()
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn service(invoker: MockInvoker) -> Service<MockInvoker> {
    Service::with_invoker("web", r"C:\apps\web.exe", invoker)
}

mod lifecycle {
    use super::*;

    #[test]
    fn install_passes_application_path() {
        let mut svc = service(MockInvoker::succeeding());
        svc.install().unwrap();

        assert_eq!(
            svc.invoker().calls(),
            vec![("install".to_string(), "web".to_string(), args(&[r"C:\apps\web.exe"]))]
        );
    }

    #[test]
    fn install_applies_attached_configuration() {
        let mut svc = service(MockInvoker::succeeding()).with_configuration(config(&[
            ("display_name", "Web".into()),
            ("startup", "MANUAL".into()),
        ]));
        svc.install().unwrap();

        let calls = svc.invoker().calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].0, "install");
        assert_eq!(
            svc.invoker().set_calls(),
            vec![
                args(&["DisplayName", "Web"]),
                args(&["Start", "SERVICE_DEMAND_START"]),
            ]
        );
    }

    #[test]
    fn install_failure_skips_configuration() {
        let mut svc = service(MockInvoker::failing(5, "already exists"))
            .with_configuration(config(&[("display_name", "Web".into())]));

        let err = svc.install().unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::AlreadyInstalled));
        assert_eq!(svc.invoker().calls().len(), 1);
    }

    #[test]
    fn remove_confirms() {
        let svc = service(MockInvoker::succeeding());
        svc.remove().unwrap();

        assert_eq!(svc.invoker().calls()[0].2, args(&["confirm"]));
    }

    #[test]
    fn control_commands_use_nssm_names() {
        let svc = service(MockInvoker::succeeding());
        svc.start().unwrap();
        svc.stop().unwrap();
        svc.restart().unwrap();
        svc.pause().unwrap();
        svc.resume().unwrap();
        svc.rotate().unwrap();
        svc.edit().unwrap();

        let commands: Vec<String> = svc.invoker().calls().into_iter().map(|c| c.0).collect();
        assert_eq!(
            commands,
            vec!["start", "stop", "restart", "pause", "continue", "rotate", "edit"]
        );
    }
}

mod failures {
    use super::*;

    #[test]
    fn pause_of_stopped_service_is_not_started() {
        let svc = service(MockInvoker::failing(1, "not running"));
        let err = svc.pause().unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::NotStarted));
    }

    #[test]
    fn return_code_three_is_does_not_exist_for_any_command() {
        let svc = service(MockInvoker::failing(3, "Can't open service!"));
        let err = svc.stop().unwrap_err();

        let ServiceError::Nssm(nssm) = err else {
            panic!("expected NSSM error");
        };
        assert_eq!(nssm.kind, ErrorKind::DoesNotExist);
        assert_eq!(nssm.output, "Can't open service!");
        assert_eq!(nssm.return_code, 3);
        assert_eq!(nssm.to_string(), "[web] Service does not exist");
    }

    #[test]
    fn restart_failure_is_start_failed() {
        let svc = service(MockInvoker::failing(2, "timeout"));
        assert_eq!(svc.restart().unwrap_err().kind(), Some(ErrorKind::StartFailed));
    }

    #[test]
    fn unrecognized_failure_is_generic_with_details() {
        let svc = service(MockInvoker::failing(9, "weird"));
        let err = svc.rotate().unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::Nssm));
        assert_eq!(err.to_string(), "[web] NSSM error occurred (9): weird");
    }

    #[test]
    fn failed_set_stops_remaining_entries() {
        let mut svc = service(MockInvoker::failing(1, "Invalid parameter"));
        let err = svc
            .configure(&config(&[
                ("description", "first".into()),
                ("display_name", "second".into()),
            ]))
            .unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::ConfigurationFailed));
        assert_eq!(svc.invoker().set_calls().len(), 1);
        // merge happened before the failure
        assert!(svc.configuration().contains_key("display_name"));
    }
}

mod status {
    use super::*;

    #[test]
    fn status_is_parsed_from_output() {
        let svc = service(MockInvoker::new(vec![Invocation::success("SERVICE_RUNNING\r\n")]));
        assert_eq!(svc.status().unwrap(), ServiceStatus::Running);
    }

    #[test]
    fn unrecognized_status_output_is_an_error() {
        let svc = service(MockInvoker::new(vec![Invocation::success("???")]));

        assert!(matches!(
            svc.status(),
            Err(ServiceError::UnknownStatus { ref output, .. }) if output == "???"
        ));
    }

    #[test]
    fn get_queries_nssm_parameter_name() {
        let svc = service(MockInvoker::new(vec![Invocation::success("My Web\r\n")]));

        assert_eq!(svc.get("display_name").unwrap(), "My Web");
        assert_eq!(svc.invoker().calls()[0].2, args(&["DisplayName"]));
    }

    #[test]
    fn get_unknown_key_does_not_invoke() {
        let svc = service(MockInvoker::succeeding());

        assert!(matches!(
            svc.get("colour"),
            Err(ServiceError::UnknownOption { .. })
        ));
        assert!(svc.invoker().calls().is_empty());
    }
}

mod configure {
    use super::*;

    #[test]
    fn enums_and_booleans_are_translated() {
        let mut svc = service(MockInvoker::succeeding());
        svc.configure(&config(&[
            ("startup", "AUTOMATIC".into()),
            ("process_priority", "NORMAL".into()),
            ("console_window", false.into()),
        ]))
        .unwrap();

        assert_eq!(
            svc.invoker().set_calls(),
            vec![
                args(&["AppNoConsole", "0"]),
                args(&["AppPriority", "NORMAL_PRIORITY_CLASS"]),
                args(&["Start", "SERVICE_AUTO_START"]),
            ]
        );
        // stored value stays boolean
        assert_eq!(svc.configuration()["console_window"], ConfigValue::Flag(false));
    }

    #[test]
    fn exit_action_emits_one_call_per_trigger() {
        let mut svc = service(MockInvoker::succeeding());
        svc.configure(&config(&[(
            "action_on_exit",
            table(&[("Default", "Restart".into())]),
        )]))
        .unwrap();

        assert_eq!(
            svc.invoker().set_calls(),
            vec![args(&["AppExit", "Default", "Restart"])]
        );
    }

    #[test]
    fn structured_account_is_sent_as_username_and_password() {
        let mut svc = service(MockInvoker::succeeding());
        svc.configure(&config(&[(
            "user_account",
            table(&[
                ("username", r".\svc".into()),
                ("password", "hunter2".into()),
            ]),
        )]))
        .unwrap();

        assert_eq!(
            svc.invoker().set_calls(),
            vec![args(&["ObjectName", r".\svc", "hunter2"])]
        );
    }

    #[test]
    fn second_call_wins_and_disjoint_call_keeps_earlier_values() {
        let mut svc = service(MockInvoker::succeeding());
        svc.configure(&config(&[
            ("display_name", "One".into()),
            ("startup", "MANUAL".into()),
        ]))
        .unwrap();
        svc.configure(&config(&[("display_name", "Two".into())]))
            .unwrap();
        svc.configure(&config(&[("description", "Third".into())]))
            .unwrap();

        let stored = svc.configuration();
        assert_eq!(stored["display_name"], ConfigValue::Text("Two".to_string()));
        assert_eq!(stored["startup"], ConfigValue::Startup(StartupType::Manual));
        assert_eq!(stored["description"], ConfigValue::Text("Third".to_string()));
    }

    #[test]
    fn raw_options_are_validated_before_any_call() {
        let mut svc = service(MockInvoker::succeeding());
        let err = svc
            .configure_raw(&raw(&[
                ("display_name", "Web".into()),
                ("stop_console", "soon".into()),
            ]))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(ref e) if e.mentions("stop_console")));
        assert!(svc.invoker().calls().is_empty());
        assert!(svc.configuration().is_empty());
    }

    #[test]
    fn raw_options_drop_unknown_keys() {
        let mut svc = service(MockInvoker::succeeding());
        svc.configure_raw(&raw(&[
            ("colour", "red".into()),
            ("startup", "DELAYED".into()),
        ]))
        .unwrap();

        assert_eq!(
            svc.invoker().set_calls(),
            vec![args(&["Start", "SERVICE_DELAYED_START"])]
        );
    }

    #[test]
    fn only_entries_of_the_call_are_sent() {
        let mut svc = service(MockInvoker::succeeding());
        svc.configure(&config(&[("display_name", "One".into())]))
            .unwrap();
        svc.configure(&config(&[("description", "Two".into())]))
            .unwrap();

        assert_eq!(
            svc.invoker().set_calls(),
            vec![
                args(&["DisplayName", "One"]),
                args(&["Description", "Two"]),
            ]
        );
    }
}

mod translation {
    use super::*;

    fn single(key: &str, value: RawValue) -> Vec<Vec<String>> {
        let validated = config(&[(key, value)]);
        set_arguments(key, &validated[key]).unwrap()
    }

    #[test]
    fn environment_table_sends_one_argument_per_variable() {
        let calls = single(
            "env",
            table(&[("PORT", RawValue::Integer(8080)), ("RUST_LOG", "info".into())]),
        );

        assert_eq!(
            calls,
            vec![args(&["AppEnvironmentExtra", "PORT=8080", "RUST_LOG=info"])]
        );
    }

    #[test]
    fn environment_string_is_sent_verbatim() {
        assert_eq!(
            single("env", "A=1".into()),
            vec![args(&["AppEnvironmentExtra", "A=1"])]
        );
    }

    #[test]
    fn dependency_list_sends_each_service() {
        let calls = single(
            "dependencies",
            RawValue::List(vec!["Tcpip".into(), "Dnscache".into()]),
        );

        assert_eq!(calls, vec![args(&["DependsOnService", "Tcpip", "Dnscache"])]);
    }

    #[test]
    fn argument_list_is_joined_with_quoting() {
        let calls = single(
            "arguments",
            RawValue::List(vec!["--root".into(), r"C:\Program Files\web".into()]),
        );

        assert_eq!(
            calls,
            vec![args(&["AppParameters", r#"--root "C:\Program Files\web""#])]
        );
    }

    #[test]
    fn affinity_and_integers_are_decimal() {
        assert_eq!(
            single("cpu_affinity", RawValue::Integer(3)),
            vec![args(&["AppAffinity", "3"])]
        );
        assert_eq!(
            single("cpu_affinity", "All".into()),
            vec![args(&["AppAffinity", "All"])]
        );
        assert_eq!(
            single("stop_console", RawValue::Integer(1500)),
            vec![args(&["AppStopMethodConsole", "1500"])]
        );
    }

    #[test]
    fn true_becomes_one() {
        assert_eq!(
            single("rotate_files", true.into()),
            vec![args(&["AppRotateFiles", "1"])]
        );
    }

    #[test]
    fn unknown_key_has_no_arguments() {
        assert!(set_arguments("colour", &ConfigValue::from("red")).is_none());
    }
}
