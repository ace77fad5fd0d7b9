//! Translation of validated options into `nssm set` argument lists.

use crate::config::ConfigValue;
use crate::params::{ParamEnum, param_name};

/// Option whose table expands into one `set` call per trigger.
const EXIT_ACTIONS: &str = "action_on_exit";
/// Option whose structured form carries a username and a password.
const USER_ACCOUNT: &str = "user_account";
/// Option whose structured form is a table of environment variables.
const ENVIRONMENT: &str = "env";
/// Option whose list form is joined into a single command line.
const ARGUMENTS: &str = "arguments";

/// Builds the `set` argument lists for one option.
///
/// Each inner list is one invocation: the NSSM parameter name followed by
/// its values. Returns `None` for keys with no NSSM parameter.
#[must_use]
pub fn set_arguments(key: &str, value: &ConfigValue) -> Option<Vec<Vec<String>>> {
    let param = param_name(key)?.to_string();

    let calls = match (key, value) {
        (EXIT_ACTIONS, ConfigValue::Map(actions)) => actions
            .iter()
            .map(|(trigger, action)| vec![param.clone(), trigger.clone(), to_argument(action)])
            .collect(),
        (USER_ACCOUNT, ConfigValue::Map(account)) => {
            let field = |name: &str| account.get(name).map(to_argument).unwrap_or_default();
            vec![vec![param, field("username"), field("password")]]
        }
        (ENVIRONMENT, ConfigValue::Map(variables)) => {
            let mut call = vec![param];
            call.extend(
                variables
                    .iter()
                    .map(|(name, value)| format!("{name}={}", to_argument(value))),
            );
            vec![call]
        }
        (ARGUMENTS, ConfigValue::List(items)) => vec![vec![param, join_command_line(items)]],
        (_, ConfigValue::List(items)) => {
            let mut call = vec![param];
            call.extend(items.iter().cloned());
            vec![call]
        }
        (_, scalar) => vec![vec![param, to_argument(scalar)]],
    };

    Some(calls)
}

/// Renders a scalar the way NSSM expects it.
///
/// Enumerations become their canonical token and booleans become `1`/`0`.
#[must_use]
pub fn to_argument(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Text(s) => s.clone(),
        ConfigValue::Integer(n) => n.to_string(),
        ConfigValue::Flag(b) => String::from(if *b { "1" } else { "0" }),
        ConfigValue::List(items) => join_command_line(items),
        ConfigValue::Startup(v) => v.value().to_string(),
        ConfigValue::Priority(v) => v.value().to_string(),
        ConfigValue::Type(v) => v.value().to_string(),
        ConfigValue::ExitAction(v) => v.value().to_string(),
        ConfigValue::Map(map) => map.to_string(),
    }
}

/// Joins arguments into one command line, quoting those containing whitespace.
fn join_command_line(items: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            if item.chars().any(char::is_whitespace) {
                format!("\"{item}\"")
            } else {
                item.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
