//! Translation table from option keys to NSSM parameter names.

/// Option key to NSSM parameter name, grouped as in the NSSM GUI tabs.
pub const PARAM_MAP: &[(&str, &str)] = &[
    // Application
    ("path", "Application"),
    ("startup_dir", "AppDirectory"),
    ("arguments", "AppParameters"),
    // Details
    ("display_name", "DisplayName"),
    ("description", "Description"),
    ("startup", "Start"),
    // Log on
    ("user_account", "ObjectName"),
    ("type", "Type"),
    // Dependencies
    ("dependencies", "DependsOnService"),
    // Process
    ("process_priority", "AppPriority"),
    ("console_window", "AppNoConsole"),
    ("cpu_affinity", "AppAffinity"),
    // Shutdown
    ("terminate_process", "AppStopMethodSkip"),
    ("stop_console", "AppStopMethodConsole"),
    ("stop_window", "AppStopMethodWindow"),
    ("stop_threads", "AppStopMethodThreads"),
    // Exit actions
    ("restart_throttling", "AppThrottle"),
    ("action_on_exit", "AppExit"),
    ("restart_delay", "AppRestartDelay"),
    // I/O
    ("stdout", "AppStdout"),
    ("stderr", "AppStderr"),
    // File rotation
    ("stdout_creation", "AppStdoutCreationDisposition"),
    ("stderr_creation", "AppStderrCreationDisposition"),
    ("rotate_files", "AppRotateFiles"),
    ("rotate_online", "AppRotateOnline"),
    ("rotation_time", "AppRotateSeconds"),
    ("rotation_size", "AppRotateBytes"),
    // Environment
    ("env", "AppEnvironmentExtra"),
];

/// Returns the NSSM parameter name for an option key, if the key is known.
#[must_use]
pub fn param_name(key: &str) -> Option<&'static str> {
    PARAM_MAP
        .iter()
        .find(|(option, _)| *option == key)
        .map(|(_, param)| *param)
}
