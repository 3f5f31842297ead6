//! Integration tests for the configuration system.
//!
//! These cover file discovery, merging with programmatic overrides,
//! validation, and run-mode derivation working together.
//!
//! Tests that modify environment variables are marked with `#[serial]`:
//! environment variables are process-global, so concurrent access would race.

mod common;

use serial_test::serial;

use common::{EnvGuard, TempProject};
use logwire::config::mode::RUN_MODE_VAR;
use logwire::config::{OptionsLoader, OptionsMerger, OptionsValidator};
use logwire::{LogLevel, Options, RunMode, ServerOptions, SetupPlan};

#[test]
fn missing_config_file_yields_defaults() {
    let project = TempProject::new();

    let file_options = OptionsLoader::load(project.project_dir()).unwrap();
    assert!(file_options.is_none());

    let merged = OptionsMerger::merge(Vec::new());
    assert_eq!(merged, Options::default());

    let plan = SetupPlan::build(&merged, &project.dirs(), RunMode::Development).unwrap();
    assert_eq!(plan.logs_path, "/logger/logs");
    assert_eq!(plan.logs_dir, "logs");
}

#[test]
fn file_options_flow_into_the_plan() {
    let project = TempProject::new().with_config(
        "server:\n  logs_dir: my-logs\n  logs_path: /internal/logs\n",
    );

    let file_options = OptionsLoader::load(project.project_dir()).unwrap().unwrap();
    let merged = OptionsMerger::merge(vec![file_options]);
    let plan = SetupPlan::build(&merged, &project.dirs(), RunMode::Development).unwrap();

    assert_eq!(plan.logs_dir, "my-logs");
    assert_eq!(plan.logs_path, "/internal/logs");
}

#[test]
fn programmatic_overrides_beat_file_options() {
    let project = TempProject::new().with_config("server:\n  logs_path: /from-file\n");

    let file_options = OptionsLoader::load(project.project_dir()).unwrap().unwrap();
    let overrides = Options {
        server: Some(ServerOptions {
            logs_path: Some("/from-code".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let merged = OptionsMerger::merge(vec![file_options, overrides]);
    assert_eq!(merged.server.unwrap().logs_path.as_deref(), Some("/from-code"));
}

#[test]
fn malformed_config_file_fails_fast() {
    let project = TempProject::new().with_config("server: [this, is, not, a, map]\n");
    assert!(OptionsLoader::load(project.project_dir()).is_err());
}

#[test]
fn validation_rejects_merged_garbage() {
    let file = Options {
        server: Some(ServerOptions {
            logs_path: Some("/fine".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let overrides = Options {
        server: Some(ServerOptions {
            logs_path: Some("broken".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let merged = OptionsMerger::merge(vec![file, overrides]);
    let err = OptionsValidator::validate(&merged).unwrap_err();
    assert!(err.is_validation());
}

#[test]
#[serial]
fn production_env_forces_info_level() {
    let _guard = EnvGuard::new(RUN_MODE_VAR, "production");

    let mode = RunMode::from_env();
    assert!(mode.is_production());

    let project = TempProject::new();
    let plan = SetupPlan::build(&Options::default(), &project.dirs(), mode).unwrap();
    assert_eq!(plan.level, LogLevel::Info);
    assert!(!plan.enable_view);
}

#[test]
#[serial]
fn unset_env_means_development() {
    let _guard = EnvGuard::remove(RUN_MODE_VAR);

    let mode = RunMode::from_env();
    assert!(!mode.is_production());
    assert_eq!(mode.level(), LogLevel::Debug);
}

#[test]
#[serial]
fn other_env_values_mean_development() {
    let _guard = EnvGuard::new(RUN_MODE_VAR, "staging");
    assert!(!RunMode::from_env().is_production());
}
