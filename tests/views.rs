mod common;

use std::collections::BTreeMap;

use common::{Level, RecordingDiagnostics, TestWorkspace};
use gridcols::views::{ViewConfig, ViewSetting};

fn sample_config() -> ViewConfig {
    let mut views = BTreeMap::new();
    views.insert(
        "v1/pods".to_string(),
        ViewSetting {
            columns: vec!["NAME".to_string(), "grp: LABELS[app]".to_string()],
            sort_column: Some("NAME:asc".to_string()),
        },
    );
    views.insert(
        "v1/nodes".to_string(),
        ViewSetting {
            columns: vec!["NAME".to_string(), "CPU".to_string()],
            sort_column: None,
        },
    );
    ViewConfig { views }
}

#[test]
fn views_yaml_round_trip_preserves_settings() {
    let workspace = TestWorkspace::new();
    let path = workspace.path().join("views.yml");

    let config = sample_config();
    config.save(&path).expect("save views");
    let loaded = ViewConfig::load(&path).expect("load views");

    assert_eq!(config, loaded);
    let pods = loaded.view("v1/pods").expect("pods view");
    assert_eq!(pods.columns.len(), 2);
    assert_eq!(pods.sort_column.as_deref(), Some("NAME:asc"));
}

#[test]
fn view_lookup_misses_are_none() {
    let config = sample_config();
    assert!(config.view("v1/secrets").is_none());
}

#[test]
fn load_parses_hand_written_yaml() {
    let workspace = TestWorkspace::new();
    let path = workspace.write(
        "views.yml",
        concat!(
            "views:\n",
            "  v1/pods:\n",
            "    columns:\n",
            "      - NAME\n",
            "      - 'grp: LABELS[app]'\n",
            "    sort_column: AGE:desc\n",
        ),
    );

    let config = ViewConfig::load(&path).expect("load views");
    let view = config.view("v1/pods").expect("pods view");
    assert_eq!(view.columns[1], "grp: LABELS[app]");
    assert_eq!(view.sort_column.as_deref(), Some("AGE:desc"));
}

#[test]
fn load_rejects_views_without_columns() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("views.yml", "views:\n  v1/pods:\n    columns: []\n");

    let err = ViewConfig::load(&path).expect_err("empty view rejected");
    assert!(err.to_string().contains("does not declare any columns"));
}

#[test]
fn duplicate_specs_inside_a_view_are_warned_once() {
    let mut config = sample_config();
    config
        .views
        .get_mut("v1/nodes")
        .expect("nodes view")
        .columns = vec![
        "NAME".to_string(),
        "CPU".to_string(),
        "NAME".to_string(),
        "NAME".to_string(),
    ];

    let diags = RecordingDiagnostics::new();
    config.warn_duplicates(&diags);

    let warnings = diags.messages(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("v1/nodes"));
    assert!(warnings[0].contains("NAME"));
}

#[test]
fn distinct_specs_produce_no_duplicate_warnings() {
    let diags = RecordingDiagnostics::new();
    sample_config().warn_duplicates(&diags);
    assert_eq!(diags.count(Level::Warn), 0);
}
