/*!

End-to-end tests of the layered loading pipeline: bundled defaults, then
`--conf` documents in order, then the cluster document last.

!*/

use serde_json::json;
use std::fs;
use std::path::PathBuf;
use storsys_config::{ConfigFileArg, ConfigLoader, Section};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn later_documents_win_and_defaults_survive() {
    let dir = TempDir::new().unwrap();
    let d1 = write_config(
        &dir,
        "d1.yaml",
        "RUN:\n  client_version: \"1\"\n",
    );
    let d2 = write_config(
        &dir,
        "d2.yaml",
        "RUN:\n  client_version: \"2\"\nDEPLOYMENT:\n  installer_version: \"1\"\n",
    );

    let config = ConfigLoader::new(1)
        .config_file(ConfigFileArg::new(d1))
        .config_file(ConfigFileArg::new(d2))
        .load()
        .unwrap();

    let run = config.section(Section::Run);
    assert_eq!(run.get("client_version"), Some(&json!("2")));
    assert_eq!(run.get("bin_dir"), Some(&json!("./bin")));
    let deployment = config.section(Section::Deployment);
    assert_eq!(deployment.get("installer_version"), Some(&json!("1")));
    assert_eq!(deployment.get("force_download_installer"), Some(&json!(false)));
    assert_eq!(
        config.section(Section::EnvData).get("cluster_namespace"),
        Some(&json!("openshift-storage"))
    );
}

#[test]
fn cluster_document_applies_last() {
    let dir = TempDir::new().unwrap();
    let conf = write_config(&dir, "conf.yaml", "RUN:\n  log_dir: /var/log/storsys\n");
    let cluster = write_config(
        &dir,
        "cluster.yaml",
        "RUN:\n  log_dir: /mnt/results\nENV_DATA:\n  cluster_name: deployed-cluster\n",
    );

    let config = ConfigLoader::new(1)
        .config_file(ConfigFileArg::new(conf))
        .cluster_config(cluster)
        .load()
        .unwrap();

    assert_eq!(
        config.section(Section::Run).get("log_dir"),
        Some(&json!("/mnt/results"))
    );
    assert_eq!(
        config.section(Section::EnvData).get("cluster_name"),
        Some(&json!("deployed-cluster"))
    );
}

#[test]
fn scoped_documents_reach_only_their_cluster() {
    let dir = TempDir::new().unwrap();
    let common = write_config(&dir, "common.yaml", "RUN:\n  log_dir: /shared/logs\n");
    let second = write_config(
        &dir,
        "second.yaml",
        "ENV_DATA:\n  cluster_name: cluster-b\n",
    );

    let mut config = ConfigLoader::new(2)
        .config_file(ConfigFileArg::new(common))
        .config_file(ConfigFileArg::scoped(1, second))
        .load()
        .unwrap();

    assert_eq!(
        config.section(Section::EnvData).get("cluster_name"),
        None
    );
    assert_eq!(
        config.section(Section::Run).get("log_dir"),
        Some(&json!("/shared/logs"))
    );

    config.switch_ctx(1).unwrap();
    assert_eq!(
        config.section(Section::EnvData).get("cluster_name"),
        Some(&json!("cluster-b"))
    );
    assert_eq!(
        config.section(Section::Run).get("log_dir"),
        Some(&json!("/shared/logs"))
    );
}

#[test]
fn scoped_document_with_bad_index_fails() {
    let dir = TempDir::new().unwrap();
    let doc = write_config(&dir, "doc.yaml", "RUN: {}\n");

    let error = ConfigLoader::new(2)
        .config_file(ConfigFileArg::scoped(5, doc))
        .load()
        .unwrap_err();
    assert!(error.to_string().contains("out of range"));
}

#[test]
fn unknown_section_in_document_is_fatal() {
    let dir = TempDir::new().unwrap();
    let doc = write_config(&dir, "doc.yaml", "TYPO_SECTION:\n  x: 1\n");

    let error = ConfigLoader::new(1)
        .config_file(ConfigFileArg::new(doc))
        .load()
        .unwrap_err();
    let message = error.to_string();
    assert!(message.contains("TYPO_SECTION"));
    assert!(message.contains("RUN"));
}

#[test]
fn null_section_in_document_is_skipped() {
    let dir = TempDir::new().unwrap();
    let doc = write_config(&dir, "doc.yaml", "RUN: null\nENV_DATA:\n  platform: vSphere\n");

    let config = ConfigLoader::new(1)
        .config_file(ConfigFileArg::new(doc))
        .load()
        .unwrap();
    assert_eq!(
        config.section(Section::Run).get("bin_dir"),
        Some(&json!("./bin"))
    );
    assert_eq!(
        config.section(Section::EnvData).get("platform"),
        Some(&json!("vSphere"))
    );
}
