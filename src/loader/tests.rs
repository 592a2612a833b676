use super::*;
use crate::validation::{INSTANCE_SIZE_REQUIRED_MESSAGE, NO_VARIANT_MESSAGE, validate_resource};
use std::fs;
use tempfile::TempDir;

const CLUSTER: &str = r#"
apiVersion: atlas.mongodb.com/v1
kind: AtlasCluster
metadata:
  name: my-cluster
spec:
  clusterSpec:
    name: cluster0
    providerSettings:
      providerName: AWS
      instanceSizeName: M10
"#;

const PROJECT: &str = r#"
apiVersion: atlas.mongodb.com/v1
kind: AtlasProject
metadata:
  name: my-project
spec:
  name: Test Project
"#;

#[test]
fn test_load_cluster_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cluster.yaml");
    fs::write(&path, CLUSTER).unwrap();

    let loaded = ResourceLoader::new().unwrap().load_file(&path).unwrap();

    assert_eq!(loaded.path, path);
    assert_eq!(loaded.resource.kind(), "AtlasCluster");
    assert_eq!(loaded.resource.name(), "my-cluster");
    assert_eq!(loaded.document.source(), CLUSTER);
}

#[test]
fn test_load_json_manifest() {
    let json = r#"{
  "apiVersion": "atlas.mongodb.com/v1",
  "kind": "AtlasDatabaseUser",
  "metadata": { "name": "app-user" },
  "spec": { "username": "app" }
}"#;

    let loaded = ResourceLoader::new()
        .unwrap()
        .load_str(json, Path::new("user.json"))
        .unwrap();
    let Resource::DatabaseUser(user) = loaded.resource else {
        panic!("Expected AtlasDatabaseUser");
    };
    assert_eq!(user.spec.username, "app");
}

#[test]
fn test_unknown_kind_fails_structure_check() {
    let manifest = r#"
apiVersion: atlas.mongodb.com/v1
kind: AtlasBackupPolicy
metadata:
  name: nightly
spec: {}
"#;

    let result = ResourceLoader::new().unwrap().load_str(manifest, Path::new("policy.yaml"));
    let error_msg = result.err().unwrap().to_string();
    assert!(error_msg.contains("Schema validation failed"));
}

#[test]
fn test_structure_violations_are_located() {
    let manifest = "apiVersion: atlas.mongodb.com/v1\nkind: AtlasCluster\nmetadata:\n  name: 42\nspec: {}\n";
    let document = SpannedDocument::parse(Path::new("cluster.yaml"), manifest.to_string()).unwrap();

    let violations = StructureValidator::new().unwrap().violations(&document);
    assert_eq!(violations.len(), 1);

    let span = violations[0].span;
    let start = span.offset();
    assert_eq!(&manifest[start..start + span.len()], "42");
}

#[test]
fn test_missing_spec_fails_structure_check() {
    let manifest = r#"
apiVersion: atlas.mongodb.com/v1
kind: AtlasCluster
metadata:
  name: my-cluster
"#;

    let document = SpannedDocument::parse(Path::new("cluster.yaml"), manifest.to_string()).unwrap();
    let violations = StructureValidator::new().unwrap().violations(&document);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("spec"));
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let result = ResourceLoader::new().unwrap().load_str("kind: [unclosed", Path::new("broken.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_load_directory_recursively_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("clusters");
    fs::create_dir_all(&nested).unwrap();

    fs::write(temp_dir.path().join("b-project.yml"), PROJECT).unwrap();
    fs::write(nested.join("a-cluster.yaml"), CLUSTER).unwrap();
    fs::write(temp_dir.path().join("README.md"), "# not a manifest").unwrap();

    let loaded = ResourceLoader::new().unwrap().load_path(temp_dir.path()).unwrap();
    let kinds: Vec<_> = loaded.iter().map(|l| l.resource.kind()).collect();

    assert_eq!(kinds, vec!["AtlasProject", "AtlasCluster"]);
}

#[test]
fn test_missing_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ResourceLoader::new().unwrap().load_path(&temp_dir.path().join("nope"));

    let error_msg = result.err().unwrap().to_string();
    assert!(error_msg.contains("No such file or directory"));
}

fn cluster_manifest(spec: &str) -> String {
    format!(
        "apiVersion: atlas.mongodb.com/v1\nkind: AtlasCluster\nmetadata:\n  name: my-cluster\nspec:\n{spec}"
    )
}

fn load_cluster(spec: &str) -> LoadedResource {
    ResourceLoader::new()
        .unwrap()
        .load_str(&cluster_manifest(spec), Path::new("cluster.yaml"))
        .unwrap()
}

#[test]
fn test_null_instance_size_is_treated_as_unset() {
    let loaded = load_cluster(
        "  clusterSpec:\n    providerSettings:\n      instanceSizeName: null\n      providerName: AWS\n",
    );

    let result = validate_resource(&loaded.resource);
    assert_eq!(result.messages(), vec![INSTANCE_SIZE_REQUIRED_MESSAGE]);
}

#[test]
fn test_null_provider_name_is_treated_as_unset() {
    let loaded = load_cluster(
        "  clusterSpec:\n    providerSettings:\n      instanceSizeName: M10\n      providerName: null\n",
    );

    let result = validate_resource(&loaded.resource);
    assert!(result.is_valid(), "unexpected findings: {:?}", result.messages());
}

#[test]
fn test_null_cluster_spec_counts_as_absent() {
    let loaded = load_cluster("  clusterSpec: null\n");

    let result = validate_resource(&loaded.resource);
    assert_eq!(result.messages(), vec![NO_VARIANT_MESSAGE]);
}

#[test]
fn test_empty_cluster_spec_counts_as_present() {
    let loaded = load_cluster("  clusterSpec: {}\n");

    let result = validate_resource(&loaded.resource);
    assert!(result.is_valid(), "unexpected findings: {:?}", result.messages());
}

#[test]
fn test_null_provider_settings_skip_provider_rules() {
    let loaded = load_cluster("  clusterSpec:\n    name: cluster0\n    providerSettings: null\n");

    let result = validate_resource(&loaded.resource);
    assert!(result.is_valid(), "unexpected findings: {:?}", result.messages());
}

#[test]
fn test_empty_spec_has_no_variant() {
    let manifest = "apiVersion: atlas.mongodb.com/v1\nkind: AtlasCluster\nmetadata:\n  name: my-cluster\nspec: {}\n";
    let loaded = ResourceLoader::new()
        .unwrap()
        .load_str(manifest, Path::new("cluster.yaml"))
        .unwrap();

    let result = validate_resource(&loaded.resource);
    assert_eq!(result.messages(), vec![NO_VARIANT_MESSAGE]);
}

#[test]
fn test_one_structure_validator_checks_many_documents() {
    let validator = StructureValidator::new().unwrap();

    let good = SpannedDocument::parse(Path::new("cluster.yaml"), CLUSTER.to_string()).unwrap();
    let bad = SpannedDocument::parse(
        Path::new("broken.yaml"),
        "apiVersion: atlas.mongodb.com/v1\nkind: AtlasCluster\nmetadata:\n  name: 42\nspec: {}\n".to_string(),
    )
    .unwrap();

    assert!(validator.violations(&good).is_empty());
    assert_eq!(validator.violations(&bad).len(), 1);
    assert!(validator.violations(&good).is_empty());
}
