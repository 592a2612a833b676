use super::*;

#[test]
fn test_decode_basic_cluster() {
    let yaml = r#"
apiVersion: atlas.mongodb.com/v1
kind: AtlasCluster
metadata:
  name: my-cluster
  namespace: mongodb-atlas-system
spec:
  clusterSpec:
    name: cluster0
    diskSizeGB: 10
    providerSettings:
      providerName: AWS
      instanceSizeName: M10
      regionName: US_EAST_1
"#;
    let resource: Resource = serde_yaml::from_str(yaml).unwrap();

    let Resource::Cluster(cluster) = resource else {
        panic!("Expected AtlasCluster");
    };
    assert_eq!(cluster.metadata.name, "my-cluster");
    assert_eq!(
        cluster.metadata.namespace.as_deref(),
        Some("mongodb-atlas-system")
    );

    let basic = cluster.spec.cluster_spec.as_ref().unwrap();
    assert_eq!(basic.name.as_deref(), Some("cluster0"));
    assert_eq!(basic.disk_size_gb, Some(10.0));

    let settings = basic.provider_settings.as_ref().unwrap();
    assert_eq!(settings.provider_name, "AWS");
    assert_eq!(settings.instance_size_name, "M10");
    assert!(!settings.is_serverless());

    assert!(cluster.spec.advanced_cluster_spec.is_none());
    assert!(cluster.spec.serverless_spec.is_none());
}

#[test]
fn test_null_slot_is_absent_and_empty_slot_is_present() {
    let yaml = r#"
clusterSpec: null
advancedClusterSpec: {}
"#;
    let spec: AtlasClusterSpec = serde_yaml::from_str(yaml).unwrap();

    assert!(spec.cluster_spec.is_none());
    assert!(spec.advanced_cluster_spec.is_some());
    assert!(spec.serverless_spec.is_none());
}

#[test]
fn test_missing_provider_fields_default_to_empty() {
    let yaml = r#"
clusterSpec:
  providerSettings:
    regionName: EU_WEST_1
"#;
    let spec: AtlasClusterSpec = serde_yaml::from_str(yaml).unwrap();
    let settings = spec
        .cluster_spec
        .and_then(|basic| basic.provider_settings)
        .unwrap();

    assert_eq!(settings.instance_size_name, "");
    assert_eq!(settings.provider_name, "");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
serverlessSpec:
  name: serverless0
  terminationProtectionEnabled: true
  providerSettings:
    providerName: SERVERLESS
    backingProviderName: AWS
"#;
    let spec: AtlasClusterSpec = serde_yaml::from_str(yaml).unwrap();
    let serverless = spec.serverless_spec.unwrap();

    assert_eq!(serverless.name.as_deref(), Some("serverless0"));
    assert_eq!(
        serverless
            .provider_settings
            .unwrap()
            .backing_provider_name
            .as_deref(),
        Some("AWS")
    );
}

#[test]
fn test_deployment_requires_exactly_one_slot() {
    let mut spec = AtlasClusterSpec::default();
    assert!(spec.deployment().is_none());

    spec.advanced_cluster_spec = Some(AdvancedClusterSpec::default());
    let deployment = spec.deployment().unwrap();
    assert_eq!(deployment.variant_name(), "advancedClusterSpec");
    assert!(matches!(deployment, ClusterDeployment::Advanced(_)));

    spec.serverless_spec = Some(ServerlessSpec {
        name: Some("serverless0".to_string()),
        provider_settings: None,
    });
    assert!(spec.deployment().is_none());

    spec.advanced_cluster_spec = None;
    let deployment = spec.deployment().unwrap();
    assert_eq!(deployment.cluster_name(), Some("serverless0"));
}

#[test]
fn test_decode_project_and_database_user() {
    let project: Resource = serde_yaml::from_str(
        r#"
apiVersion: atlas.mongodb.com/v1
kind: AtlasProject
metadata:
  name: my-project
spec:
  name: Test Project
  projectIpAccessList:
    - cidrBlock: 10.0.0.0/16
"#,
    )
    .unwrap();
    assert_eq!(project.kind(), "AtlasProject");
    assert_eq!(project.name(), "my-project");

    let user: Resource = serde_yaml::from_str(
        r#"
apiVersion: atlas.mongodb.com/v1
kind: AtlasDatabaseUser
metadata:
  name: my-user
spec:
  username: app
  roles:
    - roleName: readWrite
      databaseName: app
  projectRef:
    name: my-project
"#,
    )
    .unwrap();

    let Resource::DatabaseUser(user) = user else {
        panic!("Expected AtlasDatabaseUser");
    };
    assert_eq!(user.spec.username, "app");
    assert_eq!(user.spec.roles[0].role_name, "readWrite");
    assert_eq!(user.spec.project_ref.unwrap().name, "my-project");
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result: Result<Resource, _> = serde_yaml::from_str(
        r#"
kind: AtlasBackupSchedule
metadata:
  name: nightly
"#,
    );
    assert!(result.is_err());
}
