//! Display implementations for models

use super::cluster::{AtlasCluster, ClusterDeployment};
use super::database_user::AtlasDatabaseUser;
use super::project::AtlasProject;
use super::resource::Resource;

impl Resource {
    pub fn pretty_print(&self) {
        match self {
            Resource::Cluster(cluster) => cluster.pretty_print(),
            Resource::Project(project) => project.pretty_print(),
            Resource::DatabaseUser(user) => user.pretty_print(),
        }
    }
}

impl AtlasCluster {
    pub fn pretty_print(&self) {
        println!("AtlasCluster {{");
        println!("    name: {:?},", self.metadata.name);
        if let Some(namespace) = &self.metadata.namespace {
            println!("    namespace: {namespace:?},");
        }

        match self.spec.deployment() {
            Some(ClusterDeployment::Basic(spec)) => {
                println!("    deployment: clusterSpec {{");
                if let Some(name) = &spec.name {
                    println!("        name: {name:?},");
                }
                if let Some(cluster_type) = &spec.cluster_type {
                    println!("        clusterType: {cluster_type:?},");
                }
                if let Some(settings) = &spec.provider_settings {
                    println!("        providerSettings: {{");
                    println!("            providerName: {:?},", settings.provider_name);
                    println!(
                        "            instanceSizeName: {:?},",
                        settings.instance_size_name
                    );
                    if let Some(region) = &settings.region_name {
                        println!("            regionName: {region:?},");
                    }
                    println!("        }},");
                }
                println!("    }},");
            }
            Some(ClusterDeployment::Advanced(spec)) => {
                println!("    deployment: advancedClusterSpec {{");
                if let Some(name) = &spec.name {
                    println!("        name: {name:?},");
                }
                println!("        replicationSpecs: {},", spec.replication_specs.len());
                println!("    }},");
            }
            Some(ClusterDeployment::Serverless(spec)) => {
                println!("    deployment: serverlessSpec {{");
                if let Some(name) = &spec.name {
                    println!("        name: {name:?},");
                }
                if let Some(settings) = &spec.provider_settings {
                    println!("        providerName: {:?},", settings.provider_name);
                    if let Some(backing) = &settings.backing_provider_name {
                        println!("        backingProviderName: {backing:?},");
                    }
                }
                println!("    }},");
            }
            None => {
                println!("    deployment: <ambiguous>,");
            }
        }

        println!("}}");
    }
}

impl AtlasProject {
    pub fn pretty_print(&self) {
        println!("AtlasProject {{");
        println!("    name: {:?},", self.metadata.name);
        println!("    projectName: {:?},", self.spec.name);
        if !self.spec.project_ip_access_list.is_empty() {
            println!("    projectIpAccessList: [");
            for entry in &self.spec.project_ip_access_list {
                let target = entry
                    .cidr_block
                    .as_deref()
                    .or(entry.ip_address.as_deref())
                    .unwrap_or("");
                println!("        {target:?},");
            }
            println!("    ],");
        }
        println!("}}");
    }
}

impl AtlasDatabaseUser {
    pub fn pretty_print(&self) {
        println!("AtlasDatabaseUser {{");
        println!("    name: {:?},", self.metadata.name);
        println!("    username: {:?},", self.spec.username);
        println!(
            "    databaseName: {:?},",
            self.spec.database_name.as_deref().unwrap_or("admin")
        );
        if !self.spec.roles.is_empty() {
            println!("    roles: [");
            for role in &self.spec.roles {
                println!("        {}@{},", role.role_name, role.database_name);
            }
            println!("    ],");
        }
        if let Some(project_ref) = &self.spec.project_ref {
            println!("    projectRef: {:?},", project_ref.name);
        }
        println!("}}");
    }
}
