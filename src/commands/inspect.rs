use anyhow::Result;
use atlas_validate::loader::ResourceLoader;
use atlas_validate::models::Resource;
use std::path::Path;

pub fn inspect_command(path: &Path, json: bool) -> Result<()> {
    let loaded = ResourceLoader::new()?.load_file(path)?;

    if json {
        let json = serde_json::to_string_pretty(&loaded.resource)?;
        println!("{json}");
        return Ok(());
    }

    loaded.resource.pretty_print();

    if let Resource::Cluster(cluster) = &loaded.resource {
        match cluster.spec.deployment() {
            Some(deployment) => println!("\nDeployment variant: {}", deployment.variant_name()),
            None => println!("\nDeployment variant: none (run `validate` for details)"),
        }
    }

    Ok(())
}
