//! authz resolve command

use authz::FieldResolverFactory;
use clap::Args;
use serde::Serialize;
use shared::{EntityFieldType, EntitySpec, CORP_USER_ENTITY_NAME};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Entity type of the resource (e.g. corpuser, dataset)
    #[arg(short = 't', long, default_value = CORP_USER_ENTITY_NAME)]
    pub entity_type: String,

    /// URN of the resource
    #[arg(short, long)]
    pub urn: String,

    /// Entity fixtures file (overrides the config's entityFixtures)
    #[arg(short, long)]
    pub fixtures: Option<PathBuf>,

    /// Also report whether the resource belongs to this group
    #[arg(short, long)]
    pub group: Option<String>,
}

/// Result of a resolve run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput {
    pub resource: EntitySpec,
    pub field_type: EntityFieldType,
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_member: Option<bool>,
}

impl ResolveCommand {
    pub async fn run(&self, config: Option<&Path>, json: bool) -> anyhow::Result<()> {
        let factory = super::build_factory(config, self.fixtures.as_deref())?;
        let output = self.execute(&factory).await;

        if json {
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("{} of {}:", output.field_type, output.resource);
        if output.values.is_empty() {
            println!("  (none)");
        }
        for value in &output.values {
            println!("  {}", value);
        }
        if let (Some(group), Some(is_member)) = (&self.group, output.is_member) {
            let verdict = if is_member { "member of" } else { "not a member of" };
            println!("Resource is {} {}", verdict, group);
        }
        Ok(())
    }

    /// Resolve group membership of the resource
    pub async fn execute(&self, factory: &FieldResolverFactory) -> ResolveOutput {
        let resource = EntitySpec::new(&self.entity_type, &self.urn);
        let mut resolved = factory.resolve(&resource);
        let groups = resolved.group_membership().await;

        ResolveOutput {
            resource,
            field_type: EntityFieldType::GroupMembership,
            values: groups.sorted().into_iter().map(String::from).collect(),
            is_member: self.group.as_deref().map(|group| groups.contains(group)),
        }
    }
}
