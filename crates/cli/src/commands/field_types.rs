//! authz field-types command

use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct FieldTypesCommand {}

impl FieldTypesCommand {
    pub fn run(&self, config: Option<&Path>, json: bool) -> anyhow::Result<()> {
        let factory = super::build_factory(config, None)?;
        let field_types = factory.supported_field_types();

        if json {
            println!("{}", serde_json::to_string_pretty(&field_types)?);
            return Ok(());
        }

        println!("Resolvable field types:");
        for field_type in field_types {
            println!("  {}", field_type);
        }
        Ok(())
    }
}
