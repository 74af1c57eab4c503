//! Schema command implementation.
//!
//! The `obsolint schema` command prints the JSON Schema of the configuration
//! file, for editor integration.

use crate::error::Result;
use crate::lint::SchemaGenerator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Default)]
pub struct SchemaCommand {
    generator: SchemaGenerator,
}

impl SchemaCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = self.generator.generate();
        let json = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;
        ui.data(&format!("{}\n", json));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_parseable_schema() {
        let mut ui = MockUI::new();

        let result = SchemaCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        let parsed: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        assert_eq!(parsed["title"], "obsolint Configuration");
    }
}
