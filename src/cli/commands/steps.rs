//! Steps command implementation.
//!
//! The `stepform steps` command lists the form's pages and their fields.

use serde_json::json;

use crate::cli::args::StepsArgs;
use crate::error::{FormError, Result};
use crate::steps::{Step, STEPS};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The steps command implementation.
pub struct StepsCommand {
    args: StepsArgs,
}

impl StepsCommand {
    /// Create a new steps command.
    pub fn new(args: StepsArgs) -> Self {
        Self { args }
    }
}

fn field_keys(step: &Step) -> Vec<&'static str> {
    step.fields().iter().map(|f| f.key()).collect()
}

/// Render the registry as a table.
pub fn steps_table(steps: &[Step]) -> Table {
    let mut table = Table::new(&["Id", "Name", "Fields"]);
    for step in steps {
        let fields = if step.has_fields() {
            field_keys(step).join(", ")
        } else {
            "-".to_string()
        };
        table.add_row(&[step.id, step.name, fields.as_str()]);
    }
    table
}

/// Render the registry as a JSON array.
pub fn steps_json(steps: &[Step]) -> serde_json::Value {
    steps
        .iter()
        .map(|step| {
            json!({
                "id": step.id,
                "name": step.name,
                "description": step.description,
                "fields": field_keys(step),
            })
        })
        .collect()
}

impl Command for StepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let out = serde_json::to_string_pretty(&steps_json(STEPS)).map_err(|e| {
                FormError::PayloadEncoding {
                    message: e.to_string(),
                }
            })?;
            ui.message(&out);
        } else {
            ui.message(&steps_table(STEPS).render());
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn table_lists_every_step() {
        let table = steps_table(STEPS);
        assert_eq!(table.row_count(), 3);
        let rendered = table.render();
        assert!(rendered.contains("country, state, city, street, zip"));
        assert!(rendered.contains("Complete"));
    }

    #[test]
    fn json_lists_field_keys() {
        let value = steps_json(STEPS);
        assert_eq!(value[0]["fields"], json!(["firstName", "lastName", "email"]));
        assert_eq!(value[2]["fields"], json!([]));
        assert_eq!(value[1]["id"], "Step 2");
    }

    #[test]
    fn execute_prints_json() {
        let mut ui = MockUI::new();
        let result = StepsCommand::new(StepsArgs { json: true })
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        assert!(ui.has_message("\"name\": \"Address\""));
    }
}
