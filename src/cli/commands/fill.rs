//! Fill command implementation.
//!
//! The `stepform fill` command runs the form session.

use tracing::debug;

use crate::cli::args::FillArgs;
use crate::config::FormConfig;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::wizard::{FormSession, PayloadFormat};

use super::dispatcher::{Command, CommandResult};

/// The fill command implementation.
pub struct FillCommand {
    args: FillArgs,
    format: PayloadFormat,
}

impl FillCommand {
    /// Create a new fill command. `--format` wins over the configured format.
    pub fn new(args: FillArgs, config: &FormConfig) -> Self {
        let format = args.format.unwrap_or(config.settings.payload_format);
        Self { args, format }
    }

    pub fn args(&self) -> &FillArgs {
        &self.args
    }

    pub fn format(&self) -> PayloadFormat {
        self.format
    }
}

impl Command for FillCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = FormSession::new(ui, self.format).run()?;
        debug!(
            submissions = report.submissions,
            final_step = report.final_step,
            edits = report.edits,
            "session finished"
        );
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldName;
    use crate::ui::MockUI;

    #[test]
    fn flag_overrides_configured_format() {
        let mut config = FormConfig::default();
        config.settings.payload_format = PayloadFormat::Yaml;

        let cmd = FillCommand::new(FillArgs::default(), &config);
        assert_eq!(cmd.format(), PayloadFormat::Yaml);

        let args = FillArgs {
            format: Some(PayloadFormat::Json),
            ..Default::default()
        };
        assert_eq!(FillCommand::new(args, &config).format(), PayloadFormat::Json);
    }

    #[test]
    fn submits_in_configured_format() {
        let mut config = FormConfig::default();
        config.settings.payload_format = PayloadFormat::Yaml;
        let mut ui = MockUI::new();
        for field in FieldName::ALL {
            ui.set_prompt_response(field.key(), "value");
        }
        ui.set_prompt_response(FieldName::Email.key(), "me@example.com");
        ui.queue_prompt_responses("action", &["next", "next"]);

        let result = FillCommand::new(FillArgs::default(), &config)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("email: me@example.com"));
    }

    #[test]
    fn blocked_non_interactive_fill_is_an_error() {
        let mut ui = MockUI::new();
        ui.set_interactive(false);
        let result = FillCommand::new(FillArgs::default(), &FormConfig::default()).execute(&mut ui);
        assert!(result.is_err());
    }
}
