//! Handler for the `rules` command.

use crate::analyzer::valueslint::{Rule, all_rules, get_rule};
use crate::error::{Result, ValuesLintError};

fn format_rule(rule: &dyn Rule) -> String {
    format!("{}  {:<28}  {}", rule.code(), rule.name(), rule.description())
}

/// Render the rule listing, optionally restricted to one code.
pub fn render_rules(code: Option<&str>) -> Option<String> {
    match code {
        Some(code) => get_rule(code).map(|rule| format_rule(rule.as_ref())),
        None => Some(
            all_rules()
                .iter()
                .map(|rule| format_rule(rule.as_ref()))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}

pub fn handle_rules(code: Option<String>) -> Result<()> {
    match render_rules(code.as_deref()) {
        Some(listing) => {
            println!("{}", listing);
            Ok(())
        }
        None => Err(ValuesLintError::UnknownRule(code.unwrap_or_default())),
    }
}
