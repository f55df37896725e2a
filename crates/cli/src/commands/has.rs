use anyhow::Context;
use colored::*;

use super::parse_set;

pub fn has(list: &str, permissions: &[String]) -> anyhow::Result<()> {
    let set = parse_set(list)?;
    tracing::debug!(entries = set.len(), "Checking against set");

    for permission in permissions {
        let allowed = set
            .has(permission)
            .with_context(|| format!("Cannot check `{}`", permission))?;

        if allowed {
            println!("  {} {} {}", "✓".green(), "allow".green().bold(), permission);
        } else {
            println!("  {} {} {}", "✗".red(), "deny".red().bold(), permission);
        }
    }

    Ok(())
}
