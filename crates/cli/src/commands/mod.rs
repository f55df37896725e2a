pub mod check;
pub mod demo;
pub mod has;
pub mod mutate;

use anyhow::Context;
use core_perms::PermissionSet;

/// Parse the `--set` argument
fn parse_set(list: &str) -> anyhow::Result<PermissionSet> {
    PermissionSet::parse(list).with_context(|| format!("Invalid permission list `{}`", list))
}
