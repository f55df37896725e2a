use anyhow::Context;
use core_perms::PermissionSet;

use super::parse_set;

pub fn grant(list: &str, permissions: &[String]) -> anyhow::Result<()> {
    let mut set = parse_set(list)?;
    for permission in permissions {
        set.grant(permission)
            .with_context(|| format!("Cannot grant `{}`", permission))?;
    }
    print_set(&set);
    Ok(())
}

pub fn revoke(list: &str, permissions: &[String]) -> anyhow::Result<()> {
    let mut set = parse_set(list)?;
    for permission in permissions {
        set.revoke(permission)
            .with_context(|| format!("Cannot revoke `{}`", permission))?;
    }
    print_set(&set);
    Ok(())
}

fn print_set(set: &PermissionSet) {
    println!("{}", set);
}
