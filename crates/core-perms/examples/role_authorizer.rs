//! # Role Authorizer Example
//!
//! Demonstrates how to plug a custom decision source behind the `Authorizer`
//! trait: a user holds several roles, each role is a `PermissionSet`, and a
//! denial in any role overrides grants from the others.
//!
//! ## Run
//!
//! ```bash
//! cargo run -p core-perms --example role_authorizer
//! ```

use core_perms::{Authorizer, PermissionPath, PermissionSet, Result};
use std::collections::HashMap;

/// Roles assigned to one user, evaluated together
struct RoleAuthorizer<'a> {
    roles: Vec<&'a PermissionSet>,
}

impl<'a> RoleAuthorizer<'a> {
    fn for_user(registry: &'a HashMap<&'a str, PermissionSet>, names: &[&str]) -> Self {
        let roles = names
            .iter()
            .filter_map(|name| registry.get(*name))
            .collect();
        Self { roles }
    }
}

impl Authorizer for RoleAuthorizer<'_> {
    fn has(&self, target: &PermissionPath) -> Result<bool> {
        let mut granted = false;
        for role in &self.roles {
            let authorizer = role.authorizer();
            if authorizer.denying_entries(target)?.next().is_some() {
                return Ok(false);
            }
            granted |= authorizer.has(target)?;
        }
        Ok(granted)
    }
}

fn check(label: &str, authorizer: &dyn Authorizer, permission: &str) -> Result<()> {
    let target = PermissionPath::parse(permission)?;
    let verdict = if authorizer.has(&target)? { "allow" } else { "deny" };
    println!("  {:<10} {:<24} {}", label, permission, verdict);
    Ok(())
}

fn main() -> Result<()> {
    let mut registry = HashMap::new();

    let mut reader = PermissionSet::new();
    reader.grant("document")?;
    reader.revoke("document.secret")?;
    registry.insert("reader", reader);

    let mut editor = PermissionSet::new();
    editor.grant(["document.4.edit", "document.5.edit", "document.secret.edit"])?;
    registry.insert("editor", editor);

    let mut auditor = PermissionSet::new();
    auditor.grant("audit.log")?;
    registry.insert("auditor", auditor);

    let alice = RoleAuthorizer::for_user(&registry, &["reader", "editor"]);
    let bob = RoleAuthorizer::for_user(&registry, &["auditor"]);

    println!("Role-based checks:");
    check("alice", &alice, "document.4.view")?;
    check("alice", &alice, "document.4.edit")?;
    // The reader role denies the whole subtree, editor grants cannot reopen it
    check("alice", &alice, "document.secret.edit")?;
    check("bob", &bob, "document.4.view")?;
    check("bob", &bob, "audit.log.read")?;

    // A plain set is itself an Authorizer
    println!("\nSingle set:");
    if let Some(reader) = registry.get("reader") {
        check("reader", reader, "document.7")?;
        check("reader", reader, "document.secret")?;
    }

    Ok(())
}
