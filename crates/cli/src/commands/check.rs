use colored::*;
use core_perms::{PermissionPath, PermissionSet};

/// Something in a loaded set that grant/revoke would never have produced
#[derive(Debug, PartialEq, Eq)]
pub enum Finding {
    /// Entry `index` repeats entry `first`
    Duplicate { index: usize, first: usize },
    /// Entry `index` sits under the broader entry `by` of the same polarity
    Shadowed { index: usize, by: usize },
}

/// Find duplicate and shadowed entries, reporting each entry at most once
pub fn analyze(set: &PermissionSet) -> Vec<Finding> {
    let entries = set.entries();
    let mut findings = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if let Some(first) = entries[..index].iter().position(|e| e.exact_match(entry)) {
            findings.push(Finding::Duplicate { index, first });
        } else if let Some(by) = entries.iter().position(|e| is_broader(e, entry)) {
            findings.push(Finding::Shadowed { index, by });
        }
    }

    findings
}

fn is_broader(candidate: &PermissionPath, entry: &PermissionPath) -> bool {
    candidate.is_positive() == entry.is_positive()
        && candidate.depth() < entry.depth()
        && entry.is_descendant_or_equal(candidate)
}

pub fn check(file_path: &str) -> anyhow::Result<()> {
    println!("{} {}", "Checking permissions:".bold(), file_path);

    let set = perms_utils::load(file_path)?;
    let entries = set.entries();
    let denials = entries.iter().filter(|e| !e.is_positive()).count();

    println!("  {} Entries: {}", "✓".green(), set.len());
    println!("  {} Grants: {}", "✓".green(), set.len() - denials);
    println!("  {} Denials: {}", "✓".green(), denials);

    let findings = analyze(&set);
    for finding in &findings {
        match *finding {
            Finding::Duplicate { index, first } => println!(
                "  {} Entry {} (`{}`) duplicates entry {}",
                "⚠".yellow(),
                index + 1,
                entries[index],
                first + 1
            ),
            Finding::Shadowed { index, by } => println!(
                "  {} Entry {} (`{}`) is already covered by entry {} (`{}`)",
                "⚠".yellow(),
                index + 1,
                entries[index],
                by + 1,
                entries[by]
            ),
        }
    }

    println!();
    if findings.is_empty() {
        println!("{} Permission set is valid!", "✓".green().bold());
    } else {
        println!(
            "{} Permission set is valid with {} warning(s)",
            "⚠".yellow().bold(),
            findings.len()
        );
    }

    Ok(())
}
