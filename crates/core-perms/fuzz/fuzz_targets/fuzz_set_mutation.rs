//! Fuzz target for grant/revoke sequences
//!
//! Each line of input is one operation: `+perm` grants, `-perm` revokes,
//! `?perm` queries. Operations must never panic and the resulting set must
//! never hold the same entry twice.

#![no_main]

use core_perms::PermissionSet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut set = PermissionSet::new();

    for line in data.lines().take(64) {
        let Some(op) = line.chars().next() else {
            continue;
        };
        let perm = &line[op.len_utf8()..];
        let _ = match op {
            '+' => set.grant(perm),
            '-' => set.revoke(perm),
            '?' => set.has(perm).map(|_| ()),
            _ => Ok(()),
        };
    }

    let entries = set.entries();
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            assert!(!a.exact_match(b), "Duplicate entry {}", a);
        }
    }
});
