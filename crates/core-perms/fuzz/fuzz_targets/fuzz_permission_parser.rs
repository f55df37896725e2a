//! Fuzz target for PermissionPath::parse and PermissionSet::parse
//!
//! Parsing must never panic, and anything that parses must format back to
//! text that parses to the same value.

#![no_main]

use core_perms::{PermissionPath, PermissionSet, MAX_PATH_DEPTH, MAX_PERMISSION_LENGTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(path) = PermissionPath::parse(data) {
        assert!(path.depth() >= 1, "Parsed path has no segments");
        assert!(path.depth() <= MAX_PATH_DEPTH, "Depth exceeds limit");

        let text = path.to_string();
        assert!(text.len() <= MAX_PERMISSION_LENGTH, "Formatted path exceeds limit");
        assert_eq!(PermissionPath::parse(&text).ok(), Some(path));
    }

    if let Ok(set) = PermissionSet::parse(data) {
        let text = set.to_string();
        assert_eq!(PermissionSet::parse(text.as_str()).ok(), Some(set));
    }
});
