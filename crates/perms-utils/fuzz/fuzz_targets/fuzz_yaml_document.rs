//! Fuzz target for YamlParser::parse
//!
//! Arbitrary text must never panic the YAML loader, and any document that
//! loads must respect the set size limits and render back to itself.

#![no_main]

use core_perms::{PermsError, MAX_ENTRIES_PER_SET};
use libfuzzer_sys::fuzz_target;
use perms_utils::{Error, PermissionSetParser, YamlParser};

fuzz_target!(|data: &str| {
    let parser = YamlParser;

    match parser.parse(data) {
        Ok(set) => {
            assert!(set.len() <= MAX_ENTRIES_PER_SET, "Loaded set exceeds entry limit");

            let rendered = parser.render(&set).expect("render loaded set");
            let back = parser.parse(&rendered).expect("reload rendered set");
            assert_eq!(back, set);
        }
        Err(Error::Perms(PermsError::TooManyEntries { max, attempted })) => {
            assert!(attempted > max);
        }
        Err(_) => {}
    }
});
