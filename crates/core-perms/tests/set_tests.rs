//! Permission set tests: queries, normalization on grant/revoke, wire format

use core_perms::{PermissionInput, PermissionPath, PermissionSet, PermsError, MAX_ENTRIES_PER_SET};

fn set(text: &str) -> PermissionSet {
    PermissionSet::parse(text).unwrap()
}

fn p(text: &str) -> PermissionPath {
    PermissionPath::parse(text).unwrap()
}

// === REFERENCE SCENARIOS ===

#[test]
fn test_parse_format_and_has() {
    let perms = set("test.test2,!test.test2.subtest");

    assert_eq!(perms.to_string(), "test.test2,!test.test2.subtest");
    assert!(!perms.has("test").unwrap());
    assert!(perms.has("test.test2").unwrap());
    assert!(!perms.has("test.test2.subtest").unwrap());
    assert!(perms.has("test.test2.subtestyes").unwrap());
}

#[test]
fn test_grant_lifts_exact_denial() {
    let mut perms = set("test.test2,!test.test2.subtest");
    perms.grant("test.test2.subtest").unwrap();

    assert_eq!(perms.to_string(), "test.test2");
    assert!(perms.has("test.test2.subtest").unwrap());
}

#[test]
fn test_broader_grant_prunes_children() {
    let mut perms = PermissionSet::new();
    perms.grant("document.4.view").unwrap();
    perms.grant("document.4.edit").unwrap();
    assert_eq!(perms.to_string(), "document.4.view,document.4.edit");

    perms.grant("document.4").unwrap();
    assert_eq!(perms.to_string(), "document.4");
    assert_eq!(perms.len(), 1);
}

#[test]
fn test_revoke_punches_hole_and_is_idempotent() {
    let mut perms = set("document.4");

    perms.revoke("document.4.edit").unwrap();
    assert_eq!(perms.to_string(), "document.4,!document.4.edit");
    assert!(!perms.has("document.4.edit").unwrap());
    assert!(perms.has("document.4.view").unwrap());

    perms.revoke("document.4.edit").unwrap();
    assert_eq!(perms.to_string(), "document.4,!document.4.edit");
}

#[test]
fn test_full_walkthrough() {
    let mut perms = set("test.test2,!test.test2.subtest");

    perms.grant("test.test2").unwrap();
    assert_eq!(perms.to_string(), "test.test2,!test.test2.subtest");

    perms.grant("document.4.view").unwrap();
    perms.grant("document.4.edit").unwrap();
    perms.grant("document.4").unwrap();
    assert_eq!(perms.to_string(), "test.test2,!test.test2.subtest,document.4");

    perms.grant("test.test2.subtest").unwrap();
    assert_eq!(perms.to_string(), "test.test2,document.4");

    perms.revoke("document.4.edit").unwrap();
    perms.revoke("document.4.edit").unwrap();
    assert_eq!(perms.to_string(), "test.test2,document.4,!document.4.edit");

    perms.revoke("test.test2.subtest.subsubtest").unwrap();
    assert_eq!(
        perms.to_string(),
        "test.test2,document.4,!document.4.edit,!test.test2.subtest.subsubtest"
    );

    // Revoking an ungranted ancestor drops everything beneath it and adds nothing
    perms.revoke("test").unwrap();
    assert_eq!(perms.to_string(), "document.4,!document.4.edit");

    perms.revoke("document").unwrap();
    assert_eq!(perms.to_string(), "");
    assert!(perms.is_empty());
}

// === HAS ===

#[test]
fn test_has_on_empty_set() {
    assert!(!PermissionSet::new().has("a").unwrap());
}

#[test]
fn test_deny_wins_over_more_specific_grant() {
    // Specificity does not override polarity, in either order
    let perms = set("!document,document.4.view");
    assert!(!perms.has("document.4.view").unwrap());

    let perms = set("document.4.view,!document");
    assert!(!perms.has("document.4.view").unwrap());
}

#[test]
fn test_has_unrelated_denial_does_not_interfere() {
    let perms = set("a,!b");
    assert!(perms.has("a.x").unwrap());
    assert!(!perms.has("b.x").unwrap());
    assert!(!perms.has("c").unwrap());
}

#[test]
fn test_has_accepts_paths_and_text() {
    let perms = set("a.b");
    let target = p("a.b.c");
    assert!(perms.has(&target).unwrap());
    assert!(perms.has("a.b.c").unwrap());
    assert!(perms.has(&String::from("a.b.c")).unwrap());
}

#[test]
fn test_has_negative_target_rejected() {
    assert!(matches!(
        set("a").has("!a"),
        Err(PermsError::InvalidOperation(_))
    ));
    // Contract holds even with nothing to scan
    assert!(matches!(
        PermissionSet::new().has("!a"),
        Err(PermsError::InvalidOperation(_))
    ));
}

#[test]
fn test_has_malformed_target_rejected() {
    assert!(matches!(set("a").has("a..b"), Err(PermsError::Parse(_))));
}

#[test]
fn test_has_does_not_mutate() {
    let perms = set("a,!a.b");
    let before = perms.clone();
    let _ = perms.has("a.b.c").unwrap();
    let _ = perms.has("!a");
    assert_eq!(perms.to_string(), before.to_string());
}

// === EXACT MATCH ===

#[test]
fn test_exact_match() {
    let perms = set("a.b,!a.b.c");
    assert!(perms.exact_match("a.b").unwrap());
    assert!(perms.exact_match("!a.b.c").unwrap());
    assert!(!perms.exact_match("a.b.c").unwrap());
    assert!(!perms.exact_match("!a.b").unwrap());
    assert!(!perms.exact_match("a").unwrap());
}

// === GRANT ===

#[test]
fn test_grant_already_covered_is_noop() {
    let mut perms = set("a");
    perms.grant("a.b.c").unwrap();
    assert_eq!(perms.to_string(), "a");
}

#[test]
fn test_grant_twice_is_noop() {
    let mut perms = PermissionSet::new();
    perms.grant("a.b").unwrap();
    perms.grant("a.b").unwrap();
    assert_eq!(perms.to_string(), "a.b");
}

#[test]
fn test_grant_many_in_order() {
    let mut perms = PermissionSet::new();
    perms.grant(["a.b", "c", "a"]).unwrap();
    assert_eq!(perms.to_string(), "c,a");
}

#[test]
fn test_grant_permission_list_text() {
    let mut perms = PermissionSet::new();
    perms.grant("a.b,c.d").unwrap();
    assert_eq!(perms.to_string(), "a.b,c.d");
}

#[test]
fn test_grant_from_other_set() {
    let mut perms = set("a.x");
    let other = set("b,a");
    perms.grant(&other).unwrap();
    assert_eq!(perms.to_string(), "b,a");
}

#[test]
fn test_grant_wildcard_form() {
    let mut perms = set("document.4.view");
    perms.grant("document.4.*").unwrap();
    assert_eq!(perms.to_string(), "document.4");
}

#[test]
fn test_grant_under_broader_denial_is_recorded_but_stays_denied() {
    let mut perms = set("a,!a.b");
    perms.grant("a.b.c").unwrap();

    assert_eq!(perms.to_string(), "a,!a.b,a.b.c");
    assert!(!perms.has("a.b.c").unwrap());
}

/// Granting a broader path prunes every entry beneath it regardless of
/// polarity, so a nested denial disappears and its target becomes granted.
///
/// Whether dropping the nested denial is desirable is an open question; this
/// pins the current behavior so any change to it is deliberate.
#[test]
fn test_broader_grant_drops_nested_denial() {
    let mut perms = set("a.b.c,!a.b.c.d");
    assert!(!perms.has("a.b.c.d").unwrap());

    perms.grant("a.b").unwrap();

    assert_eq!(perms.to_string(), "a.b");
    assert!(perms.has("a.b.c.d").unwrap());
}

#[test]
fn test_grant_negative_rejected() {
    let mut perms = PermissionSet::new();
    assert!(matches!(
        perms.grant("!a"),
        Err(PermsError::InvalidOperation(_))
    ));
    assert!(perms.is_empty());
}

#[test]
fn test_grant_is_atomic_on_invalid_input() {
    let mut perms = set("x");

    assert!(matches!(
        perms.grant(["a", "!b", "c"]),
        Err(PermsError::InvalidOperation(_))
    ));
    assert_eq!(perms.to_string(), "x");

    assert!(matches!(
        perms.grant(["a", "b..c"]),
        Err(PermsError::Parse(_))
    ));
    assert_eq!(perms.to_string(), "x");
}

#[test]
fn test_grant_empty_text_is_noop() {
    let mut perms = set("a");
    perms.grant("").unwrap();
    assert_eq!(perms.to_string(), "a");
}

// === REVOKE ===

#[test]
fn test_revoke_exact_grant() {
    let mut perms = set("a.b,c");
    perms.revoke("a.b").unwrap();
    assert_eq!(perms.to_string(), "c");
}

#[test]
fn test_revoke_ungranted_adds_nothing() {
    let mut perms = set("a");
    perms.revoke("b.c").unwrap();
    assert_eq!(perms.to_string(), "a");
}

#[test]
fn test_revoke_drops_nested_entries() {
    let mut perms = set("a.b.c,a.b.d,!a.b.e,x");
    perms.revoke("a.b").unwrap();
    assert_eq!(perms.to_string(), "x");
}

#[test]
fn test_revoke_nested_under_broad_grant() {
    let mut perms = set("a,a.b.c,!a.b.d");
    perms.revoke("a.b").unwrap();

    assert_eq!(perms.to_string(), "a,!a.b");
    assert!(!perms.has("a.b.c").unwrap());
    assert!(perms.has("a.c").unwrap());
}

#[test]
fn test_revoke_restores_exclusion() {
    let mut perms = set("a.b");
    perms.revoke("a.b.c").unwrap();
    assert!(!perms.has("a.b.c").unwrap());
    assert!(!perms.has("a.b.c.x").unwrap());
    assert!(perms.has("a.b.d").unwrap());
}

#[test]
fn test_revoke_negative_rejected() {
    let mut perms = set("a");
    assert!(matches!(
        perms.revoke("!a.b"),
        Err(PermsError::InvalidOperation(_))
    ));
    assert_eq!(perms.to_string(), "a");
}

#[test]
fn test_revoke_is_atomic_on_invalid_input() {
    let mut perms = set("a,b");
    assert!(perms.revoke(vec!["a", "!b"]).is_err());
    assert_eq!(perms.to_string(), "a,b");
}

#[test]
fn test_grant_then_revoke_same_path() {
    let mut perms = PermissionSet::new();
    perms.grant("a.b").unwrap();
    perms.revoke("a.b").unwrap();
    assert!(perms.is_empty());
    assert!(!perms.has("a.b").unwrap());
}

// === CLEAR ===

#[test]
fn test_clear() {
    let mut perms = set("a,!a.b,c");
    perms.clear();
    assert!(perms.is_empty());
    assert_eq!(perms.to_string(), "");
    assert!(!perms.has("a").unwrap());
}

// === PARSE / FORMAT ===

#[test]
fn test_parse_does_not_normalize() {
    let perms = set("a,a.b,a");
    assert_eq!(perms.len(), 3);
    assert_eq!(perms.to_string(), "a,a.b,a");
}

#[test]
fn test_parse_shapes() {
    let from_text = set("a,!a.b");
    let from_list = PermissionSet::parse(vec!["a", "!a.b"]).unwrap();
    let from_strings = PermissionSet::parse(vec![String::from("a"), String::from("!a.b")]).unwrap();
    let from_paths = PermissionSet::parse(vec![p("a"), p("!a.b")]).unwrap();
    let from_path = PermissionSet::parse(p("a")).unwrap();

    assert_eq!(from_text, from_list);
    assert_eq!(from_list, from_strings);
    assert_eq!(from_strings, from_paths);
    assert_eq!(from_path.to_string(), "a");
}

#[test]
fn test_parse_empty_text() {
    let perms = set("");
    assert!(perms.is_empty());
    assert_eq!(PermissionSet::parse(perms.to_string()).unwrap(), perms);
}

#[test]
fn test_parse_rejects_empty_item() {
    assert!(matches!(PermissionSet::parse("a,,b"), Err(PermsError::Parse(_))));
    assert!(matches!(PermissionSet::parse("a,"), Err(PermsError::Parse(_))));
}

#[test]
fn test_parse_entry_limit() {
    let at_limit: Vec<String> = (0..MAX_ENTRIES_PER_SET).map(|i| format!("p{}", i)).collect();
    assert!(PermissionSet::parse(at_limit.join(",")).is_ok());

    let over: Vec<String> = (0..=MAX_ENTRIES_PER_SET).map(|i| format!("p{}", i)).collect();
    assert_eq!(
        PermissionSet::parse(over),
        Err(PermsError::TooManyEntries {
            max: MAX_ENTRIES_PER_SET,
            attempted: MAX_ENTRIES_PER_SET + 1,
        })
    );
}

#[test]
fn test_parse_entry_limit_checked_before_parsing() {
    // Every item is malformed, so only an up-front count can report the limit
    let text = vec!["a..b"; MAX_ENTRIES_PER_SET + 1].join(",");
    assert_eq!(
        PermissionSet::parse(text),
        Err(PermsError::TooManyEntries {
            max: MAX_ENTRIES_PER_SET,
            attempted: MAX_ENTRIES_PER_SET + 1,
        })
    );

    let list = vec!["a..b"; MAX_ENTRIES_PER_SET + 1];
    assert!(matches!(
        PermissionSet::parse(list),
        Err(PermsError::TooManyEntries { .. })
    ));

    // Under the limit the parse error surfaces as usual
    assert!(matches!(PermissionSet::parse("a..b,c"), Err(PermsError::Parse(_))));
}

#[test]
fn test_from_str() {
    let perms: PermissionSet = "a,!a.b".parse().unwrap();
    assert_eq!(perms.len(), 2);
}

#[test]
fn test_equality_ignores_order() {
    assert_eq!(set("a,!a.b,c"), set("c,a,!a.b"));
    assert_ne!(set("a,!a.b"), set("a,a.b"));
    assert_ne!(set("a"), set("a,b"));
}

#[test]
fn test_equality_ignores_repeats() {
    assert_eq!(set("a,a,b"), set("a,b,b"));
    assert_eq!(set("a,b"), set("a,a,b"));
    assert_ne!(set("a,a"), set("a,b"));
    assert_eq!(PermissionSet::new(), set(""));
}

#[test]
fn test_iteration_in_insertion_order() {
    let perms = set("c,a,!b");
    let rendered: Vec<String> = perms.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["c", "a", "!b"]);

    let mut count = 0;
    for entry in &perms {
        assert!(perms.exact_match(entry).unwrap());
        count += 1;
    }
    assert_eq!(count, 3);

    let owned: Vec<PermissionPath> = perms.into_iter().collect();
    assert_eq!(owned.len(), 3);
}

#[test]
fn test_covering_entries() {
    let perms = set("a,a.b,!a.b.c,x");
    let target = p("a.b.d");
    let covering: Vec<String> = perms
        .covering_entries(&target)
        .unwrap()
        .map(ToString::to_string)
        .collect();
    assert_eq!(covering, ["a", "a.b"]);
}

#[test]
fn test_input_into_paths() {
    let paths = PermissionInput::from("a,!b").into_paths().unwrap();
    assert_eq!(paths, vec![p("a"), p("!b")]);

    let paths = PermissionInput::from(set("x,y")).into_paths().unwrap();
    assert_eq!(paths, vec![p("x"), p("y")]);

    let paths = PermissionInput::from(&p("z")).into_paths().unwrap();
    assert_eq!(paths, vec![p("z")]);
}

// === SERDE ===

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
struct Doc {
    permissions: PermissionSet,
}

#[test]
fn test_serde_string_form() {
    let doc: Doc = toml::from_str(r#"permissions = "a,!a.b""#).unwrap();
    assert_eq!(doc.permissions, set("a,!a.b"));

    let text = toml::to_string(&doc).unwrap();
    assert_eq!(text.trim(), r#"permissions = "a,!a.b""#);
}

#[test]
fn test_serde_list_form() {
    let doc: Doc = toml::from_str(r#"permissions = ["a", "!a.b"]"#).unwrap();
    assert_eq!(doc.permissions.to_string(), "a,!a.b");
}

#[test]
fn test_serde_rejects_other_shapes() {
    assert!(toml::from_str::<Doc>("permissions = 42").is_err());
    assert!(toml::from_str::<Doc>("permissions = [1, 2]").is_err());
    assert!(toml::from_str::<Doc>(r#"permissions = ["a..b"]"#).is_err());
}
