//! Path integration tests
//!
//! Construction routes, head/tail decomposition, and equality.

use std::str::FromStr;

use jsonnode::{Error, Path, PathBuf, PathError, path};

#[test]
fn test_construction_routes_agree() {
    let pushed = PathBuf::new().push("user").push("profile").push("name");
    let parsed = PathBuf::from_str("user.profile.name").unwrap();
    let listed = PathBuf::from(vec![
        "user".to_string(),
        "profile".to_string(),
        "name".to_string(),
    ]);
    let array = PathBuf::from(["user", "profile", "name"]);
    let collected: PathBuf = ["user", "profile", "name"].into_iter().collect();
    let macro_built = path!("user", "profile", "name");

    for other in [&parsed, &listed, &array, &collected, &macro_built] {
        assert_eq!(&pushed, other);
    }
}

#[test]
fn test_size_and_as_list() {
    let path = path!("a", "b", "c");
    assert_eq!(path.len(), 3);
    assert_eq!(
        path.as_list(),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );

    let empty = PathBuf::new();
    assert_eq!(empty.len(), 0);
    assert!(empty.as_list().is_empty());
}

#[test]
fn test_decomposition_walks_every_segment() {
    let path = path!("a", "b", "c");
    let mut current: &Path = &path;
    let mut seen = Vec::new();
    while !current.is_empty() {
        seen.push(current.head().unwrap().to_string());
        current = current.tail().unwrap();
    }
    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[test]
fn test_tail_of_single_segment_is_empty_path() {
    let path = path!("only");
    assert_eq!(path.tail().unwrap(), Path::empty());
    assert_eq!(path.tail().unwrap().len(), 0);
}

#[test]
fn test_empty_path_head_and_tail_fail() {
    let empty = path!();
    assert_eq!(empty.head(), Err(PathError::Empty));
    assert!(matches!(empty.tail(), Err(PathError::Empty)));

    let err: Error = empty.head().unwrap_err().into();
    assert!(err.is_path_error());
}

#[test]
fn test_tail_borrows_without_copying() {
    let path = path!("a", "b");
    let tail = path.tail().unwrap();
    assert_eq!(tail.to_path_buf(), path!("b"));
    assert_eq!(tail.to_owned(), path!("b"));
}

#[test]
fn test_segments_keep_dots_literally() {
    let literal = path!("a.b");
    let parsed = PathBuf::from_str("a.b").unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(parsed.len(), 2);
    assert_ne!(literal, parsed);
}

#[test]
fn test_strict_construction() {
    assert_eq!(
        PathBuf::try_from_segments(["a", ""]),
        Err(PathError::EmptySegment { index: 1 })
    );
    assert_eq!(PathBuf::from_segments(["a", ""]), path!("a"));
}

#[test]
fn test_paths_work_as_hash_keys() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(path!("a", "b"));
    set.insert(PathBuf::from_str("a.b").unwrap());
    set.insert(path!("b", "a"));
    assert_eq!(set.len(), 2);
}
