//! Path-addressed get/has/set/remove over any [`PathRoot`].

use crate::path::Path;
use crate::traits::{PathNode, PathRoot};

/// Borrow the value at `path`.
///
/// Returns `None` if any segment is missing or an intermediate value is not
/// a container. An empty path resolves to nothing.
pub fn get<'a, R>(root: &'a R, path: &Path) -> Option<&'a R::Node>
where
    R: PathRoot + ?Sized,
{
    let (first, rest) = path.segments().split_first()?;
    rest.iter()
        .try_fold(root.entry(first)?, |node, segment| node.child(segment))
}

/// Mutably borrow the value at `path`.
pub fn get_mut<'a, R>(root: &'a mut R, path: &Path) -> Option<&'a mut R::Node>
where
    R: PathRoot + ?Sized,
{
    let (first, rest) = path.segments().split_first()?;
    let mut node = root.entry_mut(first)?;
    for segment in rest {
        node = node.child_mut(segment)?;
    }
    Some(node)
}

/// Returns `true` if `path` resolves to a value.
pub fn has<R>(root: &R, path: &Path) -> bool
where
    R: PathRoot + ?Sized,
{
    get(root, path).is_some()
}

/// Store `value` at `path`, creating missing intermediate containers.
///
/// Any intermediate segment that is missing or holds a non-container value
/// is replaced by [`PathNode::empty_container`]. The leaf is overwritten
/// directly. Returns `false` only for an empty path.
///
/// # Examples
///
/// ```
/// use mrec_path::{get, set, Path};
/// use serde_json::{json, Map};
///
/// let mut root = Map::new();
/// assert!(set(&mut root, &Path::parse("a.b.c"), json!(1)));
/// assert_eq!(get(&root, &Path::parse("a.b")), Some(&json!({"c": 1})));
/// ```
pub fn set<R>(root: &mut R, path: &Path, value: R::Node) -> bool
where
    R: PathRoot + ?Sized,
{
    let Some((parents, leaf)) = path.split_leaf() else {
        return false;
    };
    let Some((first, rest)) = parents.split_first() else {
        root.insert_entry(leaf, value);
        return true;
    };

    if !root.entry(first).is_some_and(PathNode::is_container) {
        root.insert_entry(first, <R::Node as PathNode>::empty_container());
    }
    let Some(mut node) = root.entry_mut(first) else {
        return false;
    };
    for segment in rest {
        if !node.child(segment).is_some_and(PathNode::is_container) {
            node.insert_child(segment, <R::Node as PathNode>::empty_container());
        }
        node = match node.child_mut(segment) {
            Some(child) => child,
            None => return false,
        };
    }
    node.insert_child(leaf, value)
}

/// Remove and return the value at `path`.
///
/// Returns `None` (and changes nothing) if the parent path does not exist.
pub fn take<R>(root: &mut R, path: &Path) -> Option<R::Node>
where
    R: PathRoot + ?Sized,
{
    let (parents, leaf) = path.split_leaf()?;
    match parents.split_first() {
        None => root.remove_entry(leaf),
        Some((first, rest)) => {
            let mut node = root.entry_mut(first)?;
            for segment in rest {
                node = node.child_mut(segment)?;
            }
            node.remove_child(leaf)
        }
    }
}

/// Remove the value at `path`. Returns `true` if something was removed.
pub fn remove<R>(root: &mut R, path: &Path) -> bool
where
    R: PathRoot + ?Sized,
{
    take(root, path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    fn root(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    fn p(path: &str) -> Path {
        Path::parse(path)
    }

    #[test]
    fn get_walks_nested_objects() {
        let tree = root(json!({"a": {"b": {"c": 3}}}));
        assert_eq!(get(&tree, &p("a.b.c")), Some(&json!(3)));
        assert_eq!(get(&tree, &p("a.b")), Some(&json!({"c": 3})));
    }

    #[test]
    fn get_missing_is_none() {
        let tree = root(json!({"a": {"b": 1}}));
        assert_eq!(get(&tree, &p("a.x")), None);
        assert_eq!(get(&tree, &p("x.y.z")), None);
        assert_eq!(get(&tree, &p("")), None);
    }

    #[test]
    fn get_through_scalar_is_none() {
        let tree = root(json!({"a": 1, "l": [1, 2]}));
        assert_eq!(get(&tree, &p("a.b")), None);
        assert_eq!(get(&tree, &p("l.0")), None);
    }

    #[test]
    fn null_leaf_is_present() {
        let tree = root(json!({"a": null}));
        assert!(has(&tree, &p("a")));
    }

    #[test]
    fn set_autovivifies_intermediates() {
        let mut tree = Map::new();
        assert!(set(&mut tree, &p("a.b.c.d"), json!(0.5)));
        assert_eq!(Value::Object(tree), json!({"a": {"b": {"c": {"d": 0.5}}}}));
    }

    #[test]
    fn set_replaces_scalar_intermediate() {
        let mut tree = root(json!({"a": 1}));
        set(&mut tree, &p("a.b"), json!(2));
        assert_eq!(Value::Object(tree), json!({"a": {"b": 2}}));
    }

    #[test]
    fn set_overwrites_leaf_without_merging() {
        let mut tree = root(json!({"a": {"b": {"x": 1}}}));
        set(&mut tree, &p("a.b"), json!({"y": 2}));
        assert_eq!(Value::Object(tree), json!({"a": {"b": {"y": 2}}}));
    }

    #[test]
    fn set_empty_path_is_noop() {
        let mut tree = Map::new();
        assert!(!set(&mut tree, &p(""), json!(1)));
        assert!(tree.is_empty());
    }

    #[test]
    fn get_mut_allows_in_place_update() {
        let mut tree = root(json!({"a": {"n": 1}}));
        *get_mut(&mut tree, &p("a.n")).unwrap() = json!(2);
        assert_eq!(get(&tree, &p("a.n")), Some(&json!(2)));
    }

    #[test]
    fn remove_walks_back_up() {
        let mut tree = Map::new();
        set(&mut tree, &p("a.b.c.d"), json!(1));
        for path in ["a.b.c.d", "a.b.c", "a.b", "a"] {
            assert!(has(&tree, &p(path)));
            assert!(remove(&mut tree, &p(path)));
            assert!(!has(&tree, &p(path)));
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn remove_missing_parent_is_noop() {
        let mut tree = root(json!({"a": 1}));
        assert!(!remove(&mut tree, &p("x.y")));
        assert!(!remove(&mut tree, &p("a.b")));
        assert_eq!(Value::Object(tree), json!({"a": 1}));
    }

    #[test]
    fn take_returns_removed_value() {
        let mut tree = root(json!({"a": {"b": [1, 2]}}));
        assert_eq!(take(&mut tree, &p("a.b")), Some(json!([1, 2])));
        assert_eq!(Value::Object(tree), json!({"a": {}}));
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-z]{1,4}"
    }

    proptest! {
        #[test]
        fn set_then_get_roundtrips(
            segments in prop::collection::vec(segment(), 1..5),
            value in any::<i64>(),
        ) {
            let path = Path::from_segments(segments);
            let mut tree = Map::new();
            prop_assert!(set(&mut tree, &path, json!(value)));
            prop_assert_eq!(get(&tree, &path), Some(&json!(value)));
            prop_assert!(remove(&mut tree, &path));
            prop_assert!(!has(&tree, &path));
        }
    }
}
