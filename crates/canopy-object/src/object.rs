use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use canopy_types::Hash;

use crate::error::DecodeError;

const LEAF_TYPE: &str = "leaf";
const TREE_TYPE: &str = "tree";

/// The kind of object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Opaque payload, no children.
    Leaf,
    /// Mapping from entry name to child hash.
    Tree,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => write!(f, "{LEAF_TYPE}"),
            Self::Tree => write!(f, "{TREE_TYPE}"),
        }
    }
}

/// An immutable content-addressed object.
///
/// The serialized form is UTF-8 JSON, tab-indented, carrying a `type`
/// discriminator followed by the variant's single field. Tree entries live
/// in a `BTreeMap`, so they always serialize in lexicographic name order;
/// two trees holding the same name→hash pairs produce identical content no
/// matter what order they were built in.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Object {
    Leaf { data: Value },
    Tree { entries: BTreeMap<String, Hash> },
}

impl Object {
    /// Create a leaf holding an arbitrary JSON-serializable payload.
    pub fn leaf(data: impl Into<Value>) -> Self {
        Self::Leaf { data: data.into() }
    }

    /// Create a tree from name→hash pairs. Later duplicates of a name
    /// replace earlier ones.
    pub fn tree<N: Into<String>>(entries: impl IntoIterator<Item = (N, Hash)>) -> Self {
        Self::Tree {
            entries: entries
                .into_iter()
                .map(|(name, hash)| (name.into(), hash))
                .collect(),
        }
    }

    /// This object's kind discriminator.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Leaf { .. } => ObjectKind::Leaf,
            Self::Tree { .. } => ObjectKind::Tree,
        }
    }

    /// The entry mapping, if this object is a tree.
    pub fn entries(&self) -> Option<&BTreeMap<String, Hash>> {
        match self {
            Self::Tree { entries } => Some(entries),
            Self::Leaf { .. } => None,
        }
    }

    /// Canonical serialization: what gets stored as the value in a store.
    ///
    /// Stable across platforms and runs for the same logical object.
    pub fn content(&self) -> Result<String, DecodeError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| DecodeError::Serialization(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| DecodeError::Serialization(e.to_string()))
    }

    /// The content hash: what gets used as the key in a store.
    ///
    /// Always derived from the canonical content, never cached inside the
    /// object.
    pub fn hash(&self) -> Result<Hash, DecodeError> {
        Ok(Hash::compute(&self.content()?))
    }

    /// Parse an object from its serialized form.
    ///
    /// Inspects the `type` discriminator and dispatches to the matching
    /// variant; fails with a [`DecodeError`] when the discriminator is
    /// missing or unrecognized, or the remaining structure does not fit the
    /// variant's shape.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingType)?;
        match tag {
            LEAF_TYPE => {
                let data = value
                    .get("data")
                    .cloned()
                    .ok_or_else(|| DecodeError::Malformed("leaf missing data field".into()))?;
                Ok(Self::Leaf { data })
            }
            TREE_TYPE => {
                let raw = value
                    .get("entries")
                    .and_then(Value::as_object)
                    .ok_or_else(|| {
                        DecodeError::Malformed("tree missing entries mapping".into())
                    })?;
                let mut entries = BTreeMap::new();
                for (name, child) in raw {
                    let hash = child.as_str().ok_or_else(|| {
                        DecodeError::Malformed(format!("entry {name} is not a hash string"))
                    })?;
                    entries.insert(name.clone(), Hash::parse(hash)?);
                }
                Ok(Self::Tree { entries })
            }
            other => Err(DecodeError::UnknownType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn leaf_content_is_canonical() {
        let leaf = Object::leaf("Hello world!");
        assert_eq!(
            leaf.content().unwrap(),
            "{\n\t\"type\": \"leaf\",\n\t\"data\": \"Hello world!\"\n}"
        );
    }

    #[test]
    fn tree_content_lists_entries_in_name_order() {
        let tree = Object::tree([
            ("zebra.txt", Hash::compute("z")),
            ("alpha.txt", Hash::compute("a")),
        ]);
        let content = tree.content().unwrap();
        let alpha = content.find("alpha.txt").unwrap();
        let zebra = content.find("zebra.txt").unwrap();
        assert!(alpha < zebra);
        assert!(content.starts_with("{\n\t\"type\": \"tree\",\n\t\"entries\": {"));
    }

    #[test]
    fn leaf_roundtrip() {
        let leaf = Object::leaf(serde_json::json!({ "note": "Buy milk.", "done": false }));
        let parsed = Object::parse(&leaf.content().unwrap()).unwrap();
        assert_eq!(leaf, parsed);
        assert_eq!(leaf.hash().unwrap(), parsed.hash().unwrap());
    }

    #[test]
    fn tree_roundtrip() {
        let tree = Object::tree([
            ("hello.txt", Hash::compute("hello")),
            ("sub", Hash::compute("sub")),
        ]);
        let parsed = Object::parse(&tree.content().unwrap()).unwrap();
        assert_eq!(tree, parsed);
        assert_eq!(tree.hash().unwrap(), parsed.hash().unwrap());
    }

    #[test]
    fn hash_is_deterministic() {
        let leaf = Object::leaf("same");
        assert_eq!(leaf.hash().unwrap(), leaf.hash().unwrap());
    }

    #[test]
    fn leaf_and_tree_kinds() {
        assert_eq!(Object::leaf(1).kind(), ObjectKind::Leaf);
        assert_eq!(Object::tree(Vec::<(&str, Hash)>::new()).kind(), ObjectKind::Tree);
        assert_eq!(format!("{}", ObjectKind::Leaf), "leaf");
        assert_eq!(format!("{}", ObjectKind::Tree), "tree");
    }

    #[test]
    fn entries_accessor() {
        let tree = Object::tree([("a", Hash::compute("a"))]);
        assert_eq!(tree.entries().unwrap().len(), 1);
        assert!(Object::leaf("x").entries().is_none());
    }

    #[test]
    fn equal_trees_built_in_different_orders_hash_equally() {
        let (ha, hb) = (Hash::compute("a"), Hash::compute("b"));
        let t1 = Object::tree([("a", ha.clone()), ("b", hb.clone())]);
        let t2 = Object::tree([("b", hb), ("a", ha)]);
        assert_eq!(t1.content().unwrap(), t2.content().unwrap());
        assert_eq!(t1.hash().unwrap(), t2.hash().unwrap());
    }

    #[test]
    fn parse_rejects_missing_type() {
        let err = Object::parse("{\"data\": 1}").unwrap_err();
        assert_eq!(err, DecodeError::MissingType);
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let err = Object::parse("{\"type\": \"commit\"}").unwrap_err();
        assert_eq!(err, DecodeError::UnknownType("commit".into()));
    }

    #[test]
    fn parse_rejects_leaf_without_data() {
        let err = Object::parse("{\"type\": \"leaf\"}").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_tree_without_entries() {
        let err = Object::parse("{\"type\": \"tree\"}").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_non_string_entry() {
        let err = Object::parse("{\"type\": \"tree\", \"entries\": {\"a\": 1}}").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_garbage_entry_hash() {
        let err =
            Object::parse("{\"type\": \"tree\", \"entries\": {\"a\": \"nothash\"}}").unwrap_err();
        assert!(matches!(err, DecodeError::EntryHash(_)));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = Object::parse("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    proptest! {
        // Identity depends only on the set of name→hash pairs, not the
        // order they were inserted in.
        #[test]
        fn insertion_order_never_changes_tree_hash(
            names in proptest::collection::btree_set("[a-z]{1,8}", 1..8usize),
        ) {
            let entries: Vec<(String, Hash)> = names
                .into_iter()
                .map(|name| {
                    let hash = Hash::compute(&name);
                    (name, hash)
                })
                .collect();
            let mut reversed = entries.clone();
            reversed.reverse();
            let t1 = Object::tree(entries);
            let t2 = Object::tree(reversed);
            prop_assert_eq!(t1.hash().unwrap(), t2.hash().unwrap());
        }
    }
}
