/*!
 * Leaf slot addressing inside a card document.
 *
 * A `Location` names exactly one leaf slot: either a key of an object or an
 * index of an array, reached by a path of container steps from the root.
 * It never borrows the document. It is resolved against the live document
 * only at write-back time.
 *
 * Invariant: a location stays valid only as long as no container on its path
 * is restructured (keys added/removed, elements inserted/removed). The engine
 * never does that between collection and write-back; it only overwrites
 * string leaves in place.
 */

use serde_json::Value;
use std::fmt;

/// One step into a container: an object key or an array index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A key of an object
    Key(String),
    /// An index of an array
    Index(usize),
}

impl Slot {
    /// The key name, if this slot addresses an object member
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Reference to one leaf slot of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Steps from the root to the container that holds the leaf
    container: Vec<Slot>,
    /// Slot of the leaf inside that container
    slot: Slot,
}

impl Location {
    /// Create a location from the path to its container and the leaf slot
    pub fn new(container: Vec<Slot>, slot: Slot) -> Self {
        Self { container, slot }
    }

    /// Path from the root to the containing object or array
    pub fn container_path(&self) -> &[Slot] {
        &self.container
    }

    /// Slot of the leaf inside its container
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Read the leaf string at this location, if it still is one
    pub fn get<'a>(&self, document: &'a Value) -> Option<&'a str> {
        let container = self
            .container
            .iter()
            .try_fold(document, |node, step| step_into(node, step))?;
        step_into(container, &self.slot)?.as_str()
    }

    /// Overwrite the string leaf at this location.
    ///
    /// Only an existing string leaf is replaced; the slot is never created
    /// and a non-string value is never overwritten. Returns whether a write
    /// happened.
    pub fn write(&self, document: &mut Value, text: &str) -> bool {
        let mut node = document;
        for step in &self.container {
            node = match step_into_mut(node, step) {
                Some(next) => next,
                None => return false,
            };
        }

        match step_into_mut(node, &self.slot) {
            Some(Value::String(leaf)) => {
                leaf.clear();
                leaf.push_str(text);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Location {
    /// Renders a JSONPath-like string, e.g. `$.body[0].columns[1].text`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for step in self.container.iter().chain(std::iter::once(&self.slot)) {
            match step {
                Slot::Key(key) => write!(f, ".{}", key)?,
                Slot::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

fn step_into<'a>(node: &'a Value, step: &Slot) -> Option<&'a Value> {
    match (node, step) {
        (Value::Object(map), Slot::Key(key)) => map.get(key),
        (Value::Array(items), Slot::Index(index)) => items.get(*index),
        _ => None,
    }
}

fn step_into_mut<'a>(node: &'a mut Value, step: &Slot) -> Option<&'a mut Value> {
    match (node, step) {
        (Value::Object(map), Slot::Key(key)) => map.get_mut(key),
        (Value::Array(items), Slot::Index(index)) => items.get_mut(*index),
        _ => None,
    }
}
