/*!
 * Tree collector: finds the human-readable strings of an Adaptive Card.
 *
 * The walk is a depth-first, pre-order fold over the document. Whether a
 * string is collected depends on its key and on a small immutable context
 * carried down from the enclosing containers, never on parent pointers.
 */

use serde_json::{Map, Value};

use super::location::{Location, Slot};

/// Keys whose string values are always human-readable text
pub const TRANSLATABLE_KEYS: [&str; 6] = [
    "text",
    "altText",
    "fallbackText",
    "title",
    "placeholder",
    "data",
];

const TYPE_KEY: &str = "type";
const VALUE_KEY: &str = "value";
const FACTS_KEY: &str = "facts";
const INLINES_KEY: &str = "inlines";
const TEXT_INPUT_TYPE: &str = "Input.Text";

/// A string found in the document that should be sent for translation
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUnit {
    /// Where the string lives in the document
    pub location: Location,
    /// The text as it appeared when collected
    pub original_text: String,
}

/// Context a node inherits from the container it sits in
#[derive(Debug, Clone, Copy, Default)]
struct WalkContext {
    /// A string at this position should be collected
    eligible: bool,
    /// The node is a direct element of an array held under `facts`
    in_facts: bool,
}

/// Collect every translatable string of `document`, in document order.
///
/// The document is only borrowed; nothing is modified. Object keys are
/// visited in source order, which the batch correlation relies on.
pub fn collect(document: &Value) -> Vec<TranslationUnit> {
    let mut collector = Collector::default();

    match document {
        Value::Object(map) => collector.visit_object(map, false),
        Value::Array(items) => collector.visit_array(items, None),
        _ => {}
    }

    collector.units
}

/// Whether `key` is one of the always-translatable keys
pub fn is_translatable_key(key: &str) -> bool {
    TRANSLATABLE_KEYS.contains(&key)
}

#[derive(Default)]
struct Collector {
    /// Path to the container currently being walked
    path: Vec<Slot>,
    units: Vec<TranslationUnit>,
}

impl Collector {
    fn visit_object(&mut self, map: &Map<String, Value>, in_facts: bool) {
        let value_translatable = value_is_translatable(map, in_facts);

        for (key, child) in map {
            let context = WalkContext {
                eligible: is_translatable_key(key) || (key == VALUE_KEY && value_translatable),
                in_facts: false,
            };
            self.visit(child, Slot::Key(key.clone()), context);
        }
    }

    /// Walk the elements of an array reached through `key` (`None` for the
    /// root or for an array nested directly in another array)
    fn visit_array(&mut self, items: &[Value], key: Option<&str>) {
        // Direct string elements of `inlines` are rich-text runs
        let context = WalkContext {
            eligible: key == Some(INLINES_KEY),
            in_facts: key == Some(FACTS_KEY),
        };

        for (index, item) in items.iter().enumerate() {
            self.visit(item, Slot::Index(index), context);
        }
    }

    fn visit(&mut self, node: &Value, slot: Slot, context: WalkContext) {
        match node {
            Value::Object(map) => {
                self.path.push(slot);
                self.visit_object(map, context.in_facts);
                self.path.pop();
            }
            Value::Array(items) => {
                let key = slot.key().map(str::to_owned);
                self.path.push(slot);
                self.visit_array(items, key.as_deref());
                self.path.pop();
            }
            Value::String(text) if context.eligible => {
                self.units.push(TranslationUnit {
                    location: Location::new(self.path.clone(), slot),
                    original_text: text.clone(),
                });
            }
            _ => {}
        }
    }
}

/// `value` is free text for `Input.Text`, and for fact entries with no
/// `type` key. A present `type`, even JSON `null`, counts as typed.
/// Any other typed object (dates, times, toggles, choice sets, choices)
/// carries machine-readable values.
fn value_is_translatable(map: &Map<String, Value>, in_facts: bool) -> bool {
    match map.get(TYPE_KEY) {
        Some(Value::String(element_type)) => element_type == TEXT_INPUT_TYPE,
        None => in_facts,
        Some(_) => false,
    }
}
