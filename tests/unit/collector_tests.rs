/*!
 * Tests for the tree collector context rules
 */

use serde_json::{json, Value};
use cardtranslate::card::{collect, Slot, TRANSLATABLE_KEYS};

use crate::common::load_card;

fn texts(document: &Value) -> Vec<String> {
    collect(document).into_iter().map(|unit| unit.original_text).collect()
}

#[test]
fn test_collect_withHotelCard_shouldFindOnlyHumanText() {
    let card = load_card("hotel_card.json");
    let collected = texts(&card);

    assert_eq!(collected, vec![
        "Are you looking for a flight or a hotel?",
        "Travel agent",
        "Hello!",
        "Are you looking for a flight or a hotel?",
        "Agent",
        "Available",
        "Hours",
        "Always open",
        "Prices include ",
        "all taxes",
        "Hotels",
        "Welcome to the Hotels finder!",
        "Please enter your destination:",
        "Miami, Florida",
        "Paris",
        "When do you want to check in?",
        "How many nights do you want to stay?",
        "Include breakfast",
        "Single room",
        "Double room",
        "Search",
        "Flights",
        "Flights is not implemented =(",
    ]);
}

#[test]
fn test_collect_withHotelCard_shouldSkipStructuralValues() {
    let card = load_card("hotel_card.json");
    let collected = texts(&card);

    for structural in ["2017-10-15", "16:00", "true", "double", "single", "HotelSearch", "Medium", "Person"] {
        assert!(!collected.iter().any(|text| text == structural), "{} must not be collected", structural);
    }
    assert!(!collected.iter().any(|text| text.starts_with("https://")));
    assert!(!collected.iter().any(|text| text.starts_with("<s>")));
}

#[test]
fn test_collect_withEveryFixedKey_shouldCollectRegardlessOfAncestors() {
    for key in TRANSLATABLE_KEYS {
        let document = json!({
            "type": "Input.Date",
            "items": [ { "type": "Input.Toggle", "inner": { key: "human text" } } ]
        });
        assert_eq!(texts(&document), vec!["human text"], "key {} should be collected", key);
    }
}

#[test]
fn test_collect_withValueUnderNonFactsArray_shouldSkip() {
    let facts = json!({ "facts": [ { "title": "T", "value": "V" } ] });
    let others = json!({ "rows": [ { "title": "T", "value": "V" } ] });

    assert_eq!(texts(&facts), vec!["T", "V"]);
    assert_eq!(texts(&others), vec!["T"]);
}

#[test]
fn test_collect_withFactsNestedTwoArraysDeep_shouldSkipValue() {
    // Only direct elements of the `facts` array count as fact entries
    let document = json!({ "facts": [ [ { "value": "V" } ] ] });
    assert!(collect(&document).is_empty());
}

#[test]
fn test_collect_withFactsObject_shouldSkipValue() {
    let document = json!({ "facts": { "value": "V" } });
    assert!(collect(&document).is_empty());
}

#[test]
fn test_collect_withTopLevelValue_shouldSkipWithoutType() {
    assert!(collect(&json!({ "value": "V" })).is_empty());
    assert_eq!(texts(&json!({ "type": "Input.Text", "value": "V" })), vec!["V"]);
}

#[test]
fn test_collect_withNonStringType_shouldSkipValue() {
    let document = json!({ "facts": [ { "type": 7, "value": "V" } ] });
    assert!(collect(&document).is_empty());
}

#[test]
fn test_collect_withNullTypeInFacts_shouldSkipValue() {
    assert!(collect(&json!({ "facts": [ { "type": null, "value": "V" } ] })).is_empty());
    assert_eq!(texts(&json!({ "facts": [ { "value": "V" } ] })), vec!["V"]);
}

#[test]
fn test_collect_withInlinesInsideInlines_shouldOnlyTakeDirectStrings() {
    let document = json!({
        "inlines": [ "direct", [ "nested" ], { "note": "ignored", "text": "run" } ]
    });
    assert_eq!(texts(&document), vec!["direct", "run"]);
}

#[test]
fn test_collect_withRootArray_shouldWalkElements() {
    let document = json!([ { "type": "TextBlock", "text": "a" }, "loose", { "title": "b" } ]);
    assert_eq!(texts(&document), vec!["a", "b"]);
}

#[test]
fn test_collect_shouldRecordExactSlots() {
    let document = json!({
        "body": [ { "type": "RichTextBlock", "inlines": [ "run" ] } ],
        "facts": [ { "value": "v" } ]
    });
    let units = collect(&document);

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].location.slot(), &Slot::Index(0));
    assert_eq!(units[0].location.to_string(), "$.body[0].inlines[0]");
    assert_eq!(units[1].location.slot(), &Slot::Key("value".to_string()));
    assert_eq!(units[1].location.to_string(), "$.facts[0].value");
}

#[test]
fn test_collect_shouldResolveEveryLocationToItsText() {
    let card = load_card("hotel_card.json");
    for unit in collect(&card) {
        assert_eq!(unit.location.get(&card), Some(unit.original_text.as_str()));
    }
}

#[test]
fn test_collect_shouldNotMutateDocument() {
    let card = load_card("hotel_card.json");
    let before = card.clone();
    let _ = collect(&card);
    assert_eq!(card, before);
}
