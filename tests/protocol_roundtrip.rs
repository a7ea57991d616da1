//! Round-Trip Tests
//!
//! External text decoded into a cell must encode back out unchanged, and
//! cells with nothing to say must contribute nothing to the entry list.

use attrkit::{AttrCodec, AttrValue, EntryList, StrAttr, MAX_NAME_LEN};

// ============================================================================
// Decode then Encode
// ============================================================================

#[test]
fn decoded_text_encodes_unchanged() {
    let mut cell = StrAttr::new();
    cell.decode(Some("workq@head-node")).unwrap();

    let entry = cell.encode("queue", None).unwrap().unwrap();
    assert_eq!(entry.name, "queue");
    assert_eq!(entry.value, "workq@head-node");
}

#[test]
fn absent_input_produces_no_entry() {
    let mut cell = StrAttr::new();
    cell.decode(None).unwrap();
    assert!(cell.encode("queue", None).unwrap().is_none());
}

#[test]
fn empty_input_produces_no_entry() {
    let mut cell = StrAttr::new();
    cell.decode(Some("")).unwrap();
    assert!(cell.encode("queue", None).unwrap().is_none());
}

#[test]
fn flags_snapshot_travels_with_entry() {
    let mut cell = StrAttr::new();
    cell.decode(Some("workq")).unwrap();

    let entry = cell.encode("queue", None).unwrap().unwrap();
    assert!(entry.flags.is_set());
    assert!(entry.flags.is_dirty());
    assert_eq!(entry.flags, cell.flags());
}

// ============================================================================
// Entry Lists
// ============================================================================

#[test]
fn list_collects_entries_in_order() {
    let mut list = EntryList::new();

    for (name, value) in [("queue", "workq"), ("Job_Name", "nightly"), ("owner", "alice")] {
        let mut cell = StrAttr::new();
        cell.decode(Some(value)).unwrap();
        assert!(cell.encode_into(name, None, &mut list).unwrap());
    }

    let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["queue", "Job_Name", "owner"]);
}

#[test]
fn unset_cells_are_skipped_not_errors() {
    let mut list = EntryList::new();

    let unset = StrAttr::new();
    assert!(!unset.encode_into("queue", None, &mut list).unwrap());

    let mut set = StrAttr::new();
    set.decode(Some("workq")).unwrap();
    assert!(set.encode_into("queue", None, &mut list).unwrap());

    assert_eq!(list.len(), 1);
}

// ============================================================================
// Bounded Decode
// ============================================================================

#[test]
fn name_at_limit_round_trips() {
    let text = "j".repeat(MAX_NAME_LEN);
    let mut cell = StrAttr::new();
    cell.decode_bounded(Some(&text), MAX_NAME_LEN).unwrap();

    let entry = cell.encode("Job_Name", None).unwrap().unwrap();
    assert_eq!(entry.value, text);
}

#[test]
fn name_over_limit_rejected_without_side_effect() {
    let text = "j".repeat(MAX_NAME_LEN + 1);
    let mut cell = StrAttr::new();
    cell.decode(Some("previous")).unwrap();

    let err = cell.decode_bounded(Some(&text), MAX_NAME_LEN).unwrap_err();
    assert!(err.is_bad_value());
    assert_eq!(cell.value(), Some("previous"));
}

// ============================================================================
// Entry Serialization
// ============================================================================

#[test]
fn entry_survives_json_round_trip() {
    let mut cell = StrAttr::new();
    cell.decode(Some("4gb")).unwrap();

    let entry = cell.encode("Resource_List", Some("mem")).unwrap().unwrap();
    let json = serde_json::to_string(&entry).unwrap();
    let restored: attrkit::AttrEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(entry, restored);
    assert_eq!(restored.flags, cell.flags());
}

// ============================================================================
// Through the Dispatch Surface
// ============================================================================

#[test]
fn dispatch_round_trip_matches_direct_calls() {
    let mut direct = StrAttr::new();
    direct.decode(Some("workq")).unwrap();

    let mut dispatched = AttrValue::new_str();
    dispatched.decode("queue", None, Some("workq")).unwrap();

    let mut direct_list = EntryList::new();
    direct.encode_into("queue", None, &mut direct_list).unwrap();
    let mut dispatched_list = EntryList::new();
    dispatched
        .encode_into("queue", None, &mut dispatched_list)
        .unwrap();

    assert_eq!(direct_list, dispatched_list);
}
