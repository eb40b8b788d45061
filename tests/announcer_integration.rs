mod common;

use common::Harness;
use hark::announce::{Announcer, Politeness};
use proptest::prelude::*;

#[test]
fn test_loading_profile_clears_after_one_second() {
    let harness = Harness::new();
    harness.announcer().announce_loading("profile");
    assert_eq!(harness.snapshot().polite, "Loading profile...");

    assert_eq!(harness.advance_ms(999).polite, "Loading profile...");
    assert_eq!(harness.advance_ms(1).polite, "");
}

#[test]
fn test_selection_then_error_clears_together() {
    let harness = Harness::new();
    let announcer = harness.announcer();

    announcer.announce_selection("Row 3");
    harness.advance_ms(500);
    announcer.announce_error("Network timeout");

    let snapshot = harness.snapshot();
    assert_eq!(snapshot.polite, "Row 3 selected");
    assert_eq!(snapshot.assertive, "Network timeout");

    // The first call's deadline passes without a clear.
    let snapshot = harness.advance_ms(500);
    assert_eq!(snapshot.polite, "Row 3 selected");
    assert_eq!(snapshot.assertive, "Network timeout");

    let snapshot = harness.advance_ms(499);
    assert!(!snapshot.is_empty());
    assert!(harness.advance_ms(1).is_empty());
}

#[test]
fn test_per_channel_policy_clears_each_region_on_its_own() {
    let harness = Harness::per_channel();
    let announcer = harness.announcer();

    announcer.announce_selection("Row 3");
    harness.advance_ms(500);
    announcer.announce_error("Network timeout");

    let snapshot = harness.advance_ms(500);
    assert_eq!(snapshot.polite, "");
    assert_eq!(snapshot.assertive, "Network timeout");

    assert!(harness.advance_ms(500).is_empty());
}

#[test]
fn test_repeated_message_clears_then_sets_again() {
    let harness = Harness::new();
    let announcer = harness.announcer();

    announcer.announce_action("Saved");
    announcer.announce_action("Saved");
    assert_eq!(harness.snapshot().writes, 2);

    assert_eq!(harness.advance_ms(1000).polite, "");
    announcer.announce_action("Saved");
    assert_eq!(harness.snapshot().polite, "Saved");
    assert_eq!(harness.snapshot().writes, 3);
}

#[test]
fn test_clones_share_one_session() {
    let harness = Harness::new();
    let list = harness.announcer();
    let toolbar = list.clone();

    list.announce_selection("Row 1");
    toolbar.announce_error("Save failed");

    let snapshot = harness.snapshot();
    assert_eq!(snapshot.polite, "Row 1 selected");
    assert_eq!(snapshot.assertive, "Save failed");
}

#[test]
fn test_announcer_outlives_provider_silently() {
    let harness = Harness::new();
    let announcer = harness.announcer();
    assert!(announcer.is_attached());

    drop(harness);
    assert!(!announcer.is_attached());
    announcer.announce("Still here", Politeness::Assertive);
    announcer.announce_loaded("Notes");
}

#[test]
fn test_unbound_announcer_is_a_no_op() {
    let announcer = Announcer::default();
    assert!(!announcer.is_attached());
    announcer.announce("Hello", Politeness::Polite);
    announcer.announce_error("Save failed");
}

#[test]
fn test_builders_match_templates() {
    let harness = Harness::new();
    let announcer = harness.announcer();

    announcer.announce_error("Save failed");
    assert_eq!(harness.snapshot().assertive, "Save failed");
    assert_eq!(harness.snapshot().polite, "");

    announcer.announce_navigation("Settings");
    assert_eq!(harness.snapshot().polite, "Navigated to Settings");
    announcer.announce_loaded("Profile");
    assert_eq!(harness.snapshot().polite, "Profile loaded");
    announcer.announce_success("Note saved");
    assert_eq!(harness.snapshot().polite, "Note saved");
}

fn politeness() -> impl Strategy<Value = Politeness> {
    prop_oneof![Just(Politeness::Polite), Just(Politeness::Assertive)]
}

proptest! {
    #[test]
    fn prop_latest_message_is_readable_immediately(
        calls in prop::collection::vec(("[a-zA-Z ]{1,24}", politeness(), 0_u64..900), 1..20),
    ) {
        let harness = Harness::new();
        let announcer = harness.announcer();
        for (message, politeness, gap) in &calls {
            harness.advance_ms(*gap);
            announcer.announce(message.as_str(), *politeness);
            let snapshot = harness.snapshot();
            prop_assert_eq!(snapshot.text(*politeness), message.as_str());
        }
        prop_assert!(harness.advance_ms(1000).is_empty());
    }
}
