use serde_json::json;

use super::*;
use crate::editor::fake_api::FakeApi;
use crate::editor::{FlatAds, GridAds, Posts};

#[test]
fn load_caps_flat_ads_at_eight() {
    let list: Vec<_> = (1..=10).map(|i| json!({"id": i, "title": format!("t{}", i)})).collect();
    let api = FakeApi::default().serving::<FlatAds>(json!(list));

    let mut repo = Repository::<FlatAds>::new();
    assert!(repo.load(&api));
    assert_eq!(repo.records().len(), 8);
    assert_eq!(repo.records()[7].title, "t8");
    assert!(!repo.is_loading());
}

#[test]
fn grid_and_posts_are_not_capped() {
    let list: Vec<_> = (1..=10)
        .map(|i| json!({"id": i, "title": "x", "Group": "G"}))
        .collect();
    let api = FakeApi::default().serving::<GridAds>(json!(list));

    let mut repo = Repository::<GridAds>::new();
    repo.load(&api);
    assert_eq!(repo.records().len(), 10);
}

#[test]
fn duplicate_ids_keep_first_occurrence_before_cap() {
    let mut list = vec![json!({"id": 1, "title": "first"}), json!({"id": "1", "title": "dup"})];
    list.extend((2..=9).map(|i| json!({"id": i, "title": format!("t{}", i)})));
    let api = FakeApi::default().serving::<FlatAds>(json!(list));

    let mut repo = Repository::<FlatAds>::new();
    repo.load(&api);
    assert_eq!(repo.records().len(), 8);
    assert_eq!(repo.records()[0].title, "first");
    assert_eq!(repo.records()[7].title, "t8");
}

#[test]
fn failed_load_clears_list_and_sets_banner() {
    let ok = FakeApi::default().serving::<Posts>(json!([{"id": 1, "title": "a", "image_url": "u"}]));
    let mut repo = Repository::<Posts>::new();
    repo.load(&ok);
    assert_eq!(repo.records().len(), 1);

    let broken = FakeApi::default().failing_fetch();
    assert!(!repo.load(&broken));
    assert!(repo.records().is_empty());
    assert_eq!(repo.error(), Some("Failed to fetch posts"));
}

#[test]
fn begin_load_clears_previous_error() {
    let mut repo = Repository::<FlatAds>::new();
    repo.apply_loaded(Err(ConsoleError::transport("fetch", "boom")));
    assert!(repo.error().is_some());

    repo.begin_load();
    assert!(repo.is_loading());
    assert!(repo.error().is_none());
}

#[test]
fn confirmed_save_patches_only_the_matching_record() {
    let api = FakeApi::default().serving::<FlatAds>(json!([
        {"id": 1, "title": "A1"},
        {"id": 2, "title": "B1"}
    ]));
    let mut repo = Repository::<FlatAds>::new();
    repo.load(&api);

    let notice = repo.save(&api, &RecordId::numeric(2), "B2");
    assert_eq!(notice, Notice::Info("Title updated successfully!".to_string()));
    assert_eq!(repo.records()[0].title, "A1");
    assert_eq!(repo.records()[1].title, "B2");
    assert_eq!(api.last_update(), Some(json!({"id": 2, "title": "B2"})));
}

#[test]
fn rejected_save_leaves_list_untouched() {
    let api = FakeApi::default()
        .serving::<FlatAds>(json!([{"id": 1, "title": "A1"}]))
        .then_update(Err(ConsoleError::ServerRejected("dup".to_string())));
    let mut repo = Repository::<FlatAds>::new();
    repo.load(&api);

    let notice = repo.save(&api, &RecordId::numeric(1), "X");
    assert_eq!(notice, Notice::Error("dup".to_string()));
    assert_eq!(repo.records()[0].title, "A1");
}

#[test]
fn transport_failure_on_save_uses_family_fallback() {
    let api = FakeApi::default()
        .serving::<Posts>(json!([{"id": 1, "title": "a", "image_url": "u"}]))
        .then_update(Err(ConsoleError::transport("update posts", "reset")));
    let mut repo = Repository::<Posts>::new();
    repo.load(&api);

    let notice = repo.save(&api, &RecordId::numeric(1), "http://new");
    assert_eq!(notice, Notice::Error("Failed to save changes".to_string()));
    assert_eq!(repo.records()[0].image_url, "u");
}

#[test]
fn empty_value_sends_nothing() {
    let api = FakeApi::default().serving::<FlatAds>(json!([{"id": 1, "title": "A1"}]));
    let mut repo = Repository::<FlatAds>::new();
    repo.load(&api);

    let notice = repo.save(&api, &RecordId::numeric(1), "");
    assert_eq!(notice, Notice::Error("Please enter a title".to_string()));
    assert_eq!(api.update_count(), 0);
}

#[test]
fn save_for_a_vanished_record_still_reports_success() {
    let mut repo = Repository::<FlatAds>::new();
    repo.apply_loaded(Ok(Vec::new()));
    let notice = repo.apply_saved(&RecordId::numeric(5), "x", Ok(()));
    assert!(!notice.is_error());
    assert!(repo.records().is_empty());
}
