use serde_json::json;

use super::*;
use crate::editor::fake_api::FakeApi;

fn api() -> FakeApi {
    FakeApi::default().serving::<FlatAds>(json!([
        {"id": 1, "title": "A1"},
        {"id": 2, "title": "B1"},
        {"id": 3, "title": "C1"}
    ]))
}

fn loaded() -> FlatAdsEditor {
    let mut ed = FlatAdsEditor::new();
    ed.load(&api());
    ed
}

#[test]
fn load_selects_first_record_and_seeds_drafts() {
    let ed = loaded();
    assert_eq!(ed.selected_id(), Some(&RecordId::numeric(1)));
    assert_eq!(ed.draft(&RecordId::numeric(2)), "B1");
    assert_eq!(ed.drafts().get(&RecordId::numeric(3)), Some("C1"));
    assert_eq!(ed.drafts().get(&RecordId::numeric(4)), None);
}

#[test]
fn empty_list_selects_nothing() {
    let mut ed = FlatAdsEditor::new();
    ed.load(&FakeApi::default().serving::<FlatAds>(json!([])));
    assert!(ed.selected_id().is_none());

    let err = ed.prepare_selected_save().unwrap_err();
    assert_eq!(err.notice(""), "Please select an ad to manage.");
}

#[test]
fn editing_a_draft_leaves_the_list_alone() {
    let mut ed = loaded();
    let id = RecordId::numeric(2);
    ed.set_draft(&id, "edited");
    assert_eq!(ed.draft(&id), "edited");
    assert_eq!(ed.records()[1].title, "B1");
}

#[test]
fn switching_selection_keeps_unsaved_drafts() {
    let mut ed = loaded();
    let first = RecordId::numeric(1);
    ed.set_draft(&first, "typed");

    assert!(ed.select(&RecordId::numeric(3)));
    assert!(ed.select(&first));
    assert_eq!(ed.draft(&first), "typed");
}

#[test]
fn selecting_unknown_id_is_refused() {
    let mut ed = loaded();
    assert!(!ed.select(&RecordId::numeric(99)));
    assert_eq!(ed.selected_id(), Some(&RecordId::numeric(1)));
}

#[test]
fn choosing_from_picker_selects_and_closes() {
    let mut ed = loaded();
    ed.toggle_picker();
    assert!(ed.picker.is_open());
    let n = ed.records().len();
    ed.picker.move_down(n);

    assert!(ed.choose_from_picker());
    assert!(!ed.picker.is_open());
    assert_eq!(ed.selected_index(), Some(1));
}

#[test]
fn save_sends_draft_and_patches_on_success() {
    let api = api();
    let mut ed = FlatAdsEditor::new();
    ed.load(&api);
    let id = RecordId::numeric(2);
    ed.set_draft(&id, "B2");

    let notice = ed.save(&api, &id);
    assert_eq!(notice.text(), "Title updated successfully!");
    assert_eq!(api.last_update(), Some(json!({"id": 2, "title": "B2"})));
    assert_eq!(ed.records()[1].title, "B2");
    assert_eq!(ed.draft(&id), "B2");
}

#[test]
fn save_with_empty_draft_is_local_validation() {
    let api = api();
    let mut ed = FlatAdsEditor::new();
    ed.load(&api);
    let id = RecordId::numeric(1);
    ed.set_draft(&id, "");

    let notice = ed.save(&api, &id);
    assert_eq!(notice, Notice::Error("Please enter a title".to_string()));
    assert_eq!(api.update_count(), 0);
}

#[test]
fn failed_save_keeps_the_draft() {
    let api = api().then_update(Err(crate::error::ConsoleError::ServerRejected(
        "dup".to_string(),
    )));
    let mut ed = FlatAdsEditor::new();
    ed.load(&api);
    let id = RecordId::numeric(1);
    ed.set_draft(&id, "X");

    let notice = ed.save(&api, &id);
    assert_eq!(notice, Notice::Error("dup".to_string()));
    assert_eq!(ed.draft(&id), "X");
    assert_eq!(ed.records()[0].title, "A1");
}

#[test]
fn save_landing_after_a_newer_load_patches_the_new_list() {
    let mut ed = loaded();
    let id = RecordId::numeric(2);
    ed.set_draft(&id, "B2");
    let value = ed.prepare_save(&id).unwrap();

    ed.begin_load();
    ed.apply_loaded(Ok(vec![
        FlatAd {
            id: RecordId::numeric(2),
            title: "B-server".to_string(),
        },
        FlatAd {
            id: RecordId::numeric(4),
            title: "D1".to_string(),
        },
    ]));

    let notice = ed.apply_saved(&id, &value, Ok(()));
    assert_eq!(notice.text(), "Title updated successfully!");
    assert_eq!(ed.records().len(), 2);
    assert_eq!(ed.records()[0].title, "B2");
    assert_eq!(ed.records()[1].title, "D1");
}
