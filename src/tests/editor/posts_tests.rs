use serde_json::json;

use super::*;
use crate::editor::fake_api::FakeApi;

fn api() -> FakeApi {
    FakeApi::default().serving::<Posts>(json!([
        {"id": 10, "title": "Summer Sale", "image_url": "http://img/1.png"},
        {"id": 11, "title": "Winter promo", "image_url": "http://img/2.png"},
        {"id": 12, "title": "Summit", "image_url": ""}
    ]))
}

#[test]
fn load_selects_first_post_and_seeds_url() {
    let mut ed = PostsEditor::new();
    ed.load(&api());
    assert_eq!(ed.selected_id(), Some(&RecordId::numeric(10)));
    assert_eq!(ed.url_draft(), "http://img/1.png");
}

#[test]
fn every_selection_reseeds_the_url_slot() {
    let mut ed = PostsEditor::new();
    ed.load(&api());
    ed.set_url_draft("typed");

    assert!(ed.select(&RecordId::numeric(10)));
    assert_eq!(ed.url_draft(), "http://img/1.png");

    assert!(ed.select(&RecordId::numeric(11)));
    assert_eq!(ed.url_draft(), "http://img/2.png");
}

#[test]
fn search_filters_titles_case_insensitively() {
    let mut ed = PostsEditor::new();
    ed.load(&api());

    ed.search.set_query("SUM");
    let titles: Vec<&str> = ed.search_results().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Summer Sale", "Summit"]);

    ed.search.set_query("autumn");
    assert!(ed.search_results().is_empty());
}

#[test]
fn save_updates_image_url_on_any_2xx() {
    let api = api();
    let mut ed = PostsEditor::new();
    ed.load(&api);
    ed.select(&RecordId::numeric(11));
    ed.set_url_draft("http://img/new.png");

    let notice = ed.save(&api);
    assert_eq!(notice.text(), "Image URL updated successfully!");
    assert_eq!(
        api.last_update(),
        Some(json!({"id": 11, "image_url": "http://img/new.png"}))
    );
    assert_eq!(ed.records()[1].image_url, "http://img/new.png");
}

#[test]
fn save_without_selection_or_url_sends_nothing() {
    let api = FakeApi::default().serving::<Posts>(json!([]));
    let mut ed = PostsEditor::new();
    ed.load(&api);
    assert_eq!(ed.save(&api), Notice::Error("Select a post first".to_string()));

    let api = self::api();
    ed.load(&api);
    ed.select(&RecordId::numeric(12));
    assert_eq!(
        ed.save(&api),
        Notice::Error("Please enter an image URL".to_string())
    );
    assert_eq!(api.update_count(), 0);
}

#[test]
fn failed_load_clears_selection() {
    let mut ed = PostsEditor::new();
    ed.load(&api());
    ed.load(&FakeApi::default().failing_fetch());
    assert!(ed.selected_id().is_none());
    assert_eq!(ed.url_draft(), "");
    assert_eq!(ed.repo().error(), Some("Failed to fetch posts"));
}
