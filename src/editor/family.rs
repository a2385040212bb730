use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{FlatAd, GridAd, Post, RecordId};

/// How an updater reports success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AckPolicy {
    /// 2xx plus a `{"success": true}` body.
    SuccessFlag,
    /// Any 2xx.
    StatusOnly,
}

/// Static description of one record family: its wire shape, its endpoints
/// and the messages its editor shows.
pub trait RecordFamily {
    type Record: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + 'static;

    const NAME: &'static str;
    const FETCH_PATH: &'static str;
    const UPDATE_PATH: &'static str;
    /// Display bound applied after a fetch.
    const LIST_CAP: Option<usize> = None;
    const ACK: AckPolicy = AckPolicy::SuccessFlag;

    const FETCH_FAILURE: &'static str;
    const EMPTY_VALUE: &'static str;
    const SAVE_SUCCESS: &'static str;
    const SAVE_FAILURE: &'static str;

    fn id(record: &Self::Record) -> &RecordId;
    fn title(record: &Self::Record) -> &str;
    /// The one editable field.
    fn field(record: &Self::Record) -> &str;
    fn set_field(record: &mut Self::Record, value: &str);
    fn update_body(id: &RecordId, value: &str) -> serde_json::Value;
}

#[derive(Clone, Copy, Debug)]
pub struct FlatAds;

impl RecordFamily for FlatAds {
    type Record = FlatAd;

    const NAME: &'static str = "flat ads";
    const FETCH_PATH: &'static str = "ads/fetcher/fetch_flatads.php";
    const UPDATE_PATH: &'static str = "ads/updater/update_flatads.php";
    const LIST_CAP: Option<usize> = Some(8);

    const FETCH_FAILURE: &'static str = "Failed to fetch flat ads";
    const EMPTY_VALUE: &'static str = "Please enter a title";
    const SAVE_SUCCESS: &'static str = "Title updated successfully!";
    const SAVE_FAILURE: &'static str = "Failed to update title";

    fn id(record: &FlatAd) -> &RecordId {
        &record.id
    }

    fn title(record: &FlatAd) -> &str {
        &record.title
    }

    fn field(record: &FlatAd) -> &str {
        &record.title
    }

    fn set_field(record: &mut FlatAd, value: &str) {
        record.title = value.to_string();
    }

    fn update_body(id: &RecordId, value: &str) -> serde_json::Value {
        serde_json::json!({ "id": id.to_json(), "title": value })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GridAds;

impl RecordFamily for GridAds {
    type Record = GridAd;

    const NAME: &'static str = "grid ads";
    const FETCH_PATH: &'static str = "ads/fetcher/fetch_all_gridads.php";
    const UPDATE_PATH: &'static str = "ads/updater/update_gridads.php";

    const FETCH_FAILURE: &'static str = "Failed to fetch grid ads";
    const EMPTY_VALUE: &'static str = "Please enter a title";
    const SAVE_SUCCESS: &'static str = "Title updated successfully!";
    const SAVE_FAILURE: &'static str = "Failed to update title";

    fn id(record: &GridAd) -> &RecordId {
        &record.id
    }

    fn title(record: &GridAd) -> &str {
        &record.title
    }

    fn field(record: &GridAd) -> &str {
        &record.title
    }

    fn set_field(record: &mut GridAd, value: &str) {
        record.title = value.to_string();
    }

    fn update_body(id: &RecordId, value: &str) -> serde_json::Value {
        serde_json::json!({ "id": id.to_json(), "title": value })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Posts;

impl RecordFamily for Posts {
    type Record = Post;

    const NAME: &'static str = "posts";
    const FETCH_PATH: &'static str = "ads/fetcher/fetch_all.php";
    const UPDATE_PATH: &'static str = "ads/updater/update_image_url.php";
    const ACK: AckPolicy = AckPolicy::StatusOnly;

    const FETCH_FAILURE: &'static str = "Failed to fetch posts";
    const EMPTY_VALUE: &'static str = "Please enter an image URL";
    const SAVE_SUCCESS: &'static str = "Image URL updated successfully!";
    const SAVE_FAILURE: &'static str = "Failed to save changes";

    fn id(record: &Post) -> &RecordId {
        &record.id
    }

    fn title(record: &Post) -> &str {
        &record.title
    }

    fn field(record: &Post) -> &str {
        &record.image_url
    }

    fn set_field(record: &mut Post, value: &str) {
        record.image_url = value.to_string();
    }

    fn update_body(id: &RecordId, value: &str) -> serde_json::Value {
        serde_json::json!({ "id": id.to_json(), "image_url": value })
    }
}
