//! Record shapes served by the content API, one per editor family.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Single flat advertisement slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatAd {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
}

/// Grid advertisement; members of a grid share a group label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAd {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "Group", alias = "group", default)]
    pub group: String,
}

/// Post with an editable thumbnail URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
}
