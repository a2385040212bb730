mod flat_ads;
mod grid_ads;
mod login;
mod thumbnails;
mod widgets;

pub(in crate::tui_shell) use self::flat_ads::FlatAdsView;
pub(in crate::tui_shell) use self::grid_ads::GridAdsView;
pub(in crate::tui_shell) use self::login::{LoginAction, LoginForm};
pub(in crate::tui_shell) use self::thumbnails::ThumbnailsView;
