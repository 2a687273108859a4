//! Story files for the campaign-management components.

pub mod campaign_details;
pub mod campaign_form;
pub mod campaign_list;

use crate::story::StoryFile;

/// Every story file, in sidebar order.
#[must_use]
pub fn catalog() -> Vec<StoryFile> {
    vec![
        campaign_form::story_file(),
        campaign_details::story_file(),
        campaign_list::story_file(),
    ]
}
