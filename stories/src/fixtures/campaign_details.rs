//! `CampaignDetails`: a single campaign, loaded by id.

use serde_json::json;

use crate::component::{ComponentSpec, PropKind, PropSpec};
use crate::story::{Story, StoryFile, StoryMeta};

/// Campaign the `Default` story points at.
pub const SAMPLE_CAMPAIGN_ID: &str = "cmp_01HZX3K8Q2";

/// Prop contract of `CampaignDetails`.
pub static CAMPAIGN_DETAILS: ComponentSpec = ComponentSpec {
    name: "CampaignDetails",
    import_path: "@/components/campaigns/CampaignDetails",
    props: &[
        PropSpec::required("campaignId", PropKind::String),
        PropSpec::optional("showActions", PropKind::Bool),
        PropSpec::optional("onEdit", PropKind::Function),
    ],
};

/// `Campaigns/CampaignDetails` with a `Default` story.
#[must_use]
pub fn story_file() -> StoryFile {
    StoryFile {
        meta: StoryMeta {
            title: "Campaigns/CampaignDetails",
            component: &CAMPAIGN_DETAILS,
            parameters: json!({"layout": "fullscreen"}),
            args: json!(null),
        },
        stories: vec![Story::new(
            "Default",
            json!({"campaignId": SAMPLE_CAMPAIGN_ID}),
        )],
    }
}
