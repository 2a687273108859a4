//! `CampaignList`: campaign summaries in a table.

use serde_json::json;

use crate::component::{ComponentSpec, PropKind, PropSpec};
use crate::fixtures::campaign_form::CAMPAIGN_STATUSES;
use crate::story::{Story, StoryFile, StoryMeta};

const SUMMARY_FIELDS: &[PropSpec] = &[
    PropSpec::required("id", PropKind::String),
    PropSpec::required("name", PropKind::String),
    PropSpec::required("status", PropKind::OneOf(CAMPAIGN_STATUSES)),
    PropSpec::optional("budget", PropKind::Number),
    PropSpec::optional("startDate", PropKind::Date),
    PropSpec::optional("endDate", PropKind::Date),
];

const SUMMARY: PropKind = PropKind::Shape(SUMMARY_FIELDS);

/// Prop contract of `CampaignList`.
pub static CAMPAIGN_LIST: ComponentSpec = ComponentSpec {
    name: "CampaignList",
    import_path: "@/components/campaigns/CampaignList",
    props: &[
        PropSpec::required("campaigns", PropKind::ArrayOf(&SUMMARY)),
        PropSpec::optional("loading", PropKind::Bool),
        PropSpec::optional("emptyMessage", PropKind::String),
        PropSpec::optional("onSelect", PropKind::Function),
    ],
};

/// `Campaigns/CampaignList` with `Empty`, `WithCampaigns` and `Loading`.
#[must_use]
pub fn story_file() -> StoryFile {
    StoryFile {
        meta: StoryMeta {
            title: "Campaigns/CampaignList",
            component: &CAMPAIGN_LIST,
            parameters: json!({"layout": "padded"}),
            args: json!({"onSelect": "select"}),
        },
        stories: vec![
            Story::new(
                "Empty",
                json!({
                    "campaigns": [],
                    "emptyMessage": "No campaigns yet",
                }),
            ),
            Story::new(
                "WithCampaigns",
                json!({
                    "campaigns": [
                        {
                            "id": "cmp_01HZX3K8Q2",
                            "name": "Spring Launch",
                            "status": "active",
                            "budget": 12500,
                            "startDate": "2024-03-01",
                            "endDate": "2024-04-15",
                        },
                        {
                            "id": "cmp_01HZX3M1V7",
                            "name": "Summer Clearance",
                            "status": "draft",
                            "budget": 8000,
                        },
                        {
                            "id": "cmp_01HZX3P9D4",
                            "name": "Holiday Newsletter",
                            "status": "completed",
                            "startDate": "2023-12-01",
                            "endDate": "2023-12-31",
                        },
                    ],
                }),
            ),
            Story::new(
                "Loading",
                json!({
                    "campaigns": [],
                    "loading": true,
                }),
            ),
        ],
    }
}
