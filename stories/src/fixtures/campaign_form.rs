//! `CampaignForm`: create or edit a campaign.

use serde_json::json;

use crate::component::{ComponentSpec, PropKind, PropSpec};
use crate::story::{Story, StoryFile, StoryMeta};

/// Campaign status values.
pub const CAMPAIGN_STATUSES: &[&str] = &["draft", "active", "paused", "completed"];

const CHANNEL: PropKind = PropKind::OneOf(&["email", "social", "search", "display"]);

/// Fields of the campaign being edited. All optional; an empty form is valid.
pub const CAMPAIGN_FIELDS: &[PropSpec] = &[
    PropSpec::optional("name", PropKind::String),
    PropSpec::optional("description", PropKind::String),
    PropSpec::optional("status", PropKind::OneOf(CAMPAIGN_STATUSES)),
    PropSpec::optional("budget", PropKind::Number),
    PropSpec::optional("startDate", PropKind::Date),
    PropSpec::optional("endDate", PropKind::Date),
    PropSpec::optional("channels", PropKind::ArrayOf(&CHANNEL)),
];

/// Prop contract of `CampaignForm`.
pub static CAMPAIGN_FORM: ComponentSpec = ComponentSpec {
    name: "CampaignForm",
    import_path: "@/components/campaigns/CampaignForm",
    props: &[
        PropSpec::required("campaign", PropKind::Shape(CAMPAIGN_FIELDS)),
        PropSpec::required("mode", PropKind::OneOf(&["create", "edit"])),
        PropSpec::optional("submitting", PropKind::Bool),
        PropSpec::optional("onSubmit", PropKind::Function),
        PropSpec::optional("onCancel", PropKind::Function),
    ],
};

/// `Campaigns/CampaignForm` with `Empty` and `Prefilled` stories.
#[must_use]
pub fn story_file() -> StoryFile {
    StoryFile {
        meta: StoryMeta {
            title: "Campaigns/CampaignForm",
            component: &CAMPAIGN_FORM,
            parameters: json!({"layout": "padded"}),
            args: json!({
                "onSubmit": "submit",
                "onCancel": "cancel",
            }),
        },
        stories: vec![
            Story::new(
                "Empty",
                json!({
                    "campaign": {},
                    "mode": "create",
                }),
            ),
            Story::new(
                "Prefilled",
                json!({
                    "campaign": {
                        "name": "Spring Launch",
                        "description": "Announce the spring collection to returning customers.",
                        "status": "draft",
                        "budget": 12500,
                        "startDate": "2024-03-01",
                        "endDate": "2024-04-15",
                        "channels": ["email", "social"],
                    },
                    "mode": "edit",
                }),
            ),
        ],
    }
}
