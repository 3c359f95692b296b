//! Static picker lists for the onboarding UI.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Material icon name.
    pub icon: &'static str,
    pub tool_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HobbyOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

const PROFESSIONS: &[ProfessionOption] = &[
    ProfessionOption { id: "product-manager", label: "Product Manager", icon: "inventory_2", tool_count: 24 },
    ProfessionOption { id: "developer", label: "Software Developer", icon: "code", tool_count: 32 },
    ProfessionOption { id: "designer", label: "UX Designer", icon: "palette", tool_count: 28 },
    ProfessionOption { id: "marketer", label: "Marketing Manager", icon: "campaign", tool_count: 26 },
    ProfessionOption { id: "writer", label: "Content Writer", icon: "edit_note", tool_count: 22 },
    ProfessionOption { id: "student", label: "Student", icon: "school", tool_count: 24 },
    ProfessionOption { id: "entrepreneur", label: "Entrepreneur", icon: "rocket_launch", tool_count: 30 },
    ProfessionOption { id: "data-scientist", label: "Data Scientist", icon: "analytics", tool_count: 18 },
    ProfessionOption { id: "sales", label: "Sales Representative", icon: "handshake", tool_count: 20 },
    ProfessionOption { id: "hr-manager", label: "HR Manager", icon: "groups", tool_count: 16 },
    ProfessionOption { id: "finance", label: "Financial Analyst", icon: "trending_up", tool_count: 12 },
    ProfessionOption { id: "customer-support", label: "Customer Support", icon: "support_agent", tool_count: 14 },
];

const HOBBIES: &[HobbyOption] = &[
    HobbyOption { id: "hiking", label: "Hiking", emoji: "🥾" },
    HobbyOption { id: "gaming", label: "Gaming", emoji: "🎮" },
    HobbyOption { id: "cooking", label: "Cooking", emoji: "🍳" },
    HobbyOption { id: "reading", label: "Reading", emoji: "📚" },
    HobbyOption { id: "fitness", label: "Fitness", emoji: "💪" },
    HobbyOption { id: "traveling", label: "Traveling", emoji: "✈️" },
    HobbyOption { id: "coding", label: "Coding", emoji: "💻" },
    HobbyOption { id: "photography", label: "Photography", emoji: "📸" },
    HobbyOption { id: "music", label: "Music", emoji: "🎵" },
    HobbyOption { id: "art", label: "Art & Design", emoji: "🎨" },
];

#[derive(Debug, Serialize)]
pub struct ProfessionsResponse {
    pub professions: &'static [ProfessionOption],
}

#[derive(Debug, Serialize)]
pub struct HobbiesResponse {
    pub hobbies: &'static [HobbyOption],
}

/// GET /api/professions
pub async fn handle_professions() -> Json<ProfessionsResponse> {
    Json(ProfessionsResponse {
        professions: PROFESSIONS,
    })
}

/// GET /api/hobbies
pub async fn handle_hobbies() -> Json<HobbiesResponse> {
    Json(HobbiesResponse { hobbies: HOBBIES })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::labels::profession_label;

    #[test]
    fn test_picker_labels_agree_with_composer_labels() {
        for option in PROFESSIONS {
            assert_eq!(profession_label(option.id), option.label, "{}", option.id);
        }
    }

    #[test]
    fn test_professions_serialize_camel_case() {
        let value = serde_json::to_value(&PROFESSIONS[0]).unwrap();
        assert_eq!(value["toolCount"], 24);
        assert_eq!(value["id"], "product-manager");
    }
}
