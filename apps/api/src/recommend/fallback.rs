//! Generic placeholder life tools for hobbies nothing in the catalog serves.

use crate::catalog::BackgroundTable;
use crate::toolkit::labels::humanize_slug;
use crate::toolkit::models::LifeTool;

/// Exactly two placeholders, "{Hobby} Companion" and "{Hobby} Tracker".
/// Backgrounds come from the hobby's entry, wrapping or falling back to the
/// default hobby as needed, so `background_image` is never empty.
pub fn generic_hobby_tools(hobby: &str, backgrounds: &BackgroundTable) -> Vec<LifeTool> {
    let title = humanize_slug(hobby);
    let title = if title.is_empty() {
        "Hobby".to_string()
    } else {
        title
    };

    vec![
        LifeTool {
            name: format!("{title} Companion"),
            description: format!("AI-powered app to enhance your {title} experience."),
            background_image: backgrounds.background_for(hobby, 0).to_string(),
            url: None,
        },
        LifeTool {
            name: format!("{title} Tracker"),
            description: format!("Track your progress and discover new {title} activities."),
            background_image: backgrounds.background_for(hobby, 1).to_string(),
            url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::backgrounds::DEFAULT_BACKGROUND;

    #[test]
    fn test_two_placeholders_with_title_cased_hobby() {
        let tools = generic_hobby_tools("unknown-abc", &BackgroundTable::builtin());
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "Unknown Abc Companion");
        assert_eq!(tools[1].name, "Unknown Abc Tracker");
        assert!(tools[0].description.contains("Unknown Abc"));
        assert!(tools[1].description.contains("Unknown Abc"));
    }

    #[test]
    fn test_placeholder_backgrounds_never_empty() {
        let tools = generic_hobby_tools("skateboarding", &BackgroundTable::builtin());
        assert!(tools.iter().all(|t| !t.background_image.is_empty()));
        assert_ne!(tools[0].background_image, tools[1].background_image);
    }

    #[test]
    fn test_single_image_entry_is_reused() {
        let table = BackgroundTable::new([(
            "chess".to_string(),
            vec!["https://img.example/chess.jpg".to_string()],
        )]);
        let tools = generic_hobby_tools("chess", &table);
        assert_eq!(tools[0].background_image, "https://img.example/chess.jpg");
        assert_eq!(tools[1].background_image, "https://img.example/chess.jpg");
    }

    #[test]
    fn test_no_backgrounds_at_all_uses_default_image() {
        let tools = generic_hobby_tools("chess", &BackgroundTable::default());
        assert!(tools.iter().all(|t| t.background_image == DEFAULT_BACKGROUND));
    }

    #[test]
    fn test_empty_hobby_still_produces_names() {
        let tools = generic_hobby_tools("", &BackgroundTable::builtin());
        assert_eq!(tools[0].name, "Hobby Companion");
    }
}
