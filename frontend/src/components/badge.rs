use yew::prelude::*;

/// Known role and badge tags with their display glyphs. Tags the client
/// does not recognize are not rendered at all.
const BADGE_ICONS: &[(&str, &str, &str)] = &[
    ("fleet-commander", "⭐", "Fleet Commander"),
    ("trainee", "🎓", "FC trainee"),
    ("logistics", "🛟", "Logistics specialist"),
    ("vanguard", "🛡️", "Vanguard certified"),
    ("mentor", "🧭", "Mentor"),
    ("veteran", "🎖️", "Veteran pilot"),
];

pub fn badge_info(tag: &str) -> Option<(&'static str, &'static str)> {
    BADGE_ICONS
        .iter()
        .find(|(name, _, _)| *name == tag)
        .map(|&(_, glyph, title)| (glyph, title))
}

#[derive(Properties, PartialEq)]
pub struct BadgeIconProps {
    pub tag: AttrValue,
}

#[function_component(BadgeIcon)]
pub fn badge_icon(props: &BadgeIconProps) -> Html {
    match badge_info(&props.tag) {
        Some((glyph, title)) => html! {
            <span class="text-2xl" title={title}>{glyph}</span>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_have_icons() {
        assert!(badge_info("fleet-commander").is_some());
        assert_eq!(
            badge_info("logistics").map(|(_, title)| title),
            Some("Logistics specialist")
        );
    }

    #[test]
    fn unknown_tags_render_nothing() {
        assert!(badge_info("definitely-not-a-badge").is_none());
        // Matching is exact; tags are not case folded.
        assert!(badge_info("Logistics").is_none());
    }
}
