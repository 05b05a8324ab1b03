//! The five technology systems inside the hub, in page order, and the
//! scroll-spy fold that picks the active one from an observer batch.

/// One of the spec blocks in the deep-dive section. The `data-tech`
/// attribute on each block carries [`tag`](Technology::tag); the sticky
/// visual column renders [`image`](Technology::image) and
/// [`label`](Technology::label) for whichever block is in focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Technology {
    #[default]
    Motor,
    Filter,
    Light,
    Chip,
    Fragrance,
}

impl Technology {
    /// All technologies in the order their spec blocks appear on the page.
    pub const PAGE_ORDER: [Technology; 5] = [
        Technology::Motor,
        Technology::Filter,
        Technology::Light,
        Technology::Chip,
        Technology::Fragrance,
    ];

    /// Value of the block's `data-tech` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Technology::Motor => "motor",
            Technology::Filter => "filter",
            Technology::Light => "light",
            Technology::Chip => "chip",
            Technology::Fragrance => "fragrance",
        }
    }

    /// Parse a `data-tech` attribute. Unknown tags yield `None` and the
    /// caller skips the block rather than failing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "motor" => Some(Technology::Motor),
            "filter" => Some(Technology::Filter),
            "light" => Some(Technology::Light),
            "chip" => Some(Technology::Chip),
            "fragrance" => Some(Technology::Fragrance),
            _ => None,
        }
    }

    /// Asset path for the x-ray illustration. Fragrance has no dedicated
    /// artwork and reuses the motor view.
    pub fn image(self) -> &'static str {
        match self {
            Technology::Motor | Technology::Fragrance => "assets/motor.svg",
            Technology::Filter => "assets/filter.svg",
            Technology::Light => "assets/light.svg",
            Technology::Chip => "assets/chip.svg",
        }
    }

    /// Caption shown under the illustration.
    pub fn label(self) -> &'static str {
        match self {
            Technology::Motor => "SYSTEM: BLDC MOTOR",
            Technology::Filter => "SYSTEM: HEPA FILTRATION",
            Technology::Light => "SYSTEM: SMART LED",
            Technology::Chip => "SYSTEM: IOT SENSORS",
            Technology::Fragrance => "SYSTEM: DIFFUSION",
        }
    }
}

/// Fold one observer notification batch into the technology that should be
/// active, or `None` when nothing in the batch qualifies.
///
/// Each item is `(is_intersecting, data-tech tag)`. The last intersecting
/// entry with a known tag wins; when two blocks sit in the band at once
/// (fast scroll, short viewport) that is deliberately the unresolved
/// last-wins behavior the page has always had, not a priority rule.
pub fn active_from_batch<'a>(
    batch: impl IntoIterator<Item = (bool, Option<&'a str>)>,
) -> Option<Technology> {
    batch
        .into_iter()
        .filter(|(intersecting, _)| *intersecting)
        .filter_map(|(_, tag)| tag.and_then(Technology::from_tag))
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_motor() {
        assert_eq!(Technology::default(), Technology::Motor);
    }

    #[test]
    fn tags_round_trip() {
        for tech in Technology::PAGE_ORDER {
            assert_eq!(Technology::from_tag(tech.tag()), Some(tech));
        }
    }

    #[test]
    fn unknown_tag_is_skipped() {
        assert_eq!(Technology::from_tag("plasma"), None);
        assert_eq!(Technology::from_tag(""), None);
    }

    #[test]
    fn labels_match_systems() {
        assert_eq!(Technology::Filter.label(), "SYSTEM: HEPA FILTRATION");
        assert_eq!(Technology::Chip.label(), "SYSTEM: IOT SENSORS");
        assert_eq!(Technology::Motor.label(), "SYSTEM: BLDC MOTOR");
    }

    #[test]
    fn fragrance_reuses_motor_artwork() {
        assert_eq!(Technology::Fragrance.image(), Technology::Motor.image());
        assert_ne!(Technology::Filter.image(), Technology::Motor.image());
    }

    #[test]
    fn page_order_matches_markup() {
        let tags: Vec<&str> = Technology::PAGE_ORDER.iter().map(|t| t.tag()).collect();
        assert_eq!(tags, ["motor", "filter", "light", "chip", "fragrance"]);
    }

    #[test]
    fn empty_batch_keeps_current_state() {
        assert_eq!(active_from_batch([]), None);
    }

    #[test]
    fn single_intersecting_block_wins() {
        let batch = [
            (false, Some("motor")),
            (true, Some("filter")),
            (false, Some("light")),
        ];
        assert_eq!(active_from_batch(batch), Some(Technology::Filter));
    }

    #[test]
    fn simultaneous_blocks_resolve_last_wins() {
        let batch = [(true, Some("filter")), (true, Some("light"))];
        assert_eq!(active_from_batch(batch), Some(Technology::Light));
    }

    #[test]
    fn non_intersecting_and_unknown_tags_are_ignored() {
        let batch = [
            (false, Some("chip")),
            (true, Some("plasma")),
            (true, None),
        ];
        assert_eq!(active_from_batch(batch), None);
    }
}
