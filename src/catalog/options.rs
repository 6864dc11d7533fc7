use serde::{Deserialize, Serialize};

/// The fixed color palette the index understands.
///
/// Declaration order is the canonical wire order; selections are kept in
/// ordered sets so the payload is stable regardless of toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Blue,
    Beige,
    Purple,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Beige,
        Color::Purple,
        Color::Green,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Beige => "Beige",
            Color::Purple => "Purple",
            Color::Green => "Green",
        }
    }
}

/// Garment sizes carried by every product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    pub fn label(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
        }
    }
}

/// Sort order requested of the index. The grid never re-sorts locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::None, SortOrder::PriceAsc, SortOrder::PriceDesc];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "None",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
        }
    }
}

/// A pair of price bounds, serialized as `[min, max]`.
///
/// Ordering of the pair is NOT enforced by construction; the rendering
/// layer normalizes for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange(pub f64, pub f64);

impl PriceRange {
    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }

    /// Display-ordered bounds, regardless of how the pair was stored.
    pub fn normalized(&self) -> (f64, f64) {
        (self.0.min(self.1), self.0.max(self.1))
    }

    /// Clamp both bounds into `bounds`.
    pub fn clamp_to(&self, bounds: PriceRange) -> PriceRange {
        PriceRange(
            self.0.clamp(bounds.0, bounds.1),
            self.1.clamp(bounds.0, bounds.1),
        )
    }
}

/// The price facet: either one of the fixed presets or a user-adjusted
/// custom range. The distinction is a UI concern only; the wire payload
/// carries just the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceSelection {
    Preset(PriceRange),
    Custom(PriceRange),
}

impl PriceSelection {
    pub fn range(&self) -> PriceRange {
        match self {
            PriceSelection::Preset(range) | PriceSelection::Custom(range) => *range,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PriceSelection::Custom(_))
    }
}

impl Default for PriceSelection {
    fn default() -> Self {
        PriceSelection::Preset(PRICE_PRESETS[0].range)
    }
}

/// A labelled preset offered in the sidebar.
#[derive(Debug, Clone, Copy)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

pub const PRICE_PRESETS: [PricePreset; 3] = [
    PricePreset {
        label: "Any price",
        range: PriceRange(0.0, 100.0),
    },
    PricePreset {
        label: "Under $20",
        range: PriceRange(0.0, 20.0),
    },
    PricePreset {
        label: "Under $40",
        range: PriceRange(0.0, 40.0),
    },
];

/// Bounds the custom range is clamped into.
pub const CUSTOM_PRICE_BOUNDS: PriceRange = PriceRange(0.0, 100.0);

/// Keyboard adjustment step for the custom range.
pub const PRICE_STEP: f64 = 5.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_serialize_lowercase_in_palette_order() {
        let json = serde_json::to_string(&Color::ALL).unwrap();
        assert_eq!(json, r#"["white","blue","beige","purple","green"]"#);
    }

    #[test]
    fn sizes_serialize_as_bare_letters() {
        let json = serde_json::to_string(&Size::ALL).unwrap();
        assert_eq!(json, r#"["S","M","L"]"#);
    }

    #[test]
    fn sort_orders_use_kebab_case() {
        assert_eq!(serde_json::to_string(&SortOrder::None).unwrap(), r#""none""#);
        assert_eq!(
            serde_json::to_string(&SortOrder::PriceAsc).unwrap(),
            r#""price-asc""#
        );
        assert_eq!(
            serde_json::to_string(&SortOrder::PriceDesc).unwrap(),
            r#""price-desc""#
        );
    }

    #[test]
    fn price_range_serializes_as_pair() {
        let json = serde_json::to_string(&PriceRange(0.0, 40.0)).unwrap();
        assert_eq!(json, "[0.0,40.0]");
    }

    #[test]
    fn normalized_orders_an_inverted_pair() {
        let range = PriceRange(60.0, 20.0);
        assert_eq!(range.normalized(), (20.0, 60.0));
        // Construction keeps the raw pair untouched.
        assert_eq!(range.min(), 60.0);
        assert_eq!(range.max(), 20.0);
    }

    #[test]
    fn clamp_to_limits_both_bounds() {
        let range = PriceRange(-10.0, 250.0).clamp_to(CUSTOM_PRICE_BOUNDS);
        assert_eq!(range, PriceRange(0.0, 100.0));
    }
}
