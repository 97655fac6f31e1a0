//! Attribute keys recognised by the image component

use crate::view::Corner;

/// Which radius a border-radius attribute addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPosition {
    /// All four corners
    All,
    /// Top left corner
    TopLeft,
    /// Top right corner
    TopRight,
    /// Bottom left corner
    BottomLeft,
    /// Bottom right corner
    BottomRight,
}

impl BorderPosition {
    /// The corner this position addresses, `None` for all corners
    pub const fn corner(self) -> Option<Corner> {
        match self {
            BorderPosition::All => None,
            BorderPosition::TopLeft => Some(Corner::TopLeft),
            BorderPosition::TopRight => Some(Corner::TopRight),
            BorderPosition::BottomLeft => Some(Corner::BottomLeft),
            BorderPosition::BottomRight => Some(Corner::BottomRight),
        }
    }
}

/// Closed set of attribute keys handled by the component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// `src`
    Src,
    /// `resizeMode` (legacy spelling of `objectFit`)
    ResizeMode,
    /// `objectFit`
    ObjectFit,
    /// `altObjectFit`
    AltObjectFit,
    /// `filter`
    Filter,
    /// `alt`
    Alt,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `enablenightmode`: legacy night-mode opt-in/out
    EnableNightMode,
    /// `forcedark`: night-mode flag that locks out `enablenightmode`
    ForceDark,
    /// `autoplay`
    Autoplay,
    /// `borderRadius` and the four per-corner variants
    BorderRadius(BorderPosition),
}

impl AttributeKey {
    /// Every recognised key
    pub const ALL: [AttributeKey; 16] = [
        AttributeKey::Src,
        AttributeKey::ResizeMode,
        AttributeKey::ObjectFit,
        AttributeKey::AltObjectFit,
        AttributeKey::Filter,
        AttributeKey::Alt,
        AttributeKey::Width,
        AttributeKey::Height,
        AttributeKey::EnableNightMode,
        AttributeKey::ForceDark,
        AttributeKey::Autoplay,
        AttributeKey::BorderRadius(BorderPosition::All),
        AttributeKey::BorderRadius(BorderPosition::TopLeft),
        AttributeKey::BorderRadius(BorderPosition::TopRight),
        AttributeKey::BorderRadius(BorderPosition::BottomLeft),
        AttributeKey::BorderRadius(BorderPosition::BottomRight),
    ];

    /// Look up a key by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        let key = match name {
            "src" => Self::Src,
            "resizeMode" => Self::ResizeMode,
            "objectFit" => Self::ObjectFit,
            "altObjectFit" => Self::AltObjectFit,
            "filter" => Self::Filter,
            "alt" => Self::Alt,
            "width" => Self::Width,
            "height" => Self::Height,
            "enablenightmode" => Self::EnableNightMode,
            "forcedark" => Self::ForceDark,
            "autoplay" => Self::Autoplay,
            "borderRadius" => Self::BorderRadius(BorderPosition::All),
            "borderTopLeftRadius" => Self::BorderRadius(BorderPosition::TopLeft),
            "borderTopRightRadius" => Self::BorderRadius(BorderPosition::TopRight),
            "borderBottomLeftRadius" => Self::BorderRadius(BorderPosition::BottomLeft),
            "borderBottomRightRadius" => Self::BorderRadius(BorderPosition::BottomRight),
            _ => return None,
        };
        Some(key)
    }

    /// Wire name of the key
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::ResizeMode => "resizeMode",
            Self::ObjectFit => "objectFit",
            Self::AltObjectFit => "altObjectFit",
            Self::Filter => "filter",
            Self::Alt => "alt",
            Self::Width => "width",
            Self::Height => "height",
            Self::EnableNightMode => "enablenightmode",
            Self::ForceDark => "forcedark",
            Self::Autoplay => "autoplay",
            Self::BorderRadius(BorderPosition::All) => "borderRadius",
            Self::BorderRadius(BorderPosition::TopLeft) => "borderTopLeftRadius",
            Self::BorderRadius(BorderPosition::TopRight) => "borderTopRightRadius",
            Self::BorderRadius(BorderPosition::BottomLeft) => "borderBottomLeftRadius",
            Self::BorderRadius(BorderPosition::BottomRight) => "borderBottomRightRadius",
        }
    }
}
