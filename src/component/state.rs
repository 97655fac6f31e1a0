//! Component state aggregate

use crate::attribute::BorderPosition;
use crate::component::layout::Dimension;
use crate::events::EventGate;
use crate::source::SourceRef;
use crate::view::{BorderRadius, Corner, ObjectFit};

/// Stored border radii: an optional uniform value plus per-corner overrides
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderRadii {
    uniform: Option<BorderRadius>,
    corners: [Option<BorderRadius>; 4],
}

impl BorderRadii {
    /// Store a validated radius
    ///
    /// A uniform write resets per-corner overrides, as a later shorthand would.
    pub fn set(&mut self, position: BorderPosition, radius: BorderRadius) {
        match position.corner() {
            None => {
                self.uniform = Some(radius);
                self.corners = [None; 4];
            }
            Some(corner) => self.corners[corner.index()] = Some(radius),
        }
    }

    /// The uniform radius, if one was written
    pub const fn uniform(&self) -> Option<BorderRadius> {
        self.uniform
    }

    /// Effective radius of `corner`: its override, else the uniform value
    pub fn corner(&self, corner: Corner) -> Option<BorderRadius> {
        self.corners[corner.index()].or(self.uniform)
    }

    /// Per-corner overrides, in storage order
    pub fn overrides(&self) -> impl Iterator<Item = (Corner, BorderRadius)> + '_ {
        Corner::ALL
            .into_iter()
            .filter_map(|corner| self.corners[corner.index()].map(|r| (corner, r)))
    }
}

/// Everything the component remembers between attribute writes
///
/// Lives exactly as long as the owning `ImageComponent`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageState {
    /// Resolved image to display
    pub source: Option<SourceRef>,
    /// Resolved placeholder shown before or instead of `source`
    pub placeholder: Option<SourceRef>,
    /// Scale mode for `source`
    pub object_fit: ObjectFit,
    /// Scale mode for `placeholder`
    pub alt_object_fit: ObjectFit,
    /// Blur radius in device pixels, never negative
    pub blur_radius: f32,
    /// Layout width
    pub width: Dimension,
    /// Layout height
    pub height: Dimension,
    /// Set by every `src` write, cleared when a layout-triggered retry fires
    pub src_pending_init: bool,
    /// Whether this instance participates in night-mode filtering
    pub night_mode_enabled: bool,
    /// Set once `forcedark` is written; locks out `enablenightmode`
    pub night_mode_explicitly_set: bool,
    /// Outcome listener flags
    pub listeners: EventGate,
    /// Whether animated images play on their own
    pub autoplay: bool,
    /// Validated border radii
    pub border_radii: BorderRadii,
}

impl ImageState {
    /// Fresh state; `night_mode_enabled` starts from configuration
    pub fn new(night_mode_enabled: bool) -> Self {
        Self {
            source: None,
            placeholder: None,
            object_fit: ObjectFit::Cover,
            alt_object_fit: ObjectFit::Cover,
            blur_radius: 0.0,
            width: Dimension::Undefined,
            height: Dimension::Undefined,
            src_pending_init: false,
            night_mode_enabled,
            night_mode_explicitly_set: false,
            listeners: EventGate::default(),
            autoplay: true,
            border_radii: BorderRadii::default(),
        }
    }
}

impl Default for ImageState {
    fn default() -> Self {
        Self::new(true)
    }
}
