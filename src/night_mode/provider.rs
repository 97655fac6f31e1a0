//! Host capabilities consulted during night-mode evaluation

use crate::view::ImageView;

/// Privileged theming provider supplied by the host platform
///
/// Injected at construction instead of looked up from a global registry.
pub trait ThemeProvider: Send + Sync {
    /// Give the provider first refusal; returning `true` means it handled the view
    /// and no local overlay logic runs
    fn handle_image_force_dark(&self, view: Option<&mut dyn ImageView>, enabled: bool) -> bool;

    /// Whether the platform turned off its default global night filter
    fn is_global_night_mode_disabled(&self) -> bool;
}

/// Facts about the host the component is embedded in
pub trait HostEnvironment: Send + Sync {
    /// Whether the system UI is currently dark
    fn is_dark_mode(&self) -> bool;

    /// Whether views on this platform support overlay color filters
    fn supports_overlay_filter(&self) -> bool;

    /// Whether the parent container currently permits forced-dark rendering
    fn container_allows_force_dark(&self) -> bool;
}
