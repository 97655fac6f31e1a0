//! Night-mode evaluation

use crate::night_mode::provider::{HostEnvironment, ThemeProvider};
use crate::view::{ColorFilter, ImageView};
use tracing::debug;

/// Why the overlay was cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    /// This instance opted out of night mode
    Disabled,
    /// The system appearance is light
    LightMode,
    /// The container forbids forced-dark rendering
    ContainerForbids,
    /// The provider turned off the global night filter
    GlobalFilterDisabled,
}

/// Outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightModeDecision {
    /// The provider handled the request; no local filter call was made
    ProviderHandled,
    /// No view, or the platform cannot draw overlay filters
    Unsupported,
    /// The overlay was cleared
    Cleared(ClearReason),
    /// The overlay was applied
    Applied(ColorFilter),
}

/// Inputs of one evaluation that do not come from collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightModeInputs {
    /// System appearance at evaluation time
    pub is_dark_mode: bool,
    /// Whether this instance participates in night mode
    pub enabled: bool,
    /// Overlay color as `0xAARRGGBB`
    pub overlay_argb: u32,
}

/// Runs the night-mode priority chain against a view
pub struct NightModeController;

impl NightModeController {
    /// Evaluate and apply the overlay on `view`
    pub fn evaluate(
        view: Option<&mut dyn ImageView>,
        host: &dyn HostEnvironment,
        provider: Option<&dyn ThemeProvider>,
        inputs: NightModeInputs,
    ) -> NightModeDecision {
        let mut view = view;

        if let Some(provider) = provider {
            let handled = match view {
                Some(ref mut v) => provider.handle_image_force_dark(Some(&mut **v), inputs.enabled),
                None => provider.handle_image_force_dark(None, inputs.enabled),
            };
            if handled {
                debug!("Night mode handled by theme provider");
                return NightModeDecision::ProviderHandled;
            }
        }

        let Some(view) = view else {
            return NightModeDecision::Unsupported;
        };
        if !host.supports_overlay_filter() {
            return NightModeDecision::Unsupported;
        }

        let decision = Self::decide(host, provider, inputs);
        match decision {
            NightModeDecision::Applied(filter) => view.set_color_filter(filter),
            NightModeDecision::Cleared(_) => view.clear_color_filter(),
            NightModeDecision::ProviderHandled | NightModeDecision::Unsupported => {}
        }
        debug!("Night mode evaluated: {:?}", decision);
        decision
    }

    /// Steps 3-5 of the chain, once the provider declined and a capable view exists
    pub fn decide(
        host: &dyn HostEnvironment,
        provider: Option<&dyn ThemeProvider>,
        inputs: NightModeInputs,
    ) -> NightModeDecision {
        if !inputs.enabled {
            return NightModeDecision::Cleared(ClearReason::Disabled);
        }
        if !inputs.is_dark_mode {
            return NightModeDecision::Cleared(ClearReason::LightMode);
        }
        if !host.container_allows_force_dark() {
            return NightModeDecision::Cleared(ClearReason::ContainerForbids);
        }
        if provider.is_some_and(|p| p.is_global_night_mode_disabled()) {
            return NightModeDecision::Cleared(ClearReason::GlobalFilterDisabled);
        }
        NightModeDecision::Applied(ColorFilter::overlay(inputs.overlay_argb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeHost, FakeProvider, RecordingView, ViewCall};
    use crate::view::BlendMode;

    fn dark_inputs() -> NightModeInputs {
        NightModeInputs {
            is_dark_mode: true,
            enabled: true,
            overlay_argb: 0x8000_0000,
        }
    }

    #[test]
    fn test_applies_half_black_source_atop() {
        let host = FakeHost::dark();
        let provider = FakeProvider::default();
        let mut view = RecordingView::default();

        let decision =
            NightModeController::evaluate(Some(&mut view), &host, Some(&provider), dark_inputs());

        let expected = ColorFilter {
            argb: 0x8000_0000,
            mode: BlendMode::SrcAtop,
        };
        assert_eq!(decision, NightModeDecision::Applied(expected));
        assert_eq!(view.calls(), vec![ViewCall::SetColorFilter(expected)]);
    }

    #[test]
    fn test_provider_handled_short_circuits_everything() {
        let host = FakeHost::dark();
        let provider = FakeProvider {
            handles: true,
            ..FakeProvider::default()
        };
        let mut view = RecordingView::default();

        let decision =
            NightModeController::evaluate(Some(&mut view), &host, Some(&provider), dark_inputs());

        assert_eq!(decision, NightModeDecision::ProviderHandled);
        assert!(view.calls().is_empty());
        assert_eq!(provider.requests(), vec![true]);
    }

    #[test]
    fn test_provider_consulted_without_view() {
        let host = FakeHost::dark();
        let provider = FakeProvider::default();

        let decision = NightModeController::evaluate(None, &host, Some(&provider), dark_inputs());

        assert_eq!(decision, NightModeDecision::Unsupported);
        assert_eq!(provider.requests(), vec![true]);
    }

    #[test]
    fn test_unsupported_platform_makes_no_filter_call() {
        let host = FakeHost {
            overlay_supported: false,
            ..FakeHost::dark()
        };
        let mut view = RecordingView::default();

        let decision = NightModeController::evaluate(Some(&mut view), &host, None, dark_inputs());

        assert_eq!(decision, NightModeDecision::Unsupported);
        assert!(view.calls().is_empty());
    }

    #[test]
    fn test_clear_reasons_in_priority_order() {
        let provider = FakeProvider {
            global_disabled: true,
            ..FakeProvider::default()
        };
        let forbidding = FakeHost {
            container_allows: false,
            ..FakeHost::dark()
        };

        let disabled = NightModeInputs {
            enabled: false,
            is_dark_mode: false,
            ..dark_inputs()
        };
        assert_eq!(
            NightModeController::decide(&forbidding, Some(&provider), disabled),
            NightModeDecision::Cleared(ClearReason::Disabled)
        );

        let light = NightModeInputs {
            is_dark_mode: false,
            ..dark_inputs()
        };
        assert_eq!(
            NightModeController::decide(&forbidding, Some(&provider), light),
            NightModeDecision::Cleared(ClearReason::LightMode)
        );

        assert_eq!(
            NightModeController::decide(&forbidding, Some(&provider), dark_inputs()),
            NightModeDecision::Cleared(ClearReason::ContainerForbids)
        );

        assert_eq!(
            NightModeController::decide(&FakeHost::dark(), Some(&provider), dark_inputs()),
            NightModeDecision::Cleared(ClearReason::GlobalFilterDisabled)
        );
    }

    #[test]
    fn test_cleared_decision_clears_view() {
        let host = FakeHost::light();
        let mut view = RecordingView::default();
        let inputs = NightModeInputs {
            is_dark_mode: false,
            ..dark_inputs()
        };

        NightModeController::evaluate(Some(&mut view), &host, None, inputs);

        assert_eq!(view.calls(), vec![ViewCall::ClearColorFilter]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the overlay is applied only when every step of the chain
            /// allows it, and a disabled instance is always cleared
            #[test]
            fn overlay_requires_every_gate(
                enabled in any::<bool>(),
                is_dark_mode in any::<bool>(),
                container_allows in any::<bool>(),
                global_disabled in any::<bool>(),
            ) {
                let host = FakeHost {
                    container_allows,
                    ..FakeHost::dark()
                };
                let provider = FakeProvider {
                    global_disabled,
                    ..FakeProvider::default()
                };
                let inputs = NightModeInputs {
                    is_dark_mode,
                    enabled,
                    ..dark_inputs()
                };

                let decision = NightModeController::decide(&host, Some(&provider), inputs);

                let applies = enabled && is_dark_mode && container_allows && !global_disabled;
                prop_assert_eq!(matches!(decision, NightModeDecision::Applied(_)), applies);
                if !enabled {
                    prop_assert_eq!(decision, NightModeDecision::Cleared(ClearReason::Disabled));
                }
            }
        }
    }
}
