//! Leptos components of the Vite Ma Dose search results

use leptos::*;
use vmd_common::{BookingAction, LocationWithDistance, Theme, UiConfig};
use wasm_bindgen::prelude::*;

pub mod components;
pub mod context;
pub mod events;
mod logging;
pub mod tooltip;

pub use components::{AppointmentCard, AppointmentMetadata, MetadataWidth};
pub use context::{provide_ui_config, use_ui_config};
pub use logging::init_logging;

fn to_js_error(err: vmd_common::Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Classification tag chosen by the host, if any
pub fn parse_action_tag(tag: Option<&str>) -> vmd_common::Result<Option<BookingAction>> {
    tag.map(str::parse::<BookingAction>).transpose()
}

/// Properties of a card mounted by a non-Rust host page
#[wasm_bindgen]
pub struct AppointmentCardHandle {
    lieu: RwSignal<LocationWithDistance>,
    theme: RwSignal<Theme>,
    highlightable: RwSignal<bool>,
    action: RwSignal<Option<BookingAction>>,
}

#[wasm_bindgen]
impl AppointmentCardHandle {
    /// Replace the displayed location, given as JSON
    pub fn set_lieu(&self, lieu_json: &str) -> Result<(), JsValue> {
        let lieu = LocationWithDistance::from_json(lieu_json).map_err(to_js_error)?;
        self.lieu.set(lieu);
        Ok(())
    }

    /// `standard` or `chronodose`
    pub fn set_theme(&self, theme: &str) -> Result<(), JsValue> {
        let theme = theme.parse::<Theme>().map_err(to_js_error)?;
        self.theme.set(theme);
        Ok(())
    }

    pub fn set_highlightable(&self, highlightable: bool) {
        self.highlightable.set(highlightable);
    }

    /// Force a classification tag such as `actif-via-tel`; `undefined` lets
    /// the card classify the location itself
    pub fn set_action(&self, action: Option<String>) -> Result<(), JsValue> {
        let action = parse_action_tag(action.as_deref()).map_err(to_js_error)?;
        self.action.set(action);
        Ok(())
    }
}

/// Mount an appointment card under `parent`
///
/// All inputs are validated before anything is rendered, so a rejected call
/// leaves `parent` untouched. `config_json` may be empty and `action` may be
/// omitted.
#[wasm_bindgen]
pub fn mount_appointment_card(
    parent: web_sys::HtmlElement,
    lieu_json: &str,
    theme: &str,
    highlightable: bool,
    config_json: &str,
    action: Option<String>,
) -> Result<AppointmentCardHandle, JsValue> {
    console_error_panic_hook::set_once();

    let config = UiConfig::from_json(config_json).map_err(to_js_error)?;
    init_logging(&config);

    let lieu = LocationWithDistance::from_json(lieu_json).map_err(to_js_error)?;
    let theme = theme.parse::<Theme>().map_err(to_js_error)?;
    let action = parse_action_tag(action.as_deref()).map_err(to_js_error)?;

    let handle = AppointmentCardHandle {
        lieu: create_rw_signal(lieu),
        theme: create_rw_signal(theme),
        highlightable: create_rw_signal(highlightable),
        action: create_rw_signal(action),
    };

    let (lieu, theme, highlightable, action) =
        (handle.lieu, handle.theme, handle.highlightable, handle.action);
    mount_to(parent, move || {
        provide_ui_config(config);
        view! {
            <AppointmentCard lieu=lieu theme=theme highlightable=highlightable action=action/>
        }
    });

    tracing::info!("Appointment card mounted");
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tag_is_optional() {
        assert_eq!(parse_action_tag(None).unwrap(), None);
    }

    #[test]
    fn test_action_tag_parses_known_tags() {
        assert_eq!(
            parse_action_tag(Some("actif-via-tel")).unwrap(),
            Some(BookingAction::ActiveViaPhone)
        );
    }

    #[test]
    fn test_action_tag_rejects_unknown_tags() {
        let err = parse_action_tag(Some("actif-via-fax")).unwrap_err();
        assert!(matches!(err, vmd_common::Error::UnsupportedBookingAction(tag) if tag == "actif-via-fax"));
    }
}
