//! Custom DOM events fired by the appointment card

use vmd_common::{CardEvent, LocationClickContext, LocationWithDistance};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, EventTarget};

/// JSON body of the event `detail`: `{ "lieu": <record as received> }`
pub fn event_detail_json(lieu: &LocationWithDistance) -> serde_json::Result<String> {
    serde_json::to_string(&LocationClickContext::new(lieu)?)
}

/// Dispatch `event` from `target` as a bubbling, composed `CustomEvent`
pub fn dispatch_card_event(
    target: &EventTarget,
    event: CardEvent,
    lieu: &LocationWithDistance,
) -> Result<(), JsValue> {
    let detail = event_detail_json(lieu).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let detail = js_sys::JSON::parse(&detail)?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);

    let custom_event = CustomEvent::new_with_event_init_dict(event.name(), &init)?;
    target.dispatch_event(&custom_event)?;
    Ok(())
}
