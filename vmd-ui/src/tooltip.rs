//! Binding to the page-provided `tippy` tooltip library

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = tippy)]
    fn tippy(target: &Element, props: &JsValue) -> Result<JsValue, JsValue>;
}

/// A live tooltip instance, destroyed on drop
pub struct TooltipHandle {
    instance: JsValue,
    _content: Closure<dyn Fn(Element) -> String>,
}

/// Attach a tooltip whose text is read from the element's `title` attribute
/// each time it is shown
pub fn attach_title_tooltip(target: &Element) -> Result<TooltipHandle, JsValue> {
    let content = Closure::<dyn Fn(Element) -> String>::new(|el: Element| {
        el.get_attribute("title").unwrap_or_default()
    });

    let props = js_sys::Object::new();
    js_sys::Reflect::set(&props, &JsValue::from_str("content"), content.as_ref())?;

    let instance = tippy(target, &props)?;
    Ok(TooltipHandle {
        instance,
        _content: content,
    })
}

impl TooltipHandle {
    fn destroy(&self) -> Result<(), JsValue> {
        let destroy = js_sys::Reflect::get(&self.instance, &JsValue::from_str("destroy"))?;
        if let Some(destroy) = destroy.dyn_ref::<js_sys::Function>() {
            destroy.call0(&self.instance)?;
        }
        Ok(())
    }
}

impl Drop for TooltipHandle {
    fn drop(&mut self) {
        // The content closure is freed right after, tippy must not call it anymore
        if let Err(e) = self.destroy() {
            leptos::logging::warn!("Failed to destroy tooltip: {:?}", e);
        }
    }
}

/// Slot holding the tooltip of the current render
///
/// Rebinding always releases the previous instance first, so a label
/// re-created by a render never keeps a tooltip bound to a detached node.
pub struct TooltipBinding<H> {
    current: Option<H>,
}

impl<H> Default for TooltipBinding<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> TooltipBinding<H> {
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn rebind<E>(&mut self, attach: impl FnOnce() -> Result<H, E>) -> Result<(), E> {
        self.clear();
        self.current = Some(attach()?);
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountedHandle(Rc<Cell<u32>>);

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_rebind_releases_previous_tooltip() {
        let destroyed = Rc::new(Cell::new(0));
        let mut binding = TooltipBinding::default();

        binding.rebind(|| Ok::<_, ()>(CountedHandle(destroyed.clone()))).unwrap();
        assert!(binding.is_bound());
        assert_eq!(destroyed.get(), 0);

        binding.rebind(|| Ok::<_, ()>(CountedHandle(destroyed.clone()))).unwrap();
        assert!(binding.is_bound());
        assert_eq!(destroyed.get(), 1);

        binding.clear();
        assert!(!binding.is_bound());
        assert_eq!(destroyed.get(), 2);
    }

    #[test]
    fn test_failed_attach_leaves_nothing_bound() {
        let destroyed = Rc::new(Cell::new(0));
        let mut binding = TooltipBinding::default();
        binding.rebind(|| Ok::<_, &str>(CountedHandle(destroyed.clone()))).unwrap();

        let result = binding.rebind(|| Err::<CountedHandle, _>("tippy is not defined"));
        assert_eq!(result, Err("tippy is not defined"));
        assert!(!binding.is_bound());
        assert_eq!(destroyed.get(), 1);
    }
}
