//! DOM-backed toolbar toggle.

use std::cell::RefCell;
use std::rc::Rc;

use tagbar_widgets::ToggleState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use super::events::{is_outside, mouse_event_to_click};
use super::{BrowserError, ClickListener};

const CLASS: &str = "tagbar-toggle";
const OPEN_CLASS: &str = "tagbar-toggle tagbar-toggle--open";

/// Checkbox-style toolbar button rendered as
/// `<button class="tagbar-toggle"><input type="checkbox"><span>label</span></button>`.
///
/// Clicking the button flips the checkbox and opens it; a click anywhere else
/// in the document closes it.
#[wasm_bindgen]
pub struct ToolbarToggle {
    label: String,
    state: Rc<RefCell<ToggleState>>,
    mounted: Option<Mounted>,
}

// Listeners are declared before `root` so they are removed first.
struct Mounted {
    _button_listener: ClickListener,
    _document_listener: ClickListener,
    root: Element,
}

#[wasm_bindgen]
impl ToolbarToggle {
    /// Create an unmounted toggle.
    #[wasm_bindgen(constructor)]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            state: Rc::new(RefCell::new(ToggleState::new())),
            mounted: None,
        }
    }

    /// Render into the element with id `container_id` and start listening.
    ///
    /// Mounting twice is a no-op.
    pub fn mount(&mut self, container_id: &str) -> Result<(), JsValue> {
        if self.mounted.is_some() {
            log::warn!("toolbar toggle {:?} is already mounted", self.label);
            return Ok(());
        }
        self.mounted = Some(self.render(container_id)?);
        log::debug!("toolbar toggle {:?} mounted in #{container_id}", self.label);
        Ok(())
    }

    /// Remove the element and both listeners. Returns `false` if not mounted.
    pub fn unmount(&mut self) -> bool {
        let Some(mounted) = self.mounted.take() else {
            return false;
        };
        let root = mounted.root.clone();
        drop(mounted);
        root.remove();
        log::debug!("toolbar toggle {:?} unmounted", self.label);
        true
    }

    /// Whether the embedded checkbox is checked.
    #[wasm_bindgen(getter)]
    pub fn checked(&self) -> bool {
        self.state.borrow().is_checked()
    }

    /// Whether the button is open.
    #[wasm_bindgen(getter)]
    pub fn open(&self) -> bool {
        self.state.borrow().is_open()
    }

    /// Whether the toggle is in the document.
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Label text.
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.label.clone()
    }
}

impl ToolbarToggle {
    /// The rendered `<button>`, if mounted.
    pub fn element(&self) -> Option<&Element> {
        self.mounted.as_ref().map(|mounted| &mounted.root)
    }

    fn render(&self, container_id: &str) -> Result<Mounted, BrowserError> {
        let document = super::document()?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| BrowserError::ElementNotFound(container_id.to_string()))?;

        let button = document.create_element("button")?;
        button.set_attribute("type", "button")?;

        let input: HtmlInputElement = document
            .create_element("input")?
            .dyn_into()
            .map_err(|_| BrowserError::Js("created <input> is not an HtmlInputElement".into()))?;
        input.set_type("checkbox");
        input.set_tab_index(-1);

        let text = document.create_element("span")?;
        text.set_text_content(Some(&self.label));

        button.append_child(&input)?;
        button.append_child(&text)?;
        sync(&button, &input, *self.state.borrow());

        let button_listener = {
            let state = Rc::clone(&self.state);
            let (target, input) = (button.clone(), input.clone());
            ClickListener::attach(&button, move |event| {
                event.stop_propagation();
                let click = mouse_event_to_click(&event);

                let mut state = state.borrow_mut();
                state.self_click();
                log::debug!(
                    "toolbar toggle clicked at {:?}: checked={} open={}",
                    click.position(),
                    state.is_checked(),
                    state.is_open()
                );
                sync(&target, &input, *state);
            })?
        };

        let document_listener = {
            let state = Rc::clone(&self.state);
            let (target, input) = (button.clone(), input.clone());
            ClickListener::on_document(move |event| {
                if !is_outside(&target, &event) {
                    return;
                }
                let mut state = state.borrow_mut();
                if state.outside_click() {
                    log::debug!("toolbar toggle closed by outside click");
                    sync(&target, &input, *state);
                }
            })?
        };

        container.append_child(&button)?;

        Ok(Mounted {
            _button_listener: button_listener,
            _document_listener: document_listener,
            root: button,
        })
    }
}

impl Drop for ToolbarToggle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn sync(button: &Element, input: &HtmlInputElement, state: ToggleState) {
    button.set_class_name(if state.is_open() { OPEN_CLASS } else { CLASS });
    let pressed = if state.is_checked() { "true" } else { "false" };
    if let Err(err) = button.set_attribute("aria-pressed", pressed) {
        log::warn!("failed to set aria-pressed: {err:?}");
    }
    input.set_checked(state.is_checked());
}
