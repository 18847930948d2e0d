#![cfg(target_arch = "wasm32")]
use cursor_core::{CursorConfig, CursorEffectController, CursorEnvironment};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-web starting");
    Ok(())
}

/// A mounted cursor effect. Construct with an options object (every field
/// optional); call `destroy()` or `free()` to unmount.
#[wasm_bindgen]
pub struct AnimatedCursor {
    controller: CursorEffectController,
    renderer: Rc<RefCell<render::SvgRenderer>>,
}

#[wasm_bindgen]
impl AnimatedCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<AnimatedCursor, JsValue> {
        mount(&options).map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&format!("{:#}", e))
        })
    }

    /// Unmount and remove the overlay. Safe to call more than once.
    pub fn destroy(&self) {
        self.controller.unmount();
        self.renderer.borrow().remove();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.controller.is_mounted()
    }
}

impl Drop for AnimatedCursor {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn parse_options(options: &JsValue) -> anyhow::Result<CursorConfig> {
    let config: CursorConfig = if options.is_undefined() || options.is_null() {
        CursorConfig::default()
    } else {
        #[allow(deprecated)]
        options
            .into_serde()
            .map_err(|e| anyhow::anyhow!("invalid cursor options: {}", e))?
    };
    match config.validate() {
        Ok(()) => Ok(config),
        Err(e) => {
            log::warn!("[cursor] {}; clamping into range", e);
            Ok(config.clamped())
        }
    }
}

fn mount(options: &JsValue) -> anyhow::Result<AnimatedCursor> {
    let config = parse_options(options)?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let renderer = Rc::new(RefCell::new(render::SvgRenderer::new(&document)?));
    let env = CursorEnvironment {
        input: Rc::new(events::WindowInput::new(window.clone(), document.clone())),
        elements: Rc::new(dom::DomDocument::new(document)?),
        scheduler: Rc::new(frame::RafScheduler::new(window)),
        renderer: renderer.clone(),
    };
    let controller = CursorEffectController::mount(config, env);
    Ok(AnimatedCursor {
        controller,
        renderer,
    })
}
