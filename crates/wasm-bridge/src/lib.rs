//! WASM bridge for the conformal plot
//!
//! Exports the [`ConformalPlot`] handle JavaScript drives: it owns the
//! two canvas contexts, the current point set, and the probe state, and
//! exposes the mouse and button entry points. All async completions go
//! through `spawn_local` and re-check the probe ticket before touching
//! state.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use conformal_client::{fetch_mapped_point, request_points, FetchClient};
use conformal_shared::wire::{ComputeMode, DEFAULT_POINT_COUNT};
use conformal_shared::{ConformalError, ScreenPoint, VIEW_SIZE, Z_VIEW};

pub mod render;
pub mod state;

use state::App;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

/// Parse the user-supplied point count, falling back to the default
/// for anything non-numeric or zero. Out-of-range values are passed
/// through; the server normalizes them.
fn parse_count(text: &str) -> i64 {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n != 0)
        .unwrap_or(DEFAULT_POINT_COUNT)
}

fn parse_mode(mode: &str) -> Option<ComputeMode> {
    match mode {
        "single" => Some(ComputeMode::Single),
        "parallel" => Some(ComputeMode::Parallel),
        _ => None,
    }
}

#[wasm_bindgen]
pub struct ConformalPlot {
    app: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl ConformalPlot {
    /// Bind to the two canvases and the status element by id and draw
    /// the empty planes. The API is same-origin.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_z_id: &str,
        canvas_w_id: &str,
        status_id: &str,
    ) -> Result<ConformalPlot, JsValue> {
        init_logging();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let ctx_z = canvas_context(&document, canvas_z_id)?;
        let ctx_w = canvas_context(&document, canvas_w_id)?;
        let status = element_by_id(&document, status_id)?;

        let app = App::new(ctx_z, ctx_w, status, FetchClient::new(""));
        app.redraw();

        Ok(ConformalPlot {
            app: Rc::new(RefCell::new(app)),
        })
    }

    /// Cursor moved over the z-plane canvas. Updates the hover marker
    /// synchronously, then issues the probe query, superseding any
    /// query still in flight.
    pub fn on_mouse_move(&self, x: f64, y: f64) {
        let screen = ScreenPoint::new(x, y);
        let z = Z_VIEW.to_complex(screen);

        let (ticket, signal, fetch) = {
            let mut app = self.app.borrow_mut();
            let ticket = app.probe.begin(screen, z);
            app.redraw();
            let signal = match app.transport.supersede() {
                Ok(signal) => signal,
                Err(err) => {
                    log::error!("failed to arm probe abort handle: {err}");
                    return;
                }
            };
            (ticket, signal, app.fetch.clone())
        };

        let app_rc = Rc::clone(&self.app);
        spawn_local(async move {
            match fetch_mapped_point(&fetch, z, &signal).await {
                Ok(w) => {
                    let mut app = app_rc.borrow_mut();
                    if app.probe.complete(ticket, w) {
                        app.redraw();
                    }
                }
                // Superseded by a newer probe; nothing to do.
                Err(ConformalError::Cancelled) => {}
                Err(err) => {
                    app_rc.borrow().probe.fail(ticket);
                    log::error!("probe query failed: {err}");
                }
            }
        });
    }

    /// Cursor left the z-plane canvas: cancel any in-flight query,
    /// clear the hover overlay, redraw.
    pub fn on_mouse_leave(&self) {
        let mut app = self.app.borrow_mut();
        app.transport.cancel();
        app.probe.leave();
        app.redraw();
    }

    /// Run a bulk computation. `mode` is `"single"` or `"parallel"`;
    /// `count_text` is the raw input-field value. Rejected without any
    /// state change while a previous run is still in flight; on failure
    /// the prior point set is kept.
    pub fn run_compute(&self, mode: &str, count_text: &str) {
        let Some(mode) = parse_mode(mode) else {
            log::error!("unknown compute mode {mode:?}");
            return;
        };
        let count = parse_count(count_text);

        let fetch = {
            let mut app = self.app.borrow_mut();
            if app.in_flight {
                log::warn!("bulk fetch already in flight; ignoring request");
                return;
            }
            app.in_flight = true;
            app.set_status(&format!("Running {mode} with {count} points..."));
            app.fetch.clone()
        };

        let app_rc = Rc::clone(&self.app);
        spawn_local(async move {
            let result = request_points(&fetch, mode, count).await;
            let mut app = app_rc.borrow_mut();
            app.in_flight = false;
            match result {
                Ok(response) => {
                    app.points = response.points;
                    app.set_status(&format!(
                        "Mode: {} | Duration: {} ms | Points: {}",
                        response.mode,
                        response.duration_ms,
                        app.points.len()
                    ));
                    app.redraw();
                }
                Err(err) => {
                    log::error!("compute request failed: {err}");
                    app.set_status("Computation failed. Check console for details.");
                }
            }
        });
    }

    /// Whether a bulk fetch is running; the page uses this to disable
    /// the run buttons.
    pub fn is_busy(&self) -> bool {
        self.app.borrow().in_flight
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))
}

fn canvas_context(document: &Document, id: &str) -> Result<CanvasRenderingContext2d, JsValue> {
    let canvas: HtmlCanvasElement = element_by_id(document, id)?.dyn_into()?;
    canvas.set_width(VIEW_SIZE as u32);
    canvas.set_height(VIEW_SIZE as u32);
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("not a 2d context"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_fallback() {
        assert_eq!(parse_count("100"), 100);
        assert_eq!(parse_count(" 2500 "), 2500);
        assert_eq!(parse_count("abc"), DEFAULT_POINT_COUNT);
        assert_eq!(parse_count(""), DEFAULT_POINT_COUNT);
        assert_eq!(parse_count("0"), DEFAULT_POINT_COUNT);
        // Negative values pass through; the server replaces them
        // with its own default.
        assert_eq!(parse_count("-5"), -5);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("single"), Some(ComputeMode::Single));
        assert_eq!(parse_mode("parallel"), Some(ComputeMode::Parallel));
        assert_eq!(parse_mode("threaded"), None);
    }
}
