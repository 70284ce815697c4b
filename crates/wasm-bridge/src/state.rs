//! Exclusively-owned application state
//!
//! One instance behind `Rc<RefCell<..>>`, mutated only from the UI
//! task. The point set is replaced wholesale on each bulk fetch; the
//! hover lives inside the probe machine.

use conformal_client::{FetchClient, ProbeTransport};
use conformal_shared::wire::SamplePoint;
use conformal_shared::ProbeMachine;
use web_sys::{CanvasRenderingContext2d, Element};

use crate::render;

pub struct App {
    pub ctx_z: CanvasRenderingContext2d,
    pub ctx_w: CanvasRenderingContext2d,
    pub status: Element,
    pub fetch: FetchClient,
    pub probe: ProbeMachine,
    pub transport: ProbeTransport,
    pub points: Vec<SamplePoint>,
    pub in_flight: bool,
}

impl App {
    pub fn new(
        ctx_z: CanvasRenderingContext2d,
        ctx_w: CanvasRenderingContext2d,
        status: Element,
        fetch: FetchClient,
    ) -> Self {
        Self {
            ctx_z,
            ctx_w,
            status,
            fetch,
            probe: ProbeMachine::new(),
            transport: ProbeTransport::new(),
            points: Vec::new(),
            in_flight: false,
        }
    }

    /// Redraws are synchronous and follow every state mutation; redraw
    /// cost is bounded so there is no batching.
    pub fn redraw(&self) {
        render::draw_all(&self.ctx_z, &self.ctx_w, &self.points, self.probe.hover());
    }

    pub fn set_status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }
}
