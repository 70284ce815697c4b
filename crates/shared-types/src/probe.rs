//! Probe sequencing state machine
//!
//! Owns the current-hover state and the "is this result still wanted"
//! decision. Transport-level abort of a superseded request is advisory
//! and may race; the ticket check here is the authoritative guarantee
//! that only the response to the last-issued query ever lands in
//! [`HoverState::w`].
//!
//! The machine is single-owner and synchronous; completions delivered
//! out of order over the network are handled purely by comparing
//! tickets.

use crate::complex::Complex;
use crate::plane::ScreenPoint;

/// Cancellation token for one issued probe query. Monotonically
/// increasing; only the most recently issued ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTicket(u64);

/// The live probe under the cursor. `w` starts absent and is filled in
/// asynchronously by the current query's completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    pub screen: ScreenPoint,
    pub z: Complex,
    pub w: Option<Complex>,
}

/// Hover/probe controller. `Idle` is `hover() == None`; `Probing` holds
/// exactly one [`HoverState`].
#[derive(Debug, Default)]
pub struct ProbeMachine {
    hover: Option<HoverState>,
    seq: u64,
}

impl ProbeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor entered or moved: replace any hover with a fresh one
    /// (`w` absent) and supersede whatever query was in flight. Returns
    /// the ticket the new query's completion must present.
    pub fn begin(&mut self, screen: ScreenPoint, z: Complex) -> ProbeTicket {
        self.seq += 1;
        self.hover = Some(HoverState {
            screen,
            z,
            w: None,
        });
        ProbeTicket(self.seq)
    }

    /// Cursor left the canvas: clear the hover and invalidate any
    /// outstanding ticket so a late completion is dropped.
    pub fn leave(&mut self) {
        self.seq += 1;
        self.hover = None;
    }

    /// Apply a query completion. Returns true when the result was
    /// merged (caller redraws); a stale ticket or a cleared hover drops
    /// the result with no state change.
    pub fn complete(&mut self, ticket: ProbeTicket, w: Option<Complex>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping superseded probe result (ticket {})", ticket.0);
            return false;
        }
        match self.hover.as_mut() {
            Some(hover) => {
                hover.w = w;
                true
            }
            None => false,
        }
    }

    /// A failed query leaves state untouched; `w` stays absent and the
    /// next cursor move probes again.
    pub fn fail(&self, ticket: ProbeTicket) {
        if self.is_current(ticket) {
            log::warn!("probe query {} failed; keeping hover without w", ticket.0);
        }
    }

    pub fn is_current(&self, ticket: ProbeTicket) -> bool {
        ticket.0 == self.seq
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_at(re: f64, im: f64) -> (ScreenPoint, Complex) {
        (ScreenPoint::new(10.0, 20.0), Complex::new(re, im))
    }

    #[test]
    fn test_begin_sets_hover_without_w() {
        let mut m = ProbeMachine::new();
        let (screen, z) = probe_at(1.0, 2.0);
        m.begin(screen, z);
        let hover = m.hover().unwrap();
        assert_eq!(hover.z, z);
        assert_eq!(hover.w, None);
    }

    #[test]
    fn test_current_completion_merges() {
        let mut m = ProbeMachine::new();
        let (screen, z) = probe_at(1.0, 2.0);
        let t = m.begin(screen, z);
        let w = Complex::new(0.5, 0.5);
        assert!(m.complete(t, Some(w)));
        assert_eq!(m.hover().unwrap().w, Some(w));
    }

    #[test]
    fn test_superseded_response_is_dropped_regardless_of_arrival_order() {
        let mut m = ProbeMachine::new();
        let (s1, z1) = probe_at(1.0, 0.0);
        let (s2, z2) = probe_at(2.0, 0.0);
        let q1 = m.begin(s1, z1);
        let q2 = m.begin(s2, z2);

        let w2 = Complex::new(0.2, 0.2);
        let w1 = Complex::new(0.1, 0.1);

        // Q2's response lands first, then Q1's arrives late.
        assert!(m.complete(q2, Some(w2)));
        assert!(!m.complete(q1, Some(w1)));

        let hover = m.hover().unwrap();
        assert_eq!(hover.z, z2);
        assert_eq!(hover.w, Some(w2));
    }

    #[test]
    fn test_leave_during_flight_drops_late_completion() {
        let mut m = ProbeMachine::new();
        let (s, z) = probe_at(1.0, 1.5);
        let t = m.begin(s, z);
        m.leave();
        assert!(m.hover().is_none());
        assert!(!m.complete(t, Some(Complex::ZERO)));
        assert!(m.hover().is_none());
    }

    #[test]
    fn test_singular_completion_keeps_hover_with_absent_w() {
        let mut m = ProbeMachine::new();
        let (s, z) = probe_at(0.0, 1.0);
        let t = m.begin(s, z);
        // The mapping is undefined here; the hover stays, w stays None,
        // and the merge still counts as applied (the view redraws with
        // no target marker).
        assert!(m.complete(t, None));
        let hover = m.hover().unwrap();
        assert_eq!(hover.w, None);
    }

    #[test]
    fn test_failure_leaves_state_untouched() {
        let mut m = ProbeMachine::new();
        let (s, z) = probe_at(3.0, -1.0);
        let t = m.begin(s, z);
        m.fail(t);
        let hover = m.hover().unwrap();
        assert_eq!(hover.z, z);
        assert_eq!(hover.w, None);
        // A later move still works normally.
        let t2 = m.begin(s, z);
        assert!(m.complete(t2, Some(Complex::ONE)));
    }
}
