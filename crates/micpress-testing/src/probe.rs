//! Callback probe: a [`RecordCallbacks`] set whose invocations are
//! recorded for later assertions.

use micpress_foundation::{HapticFeedback, HapticFeedbackType, RecordCallbacks};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackKind {
    Click,
    StartRecording,
    FinishRecording,
    CancelRecording,
}

#[derive(Default)]
struct ProbeState {
    invocations: SmallVec<[CallbackKind; 8]>,
    reject_start: bool,
    haptic_pulses: u32,
}

/// Records every callback and haptic pulse a gesture produces.
///
/// The start callback can be configured to veto recording, mimicking a
/// caller without microphone permission.
#[derive(Clone, Default)]
pub struct RecordingProbe {
    state: Rc<RefCell<ProbeState>>,
}

impl RecordingProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe whose start callback rejects every recording request.
    pub fn rejecting_start() -> Self {
        let probe = Self::new();
        probe.set_reject_start(true);
        probe
    }

    pub fn set_reject_start(&self, reject: bool) {
        self.state.borrow_mut().reject_start = reject;
    }

    /// The callback set to hand to the widget under test.
    pub fn callbacks(&self) -> RecordCallbacks {
        let click = Rc::clone(&self.state);
        let start = Rc::clone(&self.state);
        let finish = Rc::clone(&self.state);
        let cancel = Rc::clone(&self.state);
        RecordCallbacks::new(
            move || click.borrow_mut().invocations.push(CallbackKind::Click),
            move || {
                let mut state = start.borrow_mut();
                state.invocations.push(CallbackKind::StartRecording);
                state.reject_start
            },
            move || {
                finish
                    .borrow_mut()
                    .invocations
                    .push(CallbackKind::FinishRecording)
            },
            move || {
                cancel
                    .borrow_mut()
                    .invocations
                    .push(CallbackKind::CancelRecording)
            },
        )
    }

    /// A haptics implementation that counts pulses into this probe.
    pub fn haptics(&self) -> Rc<dyn HapticFeedback> {
        Rc::new(ProbeHaptics {
            state: Rc::clone(&self.state),
        })
    }

    /// Every invocation so far, in order.
    pub fn invocations(&self) -> Vec<CallbackKind> {
        self.state.borrow().invocations.to_vec()
    }

    pub fn count(&self, kind: CallbackKind) -> usize {
        self.state
            .borrow()
            .invocations
            .iter()
            .filter(|k| **k == kind)
            .count()
    }

    pub fn haptic_pulses(&self) -> u32 {
        self.state.borrow().haptic_pulses
    }
}

struct ProbeHaptics {
    state: Rc<RefCell<ProbeState>>,
}

impl HapticFeedback for ProbeHaptics {
    fn perform(&self, _feedback: HapticFeedbackType) {
        self.state.borrow_mut().haptic_pulses += 1;
    }
}
