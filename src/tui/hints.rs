// Typing hints - "start typing" fades out, "press enter" fades in
//
// Timers are fire-and-forget: once scheduled they are never cancelled, and
// they fire against whatever hint state exists at that moment.

use std::time::{Duration, Instant};

/// Default delay between hint transitions
pub const ACTION_TIMEOUT: Duration = Duration::from_millis(1500);

/// Hints that can be shown under the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    StartTyping,
    PressEnter,
}

impl Hint {
    pub fn text(&self) -> &'static str {
        match self {
            Hint::StartTyping => "Začněte psát větu…",
            Hint::PressEnter => "Stiskněte Enter pro rozbor věty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintEvent {
    HideStartTyping,
    ShowPressEnter,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Instant,
    event: HintEvent,
}

/// Hint visibility plus pending timer callbacks
#[derive(Debug, Clone)]
pub struct Hints {
    delay: Duration,
    /// Whether the start-typing hint is still waiting for the first key
    start_typing_armed: bool,
    start_typing_visible: bool,
    press_enter_visible: bool,
    pending: Vec<Scheduled>,
}

impl Hints {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            start_typing_armed: true,
            start_typing_visible: true,
            press_enter_visible: false,
            pending: Vec::new(),
        }
    }

    /// Currently visible hint, if any
    pub fn visible(&self) -> Option<Hint> {
        if self.start_typing_visible {
            Some(Hint::StartTyping)
        } else if self.press_enter_visible {
            Some(Hint::PressEnter)
        } else {
            None
        }
    }

    /// A character was typed. The first one schedules the hint swap.
    pub fn key_typed(&mut self, now: Instant) {
        if !self.start_typing_armed {
            return;
        }
        self.start_typing_armed = false;
        self.schedule(now + self.delay, HintEvent::HideStartTyping);
    }

    /// Enter was pressed
    pub fn enter_pressed(&mut self) {
        self.press_enter_visible = false;
    }

    /// Fire every callback that is due. Returns true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        // Firing may schedule follow-ups, so loop until nothing is due
        while let Some(pos) = self.pending.iter().position(|s| s.due <= now) {
            let fired = self.pending.remove(pos);
            match fired.event {
                HintEvent::HideStartTyping => {
                    self.start_typing_visible = false;
                    self.schedule(fired.due + self.delay, HintEvent::ShowPressEnter);
                }
                HintEvent::ShowPressEnter => self.press_enter_visible = true,
            }
            tracing::trace!("Hint timer fired: {:?}", fired.event);
            changed = true;
        }
        changed
    }

    fn schedule(&mut self, due: Instant, event: HintEvent) {
        self.pending.push(Scheduled { due, event });
    }
}

impl Default for Hints {
    fn default() -> Self {
        Self::new(ACTION_TIMEOUT)
    }
}
