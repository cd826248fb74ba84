use crate::config::RevealMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// A deferred show is scheduled but has not fired yet.
    Pending,
    Shown,
}

/// Effect the DOM layer must carry out after a visibility report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    None,
    /// Add the shown class after `delay_ms` (then call `fire`).
    Schedule { index: usize, delay_ms: u32 },
    /// Drop the pending timer for `index`.
    Cancel { index: usize },
    /// Remove the shown class from `index`.
    Hide { index: usize },
}

/// Delay attribute value in milliseconds; missing or unparsable means 0.
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

/// Tracks the reveal state of a fixed set of elements.
#[derive(Debug, Clone)]
pub struct RevealController {
    mode: RevealMode,
    delays: Vec<u32>,
    states: Vec<RevealState>,
}

impl RevealController {
    pub fn new(mode: RevealMode, delays: Vec<u32>) -> Self {
        let states = vec![RevealState::Hidden; delays.len()];
        Self {
            mode,
            delays,
            states,
        }
    }

    #[cfg(test)]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Report whether element `index` currently satisfies the visibility predicate.
    pub fn observe(&mut self, index: usize, visible: bool) -> RevealAction {
        let Some(state) = self.states.get_mut(index) else {
            return RevealAction::None;
        };
        match (*state, visible, self.mode) {
            (RevealState::Hidden, true, _) => {
                *state = RevealState::Pending;
                RevealAction::Schedule {
                    index,
                    delay_ms: self.delays[index],
                }
            }
            (RevealState::Pending, false, RevealMode::Toggle) => {
                *state = RevealState::Hidden;
                RevealAction::Cancel { index }
            }
            (RevealState::Shown, false, RevealMode::Toggle) => {
                *state = RevealState::Hidden;
                RevealAction::Hide { index }
            }
            _ => RevealAction::None,
        }
    }

    /// A scheduled timer fired. Returns true when the shown class must be added.
    pub fn fire(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Shown;
                true
            }
            _ => false,
        }
    }

    /// True once every element is shown and nothing can change any more.
    pub fn is_settled(&self) -> bool {
        self.mode == RevealMode::Once && self.states.iter().all(|s| *s == RevealState::Shown)
    }
}
