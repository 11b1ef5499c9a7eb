//! Emitter selection.
//!
//! Two policies share one entry point. Snapshot recomputation picks the
//! strongest emitter (greatest `max_range`) and never persists it. The link
//! command picks the nearest emitter and writes it into the console. Ties go
//! to the first candidate in scan order for both.

use shipscope_core::components::RadarConsole;

use super::scan::EmitterCandidate;
use crate::ids::net_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Greatest hardware range. Used for every snapshot.
    StrongestSignal,
    /// Smallest distance. Used by the explicit link command.
    Nearest,
}

/// Pick one candidate under `policy`.
pub fn pick(policy: SelectionPolicy, candidates: &[EmitterCandidate]) -> Option<EmitterCandidate> {
    let mut best: Option<EmitterCandidate> = None;
    for candidate in candidates {
        let better = match (&best, policy) {
            (None, _) => true,
            (Some(b), SelectionPolicy::StrongestSignal) => {
                candidate.emitter.max_range > b.emitter.max_range
            }
            (Some(b), SelectionPolicy::Nearest) => candidate.distance_sq < b.distance_sq,
        };
        if better {
            best = Some(*candidate);
        }
    }
    best
}

/// Which emitter backs a console for one recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmitterChoice {
    /// The console's sticky link, still valid.
    Linked(EmitterCandidate),
    /// Strongest available candidate; not written back.
    Automatic(EmitterCandidate),
    None,
}

impl EmitterChoice {
    pub fn candidate(&self) -> Option<&EmitterCandidate> {
        match self {
            EmitterChoice::Linked(c) | EmitterChoice::Automatic(c) => Some(c),
            EmitterChoice::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub choice: EmitterChoice,
    /// The console's link was stale and has been cleared.
    pub link_cleared: bool,
}

/// Resolve the emitter for `console` from the current candidates.
///
/// A link is valid only while its emitter is among `candidates`; a stale link
/// is cleared on `console` before falling back to automatic selection.
pub fn resolve(console: &mut RadarConsole, candidates: &[EmitterCandidate]) -> Resolution {
    let mut link_cleared = false;

    if let Some(linked) = console.linked_emitter {
        if let Some(candidate) = candidates.iter().find(|c| net_id(c.entity) == linked) {
            return Resolution {
                choice: EmitterChoice::Linked(*candidate),
                link_cleared,
            };
        }
        console.linked_emitter = None;
        link_cleared = true;
    }

    let choice = match pick(SelectionPolicy::StrongestSignal, candidates) {
        Some(candidate) => EmitterChoice::Automatic(candidate),
        None => EmitterChoice::None,
    };

    Resolution {
        choice,
        link_cleared,
    }
}
