//! Structural window tracking for scoped replacement

use crate::schema::BlockMarkers;

/// Position of a paragraph stream relative to a marked window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScopeState {
    /// No start marker seen yet
    #[default]
    Before,
    /// Between the start marker and the stop marker
    Inside,
    /// Stop marker seen; nothing further is in scope
    Done,
}

/// Walks a paragraph stream and reports which paragraphs lie inside the
/// window opened by `markers.start` and closed by `markers.stop_all`
///
/// Marker paragraphs themselves are never inside the window.
#[derive(Debug, Clone)]
pub struct BlockScope<'m> {
    markers: &'m BlockMarkers,
    state: ScopeState,
}

impl<'m> BlockScope<'m> {
    pub fn new(markers: &'m BlockMarkers) -> Self {
        Self {
            markers,
            state: ScopeState::Before,
        }
    }

    pub fn state(&self) -> ScopeState {
        self.state
    }

    /// Feed the next paragraph's text; returns whether it is in scope
    pub fn advance(&mut self, text: &str) -> bool {
        match self.state {
            ScopeState::Before => {
                if self.markers.is_start(text) {
                    self.state = ScopeState::Inside;
                }
                false
            }
            ScopeState::Inside => {
                if self.markers.is_stop(text) {
                    self.state = ScopeState::Done;
                    false
                } else {
                    !self.markers.is_start(text)
                }
            }
            ScopeState::Done => false,
        }
    }
}
