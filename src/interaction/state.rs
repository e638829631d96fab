//! The calendar grid's pointer state machine.
//!
//! [`GridInteraction`] owns the drag state for one grid: idle, selecting a
//! rectangle of cells, or resizing a shift edge. Only one drag exists at a
//! time. Entering a drag emits [`InteractionEvent::CaptureStarted`] and
//! leaving it emits [`InteractionEvent::CaptureReleased`]; the host attaches
//! and detaches its document-level pointer listeners on exactly those two
//! events, so listeners live no longer than the drag.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::resize::{CellSize, PointerPosition, ResizeDrag, ResizeEdge, ShiftBounds};
use super::selection::{Cell, SelectionRect};

/// Where the grid is in a pointer interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    /// No drag in progress.
    Idle,
    /// Dragging out a cell rectangle.
    Selecting {
        /// Cell the drag started on.
        anchor: Cell,
        /// Cell currently under the pointer.
        current: Cell,
    },
    /// Dragging a shift edge.
    Resizing(ResizeDrag),
}

/// What a transition tells the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InteractionEvent {
    /// A drag began; attach pointer listeners.
    CaptureStarted,
    /// The drag ended or was cancelled; detach pointer listeners.
    CaptureReleased,
    /// The highlighted rectangle changed.
    SelectionChanged {
        /// The new rectangle.
        rect: SelectionRect,
    },
    /// The pointer was released over a selection.
    SelectionCommitted {
        /// The final rectangle.
        rect: SelectionRect,
    },
    /// A resize produced a new block; write it back immediately.
    BoundsUpdated {
        /// The shift being resized.
        shift_id: String,
        /// Its new block.
        bounds: ShiftBounds,
    },
    /// A resize ended.
    ResizeFinished {
        /// The shift that was resized.
        shift_id: String,
        /// Its final block.
        bounds: ShiftBounds,
    },
    /// A shift was double-clicked and should be removed.
    ShiftRemoved {
        /// The shift to remove.
        shift_id: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Click {
    shift_id: String,
    at: Duration,
}

/// Pointer interaction state for one calendar grid.
///
/// Timestamps are offsets from any fixed origin the host chooses (for a
/// browser, the event time stamp).
///
/// # Example
///
/// ```
/// use shift_roster::interaction::{Cell, GridInteraction, InteractionEvent};
/// use std::time::Duration;
///
/// let mut grid = GridInteraction::new(Duration::from_millis(400));
/// grid.pointer_down_cell(Cell::new(1, 3));
/// grid.pointer_enter_cell(Cell::new(0, 5));
/// let events = grid.pointer_up();
/// assert!(matches!(events[0], InteractionEvent::SelectionCommitted { .. }));
/// assert_eq!(events[1], InteractionEvent::CaptureReleased);
/// assert!(!grid.is_dragging());
/// ```
#[derive(Debug, Clone)]
pub struct GridInteraction {
    state: InteractionState,
    double_click_window: Duration,
    last_click: Option<Click>,
}

impl GridInteraction {
    /// Creates an idle grid with the given double-click window.
    pub fn new(double_click_window: Duration) -> Self {
        Self {
            state: InteractionState::Idle,
            double_click_window,
            last_click: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Whether a selection or resize drag is in progress.
    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, InteractionState::Idle)
    }

    /// The live selection rectangle, if selecting.
    pub fn selection(&self) -> Option<SelectionRect> {
        match self.state {
            InteractionState::Selecting { anchor, current } => {
                Some(SelectionRect::from_corners(anchor, current))
            }
            _ => None,
        }
    }

    /// Pointer pressed on an empty cell: starts a selection.
    ///
    /// Ignored while another drag is active.
    pub fn pointer_down_cell(&mut self, cell: Cell) -> Vec<InteractionEvent> {
        if self.is_dragging() {
            tracing::debug!(?cell, "Pointer down ignored during active drag");
            return Vec::new();
        }

        self.state = InteractionState::Selecting {
            anchor: cell,
            current: cell,
        };
        vec![
            InteractionEvent::CaptureStarted,
            InteractionEvent::SelectionChanged {
                rect: SelectionRect::from_corners(cell, cell),
            },
        ]
    }

    /// Pointer moved over a cell: extends the selection rectangle.
    pub fn pointer_enter_cell(&mut self, cell: Cell) -> Vec<InteractionEvent> {
        let InteractionState::Selecting { anchor, current } = &mut self.state else {
            return Vec::new();
        };

        let before = SelectionRect::from_corners(*anchor, *current);
        *current = cell;
        let after = SelectionRect::from_corners(*anchor, cell);

        if before == after {
            Vec::new()
        } else {
            vec![InteractionEvent::SelectionChanged { rect: after }]
        }
    }

    /// Edge handle grabbed: starts a resize.
    ///
    /// Ignored while another drag is active, and for empty or off-grid
    /// blocks. An edge grab also breaks any pending double click.
    pub fn begin_resize(
        &mut self,
        shift_id: &str,
        edge: ResizeEdge,
        bounds: ShiftBounds,
        origin: PointerPosition,
        cell: CellSize,
    ) -> Vec<InteractionEvent> {
        self.last_click = None;
        if self.is_dragging() {
            tracing::debug!(shift_id, "Resize ignored during active drag");
            return Vec::new();
        }
        if !bounds.is_valid() {
            tracing::debug!(shift_id, ?bounds, "Resize ignored for invalid block");
            return Vec::new();
        }

        tracing::debug!(shift_id, ?edge, "Resize started");
        self.state =
            InteractionState::Resizing(ResizeDrag::new(shift_id, edge, bounds, origin, cell));
        vec![InteractionEvent::CaptureStarted]
    }

    /// Pointer moved during a resize: reports the new block if it changed.
    pub fn pointer_move(&mut self, position: PointerPosition) -> Vec<InteractionEvent> {
        let InteractionState::Resizing(drag) = &mut self.state else {
            return Vec::new();
        };

        match drag.update(position) {
            Some(bounds) => vec![InteractionEvent::BoundsUpdated {
                shift_id: drag.shift_id.clone(),
                bounds,
            }],
            None => Vec::new(),
        }
    }

    /// Pointer released: commits the selection or finishes the resize.
    pub fn pointer_up(&mut self) -> Vec<InteractionEvent> {
        match std::mem::replace(&mut self.state, InteractionState::Idle) {
            InteractionState::Idle => Vec::new(),
            InteractionState::Selecting { anchor, current } => vec![
                InteractionEvent::SelectionCommitted {
                    rect: SelectionRect::from_corners(anchor, current),
                },
                InteractionEvent::CaptureReleased,
            ],
            InteractionState::Resizing(drag) => vec![
                InteractionEvent::ResizeFinished {
                    shift_id: drag.shift_id,
                    bounds: drag.current,
                },
                InteractionEvent::CaptureReleased,
            ],
        }
    }

    /// A completed click (down then up) on a shift body.
    ///
    /// The second click on the same shift within the double-click window
    /// removes it.
    pub fn click_shift(&mut self, shift_id: &str, at: Duration) -> Vec<InteractionEvent> {
        if self.is_dragging() {
            return Vec::new();
        }

        let is_double = self.last_click.as_ref().is_some_and(|previous| {
            previous.shift_id == shift_id
                && at >= previous.at
                && at - previous.at <= self.double_click_window
        });

        if is_double {
            self.last_click = None;
            tracing::debug!(shift_id, "Double click removes shift");
            return vec![InteractionEvent::ShiftRemoved {
                shift_id: shift_id.to_string(),
            }];
        }

        self.last_click = Some(Click {
            shift_id: shift_id.to_string(),
            at,
        });
        Vec::new()
    }

    /// Abandons any drag without committing it, e.g. when the grid
    /// unmounts mid-drag.
    pub fn cancel(&mut self) -> Vec<InteractionEvent> {
        self.last_click = None;
        match std::mem::replace(&mut self.state, InteractionState::Idle) {
            InteractionState::Idle => Vec::new(),
            _ => vec![InteractionEvent::CaptureReleased],
        }
    }
}
