//! Pointer interaction on the weekly calendar grid.
//!
//! Cell selection, shift edge resizing and double-click removal, driven by
//! pointer events the host has already translated into grid cells and
//! pixel positions.

mod resize;
mod selection;
mod state;

pub use resize::{CellSize, PointerPosition, ResizeDrag, ResizeEdge, ShiftBounds, cell_steps};
pub use selection::{Cell, SelectionRect};
pub use state::{GridInteraction, InteractionEvent, InteractionState};
