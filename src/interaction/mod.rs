//! Drag-to-move state machine (pure Rust, no FFI).
//!
//! The tracker never touches the window itself. Each transition returns a
//! [`DragAction`] that the owner applies to its surface, which keeps the
//! "capture held ⇔ dragging" invariant checkable without a window.

pub mod drag;

pub use drag::{DragAction, DragSession, DragState, DragTracker};
