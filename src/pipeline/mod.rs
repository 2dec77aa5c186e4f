//! Reactive Pipeline
//!
//! Connects the component tree to the terminal.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Component signals → frame derived (view) → render effect (renderer) → terminal
//!          ↑                                                               │
//!          └──────────── controller ←──────── input ←──────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! 1. **view** - `render_app` turns the tree into a [`Frame`]: styled lines
//!    plus hit targets. Pure; reads signals only.
//! 2. **renderer** - Paints frames with crossterm, repainting changed rows.
//! 3. **input** - Converts crossterm events into plain key/mouse events.
//! 4. **controller** - Maps events to component operations.
//! 5. **mount** - Wires the derived and the one render effect, runs the loop.

pub mod controller;
pub mod input;
pub mod mount;
pub mod renderer;
pub mod view;

// Re-exports
pub use controller::{route_event, Action, Flow};
pub use input::{InputEvent, KeyboardEvent, Modifiers, MouseAction, MouseButton, MouseEvent};
pub use mount::{dump, mount, run, MountHandle, RenderPipeline};
pub use renderer::LineRenderer;
pub use view::{render_app, Frame, HitRegion, HitTarget, Line, Span};
