//! Mount API - Application lifecycle and render effect.
//!
//! Sets up the reactive pipeline for a mounted [`App`]:
//!
//! ```text
//! component signals → frame derived (render_app) → render effect → terminal
//! ```
//!
//! The effect is the only place that writes to the terminal. It also keeps
//! the last painted frame so mouse events can be hit-tested against exactly
//! what the user sees. The derived clips the frame to the terminal width,
//! which is a signal updated on resize.
//!
//! # Example
//!
//! ```ignore
//! let app = Rc::new(App::demo(&config)?);
//!
//! // Option 1: Run blocking event loop
//! mount::run(app.clone())?;
//!
//! // Option 2: Tick manually in your own loop
//! let handle = mount::mount(app)?;
//! while handle.tick(Duration::from_millis(50))? == Flow::Continue {}
//! handle.unmount();
//! ```

use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::terminal;
use spark_signals::{derived, effect, signal, Signal};

use super::controller::{self, Flow};
use super::input::{self, InputEvent};
use super::renderer::LineRenderer;
use super::view::{render_app, Frame};
use crate::components::App;
use crate::state::focus::FocusState;

/// How long one tick waits for input.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

// =============================================================================
// Render pipeline
// =============================================================================

/// The derived frame plus the one render effect, writing to `W`.
pub struct RenderPipeline<W: Write> {
    renderer: Rc<RefCell<LineRenderer<W>>>,
    width: Signal<u16>,
    latest: Rc<RefCell<Frame>>,
    error: Rc<RefCell<Option<io::Error>>>,
    stop_effect: Option<Box<dyn FnOnce()>>,
}

impl<W: Write + 'static> RenderPipeline<W> {
    /// Create the frame derived and the render effect.
    ///
    /// The effect runs once immediately, so the first frame is painted
    /// before this returns.
    pub fn attach(app: Rc<App>, focus: FocusState, renderer: LineRenderer<W>) -> Self {
        let width = signal(renderer.width());
        let renderer = Rc::new(RefCell::new(renderer));
        let latest = Rc::new(RefCell::new(Frame::default()));
        let error = Rc::new(RefCell::new(None));

        let width_derived = width.clone();
        let frame_derived =
            derived(move || render_app(&app, &focus).clipped(width_derived.get()));

        let renderer_fx = renderer.clone();
        let latest_fx = latest.clone();
        let error_fx = error.clone();
        let stop = effect(move || {
            // Read from derived (creates dependency)
            let frame = frame_derived.get();

            if let Err(err) = renderer_fx.borrow_mut().render(&frame) {
                tracing::error!(%err, "render failed");
                *error_fx.borrow_mut() = Some(err);
            }
            *latest_fx.borrow_mut() = frame;
        });

        Self {
            renderer,
            width,
            latest,
            error,
            stop_effect: Some(Box::new(stop)),
        }
    }

    /// The last painted frame.
    pub fn frame(&self) -> Frame {
        self.latest.borrow().clone()
    }

    /// Error from the last paint, if any. Clears it.
    pub fn take_error(&self) -> Option<io::Error> {
        self.error.borrow_mut().take()
    }

    /// Paint the last frame again from scratch (after a resize).
    pub fn repaint(&self) -> io::Result<()> {
        let mut renderer = self.renderer.borrow_mut();
        renderer.invalidate();
        renderer.render(&self.latest.borrow()).map(|_| ())
    }

    /// Follow a terminal resize.
    ///
    /// A new width re-runs the derived, and the effect paints the re-clipped
    /// frame from scratch. When nothing re-ran, the last frame is repainted
    /// as is.
    pub fn resize(&self, width: u16) -> io::Result<()> {
        let changed = self.width.get() != width;
        self.renderer.borrow_mut().set_width(width);
        if changed {
            self.width.set(width);
            if let Some(err) = self.take_error() {
                return Err(err);
            }
            if self.renderer.borrow().has_previous() {
                return Ok(());
            }
        }
        self.repaint()
    }

    /// Stop the render effect. Later state changes paint nothing.
    pub fn detach(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.stop_effect.is_some()
    }
}

impl<W: Write> Drop for RenderPipeline<W> {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]. Restores the terminal when unmounted or
/// dropped.
pub struct MountHandle {
    app: Rc<App>,
    focus: FocusState,
    pipeline: RenderPipeline<Stdout>,
    restored: bool,
}

impl MountHandle {
    /// Process at most one input event.
    ///
    /// Returns `Flow::Quit` once the user asked to leave.
    pub fn tick(&self, timeout: Duration) -> io::Result<Flow> {
        if let Some(err) = self.pipeline.take_error() {
            return Err(err);
        }

        let Some(event) = input::poll_event(timeout)? else {
            return Ok(Flow::Continue);
        };

        if let InputEvent::Resize(width, height) = event {
            tracing::debug!(width, height, "terminal resized");
            self.pipeline.resize(width)?;
            return Ok(Flow::Continue);
        }

        // Routing sets signals, which re-runs the render effect; the frame
        // must not be borrowed while that happens.
        let frame = self.pipeline.frame();
        Ok(controller::route_event(&self.app, &self.focus, &frame, &event))
    }

    /// Stop rendering and restore the terminal.
    pub fn unmount(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        self.pipeline.detach();
        // Best effort: the terminal may already be gone.
        let _ = input::disable_mouse();
        let _ = self.pipeline.renderer.borrow_mut().exit_fullscreen();
        let _ = terminal::disable_raw_mode();
        tracing::info!("unmounted");
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.restore();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the app in fullscreen mode.
///
/// This sets up:
/// 1. Raw mode and the alternate screen
/// 2. Mouse capture
/// 3. The reactive render pipeline (first paint happens here)
pub fn mount(app: Rc<App>) -> io::Result<MountHandle> {
    let (width, _height) = terminal::size()?;
    terminal::enable_raw_mode()?;

    let mut renderer = LineRenderer::new(io::stdout(), width);
    if let Err(err) = renderer.enter_fullscreen().and_then(|_| input::enable_mouse()) {
        let _ = renderer.exit_fullscreen();
        let _ = terminal::disable_raw_mode();
        return Err(err);
    }

    let focus = FocusState::new();
    let pipeline = RenderPipeline::attach(app.clone(), focus.clone(), renderer);
    tracing::info!("mounted");

    Ok(MountHandle {
        app,
        focus,
        pipeline,
        restored: false,
    })
}

/// Mount, run the blocking event loop until quit, unmount.
///
/// The terminal is restored on every exit path, errors included.
pub fn run(app: Rc<App>) -> io::Result<()> {
    let handle = mount(app)?;
    while handle.tick(POLL_INTERVAL)? == Flow::Continue {}
    handle.unmount();
    Ok(())
}

/// Render the app once as plain text, without touching the terminal.
pub fn dump(app: &App) -> String {
    render_app(app, &FocusState::new()).to_plain_text()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Tab;
    use crate::config::StoreConfig;

    fn setup() -> (Rc<App>, FocusState, RenderPipeline<Vec<u8>>) {
        let app = Rc::new(App::demo(&StoreConfig::default()).unwrap());
        let focus = FocusState::new();
        let renderer = LineRenderer::new(Vec::new(), 80);
        let pipeline = RenderPipeline::attach(app.clone(), focus.clone(), renderer);
        (app, focus, pipeline)
    }

    fn written(pipeline: &RenderPipeline<Vec<u8>>) -> String {
        let renderer = pipeline.renderer.borrow();
        String::from_utf8_lossy(renderer.output()).into_owned()
    }

    #[test]
    fn test_first_paint_on_attach() {
        let (_app, _focus, pipeline) = setup();
        assert!(pipeline.is_attached());
        assert!(pipeline.frame().to_plain_text().contains("Cart (0)"));
        assert!(written(&pipeline).contains("Cart (0)"));
    }

    #[test]
    fn test_state_change_repaints() {
        let (app, _focus, pipeline) = setup();
        assert!(app.product().add_to_cart());

        assert!(pipeline.frame().to_plain_text().contains("Cart (1)"));
        assert!(written(&pipeline).contains("Cart (1)"));
    }

    #[test]
    fn test_focus_change_repaints() {
        let (app, focus, pipeline) = setup();
        app.product().tabs().select_tab(Tab::MakeAReview);
        let before = pipeline.frame();

        focus.focus(crate::state::focus::FormControl::Name);
        assert_ne!(pipeline.frame(), before);
    }

    #[test]
    fn test_detach_stops_painting() {
        let (app, _focus, mut pipeline) = setup();
        pipeline.detach();
        assert!(!pipeline.is_attached());

        app.product().add_to_cart();
        assert!(pipeline.frame().to_plain_text().contains("Cart (0)"));
        assert!(pipeline.take_error().is_none());
    }

    #[test]
    fn test_repaint_rewrites_frame() {
        let (_app, _focus, pipeline) = setup();
        let before = written(&pipeline).len();
        pipeline.repaint().unwrap();
        assert!(written(&pipeline).len() > before);
    }

    #[test]
    fn test_long_review_stays_within_width() {
        let (app, _focus, pipeline) = setup();
        let tabs = app.product().tabs();
        tabs.select_tab(Tab::MakeAReview);
        tabs.form().set_review("x".repeat(120));

        let frame = pipeline.frame();
        assert!(frame.lines.iter().all(|l| l.width() <= 80));
        assert!(frame.hit_regions().iter().all(|r| r.x + r.width <= 80));
        let row = frame.find_line("Review:").unwrap();
        assert_eq!(frame.lines[row].width(), 80);
        assert!(written(&pipeline).contains(&"x".repeat(71)));
        assert!(!written(&pipeline).contains(&"x".repeat(72)));

        // Wider terminal shows the whole row.
        pipeline.resize(200).unwrap();
        let frame = pipeline.frame();
        assert_eq!(frame.lines[row].width(), 129);
        assert!(written(&pipeline).contains(&"x".repeat(120)));
    }

    #[test]
    fn test_resize_to_same_width_repaints() {
        let (_app, _focus, pipeline) = setup();
        let before = written(&pipeline).len();
        let frame = pipeline.frame();
        pipeline.resize(80).unwrap();
        assert!(written(&pipeline).len() > before);
        assert_eq!(pipeline.frame(), frame);
    }

    #[test]
    fn test_resize_repaints_when_frame_unchanged() {
        let (_app, _focus, pipeline) = setup();
        let frame = pipeline.frame();
        assert!(frame.lines.iter().all(|l| l.width() <= 80));
        let before = written(&pipeline).len();

        pipeline.resize(120).unwrap();
        assert_eq!(pipeline.frame(), frame);
        assert!(pipeline.renderer.borrow().has_previous());
        assert!(written(&pipeline).len() > before);
    }

    #[test]
    fn test_dump() {
        let app = App::demo(&StoreConfig::default().with_premium(false)).unwrap();
        let text = dump(&app);
        assert!(text.contains("Vue Mastery Socks"));
        assert!(text.contains("Shipping: $2.99"));
        assert!(!text.contains('\x1b'));
    }
}
