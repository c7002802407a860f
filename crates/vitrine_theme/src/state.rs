//! Global theme state singleton
//!
//! Widgets read the active theme here at draw time. Scheme switches are
//! instant swaps: the new tables take effect on the next repaint, signalled
//! through the `needs_repaint` flag and the registered redraw callback.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, OnceLock, RwLock,
};

use vitrine_core::Env;

use crate::platform::detect_system_color_scheme;
use crate::style::{ColorScheme, Theme, ThemeBundle};
use crate::themes::builtin_bundle;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the embedder to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Register a function that triggers a redraw when the theme changes.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// Global theme state - accessed directly by widgets during draw.
pub struct ThemeState {
    /// The current theme bundle (light/dark pair).
    bundle: RwLock<ThemeBundle>,

    /// Current color scheme.
    scheme: RwLock<ColorScheme>,

    /// Flag indicating the theme changed and containers need repainting.
    needs_repaint: AtomicBool,
}

impl ThemeState {
    /// Initialize the global theme state (call once at startup).
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) {
        Env::set_is_dark(scheme.is_dark());
        let state = ThemeState {
            bundle: RwLock::new(bundle),
            scheme: RwLock::new(scheme),
            needs_repaint: AtomicBool::new(false),
        };
        let _ = THEME_STATE.set(state);
    }

    /// Initialize with the built-in bundle and the detected system scheme.
    pub fn init_default() {
        Self::init(builtin_bundle(), detect_system_color_scheme());
    }

    /// Get the global theme state instance.
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at startup.")
    }

    /// Try to get the global theme state (returns None if not initialized).
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Get the current color scheme.
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Set the color scheme.
    ///
    /// When `Env::auto_update` is off the change is recorded and the
    /// repaint flag set, but the redraw callback stays silent until
    /// [`ThemeState::refresh`].
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap();
        if *current == scheme {
            return;
        }
        tracing::debug!(from = ?*current, to = ?scheme, "ThemeState::set_scheme");
        *current = scheme;
        drop(current);

        Env::set_is_dark(scheme.is_dark());
        self.needs_repaint.store(true, Ordering::SeqCst);
        if Env::get().auto_update {
            trigger_redraw();
        }
    }

    /// Toggle between light and dark mode.
    pub fn toggle_scheme(&self) {
        let current = self.scheme();
        self.set_scheme(current.toggle());
    }

    /// The active theme for the current scheme.
    pub fn theme(&self) -> Theme {
        let scheme = self.scheme();
        self.bundle.read().unwrap().for_scheme(scheme).clone()
    }

    /// Replace the whole bundle (e.g. after applying file overrides).
    pub fn set_bundle(&self, bundle: ThemeBundle) {
        *self.bundle.write().unwrap() = bundle;
        self.needs_repaint.store(true, Ordering::SeqCst);
        if Env::get().auto_update {
            trigger_redraw();
        }
    }

    /// Check if theme changes require a repaint.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag.
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }

    /// Force a repaint notification, regardless of `Env::auto_update`.
    pub fn refresh(&self) {
        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }
}
