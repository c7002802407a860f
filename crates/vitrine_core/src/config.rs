//! Process-wide environment and font configuration
//!
//! Resolved once at startup and shared by every container and widget. All
//! mutation happens on the UI thread; the locks only exist so the globals
//! are safe to read from tests and embedder setup code.

use std::sync::{OnceLock, RwLock};

/// Host operating system, as far as theming cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemKind {
    Windows10,
    Windows11,
    MacOs,
    Linux,
}

impl SystemKind {
    /// Detect the host system from the build target.
    ///
    /// Windows builds start as `Windows10`; embedders that know the OS build
    /// number can refine via [`SystemKind::windows_from_build`] and
    /// [`Env::set_system`].
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            SystemKind::Windows10
        } else if cfg!(target_os = "macos") {
            SystemKind::MacOs
        } else {
            SystemKind::Linux
        }
    }

    /// Classify a Windows OS build number. Builds from 22000 are Windows 11.
    pub fn windows_from_build(build: u32) -> Self {
        if build >= 22000 {
            SystemKind::Windows11
        } else {
            SystemKind::Windows10
        }
    }

    pub fn is_windows(self) -> bool {
        matches!(self, SystemKind::Windows10 | SystemKind::Windows11)
    }
}

/// Process-wide environment settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Env {
    /// Host system, drives platform defaults.
    pub system: SystemKind,
    /// Whether the dark color scheme is active.
    pub is_dark: bool,
    /// Whether widgets animate state changes by default.
    pub default_animation: bool,
    /// Whether theme changes propagate to containers automatically.
    pub auto_update: bool,
}

static ENV: OnceLock<RwLock<Env>> = OnceLock::new();

fn env_cell() -> &'static RwLock<Env> {
    ENV.get_or_init(|| RwLock::new(Env::detected()))
}

impl Env {
    /// The defaults detection would produce on this host.
    pub fn detected() -> Self {
        Self {
            system: SystemKind::detect(),
            is_dark: false,
            default_animation: true,
            auto_update: true,
        }
    }

    /// Current environment settings.
    pub fn get() -> Env {
        *env_cell().read().unwrap()
    }

    /// Restore detected defaults.
    pub fn reset() {
        let defaults = Env::detected();
        tracing::debug!(?defaults, "Env::reset");
        *env_cell().write().unwrap() = defaults;
    }

    pub fn set_system(system: SystemKind) {
        env_cell().write().unwrap().system = system;
    }

    pub fn set_is_dark(is_dark: bool) {
        env_cell().write().unwrap().is_dark = is_dark;
    }

    pub fn set_default_animation(enabled: bool) {
        env_cell().write().unwrap().default_animation = enabled;
    }

    pub fn set_auto_update(enabled: bool) {
        env_cell().write().unwrap().auto_update = enabled;
    }
}

/// Process-wide font settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

static FONT: OnceLock<RwLock<Font>> = OnceLock::new();

fn font_cell() -> &'static RwLock<Font> {
    FONT.get_or_init(|| RwLock::new(Font::detected()))
}

impl Font {
    /// Default text size in pixels.
    pub const DEFAULT_SIZE: f32 = 20.0;

    /// Default UI family for the host system.
    pub fn default_family(system: SystemKind) -> &'static str {
        match system {
            SystemKind::Windows10 | SystemKind::Windows11 => "Microsoft YaHei",
            SystemKind::MacOs => "PingFang SC",
            SystemKind::Linux => "Noto Sans",
        }
    }

    /// The defaults detection would produce on this host.
    pub fn detected() -> Self {
        Self {
            family: Self::default_family(SystemKind::detect()).to_owned(),
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Current font settings.
    pub fn get() -> Font {
        font_cell().read().unwrap().clone()
    }

    /// Restore detected defaults.
    pub fn reset() {
        let defaults = Font::detected();
        tracing::debug!(?defaults, "Font::reset");
        *font_cell().write().unwrap() = defaults;
    }

    pub fn set_family(family: impl Into<String>) {
        font_cell().write().unwrap().family = family.into();
    }

    pub fn set_size(size: f32) {
        font_cell().write().unwrap().size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_reset_restores_detected_defaults() {
        Env::set_system(SystemKind::Windows11);
        Env::set_is_dark(true);
        Env::set_default_animation(false);
        Env::set_auto_update(false);

        Env::reset();

        let env = Env::get();
        assert_eq!(env.system, SystemKind::detect());
        assert!(!env.is_dark);
        assert!(env.default_animation);
        assert!(env.auto_update);
    }

    #[test]
    fn test_windows_build_classification() {
        assert_eq!(
            SystemKind::windows_from_build(22000),
            SystemKind::Windows11
        );
        assert_eq!(
            SystemKind::windows_from_build(19041),
            SystemKind::Windows10
        );
    }

    #[test]
    fn test_font_reset_restores_detected_defaults() {
        Font::set_family("");
        Font::set_size(0.0);

        Font::reset();

        let font = Font::get();
        assert_eq!(font.family, Font::default_family(SystemKind::detect()));
        assert_eq!(font.size, Font::DEFAULT_SIZE);
    }

    #[test]
    fn test_default_families_per_system() {
        assert_eq!(
            Font::default_family(SystemKind::Windows10),
            "Microsoft YaHei"
        );
        assert_eq!(Font::default_family(SystemKind::MacOs), "PingFang SC");
        assert_eq!(Font::default_family(SystemKind::Linux), "Noto Sans");
    }
}
