//! Integration tests for manglr-gui.
//!
//! Configuration file I/O against a temporary directory, and headless frames
//! of the egui host driving a real panel.

use std::cell::RefCell;

use manglr_core::{EngineLink, FrameContext, ParamIndex, Panel, ReleaseFraming, Variant};
use manglr_gui::{ConfigError, EditorConfig, EguiHost, Theme};
use tempfile::TempDir;

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn config_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("manglr.toml");

    let mut config = EditorConfig {
        variant: Variant::WithoutGain,
        release_framing: ReleaseFraming::TouchedOnly,
        ..EditorConfig::default()
    };
    config.window.width = 530.0;
    config.save(&path).expect("save config");

    let loaded = EditorConfig::load(&path).expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn missing_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = EditorConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }), "got: {err}");
    assert!(err.to_string().contains("absent.toml"), "got: {err}");
}

#[test]
fn hand_written_config_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("manglr.toml");
    std::fs::write(
        &path,
        "variant = \"without-gain\"\nscale = 1.5\n[window]\nheight = 200.0\n",
    )
    .unwrap();

    let config = EditorConfig::load(&path).unwrap();
    assert_eq!(config.variant, Variant::WithoutGain);
    assert_eq!(config.scale, 1.5);
    assert_eq!(config.window.height, 200.0);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/manglr.toml");
    let err = EditorConfig::default().save(&path).unwrap_err();
    assert!(matches!(err, ConfigError::WriteFile { .. }), "got: {err}");
}

// ============================================================================
// Headless frames
// ============================================================================

#[derive(Default)]
struct Counter(RefCell<usize>);

impl EngineLink for Counter {
    fn begin_edit(&self, _: ParamIndex) {
        *self.0.borrow_mut() += 1;
    }
    fn set_value(&self, _: ParamIndex, _: f32) {
        *self.0.borrow_mut() += 1;
    }
    fn end_edit(&self, _: ParamIndex) {
        *self.0.borrow_mut() += 1;
    }
}

fn run_frames(variant: Variant, frames: usize) -> (Panel, usize) {
    let ctx = egui::Context::default();
    let theme = Theme::default();
    let mut panel = Panel::new(variant, ReleaseFraming::AllParameters);
    let link = Counter::default();

    panel.inbound().parameter_changed(0, 32.0);
    for _ in 0..frames {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let frame = FrameContext {
                    fine_step: false,
                    size: [640.0, 180.0],
                };
                let mut host = EguiHost::new(ui, &theme, "WSTD MANGLR", variant);
                panel.render(&frame, &mut host, &link);
            });
        });
    }
    let events = *link.0.borrow();
    (panel, events)
}

#[test]
fn idle_frames_send_nothing() {
    for variant in [Variant::WithGain, Variant::WithoutGain] {
        let (panel, events) = run_frames(variant, 3);
        assert_eq!(events, 0, "{variant}");
        assert_eq!(panel.model().crusher(), 32);
        assert!(!panel.session().is_editing());
    }
}
