//! WSTD MANGLR editor - standalone egui panel with a demo engine.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eframe::egui;
use manglr_core::{ReleaseFraming, Variant};
use manglr_gui::{EditorConfig, ManglrApp};

/// Panel layout to show.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    /// Full panel with the Gain knob.
    WithGain,
    /// Compact panel without Gain.
    WithoutGain,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::WithGain => Variant::WithGain,
            VariantArg::WithoutGain => Variant::WithoutGain,
        }
    }
}

/// Parameters closed when a gesture ends.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum FramingArg {
    /// Every parameter of the panel.
    AllParameters,
    /// Only parameters edited during the gesture.
    TouchedOnly,
}

impl From<FramingArg> for ReleaseFraming {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::AllParameters => ReleaseFraming::AllParameters,
            FramingArg::TouchedOnly => ReleaseFraming::TouchedOnly,
        }
    }
}

/// WSTD MANGLR editor panel.
#[derive(Parser, Debug)]
#[command(name = "manglr-gui")]
#[command(about = "Editor panel for the WSTD MANGLR crusher/folder/smoother")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Panel layout (overrides the config file)
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Release behavior (overrides the config file)
    #[arg(long, value_enum)]
    release_framing: Option<FramingArg>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f32>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f32>,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    save_config: Option<PathBuf>,
}

impl Args {
    fn resolve(&self) -> Result<EditorConfig, manglr_gui::ConfigError> {
        let mut config = match &self.config {
            Some(path) => EditorConfig::load(path)?,
            None => EditorConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant.into();
        }
        if let Some(framing) = self.release_framing {
            config.release_framing = framing.into();
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    if let Some(path) = &args.save_config {
        if let Err(e) = config.save(path) {
            tracing::error!(error = %e, "could not save configuration");
            std::process::exit(1);
        }
        tracing::info!(path = %path.display(), "configuration written");
        return Ok(());
    }

    tracing::info!("Starting {}", config.title);

    let size = [
        config.window.width * config.scale,
        config.window.height * config.scale,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ManglrApp::new(cc, config)))),
    )
}
