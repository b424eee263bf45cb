//! HR voice guidance CLI
//!
//! Speaks module guidance, contextual help and training walkthroughs from
//! the command line, through espeak-ng or a dry-run logger.

#![allow(clippy::print_stdout)]

mod backend;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{
    ResponsiveContextResolver, SpeechOutputDriver, VoiceGuidanceService, VoiceSettings,
};
use clap::{Parser, Subcommand};
use domain::{DeviceClass, GuidanceModule};
use infrastructure::{AppConfig, build_catalog, init_logging};
use tracing::debug;

use crate::backend::SpeechBackend;

/// HR voice guidance CLI
#[derive(Debug, Parser)]
#[command(name = "hr-guidance")]
#[command(author, version, about = "Spoken guidance for the HR dashboard", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./hr-guidance.toml if present)
    #[arg(short, long, global = true, env = "HR_GUIDANCE_CONFIG")]
    config: Option<PathBuf>,

    /// Log utterances instead of speaking them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Output volume between 0.0 and 1.0
    #[arg(long, global = true)]
    volume: Option<f32>,

    /// Start with voice guidance disabled
    #[arg(long, global = true)]
    muted: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Speak a text verbatim
    Speak {
        /// Text to speak
        text: String,
    },

    /// Show and speak contextual help for a route
    Help {
        /// Route of the current screen
        #[arg(short, long, default_value = "/")]
        route: String,

        /// Viewport width in pixels
        #[arg(short, long, default_value_t = 1280)]
        width: u32,
    },

    /// Speak the full walkthrough of a module
    Train {
        /// Route of the module
        #[arg(short, long, default_value = "/")]
        route: String,
    },

    /// Announce a module with a navigation hint for the device
    Announce {
        /// Route of the module
        #[arg(short, long, default_value = "/")]
        route: String,

        /// Viewport width in pixels
        #[arg(short, long, default_value_t = 1280)]
        width: u32,
    },

    /// List the voices of the speech platform
    Voices,

    /// List guidance modules and their routes
    Modules,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Voice settings after command line overrides
fn voice_settings(config: &AppConfig, cli: &Cli) -> VoiceSettings {
    let mut settings = config.voice.clone();
    if cli.muted {
        settings.enabled = false;
    }
    settings
}

fn device_for(config: &AppConfig, width: u32) -> DeviceClass {
    ResponsiveContextResolver::new(config.responsive, width).resolve()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let filter = (cli.verbose > 0).then(|| log_filter_from_verbosity(cli.verbose));
    init_logging(&config.logging, filter)?;

    let backend = SpeechBackend::new(&config, cli.dry_run);
    let settings = voice_settings(&config, &cli);
    let driver = Arc::new(SpeechOutputDriver::new(backend.synthesizer(), &settings));
    let catalog = Arc::new(build_catalog(&config.guidance)?);
    let service =
        VoiceGuidanceService::with_initial_state(driver.clone(), catalog, settings.enabled);

    if let Some(volume) = cli.volume {
        service.set_volume(volume);
    }

    debug!(?service, "Voice guidance ready");

    match cli.command {
        Commands::Speak { text } => service.speak(&text),

        Commands::Help { route, width } => {
            let device = device_for(&config, width);
            let help = service.contextual_help_for_route(&route, device);

            println!("📖 {}", help.title);
            println!();
            for line in &help.content {
                println!("   {line}");
            }

            service.speak(&help.to_speech());
        },

        Commands::Train { route } => {
            let module = GuidanceModule::from_route(&route);
            println!("🎓 Training: {module}");
            service.start_training(module);
        },

        Commands::Announce { route, width } => {
            let module = GuidanceModule::from_route(&route);
            let device = device_for(&config, width);
            println!("📣 {module} on {device}");
            service.announce_module(module, device);
        },

        Commands::Voices => {
            backend.refresh_voices();
            let current = driver.current_voice();
            let voices = driver.available_voices();

            println!("🗣️  Available Voices ({}):", voices.len());
            for voice in voices {
                let marker = if current.as_ref() == Some(&voice) {
                    "*"
                } else {
                    " "
                };
                println!("  {marker} {:<12} {:<28} {}", voice.id, voice.name, voice.lang);
            }
        },

        Commands::Modules => {
            println!("📦 Guidance Modules:");
            for module in GuidanceModule::all() {
                let guidance = if service.catalog().bundle(module).is_some() {
                    "guided"
                } else {
                    "generic help"
                };
                println!(
                    "   {:<14} {:<14} {guidance}",
                    module.key(),
                    module.route().unwrap_or("-")
                );
            }
        },
    }

    let capability = service.capability();
    if !capability.supported {
        println!("⚠️  Speech synthesis is not available. Install espeak-ng or use --dry-run.");
    } else if let Some(failure) = capability.last_error {
        println!("⚠️  {}", failure.error);
    } else if !service.is_enabled() {
        debug!("Voice guidance muted");
    }

    backend.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn parses_speak() {
        let cli = parse(&["hr-guidance", "speak", "Hello there"]).unwrap();
        assert!(matches!(cli.command, Commands::Speak { ref text } if text == "Hello there"));
        assert!(!cli.dry_run);
        assert!(cli.volume.is_none());
    }

    #[test]
    fn parses_help_defaults() {
        let cli = parse(&["hr-guidance", "help"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Help { ref route, width: 1280 } if route == "/"
        ));
    }

    #[test]
    fn parses_announce_with_route_and_width() {
        let cli = parse(&["hr-guidance", "announce", "--route", "/payroll", "-w", "500"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Announce { ref route, width: 500 } if route == "/payroll"
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&[
            "hr-guidance",
            "train",
            "--route",
            "/reports",
            "--dry-run",
            "--volume",
            "0.3",
            "--muted",
            "-vv",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.muted);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.volume, Some(0.3));
    }

    #[test]
    fn muted_disables_voice() {
        let cli = parse(&["hr-guidance", "--muted", "voices"]).unwrap();
        let settings = voice_settings(&AppConfig::default(), &cli);
        assert!(!settings.enabled);
    }

    #[test]
    fn device_follows_breakpoints() {
        let config = AppConfig::default();
        assert_eq!(device_for(&config, 375), DeviceClass::Mobile);
        assert_eq!(device_for(&config, 800), DeviceClass::Tablet);
        assert_eq!(device_for(&config, 1280), DeviceClass::Desktop);
    }

    #[test]
    fn speak_requires_text() {
        assert!(parse(&["hr-guidance", "speak"]).is_err());
    }
}
