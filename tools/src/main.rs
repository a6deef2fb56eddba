//! impel-runner: headless frame runner for the impel engine.
//!
//! Usage:
//!   impel-runner --frames 600 --delta 16
//!   impel-runner --config run.json --reset-every 120 --json

mod processors;

use anyhow::{Context, Result};
use impel_core::{
    config::RunConfig, snapshot::EngineSnapshot, ImpelEngine, ProcessorKind, ProcessorRegistry,
};
use processors::{OvershootProcessor, SmoothProcessor};
use std::env;

#[derive(serde::Serialize)]
struct RunSummary {
    frames_run: u64,
    resets:     u64,
    /// State since the last reset.
    snapshot:   EngineSnapshot,
    smooth:     Option<f64>,
    overshoot:  Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_output = args.iter().any(|a| a == "--json");

    let mut config = match find_arg(&args, "--config") {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading run configuration from {path}"))?,
        None => RunConfig::default(),
    };
    config.frames = parse_arg(&args, "--frames", config.frames);
    config.delta_time = parse_arg(&args, "--delta", config.delta_time);
    if let Some(every) = find_arg(&args, "--reset-every").and_then(|v| v.parse().ok()) {
        config.reset_every = Some(every);
    }
    config.validate()?;

    let mut registry = ProcessorRegistry::new();
    processors::register_all(&mut registry);
    let registry = registry.into_shared();
    let kinds = config.resolve_kinds(&registry)?;

    if !json_output {
        println!("impel-runner");
        println!("  frames:      {}", config.frames);
        println!("  delta:       {} ms", config.delta_time);
        println!("  kinds:       {}", config.kinds.join(", "));
        match config.reset_every {
            Some(every) => println!("  reset every: {every} frames"),
            None => println!("  reset every: never"),
        }
        println!();
    }

    let mut engine = ImpelEngine::new(registry);
    let summary = run(&mut engine, &config, &kinds)?;

    if json_output {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn run(engine: &mut ImpelEngine, config: &RunConfig, kinds: &[ProcessorKind]) -> Result<RunSummary> {
    acquire(engine, kinds)?;

    let mut resets = 0;
    for frame in 1..=config.frames {
        engine.advance_frame(config.delta_time);

        if let Some(every) = config.reset_every {
            if frame % every == 0 && frame < config.frames {
                log::info!("frame={frame}: resetting engine");
                engine.reset();
                resets += 1;
                acquire(engine, kinds)?;
            }
        }
    }

    // Read back values without creating processors that were not configured.
    let smooth = engine
        .get(ProcessorKind::SMOOTH)
        .and_then(|p| p.as_any().downcast_ref::<SmoothProcessor>())
        .map(|p| p.value);
    let overshoot = engine
        .get(ProcessorKind::OVERSHOOT)
        .and_then(|p| p.as_any().downcast_ref::<OvershootProcessor>())
        .map(|p| p.value);

    Ok(RunSummary {
        frames_run: config.frames,
        resets,
        snapshot: engine.snapshot(),
        smooth,
        overshoot,
    })
}

fn acquire(engine: &mut ImpelEngine, kinds: &[ProcessorKind]) -> Result<()> {
    for kind in kinds {
        engine.try_processor(*kind)?;
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("=== RUN SUMMARY ===");
    println!("  frames run:     {}", summary.frames_run);
    println!("  resets:         {}", summary.resets);
    println!("  clock frame:    {}", summary.snapshot.frame);
    println!("  clock elapsed:  {} ms", summary.snapshot.elapsed);
    let live: Vec<_> = summary.snapshot.live_kinds.iter().map(|k| k.name()).collect();
    println!("  live kinds:     {}", live.join(", "));
    if let Some(value) = summary.smooth {
        println!("  smooth:         {value:.4}");
    }
    if let Some(value) = summary.overshoot {
        println!("  overshoot:      {value:.4}");
    }
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
