//! Headless driver for the vantage interaction engine.
//!
//! Loads a scene description, a focus registry and options, replays a
//! script of input steps with simulated frames in between, and logs the
//! focus state, panel and camera after every step.
//!
//! ```text
//! RUST_LOG=debug vantage assets/scene.toml --step click:486,284 --step reset
//! vantage --options presets/calm.toml --save-options out.toml --dump-schema schema.json
//! ```
//!
//! Frames are simulated on a fixed step unless `--realtime` paces them
//! against the wall clock.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use vantage::input::{InputEvent, MouseButton};
use vantage::options::Options;
use vantage::panel::LogPanel;
use vantage::picking::ViewportRect;
use vantage::registry::FocusRegistry;
use vantage::scene::SceneDescription;
use vantage::util::frame_timing::FrameClock;
use vantage::{VantageError, ViewerEngine};

const BUNDLED_REGISTRY: &str = include_str!("../assets/registry.toml");

#[derive(Parser)]
#[command(name = "vantage")]
#[command(about = "Replay scripted picks against a scene without rendering")]
struct Cli {
    /// Scene description (.toml or .json).
    #[arg(required_unless_present_any = ["dump_schema", "save_options", "list_presets"])]
    scene: Option<PathBuf>,
    /// Focus registry (.toml or .json). Defaults to the bundled registry.
    #[arg(long)]
    registry: Option<PathBuf>,
    /// Options preset (.toml).
    #[arg(long)]
    options: Option<PathBuf>,
    /// Viewport size as WIDTHxHEIGHT.
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    viewport: (f32, f32),
    /// Script step: click:X,Y | touch:X,Y | key:NAME | overlay | wait:SECS.
    #[arg(long = "step")]
    steps: Vec<Step>,
    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Seconds simulated after every step.
    #[arg(long, default_value_t = 1.5)]
    settle: f32,
    /// Pace frames against the wall clock instead of a fixed step.
    #[arg(long)]
    realtime: bool,
    /// Write the options JSON schema to this file.
    #[arg(long, value_name = "PATH")]
    dump_schema: Option<PathBuf>,
    /// Write the effective options to this TOML file.
    #[arg(long, value_name = "PATH")]
    save_options: Option<PathBuf>,
    /// Log the option presets found in this directory.
    #[arg(long, value_name = "DIR")]
    list_presets: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Click(f32, f32),
    Touch(f32, f32),
    Key(String),
    Overlay,
    Wait(f32),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = s.split_once(':').unwrap_or((s, ""));
        match kind {
            "click" => parse_point(arg).map(|(x, y)| Self::Click(x, y)),
            "touch" => parse_point(arg).map(|(x, y)| Self::Touch(x, y)),
            "key" if !arg.is_empty() => Ok(Self::Key(arg.to_owned())),
            "overlay" => Ok(Self::Overlay),
            "wait" => arg
                .parse()
                .map(Self::Wait)
                .map_err(|e| format!("bad wait '{arg}': {e}")),
            _ => Err(format!("unknown step '{s}'")),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click(x, y) => write!(f, "click at ({x}, {y})"),
            Self::Touch(x, y) => write!(f, "touch at ({x}, {y})"),
            Self::Key(key) => write!(f, "key {key}"),
            Self::Overlay => f.write_str("overlay click"),
            Self::Wait(secs) => write!(f, "wait {secs}s"),
        }
    }
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

fn parse_size(s: &str) -> Result<(f32, f32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT but got '{s}'"))?;
    let w: f32 = w.parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f32 = h.parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w <= 0.0 || h <= 0.0 {
        return Err(format!("viewport must be positive, got '{s}'"));
    }
    Ok((w, h))
}

/// Run frames until `seconds` of simulated time have passed.
fn simulate(
    engine: &mut ViewerEngine<LogPanel>,
    clock: &mut FrameClock,
    seconds: f32,
) {
    let mut elapsed = 0.0;
    while elapsed < seconds {
        let wait = clock.time_until_next_frame();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let dt = clock.tick();
        if dt <= 0.0 {
            continue;
        }
        elapsed += dt;
        let _ = engine.tick(dt);
    }
}

fn inputs_for(step: &Step) -> Vec<InputEvent> {
    match step {
        Step::Click(x, y) => vec![
            InputEvent::CursorMoved { x: *x, y: *y },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
        ],
        Step::Touch(x, y) => vec![InputEvent::TouchStart { x: *x, y: *y }],
        Step::Key(key) => vec![InputEvent::KeyPressed { key: key.clone() }],
        Step::Overlay => vec![InputEvent::OverlayClicked],
        Step::Wait(_) => Vec::new(),
    }
}

fn report(engine: &ViewerEngine<LogPanel>) {
    let pose = engine.camera_controller().pose();
    log::info!(
        "state={:?} panel={:?} eye={:.1?} target={:.1?}",
        engine.focus_state(),
        engine.panel().shown_payload().map(|p| p.title.as_str()),
        pose.position,
        pose.look_at,
    );
}

fn write_schema(path: &Path) -> Result<(), VantageError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
    std::fs::write(path, schema)?;
    log::info!("wrote options schema to {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<(), VantageError> {
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(dir) = &cli.list_presets {
        let presets = Options::list_presets(dir);
        if presets.is_empty() {
            log::info!("no presets in {}", dir.display());
        }
        for name in presets {
            log::info!("preset {name}");
        }
    }
    if let Some(path) = &cli.dump_schema {
        write_schema(path)?;
    }
    if let Some(path) = &cli.save_options {
        options.save(path)?;
        log::info!("saved options to {}", path.display());
    }
    let Some(scene_path) = &cli.scene else {
        return Ok(());
    };

    let registry = match &cli.registry {
        Some(path) => FocusRegistry::load(path)?,
        None => FocusRegistry::from_toml_str(BUNDLED_REGISTRY)?,
    };
    let (scene, root) = SceneDescription::load(scene_path)?.build()?;

    let mut engine = ViewerEngine::new(options, registry, LogPanel);
    let (width, height) = cli.viewport;
    engine.set_viewport(ViewportRect::from_size(width, height));
    engine.on_model_loaded(scene, root);
    report(&engine);

    let mut clock = if cli.realtime {
        FrameClock::new(cli.fps)
    } else {
        FrameClock::fixed(cli.fps)
    };
    for step in &cli.steps {
        log::info!("-- {step}");
        for event in inputs_for(step) {
            let _ = engine.handle_input(event);
        }
        let wait = match step {
            Step::Wait(secs) => *secs,
            _ => cli.settle,
        };
        simulate(&mut engine, &mut clock, wait);
        report(&engine);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
