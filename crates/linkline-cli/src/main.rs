//! Headless scene renderer: JSON in, SVG out.
//!
//! A scene file describes the viewport, the elements on the page (bounding
//! boxes keyed by id) and the arrows between them (attribute objects, the
//! same shape a host attribute layer would hand to the widget):
//!
//! ```json
//! {
//!   "viewport": { "width": 800, "height": 600, "scroll_y": 0 },
//!   "elements": { "a": { "left": 100, "top": 50, "width": 40, "height": 20 } },
//!   "arrows": [ { "from-element": "a", "to-element": "b", "color": "tomato" } ]
//! }
//! ```

use indexmap::IndexMap;
use linkline::anchor::{BoundsProvider, ElementBounds};
use linkline::render::{ArrowWidget, SvgSurface, ViewportMetrics, draw_arrow, resize};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Arrow(linkline::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "Scene JSON error: {err}"),
            CliError::Arrow(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<linkline::Error> for CliError {
    fn from(value: linkline::Error) -> Self {
        Self::Arrow(value)
    }
}

const USAGE: &str = "Usage: linkline-cli [--out FILE] [SCENE.json | -]

Renders a JSON arrow scene to SVG (stdout by default).
With no input path, or with `-`, the scene is read from stdin.";

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Scene {
    viewport: Viewport,
    #[serde(default)]
    elements: IndexMap<String, Bounds>,
    #[serde(default)]
    arrows: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Viewport {
    width: f64,
    height: f64,
    #[serde(default)]
    scroll_y: f64,
}

impl ViewportMetrics for Viewport {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

/// Element bounds as they appear in the scene file. Margins are optional
/// totals (horizontal/vertical) on top of the border-box size.
#[derive(Debug, Clone, Copy, Deserialize)]
struct Bounds {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    margin_x: f64,
    #[serde(default)]
    margin_y: f64,
}

struct SceneElements<'a>(&'a IndexMap<String, Bounds>);

impl BoundsProvider for SceneElements<'_> {
    fn bounds_of(&self, id: &str) -> Option<ElementBounds> {
        let b = self.0.get(id)?;
        Some(ElementBounds::new(b.left, b.top, b.width, b.height).with_margins(b.margin_x, b.margin_y))
    }
}

fn parse_args() -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(USAGE)),
            "--out" => {
                args.out = Some(raw.next().ok_or(CliError::Usage("--out requires a path"))?);
            }
            "-" => args.input = None,
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(USAGE));
            }
            _ => {
                if args.input.is_some() {
                    return Err(CliError::Usage(USAGE));
                }
                args.input = Some(arg);
            }
        }
    }
    Ok(args)
}

fn read_scene(input: Option<&str>) -> Result<Scene, CliError> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn render_scene(scene: &Scene) -> Result<String, CliError> {
    let widgets = scene
        .arrows
        .iter()
        .map(ArrowWidget::from_attrs)
        .collect::<Result<Vec<_>, _>>()?;

    let elements = SceneElements(&scene.elements);
    let mut surface = SvgSurface::new(scene.viewport.width, scene.viewport.height);
    resize(&mut surface, &scene.viewport);
    for widget in &widgets {
        match widget.resolve_geometry(&elements, &scene.viewport) {
            Ok(geometry) => draw_arrow(&mut surface, &geometry, widget.style()),
            Err(err) => eprintln!("warning: skipping arrow: {err}"),
        }
    }
    Ok(surface.to_svg())
}

fn run() -> Result<(), CliError> {
    let args = parse_args()?;
    let scene = read_scene(args.input.as_deref())?;
    let svg = render_scene(&scene)?;
    match args.out {
        Some(path) => std::fs::write(path, svg)?,
        None => println!("{svg}"),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        match err {
            CliError::Usage(msg) => {
                eprintln!("{msg}");
                std::process::exit(2);
            }
            other => {
                eprintln!("error: {other}");
                std::process::exit(1);
            }
        }
    }
}
