//! Headless SVG drawing surface.
//!
//! Transforms are baked into path coordinates at recording time (the
//! output carries no `transform` attributes), and numbers are printed in
//! JS shortest-form via `ryu-js` so output is stable across platforms.

use crate::surface::Surface;
use linkline_core::geom::{Point, Transform, point};

#[derive(Clone)]
struct DrawState {
    transform: Transform,
    stroke_color: String,
    line_width: f64,
    dash: (f64, f64),
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            stroke_color: "black".to_string(),
            line_width: 1.0,
            dash: (0.0, 0.0),
        }
    }
}

/// A [`Surface`] that accumulates stroked paths into an SVG document.
pub struct SvgSurface {
    width: f64,
    height: f64,
    state: DrawState,
    stack: Vec<DrawState>,
    /// `d` attribute of the path under construction.
    path: String,
    /// Finished `<path/>` elements.
    body: String,
    ryu: ryu_js::Buffer,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            stack: Vec::new(),
            path: String::new(),
            body: String::new(),
            ryu: ryu_js::Buffer::new(),
        }
    }

    /// The complete SVG document for everything stroked since the last
    /// resize.
    pub fn to_svg(&mut self) -> String {
        let mut out = String::with_capacity(self.body.len() + 128);
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" width=""#);
        out.push_str(fmt_number(self.width, &mut self.ryu));
        out.push_str(r#"" height=""#);
        out.push_str(fmt_number(self.height, &mut self.ryu));
        out.push_str(r#"" viewBox="0 0 "#);
        out.push_str(fmt_number(self.width, &mut self.ryu));
        out.push(' ');
        out.push_str(fmt_number(self.height, &mut self.ryu));
        out.push_str("\">");
        out.push_str(&self.body);
        out.push_str("</svg>");
        out
    }

    fn push_path_point(&mut self, command: char, coords: &[f64]) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push(command);
        for (i, &c) in coords.iter().enumerate() {
            if i > 0 {
                self.path.push(',');
            } else {
                self.path.push(' ');
            }
            let formatted = fmt_number(c, &mut self.ryu);
            self.path.push_str(formatted);
        }
    }

    fn apply(&self, x: f64, y: f64) -> Point {
        self.state.transform.transform_point(point(x, y))
    }
}

impl Surface for SvgSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.body.clear();
        self.path.clear();
        self.state = DrawState::default();
        self.stack.clear();
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.state.stroke_color = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_line_dash(&mut self, dash: (f64, f64)) {
        self.state.dash = dash;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.apply(x, y);
        self.push_path_point('M', &[p.x, p.y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.apply(x, y);
        self.push_path_point('L', &[p.x, p.y]);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        let c = self.apply(cx, cy);
        let p = self.apply(x, y);
        self.push_path_point('Q', &[c.x, c.y, p.x, p.y]);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.body.push_str(r#"<path d=""#);
        self.body.push_str(&self.path);
        self.body.push_str(r#"" fill="none" stroke=""#);
        push_escaped_attr(&mut self.body, &self.state.stroke_color);
        self.body.push_str(r#"" stroke-width=""#);
        self.body
            .push_str(fmt_number(self.state.line_width, &mut self.ryu));
        if self.state.dash.0 > 0.0 || self.state.dash.1 > 0.0 {
            self.body.push_str(r#"" stroke-dasharray=""#);
            self.body
                .push_str(fmt_number(self.state.dash.0, &mut self.ryu));
            self.body.push(',');
            self.body
                .push_str(fmt_number(self.state.dash.1, &mut self.ryu));
        }
        self.body.push_str("\"/>");
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self
            .state
            .transform
            .pre_translate(linkline_core::geom::vector(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform.pre_rotate(euclid::Angle::radians(radians));
    }
}

fn fmt_number(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

fn push_escaped_attr(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
