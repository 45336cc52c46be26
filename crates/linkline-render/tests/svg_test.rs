use linkline_core::geom::point;
use linkline_render::arrow::{ArrowGeometry, ArrowStyle, draw_arrow};
use linkline_render::surface::Surface;
use linkline_render::svg::SvgSurface;

fn style() -> ArrowStyle {
    ArrowStyle {
        color: "lightgrey".to_string(),
        width: 2.0,
        dash: (0.0, 0.0),
    }
}

#[test]
fn stroked_quadratic_path_appears_in_the_document() {
    let mut surface = SvgSurface::new(200.0, 100.0);
    surface.set_stroke_color("tomato");
    surface.set_line_width(2.0);
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.quadratic_curve_to(5.0, 5.0, 10.0, 0.0);
    surface.stroke();

    let svg = surface.to_svg();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">"#));
    assert!(svg.contains(r#"<path d="M 0,0 Q 5,5,10,0" fill="none" stroke="tomato" stroke-width="2"/>"#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn dasharray_is_emitted_only_for_dashed_strokes() {
    let mut surface = SvgSurface::new(50.0, 50.0);
    surface.set_line_dash((4.0, 4.0));
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(10.0, 0.0);
    surface.stroke();

    surface.set_line_dash((0.0, 0.0));
    surface.begin_path();
    surface.move_to(0.0, 10.0);
    surface.line_to(10.0, 10.0);
    surface.stroke();

    let svg = surface.to_svg();
    assert!(svg.contains(r#"stroke-dasharray="4,4""#));
    assert_eq!(svg.matches("stroke-dasharray").count(), 1);
}

#[test]
fn translate_offsets_recorded_coordinates() {
    let mut surface = SvgSurface::new(50.0, 50.0);
    surface.translate(10.0, 20.0);
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(5.0, 0.0);
    surface.stroke();

    assert!(surface.to_svg().contains(r#"d="M 10,20 L 15,20""#));
}

#[test]
fn restore_undoes_transforms_and_stroke_state() {
    let mut surface = SvgSurface::new(50.0, 50.0);
    surface.set_line_width(2.0);
    surface.translate(10.0, 0.0);
    surface.save();
    surface.set_line_width(9.0);
    surface.translate(100.0, 100.0);
    surface.restore();

    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(1.0, 0.0);
    surface.stroke();

    let svg = surface.to_svg();
    assert!(svg.contains(r#"d="M 10,0 L 11,0""#));
    assert!(svg.contains(r#"stroke-width="2""#));
}

#[test]
fn resize_clears_prior_content() {
    let mut surface = SvgSurface::new(50.0, 50.0);
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(10.0, 10.0);
    surface.stroke();

    surface.resize(80.0, 60.0);
    let svg = surface.to_svg();
    assert!(!svg.contains("<path"));
    assert!(svg.contains(r#"width="80" height="60""#));
    assert_eq!(surface.width(), 80.0);
    assert_eq!(surface.height(), 60.0);
}

#[test]
fn colors_are_attribute_escaped() {
    let mut surface = SvgSurface::new(10.0, 10.0);
    surface.set_stroke_color(r#"url("x")"#);
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(1.0, 0.0);
    surface.stroke();

    assert!(surface.to_svg().contains("url(&quot;x&quot;)"));
}

#[test]
fn a_full_arrow_emits_three_paths() {
    let mut surface = SvgSurface::new(100.0, 100.0);
    let geometry = ArrowGeometry {
        from: point(0.0, 0.0),
        to: point(0.0, 10.0),
        control: point(0.0, 5.0),
    };
    draw_arrow(&mut surface, &geometry, &style());

    let svg = surface.to_svg();
    assert_eq!(svg.matches("<path").count(), 3);
    assert_eq!(svg.matches("Q").count(), 1);
    // head legs are solid even though the shaft could be dashed
    assert_eq!(svg.matches(r#"stroke-width="3""#).count(), 2);
}
