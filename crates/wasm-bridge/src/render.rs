//! Canvas-2D rendering of the two planes
//!
//! The z-plane shows the sample inputs plus the singular segment from
//! 0 to i; the w-plane shows their images plus the asymptote rays of
//! the image region. Point sprites are 2×2 px rects; the hover overlay
//! is a ring with a monospace readout.

use conformal_shared::wire::SamplePoint;
use conformal_shared::{Complex, HoverState, ViewConfig, VIEW_SIZE, W_VIEW, Z_VIEW};
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub fn draw_all(
    ctx_z: &CanvasRenderingContext2d,
    ctx_w: &CanvasRenderingContext2d,
    points: &[SamplePoint],
    hover: Option<&HoverState>,
) {
    draw_grid(ctx_z, &Z_VIEW, true);
    draw_grid(ctx_w, &W_VIEW, false);
    draw_points(ctx_z, ctx_w, points);
    if let Some(hover) = hover {
        draw_hover(ctx_z, ctx_w, hover);
    }
}

fn draw_grid(ctx: &CanvasRenderingContext2d, view: &ViewConfig, is_z_plane: bool) {
    ctx.set_fill_style_str("black");
    ctx.fill_rect(0.0, 0.0, VIEW_SIZE, VIEW_SIZE);

    // Axes through the view origin.
    ctx.set_stroke_style_str("#333");
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(0.0, view.origin.y);
    ctx.line_to(VIEW_SIZE, view.origin.y);
    ctx.move_to(view.origin.x, 0.0);
    ctx.line_to(view.origin.x, VIEW_SIZE);
    ctx.stroke();

    if is_z_plane {
        draw_singular_segment(ctx, view);
    } else {
        draw_asymptote_rays(ctx, view);
    }
}

/// The excluded segment from 0 to i, where the mapping degenerates.
fn draw_singular_segment(ctx: &CanvasRenderingContext2d, view: &ViewConfig) {
    let p0 = view.to_screen(Complex::ZERO);
    let pi = view.to_screen(Complex::I);

    ctx.set_stroke_style_str("#ff0055");
    ctx.set_line_width(4.0);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(p0.x, p0.y);
    ctx.line_to(pi.x, pi.y);
    ctx.stroke();

    ctx.set_fill_style_str("#ff0055");
    for p in [p0, pi] {
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, 4.0, 0.0, PI * 2.0);
        ctx.fill();
    }
}

/// Dashed rays at π/4 and 3π/4 bounding the image sector.
fn draw_asymptote_rays(ctx: &CanvasRenderingContext2d, view: &ViewConfig) {
    let center = view.to_screen(Complex::ZERO);
    let len = 600.0;

    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.2)");
    let dash = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0));
    let _ = ctx.set_line_dash(&dash);

    for angle in [PI / 4.0, 3.0 * PI / 4.0] {
        let x = center.x + len * angle.cos();
        let y = center.y - len * angle.sin();
        ctx.begin_path();
        ctx.move_to(center.x, center.y);
        ctx.line_to(x, y);
        ctx.stroke();
    }

    let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_points(
    ctx_z: &CanvasRenderingContext2d,
    ctx_w: &CanvasRenderingContext2d,
    points: &[SamplePoint],
) {
    for p in points {
        let sz = Z_VIEW.to_screen(p.z);
        ctx_z.set_fill_style_str(&p.color);
        ctx_z.fill_rect(sz.x, sz.y, 2.0, 2.0);

        let sw = W_VIEW.to_screen(p.w);
        ctx_w.set_fill_style_str(&p.color);
        ctx_w.fill_rect(sw.x, sw.y, 2.0, 2.0);
    }
}

fn draw_hover(
    ctx_z: &CanvasRenderingContext2d,
    ctx_w: &CanvasRenderingContext2d,
    hover: &HoverState,
) {
    ctx_z.set_stroke_style_str("white");
    ctx_z.set_line_width(1.0);
    ctx_z.begin_path();
    let _ = ctx_z.arc(hover.screen.x, hover.screen.y, 5.0, 0.0, PI * 2.0);
    ctx_z.stroke();

    ctx_z.set_fill_style_str("white");
    ctx_z.set_font("12px monospace");
    let z_label = format!("z: {:.2} + {:.2}i", hover.z.re, hover.z.im);
    let _ = ctx_z.fill_text(&z_label, 10.0, 20.0);

    // The w marker only exists once the probe response has landed.
    let Some(w) = hover.w else { return };
    let sw = W_VIEW.to_screen(w);
    let origin = W_VIEW.to_screen(Complex::ZERO);

    ctx_w.set_stroke_style_str("rgba(255,255,255,0.1)");
    ctx_w.begin_path();
    ctx_w.move_to(origin.x, origin.y);
    ctx_w.line_to(sw.x, sw.y);
    ctx_w.stroke();

    ctx_w.set_stroke_style_str("white");
    ctx_w.set_line_width(2.0);
    ctx_w.begin_path();
    let _ = ctx_w.arc(sw.x, sw.y, 5.0, 0.0, PI * 2.0);
    ctx_w.stroke();

    ctx_w.set_fill_style_str("white");
    ctx_w.set_font("12px monospace");
    let w_label = format!("w: {:.2} + {:.2}i", w.re, w.im);
    let _ = ctx_w.fill_text(&w_label, 10.0, 20.0);
}
