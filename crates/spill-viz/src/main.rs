use macroquad::prelude::*;
use spill_tree::SpillConfig;
use spill_viz::{
    BoundKind, DemoSettings, SplitMode, Viewport, collect_splits, draw_points, draw_segments,
    generate_skewed_cloud,
};

const POINT_COUNT: usize = 400;

#[macroquad::main("Spill Tree Splits")]
async fn main() {
    let mut seed = 1;
    let mut data = generate_skewed_cloud(POINT_COUNT, seed);
    let mut settings = DemoSettings::default();
    let mut dirty = true;
    let mut segments = Vec::new();

    loop {
        if is_key_pressed(KeyCode::M) {
            settings.mode = settings.mode.toggled();
            dirty = true;
        }
        if is_key_pressed(KeyCode::B) {
            settings.bound = settings.bound.toggled();
            dirty = true;
        }
        if is_key_pressed(KeyCode::T) {
            let tau = if settings.spill.tau() > 0.0 { 0.0 } else { 0.15 };
            settings.spill = SpillConfig::new().with_tau(tau);
            dirty = true;
        }
        if is_key_pressed(KeyCode::Up) {
            settings.max_depth += 1;
            dirty = true;
        }
        if is_key_pressed(KeyCode::Down) && settings.max_depth > 1 {
            settings.max_depth -= 1;
            dirty = true;
        }
        if is_key_pressed(KeyCode::R) {
            seed += 1;
            data = generate_skewed_cloud(POINT_COUNT, seed);
            dirty = true;
        }

        if dirty {
            let points: Vec<usize> = (0..data.ncols()).collect();
            segments = collect_splits(&data, &points, &settings);
            dirty = false;
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));

        let viewport = Viewport::fit(&data, 60.0);
        draw_segments(&segments, &viewport);
        draw_points(&data, &viewport);

        draw_text(
            &format!(
                "Splitter: {} | Bound: {} | tau: {:.2} | depth: {}",
                settings.mode.label(),
                settings.bound.label(),
                settings.spill.tau(),
                settings.max_depth
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("{} hyperplanes over {} points", segments.len(), data.ncols()),
            10.0,
            45.0,
            18.0,
            GRAY,
        );
        draw_text(
            "M: midpoint/mean  B: box/ball  T: toggle spill  Up/Down: depth  R: new cloud",
            10.0,
            screen_height() - 15.0,
            16.0,
            DARKGRAY,
        );

        next_frame().await
    }
}
