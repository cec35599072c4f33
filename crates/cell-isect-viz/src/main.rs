use cell_isect::{Cell, CellError, IntersectKernel};
use cell_isect_viz::{OrbitCamera, cell_color, draw_cell, pick};
use log::{error, info};
use macroquad::prelude::*;
use nalgebra::Point3;

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

/// Builds a scene with one cell of most kinds, laid out along the x axis.
fn generate_scene() -> Result<Vec<Cell>, CellError> {
    let unit_cube: Vec<Point3<f64>> = (0..8)
        .map(|i| p((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
        .collect();
    let shifted = |dx: f64, points: &[Point3<f64>]| -> Vec<Point3<f64>> {
        points.iter().map(|q| p(q.x + dx, q.y, q.z)).collect()
    };

    Ok(vec![
        Cell::from_points(1, &[p(-4.0, 0.5, 0.5)])?,
        Cell::from_points(4, &[p(-3.5, 0.0, 0.0), p(-3.0, 1.0, 0.5), p(-3.5, 1.0, 1.0)])?,
        Cell::from_points(5, &[p(-2.5, 0.0, 0.0), p(-1.5, 0.0, 0.0), p(-2.0, 1.0, 0.5)])?,
        Cell::from_points(
            9,
            &[p(-1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 1.0), p(-1.0, 1.0, 0.0)],
        )?,
        Cell::from_points(11, &shifted(0.5, &unit_cube))?,
        Cell::from_points(
            10,
            &[p(2.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(2.0, 1.0, 0.0), p(2.0, 0.0, 1.0)],
        )?,
        Cell::from_points(
            14,
            &[
                p(3.5, 0.0, 0.0),
                p(4.5, 0.0, 0.0),
                p(4.5, 0.0, 1.0),
                p(3.5, 0.0, 1.0),
                p(4.0, 1.0, 0.5),
            ],
        )?,
        // floor
        Cell::from_points(
            7,
            &[
                p(-5.0, -2.0, -0.5),
                p(5.0, -2.0, -0.5),
                p(5.0, 2.0, -0.5),
                p(-5.0, 2.0, -0.5),
            ],
        )?,
    ])
}

#[macroquad::main("Cell Picking")]
async fn main() {
    env_logger::init();

    let cells = match generate_scene() {
        Ok(cells) => cells,
        Err(err) => {
            error!("failed to build scene: {err}");
            return;
        }
    };
    info!("scene has {} cells", cells.len());

    let mut kernel = IntersectKernel::new();
    let mut camera = OrbitCamera::new(9.0, -1.2, 0.5)
        .with_zoom(0.5, 2.0, 30.0)
        .with_target(vec3(0.0, 0.5, 0.5));
    let mut picked = None;

    loop {
        camera.update();

        if is_key_pressed(KeyCode::C) {
            kernel.set_test_coplanar(!kernel.test_coplanar());
            info!("coplanar testing: {}", kernel.test_coplanar());
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (p1, p2) = camera.pick_segment(mouse_position().into());
            picked = pick(&kernel, &cells, p1, p2);
            match &picked {
                Some(hit) => {
                    info!("picked cell {} ({:?}) at {}", hit.cell, cells[hit.cell].kind(), hit.hit.x)
                }
                None => info!("picked nothing"),
            }
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        for (index, cell) in cells.iter().enumerate() {
            let highlighted = picked.is_some_and(|hit| hit.cell == index);
            draw_cell(cell, if highlighted { YELLOW } else { cell_color(cell) });
        }
        if let Some(hit) = picked {
            let x = hit.hit.x;
            draw_sphere(vec3(x.x as f32, x.y as f32, x.z as f32), 0.04, None, RED);
        }

        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0), BLUE);

        set_default_camera();

        draw_text("Cell Picking", 10.0, 25.0, 20.0, WHITE);
        let status = match picked {
            Some(hit) => format!(
                "Picked cell {} ({:?}), squared distance {:.3}",
                hit.cell,
                cells[hit.cell].kind(),
                hit.hit.t
            ),
            None => "Click a cell to pick it".to_string(),
        };
        draw_text(&status, 10.0, 45.0, 18.0, GRAY);
        draw_text("Right-drag orbits, middle-drag pans, R resets, C toggles coplanar testing", 10.0, 65.0, 16.0, DARKGRAY);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 85.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
