mod config;
mod grid;
mod renderer;
mod solver;
mod state;

use std::time::{Duration, Instant};

use log::{debug, info};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use renderer::Renderer;
use solver::{diagnostics, FlowSolver};
use state::SimState;

const LOG_EVERY_STEPS: usize = 100;

fn main() {
    env_logger::init();

    let cfg = config::load_default();
    let grid = cfg.grid();
    let params = cfg.solver_params();
    let solver = FlowSolver::new(grid, params.clone());
    let mut state = SimState::new(solver.grid(), &params);

    info!(
        "caldarium: {}x{} grid over {}x{}, dt={}, {} projection iterations",
        grid.nx(),
        grid.ny(),
        grid.lx(),
        grid.ly(),
        params.dt,
        params.proj_iter,
    );

    let mut renderer = Renderer::new(
        cfg.display.width,
        cfg.display.height,
        cfg.display.scale_max,
        cfg.display.ticks,
    );
    let (w, h) = (renderer.width(), renderer.height());

    let mut window = Window::new("caldarium", w, h, WindowOptions::default())
        .expect("Failed to create window");
    window.set_target_fps(cfg.display.target_fps);

    let mut paused = false;
    let mut last_logged = 0usize;
    let mut frame_count = 0u32;
    let mut last_fps_time = Instant::now();

    while window.is_open() {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No) {
            break;
        }
        if window.is_key_pressed(Key::Space, KeyRepeat::No) {
            paused = !paused;
        }
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            state = SimState::new(solver.grid(), &params);
            last_logged = 0;
            info!("reset to initial state");
        }

        if !paused {
            for _ in 0..cfg.display.steps_per_frame {
                if cfg.max_steps != 0 && state.step_count >= cfg.max_steps {
                    paused = true;
                    info!("reached max_steps={}, pausing", cfg.max_steps);
                    break;
                }
                state.advance(&solver);
            }
            if state.step_count >= last_logged + LOG_EVERY_STEPS {
                last_logged = state.step_count;
                debug!(
                    "step {}: |div| {:.3e}, max speed {:.3}, mean Q {:.3}",
                    state.step_count,
                    diagnostics::divergence_l1(solver.grid(), &state.u, &state.v),
                    diagnostics::max_speed(&state.u, &state.v),
                    diagnostics::field_mean(&state.q),
                );
            }
        }

        let frame = renderer.draw(solver.grid(), &state.q, &state.u, &state.v);
        window.update_with_buffer(frame, w, h).unwrap();

        frame_count += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            window.set_title(&format!("caldarium — step {} — {} fps", state.step_count, frame_count));
            frame_count = 0;
            last_fps_time = now;
        }
    }
}
