use std::{env, path::Path, process, time::Instant};

use log::{error, info};
use mandelbrot_dp::{
    config::{NUM_THREADS, OUTPUT_FILE, USAGE},
    render, save_framebuffer, verify_identical, FractalError, Mode, RenderConfig, Schedule,
};

fn run(config: RenderConfig) -> mandelbrot_dp::Result<()> {
    let raster = config.raster;
    let view = config.viewport;
    info!(
        "rendering {}x{} over x:[{}, {}] y:[{}, {}] with {} iterations",
        raster.width,
        raster.height,
        view.min_x,
        view.max_x,
        view.min_y,
        view.max_y,
        config.max_iterations
    );

    let start = Instant::now();
    let serial = render(&config, Mode::Serial)?;
    let serial_time = start.elapsed();
    info!("serial: {:.2?}", serial_time);

    let start = Instant::now();
    let parallel = render(
        &config,
        Mode::Parallel {
            workers: NUM_THREADS,
            schedule: Schedule::Static,
        },
    )?;
    let parallel_time = start.elapsed();
    info!("parallel ({NUM_THREADS} threads): {:.2?}", parallel_time);
    info!(
        "speed-up: {:.2}x",
        serial_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON)
    );

    verify_identical(&serial, &parallel)?;

    save_framebuffer(&parallel, raster, Path::new(OUTPUT_FILE))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match RenderConfig::from_args(&args) {
        Ok(config) => config,
        Err(FractalError::Usage { .. }) => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        error!("{e}");
        process::exit(1);
    }
}
