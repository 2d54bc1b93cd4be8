use mandelbrot_dp::{
    fractals::{escape_time, normalize, Escape},
    render, save_framebuffer, Color, FractalError, Mode, Raster, RenderConfig, Schedule,
    Viewport,
};
use num::Complex;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn default_view(width: u32, height: u32, iterations: u32) -> RenderConfig {
    RenderConfig::new(
        Raster::new(width, height).unwrap(),
        Viewport::default(),
        iterations,
    )
    .unwrap()
}

#[test]
fn random_viewports_render_identically_in_parallel() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..12 {
        let min_x = rng.gen_range(-2.5f32..0.0);
        let min_y = rng.gen_range(-1.5f32..0.0);
        let viewport = Viewport::new(
            min_x,
            min_x + rng.gen_range(0.01f32..3.0),
            min_y,
            min_y + rng.gen_range(0.01f32..2.0),
        )
        .unwrap();
        let raster = Raster::new(rng.gen_range(1..48), rng.gen_range(1..48)).unwrap();
        let config = RenderConfig::new(raster, viewport, rng.gen_range(1..200)).unwrap();

        let serial = render(&config, Mode::Serial).unwrap();
        let workers = rng.gen_range(1..9);
        for schedule in [Schedule::Static, Schedule::Rows] {
            let parallel = render(&config, Mode::Parallel { workers, schedule }).unwrap();
            assert_eq!(serial, parallel, "{config:?} workers={workers} {schedule:?}");
        }
    }
}

#[test]
fn bounded_pixels_are_black_and_escaped_are_not() {
    let config = default_view(60, 40, 80);
    let buffer = render(&config, Mode::Serial).unwrap();
    assert_eq!(buffer.len(), 60 * 40 * 3);

    for y in 0..40 {
        for x in 0..60 {
            let c = Complex::new(normalize(x, 60, -2.0, 1.0), normalize(y, 40, -1.0, 1.0));
            let i = ((y * 60 + x) * 3) as usize;
            let color = Color::new(buffer[i], buffer[i + 1], buffer[i + 2]);
            match escape_time(c, 80) {
                Escape::Bounded => assert_eq!(color, Color::BLACK),
                Escape::Diverged(n) => {
                    assert!(n < 80);
                    assert_ne!(color, Color::BLACK);
                }
            }
        }
    }
}

#[test]
fn tga_round_trips_through_image() {
    let config = default_view(32, 20, 50);
    let buffer = render(
        &config,
        Mode::Parallel {
            workers: 4,
            schedule: Schedule::Static,
        },
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.tga");
    save_framebuffer(&buffer, config.raster, &path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(loaded.dimensions(), (32, 20));
    assert_eq!(loaded.into_raw(), buffer);
}

#[test]
fn png_output_is_picked_by_extension() {
    let config = default_view(8, 8, 10);
    let buffer = render(&config, Mode::Serial).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    save_framebuffer(&buffer, config.raster, &path).unwrap();

    assert_eq!(
        image::ImageFormat::from_path(&path).unwrap(),
        image::ImageFormat::Png
    );
    assert_eq!(image::open(&path).unwrap().to_rgb8().into_raw(), buffer);
}

#[test]
fn mismatched_buffer_is_a_size_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = save_framebuffer(
        &[0; 9],
        Raster::new(2, 2).unwrap(),
        &dir.path().join("x.tga"),
    )
    .unwrap_err();
    assert!(matches!(err, FractalError::BufferSize { expected: 12, actual: 9 }));
}
