//! Text stand-in for a renderer: subdivides the reference frame and prints
//! every line and area.
//!
//! Usage:
//! ```text
//! cargo run --example subdivide
//! RUST_LOG=lineareas=trace cargo run --example subdivide   # every walk step
//! ```

use lineareas::{Frame, Point, Result, Subdivision2D};

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<()> {
    // Default: WARN for everything, INFO for lineareas.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lineareas=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let frame = Frame::new(250, 250, 750, 750)?;
    let outer_points = vec![
        Point::new(frame.left(), frame.top()),
        Point::new(frame.left(), frame.bottom()),
    ];
    let inner_points = vec![Point::new(400, 500), Point::new(600, 500)];

    let arrangement = Subdivision2D::new(frame, outer_points, inner_points).execute()?;

    println!("{} lines", arrangement.lines.len());
    for line in &arrangement.lines {
        let points: Vec<String> = line.points().iter().map(ToString::to_string).collect();
        println!("  {}", points.join(" -> "));
    }

    println!("{} edges", arrangement.graph.len());

    println!("{} areas", arrangement.faces.len());
    for (i, face) in arrangement.faces.iter().enumerate() {
        let points: Vec<String> = face.polygon().iter().map(ToString::to_string).collect();
        println!(
            "  area {i} ({:?}, {:.1} px²): {}",
            face.rotation(),
            face.doubled_area().abs() as f64 / 2.0,
            points.join(" ")
        );
    }
    Ok(())
}
