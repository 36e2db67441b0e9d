//! Print SVG previews of a bubble with each arrow direction.
//!
//! Run with `RUST_LOG=bubblegeom=debug` to see the resolved geometry.

use bubblegeom::{ArrowDirection, ArrowPosPolicy, BubbleStyle, Color, render_bubble};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(160.0);

    for direction in [
        ArrowDirection::None,
        ArrowDirection::Left,
        ArrowDirection::Up,
        ArrowDirection::Right,
        ArrowDirection::Down,
    ] {
        let style = BubbleStyle::builder()
            .arrow_direction(direction)
            .arrow_pos_policy(ArrowPosPolicy::SelfBegin)
            .arrow_pos_delta(24.0)
            .arrow_height(10.0)
            .arrow_width(16.0)
            .corner_radius(8.0)
            .border_width(2.0)
            .fill_padding(1.0)
            .border_color(Color::argb(0xFF, 0x33, 0x66, 0xCC))
            .build();

        tracing::info!(%direction, width, "rendering preview");
        match render_bubble(&style, width, 64.0) {
            Ok(svg) => println!("<!-- {direction} -->\n{svg}"),
            Err(e) => eprintln!("{:?}", miette::Report::new(e)),
        }
    }
}
