//! Blends between two colors and logs every step.
//!
//! ```text
//! cargo run --example gradient -- "cornflower blue" "#ff6347" 8
//! ```

use anyhow::Context;
use log::info;
use pufferfish_color::{palette, Color};

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    let mut args = std::env::args().skip(1);
    let from = args
        .next()
        .as_deref()
        .unwrap_or("midnight_blue")
        .parse::<Color>()
        .context("invalid start color")?;
    let to = args
        .next()
        .as_deref()
        .unwrap_or("gold")
        .parse::<Color>()
        .context("invalid end color")?;
    let steps: u32 = match args.next() {
        Some(s) => s.parse::<u32>().context("invalid step count")?,
        None => 10,
    };

    for i in 0..=steps {
        let t = if steps == 0 { 0. } else { i as f32 / steps as f32 };
        let c = from.lerp_precise(to, t);
        let rgba = c.to_packed();
        match palette::lookup_rgba32(rgba) {
            Some(named) => info!("{t:.3}  #{rgba:08x}  {}", named.display_name),
            None => info!("{t:.3}  #{rgba:08x}"),
        }
    }

    let dimmed = to * 0.5;
    info!("{:?} at half intensity is #{:08x}", to, dimmed.to_packed());

    Ok(())
}

fn setup_logging() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
}
