use costgrid::{weighted_distance_transform, CostQueue, Image, UnitCost};
use std::error::Error;

#[derive(serde::Serialize)]
struct FieldDump {
    width: usize,
    height: usize,
    cost: Vec<f32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <width> <height> [out.json]", args[0]);
        std::process::exit(2);
    }

    let w: usize = args[1].parse()?;
    let h: usize = args[2].parse()?;

    // Two synthetic touch blobs; the thresholded heatmap is the foreground.
    let sigma = 0.08 * w.min(h) as f32;
    let blobs = [
        (w as f32 * 0.3, h as f32 * 0.35),
        (w as f32 * 0.7, h as f32 * 0.65),
    ];
    let heat = Image::from_fn(w, h, |x, y| {
        let mut v = 0.0f32;
        for &(cx, cy) in &blobs {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            v += (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp();
        }
        v
    });
    let fg: Vec<bool> = heat.as_slice().iter().map(|&v| v > 0.5).collect();

    let mut out = Image::<f32>::new(w, h);
    let mut queue = CostQueue::new();
    weighted_distance_transform::<8, _, _, _, _>(
        &mut out,
        &|i| fg[i],
        &|_| true,
        &UnitCost,
        &mut queue,
        f32::INFINITY,
    );

    let max = out
        .as_slice()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0f32, f32::max);
    println!(
        "{}x{} field, {} foreground pixels, max cost {:.2}",
        w,
        h,
        fg.iter().filter(|&&b| b).count(),
        max
    );

    // Compact rendering, darkest at the contacts.
    let ramp = ['#', '@', '+', '-', '.', ' '];
    for y in 0..h {
        let mut line = String::with_capacity(w);
        for x in 0..w {
            let v = out.get(x, y);
            let ch = if v == 0.0 {
                ramp[0]
            } else if !v.is_finite() {
                ramp[5]
            } else {
                ramp[1 + ((v / max) * 3.999) as usize]
            };
            line.push(ch);
        }
        println!("{line}");
    }

    if let Some(path) = args.get(3) {
        let dump = FieldDump {
            width: w,
            height: h,
            cost: out.as_slice().to_vec(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&dump)?)?;
        println!("Wrote {path}");
    }
    Ok(())
}
