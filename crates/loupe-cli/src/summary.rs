use std::path::Path;

use console::Style;
use loupe_core::geometry::Rect;
use loupe_core::pixel::PixelBuffer;
use loupe_core::viewport::Viewport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn rect_text(r: Rect) -> String {
    format!("{}x{} at ({}, {})", r.width, r.height, r.x, r.y)
}

pub fn print_image_summary(path: &Path, image: &PixelBuffer) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", image.width(), image.height()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Format"),
        s.value.apply_to(image.format())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Stride"),
        s.value.apply_to(format!("{} bytes", image.stride()))
    );
    match image.palette() {
        Some(palette) => println!(
            "  {:<14}{}",
            s.label.apply_to("Palette"),
            s.value.apply_to(format!("{} entries", palette.len()))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Palette"),
            s.disabled.apply_to("none")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Memory"),
        s.value.apply_to(format!("{:.1} KB", image.data().len() as f64 / 1024.0))
    );
    println!();
}

pub fn print_render_summary(
    input: &Path,
    output: &Path,
    viewport: &Viewport,
    source: Rect,
    dest: Rect,
) {
    let s = Styles::new();
    let (ox, oy) = viewport.origin();
    let bars = viewport.scroll_bars();

    println!();
    println!("  {}", s.title.apply_to("View"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{}x", viewport.zoom()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Origin"),
        s.value.apply_to(format!("({ox}, {oy})"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.value.apply_to(rect_text(source))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Destination"),
        s.value.apply_to(rect_text(dest))
    );
    for (name, bar) in [("H scroll", bars.horizontal), ("V scroll", bars.vertical)] {
        if bar.enabled {
            println!(
                "  {:<14}{}",
                s.label.apply_to(name),
                s.value.apply_to(format!("{} / {}", bar.value, bar.maximum))
            );
        } else {
            println!(
                "  {:<14}{}",
                s.label.apply_to(name),
                s.disabled.apply_to("disabled")
            );
        }
    }
    println!();
}
