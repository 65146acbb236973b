use pkgdraw::{draw_package, DisplayList, OutlineDb, Rect};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let cell = Rect::new(0.0, 0.0, 200.0, 120.0);

    println!("{:<16} {:<18} {:>5} {:>7}  bounds", "package", "family", "ops", "painted");
    for outline in OutlineDb::shared().outlines() {
        let Some(family) = outline.family else {
            continue;
        };

        let mut list = DisplayList::new();
        draw_package(&mut list, cell, outline.id, None);

        let bounds = list
            .bounds()
            .map_or_else(|| "(empty)".to_string(), |b| b.to_string());
        println!(
            "{:<16} {:<18} {:>5} {:>7}  {bounds}",
            outline.id,
            family.id(),
            list.len(),
            list.paint_count()
        );
    }
}
