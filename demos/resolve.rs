fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut keys: Vec<String> = std::env::args().skip(1).collect();
    if keys.is_empty() {
        keys = ["DO-35", "TO-220-5", "SOT-23-5", "TO-3", "MELF@blue", "UNKNOWNPKG123"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    for key in &keys {
        match pkgdraw::resolve(key) {
            Some(pkg) => {
                let family = pkg.family.map_or("catalogue-only", |f| f.id());
                println!(
                    "{key}  ->  {}  (prints {:?}, family {family})",
                    pkg.canonical_id, pkg.print_id
                );
                for (name, value) in &pkg.params {
                    println!("    {name} = {value:?}");
                }
            }
            None => println!("{key}  ->  not found"),
        }
    }
}
