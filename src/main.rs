fn main() {
    if let Err(err) = sankey_layout::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
