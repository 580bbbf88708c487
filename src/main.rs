fn main() {
    if let Err(err) = workforce_stats::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
