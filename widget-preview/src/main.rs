fn main() {
    if let Err(err) = prochain_train::app::run_preview() {
        eprintln!("widget preview failed: {err}");
        std::process::exit(1);
    }
}
