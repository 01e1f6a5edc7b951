fn main() {
    if let Err(err) = prochain_train::app::run_host() {
        eprintln!("widget host startup failed: {err}");
        std::process::exit(1);
    }
}
