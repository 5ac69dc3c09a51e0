fn main() {
    if let Err(err) = patchbay::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
