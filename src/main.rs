fn main() {
    if let Err(err) = sgntrace::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
