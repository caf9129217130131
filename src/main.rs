fn main() {
    if let Err(err) = record_mapper::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
