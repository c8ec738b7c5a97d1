fn main() {
    if let Err(err) = gridcols::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
