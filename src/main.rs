//! pullr binary entry point.

fn main() {
    let code = match pullr::cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            1
        }
    };
    std::process::exit(code);
}
