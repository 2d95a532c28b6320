use history_splitter::cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("history-splitter error: {:#}", err);
        std::process::exit(1);
    }
}
