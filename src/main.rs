use log::error;
use redblack::{args::get_args, driver::run};

fn main() {
    pretty_env_logger::init();

    let args = get_args();
    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        error!("Failed to run: {}", e);
        std::process::exit(1);
    }
}
