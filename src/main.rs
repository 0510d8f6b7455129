use KcEquilibrium::Utils::logging::init_logging;
use KcEquilibrium::cli::cli_main::run_interactive_menu;
use KcEquilibrium::settings::{CONFIG_FILE, Settings};

pub fn main() {
    let settings = Settings::load_or_create(CONFIG_FILE);
    if let Err(e) = init_logging(&settings) {
        eprintln!("{}", e);
    }
    run_interactive_menu(&settings);
}
