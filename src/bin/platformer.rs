//! Hello, Maps!

use arcade_demos::Settings;
use arcade_demos::demos::PlatformerDemo;
use arcade_demos::platform::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    if let Err(e) = run(PlatformerDemo::new(settings.platformer)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
