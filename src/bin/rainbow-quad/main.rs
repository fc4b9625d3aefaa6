use clap::Parser;

mod app;
mod args;

use app::App;
use args::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => {
            log::error!("setup failed: {e}");
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.capture {
        match app.capture(path) {
            Ok(true) => std::process::exit(0),
            Ok(false) => std::process::exit(1),
            Err(e) => {
                log::error!("capture failed: {e}");
                std::process::exit(1);
            }
        }
    }

    app.run();
}
