use crate::config::AppConfig;
use crate::domain::inputs::SliderBounds;
use crate::domain::reference::ReferenceData;
use crate::model::ModelStore;
use crate::router::{handle, AppState};
use astra::Server;
use log::{error, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

mod config;
mod domain;
mod errors;
mod model;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read configuration from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    TermLogger::init(
        cfg.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    // 2️⃣ Build the lookup tables once
    let reference = match ReferenceData::london() {
        Ok(reference) => reference,
        Err(e) => {
            error!("Invalid reference data: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Load the model; a missing artifact is shown on the page, not fatal
    let state = AppState {
        reference,
        bounds: SliderBounds::default(),
        models: ModelStore::open(&cfg.model_path, cfg.reload_model),
        currency_symbol: cfg.currency_symbol.clone(),
    };

    // 4️⃣ Start the server
    info!("Starting server at http://{}", cfg.addr);

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            info!("Request failed: {err}");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
