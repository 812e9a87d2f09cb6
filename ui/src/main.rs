use clap::Parser;
use moivon::app::model::Model;
use moivon::components::common::ComponentId;
use moivon::{config, logger};
use moivon_client::api::prepare_public_folder;
use tuirealm::application::PollStrategy;
use tuirealm::{AttrValue, Attribute, Update};

#[derive(Parser, Debug)]
#[command(name = "moivon", about = "Terminal front-end for the Moivon events platform")]
struct Args {
    /// Path to an alternative config file
    #[arg(short, long)]
    config: Option<String>,

    /// Log at debug level regardless of configuration
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Some(path) = args.config {
        config::set_config_path(path);
    }
    if args.verbose {
        unsafe { std::env::set_var("MOIVON__LOGGING__LEVEL", "debug") };
    }

    let app_config = config::get_config_or_panic();
    logger::setup_logger()?;

    log::info!(
        "Branding assets served from {}",
        prepare_public_folder(
            app_config.api().public_base_url(),
            moivon::constants::LOGO_ASSET_PATH
        )
    );

    let mut model = Model::new_crossterm()?;

    // Enter alternate screen
    let _ = model.terminal.enter_alternate_screen();
    let _ = model.terminal.enable_raw_mode();

    // Main loop
    while !model.quit {
        // Messages from background tasks (login attempts, notification timers)
        model.update_outside_msg();

        // Tick
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                let _ = model.app.attr(
                    &ComponentId::Header,
                    Attribute::Text,
                    AttrValue::String(format!("Application error: {err}")),
                );
            }
            Ok(messages) if !messages.is_empty() => {
                // NOTE: redraw if at least one msg has been processed
                model.redraw = true;
                for msg in messages.into_iter() {
                    let mut msg = Some(msg);
                    while msg.is_some() {
                        msg = model.update(msg);
                    }
                }
            }
            _ => {}
        }
        // Redraw
        if model.redraw {
            if let Err(e) = model.view() {
                log::error!("View error: {e}");
            }
            model.redraw = false;
        }
    }
    // Terminate terminal
    let _ = model.terminal.leave_alternate_screen();
    let _ = model.terminal.disable_raw_mode();
    let _ = model.terminal.clear_screen();
    Ok(())
}
