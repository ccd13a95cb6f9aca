use std::process::ExitCode;

use gobstones_lang_driver::render_reports_io;

mod cli;
mod global_settings;

use global_settings::GlobalSettings;

fn main() -> ExitCode {
    let settings = GlobalSettings::from_env();
    env_logger::builder().filter_level(settings.log_level).format_timestamp(None).init();

    match cli::exec() {
        Ok(()) => ExitCode::SUCCESS,
        Err(reports) => {
            if let Err(err) = render_reports_io(&mut std::io::stderr(), &reports, settings.colorize)
            {
                log::error!("Failed to render diagnostics: {err}");
            }
            ExitCode::FAILURE
        }
    }
}
