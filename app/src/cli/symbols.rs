use std::path::PathBuf;

use gobstones_lang_driver::{Unit, symbol_listing};

#[derive(clap::Args)]
pub struct Args {
    /// Syntax tree serialized as JSON
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
}

pub fn exec(cmd: Args) -> Result<(), Vec<miette::Report>> {
    let unit = Unit::load(&cmd.filepath, None).map_err(|err| vec![miette::Report::new(err)])?;
    let symbol_table = unit.lint().map_err(|err| vec![unit.pretty_error(err)])?;
    print!("{}", symbol_listing(&symbol_table));
    Ok(())
}
