use std::path::PathBuf;

use gobstones_lang_driver::Unit;

#[derive(clap::Args)]
pub struct Args {
    /// Syntax tree serialized as JSON
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
    /// Source text the syntax tree was parsed from, used to label diagnostics
    #[clap(long, value_name = "SRC")]
    source: Option<PathBuf>,
}

pub fn exec(cmd: Args) -> Result<(), Vec<miette::Report>> {
    let unit = Unit::load(&cmd.filepath, cmd.source.as_deref())
        .map_err(|err| vec![miette::Report::new(err)])?;
    unit.lint().map_err(|err| vec![unit.pretty_error(err)])?;
    println!("{} linted successfully!", cmd.filepath.display());
    Ok(())
}
