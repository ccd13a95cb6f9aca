mod listing;
mod load;
mod render_reports;
mod report;
mod result;
mod unit;

pub use termcolor::ColorChoice;

pub use listing::*;
pub use load::*;
pub use render_reports::*;
pub use report::*;
pub use result::*;
pub use unit::*;
