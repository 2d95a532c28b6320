pub mod output;
pub mod run;

pub use output::{OutputFile, WriteOutcome, render_stub};
pub use run::split_history;
