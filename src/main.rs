//! CLI entry point for replaying conveyor placements on a grid

use beltgrid::io::cli::{Cli, Session, init_logging};
use clap::Parser;

fn main() -> beltgrid::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let session = Session::new(cli);
    session.run()
}
