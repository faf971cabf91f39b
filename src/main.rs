use minimax::cli::commands::Command;
use minimax::cli::Minimax;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Minimax::from_args().execute();
}
