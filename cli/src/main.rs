mod commands;
mod terminal;

use aula_common::config::Config;
use commands::{CommandLine, Commands, demo, shell};
use terminal::{input::TerminalInput, logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init(&cfg)?;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            print::header("gestión académica", cfg.quiet);
            shell::shell(&mut TerminalInput::new(), &cfg)
        }
        Commands::Demo => {
            print::header("datos de ejemplo", cfg.quiet);
            demo::demo(&cfg)
        }
    }
}
