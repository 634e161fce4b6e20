use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "surfer", version, about = "Quick HTTP servers for toy applications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a toy application server
    Start {
        /// Which application to serve
        #[arg(value_enum)]
        app_type: AppType,

        /// Port to listen on (defaults to SURFER_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppType {
    Todolist,
}

impl AppType {
    pub fn name(self) -> &'static str {
        match self {
            AppType::Todolist => "todolist",
        }
    }
}
