//! govpherd - GOV.UK pages served as Gopher menus

mod api;
mod serve;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use govpher::{selector, JsonFormat, MenuRenderer, ParserRegistry, RenderOptions};

use api::{GovukClient, DEFAULT_CONTENT_API, DEFAULT_SEARCH_API};

#[derive(Parser)]
#[command(name = "govpherd")]
#[command(version)]
#[command(about = "Serve GOV.UK pages as Gopher menus", long_about = None)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "IP", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 70)]
    port: u16,

    #[command(flatten)]
    rendering: RenderArgs,
}

#[derive(Args, Clone)]
struct RenderArgs {
    /// Wrap column for menu text
    #[arg(long, default_value_t = govpher::render::DEFAULT_WIDTH)]
    width: usize,

    /// Content API endpoint
    #[arg(long, env = "CONTENT_API", default_value = DEFAULT_CONTENT_API)]
    content_api: String,

    /// Search API endpoint
    #[arg(long, env = "SEARCH_API", default_value = DEFAULT_SEARCH_API)]
    search_api: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve Gopher requests until interrupted
    Serve {
        #[command(flatten)]
        args: ServeArgs,
    },

    /// Fetch and render one path to stdout, then exit
    Render {
        /// GOV.UK path to render
        #[arg(value_name = "PATH")]
        path: String,

        /// Emit the normalized document as JSON instead of a menu
        #[arg(long)]
        json: bool,

        /// Hostname written into menu lines
        #[arg(long, default_value = "localhost")]
        hostname: String,

        /// Port written into menu lines
        #[arg(short, long, default_value_t = 70)]
        port: u16,

        #[command(flatten)]
        rendering: RenderArgs,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Serve { args }) => serve::run(&args),
        Some(Commands::Render {
            path,
            json,
            hostname,
            port,
            rendering,
        }) => cmd_render(&path, json, &hostname, port, &rendering),
        None => serve::run(&cli.serve),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_render(
    path: &str,
    json: bool,
    hostname: &str,
    port: u16,
    rendering: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !selector::is_valid_base_path(path) {
        return Err(format!("not a GOV.UK path: {path}").into());
    }

    let client = GovukClient::new(&rendering.content_api, &rendering.search_api)?;
    let raw = client.fetch_content(path)?;
    let document = ParserRegistry::with_defaults().parse(&raw, &client)?;

    let output = if json {
        govpher::render::to_json(&document, JsonFormat::Pretty)?
    } else {
        let options = RenderOptions::new(hostname, port).with_width(rendering.width);
        MenuRenderer::new(options).render(&document)?
    };

    println!("{output}");
    Ok(())
}
