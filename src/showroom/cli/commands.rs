use super::logging::{init_logging, LogConfig};
use super::print::{
    print_categories, print_config, print_item, print_listing, print_messages, print_meta,
    print_routes,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use showroom::api::{RenderOptions, SiteApi};
use showroom::config::SiteConfig;
use showroom::error::{Result, ShowroomError};
use showroom::store::fs::JsonFileSource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

struct AppContext {
    api: SiteApi<JsonFileSource>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::List {
            kind,
            category,
            page,
        } => handle_list(&ctx, &kind, category.as_deref(), page),
        Commands::Categories { kind } => handle_categories(&ctx, &kind),
        Commands::View { kind, id } => handle_view(&ctx, &kind, &id),
        Commands::Render {
            location,
            category,
            page,
            select,
            out,
        } => {
            let options = RenderOptions {
                category,
                page,
                select,
            };
            handle_render(&ctx, &location, &options, out.as_deref())
        }
        Commands::Meta { location } => handle_meta(&ctx, &location),
        Commands::Routes => handle_routes(&ctx),
        Commands::Config => handle_config(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    debug!(dir = %config_dir.display(), "using config dir");

    let config = SiteConfig::load(&config_dir)?;
    let content_path = cli
        .content
        .clone()
        .unwrap_or_else(|| config.content_path(&config_dir));
    let source = JsonFileSource::open(content_path)?;

    Ok(AppContext {
        api: SiteApi::new(source, config),
    })
}

fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "danvion", "showroom")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShowroomError::Config("Could not determine config dir".to_string()))
}

fn handle_list(ctx: &AppContext, kind: &str, category: Option<&str>, page: usize) -> Result<()> {
    let result = ctx.api.list(kind, category, page)?;
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext, kind: &str) -> Result<()> {
    let result = ctx.api.categories(kind)?;
    print_categories(&result.categories);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, kind: &str, id: &str) -> Result<()> {
    let result = ctx.api.view(kind, id)?;
    if let Some(item) = &result.item {
        print_item(item);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_render(
    ctx: &AppContext,
    location: &str,
    options: &RenderOptions,
    out: Option<&Path>,
) -> Result<()> {
    let result = ctx.api.render(location, options)?;
    // Messages go to stderr so stdout stays a clean document
    for message in &result.messages {
        eprintln!("{}", message.content);
    }
    let html = result.html.unwrap_or_default();
    match out {
        Some(path) => {
            fs::write(path, &html).map_err(ShowroomError::Io)?;
            info!(path = %path.display(), "wrote document");
            println!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn handle_meta(ctx: &AppContext, location: &str) -> Result<()> {
    let result = ctx.api.meta(location)?;
    if let Some(meta) = &result.meta {
        print_meta(meta);
    }
    if let Some(head) = &result.html {
        println!();
        print!("{}", head);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_routes(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.routes()?;
    print_routes(&result.routes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config()?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
