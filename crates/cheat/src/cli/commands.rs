use super::loader::load_library;
use super::render::{
    line_width, render_bookmark_groups, render_bookmark_keys, render_catalogs, render_config,
    render_messages, render_sections,
};
use super::setup::{Cli, Commands, OutputMode};
use super::styles::Palette;
use cheatapp::api::{CheatApi, CmdResult, ConfigAction};
use cheatapp::config::CheatConfig;
use cheatapp::error::Result;
use cheatapp::init::initialize;
use cheatapp::store::fs_backend::FsBackend;
use chrono::Utc;
use clap::Parser;
use tracing::Level;

struct AppContext {
    api: CheatApi<FsBackend>,
    config: CheatConfig,
    output: OutputMode,
    palette: Palette,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { catalog, query }) => handle_show(&ctx, &catalog, &query.join(" ")),
        Some(Commands::Search { catalog, query }) => {
            handle_show(&ctx, &catalog, &query.join(" "))
        }
        Some(Commands::Mark {
            catalog,
            section,
            title,
        }) => handle_mark(&mut ctx, &catalog, &section, &title.join(" ")),
        Some(Commands::Unmark { args }) => handle_unmark(&mut ctx, &args),
        Some(Commands::Bookmarks { catalog }) => handle_bookmarks(&ctx, catalog.as_deref()),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Doctor { fix }) => handle_doctor(&mut ctx, fix),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// Logs go to stderr: errors only by default, everything from debug with `-v`.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    let ctx = initialize(cli.data.clone(), cli.catalogs.clone(), load_library);

    AppContext {
        api: ctx.api,
        config: ctx.config,
        output: cli.output,
        palette: Palette::detect(),
    }
}

/// Prints `result` as JSON and returns true when JSON output was requested.
fn emit_json(ctx: &AppContext, result: &CmdResult) -> Result<bool> {
    if ctx.output != OutputMode::Json {
        return Ok(false);
    }
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(true)
}

fn print_messages(ctx: &AppContext, result: &CmdResult) {
    print!("{}", render_messages(&result.messages, &ctx.palette));
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.catalogs();
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    print!("{}", render_catalogs(&result.catalogs, &ctx.palette));
    print_messages(ctx, &result);
    Ok(())
}

fn handle_show(ctx: &AppContext, catalog: &str, query: &str) -> Result<()> {
    let result = ctx.api.search(catalog, query)?;
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    if let Some(summary) = &result.catalog {
        print!(
            "{}",
            render_sections(
                summary,
                &result.sections,
                result.query.as_deref(),
                ctx.config.show_code,
                &ctx.palette,
                line_width(),
            )
        );
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_mark(ctx: &mut AppContext, catalog: &str, section: &str, title: &str) -> Result<()> {
    let result = ctx.api.add_bookmark(catalog, section, title)?;
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_unmark(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let result = ctx.api.remove_bookmarks(args)?;
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_bookmarks(ctx: &AppContext, catalog: Option<&str>) -> Result<()> {
    let result = ctx.api.bookmarks(catalog);
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    print!(
        "{}",
        render_bookmark_groups(
            &result.bookmark_groups,
            &ctx.palette,
            line_width(),
            Utc::now()
        )
    );
    print_messages(ctx, &result);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear_bookmarks(yes);
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    if !yes {
        print!(
            "{}",
            render_bookmark_keys(&result.affected_bookmarks, &ctx.palette)
        );
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext, fix: bool) -> Result<()> {
    let result = ctx.api.doctor(fix);
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let is_show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if emit_json(ctx, &result)? {
        return Ok(());
    }
    if is_show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(ctx, &result);
    Ok(())
}
