//! Client-Side Navigation Router (shell host)
//!
//! An interactive shell standing in for the embedding page: it owns the
//! event loop, forwards navigation commands to the router, and wires the
//! back/forward commands to reconciliation the way a page wires the
//! native history event.
//!
//! # Architecture Overview
//!
//! ```text
//!   shell command             router                      history
//!   ─────────────             ──────                      ───────
//!   go <url>        ───────▶  navigate  ───────────────▶  push
//!                             RouteChange token
//!                   ◀───────  (host answers with reconcile)
//!   back / forward  ─────────────────────────────────▶   cursor move
//!                             reconcile ───────────────▶  location
//!                             dedup → match → render view
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spa_router::config::loader::{load_routes, ConfigError};
use spa_router::{History, MemoryHistory, RouteChange, RouteContext, Router, RouterError};

#[derive(Parser, Debug)]
#[command(name = "spa-router")]
#[command(about = "Interactive shell for the navigation router", long_about = None)]
struct Args {
    /// Route table file (TOML); built-in demo pages when omitted.
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Location dispatched on startup.
    #[arg(short, long, default_value = "/")]
    start: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spa_router=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut router = Router::new(Box::new(MemoryHistory::starting_at(&args.start)));

    match &args.routes {
        Some(path) => {
            let config = match load_routes(path) {
                Ok(config) => config,
                Err(ConfigError::Validation(errors)) => {
                    for error in &errors {
                        tracing::error!(%error, "invalid route table entry");
                    }
                    return Err("route table validation failed".into());
                }
                Err(e) => return Err(e.into()),
            };

            tracing::info!(
                path = %path.display(),
                routes = config.routes.len(),
                "Route table loaded"
            );

            for route in &config.routes {
                let view = route.view.clone();
                router.add_route(&route.pattern, move |ctx| render(&view, &ctx))?;
            }
            if let Some(not_found) = &config.not_found {
                let view = not_found.view.clone();
                router.set_not_found(move || println!("[{}]", view));
            }
        }
        None => register_demo_pages(&mut router)?,
    }

    // Initial load funnels through the same dispatch path as navigation.
    router.reconcile();

    run_shell(&mut router)
}

fn register_demo_pages(router: &mut Router) -> Result<(), RouterError> {
    router
        .add_route("/", |ctx| render("home", &ctx))?
        .add_route("/posts", |ctx| render("posts", &ctx))?
        .add_route("/posts/:id", |ctx| render("post-detail", &ctx))?
        .add_route("/users", |ctx| render("users", &ctx))?;
    router.set_not_found(|| println!("[not-found] nothing to render here"));
    Ok(())
}

/// Stand-in for the rendering layer: prints the view with its context.
fn render(view: &str, ctx: &RouteContext) {
    println!("[{view}]");

    let mut params: Vec<_> = ctx.params.iter().collect();
    params.sort();
    for (name, value) in params {
        println!("  param {name} = {value}");
    }

    let mut query: Vec<_> = ctx.query.iter().collect();
    query.sort();
    for (key, value) in query {
        println!("  query {key} = {value}");
    }
}

fn run_shell(router: &mut Router) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("go"), Some(url)) => match router.navigate(url) {
                // The token is the route-changed event; the host answers
                // with a reconcile.
                Ok(RouteChange) => {
                    router.reconcile();
                }
                Err(e) => eprintln!("cannot navigate: {e}"),
            },
            (Some("back"), _) => {
                if router.history_mut().back() {
                    router.reconcile();
                } else {
                    println!("already at the oldest entry");
                }
            }
            (Some("forward"), _) => {
                if router.history_mut().forward() {
                    router.reconcile();
                } else {
                    println!("already at the newest entry");
                }
            }
            (Some("where"), _) => {
                let location = router.history().location();
                if location.query.is_empty() {
                    println!("{}", location.path);
                } else {
                    println!("{}?{}", location.path, location.query);
                }
            }
            (Some("quit") | Some("exit"), _) => break,
            (None, _) => {}
            _ => print_help(),
        }
    }

    Ok(())
}

fn print_help() {
    println!("commands: go <url> | back | forward | where | help | quit");
}
