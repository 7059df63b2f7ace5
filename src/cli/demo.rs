//! Routes registered by the demo binary

use crate::context::Context;
use crate::router::{Router, with_description, with_full_pattern, with_help};
use serde_json::{Value, json};

/// Shared dependencies handed to every demo handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub app_name: String,
    pub users: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            app_name: "cmdrouter".to_string(),
            users: vec!["alice".to_string(), "bob".to_string()],
        }
    }
}

pub fn demo_router(router: &mut Router<AppState>) -> &mut Router<AppState> {
    router
        .register(
            "^hello$",
            hello,
            [
                with_description("Greets the caller"),
                with_help("hello [--name=NAME]"),
            ],
        )
        .register(
            "^users$",
            users,
            [
                with_description("Lists known users"),
                with_help("users [--limit=N]"),
                with_full_pattern("^users list$"),
            ],
        )
        .register(
            "^echo( .+)?$",
            echo,
            [with_description("Repeats the words after echo")],
        )
        .register(
            "^version$",
            version,
            [with_description("Prints the application version")],
        )
        .reserve("^todo$", [with_description("Not implemented yet")])
}

fn hello(ctx: &Context<'_, AppState>) -> anyhow::Result<Value> {
    let name = ctx.param("name").unwrap_or_else(|| "World".to_string());
    Ok(json!(format!("Hello {}!", name)))
}

fn users(ctx: &Context<'_, AppState>) -> anyhow::Result<Value> {
    let users = &ctx.container().users;
    let limit = match ctx.param("limit") {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("--limit expects a number, got '{}'", raw))?,
        None => users.len(),
    };
    Ok(json!(users.iter().take(limit).collect::<Vec<_>>()))
}

fn echo(ctx: &Context<'_, AppState>) -> anyhow::Result<Value> {
    let words: Vec<String> = ctx
        .request()
        .segments()
        .first()
        .map(|seg| seg.trailing().into_iter().map(str::to_string).collect())
        .unwrap_or_default();
    Ok(json!(words.join(" ")))
}

fn version(ctx: &Context<'_, AppState>) -> anyhow::Result<Value> {
    Ok(json!(format!(
        "{} {}",
        ctx.container().app_name,
        env!("CARGO_PKG_VERSION")
    )))
}
