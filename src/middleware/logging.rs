//! Command logging hooks

use std::time::Instant;

use tracing::info;

use crate::state::Context;

/// Record the start of a command invocation
pub async fn pre_command(ctx: Context<'_>) {
    ctx.set_invocation_data(Instant::now()).await;

    info!(
        command = %ctx.command().qualified_name,
        user = %ctx.author().id,
        guild = ?ctx.guild_id(),
        "Command invoked"
    );
}

/// Log a successfully completed command with its duration.
///
/// Failed commands are logged by the error hook instead.
pub async fn post_command(ctx: Context<'_>) {
    let duration_ms = match ctx.invocation_data::<Instant>().await {
        Some(start) => start.elapsed().as_secs_f64() * 1000.0,
        None => 0.0,
    };

    info!(
        command = %ctx.command().qualified_name,
        user = %ctx.author().id,
        duration_ms = %format!("{:.2}", duration_ms),
        "Command completed"
    );
}
