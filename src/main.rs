//! ContestBot - Application Entry Point
//!
//! This is the main entry point for the contest bot.

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contestbot::{
    config::{CONFIG, LogFormat},
    error, handlers, middleware,
    sheets::{DisabledSheet, GoogleSheetsClient, MirrorWriter, RetryPolicy, SheetMirror},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.logging.rust_log.clone().into());
    match CONFIG.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Starting contest bot...");

    // Initialize spreadsheet mirror
    let sheet: Arc<dyn SheetMirror> = match GoogleSheetsClient::from_config(&CONFIG.sheets)? {
        Some(client) => {
            tracing::info!(
                sheet = %CONFIG.sheets.sheet_name,
                "Mirroring submissions to Google Sheets"
            );
            Arc::new(client)
        }
        None => {
            tracing::warn!("SHEETS_SPREADSHEET_ID not set, spreadsheet mirror disabled");
            Arc::new(DisabledSheet)
        }
    };
    let mirror = MirrorWriter::new(sheet, RetryPolicy::from_config(&CONFIG.sheets));

    // Create application state
    let state = AppState::new(mirror);
    let guild_id = CONFIG.discord.guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: handlers::commands(),
            on_error: |err| Box::pin(error::on_error(err)),
            pre_command: |ctx| Box::pin(middleware::pre_command(ctx)),
            post_command: |ctx| Box::pin(middleware::post_command(ctx)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                tracing::info!("Logged in as {}", ready.user.name);
                handlers::register_commands(ctx, &framework.options().commands, guild_id).await?;
                Ok(state)
            })
        })
        .build();

    // Slash commands and component interactions need no privileged intents
    let intents = serenity::GatewayIntents::GUILDS;

    let mut client = serenity::ClientBuilder::new(&CONFIG.discord.token, intents)
        .framework(framework)
        .await?;

    tracing::info!("Connecting to Discord gateway");

    client.start().await?;

    Ok(())
}
