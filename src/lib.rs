pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod live;
pub mod profile;
pub mod projection;
pub mod screens;
pub mod store;
pub mod views;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::screens::{
    HomeScreen, LiveScreen, ProfileScreen, RankingsScreen, TournamentDetailsScreen, TournamentsScreen,
};
use crate::store::DataSource;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::FormatDate { raw } => handle_format_date(raw),
        Command::Completions { shell } => handle_completions(*shell),
        command => {
            let config = AppConfig::new().with_data_dir(cli.data_dir.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handle_screen(command, &config))
        }
    }
}

pub fn handle_format_date(raw: &str) -> Result<()> {
    let formatted = formatting::normalize(raw)?;
    println!("{}", formatted);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

async fn handle_screen(command: &Command, config: &AppConfig) -> Result<()> {
    let source = DataSource::from_settings(&config.data);

    match command {
        Command::Home => print_json(&HomeScreen::load(&source).await.view()),
        Command::Rankings => print_json(&RankingsScreen::load(&source).await.view()),
        Command::Tournaments => print_json(&TournamentsScreen::load(&source).await.view()),
        Command::Tournament { id } => print_json(&TournamentDetailsScreen::load(&source, *id).await.view()),
        Command::Join { id } => {
            let notice = TournamentsScreen::load(&source).await.join(*id)?;
            println!("{}", notice);
            Ok(())
        }
        Command::Live => print_json(&LiveScreen::load(&source, &config.live).await.view()),
        Command::GoLive {
            tournament,
            player1,
            player2,
            url,
        } => {
            let mut screen = LiveScreen::load(&source, &config.live).await;
            screen.start_draft();

            let builder = screen.builder_mut();
            if let Some(name) = tournament {
                builder.select_tournament(name)?;
            }
            builder.set_player1(player1)?;
            builder.set_player2(player2)?;
            builder.set_url(url)?;

            let today = chrono::Local::now().date_naive();
            screen
                .submit_draft(today)
                .map_err(|e| anyhow!("{}: {}", e.title(), e))?;
            print_json(&screen.view())
        }
        Command::Profile => print_json(&ProfileScreen::load(&source).await.view()),
        Command::EditProfile {
            first_name,
            last_name,
        } => {
            let mut screen = ProfileScreen::load(&source).await;
            let editor = screen.edit();
            if let Some(first_name) = first_name {
                editor.first_name = first_name.clone();
            }
            if let Some(last_name) = last_name {
                editor.last_name = last_name.clone();
            }
            screen.save_edit();
            print_json(&screen.view())
        }
        Command::FormatDate { .. } | Command::Completions { .. } => Ok(()),
    }
}

fn print_json<T: Serialize>(view: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(view).context("Failed to serialize view")?;
    println!("{}", json);
    Ok(())
}
