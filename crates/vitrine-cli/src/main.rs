// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Vitrine i18n command-line tool.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use vitrine_common_i18n::{FsTranslationSource, MessageLoader};

mod commands;
mod logging;

use commands::RequestArgs;

/// Resolve locales and inspect translated messages the way the site does.
#[derive(Parser, Debug)]
#[command(name = "vitrine", about = "Vitrine locale and message tooling", version)]
struct Args {
	/// Config file (defaults to /etc/vitrine/server.toml)
	#[arg(long, global = true, env = "VITRINE_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the locale a request would be served in
	Resolve(RequestArgs),
	/// Load every namespace for a request and print them as JSON
	Messages(RequestArgs),
	/// Print a single message, e.g. `home.hero.title`
	Translate {
		key: String,
		#[command(flatten)]
		request: RequestArgs,
	},
	/// List supported locales and namespaces
	Locales,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => vitrine_server_config::load_config_with_file(path)?,
		None => vitrine_server_config::load_config()?,
	};

	logging::init(&config.logging)?;

	let loader = MessageLoader::new(
		config.i18n.locales.clone(),
		Arc::new(FsTranslationSource::new(&config.i18n.messages_dir)),
	);
	let policy = config.i18n.failure_policy();

	tracing::debug!(
		messages_dir = %config.i18n.messages_dir.display(),
		?policy,
		"message loader ready"
	);

	match args.command {
		Command::Resolve(request) => {
			println!("{}", commands::resolve_report(loader.config(), &request));
		}
		Command::Messages(request) => {
			let json = commands::messages(&loader, &request, policy).await?;
			println!("{}", serde_json::to_string_pretty(&json)?);
		}
		Command::Translate { key, request } => {
			println!("{}", commands::translate(&loader, &request, &key, policy).await?);
		}
		Command::Locales => {
			print!("{}", commands::locales(loader.config()));
		}
	}

	Ok(())
}
