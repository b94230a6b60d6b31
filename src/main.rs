// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod app;
mod config;
mod ui;

use app::DashboardApp;
use clap::Parser;
use config::{AppConfig, BASE_URL_ENV};
use eframe::egui;
use log::{info, warn};
use registration_client::StatusClient;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const WINDOW_TITLE: &str = "Registration Requests";

/// Desktop dashboard for registration request status
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// API base URL (overrides the environment and the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Use light visuals regardless of the config file
    #[arg(long)]
    light: bool,

    /// Print the config file location and exit
    #[arg(long)]
    print_config_path: bool,

    /// Save the effective base URL to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.print_config_path {
        println!("{}", AppConfig::get_config_path()?.display());
        return Ok(());
    }

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Could not load config, using defaults: {}", e);
        AppConfig::default()
    });

    let env_base_url = std::env::var(BASE_URL_ENV).ok();
    let base_url = config.resolve_base_url(args.base_url.as_deref(), env_base_url.as_deref());

    if args.write_config {
        config.base_url = base_url;
        config.save()?;
        info!("Saved base URL {} to {}", config.base_url, AppConfig::get_config_path()?.display());
        return Ok(());
    }

    let client = StatusClient::new(&config.client_config(base_url))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("status-fetch")
        .enable_all()
        .build()?;

    let dark_mode = config.dark_mode && !args.light;

    info!("Starting registration dashboard...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 480.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, runtime, client, dark_mode)))),
    )?;

    Ok(())
}
