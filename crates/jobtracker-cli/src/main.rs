// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use jobtracker_app::{
    AppState, ApplicationListView, ApplicationRecord, ApplicationStats, Route, format_short_date,
    today,
};
use jobtracker_store::{ApplicationStore, validate_seed_path};
use runtime::StoreRuntime;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use time::macros::format_description;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "jobtracker",
    about = "Track job applications from the terminal",
    version
)]
struct Cli {
    /// Use a specific config path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Print the resolved config path and exit
    #[arg(long)]
    print_config_path: bool,
    /// Print a v1 config template and exit
    #[arg(long)]
    print_example_config: bool,
    /// Load applications from a TOML seed file instead of the bundled samples
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,
    /// Print the application list and stats without starting the UI
    #[arg(long)]
    list: bool,
    /// Only list applications whose company contains TERM (case-insensitive)
    #[arg(long, value_name = "TERM", requires = "list")]
    search: Option<String>,
    /// Print the listing as JSON
    #[arg(long, requires = "list")]
    json: bool,
    /// Start on the dashboard instead of the sign-in screen
    #[arg(long)]
    skip_auth: bool,
    /// Validate config, seed file and logging, then exit
    #[arg(long)]
    check: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    if cli.print_config_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if cli.print_example_config {
        print!("{}", Config::example_config(&config_path));
        return Ok(());
    }

    let config = Config::load(&config_path).with_context(|| {
        format!(
            "load config {}; run `jobtracker --print-example-config` to generate a v1 template",
            config_path.display()
        )
    })?;

    let log_path = config.log_file()?;
    logging::init(config.log_level(), &log_path).with_context(|| {
        format!(
            "set up logging at {} -- set [log].file to a writable path",
            log_path.display()
        )
    })?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        "starting jobtracker"
    );

    let store = open_store(&cli, &config)?;
    let notification_ttl = config.notification_ttl()?;
    if cli.check {
        tracing::info!(records = store.len(), "check passed");
        return Ok(());
    }

    if cli.list {
        let view = store.view(cli.search.as_deref().unwrap_or(""));
        let output = if cli.json {
            render_listing_json(&view)?
        } else {
            render_listing_table(&view)
        };
        print!("{output}");
        return Ok(());
    }

    let mut state = initial_state(&cli, &config);
    let mut runtime = StoreRuntime::new(&store);
    jobtracker_tui::run_app(&mut state, &mut runtime, notification_ttl)
}

fn open_store(cli: &Cli, config: &Config) -> Result<ApplicationStore> {
    let Some(seed_path) = cli.seed.clone().or_else(|| config.seed_path()) else {
        tracing::info!("using bundled sample applications");
        return Ok(ApplicationStore::with_sample_data());
    };

    validate_seed_path(&seed_path.to_string_lossy())?;
    ApplicationStore::open_seed(&seed_path).with_context(|| {
        format!(
            "load applications from {} -- pass --seed with a valid file or fix [data].seed_path",
            seed_path.display()
        )
    })
}

fn initial_state(cli: &Cli, config: &Config) -> AppState {
    let mut state = AppState::new(today());
    state.route = if cli.skip_auth {
        Route::Dashboard
    } else {
        config.start_route()
    };
    state.sidebar_collapsed = config.sidebar_collapsed();
    state
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    search: &'a str,
    stats: ApplicationStats,
    applications: Vec<ListingRow<'a>>,
}

#[derive(Debug, Serialize)]
struct ListingRow<'a> {
    id: i64,
    company: &'a str,
    level: &'static str,
    applied_on: String,
    status: &'a str,
    recognized: bool,
}

impl<'a> ListingRow<'a> {
    fn from_record(record: &'a ApplicationRecord) -> Result<Self> {
        let applied_on = record
            .applied_on
            .format(format_description!("[year]-[month]-[day]"))
            .with_context(|| format!("format date of application {}", record.id))?;
        Ok(Self {
            id: record.id.get(),
            company: &record.company,
            level: record.level.label(),
            applied_on,
            status: record.status.label(),
            recognized: record.status.known().is_some(),
        })
    }
}

fn render_listing_json(view: &ApplicationListView<'_>) -> Result<String> {
    let listing = Listing {
        search: &view.search,
        stats: view.stats,
        applications: view
            .rows
            .iter()
            .map(|record| ListingRow::from_record(record))
            .collect::<Result<_>>()?,
    };
    let mut out = serde_json::to_string_pretty(&listing).context("serialize listing")?;
    out.push('\n');
    Ok(out)
}

fn render_listing_table(view: &ApplicationListView<'_>) -> String {
    let mut out = String::new();

    if let Some(empty_state) = view.empty_state() {
        let _ = writeln!(out, "{}", empty_state.title());
        let _ = writeln!(out, "{}", empty_state.hint());
    } else {
        let headers = ["Empresa", "Tipo", "Data", "Status"];
        let rows: Vec<[String; 4]> = view
            .rows
            .iter()
            .map(|record| {
                [
                    record.company.clone(),
                    record.level.label().to_owned(),
                    format_short_date(record.applied_on),
                    record.status.label().to_owned(),
                ]
            })
            .collect();

        let mut widths = headers.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_table_row(&mut out, &headers.map(str::to_owned), &widths);
        for row in &rows {
            write_table_row(&mut out, row, &widths);
        }
    }

    let stats = view.stats;
    let _ = write!(
        out,
        "\ntotal {} | aprovadas {} | pendentes {} | reprovadas {}",
        stats.total, stats.approved, stats.pending, stats.rejected
    );
    if stats.unrecognized > 0 {
        let _ = write!(out, " | sem categoria {}", stats.unrecognized);
    }
    out.push('\n');
    out
}

fn write_table_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::{
        Cli, initial_state, open_store, render_listing_json, render_listing_table,
    };
    use crate::config::Config;
    use anyhow::Result;
    use clap::Parser;
    use jobtracker_app::{ApplicationRecord, RecordStatus, Route};
    use jobtracker_store::ApplicationStore;
    use jobtracker_testkit::{ApplicationFaker, seed_toml, temp_seed_path};
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<Cli> {
        let mut argv = vec!["jobtracker"];
        argv.extend_from_slice(args);
        Ok(Cli::try_parse_from(argv)?)
    }

    #[test]
    fn no_arguments_yields_defaults() -> Result<()> {
        let cli = parse(&[])?;
        assert_eq!(
            cli,
            Cli {
                config: None,
                print_config_path: false,
                print_example_config: false,
                seed: None,
                list: false,
                search: None,
                json: false,
                skip_auth: false,
                check: false,
            }
        );
        Ok(())
    }

    #[test]
    fn config_and_seed_paths_are_captured() -> Result<()> {
        let cli = parse(&["--config", "/custom/config.toml", "--seed", "seed.toml"])?;
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.seed, Some(PathBuf::from("seed.toml")));
        Ok(())
    }

    #[test]
    fn missing_config_value_is_an_error() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert!(parse(&["--wat"]).is_err());
    }

    #[test]
    fn search_and_json_require_list() -> Result<()> {
        assert!(parse(&["--search", "goo"]).is_err());
        assert!(parse(&["--json"]).is_err());

        let cli = parse(&["--list", "--search", "goo", "--json"])?;
        assert!(cli.list);
        assert!(cli.json);
        assert_eq!(cli.search.as_deref(), Some("goo"));
        Ok(())
    }

    #[test]
    fn print_and_check_flags_parse_together() -> Result<()> {
        let cli = parse(&["--print-config-path", "--print-example-config", "--check"])?;
        assert!(cli.print_config_path);
        assert!(cli.print_example_config);
        assert!(cli.check);
        assert!(!cli.skip_auth);
        Ok(())
    }

    #[test]
    fn initial_state_follows_config_unless_auth_is_skipped() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "version = 1\n[ui]\nstart_route = \"/candidatura\"\nsidebar_collapsed = true\n",
        )?;
        let config = Config::load(&path)?;

        let state = initial_state(&parse(&[])?, &config);
        assert_eq!(state.route, Route::NewApplication);
        assert!(state.sidebar_collapsed);

        let state = initial_state(&parse(&["--skip-auth"])?, &config);
        assert_eq!(state.route, Route::Dashboard);

        let state = initial_state(&parse(&[])?, &Config::default());
        assert_eq!(state.route, Route::Auth);
        Ok(())
    }

    #[test]
    fn open_store_defaults_to_samples() -> Result<()> {
        let store = open_store(&parse(&[])?, &Config::default())?;
        assert_eq!(store, ApplicationStore::with_sample_data());
        Ok(())
    }

    #[test]
    fn seed_flag_wins_over_config_seed_path() -> Result<()> {
        let (_dir, path) = temp_seed_path()?;
        let mut faker = ApplicationFaker::new(11);
        let records = faker.records(4);
        std::fs::write(&path, seed_toml(&records))?;

        let config_dir = tempfile::tempdir()?;
        let config_path = config_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "version = 1\n[data]\nseed_path = \"/does/not/exist.toml\"\n",
        )?;
        let config = Config::load(&config_path)?;

        let path_arg = path.to_string_lossy().into_owned();
        let store = open_store(&parse(&["--seed", &path_arg])?, &config)?;
        assert_eq!(store.records(), records.as_slice());

        let error = open_store(&parse(&[])?, &config).expect_err("missing seed should fail");
        let message = format!("{error:#}");
        assert!(message.contains("[data].seed_path"), "{message}");
        Ok(())
    }

    #[test]
    fn listing_table_shows_rows_and_stats() {
        let store = ApplicationStore::with_sample_data();
        let table = render_listing_table(&store.view("goo"));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Empresa  Tipo   Data        Status");
        assert_eq!(lines[1], "Google   Pleno  15/01/2024  Próxima fase");
        assert_eq!(
            lines.last().copied(),
            Some("total 5 | aprovadas 1 | pendentes 3 | reprovadas 1")
        );
    }

    #[test]
    fn listing_table_reports_empty_search() {
        let store = ApplicationStore::with_sample_data();
        let table = render_listing_table(&store.view("zzz"));
        assert!(table.starts_with("Nenhuma candidatura encontrada\nTente ajustar sua busca\n"));
    }

    #[test]
    fn listing_table_counts_unrecognized_statuses() -> Result<()> {
        let mut records = ApplicationStore::with_sample_data().records().to_vec();
        records.push(ApplicationRecord {
            status: RecordStatus::Unrecognized("Em análise".to_owned()),
            id: jobtracker_app::ApplicationId::new(6),
            ..records[0].clone()
        });
        let store = ApplicationStore::from_records(records)?;
        let table = render_listing_table(&store.view(""));
        assert!(table.contains("Em análise"));
        assert!(table.trim_end().ends_with("| sem categoria 1"));
        Ok(())
    }

    #[test]
    fn listing_json_uses_labels_and_iso_dates() -> Result<()> {
        let store = ApplicationStore::with_sample_data();
        let json = render_listing_json(&store.view("MICRO"))?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value["search"], "MICRO");
        assert_eq!(value["stats"]["total"], 5);
        assert_eq!(value["stats"]["pending"], 3);
        let applications = value["applications"]
            .as_array()
            .expect("applications array");
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0]["company"], "Microsoft");
        assert_eq!(applications[0]["level"], "Sênior");
        assert_eq!(applications[0]["applied_on"], "2024-01-10");
        assert_eq!(applications[0]["status"], "Retorno positivo");
        assert_eq!(applications[0]["recognized"], true);
        Ok(())
    }
}
