//! Command-line front end for the VistaCard core.
//!
//! # Responsibility
//! - Drive save/show/share flows against a local SQLite card store.
//! - Keep all business rules inside `vistacard_core`; this binary only
//!   parses arguments and prints results.
//!
//! Configuration comes from the environment:
//! - `VISTACARD_DB`: SQLite file path (default `vistacard.db`).
//! - `VISTACARD_ORIGIN`: origin used for share URLs
//!   (default `https://vistacard.local`).
//! - `VISTACARD_LOG_DIR`: when set, enables file logging there.

use std::process::ExitCode;
use vistacard_core::{
    default_log_level, init_logging, qr_image_url, render_card, resolve_target, share_url,
    CardField, CardService, SqliteKeyValueStore, TemplatePreset,
};

const DEFAULT_DB_PATH: &str = "vistacard.db";
const DEFAULT_ORIGIN: &str = "https://vistacard.local";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("VISTACARD_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "save" => cmd_save(rest),
        "show" => cmd_show(rest),
        "share" => cmd_share(rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown command `{other}`; try `vistacard help`")),
    }
}

fn cmd_save(pairs: &[String]) -> Result<(), String> {
    let conn = open_database()?;
    let service = CardService::new(SqliteKeyValueStore::new(&conn));

    let mut record = service.new_card();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(format!("expected field=value, got `{pair}`"));
        };
        let Some(field) = CardField::parse(name) else {
            return Err(format!("unknown field `{name}`"));
        };
        service.update_field(&mut record, field, value);
    }

    service.save_card(&record).map_err(|err| err.to_string())?;

    let origin = origin();
    println!("saved card {}", record.identifier);
    println!("share url: {}", share_url(&origin, &record.identifier));
    print_qr(&origin, &record);
    Ok(())
}

fn cmd_show(args: &[String]) -> Result<(), String> {
    let Some(identifier) = args.first() else {
        return Err("usage: vistacard show <id> [template]".to_string());
    };
    let preset = match args.get(1) {
        Some(name) => {
            TemplatePreset::parse(name).ok_or_else(|| format!("unknown template `{name}`"))?
        }
        None => TemplatePreset::default(),
    };

    let conn = open_database()?;
    let service = CardService::new(SqliteKeyValueStore::new(&conn));

    match service.load_card(identifier).map_err(|err| err.to_string())? {
        Some(record) => {
            print!("{}", render_card(&record, preset));
            Ok(())
        }
        None => Err(format!(
            "card `{identifier}` not found; create one with `vistacard save`"
        )),
    }
}

fn cmd_share(args: &[String]) -> Result<(), String> {
    let Some(identifier) = args.first() else {
        return Err("usage: vistacard share <id>".to_string());
    };

    let conn = open_database()?;
    let service = CardService::new(SqliteKeyValueStore::new(&conn));

    match service.load_card(identifier).map_err(|err| err.to_string())? {
        Some(record) => {
            let origin = origin();
            println!("share url: {}", share_url(&origin, &record.identifier));
            print_qr(&origin, &record);
            Ok(())
        }
        None => Err(format!(
            "card `{identifier}` not found; create one with `vistacard save`"
        )),
    }
}

fn print_qr(origin: &str, record: &vistacard_core::CardRecord) {
    let target = resolve_target(
        origin,
        Some(&record.identifier),
        Some(&record.linkedin),
        Some(&record.phone),
    );
    match target {
        Some(target) => {
            println!("qr target: {} ({})", target.url, target.caption.label());
            println!("qr image: {}", qr_image_url(&target.url));
        }
        None => println!("qr target: none available"),
    }
}

fn open_database() -> Result<rusqlite::Connection, String> {
    let path = std::env::var("VISTACARD_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    vistacard_core::db::open_db(&path)
        .map_err(|err| format!("cannot open card database `{path}`: {err}"))
}

fn origin() -> String {
    std::env::var("VISTACARD_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string())
}

fn print_usage() {
    println!("vistacard {}", vistacard_core::core_version());
    println!();
    println!("usage:");
    println!("  vistacard save field=value ...   create and persist a card");
    println!("  vistacard show <id> [template]   render a stored card");
    println!("  vistacard share <id>             print share url and qr links");
    println!();
    println!("fields: fullName title bio email phone location locationUrl");
    println!("        linkedin instagram facebook twitter threads whatsapp youtube");
    println!("templates: basic modern minimal blue dark");
}
