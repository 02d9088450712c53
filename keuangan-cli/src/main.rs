use clap::{Parser, Subcommand, ValueEnum};
use keuangan_core::{
    Akun, Config, ItemsPerPage, KeuanganError, PageView, Pendapatan, RecordKind, RecordList,
    Rekening, TableRow, format_date, format_date_short, format_date_with_weekday, format_rupiah,
    load_records, parse_date, parse_rupiah, render_page_strip, render_page_summary,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "keuangan")]
#[command(about = "Paging and formatting tools for the RSB Ambon finance records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the navigation strip for a list of the given size
    Window {
        /// Total number of rows in the list
        #[arg(long)]
        total_items: usize,
        /// Current page (1-based)
        #[arg(long, default_value = "1")]
        page: usize,
        /// Rows per page: 5, 10, 20 or 50
        #[arg(long)]
        per_page: Option<ItemsPerPage>,
        /// Number of page buttons to show
        #[arg(long)]
        max_window: Option<usize>,
        /// Print the page state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Page through an exported record file
    List {
        /// Record type: akun, pendapatan or rekening
        kind: RecordKind,
        /// JSON array exported from the table
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long, default_value = "1")]
        page: usize,
        #[arg(long)]
        per_page: Option<ItemsPerPage>,
        #[arg(long)]
        max_window: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Format a whole-rupiah amount
    Rupiah {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Parse an entered amount such as "Rp 1.500.000"
    ParseRupiah {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Format an ISO date (YYYY-MM-DD)
    Date {
        date: String,
        #[arg(long, value_enum, default_value_t = DateStyle::Long)]
        style: DateStyle,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DateStyle {
    Long,
    Short,
    Weekday,
}

/// Command-line flags take precedence over the file and environment.
fn apply_flags(
    config: &mut Config,
    per_page: Option<ItemsPerPage>,
    max_window: Option<usize>,
) -> Result<(), KeuanganError> {
    if let Some(per_page) = per_page {
        config.items_per_page = per_page;
    }
    if let Some(max_window) = max_window {
        config.max_window = max_window;
    }
    config.validate()
}

fn resolve_config(
    per_page: Option<ItemsPerPage>,
    max_window: Option<usize>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    apply_flags(&mut config, per_page, max_window)?;
    log::debug!("Using {:?}", config);
    Ok(config)
}

fn print_view(view: &PageView, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        println!("{}", render_page_summary(view));
        println!("{}", render_page_strip(view));
    }
    Ok(())
}

fn run_list<T>(
    file: &Path,
    page: usize,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>>
where
    T: TableRow + Serialize + DeserializeOwned,
{
    let rows: Vec<T> = load_records(file)?;
    let mut list = RecordList::new(rows, config);
    list.paginator_mut().go_to(page);

    if json {
        let output = serde_json::json!({
            "view": list.view(),
            "rows": list.page_rows(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", list.render());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Window {
            total_items,
            page,
            per_page,
            max_window,
            json,
        } => {
            let config = resolve_config(per_page, max_window)?;
            let view = PageView::new(
                page,
                total_items,
                config.items_per_page,
                config.max_window,
            );
            print_view(&view, json)?;
        }
        Commands::List {
            kind,
            file,
            page,
            per_page,
            max_window,
            json,
        } => {
            let config = resolve_config(per_page, max_window)?;
            match kind {
                RecordKind::Akun => run_list::<Akun>(&file, page, &config, json)?,
                RecordKind::Pendapatan => run_list::<Pendapatan>(&file, page, &config, json)?,
                RecordKind::Rekening => run_list::<Rekening>(&file, page, &config, json)?,
            }
        }
        Commands::Rupiah { amount } => {
            println!("{}", format_rupiah(amount));
        }
        Commands::ParseRupiah { text } => {
            println!("{}", parse_rupiah(&text)?);
        }
        Commands::Date { date, style } => {
            let date = parse_date(&date)?;
            let formatted = match style {
                DateStyle::Long => format_date(date),
                DateStyle::Short => format_date_short(date),
                DateStyle::Weekday => format_date_with_weekday(date),
            };
            println!("{}", formatted);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
