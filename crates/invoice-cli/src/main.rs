use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use invoice_compose::{
    InvoiceOptions, InvoiceSources, ItemMode, NumberPolicy, PaperType, format,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "invoice", about = "Invoices on letterhead", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place an existing invoice PDF on a letterhead
    Overlay {
        /// Invoice PDF
        #[arg(short, long)]
        invoice: PathBuf,

        /// Letterhead PDF; its last page repeats for longer invoices
        #[arg(short, long)]
        letterhead: PathBuf,

        /// Output PDF file (default: invoice_on_letterhead.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate an invoice from CSV tables, optionally on a letterhead
    Generate {
        /// Header CSV (columns: key, value)
        #[arg(long)]
        header: PathBuf,

        /// Line item CSV (columns: description, qty, unit_price, vat_pct)
        #[arg(long)]
        items: PathBuf,

        /// Letterhead PDF
        #[arg(short, long)]
        letterhead: Option<PathBuf>,

        /// Output PDF file (default: invoice_<number>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Options JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Allow an invoice without line items
        #[arg(long)]
        allow_empty: bool,

        /// Reject non-numeric quantity, price and VAT cells instead of using 0
        #[arg(long)]
        strict_numbers: bool,

        /// Paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Print the computed totals only, don't generate a PDF
        #[arg(long)]
        totals_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
    Legal,
}

impl From<PaperArg> for PaperType {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Overlay {
            invoice,
            letterhead,
            output,
        } => {
            let result = invoice_compose::overlay_files(&invoice, &letterhead)
                .await
                .with_context(|| format!("Failed to compose {}", invoice.display()))?;
            let path = output.unwrap_or_else(|| PathBuf::from(&result.filename));
            result.save(&path).await?;
            println!(
                "Composed {} page(s) on letterhead → {}",
                result.page_count,
                path.display()
            );
        }

        Commands::Generate {
            header,
            items,
            letterhead,
            output,
            config,
            allow_empty,
            strict_numbers,
            paper,
            totals_only,
        } => {
            let mut options = match &config {
                Some(path) => InvoiceOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => InvoiceOptions::default(),
            };
            if allow_empty {
                options.item_mode = ItemMode::Lenient;
            }
            if strict_numbers {
                options.number_policy = NumberPolicy::Strict;
            }
            if let Some(paper) = paper {
                options.paper = paper.into();
            }
            log::debug!("Invoice options: {:?}", options);

            let mut sources = InvoiceSources::new(&header, &items);
            if let Some(letterhead) = &letterhead {
                sources = sources.with_letterhead(letterhead);
            }

            if totals_only {
                let (header_table, items_table) = sources.load_tables().await?;
                let prepared = invoice_compose::prepare(&header_table, &items_table, &options)?;
                let symbol = &options.currency_symbol;
                println!("Invoice {}", prepared.header.invoice_number);
                println!("  Line items: {}", prepared.items.len());
                println!(
                    "  {}: {}",
                    options.labels.subtotal,
                    format::format_money(prepared.totals.subtotal_excl, symbol)
                );
                println!(
                    "  {}: {}",
                    options.labels.total_vat,
                    format::format_money(prepared.totals.total_vat, symbol)
                );
                println!(
                    "  {}: {}",
                    options.labels.grand_total,
                    format::format_money(prepared.totals.grand_total, symbol)
                );
                return Ok(());
            }

            let result = invoice_compose::generate_invoice_files(&sources, options).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(&result.filename));
            result.save(&path).await?;
            println!(
                "Generated {} page(s) → {}",
                result.page_count,
                path.display()
            );
        }
    }

    Ok(())
}
