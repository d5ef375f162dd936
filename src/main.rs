use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use axum_prometheus::PrometheusMetricLayer;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use funding_gateway::applications::{
    application_router, CompanyData, Product, ProductApplicationService, SandboxPartners,
    SellerApplication, DECLINED,
};
use funding_gateway::config::AppConfig;
use funding_gateway::error::AppError;
use funding_gateway::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: Arc<PrometheusHandle>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Funding Gateway",
    about = "Route seller financing applications to product-specific funding partners",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Submit a demo application against the sandbox partner suite
    Submit {
        #[command(subcommand)]
        product: SubmitCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum SubmitCommand {
    /// Discount a single invoice
    SelectiveInvoice(SelectiveInvoiceArgs),
    /// Discount the whole sales ledger confidentially
    ConfidentialInvoice(ConfidentialInvoiceArgs),
    /// Apply for a fixed-term business loan
    BusinessLoan(BusinessLoanArgs),
}

#[derive(Args, Debug)]
struct CompanyArgs {
    /// Registered company name
    #[arg(long)]
    company_name: String,
    /// Company registration number
    #[arg(long)]
    company_number: u32,
    /// Founding date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    founded: NaiveDate,
    /// Director responsible for the application
    #[arg(long)]
    director_name: String,
}

#[derive(Args, Debug)]
struct SelectiveInvoiceArgs {
    #[command(flatten)]
    company: CompanyArgs,
    /// Invoice face value
    #[arg(long, value_parser = parse_decimal)]
    invoice_amount: Decimal,
    /// Advance percentage requested against the invoice
    #[arg(long, value_parser = parse_decimal)]
    advance_percentage: Decimal,
}

#[derive(Args, Debug)]
struct ConfidentialInvoiceArgs {
    #[command(flatten)]
    company: CompanyArgs,
    /// Net worth of the whole sales ledger
    #[arg(long, value_parser = parse_decimal)]
    total_ledger_networth: Decimal,
    /// Advance percentage requested against the ledger
    #[arg(long, value_parser = parse_decimal)]
    advance_percentage: Decimal,
    /// Applicable VAT rate
    #[arg(long, value_parser = parse_decimal)]
    vat_rate: Decimal,
}

#[derive(Args, Debug)]
struct BusinessLoanArgs {
    #[command(flatten)]
    company: CompanyArgs,
    /// Amount borrowed
    #[arg(long, value_parser = parse_decimal)]
    loan_amount: Decimal,
    /// Interest rate per annum
    #[arg(long, value_parser = parse_decimal)]
    interest_rate_per_annum: Decimal,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Submit { product } => run_submit(product),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|err| format!("failed to parse '{raw}' as a decimal ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let partners = Arc::new(SandboxPartners::new());
    let service = Arc::new(ProductApplicationService::new(
        partners.clone(),
        partners.clone(),
        partners,
    ));

    let app = application_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "funding gateway ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_submit(product: SubmitCommand) -> Result<(), AppError> {
    let application = application_from(product);

    let partners = Arc::new(SandboxPartners::new());
    let service = ProductApplicationService::new(partners.clone(), partners.clone(), partners);
    let code = service.submit_application_for(&application)?;

    println!("Seller financing application demo");
    println!(
        "Company: {} (number {})",
        application.company.name, application.company.number
    );
    println!("Product: {}", application.product.label());
    if code == DECLINED {
        println!("Outcome: declined (code {code})");
    } else {
        println!("Outcome: placed (reference {code})");
    }

    Ok(())
}

fn application_from(product: SubmitCommand) -> SellerApplication {
    match product {
        SubmitCommand::SelectiveInvoice(args) => SellerApplication {
            company: company_data(args.company),
            product: Product::SelectiveInvoiceDiscount {
                invoice_amount: args.invoice_amount,
                advance_percentage: args.advance_percentage,
            },
        },
        SubmitCommand::ConfidentialInvoice(args) => SellerApplication {
            company: company_data(args.company),
            product: Product::ConfidentialInvoiceDiscount {
                total_ledger_networth: args.total_ledger_networth,
                advance_percentage: args.advance_percentage,
                vat_rate: args.vat_rate,
            },
        },
        SubmitCommand::BusinessLoan(args) => SellerApplication {
            company: company_data(args.company),
            product: Product::BusinessLoan {
                loan_amount: args.loan_amount,
                interest_rate_per_annum: args.interest_rate_per_annum,
            },
        },
    }
}

fn company_data(args: CompanyArgs) -> CompanyData {
    CompanyData {
        name: args.company_name,
        number: args.company_number,
        founded: args.founded,
        director_name: args.director_name,
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
