use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contracts::domain::a001_material_request::MaterialRequest;
use contracts::domain::a002_purchase_order::{PurchaseOrder, PurchaseReceiptRequest};
use contracts::domain::a003_purchase_invoice::PurchaseInvoice;
use contracts::domain::common::ProcurementRecord;
use contracts::shared::erp_response::ErpResponse;
use contracts::shared::list_query::{FilterCondition, ListPage, SortDirection};
use contracts::shared::projection::ViewProjection;
use contracts::system::SessionUser;
use projector::access;
use projector::journey::select_invoice_for_payment;
use projector::list_query::total_pages;
use projector::status::normalize_status;
use projector::{load_config, Projector};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "inspector")]
#[command(about = "Project ERP procurement snapshots into view models")]
struct Args {
    /// Configuration file (defaults to config.toml next to the binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// ERP user name of the viewer
    #[arg(long, global = true)]
    user: Option<String>,

    #[arg(long, global = true)]
    email: Option<String>,

    /// Role held by the viewer (repeatable)
    #[arg(long = "role", global = true)]
    roles: Vec<String>,

    #[arg(long, global = true)]
    district: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a single material request
    MaterialRequest {
        /// JSON file with a `{"data": {...}}` response
        file: PathBuf,
    },
    /// Project a purchase order and its invoices
    PurchaseOrder {
        file: PathBuf,
        /// JSON file with a `{"data": [...]}` list of purchase invoices
        #[arg(long)]
        invoices: Option<PathBuf>,
    },
    /// Show the material requests the viewer may see
    MaterialRequests {
        file: PathBuf,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Build the list request for a page
    ListQuery {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long, default_value = "modified")]
        sort: String,
        #[arg(long)]
        desc: bool,
        /// Total number of records, if already known
        #[arg(long)]
        total: Option<usize>,
        /// `field=value` condition (repeatable)
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
}

#[derive(Serialize)]
struct PurchaseOrderReport<'a> {
    projection: ViewProjection,
    receipt_request: PurchaseReceiptRequest,
    invoice_for_payment: Option<&'a str>,
}

#[derive(Serialize)]
struct RequestRow {
    name: String,
    status: String,
    badge: &'static str,
    items: String,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_data<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let response: ErpResponse<T> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(response.into_inner())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_filter(raw: &str) -> Result<FilterCondition> {
    let (field, value) = raw
        .split_once('=')
        .with_context(|| format!("filter `{}` is not in field=value form", raw))?;
    Ok(FilterCondition::equals(field.trim(), value.trim()))
}

fn session_user(args: &Args) -> Option<SessionUser> {
    let name = args.user.clone().or_else(|| args.email.clone())?;
    let mut user = SessionUser::new(name);
    user.email = args.email.clone();
    user.roles = args.roles.clone();
    user.district = args.district.clone();
    Some(user)
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let projector = Projector::new(config);
    let user = session_user(&args);

    match &args.command {
        Command::MaterialRequest { file } => {
            let request: MaterialRequest = read_data(file)?;
            let record = ProcurementRecord::from(&request);
            print_json(&projector.project(&record, user.as_ref()))?;
        }
        Command::PurchaseOrder { file, invoices } => {
            let order: PurchaseOrder = read_data(file)?;
            let invoices: Vec<PurchaseInvoice> = match invoices {
                Some(path) => read_data(path)?,
                None => Vec::new(),
            };
            let record = ProcurementRecord::from_purchase_order(&order, &invoices);
            print_json(&PurchaseOrderReport {
                projection: projector.project(&record, user.as_ref()),
                receipt_request: order.receipt_request(),
                invoice_for_payment: select_invoice_for_payment(&invoices)
                    .map(|invoice| invoice.name.as_str()),
            })?;
        }
        Command::MaterialRequests { file, page } => {
            let requests: Vec<MaterialRequest> = read_data(file)?;
            let roles = projector.roles();
            let visible = if access::can_view_district_requests(user.as_ref(), roles) {
                let district = user.as_ref().and_then(|u| u.district.as_deref());
                access::filter_by_district(&requests, district)
            } else if let Some(user) = user.as_ref().filter(|u| access::is_dealer(u, roles)) {
                access::filter_owned_by(&requests, user)
            } else {
                anyhow::bail!("viewer needs a collector or dealer role to list material requests");
            };

            let mut state = projector.new_list_state("name");
            state.set_total(visible.len());
            state.go_to_page(*page)?;
            let query = state.query()?;

            let table = projector.status_table();
            let items = query
                .window(&visible)
                .iter()
                .map(|request| {
                    let status = normalize_status(&ProcurementRecord::from(*request), table);
                    RequestRow {
                        name: request.name.clone(),
                        status: status.display_status,
                        badge: status.badge.css_class(),
                        items: request.items_summary(),
                    }
                })
                .collect::<Vec<_>>();

            print_json(&ListPage {
                items,
                total: visible.len(),
                page: state.page,
                page_size: state.page_size,
                total_pages: state.total_pages(),
            })?;
        }
        Command::ListQuery {
            page,
            page_size,
            sort,
            desc,
            total,
            filters,
        } => {
            let mut state = projector.new_list_state(sort);
            if *desc {
                state.sort_direction = SortDirection::Desc;
            }
            if let Some(size) = page_size {
                state.set_page_size(*size)?;
            }

            let mut conditions = filters
                .iter()
                .map(|raw| parse_filter(raw))
                .collect::<Result<Vec<_>>>()?;
            if let Some(user) = user.as_ref().filter(|u| projector.is_collector(u)) {
                conditions.extend(access::district_filter(user));
            }
            state.set_filters(conditions);

            if let Some(total) = total {
                state.set_total(*total);
                tracing::info!(
                    "{} records, {} pages",
                    total,
                    total_pages(*total, state.page_size)
                );
            }
            state.go_to_page(*page)?;

            let query = state.query()?;
            let params = query.to_query_pairs();
            print_json(&serde_json::json!({
                "query": query,
                "params": params,
                "page_info": state.page_info(),
            }))?;
        }
    }

    Ok(())
}
