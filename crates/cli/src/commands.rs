//! Command implementations. One request per user action; results are
//! printed, failures bubble up as `anyhow` errors with the API's message.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;

use washboard_client::resources::transactions::TransactionQuery;
use washboard_client::{ListQuery, RemoteApi, Session, SessionState};
use washboard_core::{CustomerId, Money, PackageId, TransactionId};
use washboard_customers::CustomerDraft;
use washboard_packages::{PackageDraft, ServiceUnit};
use washboard_orders::OrderDraft;
use washboard_stats::{orders_in_process, stat_cards};
use washboard_transactions::{LaundryStatus, PaymentStatus, Transaction};

/// Sign in with the provided credentials; the session lives for this
/// invocation.
pub async fn sign_in(
    session: &mut Session,
    email: &Option<String>,
    password: &Option<String>,
) -> Result<()> {
    let (Some(email), Some(password)) = (email, password) else {
        bail!(
            "credentials required: pass --email/--password or set \
             WASHBOARD_EMAIL / WASHBOARD_PASSWORD"
        );
    };
    session
        .login(email, password)
        .await
        .context("sign-in failed")?;
    Ok(())
}

pub fn login(session: &Session) -> Result<()> {
    match session.current_user() {
        Some(user) => {
            println!("Signed in as {} <{}>", user.display_name(), user.email);
            Ok(())
        }
        None => bail!("not signed in"),
    }
}

pub async fn logout(session: &mut Session) -> Result<()> {
    session.logout().await?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(session: &mut Session) -> Result<()> {
    match session.probe().await? {
        SessionState::Authenticated(user) => {
            println!("{} <{}> (id {})", user.display_name(), user.email, user.id);
        }
        _ => println!("Not signed in."),
    }
    Ok(())
}

pub async fn customer_list(api: &RemoteApi, search: Option<String>, page: u32) -> Result<()> {
    let mut query = ListQuery::new().with_page(page);
    if let Some(search) = search {
        query = query.with_search(search);
    }
    let result = api.customers.list(&query).await?;

    for customer in &result.data {
        println!(
            "{:>5}  {:<24} {:<16} {}",
            customer.id,
            customer.name,
            customer.phone,
            customer.address.as_deref().unwrap_or("-")
        );
    }
    print_page_line(result.meta.from, result.meta.to, result.meta.total);
    Ok(())
}

pub async fn customer_add(
    api: &RemoteApi,
    name: String,
    phone: String,
    address: Option<String>,
) -> Result<()> {
    let mut draft = CustomerDraft::new(name, phone);
    draft.address = address;
    draft.validate().map_err(|e| anyhow!(e))?;

    let message = api.customers.create(&draft).await?;
    println!(
        "{}",
        message.unwrap_or_else(|| format!("Customer {} registered.", draft.name))
    );
    Ok(())
}

pub async fn customer_rm(api: &RemoteApi, id: i64) -> Result<()> {
    let message = api.customers.delete(CustomerId::new(id)).await?;
    println!("{}", message.unwrap_or_else(|| "Customer removed.".to_owned()));
    Ok(())
}

pub async fn package_list(api: &RemoteApi, search: Option<String>, page: u32) -> Result<()> {
    let mut query = ListQuery::new().with_page(page);
    if let Some(search) = search {
        query = query.with_search(search);
    }
    let result = api.packages.list(&query).await?;

    for package in &result.data {
        println!(
            "{:>5}  {:<28} {:>12}/{:<5} {:>2} hari  {}",
            package.id,
            package.name,
            package.price.to_string(),
            package.unit,
            package.estimated_duration,
            if package.is_active { "aktif" } else { "nonaktif" }
        );
    }
    print_page_line(result.meta.from, result.meta.to, result.meta.total);
    Ok(())
}

pub async fn package_add(
    api: &RemoteApi,
    name: String,
    unit: String,
    price: i64,
    duration: u32,
    description: Option<String>,
    inactive: bool,
) -> Result<()> {
    let mut draft = PackageDraft::new(name, ServiceUnit::from(unit), Money::from_units(price));
    draft.estimated_duration = duration;
    draft.description = description;
    draft.is_active = !inactive;
    draft.validate().map_err(|e| anyhow!(e))?;

    let message = api.packages.create(&draft).await?;
    println!(
        "{}",
        message.unwrap_or_else(|| format!("Package {} registered.", draft.name))
    );
    Ok(())
}

pub async fn tx_list(api: &RemoteApi, page: u32, statuses: Vec<String>) -> Result<()> {
    let mut filter = Vec::new();
    for raw in statuses {
        let status = LaundryStatus::from(raw);
        if !status.is_recognized() {
            bail!(
                "unknown laundry status {:?}; expected one of: new, processing, done, taken",
                status.as_str()
            );
        }
        filter.push(status);
    }

    let query = TransactionQuery::page(page, 15).with_status_in(filter);
    let result = api.transactions.list(&query).await?;

    for tx in &result.data {
        print_tx_row(tx);
    }
    print_page_line(result.meta.from, result.meta.to, result.meta.total);
    Ok(())
}

pub async fn tx_show(api: &RemoteApi, id: i64) -> Result<()> {
    let tx = api.transactions.get(TransactionId::new(id)).await?;

    println!("{}  {}", tx.invoice_code, tx.customer.name);
    println!(
        "Masuk: {}  Estimasi ambil: {}",
        tx.drop_off_date,
        tx.estimated_pickup_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_owned())
    );
    println!(
        "Cucian: {}  Bayar: {}  Kasir: {}",
        tx.laundry_status.badge().label,
        tx.payment_status.badge().label,
        tx.cashier.name
    );
    for detail in &tx.details {
        println!(
            "  {:<28} {:>6} x {:>12} = {}",
            detail.package.name, detail.qty_weight, detail.price_per_unit, detail.subtotal
        );
    }
    println!("Total: {}", tx.total_price);
    Ok(())
}

pub async fn tx_set_status(api: &RemoteApi, id: i64, status: String) -> Result<()> {
    let target = LaundryStatus::from(status);
    if !target.is_recognized() {
        bail!(
            "unknown laundry status {:?}; expected one of: new, processing, done, taken",
            target.as_str()
        );
    }

    let updated = api
        .transactions
        .set_laundry_status(TransactionId::new(id), &target)
        .await?;
    println!(
        "{}: status cucian sekarang {}",
        updated.invoice_code,
        updated.laundry_status.badge().label
    );
    Ok(())
}

pub async fn tx_set_payment(api: &RemoteApi, id: i64, status: String) -> Result<()> {
    let target = PaymentStatus::from(status);
    if !target.is_recognized() {
        bail!(
            "unknown payment status {:?}; expected one of: pending, paid",
            target.as_str()
        );
    }

    let updated = api
        .transactions
        .set_payment_status(TransactionId::new(id), &target)
        .await?;
    println!(
        "{}: status bayar sekarang {}",
        updated.invoice_code,
        updated.payment_status.badge().label
    );
    Ok(())
}

/// Arguments of the `pos` command: one order, composed and submitted.
#[derive(Debug, Args)]
pub struct PosArgs {
    /// Customer id.
    #[arg(long)]
    pub customer: i64,

    /// Line item as PACKAGE_ID:QTY (repeatable), e.g. `--item 2:3.5`.
    #[arg(long = "item", required = true)]
    pub items: Vec<String>,

    /// Discount in whole Rupiah.
    #[arg(long, default_value_t = 0)]
    pub discount: i64,

    /// Mark the order as already paid.
    #[arg(long)]
    pub paid: bool,

    /// Drop-off date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub async fn pos(api: &RemoteApi, args: PosArgs) -> Result<()> {
    let data = api.transactions.create_data().await?;

    let customer_id = CustomerId::new(args.customer);
    let customer = data
        .customers
        .iter()
        .find(|c| c.id == customer_id)
        .ok_or_else(|| anyhow!("no customer with id {customer_id}"))?;

    let drop_off = args.date.unwrap_or_else(|| Local::now().date_naive());
    let mut draft = OrderDraft::new(drop_off);
    draft.select_customer(customer_id);

    for (index, raw) in args.items.iter().enumerate() {
        let (package_id, quantity) = parse_item(raw)?;
        let package = data
            .packages
            .iter()
            .find(|p| p.id == package_id)
            .ok_or_else(|| anyhow!("no package with id {package_id}"))?;

        if index > 0 {
            draft.add_line();
        }
        draft.select_package(index, package).map_err(|e| anyhow!(e))?;
        draft.set_quantity(index, quantity).map_err(|e| anyhow!(e))?;
    }

    draft.set_discount(args.discount.into());
    if args.paid {
        draft.set_payment_status(PaymentStatus::Paid);
    }

    let totals = draft.totals();
    println!("Pelanggan : {}", customer.display_label());
    println!("Subtotal  : {}", totals.subtotal);
    println!("Diskon    : -{}", totals.discount);
    println!("Total     : {}", totals.final_total);

    let payload = draft
        .payload(&data.packages, data.current_user_id)
        .map_err(|e| anyhow!(e))?;
    let receipt = api.transactions.create(&payload).await?;
    println!("Transaksi {} berhasil dibuat.", receipt.invoice_code);
    Ok(())
}

pub async fn stats(api: &RemoteApi) -> Result<()> {
    let stats = api.dashboard.stats().await?;
    for card in stat_cards(&stats) {
        println!(
            "{:<22} {:>12}   {} {}",
            card.title, card.value, card.footer_value, card.footer_label
        );
    }

    let in_process = api
        .transactions
        .list(
            &TransactionQuery::latest(5)
                .with_status_in([LaundryStatus::New, LaundryStatus::Processing]),
        )
        .await?;
    if !in_process.data.is_empty() {
        println!();
        println!("Sedang diproses:");
        for row in orders_in_process(&in_process.data) {
            println!(
                "  {:<16} {:<20} {:<24} {:>5} kg  {:>3}%",
                row.invoice_code, row.customer, row.service, row.weight, row.progress
            );
        }
    }

    let charts = api.dashboard.charts().await?;
    println!();
    for (name, series) in [
        ("Order per minggu", &charts.weekly_orders),
        ("Pendapatan bulanan", &charts.monthly_revenue),
        ("Berat bulanan (kg)", &charts.monthly_weight),
    ] {
        println!("{:<20} {} titik data", name, series.data.len());
    }
    Ok(())
}

fn print_tx_row(tx: &Transaction) {
    println!(
        "{:>5}  {:<16} {:<20} {:<14} {:<12} {}",
        tx.id,
        tx.invoice_code,
        tx.customer.name,
        tx.laundry_status.badge().label,
        tx.payment_status.badge().label,
        tx.total_price
    );
}

fn print_page_line(from: Option<u64>, to: Option<u64>, total: u64) {
    println!(
        "Menampilkan {} - {} dari {} data",
        from.unwrap_or(0),
        to.unwrap_or(0),
        total
    );
}

/// Parse `PACKAGE_ID:QTY` into its parts.
fn parse_item(raw: &str) -> Result<(PackageId, Decimal)> {
    let (id, qty) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("item must look like PACKAGE_ID:QTY, got {raw:?}"))?;
    let package_id: PackageId = id.parse().map_err(|e| anyhow!("{e}"))?;
    let quantity: Decimal = qty
        .trim()
        .parse()
        .map_err(|e| anyhow!("quantity in {raw:?}: {e}"))?;
    Ok((package_id, quantity))
}
