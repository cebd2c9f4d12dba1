//! gridport CLI: terminal portal for an electricity-utility billing API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::sync::Arc;

use gridport::api::types::{
    AccountPayload, CustomerPayload, CustomerRef, NewAdminUser, NewComplaint, NewReading,
    RegisterRequest,
};
use gridport::api::ApiClient;
use gridport::auth::{AuthGateway, AuthOutcome};
use gridport::config::Config;
use gridport::portal::{AdminPortal, CustomerPortal};
use gridport::routes::{self, RouteAccess, RouteDecision, SessionSnapshot};
use gridport::session::SessionStore;

#[derive(Parser)]
#[command(name = "gridport", version, about = "Terminal portal for an electricity billing API")]
struct Cli {
    /// Override the configured API base URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with a username; the password is prompted.
    Login { username: String },
    /// Sign up as a new customer (interactive) and log in.
    Register,
    /// Clear the stored session. No network call.
    Logout,
    /// Show the current identity.
    Whoami,
    /// Administrator screens.
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Customer screens.
    #[command(subcommand)]
    Customer(CustomerCommand),
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Operational metrics overview.
    Dashboard,
    /// List registered customers.
    Customers,
    /// Register a customer on their behalf; the password is prompted.
    AddCustomer {
        username: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        pincode: String,
        #[arg(long)]
        aadhar: Option<String>,
    },
    /// Update a customer's profile. The credential is left untouched.
    UpdateCustomer {
        customer_id: i64,
        username: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        pincode: String,
        #[arg(long)]
        aadhar: Option<String>,
    },
    /// Remove a customer record.
    RemoveCustomer { customer_id: i64 },
    /// Record an advance payment on a customer's behalf.
    RecordAdvance { customer_id: i64, amount: f64 },
    /// List service accounts.
    Accounts,
    /// Open a service connection for a customer.
    AddAccount {
        customer_id: i64,
        #[arg(long, default_value = "DOMESTIC")]
        connection_type: String,
        #[arg(long)]
        sanctioned_load: f64,
        /// Connection date, `YYYY-MM-DD`. Defaults to today.
        #[arg(long)]
        connection_date: Option<String>,
        #[arg(long)]
        installation_address: String,
        #[arg(long)]
        tariff_category: String,
    },
    /// Replace a service connection's details.
    UpdateAccount {
        account_id: i64,
        customer_id: i64,
        #[arg(long)]
        connection_type: String,
        #[arg(long)]
        sanctioned_load: f64,
        #[arg(long)]
        connection_date: String,
        #[arg(long)]
        installation_address: String,
        #[arg(long)]
        tariff_category: String,
        /// Mark the connection inactive.
        #[arg(long)]
        inactive: bool,
    },
    /// Deactivate a service connection.
    CloseAccount { account_id: i64 },
    /// Show the next free meter number for a new connection.
    NextMeter,
    /// List meter readings for an account.
    Readings { account_id: i64 },
    /// Submit a meter reading (also triggers bill generation).
    AddReading {
        account_id: i64,
        current_reading: i64,
        /// Billing cycle, `YYYY-MM`. Defaults to the current month.
        #[arg(long)]
        month: Option<String>,
        #[arg(long, default_value = "ACTUAL")]
        reading_type: String,
        #[arg(long)]
        remarks: Option<String>,
    },
    /// Batch-generate bills for a billing cycle.
    GenerateBills {
        /// Billing cycle, `YYYY-MM`. Defaults to the current month.
        #[arg(long)]
        month: Option<String>,
    },
    /// List tariff categories and slabs.
    Tariffs,
    /// List administrator accounts.
    Users,
    /// Create an administrator account.
    AddUser {
        username: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Enable or disable an administrator account.
    SetUserStatus {
        user_id: i64,
        #[arg(long)]
        active: bool,
    },
    /// List complaints across all customers.
    Complaints,
    /// Resolve a complaint.
    Resolve {
        complaint_id: i64,
        #[arg(long)]
        resolution: String,
    },
}

impl AdminCommand {
    /// The screen this subcommand renders, as declared in the route table.
    fn route(&self) -> &'static str {
        match self {
            Self::Dashboard => "/admin/dashboard",
            Self::Customers
            | Self::AddCustomer { .. }
            | Self::UpdateCustomer { .. }
            | Self::RemoveCustomer { .. }
            | Self::RecordAdvance { .. } => "/admin/customers",
            Self::Accounts
            | Self::AddAccount { .. }
            | Self::UpdateAccount { .. }
            | Self::CloseAccount { .. }
            | Self::NextMeter => "/admin/accounts",
            Self::Readings { .. } | Self::AddReading { .. } => "/admin/readings",
            Self::GenerateBills { .. } => "/admin/bills",
            Self::Tariffs => "/admin/tariffs",
            Self::Users | Self::AddUser { .. } | Self::SetUserStatus { .. } => "/admin/users",
            Self::Complaints | Self::Resolve { .. } => "/admin/complaints",
        }
    }
}

#[derive(Subcommand)]
enum CustomerCommand {
    /// Account summary: outstanding, last bill, average usage.
    Dashboard,
    /// List all bills.
    Bills,
    /// List bills with an open balance.
    Pending,
    /// Show one bill's charge breakdown; optionally save PDF/QR.
    Bill {
        bill_id: i64,
        /// Save the invoice PDF to this path.
        #[arg(long)]
        pdf: Option<PathBuf>,
        /// Save the payment QR image to this path.
        #[arg(long)]
        qr: Option<PathBuf>,
    },
    /// Pay a bill.
    Pay {
        bill_id: i64,
        amount: f64,
        #[arg(long, default_value = "UPI")]
        mode: String,
    },
    /// Show the advance-payment balance, or top it up.
    Advance {
        /// Amount to add; omit to just show the balance.
        amount: Option<f64>,
    },
    /// Monthly consumption history.
    Usage,
    /// List complaints raised by this account.
    Complaints,
    /// Raise a complaint.
    Complain {
        #[arg(long, default_value = "BILLING")]
        category: String,
        #[arg(long, default_value = "MEDIUM")]
        priority: String,
        description: String,
    },
}

impl CustomerCommand {
    /// The screen this subcommand renders, as declared in the route table.
    fn route(&self) -> &'static str {
        match self {
            Self::Dashboard => "/customer/dashboard",
            Self::Bills | Self::Pending | Self::Bill { .. } => "/customer/bills",
            Self::Pay { .. } => "/customer/pay",
            Self::Advance { .. } => "/customer/advance-payment",
            Self::Usage => "/customer/usage",
            Self::Complaints | Self::Complain { .. } => "/customer/complaints",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let store = Arc::new(SessionStore::open(&config.state_dir()?)?);
    let gateway = AuthGateway::new(&config.api.base_url, config.api.timeout_secs, store.clone())?;
    let api = ApiClient::new(&config.api.base_url, config.api.timeout_secs, store.clone())?;

    match cli.command {
        Command::Login { username } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .interact()
                .context("could not read password")?;
            match gateway.login(&username, &password).await {
                AuthOutcome::Authenticated(identity) => {
                    println!(
                        "Logged in as {} ({})",
                        style(&identity.display_name).green(),
                        identity.role
                    );
                    println!("Landing: {}", routes::landing_for(identity.role));
                }
                AuthOutcome::Rejected { message } => {
                    println!("{} {message}", style("Login failed:").red());
                }
            }
        }
        Command::Register => {
            let request = prompt_registration()?;
            match gateway.register(&request).await {
                AuthOutcome::Authenticated(identity) => {
                    println!(
                        "Account created. Logged in as {} ({})",
                        style(&identity.display_name).green(),
                        identity.role
                    );
                }
                AuthOutcome::Rejected { message } => {
                    println!("{} {message}", style("Registration failed:").red());
                }
            }
        }
        Command::Logout => {
            gateway.logout()?;
            println!("Logged out.");
        }
        Command::Whoami => match store.current_identity() {
            Some(identity) => {
                println!("{} ({})", identity.display_name, identity.role);
                println!("login: {}  id: {}", identity.login_name, identity.subject_id);
            }
            None => println!("Not logged in."),
        },
        Command::Admin(command) => {
            if guard(&store, command.route()) {
                run_admin(command, &api).await?;
            }
        }
        Command::Customer(command) => {
            if guard(&store, command.route()) {
                run_customer(command, &api).await?;
            }
        }
    }

    Ok(())
}

/// Apply the route guard for a screen; print the redirect verdict when the
/// destination must not render.
fn guard(store: &SessionStore, path: &str) -> bool {
    let session = SessionSnapshot {
        pending: false,
        identity: store.current_identity(),
    };
    let access = routes::lookup(path).map_or(RouteAccess::Open, |r| r.access);

    match routes::authorize(&session, access) {
        RouteDecision::Render => true,
        RouteDecision::Checking => {
            println!("Checking permissions...");
            false
        }
        RouteDecision::RedirectLogin => {
            println!("Please log in first: gridport login <username>");
            false
        }
        RouteDecision::RedirectLanding(role) => {
            println!(
                "Not available for your role. Try screens under {}",
                style(routes::landing_for(role)).cyan()
            );
            false
        }
    }
}

async fn run_admin(command: AdminCommand, api: &ApiClient) -> Result<()> {
    let portal = AdminPortal::new(api);

    match command {
        AdminCommand::Dashboard => {
            let m = portal.dashboard().await?;
            println!("{}", style("Operations dashboard").bold());
            println!("customers: {}", m.total_customers);
            println!(
                "billed this month: {}  collected: {}  outstanding: {}",
                money(m.total_billed_this_month),
                money(m.total_collected_this_month),
                money(m.total_outstanding)
            );
            println!(
                "bills generated: {}  overdue: {}  collection efficiency: {}%",
                opt_num(m.bills_generated_this_month),
                opt_num(m.overdue_bills),
                m.collection_efficiency
                    .map_or_else(|| "—".into(), |v| format!("{v:.2}"))
            );
            println!(
                "complaints — open: {}  in progress: {}  resolved today: {}",
                opt_num(m.open_complaints),
                opt_num(m.in_progress_complaints),
                opt_num(m.resolved_today)
            );
        }
        AdminCommand::Customers => {
            for c in portal.customers().await? {
                println!(
                    "{:>5}  {:<12}  {:<24}  {}",
                    c.customer_id,
                    c.customer_number.as_deref().unwrap_or("—"),
                    c.full_name,
                    c.city.as_deref().unwrap_or("—")
                );
            }
        }
        AdminCommand::AddCustomer {
            username,
            full_name,
            email,
            phone,
            address,
            city,
            state,
            pincode,
            aadhar,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt("Customer password")
                .interact()
                .context("could not read password")?;
            let customer = portal
                .create_customer(&CustomerPayload {
                    username,
                    password: Some(password),
                    email,
                    full_name,
                    phone_number: phone,
                    address,
                    city,
                    state,
                    pincode,
                    aadhar_number: aadhar,
                })
                .await?;
            println!(
                "Customer {} created (id {}).",
                customer.full_name, customer.customer_id
            );
        }
        AdminCommand::UpdateCustomer {
            customer_id,
            username,
            full_name,
            email,
            phone,
            address,
            city,
            state,
            pincode,
            aadhar,
        } => {
            let customer = portal
                .update_customer(
                    customer_id,
                    &CustomerPayload {
                        username,
                        password: None,
                        email,
                        full_name,
                        phone_number: phone,
                        address,
                        city,
                        state,
                        pincode,
                        aadhar_number: aadhar,
                    },
                )
                .await?;
            println!("Customer {} updated.", customer.customer_id);
        }
        AdminCommand::RemoveCustomer { customer_id } => {
            portal.delete_customer(customer_id).await?;
            println!("Customer {customer_id} removed.");
        }
        AdminCommand::RecordAdvance {
            customer_id,
            amount,
        } => {
            let resp = portal.record_advance(customer_id, amount).await?;
            println!(
                "{}",
                resp.message
                    .unwrap_or_else(|| "Advance payment recorded.".into())
            );
            println!("Balance: {}", money(resp.balance));
        }
        AdminCommand::Accounts => {
            for a in portal.accounts().await? {
                println!(
                    "{:>5}  {:<14}  meter {:<10}  {:<10}  {}",
                    a.account_id,
                    a.account_number.as_deref().unwrap_or("—"),
                    a.meter_number.as_deref().unwrap_or("—"),
                    a.tariff_category.as_deref().unwrap_or("—"),
                    if a.is_active.unwrap_or(false) { "active" } else { "inactive" }
                );
            }
        }
        AdminCommand::AddAccount {
            customer_id,
            connection_type,
            sanctioned_load,
            connection_date,
            installation_address,
            tariff_category,
        } => {
            let account = portal
                .create_account(&AccountPayload {
                    customer: CustomerRef { customer_id },
                    connection_type,
                    sanctioned_load,
                    connection_date: connection_date
                        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
                    installation_address,
                    tariff_category,
                    is_active: true,
                })
                .await?;
            println!(
                "Account {} opened (meter {}).",
                account.account_id,
                account.meter_number.as_deref().unwrap_or("—")
            );
        }
        AdminCommand::UpdateAccount {
            account_id,
            customer_id,
            connection_type,
            sanctioned_load,
            connection_date,
            installation_address,
            tariff_category,
            inactive,
        } => {
            portal
                .update_account(
                    account_id,
                    &AccountPayload {
                        customer: CustomerRef { customer_id },
                        connection_type,
                        sanctioned_load,
                        connection_date,
                        installation_address,
                        tariff_category,
                        is_active: !inactive,
                    },
                )
                .await?;
            println!("Account {account_id} updated.");
        }
        AdminCommand::CloseAccount { account_id } => {
            portal.deactivate_account(account_id).await?;
            println!("Account {account_id} deactivated.");
        }
        AdminCommand::NextMeter => {
            let next = portal.next_meter_number().await?;
            println!("Next meter number: {}", next.meter_number);
        }
        AdminCommand::Readings { account_id } => {
            for r in portal.readings(account_id).await? {
                println!(
                    "{:<8}  prev {:>6}  curr {:>6}  units {:>6}  {}",
                    r.billing_month.as_deref().unwrap_or("—"),
                    opt_num(r.previous_reading),
                    opt_num(r.current_reading),
                    opt_num(r.units_consumed),
                    r.reading_type.as_deref().unwrap_or("—")
                );
            }
        }
        AdminCommand::AddReading {
            account_id,
            current_reading,
            month,
            reading_type,
            remarks,
        } => {
            let reading = NewReading {
                account_id,
                current_reading,
                billing_month: month.unwrap_or_else(current_billing_month),
                reading_type,
                remarks,
            };
            portal.add_reading(&reading).await?;
            println!("Reading saved; bill generation triggered.");
        }
        AdminCommand::GenerateBills { month } => {
            let month = month.unwrap_or_else(current_billing_month);
            let ack = portal.generate_bills(&month).await?;
            println!(
                "{}",
                ack.message
                    .unwrap_or_else(|| format!("Bills generated for {month}."))
            );
        }
        AdminCommand::Tariffs => {
            for t in portal.tariffs().await? {
                println!(
                    "{} {} — fixed {} duty {}",
                    t.code.as_deref().unwrap_or("—"),
                    t.category.as_deref().unwrap_or("—"),
                    money(t.fixed_charge),
                    t.duty_rate.map_or_else(|| "—".into(), |v| format!("{v}"))
                );
                for s in &t.slabs {
                    let upper = s
                        .max_units
                        .map_or_else(|| "∞".to_string(), |u| u.to_string());
                    println!(
                        "    slab {}: {}–{} units @ {}",
                        opt_num(s.slab_number.map(i64::from)),
                        opt_num(s.min_units),
                        upper,
                        money(s.rate_per_unit)
                    );
                }
            }
        }
        AdminCommand::Users => {
            for u in portal.admin_users().await? {
                println!(
                    "{:>4}  {:<16}  {:<24}  {}",
                    u.user_id,
                    u.username,
                    u.full_name.as_deref().unwrap_or("—"),
                    if u.active.unwrap_or(true) { "active" } else { "disabled" }
                );
            }
        }
        AdminCommand::AddUser {
            username,
            full_name,
            email,
            phone,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt("New administrator password")
                .interact()
                .context("could not read password")?;
            let user = portal
                .create_admin_user(&NewAdminUser {
                    full_name,
                    username,
                    email,
                    phone_number: phone,
                    password,
                })
                .await?;
            println!("Administrator {} created (id {}).", user.username, user.user_id);
        }
        AdminCommand::SetUserStatus { user_id, active } => {
            let user = portal.set_admin_status(user_id, active).await?;
            println!(
                "{} is now {}.",
                user.username,
                if user.active.unwrap_or(active) { "active" } else { "disabled" }
            );
        }
        AdminCommand::Complaints => {
            for c in portal.complaints().await? {
                println!(
                    "{:<10}  {:<10}  {:<8}  {}",
                    c.complaint_number.as_deref().unwrap_or("—"),
                    c.status.as_deref().unwrap_or("—"),
                    c.priority.as_deref().unwrap_or("—"),
                    c.subject.as_deref().unwrap_or("—")
                );
            }
        }
        AdminCommand::Resolve {
            complaint_id,
            resolution,
        } => {
            let complaint = portal
                .update_complaint(
                    complaint_id,
                    &gridport::api::types::ComplaintUpdate {
                        status: "RESOLVED".into(),
                        resolution: Some(resolution),
                        assigned_to: None,
                    },
                )
                .await?;
            println!(
                "Complaint {} marked {}.",
                complaint.complaint_number.as_deref().unwrap_or("?"),
                complaint.status.as_deref().unwrap_or("RESOLVED")
            );
        }
    }

    Ok(())
}

async fn run_customer(command: CustomerCommand, api: &ApiClient) -> Result<()> {
    let portal = CustomerPortal::new(api);

    match command {
        CustomerCommand::Dashboard => {
            let s = portal.summary().await?;
            println!("{}", style("Account summary").bold());
            println!("outstanding: {}", money(s.outstanding_amount));
            println!("last bill: {}", money(s.last_bill_amount));
            println!(
                "average consumption: {} units",
                s.average_consumption
                    .map_or_else(|| "—".into(), |v| format!("{v:.0}"))
            );
            println!("next due: {}", s.next_due_date.as_deref().unwrap_or("—"));
        }
        CustomerCommand::Bills => print_bills(&portal.bills().await?),
        CustomerCommand::Pending => print_bills(&portal.pending_bills().await?),
        CustomerCommand::Bill { bill_id, pdf, qr } => {
            let d = portal.bill_detail(bill_id).await?;
            println!(
                "{} — {}",
                style(d.invoice_number.as_deref().unwrap_or("bill")).bold(),
                d.bill_month.as_deref().unwrap_or("—")
            );
            println!("units: {}", opt_num(d.units_consumed));
            println!(
                "energy {}  fixed {}  duty {}  late fee {}",
                money(d.energy_charges),
                money(d.fixed_charges),
                money(d.electricity_duty),
                money(d.late_fee)
            );
            println!(
                "net payable {}  paid {}  balance {}",
                money(d.net_payable),
                money(d.amount_paid),
                money(d.balance_amount)
            );

            if let Some(path) = pdf {
                let bytes = portal.bill_pdf(bill_id).await?;
                std::fs::write(&path, bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Invoice PDF saved to {}", path.display());
            }
            if let Some(path) = qr {
                match portal.bill_qr(bill_id).await? {
                    Some(bytes) => {
                        std::fs::write(&path, bytes)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        println!("Payment QR saved to {}", path.display());
                    }
                    None => println!("No payment QR available for this bill."),
                }
            }
        }
        CustomerCommand::Pay {
            bill_id,
            amount,
            mode,
        } => {
            portal.pay(bill_id, amount, &mode).await?;
            println!("Payment of {} recorded via {mode}.", money(Some(amount)));
        }
        CustomerCommand::Advance { amount } => match amount {
            Some(amount) => {
                let resp = portal.add_advance(amount).await?;
                println!(
                    "{}",
                    resp.message
                        .unwrap_or_else(|| "Advance payment added.".into())
                );
                println!("Balance: {}", money(resp.balance));
            }
            None => {
                let resp = portal.advance_balance().await?;
                println!("Advance balance: {}", money(resp.balance));
            }
        },
        CustomerCommand::Usage => {
            for p in portal.consumption().await? {
                println!("{}-{:02}  {:>6} units", p.year, p.month, p.units);
            }
        }
        CustomerCommand::Complaints => {
            for c in portal.complaints().await? {
                println!(
                    "{:<10}  {:<10}  {}",
                    c.complaint_number.as_deref().unwrap_or("—"),
                    c.status.as_deref().unwrap_or("—"),
                    c.subject.as_deref().unwrap_or("—")
                );
                if let Some(resolution) = &c.resolution {
                    println!("            ↳ {resolution}");
                }
            }
        }
        CustomerCommand::Complain {
            category,
            priority,
            description,
        } => {
            portal
                .raise_complaint(&NewComplaint {
                    subject: format!("{category} issue"),
                    complaint_type: category,
                    priority,
                    description,
                })
                .await?;
            println!("Complaint submitted. Support will reach out soon.");
        }
    }

    Ok(())
}

/// Interactive signup form matching the registration payload.
fn prompt_registration() -> Result<RegisterRequest> {
    let text = |prompt: &str| -> Result<String> {
        Ok(dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?)
    };
    let optional = |prompt: &str| -> Result<Option<String>> {
        let value: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value.trim().to_string()).filter(|v| !v.is_empty()))
    };

    let username = text("Username")?;
    let password = dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    Ok(RegisterRequest {
        username,
        password,
        email: text("Email")?,
        full_name: text("Full name")?,
        phone_number: text("Phone number")?,
        address: text("Address")?,
        city: text("City")?,
        state: optional("State (optional)")?,
        pincode: text("PIN code")?,
        aadhar_number: optional("Aadhar number (optional)")?,
        area_id: None,
        advance_payment: None,
    })
}

fn print_bills(bills: &[gridport::api::types::BillSummary]) {
    if bills.is_empty() {
        println!("No bills.");
        return;
    }
    for b in bills {
        println!(
            "{:>5}  {:<18}  due {:<12}  {:<16}  net {}  balance {}",
            b.bill_id,
            b.invoice_number.as_deref().unwrap_or("—"),
            b.due_date.as_deref().unwrap_or("—"),
            b.bill_status.as_deref().unwrap_or("—"),
            money(b.net_payable),
            money(b.balance_amount)
        );
    }
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("₹{v:.2}"))
}

fn opt_num(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

/// Current billing cycle in `YYYY-MM` form.
fn current_billing_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────
