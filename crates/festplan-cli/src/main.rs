use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use festplan_app::{App, PrivacyToggle, UserUpdate};
use festplan_core::settings::{Currency, Language};
use festplan_core::types::{Event, EventType, SubscriptionTier, UserRole};
use festplan_core::{calendar, stats};
use festplan_store::FileMedium;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "festplan")]
#[command(about = "FestPlan event planner", long_about = None)]
struct Cli {
    /// Profile data directory (defaults to the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Host,
    Vendor,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Wedding,
    Festival,
    Corporate,
    Birthday,
    Other,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrivacyArg {
    ShareDataForCredits,
    AnalyticsConsent,
}

#[derive(Subcommand)]
enum Commands {
    /// Session, dashboard and settings overview
    Status,

    /// Sign in (demo identity for the role unless a name is given)
    Login {
        #[arg(long, value_enum, default_value = "host")]
        role: RoleArg,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Update the signed-in profile
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// List events
    Events,

    /// Create an event
    AddEvent {
        name: String,
        #[arg(long, value_enum, default_value = "other")]
        kind: KindArg,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "TBD")]
        location: String,
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
    },

    /// List marketplace vendors
    Vendors,

    /// Hire a vendor for an event
    Hire { event_id: String, vendor_id: String },

    /// List community posts
    Posts,

    /// Publish a community post
    AddPost {
        content: String,
        #[arg(long)]
        tags: Vec<String>,
    },

    /// Like a post
    Like { post_id: String },

    /// Show settings
    Settings,

    /// Set the display language (en, hi, es)
    SetLanguage { language: String },

    /// Set the currency (INR, USD, EUR)
    SetCurrency { currency: String },

    /// Switch the subscription tier (FREE, PRO)
    SetTier { tier: String },

    /// Flip a privacy consent
    TogglePrivacy {
        #[arg(value_enum)]
        setting: PrivacyArg,
    },

    /// Print the GDPR settings export
    ExportData,

    /// GDPR deletion: reset settings and revoke all consent
    DeleteData,

    /// Festivals in the current and next month
    Festivals,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "festplan_cli=info,festplan_app=info,festplan_store=info".into()
            }),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => FileMedium::default_dir()?,
    };
    let medium = Arc::new(FileMedium::new(&data_dir)?);
    let mut app = App::open(medium)?;
    info!(dir = %data_dir.display(), "profile opened");

    match cli.command {
        Commands::Status => status(&app),
        Commands::Login { role, name, email } => {
            let role = match role {
                RoleArg::Host => UserRole::Host,
                RoleArg::Vendor => UserRole::Vendor,
            };
            let user = match name {
                Some(name) => {
                    let email = email.unwrap_or_else(|| format!("{}@festplan.app", Uuid::new_v4()));
                    app.auth.login(&app.store, &name, &email, role)?
                }
                None => app.auth.demo_login(&app.store, role)?,
            };
            println!("Signed in as {} ({:?})", user.name, user.role);
            Ok(())
        }
        Commands::Logout => {
            app.auth.logout(&app.store)?;
            println!("Signed out");
            Ok(())
        }
        Commands::UpdateProfile { name, email } => {
            if !app.auth.is_authenticated() {
                return Err(anyhow!("not signed in"));
            }
            app.auth.update_user(
                &app.store,
                UserUpdate {
                    name,
                    email,
                    ..Default::default()
                },
            )?;
            println!("Profile updated");
            Ok(())
        }
        Commands::Events => {
            for event in app.events.events() {
                println!(
                    "{}  {}  {:?}  {}  budget {:.0} / spent {:.0}  vendors {}",
                    event.id,
                    event.date,
                    event.event_type,
                    event.name,
                    event.budget,
                    event.spent,
                    event.vendors.len()
                );
            }
            Ok(())
        }
        Commands::AddEvent {
            name,
            kind,
            date,
            location,
            budget,
        } => {
            let event = Event {
                id: format!("e_{}", Uuid::new_v4()),
                name,
                event_type: match kind {
                    KindArg::Wedding => EventType::Wedding,
                    KindArg::Festival => EventType::Festival,
                    KindArg::Corporate => EventType::Corporate,
                    KindArg::Birthday => EventType::Birthday,
                    KindArg::Other => EventType::Other,
                },
                date,
                location,
                budget,
                spent: 0.0,
                expenses: vec![],
                tasks: vec![],
                guests: vec![],
                vendors: vec![],
                sustainability_score: 0,
                image: String::new(),
            };
            let id = event.id.clone();
            app.events.add_event(&app.store, event)?;
            println!("Created {id}");
            Ok(())
        }
        Commands::Vendors => {
            for vendor in app.events.vendors() {
                println!(
                    "{}  {:?}  {:.1}*  {}{}  {}",
                    vendor.id,
                    vendor.category,
                    vendor.rating,
                    vendor.name,
                    if vendor.is_eco_friendly { "  [eco]" } else { "" },
                    vendor.location
                );
            }
            Ok(())
        }
        Commands::Hire {
            event_id,
            vendor_id,
        } => {
            app.events.get_event(&event_id).ok_or_else(|| anyhow!("no such event {event_id}"))?;
            app.events.get_vendor(&vendor_id).ok_or_else(|| anyhow!("no such vendor {vendor_id}"))?;
            app.events.add_vendor_to_event(&app.store, &event_id, &vendor_id)?;
            println!("Hired {vendor_id} for {event_id}");
            Ok(())
        }
        Commands::Posts => {
            for post in app.community.posts() {
                println!(
                    "{}  {}  by {}  [{}♥ {}💬]  {}",
                    post.id, post.timestamp, post.author, post.likes, post.comments, post.title
                );
            }
            Ok(())
        }
        Commands::AddPost { content, tags } => {
            let author = app.auth.user().cloned();
            let post = app
                .community
                .add_post(&app.store, author.as_ref(), &content, tags, None)?;
            println!("Posted {}", post.id);
            Ok(())
        }
        Commands::Like { post_id } => {
            app.community.like_post(&app.store, &post_id)?;
            println!("Liked {post_id}");
            Ok(())
        }
        Commands::Settings => {
            println!("{}", app.settings.export_json()?);
            Ok(())
        }
        Commands::SetLanguage { language } => {
            let language = match language.as_str() {
                "en" => Language::En,
                "hi" => Language::Hi,
                "es" => Language::Es,
                other => return Err(anyhow!("unsupported language {other}")),
            };
            app.settings.set_language(&app.store, language)?;
            println!("Language updated");
            Ok(())
        }
        Commands::SetCurrency { currency } => {
            let currency = match currency.to_uppercase().as_str() {
                "INR" => Currency::Inr,
                "USD" => Currency::Usd,
                "EUR" => Currency::Eur,
                other => return Err(anyhow!("unsupported currency {other}")),
            };
            app.settings.set_currency(&app.store, currency)?;
            println!("Currency updated");
            Ok(())
        }
        Commands::SetTier { tier } => {
            let tier = match tier.to_uppercase().as_str() {
                "FREE" => SubscriptionTier::Free,
                "PRO" => SubscriptionTier::Pro,
                other => return Err(anyhow!("unsupported tier {other}")),
            };
            app.settings.set_subscription_tier(&app.store, tier)?;
            println!("Subscription updated");
            Ok(())
        }
        Commands::TogglePrivacy { setting } => {
            let toggle = match setting {
                PrivacyArg::ShareDataForCredits => PrivacyToggle::ShareDataForCredits,
                PrivacyArg::AnalyticsConsent => PrivacyToggle::AnalyticsConsent,
            };
            app.settings.toggle_privacy(&app.store, toggle)?;
            println!("{}", app.settings.export_json()?);
            Ok(())
        }
        Commands::ExportData => {
            println!("{}", app.settings.export_json()?);
            Ok(())
        }
        Commands::DeleteData => {
            app.settings.delete_user_data(&app.store)?;
            println!("All personal settings reset; consent revoked");
            Ok(())
        }
        Commands::Festivals => {
            for festival in calendar::upcoming_festivals(Utc::now().date_naive()) {
                println!("{}  {}  {}", festival.date, festival.name, festival.description);
            }
            Ok(())
        }
    }
}

fn status(app: &App) -> Result<()> {
    match app.auth.user() {
        Some(user) => println!("Signed in: {} <{}> ({:?})", user.name, user.email, user.role),
        None => println!("Signed out"),
    }
    let today = Utc::now().date_naive();
    let stats = stats::dashboard_stats(app.events.events(), today);
    println!(
        "Events: {}  budget {:.0}  spent {:.0}  open deadlines {}  eco score {}",
        stats.total_events,
        stats.active_budget,
        stats.total_spent,
        stats.upcoming_deadlines,
        stats.eco_score
    );
    let settings = app.settings.settings();
    println!(
        "Settings: language {:?}, currency {:?}, tier {:?}",
        settings.language, settings.currency, settings.subscription_tier
    );
    if let Some(weather) = app.weather.get() {
        println!(
            "Weather: {:.0}°C {} (cached)",
            weather.temperature, weather.condition
        );
    }
    Ok(())
}
