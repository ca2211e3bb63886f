use std::{io, sync::OnceLock};

use application::{
    page::{Dashboard, PropertiesPage, TeamPage, UsersPage},
    seed, App, Args, Config, Context, Service,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { service, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(service.into(), seed::store());

    let context = Context::new(service.clone());
    context.init();

    let mut team = TeamPage::new();
    team.refresh(&service).await;

    let users = UsersPage::new(team.users().to_vec());
    let properties = PropertiesPage::new(seed::properties());
    let dashboard =
        Dashboard::gather(team.users(), properties.properties(), team.audit_log());

    let mut app = App::new(context);
    _ = app.navigate("/");

    log::info!(
        "admin portal ready at `{}`: {} users, {} properties, {} audit \
         entries",
        app.route().path(),
        dashboard.stats.total_users,
        dashboard.stats.total_properties,
        team.audit_log().len(),
    );
    log::debug!("{} user accounts visible", users.users().len());

    Ok(())
}
