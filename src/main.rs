mod telemetry;

use taskzen_core::reminder::ReminderJob;
use taskzen_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("taskzen".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let job = ReminderJob::start(context);
    info!("Reminder job started");

    tokio::signal::ctrl_c().await?;
    job.stop();
    info!("Reminder job stopped");

    Ok(())
}
