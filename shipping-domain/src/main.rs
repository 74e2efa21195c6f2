use chrono::{Duration, TimeZone, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shipping_domain::domain::{VoyageBuilder, VoyageIdentifier};
use shipping_domain::sample;
use shipping_domain::storage::{StorageError, VoyageRecord, rehydrate_json};

fn main() -> Result<(), StorageError> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=shipping_domain=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let start = Utc
        .with_ymd_and_hms(2008, 10, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let voyage = VoyageBuilder::new(VoyageIdentifier::new("V001"), sample::stockholm()?)
        .add_movement(sample::melbourne()?, start, start + Duration::days(2))
        .add_movement(
            sample::hangzhou()?,
            start + Duration::days(3),
            start + Duration::days(8),
        )
        .build();

    info!(%voyage, legs = voyage.schedule().len(), "assembled voyage");

    let json = VoyageRecord::from(&voyage).to_json()?;
    println!("{json}");

    let stored = rehydrate_json(&json)?;
    info!(
        same_voyage = stored.same_identity_as(&voyage),
        same_schedule = stored.schedule().same_value_as(voyage.schedule()),
        "read voyage back from storage"
    );

    println!();
    println!("Sample voyages:");
    for v in sample::voyages()? {
        let route = v
            .schedule()
            .carrier_movements()
            .iter()
            .map(|m| m.arrival_location().as_str())
            .fold(
                v.schedule()
                    .departure_location()
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
                |acc, next| format!("{acc} -> {next}"),
            );
        println!("  {v}: {route}");
    }

    Ok(())
}
