use chrono::{Duration, Utc};
use esas_screener::utils::logging::{init_logging, log_analysis_complete};
use esas_screener::utils::test_data::{seeded_rng, synthetic_history};
use esas_screener::{
    Screener, ScreeningCollection, aggregate_all, generate_summary, trend_overview,
};
use log::info;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    init_logging();

    let screener = Screener::new();
    info!(
        "Using protocol catalog revision {}",
        screener.catalog().version()
    );

    // Build deterministic synthetic histories: one improving patient, one
    // stable, one declining.
    let mut rng = seeded_rng(42);
    let now = Utc::now().naive_utc();
    let start = now - Duration::days(120);

    let mut collection = ScreeningCollection::new();
    for (patient_id, drift) in [
        ("patient-001", -1),
        ("patient-002", 0),
        ("patient-003", 1),
    ] {
        let history = synthetic_history(&screener, patient_id, 8, start, 14, drift, &mut rng)?;
        for record in history {
            collection.add(record);
        }
    }
    info!(
        "Generated {} screenings for {} patients",
        collection.record_count(),
        collection.patient_count()
    );

    // Aggregate statistics and trends for all patients in parallel
    let started = Instant::now();
    let statistics = aggregate_all(&collection, now, screener.config());
    let trends = trend_overview(&collection);

    let mut patients = collection.patients();
    patients.sort_unstable();
    for patient_id in patients {
        info!("\n{}", generate_summary(patient_id, &statistics[patient_id]));

        let trend = &trends[patient_id];
        info!(
            "Overall trend for {}: {} (confidence {:.1})",
            patient_id, trend.direction, trend.confidence
        );

        if let Some(plan) = screener.follow_up(collection.records(patient_id), now) {
            info!(
                "Follow-up for {}: needed={}, next recommended {}, priority {}",
                patient_id, plan.follow_up_needed, plan.next_recommended_date, plan.priority
            );
        }

        log_analysis_complete(
            patient_id,
            collection.records(patient_id).len(),
            Some(started.elapsed()),
        );
    }

    Ok(())
}
