use chrono::NaiveDate;
use kma_asos::{KmaAsos, StationId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to watch the individual page requests.
    env_logger::init();

    let key = std::env::var("KMA_SERVICE_KEY")
        .expect("set KMA_SERVICE_KEY to your open data portal service key");
    let client = KmaAsos::new(&key);

    let records = client
        .daily()
        .station(StationId::SEOUL)
        .start(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        .end(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap())
        .call()
        .await?;

    println!("Fetched {} daily records for Seoul", records.len());
    if let Some(first) = records.first() {
        println!("First record:\n{}", serde_json::to_string_pretty(first)?);
    }

    Ok(())
}
