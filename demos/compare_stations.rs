use chrono::NaiveDate;
use kma_asos::{KmaAsos, StationId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let key = std::env::var("KMA_SERVICE_KEY")
        .expect("set KMA_SERVICE_KEY to your open data portal service key");
    let client = KmaAsos::new(&key);

    let start = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2023, 8, 7).unwrap();

    for (name, station) in [
        ("Seoul", StationId::SEOUL),
        ("Busan", StationId::BUSAN),
        ("Jeju", StationId::JEJU),
    ] {
        let records = client
            .daily()
            .station(station)
            .start(start)
            .end(end)
            .call()
            .await?;

        // avgTa is the portal's daily mean temperature field.
        let temps: Vec<&str> = records
            .iter()
            .filter_map(|r| r.get("avgTa").and_then(|v| v.as_str()))
            .collect();
        println!("{name} ({station}): {} days, avgTa {:?}", records.len(), temps);
    }

    Ok(())
}
